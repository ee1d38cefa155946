//! Executes the network commands produced by the update function. Each
//! variant spawns a fetch, decodes the reply, and dispatches the matching
//! success or failure message back through the normal update path.

use crate::messages::{Command, Message};
use crate::models::{
    Agent, AgentSummary, ChatResponse, DeployResponse, GeneratedFaqs, LoginResponse, OptimizedFaq,
    ReviewData, ReviewProposal, SessionResponse, SubagentInfo, TokenStats,
};
use crate::network::api_client::ApiClient;
use crate::state::dispatch_global_message;

fn describe_error(e: wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Deployment only succeeds on an explicit `"ok"` status; anything else is
/// surfaced as a failure with the server's message when one is present.
fn deploy_outcome(reply: DeployResponse) -> Message {
    if reply.status == "ok" {
        Message::DeployLineSucceeded {
            channel_id: reply.channel_id,
        }
    } else {
        Message::DeployLineFailed(
            reply
                .message
                .unwrap_or_else(|| format!("deploy failed (status: {})", reply.status)),
        )
    }
}

pub fn execute(cmd: Command) {
    match cmd {
        Command::InitSession { enter_wizard } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::init_session().await {
                    Ok(response) => match serde_json::from_str::<SessionResponse>(&response) {
                        Ok(session) => dispatch_global_message(Message::SessionInitialized {
                            session_id: session.session_id,
                            enter_wizard,
                        }),
                        Err(e) => dispatch_global_message(Message::SessionInitFailed(format!(
                            "Failed to parse session: {}",
                            e
                        ))),
                    },
                    Err(e) => {
                        dispatch_global_message(Message::SessionInitFailed(describe_error(e)))
                    }
                }
            });
        }

        Command::AdminLogin { payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::admin_login(&payload).await {
                    Ok(response) => match serde_json::from_str::<LoginResponse>(&response) {
                        Ok(login) => dispatch_global_message(Message::AdminLoginChecked {
                            is_admin: login.is_admin,
                        }),
                        Err(e) => dispatch_global_message(Message::AdminLoginFailed(format!(
                            "Failed to parse login reply: {}",
                            e
                        ))),
                    },
                    Err(e) => dispatch_global_message(Message::AdminLoginFailed(describe_error(e))),
                }
            });
        }

        Command::FetchAgents { user_id } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_agents(&user_id).await {
                    Ok(response) => match serde_json::from_str::<Vec<AgentSummary>>(&response) {
                        Ok(agents) => dispatch_global_message(Message::AgentsLoaded(agents)),
                        Err(e) => dispatch_global_message(Message::AgentsLoadFailed(format!(
                            "Failed to parse agent list: {}",
                            e
                        ))),
                    },
                    Err(e) => dispatch_global_message(Message::AgentsLoadFailed(describe_error(e))),
                }
            });
        }

        Command::FetchAgent { agent_id, user_id } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_agent(&agent_id, &user_id).await {
                    Ok(response) => match serde_json::from_str::<Agent>(&response) {
                        Ok(agent) => {
                            dispatch_global_message(Message::AgentLoaded(Box::new(agent)))
                        }
                        Err(e) => dispatch_global_message(Message::AgentLoadFailed(format!(
                            "Failed to parse agent: {}",
                            e
                        ))),
                    },
                    Err(e) => dispatch_global_message(Message::AgentLoadFailed(describe_error(e))),
                }
            });
        }

        Command::FetchTokenStats { agent_id, user_id } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_agent_stats(&agent_id, &user_id).await {
                    Ok(response) => match serde_json::from_str::<TokenStats>(&response) {
                        Ok(stats) => dispatch_global_message(Message::TokenStatsLoaded(stats)),
                        Err(e) => dispatch_global_message(Message::TokenStatsFailed(format!(
                            "Failed to parse token stats: {}",
                            e
                        ))),
                    },
                    Err(e) => dispatch_global_message(Message::TokenStatsFailed(describe_error(e))),
                }
            });
        }

        Command::FetchAvailableSubagents { agent_id } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_available_subagents(&agent_id).await {
                    Ok(response) => match serde_json::from_str::<Vec<SubagentInfo>>(&response) {
                        Ok(list) => {
                            dispatch_global_message(Message::AvailableSubagentsLoaded(list))
                        }
                        Err(e) => dispatch_global_message(Message::AvailableSubagentsFailed(
                            format!("Failed to parse subagent list: {}", e),
                        )),
                    },
                    Err(e) => dispatch_global_message(Message::AvailableSubagentsFailed(
                        describe_error(e),
                    )),
                }
            });
        }

        Command::AddSubagent { agent_id, payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::add_subagent(&agent_id, &payload).await {
                    Ok(_) => dispatch_global_message(Message::UnlockSubagentSucceeded),
                    Err(e) => {
                        dispatch_global_message(Message::UnlockSubagentFailed(describe_error(e)))
                    }
                }
            });
        }

        Command::SaveFaqsApi { agent_id, payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::update_faqs(&agent_id, &payload).await {
                    Ok(_) => dispatch_global_message(Message::SaveSucceeded),
                    Err(e) => dispatch_global_message(Message::SaveFailed(describe_error(e))),
                }
            });
        }

        Command::SaveHandoffApi { agent_id, payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::update_handoff(&agent_id, &payload).await {
                    Ok(_) => dispatch_global_message(Message::SaveSucceeded),
                    Err(e) => dispatch_global_message(Message::SaveFailed(describe_error(e))),
                }
            });
        }

        Command::SaveConfigApi { agent_id, payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::update_config(&agent_id, &payload).await {
                    Ok(_) => dispatch_global_message(Message::SaveSucceeded),
                    Err(e) => dispatch_global_message(Message::SaveFailed(describe_error(e))),
                }
            });
        }

        Command::GeneratePromptApi { payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::generate_prompt(&payload).await {
                    Ok(response) => match serde_json::from_str::<ReviewProposal>(&response) {
                        Ok(proposal) => dispatch_global_message(Message::ReviewProposalReceived(
                            ReviewData::from_proposal(proposal),
                        )),
                        Err(e) => dispatch_global_message(Message::GeneratePromptFailed(format!(
                            "Failed to parse proposal: {}",
                            e
                        ))),
                    },
                    Err(e) => {
                        dispatch_global_message(Message::GeneratePromptFailed(describe_error(e)))
                    }
                }
            });
        }

        Command::ConfirmSetupApi { payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::confirm_setup(&payload).await {
                    Ok(_) => dispatch_global_message(Message::ConfirmSetupSucceeded),
                    Err(e) => {
                        dispatch_global_message(Message::ConfirmSetupFailed(describe_error(e)))
                    }
                }
            });
        }

        Command::GenerateFaqsApi { payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::generate_faqs(&payload).await {
                    Ok(response) => match serde_json::from_str::<GeneratedFaqs>(&response) {
                        Ok(generated) => {
                            dispatch_global_message(Message::GeneratedFaqsReceived(generated.faqs))
                        }
                        Err(e) => dispatch_global_message(Message::GenerateFaqsFailed(format!(
                            "Failed to parse generated FAQs: {}",
                            e
                        ))),
                    },
                    Err(e) => {
                        dispatch_global_message(Message::GenerateFaqsFailed(describe_error(e)))
                    }
                }
            });
        }

        Command::OptimizeFaqApi { faq_id, payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::optimize_faq(&payload).await {
                    Ok(response) => match serde_json::from_str::<OptimizedFaq>(&response) {
                        Ok(OptimizedFaq {
                            error: Some(error), ..
                        }) => dispatch_global_message(Message::OptimizeFaqFailed {
                            id: faq_id,
                            error,
                        }),
                        Ok(optimized) => dispatch_global_message(Message::OptimizedFaqReceived {
                            id: faq_id,
                            question: optimized.q.unwrap_or_default(),
                            answer: optimized.a.unwrap_or_default(),
                        }),
                        Err(e) => dispatch_global_message(Message::OptimizeFaqFailed {
                            id: faq_id,
                            error: format!("Failed to parse optimized FAQ: {}", e),
                        }),
                    },
                    Err(e) => dispatch_global_message(Message::OptimizeFaqFailed {
                        id: faq_id,
                        error: describe_error(e),
                    }),
                }
            });
        }

        Command::SendChatApi { payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::chat(&payload).await {
                    Ok(response) => match serde_json::from_str::<ChatResponse>(&response) {
                        Ok(reply) => dispatch_global_message(Message::ChatResponseReceived(reply)),
                        Err(e) => dispatch_global_message(Message::ChatRequestFailed(format!(
                            "Failed to parse chat reply: {}",
                            e
                        ))),
                    },
                    Err(e) => dispatch_global_message(Message::ChatRequestFailed(describe_error(e))),
                }
            });
        }

        Command::DeployLineApi { payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::deploy_line(&payload).await {
                    Ok(response) => match serde_json::from_str::<DeployResponse>(&response) {
                        Ok(reply) => dispatch_global_message(deploy_outcome(reply)),
                        Err(e) => dispatch_global_message(Message::DeployLineFailed(format!(
                            "Failed to parse deploy reply: {}",
                            e
                        ))),
                    },
                    Err(e) => dispatch_global_message(Message::DeployLineFailed(describe_error(e))),
                }
            });
        }

        // Non-network commands are handled inline by the dispatcher.
        Command::SendMessage(_) | Command::UpdateUI(_) | Command::NoOp => {}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::deploy_outcome;
    use crate::messages::Message;
    use crate::models::DeployResponse;

    fn reply(status: &str, channel_id: Option<&str>, message: Option<&str>) -> DeployResponse {
        DeployResponse {
            status: status.to_string(),
            channel_id: channel_id.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn only_an_ok_status_counts_as_deployed() {
        assert!(matches!(
            deploy_outcome(reply("ok", Some("C123"), None)),
            Message::DeployLineSucceeded { channel_id: Some(id) } if id == "C123"
        ));
        assert!(matches!(
            deploy_outcome(reply("error", None, Some("bad token"))),
            Message::DeployLineFailed(msg) if msg == "bad token"
        ));
        // Unknown statuses are failures too, not silent successes.
        assert!(matches!(
            deploy_outcome(reply("pending", Some("C123"), None)),
            Message::DeployLineFailed(_)
        ));
    }
}
