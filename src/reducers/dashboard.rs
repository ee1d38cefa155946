//! Backend dashboard reducer: menu switching, the three sub-agent editors,
//! token stats and the sub-agent marketplace.

use crate::messages::{Command, ConfigField, Message};
use crate::models::{
    AddSubagentRequest, ConfigUpdates, Faq, UpdateConfigRequest, UpdateFaqsRequest,
    UpdateHandoffRequest, WireFaq,
};
use crate::state::{AppState, DashboardMenu, SubagentEditor};

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::SetDashboardMenu(menu) => {
            state.dashboard_menu = *menu;
            // Token stats refresh only on the agents tab with no editor
            // open, so unrelated tab switches don't hammer the endpoint.
            let wants_stats =
                *menu == DashboardMenu::Dashboard || *menu == DashboardMenu::Agents;
            if wants_stats && state.editing_subagent.is_none() {
                push_stats_fetch(state, cmds);
            }
            // The playground transcript survives tab switches; a fresh chat
            // is only scoped when no session exists yet.
            if *menu == DashboardMenu::Playground && state.session_id.is_none() {
                cmds.push(Command::send(Message::ResetPlaygroundChat));
            }
            true
        }

        Message::OpenSubagentEditor(editor) => {
            state.editing_subagent = Some(*editor);
            rebuild_drafts(state);
            if *editor == SubagentEditor::RootAdmin {
                push_stats_fetch(state, cmds);
            }
            true
        }

        Message::CloseSubagentEditor => {
            state.editing_subagent = None;
            true
        }

        Message::AgentLoaded(agent) => {
            state.current_agent_id = Some(agent.id.clone());
            state.current_agent = Some((**agent).clone());
            rebuild_drafts(state);
            true
        }

        Message::AgentLoadFailed(err) => {
            let err = err.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("無法載入客服設定：{}", err));
            }));
            true
        }

        Message::RefetchAgent => {
            if let Some(agent_id) = state.current_agent_id.clone() {
                cmds.push(Command::FetchAgent {
                    agent_id,
                    user_id: state.line_user_id.clone(),
                });
            }
            true
        }

        Message::DraftAddFaq => {
            state.draft_faqs.push(Faq::blank());
            true
        }

        Message::DraftUpdateFaqQuestion { id, value } => {
            if let Some(faq) = state.draft_faqs.iter_mut().find(|f| &f.id == id) {
                faq.question = value.clone();
            }
            true
        }

        Message::DraftUpdateFaqAnswer { id, value } => {
            if let Some(faq) = state.draft_faqs.iter_mut().find(|f| &f.id == id) {
                faq.answer = value.clone();
            }
            true
        }

        Message::DraftRemoveFaq(id) => {
            if state.draft_faqs.len() <= 1 {
                cmds.push(Command::update_ui(|| {
                    crate::toast::error(crate::constants::MIN_FAQ_WARNING);
                }));
                return true;
            }
            state.draft_faqs.retain(|f| &f.id != id);
            true
        }

        Message::DraftToggleTrigger(value) => {
            crate::triggers::toggle(&mut state.draft_triggers, value);
            true
        }

        Message::DraftUpdateCustomTrigger(value) => {
            state.draft_custom_trigger = value.clone();
            true
        }

        Message::DraftUpdateConfigField { field, value } => {
            let target = match field {
                ConfigField::MerchantName => &mut state.draft_config.merchant_name,
                ConfigField::Services => &mut state.draft_config.services,
                ConfigField::WebsiteUrl => &mut state.draft_config.website_url,
                ConfigField::Tone => &mut state.draft_config.tone,
                ConfigField::ToneAvoid => &mut state.draft_config.tone_avoid,
            };
            *target = value.clone();
            true
        }

        Message::SaveFaqs => {
            if state.is_saving {
                return true;
            }
            let Some(agent_id) = state.current_agent_id.clone() else {
                return true;
            };
            state.is_saving = true;
            let faqs: Vec<WireFaq> = state
                .draft_faqs
                .iter()
                .filter(|f| !f.is_blank())
                .map(WireFaq::from_faq)
                .collect();
            let payload = serde_json::to_string(&UpdateFaqsRequest {
                user_id: &state.line_user_id,
                faqs,
            })
            .unwrap_or_default();
            cmds.push(Command::SaveFaqsApi { agent_id, payload });
            true
        }

        Message::SaveHandoff => {
            if state.is_saving {
                return true;
            }
            let Some(agent_id) = state.current_agent_id.clone() else {
                return true;
            };
            state.is_saving = true;
            let payload = serde_json::to_string(&UpdateHandoffRequest {
                user_id: &state.line_user_id,
                handoff_triggers: &state.draft_triggers,
                handoff_custom: &state.draft_custom_trigger,
            })
            .unwrap_or_default();
            cmds.push(Command::SaveHandoffApi { agent_id, payload });
            true
        }

        Message::SaveConfig => {
            if state.is_saving {
                return true;
            }
            let Some(agent_id) = state.current_agent_id.clone() else {
                return true;
            };
            state.is_saving = true;
            // Only the brand/tone slice travels here. FAQ and handoff state
            // have dedicated endpoints and must not ride along.
            let updates = ConfigUpdates::from_raw(&state.draft_config);
            let payload = serde_json::to_string(&UpdateConfigRequest {
                user_id: &state.line_user_id,
                updates: &updates,
            })
            .unwrap_or_default();
            cmds.push(Command::SaveConfigApi { agent_id, payload });
            true
        }

        Message::SaveSucceeded => {
            state.is_saving = false;
            cmds.push(Command::update_ui(|| {
                crate::toast::success("已儲存");
            }));
            // Resynchronize every view from the persisted record.
            cmds.push(Command::send(Message::RefetchAgent));
            true
        }

        Message::SaveFailed(err) => {
            state.is_saving = false;
            let err = err.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("儲存失敗：{}", err));
            }));
            true
        }

        Message::TokenStatsLoaded(stats) => {
            state.token_stats = Some(stats.clone());
            true
        }

        Message::TokenStatsFailed(err) => {
            web_sys::console::warn_1(&format!("Failed to load token stats: {}", err).into());
            true
        }

        Message::ShowSubagentMarket(show) => {
            state.show_market_modal = *show;
            if *show {
                if let Some(agent_id) = state.current_agent_id.clone() {
                    cmds.push(Command::FetchAvailableSubagents { agent_id });
                }
            }
            true
        }

        Message::AvailableSubagentsLoaded(list) => {
            state.available_subagents = list.clone();
            true
        }

        Message::AvailableSubagentsFailed(err) => {
            let err = err.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("無法載入可用模組：{}", err));
            }));
            true
        }

        Message::UnlockSubagent(subagent_id) => {
            let Some(agent_id) = state.current_agent_id.clone() else {
                return true;
            };
            let payload = serde_json::to_string(&AddSubagentRequest {
                subagent_id: subagent_id.as_str(),
            })
            .unwrap_or_default();
            cmds.push(Command::AddSubagent { agent_id, payload });
            true
        }

        Message::UnlockSubagentSucceeded => {
            cmds.push(Command::update_ui(|| {
                crate::toast::success("模組已解鎖");
            }));
            cmds.push(Command::send(Message::RefetchAgent));
            if let Some(agent_id) = state.current_agent_id.clone() {
                cmds.push(Command::FetchAvailableSubagents { agent_id });
            }
            true
        }

        Message::UnlockSubagentFailed(err) => {
            let err = err.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("解鎖失敗：{}", err));
            }));
            true
        }

        Message::ShowLineModal(show) => {
            state.show_line_modal = *show;
            true
        }

        _ => false,
    }
}

fn push_stats_fetch(state: &AppState, cmds: &mut Vec<Command>) {
    if let Some(agent_id) = state.current_agent_id.clone() {
        cmds.push(Command::FetchTokenStats {
            agent_id,
            user_id: state.line_user_id.clone(),
        });
    }
}

/// Copy the persisted agent config into the local editor drafts. The custom
/// trigger field keeps in-progress text; everything else is replaced.
fn rebuild_drafts(state: &mut AppState) {
    let raw = match state.current_agent.as_ref() {
        Some(agent) => agent.config.raw_config.clone(),
        None => return,
    };
    state.draft_faqs = raw
        .faqs
        .iter()
        .map(|f| Faq::new(&f.question, &f.answer))
        .collect();
    crate::triggers::apply_parsed(
        raw.handoff_logic.as_deref(),
        &mut state.draft_triggers,
        &mut state.draft_custom_trigger,
    );
    state.draft_config = raw;
}
