//! Session bootstrap, platform login and the agent home list.

use crate::messages::{Command, Message};
use crate::models::AdminLoginRequest;
use crate::state::{ActiveView, AppState};

/// Returns `true` when the message was handled here.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::NavigateTo(view) => {
            state.active_view = *view;
            if *view == ActiveView::AgentHome && !state.line_user_id.is_empty() {
                cmds.push(Command::send(Message::LoadAgents));
            }
            true
        }

        Message::StartSetup => {
            // Fresh wizard run: a new draft, a new session, no stale review.
            state.form = Default::default();
            state.wizard_step = 0;
            state.review = None;
            state.transcript = vec![crate::models::ChatMessage::greeting()];
            state.deploy_done = false;
            state.deployed_channel_id = None;
            state.is_initializing_session = true;
            cmds.push(Command::InitSession { enter_wizard: true });
            true
        }

        Message::SessionInitialized {
            session_id,
            enter_wizard,
        } => {
            state.session_id = Some(session_id.clone());
            state.is_initializing_session = false;
            if *enter_wizard {
                state.active_view = ActiveView::Wizard;
            }
            true
        }

        Message::SessionInitFailed(err) => {
            state.is_initializing_session = false;
            let err = err.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("無法建立對話 session：{}", err));
            }));
            true
        }

        Message::PlatformLogin { user_id, name } => {
            state.line_user_id = user_id.clone();
            state.line_user_name = name.clone();
            crate::cookies::store_login(user_id, name);
            let payload = serde_json::to_string(&AdminLoginRequest {
                user_id: user_id.as_str(),
                name: name.as_str(),
            })
            .unwrap_or_default();
            cmds.push(Command::AdminLogin { payload });
            true
        }

        Message::AdminLoginChecked { is_admin } => {
            state.is_admin = *is_admin;
            if *is_admin {
                state.active_view = ActiveView::AgentHome;
                cmds.push(Command::send(Message::LoadAgents));
            } else {
                cmds.push(Command::update_ui(|| {
                    crate::toast::error("此帳號沒有管理權限");
                }));
            }
            true
        }

        Message::AdminLoginFailed(err) => {
            let err = err.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("登入失敗：{}", err));
            }));
            true
        }

        Message::LoadAgents => {
            state.is_loading_agents = true;
            cmds.push(Command::FetchAgents {
                user_id: state.line_user_id.clone(),
            });
            true
        }

        Message::AgentsLoaded(agents) => {
            state.is_loading_agents = false;
            state.agents = agents.clone();
            true
        }

        Message::AgentsLoadFailed(err) => {
            state.is_loading_agents = false;
            let err = err.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("無法載入客服列表：{}", err));
            }));
            true
        }

        Message::SelectAgent(agent_id) => {
            state.current_agent_id = Some(agent_id.clone());
            state.current_agent = None;
            state.editing_subagent = None;
            state.dashboard_menu = crate::state::DashboardMenu::Agents;
            state.token_stats = None;
            state.active_view = ActiveView::Dashboard;
            cmds.push(Command::FetchAgent {
                agent_id: agent_id.clone(),
                user_id: state.line_user_id.clone(),
            });
            true
        }

        _ => false,
    }
}
