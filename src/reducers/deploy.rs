//! LINE channel deployment, used by the wizard deploy step and the
//! dashboard channels view.

use crate::messages::{Command, Message};
use crate::models::DeployLineRequest;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::DeployLine {
            access_token,
            channel_secret,
        } => {
            if state.is_deploying {
                return true;
            }
            if access_token.trim().is_empty() || channel_secret.trim().is_empty() {
                cmds.push(Command::update_ui(|| {
                    crate::toast::error("請填寫 Channel Access Token 與 Channel Secret");
                }));
                return true;
            }
            // During onboarding the agent id is the confirmed config id.
            let agent_id = state
                .current_agent_id
                .clone()
                .or_else(|| state.review.as_ref().map(|r| r.config_id.clone()));
            let Some(agent_id) = agent_id else {
                cmds.push(Command::update_ui(|| {
                    crate::toast::error("找不到要部署的客服設定");
                }));
                return true;
            };
            state.is_deploying = true;
            let payload = serde_json::to_string(&DeployLineRequest {
                agent_id: &agent_id,
                access_token: access_token.trim(),
                channel_secret: channel_secret.trim(),
            })
            .unwrap_or_default();
            cmds.push(Command::DeployLineApi { payload });
            true
        }

        Message::DeployLineSucceeded { channel_id } => {
            state.is_deploying = false;
            state.deploy_done = true;
            state.deployed_channel_id = channel_id.clone();
            state.show_line_modal = false;
            cmds.push(Command::update_ui(|| {
                crate::toast::success("LINE 頻道部署完成");
            }));
            // The dashboard shows deploy state on the agent record.
            if state.current_agent_id.is_some() {
                cmds.push(Command::send(Message::RefetchAgent));
            }
            true
        }

        Message::DeployLineFailed(err) => {
            state.is_deploying = false;
            let err = err.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("部署失敗：{}", err));
            }));
            true
        }

        _ => false,
    }
}
