//! Playground chat reducer, shared by the wizard demo step and the
//! dashboard playground. Stateless per turn: every request carries the
//! full prior transcript.

use crate::constants::CHAT_FAILURE_MESSAGE;
use crate::messages::{Command, Message};
use crate::models::{ChatMessage, ChatRequest, HistoryEntry};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::SendChatMessage(text) => {
            let text = text.trim();
            if text.is_empty() || state.is_sending_chat {
                return true;
            }
            let Some(session_id) = state.session_id.clone() else {
                cmds.push(Command::update_ui(|| {
                    crate::toast::error("尚未建立對話 session");
                }));
                return true;
            };

            // History is everything said before this turn.
            let history: Vec<HistoryEntry> = state
                .transcript
                .iter()
                .map(|m| HistoryEntry {
                    role: m.role.clone(),
                    content: m.content.clone(),
                })
                .collect();

            state.transcript.push(ChatMessage::user(text));
            state.is_sending_chat = true;

            let payload = serde_json::to_string(&ChatRequest {
                message: text,
                history,
                line_user_id: &state.line_user_id,
                user_name: &state.line_user_name,
                agent_id: state.current_agent_id.as_deref(),
                session_id: &session_id,
            })
            .unwrap_or_default();
            cmds.push(Command::SendChatApi { payload });
            true
        }

        Message::ChatResponseReceived(resp) => {
            state.is_sending_chat = false;
            let mut reply = ChatMessage::model(&resp.response_text);
            reply.related_faqs = resp.related_faq_list.clone();
            reply.handoff = resp.handoff_result.clone();
            state.transcript.push(reply);
            true
        }

        Message::ChatRequestFailed(err) => {
            // One canned failure line in the transcript, no retry.
            state.is_sending_chat = false;
            state.transcript.push(ChatMessage::model(CHAT_FAILURE_MESSAGE));
            web_sys::console::error_1(&format!("Chat request failed: {}", err).into());
            true
        }

        Message::ResetChat => {
            state.transcript = vec![ChatMessage::greeting()];
            state.is_sending_chat = false;
            true
        }

        Message::ResetPlaygroundChat => {
            state.transcript = vec![ChatMessage::greeting()];
            state.is_sending_chat = false;
            // The dashboard variant also scopes a fresh conversation.
            cmds.push(Command::InitSession {
                enter_wizard: false,
            });
            true
        }

        _ => false,
    }
}
