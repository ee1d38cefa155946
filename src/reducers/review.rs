//! Review reducer: proposal generation, inline FAQ reconciliation and the
//! final confirmation that unlocks the demo step.
//!
//! Review edits are mirrored into the wizard draft so going back a step
//! never loses work. The two lists share FAQ ids by construction.

use crate::constants::{CUSTOM_TRIGGER_JOIN, MIN_FAQ_WARNING};
use crate::messages::{Command, Message};
use crate::models::{ChatMessage, ConfirmSetupRequest, Faq, GeneratePromptRequest, WireFaq};
use crate::state::{ActiveView, AppState};

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::RequestGeneratePrompt => {
            if state.is_generating_review {
                return true;
            }
            state.is_generating_review = true;
            let faqs: Vec<WireFaq> = state
                .form
                .faqs
                .iter()
                .filter(|f| !f.is_blank())
                .map(WireFaq::from_faq)
                .collect();
            let payload = serde_json::to_string(&GeneratePromptRequest {
                brand_description: &state.form.brand_description,
                website_url: &state.form.website_url,
                tone: &state.form.tone,
                tone_avoid: &state.form.tone_avoid,
                faqs,
                handoff_triggers: &state.form.handoff_triggers,
                handoff_custom_trigger: &state.form.handoff_custom_trigger,
            })
            .unwrap_or_default();
            cmds.push(Command::GeneratePromptApi { payload });
            true
        }

        Message::ReviewProposalReceived(review) => {
            state.is_generating_review = false;
            // The proposal becomes the editable source of truth; the wizard
            // draft adopts its FAQ list so both stay consistent.
            state.form.faqs = review.faqs.clone();
            state.review = Some(review.clone());
            true
        }

        Message::GeneratePromptFailed(err) => {
            state.is_generating_review = false;
            let err = err.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("設定生成失敗：{}", err));
            }));
            true
        }

        Message::ReviewAddFaq => {
            if let Some(review) = state.review.as_mut() {
                let faq = Faq::blank();
                review.faqs.push(faq.clone());
                state.form.faqs.push(faq);
            }
            true
        }

        Message::ReviewUpdateFaqQuestion { id, value } => {
            edit_mirrored(state, id, |faq| faq.question = value.clone());
            true
        }

        Message::ReviewUpdateFaqAnswer { id, value } => {
            edit_mirrored(state, id, |faq| faq.answer = value.clone());
            true
        }

        Message::ReviewRemoveFaq(id) => {
            let Some(review) = state.review.as_mut() else {
                return true;
            };
            // Minimum-one invariant: the agent must keep at least one FAQ.
            if review.faqs.len() <= 1 {
                cmds.push(Command::update_ui(|| {
                    crate::toast::error(MIN_FAQ_WARNING);
                }));
                return true;
            }
            review.faqs.retain(|f| &f.id != id);
            state.form.faqs.retain(|f| &f.id != id);
            true
        }

        Message::BackToWizard => {
            // Re-partition the proposal's trigger list into the wizard's
            // standard checkboxes plus the custom free-text field.
            if let Some(review) = state.review.as_ref() {
                let mut standard = Vec::new();
                let mut custom_parts: Vec<&str> = Vec::new();
                for trigger in &review.handoff_triggers {
                    if crate::triggers::is_standard(trigger) {
                        standard.push(trigger.clone());
                    } else {
                        custom_parts.push(trigger);
                    }
                }
                state.form.handoff_triggers = standard;
                if state.form.handoff_custom_trigger.trim().is_empty() {
                    state.form.handoff_custom_trigger = custom_parts.join(CUSTOM_TRIGGER_JOIN);
                }
            }
            state.wizard_step = 0;
            state.active_view = ActiveView::Wizard;
            true
        }

        Message::ConfirmSetup => {
            if state.is_confirming {
                return true;
            }
            let (Some(review), Some(session_id)) = (&state.review, &state.session_id) else {
                return true;
            };
            state.is_confirming = true;
            let faqs: Vec<WireFaq> = review
                .faqs
                .iter()
                .filter(|f| !f.is_blank())
                .map(WireFaq::from_faq)
                .collect();
            let payload = serde_json::to_string(&ConfirmSetupRequest {
                config_id: &review.config_id,
                session_id,
                faqs,
                handoff_triggers: &review.handoff_triggers,
                handoff_preview: &review.handoff_preview,
            })
            .unwrap_or_default();
            cmds.push(Command::ConfirmSetupApi { payload });
            true
        }

        Message::ConfirmSetupSucceeded => {
            state.is_confirming = false;
            // Only a confirmed setup reaches the demo; start it clean.
            state.transcript = vec![ChatMessage::greeting()];
            state.active_view = ActiveView::Demo;
            true
        }

        Message::ConfirmSetupFailed(err) => {
            state.is_confirming = false;
            let err = err.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("確認失敗：{}", err));
            }));
            true
        }

        _ => false,
    }
}

/// Apply one edit to the review copy and its mirror in the wizard draft.
fn edit_mirrored<F>(state: &mut AppState, id: &str, mut edit: F)
where
    F: FnMut(&mut Faq),
{
    if let Some(review) = state.review.as_mut() {
        if let Some(faq) = review.faqs.iter_mut().find(|f| f.id == id) {
            edit(faq);
        }
    }
    if let Some(faq) = state.form.faqs.iter_mut().find(|f| f.id == id) {
        edit(faq);
    }
}
