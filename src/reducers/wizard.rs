//! Wizard reducer: the four-step form, the FAQ generation helper and the
//! per-FAQ optimize calls.

use crate::constants::CUSTOM_TRIGGER_SENTINEL;
use crate::messages::{Command, Message};
use crate::models::{Faq, GenerateFaqsRequest, OptimizeFaqRequest};
use crate::state::{ActiveView, AppState};

pub const WIZARD_STEP_COUNT: usize = 4;
const FAQ_STEP: usize = 2;

pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::WizardNext => {
            // Step 0 has a hard gate; the button is disabled but a stale
            // handler must not advance an invalid draft either.
            if state.wizard_step == 0 && !state.form.brand_step_complete() {
                return true;
            }
            if state.wizard_step == FAQ_STEP {
                state.form.prune_blank_faqs();
            }
            if state.wizard_step + 1 < WIZARD_STEP_COUNT {
                state.wizard_step += 1;
            } else {
                state.active_view = ActiveView::Review;
                if state.review.is_none() && !state.is_generating_review {
                    cmds.push(Command::send(Message::RequestGeneratePrompt));
                }
            }
            true
        }

        Message::WizardBack => {
            state.wizard_step = state.wizard_step.saturating_sub(1);
            true
        }

        Message::UpdateBrandDescription(value) => {
            state.form.brand_description = value.clone();
            true
        }

        Message::UpdateWebsiteUrl(value) => {
            state.form.website_url = value.clone();
            true
        }

        Message::UpdateTone(value) => {
            state.form.tone = value.clone();
            true
        }

        Message::UpdateToneAvoid(value) => {
            state.form.tone_avoid = value.clone();
            true
        }

        Message::AddFaq => {
            state.form.faqs.push(Faq::blank());
            true
        }

        Message::UpdateFaqQuestion { id, value } => {
            if let Some(faq) = state.form.faqs.iter_mut().find(|f| &f.id == id) {
                faq.question = value.clone();
            }
            true
        }

        Message::UpdateFaqAnswer { id, value } => {
            if let Some(faq) = state.form.faqs.iter_mut().find(|f| &f.id == id) {
                faq.answer = value.clone();
            }
            true
        }

        Message::RemoveFaq(id) => {
            state.form.faqs.retain(|f| &f.id != id);
            true
        }

        Message::ToggleHandoffTrigger(value) => {
            crate::triggers::toggle(&mut state.form.handoff_triggers, value);
            true
        }

        Message::ToggleOtherTrigger => {
            // Checked state is proxied by the custom field being non-empty;
            // first check stores the sentinel until real text replaces it.
            if state.form.handoff_custom_trigger.is_empty() {
                state.form.handoff_custom_trigger = CUSTOM_TRIGGER_SENTINEL.to_string();
            } else {
                state.form.handoff_custom_trigger.clear();
            }
            true
        }

        Message::UpdateCustomTrigger(value) => {
            state.form.handoff_custom_trigger = value.clone();
            true
        }

        Message::RequestGenerateFaqs => {
            if state.is_generating_faqs {
                return true;
            }
            state.is_generating_faqs = true;
            let payload = serde_json::to_string(&GenerateFaqsRequest {
                brand_description: &state.form.brand_description,
                website_url: &state.form.website_url,
                line_user_id: &state.line_user_id,
            })
            .unwrap_or_default();
            cmds.push(Command::GenerateFaqsApi { payload });
            true
        }

        Message::GeneratedFaqsReceived(wire_faqs) => {
            state.is_generating_faqs = false;
            // Suggestions extend the list; they never replace user input.
            state
                .form
                .faqs
                .extend(wire_faqs.iter().map(|f| Faq::new(&f.question, &f.answer)));
            let count = wire_faqs.len();
            cmds.push(Command::update_ui(move || {
                crate::toast::success(&format!("已產生 {} 組 FAQ", count));
            }));
            true
        }

        Message::GenerateFaqsFailed(err) => {
            state.is_generating_faqs = false;
            let err = err.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("FAQ 產生失敗：{}", err));
            }));
            true
        }

        Message::RequestOptimizeFaq(id) => {
            if state.optimizing_faqs.contains(id) {
                return true;
            }
            let (question, answer) = match state.find_faq_mut(id) {
                Some(faq) => (faq.question.clone(), faq.answer.clone()),
                None => return true,
            };
            state.optimizing_faqs.insert(id.clone());
            let payload = serde_json::to_string(&OptimizeFaqRequest {
                question: &question,
                answer: &answer,
                line_user_id: &state.line_user_id,
            })
            .unwrap_or_default();
            cmds.push(Command::OptimizeFaqApi {
                faq_id: id.clone(),
                payload,
            });
            true
        }

        Message::OptimizedFaqReceived {
            id,
            question,
            answer,
        } => {
            state.optimizing_faqs.remove(id);
            update_faq_everywhere(state, id, question, answer);
            true
        }

        Message::OptimizeFaqFailed { id, error } => {
            state.optimizing_faqs.remove(id);
            let error = error.clone();
            cmds.push(Command::update_ui(move || {
                crate::toast::error(&format!("FAQ 優化失敗：{}", error));
            }));
            true
        }

        _ => false,
    }
}

/// Apply an optimized pair to every surface holding the id. The review list
/// and the wizard form share ids by construction, so one rewrite keeps them
/// in sync.
fn update_faq_everywhere(state: &mut AppState, id: &str, question: &str, answer: &str) {
    for faq in state.form.faqs.iter_mut().filter(|f| f.id == id) {
        faq.question = question.to_string();
        faq.answer = answer.to_string();
    }
    if let Some(review) = state.review.as_mut() {
        for faq in review.faqs.iter_mut().filter(|f| f.id == id) {
            faq.question = question.to_string();
            faq.answer = answer.to_string();
        }
    }
    for faq in state.draft_faqs.iter_mut().filter(|f| f.id == id) {
        faq.question = question.to_string();
        faq.answer = answer.to_string();
    }
}
