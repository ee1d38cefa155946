use wasm_bindgen_test::*;

use crate::constants::{CUSTOM_TRIGGER_SENTINEL, STANDARD_HANDOFF_OPTIONS};
use crate::messages::{Command, Message};
use crate::models::{
    Agent, AgentConfig, ChatResponse, Faq, HandoffResult, RawConfig, RelatedFaq, ReviewData,
    WireFaq,
};
use crate::state::{ActiveView, AppState, DashboardMenu};
use crate::update::update;

wasm_bindgen_test_configure!(run_in_browser);

fn review_with_faqs(faqs: Vec<Faq>) -> ReviewData {
    ReviewData {
        config_id: "cfg-1".to_string(),
        faqs,
        handoff_triggers: vec![STANDARD_HANDOFF_OPTIONS[0].to_string()],
        handoff_preview: "preview".to_string(),
    }
}

#[wasm_bindgen_test]
fn wizard_does_not_advance_without_brand_description() {
    let mut state = AppState::new();
    state.active_view = ActiveView::Wizard;

    update(&mut state, Message::WizardNext);
    assert_eq!(state.wizard_step, 0, "empty brand keeps step 0");

    update(
        &mut state,
        Message::UpdateBrandDescription("手工皂品牌".to_string()),
    );
    update(&mut state, Message::WizardNext);
    assert_eq!(state.wizard_step, 1);
}

#[wasm_bindgen_test]
fn non_https_url_blocks_the_brand_step() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::UpdateBrandDescription("手工皂品牌".to_string()),
    );
    update(
        &mut state,
        Message::UpdateWebsiteUrl("http://example.com".to_string()),
    );
    update(&mut state, Message::WizardNext);
    assert_eq!(state.wizard_step, 0, "http url is rejected");

    update(
        &mut state,
        Message::UpdateWebsiteUrl("https://example.com".to_string()),
    );
    update(&mut state, Message::WizardNext);
    assert_eq!(state.wizard_step, 1);
}

#[wasm_bindgen_test]
fn other_trigger_toggle_stores_and_clears_the_sentinel() {
    let mut state = AppState::new();

    update(&mut state, Message::ToggleOtherTrigger);
    assert_eq!(state.form.handoff_custom_trigger, CUSTOM_TRIGGER_SENTINEL);

    update(
        &mut state,
        Message::UpdateCustomTrigger("詢問門市".to_string()),
    );
    update(&mut state, Message::ToggleOtherTrigger);
    assert!(state.form.handoff_custom_trigger.is_empty(), "second toggle clears");
}

#[wasm_bindgen_test]
fn last_review_faq_cannot_be_removed() {
    let mut state = AppState::new();
    let faq = Faq::new("運費怎麼算", "滿千免運");
    state.form.faqs = vec![faq.clone()];
    state.review = Some(review_with_faqs(vec![faq.clone()]));

    update(&mut state, Message::ReviewRemoveFaq(faq.id.clone()));

    let review = state.review.as_ref().unwrap();
    assert_eq!(review.faqs.len(), 1, "minimum one FAQ is enforced");
    assert_eq!(state.form.faqs.len(), 1);
}

#[wasm_bindgen_test]
fn review_removal_mirrors_into_the_wizard_draft() {
    let mut state = AppState::new();
    let first = Faq::new("運費怎麼算", "滿千免運");
    let second = Faq::new("退貨流程", "七天內可退");
    state.form.faqs = vec![first.clone(), second.clone()];
    state.review = Some(review_with_faqs(vec![first.clone(), second.clone()]));

    update(&mut state, Message::ReviewRemoveFaq(second.id.clone()));

    assert_eq!(state.review.as_ref().unwrap().faqs.len(), 1);
    assert_eq!(state.form.faqs.len(), 1);
    assert_eq!(state.form.faqs[0].id, first.id);
}

#[wasm_bindgen_test]
fn optimized_faq_lands_in_every_list_holding_the_id() {
    let mut state = AppState::new();
    let faq = Faq::new("舊問題", "舊回答");
    state.form.faqs = vec![faq.clone()];
    state.review = Some(review_with_faqs(vec![faq.clone()]));

    update(
        &mut state,
        Message::OptimizedFaqReceived {
            id: faq.id.clone(),
            question: "新問題".to_string(),
            answer: "新回答".to_string(),
        },
    );

    assert_eq!(state.form.faqs[0].question, "新問題");
    assert_eq!(state.review.as_ref().unwrap().faqs[0].answer, "新回答");
}

#[wasm_bindgen_test]
fn reset_chat_returns_to_the_single_greeting() {
    let mut state = AppState::new();
    update(&mut state, Message::SendChatMessage("  ".to_string()));
    assert_eq!(state.transcript.len(), 1, "blank input is ignored");

    state.session_id = Some("s-1".to_string());
    update(&mut state, Message::SendChatMessage("你好".to_string()));
    update(
        &mut state,
        Message::ChatResponseReceived(ChatResponse {
            response_text: "哈囉".to_string(),
            related_faq_list: vec![RelatedFaq {
                question: "運費".to_string(),
                answer: "滿千免運".to_string(),
            }],
            handoff_result: Some(HandoffResult {
                hand_off: false,
                reason: String::new(),
            }),
        }),
    );
    assert_eq!(state.transcript.len(), 3);

    update(&mut state, Message::ResetChat);
    assert_eq!(state.transcript.len(), 1);
    assert_eq!(
        state.transcript[0].content,
        crate::constants::GREETING_MESSAGE
    );
}

#[wasm_bindgen_test]
fn failed_chat_turn_appends_the_canned_reply() {
    let mut state = AppState::new();
    state.session_id = Some("s-1".to_string());
    update(&mut state, Message::SendChatMessage("你好".to_string()));
    update(
        &mut state,
        Message::ChatRequestFailed("boom".to_string()),
    );

    assert!(!state.is_sending_chat);
    assert_eq!(
        state.transcript.last().unwrap().content,
        crate::constants::CHAT_FAILURE_MESSAGE
    );
}

#[wasm_bindgen_test]
fn setup_walk_reaches_the_demo_with_a_clean_transcript() {
    let mut state = AppState::new();

    update(&mut state, Message::StartSetup);
    update(
        &mut state,
        Message::SessionInitialized {
            session_id: "s-9".to_string(),
            enter_wizard: true,
        },
    );
    assert_eq!(state.active_view, ActiveView::Wizard);

    update(
        &mut state,
        Message::UpdateBrandDescription("咖啡豆電商".to_string()),
    );
    update(&mut state, Message::WizardNext);
    update(&mut state, Message::WizardNext);
    update(&mut state, Message::WizardNext);

    let commands = update(&mut state, Message::WizardNext);
    assert_eq!(state.active_view, ActiveView::Review);
    assert!(
        commands
            .iter()
            .any(|c| matches!(c, Command::SendMessage(Message::RequestGeneratePrompt))),
        "entering review kicks off proposal generation"
    );

    let faq = Faq::new("豆子新鮮嗎", "每週烘焙");
    update(
        &mut state,
        Message::ReviewProposalReceived(review_with_faqs(vec![faq])),
    );
    update(&mut state, Message::ConfirmSetupSucceeded);

    assert_eq!(state.active_view, ActiveView::Demo);
    assert_eq!(state.transcript.len(), 1, "demo starts from the greeting");

    update(&mut state, Message::SendChatMessage("有賣濾掛嗎".to_string()));
    update(
        &mut state,
        Message::ChatResponseReceived(ChatResponse {
            response_text: "有的".to_string(),
            related_faq_list: Vec::new(),
            handoff_result: None,
        }),
    );
    assert_eq!(state.transcript.len(), 3);
}

#[wasm_bindgen_test]
fn loaded_agent_seeds_the_editor_drafts() {
    let mut state = AppState::new();
    let agent = Agent {
        id: "a-1".to_string(),
        name: "咖啡客服".to_string(),
        config: AgentConfig {
            raw_config: RawConfig {
                merchant_name: "豆工坊".to_string(),
                services: "咖啡豆".to_string(),
                website_url: "https://beans.example".to_string(),
                tone: "親切有溫度".to_string(),
                tone_avoid: String::new(),
                faqs: vec![WireFaq {
                    question: "運費".to_string(),
                    answer: "滿千免運".to_string(),
                }],
                handoff_logic: Some(format!(
                    "{}{}, 詢問門市",
                    crate::constants::HANDOFF_PREFIX,
                    STANDARD_HANDOFF_OPTIONS[1]
                )),
            },
        },
        deploy_type: None,
        deploy_config: None,
        admin_id: None,
        used_subagent_details: Vec::new(),
        updated_at: None,
    };

    update(&mut state, Message::AgentLoaded(Box::new(agent)));

    assert_eq!(state.draft_faqs.len(), 1);
    assert_eq!(state.draft_faqs[0].question, "運費");
    assert_eq!(
        state.draft_triggers,
        vec![STANDARD_HANDOFF_OPTIONS[1].to_string()]
    );
    assert_eq!(state.draft_custom_trigger, "詢問門市");
    assert_eq!(state.draft_config.merchant_name, "豆工坊");
}

#[wasm_bindgen_test]
fn playground_tab_switch_keeps_the_transcript() {
    let mut state = AppState::new();
    state.session_id = Some("s-1".to_string());
    update(&mut state, Message::SendChatMessage("你好".to_string()));
    update(
        &mut state,
        Message::ChatResponseReceived(ChatResponse {
            response_text: "哈囉".to_string(),
            related_faq_list: Vec::new(),
            handoff_result: None,
        }),
    );
    assert_eq!(state.transcript.len(), 3);

    let commands = update(
        &mut state,
        Message::SetDashboardMenu(DashboardMenu::Playground),
    );
    assert_eq!(state.transcript.len(), 3, "tab switch keeps the conversation");
    assert!(
        !commands
            .iter()
            .any(|c| matches!(c, Command::SendMessage(Message::ResetPlaygroundChat))),
        "an existing session is reused"
    );

    state.session_id = None;
    let commands = update(
        &mut state,
        Message::SetDashboardMenu(DashboardMenu::Playground),
    );
    assert!(
        commands
            .iter()
            .any(|c| matches!(c, Command::SendMessage(Message::ResetPlaygroundChat))),
        "without a session a fresh chat is scoped"
    );
}

#[wasm_bindgen_test]
fn config_save_posts_only_the_brand_fields() {
    let mut state = AppState::new();
    state.current_agent_id = Some("a-1".to_string());
    state.draft_config.merchant_name = "豆工坊".to_string();
    state.draft_config.faqs = vec![WireFaq {
        question: "運費".to_string(),
        answer: "滿千免運".to_string(),
    }];
    state.draft_config.handoff_logic = Some("不應外洩".to_string());

    let commands = update(&mut state, Message::SaveConfig);
    let payload = commands
        .iter()
        .find_map(|c| match c {
            Command::SaveConfigApi { payload, .. } => Some(payload.clone()),
            _ => None,
        })
        .expect("save issues the config request");

    assert!(payload.contains("豆工坊"));
    assert!(!payload.contains("faqs"), "FAQ state has its own endpoint");
    assert!(!payload.contains("handoff_logic"));
}

#[wasm_bindgen_test]
fn login_cookies_survive_reserved_characters() {
    crate::cookies::store_login("U 123", "名字; tone=weird");
    let (id, name) = crate::cookies::stored_login().expect("both cookies present");
    assert_eq!(id, "U 123");
    assert_eq!(name, "名字; tone=weird");
}

#[wasm_bindgen_test]
fn deploy_requires_both_credentials() {
    let mut state = AppState::new();
    state.review = Some(review_with_faqs(vec![Faq::new("q", "a")]));

    update(
        &mut state,
        Message::DeployLine {
            access_token: "token".to_string(),
            channel_secret: "  ".to_string(),
        },
    );
    assert!(!state.is_deploying, "missing secret does not start a deploy");

    let commands = update(
        &mut state,
        Message::DeployLine {
            access_token: "token".to_string(),
            channel_secret: "secret".to_string(),
        },
    );
    assert!(state.is_deploying);
    assert!(commands
        .iter()
        .any(|c| matches!(c, Command::DeployLineApi { .. })));
}
