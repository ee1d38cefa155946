// src/state.rs
//
// Global application state plus the dispatch entry point. All UI events go
// through `dispatch_global_message`; the update function returns side-effect
// commands which run after the state borrow is released.

use std::cell::RefCell;
use std::collections::HashSet;

use wasm_bindgen::JsValue;

use crate::messages::{Command, Message};
use crate::models::{
    Agent, AgentSummary, ChatMessage, FormData, RawConfig, ReviewData, SubagentInfo, TokenStats,
};
use crate::update::update;

/// Which screen is currently rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveView {
    Landing,
    AgentHome,
    Wizard,
    Review,
    Demo,
    Deploy,
    Dashboard,
}

/// Top-level menu of the backend dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardMenu {
    Dashboard,
    Agents,
    Channels,
    Playground,
}

/// The three modal-like sub-agent editors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubagentEditor {
    KnowledgeBase,
    EscalationManager,
    RootAdmin,
}

impl SubagentEditor {
    pub fn title(&self) -> &'static str {
        match self {
            SubagentEditor::KnowledgeBase => crate::constants::SUBAGENT_KNOWLEDGE_BASE,
            SubagentEditor::EscalationManager => crate::constants::SUBAGENT_ESCALATION,
            SubagentEditor::RootAdmin => crate::constants::SUBAGENT_ROOT_ADMIN,
        }
    }
}

pub struct AppState {
    pub active_view: ActiveView,

    // Session / identity
    pub session_id: Option<String>,
    pub line_user_id: String,
    pub line_user_name: String,
    pub is_admin: bool,
    pub is_initializing_session: bool,

    // Wizard
    pub form: FormData,
    pub wizard_step: usize,
    pub is_generating_faqs: bool,
    /// FAQ ids with an optimize call in flight. Advisory only: it disables
    /// the per-row button, it does not cancel anything.
    pub optimizing_faqs: HashSet<String>,

    // Review
    pub review: Option<ReviewData>,
    pub is_generating_review: bool,
    pub is_confirming: bool,

    // Playground chat (shared by the demo step and the dashboard playground)
    pub transcript: Vec<ChatMessage>,
    pub is_sending_chat: bool,

    // Deployment
    pub is_deploying: bool,
    pub deploy_done: bool,
    pub deployed_channel_id: Option<String>,

    // Agent home
    pub agents: Vec<AgentSummary>,
    pub is_loading_agents: bool,

    // Dashboard
    pub current_agent: Option<Agent>,
    pub current_agent_id: Option<String>,
    pub dashboard_menu: DashboardMenu,
    pub editing_subagent: Option<SubagentEditor>,
    pub draft_faqs: Vec<crate::models::Faq>,
    pub draft_triggers: Vec<String>,
    pub draft_custom_trigger: String,
    pub draft_config: RawConfig,
    pub is_saving: bool,
    pub token_stats: Option<TokenStats>,
    pub available_subagents: Vec<SubagentInfo>,
    pub show_market_modal: bool,
    pub show_line_modal: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_view: ActiveView::Landing,
            session_id: None,
            line_user_id: String::new(),
            line_user_name: String::new(),
            is_admin: false,
            is_initializing_session: false,
            form: FormData::default(),
            wizard_step: 0,
            is_generating_faqs: false,
            optimizing_faqs: HashSet::new(),
            review: None,
            is_generating_review: false,
            is_confirming: false,
            transcript: vec![ChatMessage::greeting()],
            is_sending_chat: false,
            is_deploying: false,
            deploy_done: false,
            deployed_channel_id: None,
            agents: Vec::new(),
            is_loading_agents: false,
            current_agent: None,
            current_agent_id: None,
            dashboard_menu: DashboardMenu::Agents,
            editing_subagent: None,
            draft_faqs: Vec::new(),
            draft_triggers: Vec::new(),
            draft_custom_trigger: String::new(),
            draft_config: RawConfig::default(),
            is_saving: false,
            token_stats: None,
            available_subagents: Vec::new(),
            show_market_modal: false,
            show_line_modal: false,
        }
    }

    /// Locate an editable FAQ by id across whichever surface currently owns
    /// it: the wizard form, the review proposal, or the dashboard draft.
    pub fn find_faq_mut(&mut self, id: &str) -> Option<&mut crate::models::Faq> {
        if let Some(faq) = self.form.faqs.iter_mut().find(|f| f.id == id) {
            return Some(faq);
        }
        if let Some(review) = self.review.as_mut() {
            if let Some(faq) = review.faqs.iter_mut().find(|f| f.id == id) {
                return Some(faq);
            }
        }
        self.draft_faqs.iter_mut().find(|f| f.id == id)
    }

    /// Re-render the active screen. Called once after every dispatch.
    pub fn refresh_ui_after_state_change() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let active_view = APP_STATE.with(|state| state.borrow().active_view);
        crate::views::render_active_view_by_type(active_view, &document)
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Dispatch a message, execute the resulting commands, then refresh the UI.
/// The state borrow is dropped before commands run so that handlers and
/// async callbacks can dispatch again without a nested-borrow panic.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        update(&mut state, msg)
    });

    for command in commands {
        match command {
            Command::SendMessage(msg) => dispatch_global_message(msg),
            Command::UpdateUI(f) => f(),
            Command::NoOp => {}
            network => crate::command_executors::execute(network),
        }
    }

    if let Err(e) = AppState::refresh_ui_after_state_change() {
        web_sys::console::warn_1(&format!("Failed to refresh UI: {:?}", e).into());
    }
}
