// src/messages.rs
//
// Every event that can occur in the UI, plus the side-effect commands the
// update function hands back for execution.

use crate::models::{
    Agent, AgentSummary, ChatResponse, ReviewData, SubagentInfo, TokenStats, WireFaq,
};
use crate::state::{ActiveView, DashboardMenu, SubagentEditor};

#[derive(Debug)]
pub enum Message {
    // ---------------- Navigation & session bootstrap ----------------
    NavigateTo(ActiveView),
    /// Landing "start setup" action: fetch a session then enter the wizard.
    StartSetup,
    SessionInitialized { session_id: String, enter_wizard: bool },
    SessionInitFailed(String),
    /// Platform login with the operator's id and display name. Writes the
    /// login cookies and checks admin authorization.
    PlatformLogin { user_id: String, name: String },
    AdminLoginChecked { is_admin: bool },
    AdminLoginFailed(String),

    // ---------------- Agent home ----------------
    LoadAgents,
    AgentsLoaded(Vec<AgentSummary>),
    AgentsLoadFailed(String),
    /// Open the dashboard for an existing agent.
    SelectAgent(String),

    // ---------------- Wizard ----------------
    WizardNext,
    WizardBack,
    UpdateBrandDescription(String),
    UpdateWebsiteUrl(String),
    UpdateTone(String),
    UpdateToneAvoid(String),
    AddFaq,
    UpdateFaqQuestion { id: String, value: String },
    UpdateFaqAnswer { id: String, value: String },
    RemoveFaq(String),
    ToggleHandoffTrigger(String),
    /// The "other" checkbox; checking it stores the sentinel text until the
    /// user types something real.
    ToggleOtherTrigger,
    UpdateCustomTrigger(String),
    RequestGenerateFaqs,
    GeneratedFaqsReceived(Vec<WireFaq>),
    GenerateFaqsFailed(String),
    /// Per-FAQ rewrite; the id addresses whichever editable list currently
    /// holds the entry (wizard, review, or dashboard draft).
    RequestOptimizeFaq(String),
    OptimizedFaqReceived { id: String, question: String, answer: String },
    OptimizeFaqFailed { id: String, error: String },

    // ---------------- Review ----------------
    RequestGeneratePrompt,
    ReviewProposalReceived(ReviewData),
    GeneratePromptFailed(String),
    ReviewAddFaq,
    ReviewUpdateFaqQuestion { id: String, value: String },
    ReviewUpdateFaqAnswer { id: String, value: String },
    ReviewRemoveFaq(String),
    /// Return to the wizard keeping all review edits.
    BackToWizard,
    ConfirmSetup,
    ConfirmSetupSucceeded,
    ConfirmSetupFailed(String),

    // ---------------- Playground chat ----------------
    SendChatMessage(String),
    ChatResponseReceived(ChatResponse),
    ChatRequestFailed(String),
    /// Wizard demo reset: transcript back to the single greeting.
    ResetChat,
    /// Dashboard playground reset: greeting plus a fresh session id.
    ResetPlaygroundChat,

    // ---------------- Deployment ----------------
    DeployLine { access_token: String, channel_secret: String },
    DeployLineSucceeded { channel_id: Option<String> },
    DeployLineFailed(String),

    // ---------------- Dashboard ----------------
    SetDashboardMenu(DashboardMenu),
    OpenSubagentEditor(SubagentEditor),
    CloseSubagentEditor,
    AgentLoaded(Box<Agent>),
    AgentLoadFailed(String),
    RefetchAgent,
    DraftAddFaq,
    DraftUpdateFaqQuestion { id: String, value: String },
    DraftUpdateFaqAnswer { id: String, value: String },
    DraftRemoveFaq(String),
    DraftToggleTrigger(String),
    DraftUpdateCustomTrigger(String),
    DraftUpdateConfigField { field: ConfigField, value: String },
    SaveFaqs,
    SaveHandoff,
    SaveConfig,
    SaveSucceeded,
    SaveFailed(String),
    TokenStatsLoaded(TokenStats),
    TokenStatsFailed(String),
    ShowSubagentMarket(bool),
    AvailableSubagentsLoaded(Vec<SubagentInfo>),
    AvailableSubagentsFailed(String),
    UnlockSubagent(String),
    UnlockSubagentSucceeded,
    UnlockSubagentFailed(String),
    ShowLineModal(bool),
}

/// One field of the Root Admin config editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    MerchantName,
    Services,
    WebsiteUrl,
    Tone,
    ToneAvoid,
}

/// Side effects produced by the update function. Network variants are
/// executed by `command_executors` on the next microtask.
pub enum Command {
    /// Chain another message through the normal dispatch path.
    SendMessage(Message),
    /// Run a DOM update after the state change has been applied.
    UpdateUI(Box<dyn FnOnce() + 'static>),
    NoOp,

    InitSession { enter_wizard: bool },
    AdminLogin { payload: String },
    FetchAgents { user_id: String },
    FetchAgent { agent_id: String, user_id: String },
    FetchTokenStats { agent_id: String, user_id: String },
    FetchAvailableSubagents { agent_id: String },
    AddSubagent { agent_id: String, payload: String },
    SaveFaqsApi { agent_id: String, payload: String },
    SaveHandoffApi { agent_id: String, payload: String },
    SaveConfigApi { agent_id: String, payload: String },
    GeneratePromptApi { payload: String },
    ConfirmSetupApi { payload: String },
    GenerateFaqsApi { payload: String },
    OptimizeFaqApi { faq_id: String, payload: String },
    SendChatApi { payload: String },
    DeployLineApi { payload: String },
}

impl Command {
    pub fn send(msg: Message) -> Self {
        Command::SendMessage(msg)
    }

    #[allow(dead_code)]
    pub fn none() -> Self {
        Command::NoOp
    }

    pub fn update_ui<F>(f: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Command::UpdateUI(Box::new(f))
    }
}
