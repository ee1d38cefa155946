//! Shared string constants: tone options, the fixed escalation option set and
//! the canned transcript strings the backend contract expects verbatim.

/// The four selectable reply tones shown in the wizard and the Root Admin
/// editor. The literal values are part of the backend contract.
pub const TONE_OPTIONS: [&str; 4] = [
    "親切有溫度",
    "專業簡潔",
    "像朋友聊天",
    "活潑可愛",
];

pub const DEFAULT_TONE: &str = "親切有溫度";

/// Fixed set of standard escalation triggers. Anything outside this list is
/// treated as a custom trigger (see `triggers.rs`).
pub const STANDARD_HANDOFF_OPTIONS: [&str; 5] = [
    "客訴/負評/情緒激動",
    "退款/退貨/爭議款項",
    "客製/報價（需要人工判斷）",
    "合作邀約/媒體採訪/B2B",
    "催單/急件（需要查狀態）",
];

/// Placeholder stored when the "other" toggle is switched on before any
/// custom text has been typed.
pub const CUSTOM_TRIGGER_SENTINEL: &str = "其他";

/// Literal prefix of the `handoff_logic` string stored on the agent config.
pub const HANDOFF_PREFIX: &str = "當使用者提到以下任何一項時轉接：";

/// Separator between triggers inside `handoff_logic`.
pub const TRIGGER_SEPARATOR: &str = ", ";

/// Full-width comma joining multiple custom triggers into one free-text field.
pub const CUSTOM_TRIGGER_JOIN: &str = "、";

/// First message of every fresh playground transcript.
pub const GREETING_MESSAGE: &str = "你好！我是你的 AI 智能客服，有什麼可以幫你的嗎？";

/// Appended to the transcript when a chat request fails.
pub const CHAT_FAILURE_MESSAGE: &str = "抱歉，發生錯誤，請稍後再試。";

/// Warning shown when the user tries to delete the last remaining FAQ.
pub const MIN_FAQ_WARNING: &str = "至少需要保留一組 FAQ";

// Login cookies written after platform login.
pub const COOKIE_USER_ID: &str = "line_user_id";
pub const COOKIE_USER_NAME: &str = "line_user_name";
pub const COOKIE_MAX_AGE_DAYS: u64 = 7;

// Chat transcript roles.
pub const ROLE_USER: &str = "user";
pub const ROLE_MODEL: &str = "model";

// Display names of the three editable sub-agent surfaces of the dashboard.
pub const SUBAGENT_KNOWLEDGE_BASE: &str = "Knowledge Base";
pub const SUBAGENT_ESCALATION: &str = "Escalation Manager";
pub const SUBAGENT_ROOT_ADMIN: &str = "Root Admin";
