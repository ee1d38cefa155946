//! Data types shared across the app: the wizard draft, backend payload and
//! response shapes, and the playground transcript.
//!
//! Everything crossing the network boundary is an explicit serde struct so a
//! malformed backend payload surfaces as a parse error instead of a panic
//! deeper in the UI code.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TONE;

// ---------------------------------------------------------------------------
// Wizard draft
// ---------------------------------------------------------------------------

/// One question/answer pair. `id` is a client-side uuid used to address the
/// entry while it lives in a form; the backend never sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn blank() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            question: String::new(),
            answer: String::new(),
        }
    }

    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    /// True when both fields trim to empty. Such rows are dropped before any
    /// submission.
    pub fn is_blank(&self) -> bool {
        self.question.trim().is_empty() && self.answer.trim().is_empty()
    }
}

/// The shared draft configuration every wizard step reads and writes.
/// Replaced wholesale on each edit rather than mutated through aliases, so a
/// step transition can be tested as a plain value-in/value-out function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    pub brand_description: String,
    pub website_url: String,
    pub tone: String,
    pub tone_avoid: String,
    pub faqs: Vec<Faq>,
    pub handoff_triggers: Vec<String>,
    pub handoff_custom_trigger: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            brand_description: String::new(),
            website_url: String::new(),
            tone: DEFAULT_TONE.to_string(),
            tone_avoid: String::new(),
            faqs: vec![Faq::blank()],
            handoff_triggers: Vec::new(),
            handoff_custom_trigger: String::new(),
        }
    }
}

impl FormData {
    /// Step-0 gate: brand text required, URL optional but must be https when
    /// present.
    pub fn brand_step_complete(&self) -> bool {
        if self.brand_description.trim().is_empty() {
            return false;
        }
        let url = self.website_url.trim();
        url.is_empty() || url.starts_with("https://")
    }

    /// Drop rows where both fields are blank, keeping order of the rest.
    pub fn prune_blank_faqs(&mut self) {
        self.faqs.retain(|f| !f.is_blank());
    }
}

// ---------------------------------------------------------------------------
// Backend shapes – setup flow
// ---------------------------------------------------------------------------

/// FAQ as the backend speaks it: `question`/`answer` keys, no client id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFaq {
    pub question: String,
    pub answer: String,
}

impl WireFaq {
    pub fn from_faq(faq: &Faq) -> Self {
        Self {
            question: faq.question.clone(),
            answer: faq.answer.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Proposal returned by `generate_prompt`. During the review step its FAQ
/// list is converted into id-carrying [`Faq`]s so inline edits can address
/// individual rows; `config_id` and the preview text stay verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewProposal {
    pub config_id: String,
    #[serde(default)]
    pub faqs: Vec<WireFaq>,
    #[serde(default)]
    pub handoff_triggers: Vec<String>,
    #[serde(default)]
    pub handoff_preview: String,
}

/// Editable review state held after the proposal arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewData {
    pub config_id: String,
    pub faqs: Vec<Faq>,
    pub handoff_triggers: Vec<String>,
    pub handoff_preview: String,
}

impl ReviewData {
    pub fn from_proposal(proposal: ReviewProposal) -> Self {
        Self {
            config_id: proposal.config_id,
            faqs: proposal
                .faqs
                .iter()
                .map(|f| Faq::new(&f.question, &f.answer))
                .collect(),
            handoff_triggers: proposal.handoff_triggers,
            handoff_preview: proposal.handoff_preview,
        }
    }
}

/// `generate_prompt` receives the wizard form as one object with camelCase
/// keys, matching how the form state is named on the wire.
#[derive(Debug, Serialize)]
pub struct GeneratePromptRequest<'a> {
    #[serde(rename = "brandDescription")]
    pub brand_description: &'a str,
    #[serde(rename = "websiteUrl")]
    pub website_url: &'a str,
    pub tone: &'a str,
    #[serde(rename = "toneAvoid")]
    pub tone_avoid: &'a str,
    pub faqs: Vec<WireFaq>,
    #[serde(rename = "handoffTriggers")]
    pub handoff_triggers: &'a [String],
    #[serde(rename = "handoffCustomTrigger")]
    pub handoff_custom_trigger: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ConfirmSetupRequest<'a> {
    pub config_id: &'a str,
    pub session_id: &'a str,
    pub faqs: Vec<WireFaq>,
    pub handoff_triggers: &'a [String],
    pub handoff_preview: &'a str,
}

#[derive(Debug, Serialize)]
pub struct GenerateFaqsRequest<'a> {
    #[serde(rename = "brandDescription")]
    pub brand_description: &'a str,
    #[serde(rename = "websiteUrl")]
    pub website_url: &'a str,
    pub line_user_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedFaqs {
    #[serde(default)]
    pub faqs: Vec<WireFaq>,
}

#[derive(Debug, Serialize)]
pub struct OptimizeFaqRequest<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub line_user_id: &'a str,
}

/// `optimize_faq` answers either a rewritten pair or an `error` string.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizedFaq {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Backend shapes – chat
// ---------------------------------------------------------------------------

/// One prior transcript turn as the chat endpoint expects it. The message
/// body travels under a `text` key.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub role: String,
    #[serde(rename = "text")]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub history: Vec<HistoryEntry>,
    pub line_user_id: &'a str,
    pub user_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<&'a str>,
    pub session_id: &'a str,
}

/// FAQ match attached to a chat response. The backend capitalizes these keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedFaq {
    #[serde(rename = "Q")]
    pub question: String,
    #[serde(rename = "A")]
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoffResult {
    #[serde(default)]
    pub hand_off: bool,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response_text: String,
    #[serde(default)]
    pub related_faq_list: Vec<RelatedFaq>,
    #[serde(default)]
    pub handoff_result: Option<HandoffResult>,
}

/// One transcript entry. Model messages carry the diagnostics that drive the
/// analysis side panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    pub related_faqs: Vec<RelatedFaq>,
    pub handoff: Option<HandoffResult>,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: crate::constants::ROLE_USER.to_string(),
            content: content.to_string(),
            related_faqs: Vec::new(),
            handoff: None,
        }
    }

    pub fn model(content: &str) -> Self {
        Self {
            role: crate::constants::ROLE_MODEL.to_string(),
            content: content.to_string(),
            related_faqs: Vec::new(),
            handoff: None,
        }
    }

    pub fn greeting() -> Self {
        Self::model(crate::constants::GREETING_MESSAGE)
    }
}

// ---------------------------------------------------------------------------
// Backend shapes – admin dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub deploy_type: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub merchant_name: String,
    #[serde(default)]
    pub services: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub tone_avoid: String,
    #[serde(default)]
    pub faqs: Vec<WireFaq>,
    #[serde(default)]
    pub handoff_logic: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub raw_config: RawConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubagentInfo {
    pub subagent_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Agent {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub config: AgentConfig,
    #[serde(default)]
    pub deploy_type: Option<String>,
    #[serde(default)]
    pub deploy_config: Option<serde_json::Value>,
    #[serde(default)]
    pub admin_id: Option<String>,
    #[serde(default)]
    pub used_subagent_details: Vec<SubagentInfo>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenStats {
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default)]
    pub transactions: Vec<TokenTransaction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenTransaction {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub tokens: i64,
}

#[derive(Debug, Serialize)]
pub struct UpdateFaqsRequest<'a> {
    #[serde(rename = "userId")]
    pub user_id: &'a str,
    pub faqs: Vec<WireFaq>,
}

#[derive(Debug, Serialize)]
pub struct UpdateHandoffRequest<'a> {
    #[serde(rename = "userId")]
    pub user_id: &'a str,
    pub handoff_triggers: &'a [String],
    pub handoff_custom: &'a str,
}

/// The brand/tone slice edited by the Root Admin screen. Only these five
/// fields travel in `update_config`; FAQ and handoff state have their own
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigUpdates {
    pub merchant_name: String,
    pub services: String,
    pub website_url: String,
    pub tone: String,
    pub tone_avoid: String,
}

impl ConfigUpdates {
    pub fn from_raw(raw: &RawConfig) -> Self {
        Self {
            merchant_name: raw.merchant_name.clone(),
            services: raw.services.clone(),
            website_url: raw.website_url.clone(),
            tone: raw.tone.clone(),
            tone_avoid: raw.tone_avoid.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateConfigRequest<'a> {
    #[serde(rename = "userId")]
    pub user_id: &'a str,
    pub updates: &'a ConfigUpdates,
}

#[derive(Debug, Serialize)]
pub struct AddSubagentRequest<'a> {
    pub subagent_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AdminLoginRequest<'a> {
    #[serde(rename = "userId")]
    pub user_id: &'a str,
    pub name: &'a str,
}

// ---------------------------------------------------------------------------
// Backend shapes – deployment
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DeployLineRequest<'a> {
    pub agent_id: &'a str,
    pub access_token: &'a str,
    pub channel_secret: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeployResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn blank_faq_requires_both_fields_empty() {
        assert!(Faq::new("  ", "\t").is_blank());
        assert!(!Faq::new("q", "").is_blank());
        assert!(!Faq::new("", "a").is_blank());
    }

    #[test]
    fn brand_step_requires_text() {
        let mut form = FormData::default();
        assert!(!form.brand_step_complete());
        form.brand_description = "   \n ".to_string();
        assert!(!form.brand_step_complete());
        form.brand_description = "手工皂品牌".to_string();
        assert!(form.brand_step_complete());
    }

    #[test]
    fn brand_step_rejects_non_https_url() {
        let mut form = FormData {
            brand_description: "品牌".to_string(),
            ..FormData::default()
        };
        form.website_url = "http://example.com".to_string();
        assert!(!form.brand_step_complete());
        form.website_url = "https://example.com".to_string();
        assert!(form.brand_step_complete());
        form.website_url = "  ".to_string();
        assert!(form.brand_step_complete());
    }

    #[test]
    fn prune_keeps_partially_filled_rows_in_order() {
        let mut form = FormData::default();
        form.faqs = vec![
            Faq::new("q1", "a1"),
            Faq::new("", ""),
            Faq::new("q2", ""),
            Faq::new(" ", "  "),
            Faq::new("", "a3"),
        ];
        form.prune_blank_faqs();
        let questions: Vec<&str> = form.faqs.iter().map(|f| f.question.as_str()).collect();
        assert_eq!(questions, vec!["q1", "q2", ""]);
        assert_eq!(form.faqs[2].answer, "a3");
    }

    #[test]
    fn chat_response_tolerates_missing_fields() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"response_text":"hi"}"#).unwrap();
        assert_eq!(parsed.response_text, "hi");
        assert!(parsed.related_faq_list.is_empty());
        assert!(parsed.handoff_result.is_none());
    }

    #[test]
    fn stored_faqs_parse_question_answer_keys() {
        let parsed: RawConfig = serde_json::from_str(
            r#"{"faqs":[{"question":"運費怎麼算","answer":"滿千免運"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.faqs[0].question, "運費怎麼算");
        assert_eq!(parsed.faqs[0].answer, "滿千免運");
    }

    #[test]
    fn generate_prompt_payload_uses_camel_case_form_keys() {
        let triggers = vec!["投訴與客訴".to_string()];
        let json = serde_json::to_string(&GeneratePromptRequest {
            brand_description: "手工皂",
            website_url: "https://example.com",
            tone: "親切有溫度",
            tone_avoid: "太官方",
            faqs: vec![WireFaq {
                question: "運費".to_string(),
                answer: "滿千免運".to_string(),
            }],
            handoff_triggers: &triggers,
            handoff_custom_trigger: "",
        })
        .unwrap();
        for key in [
            "\"brandDescription\"",
            "\"websiteUrl\"",
            "\"toneAvoid\"",
            "\"handoffTriggers\"",
            "\"handoffCustomTrigger\"",
            "\"question\"",
            "\"answer\"",
        ] {
            assert!(json.contains(key), "missing {} in {}", key, json);
        }
        assert!(!json.contains("brand_description"));
        assert!(!json.contains("\"q\""));
    }

    #[test]
    fn chat_history_entries_carry_a_text_key() {
        let json = serde_json::to_string(&HistoryEntry {
            role: "model".to_string(),
            content: "哈囉".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"role":"model","text":"哈囉"}"#);
    }

    #[test]
    fn config_update_payload_is_the_brand_slice_only() {
        let raw = RawConfig {
            merchant_name: "良品選物".to_string(),
            faqs: vec![WireFaq {
                question: "q".to_string(),
                answer: "a".to_string(),
            }],
            handoff_logic: Some("當使用者提到以下任何一項時轉接：投訴與客訴".to_string()),
            ..RawConfig::default()
        };
        let updates = ConfigUpdates::from_raw(&raw);
        let json = serde_json::to_string(&UpdateConfigRequest {
            user_id: "U123",
            updates: &updates,
        })
        .unwrap();
        assert!(json.contains("\"merchant_name\":\"良品選物\""));
        assert!(!json.contains("faqs"));
        assert!(!json.contains("handoff_logic"));
    }

    #[test]
    fn related_faq_uses_capitalized_keys() {
        let parsed: RelatedFaq =
            serde_json::from_str(r#"{"Q":"運費多少","A":"滿千免運"}"#).unwrap();
        assert_eq!(parsed.question, "運費多少");
        assert_eq!(parsed.answer, "滿千免運");
    }
}
