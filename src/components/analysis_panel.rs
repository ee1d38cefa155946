//! The diagnostics panel next to the playground chat. Classifies the latest
//! model reply into one of three states: escalated, answered from the FAQ
//! list, or a knowledge-base miss.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{el, text_el};
use crate::models::ChatMessage;

#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// The reply asked for a human; carries the stated reason.
    Handoff(String),
    /// The reply was grounded in these FAQ matches.
    Matched(Vec<crate::models::RelatedFaq>),
    /// No escalation and no FAQ matches.
    Miss,
}

/// Classify one model reply. Escalation wins over FAQ matches when a reply
/// carries both.
pub fn classify(message: &ChatMessage) -> Analysis {
    if let Some(handoff) = &message.handoff {
        if handoff.hand_off {
            return Analysis::Handoff(handoff.reason.clone());
        }
    }
    if !message.related_faqs.is_empty() {
        return Analysis::Matched(message.related_faqs.clone());
    }
    Analysis::Miss
}

/// Analysis for the latest answered turn, if there is one. The greeting is
/// not analyzable, and a canned failure line leaves the panel empty rather
/// than reading as a knowledge-base miss.
pub fn latest_analysis(transcript: &[ChatMessage]) -> Option<Analysis> {
    let latest = transcript
        .iter()
        .skip(1)
        .rev()
        .find(|m| m.role == crate::constants::ROLE_MODEL)?;
    if latest.content == crate::constants::CHAT_FAILURE_MESSAGE {
        return None;
    }
    Some(classify(latest))
}

/// Render the panel for the latest model reply, or a placeholder before the
/// first user turn has been answered.
pub fn render(
    document: &Document,
    transcript: &[ChatMessage],
) -> Result<Element, JsValue> {
    let panel = el(document, "div", "analysis-panel")?;
    panel.append_child(&text_el(document, "h3", "", "回覆分析")?.into())?;

    let Some(analysis) = latest_analysis(transcript) else {
        panel.append_child(&text_el(
            document,
            "p",
            "analysis-hint",
            "送出訊息後，這裡會顯示客服如何產生回覆。",
        )?.into())?;
        return Ok(panel);
    };

    match analysis {
        Analysis::Handoff(reason) => {
            panel.append_child(&text_el(document, "p", "analysis-handoff", "🔔 已轉接真人")?.into())?;
            if !reason.is_empty() {
                panel.append_child(&text_el(document, "p", "analysis-reason", &reason)?.into())?;
            }
        }
        Analysis::Matched(faqs) => {
            panel.append_child(&text_el(
                document,
                "p",
                "analysis-matched",
                "✅ 根據以下 FAQ 回覆",
            )?.into())?;
            let list = el(document, "ul", "analysis-faq-list")?;
            for faq in &faqs {
                let item = el(document, "li", "")?;
                item.append_child(&text_el(document, "strong", "", &faq.question)?.into())?;
                item.append_child(&text_el(document, "span", "", &faq.answer)?.into())?;
                list.append_child(&item)?;
            }
            panel.append_child(&list)?;
        }
        Analysis::Miss => {
            panel.append_child(&text_el(
                document,
                "p",
                "analysis-miss",
                "❓ 知識庫中沒有相符的資料",
            )?.into())?;
        }
    }

    Ok(panel)
}

#[cfg(test)]
#[cfg(not(target_arch = "wasm32"))]
mod tests {
    use super::{classify, latest_analysis, Analysis};
    use crate::models::{ChatMessage, HandoffResult, RelatedFaq};

    fn reply_with(
        faqs: Vec<RelatedFaq>,
        handoff: Option<HandoffResult>,
    ) -> ChatMessage {
        let mut msg = ChatMessage::model("好的");
        msg.related_faqs = faqs;
        msg.handoff = handoff;
        msg
    }

    fn faq(q: &str) -> RelatedFaq {
        RelatedFaq {
            question: q.to_string(),
            answer: "answer".to_string(),
        }
    }

    #[test]
    fn faq_matches_without_handoff_show_matched() {
        let msg = reply_with(vec![faq("運費怎麼算")], None);
        assert!(matches!(classify(&msg), Analysis::Matched(f) if f.len() == 1));
    }

    #[test]
    fn handoff_wins_even_with_faq_matches() {
        let msg = reply_with(
            vec![faq("運費怎麼算")],
            Some(HandoffResult {
                hand_off: true,
                reason: "客訴".to_string(),
            }),
        );
        assert_eq!(classify(&msg), Analysis::Handoff("客訴".to_string()));
    }

    #[test]
    fn declined_handoff_falls_through_to_matches() {
        let msg = reply_with(
            vec![faq("退貨")],
            Some(HandoffResult {
                hand_off: false,
                reason: String::new(),
            }),
        );
        assert!(matches!(classify(&msg), Analysis::Matched(_)));
    }

    #[test]
    fn no_signals_is_a_miss() {
        let msg = reply_with(Vec::new(), None);
        assert_eq!(classify(&msg), Analysis::Miss);
    }

    #[test]
    fn failed_turn_leaves_the_panel_empty() {
        let transcript = vec![
            ChatMessage::greeting(),
            ChatMessage::user("你好"),
            ChatMessage::model(crate::constants::CHAT_FAILURE_MESSAGE),
        ];
        assert_eq!(latest_analysis(&transcript), None);
    }

    #[test]
    fn answered_turn_is_classified() {
        let transcript = vec![
            ChatMessage::greeting(),
            ChatMessage::user("退貨"),
            reply_with(vec![faq("退貨流程")], None),
        ];
        assert!(matches!(
            latest_analysis(&transcript),
            Some(Analysis::Matched(_))
        ));
    }
}
