//! Review screen: the generated configuration proposal with inline FAQ
//! editing, the escalation preview and the final confirm action.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{el, input_value, on_click, text_el, textarea_value};
use crate::messages::Message;
use crate::models::ReviewData;
use crate::state::{dispatch_global_message, APP_STATE};

pub fn render(document: &Document) -> Result<(), JsValue> {
    let root = crate::views::app_root(document)?;

    let (review, is_generating, is_confirming) = APP_STATE.with(|s| {
        let s = s.borrow();
        (s.review.clone(), s.is_generating_review, s.is_confirming)
    });

    let page = el(document, "div", "review-page")?;
    page.append_child(&text_el(document, "h2", "wizard-title", "確認你的客服設定")?.into())?;

    match review {
        None if is_generating => {
            let pending = el(document, "div", "review-pending")?;
            pending.set_inner_html("<span class=\"spinner\"></span>");
            pending.append_child(&text_el(
                document,
                "p",
                "",
                "正在整理你的設定，請稍候…",
            )?.into())?;
            page.append_child(&pending)?;
        }
        None => {
            page.append_child(&text_el(
                document,
                "p",
                "empty-hint",
                "尚未產生設定。",
            )?.into())?;
            let retry = text_el(document, "button", "secondary-btn", "重新產生")?;
            on_click(&retry, move |_| {
                dispatch_global_message(Message::RequestGeneratePrompt);
            })?;
            page.append_child(&retry)?;
        }
        Some(review) => {
            page.append_child(&render_proposal(document, &review, is_confirming)?.into())?;
        }
    }

    root.append_child(&page)?;
    Ok(())
}

fn render_proposal(
    document: &Document,
    review: &ReviewData,
    is_confirming: bool,
) -> Result<Element, JsValue> {
    let container = el(document, "div", "review-proposal")?;

    container.append_child(&text_el(document, "h3", "", "FAQ")?.into())?;
    let list = el(document, "div", "faq-list")?;
    for faq in &review.faqs {
        let row = el(document, "div", "faq-row")?;

        let question = el(document, "input", "faq-question")?;
        question.set_id(&format!("rv-q-{}", faq.id));
        question.set_attribute("value", &faq.question)?;
        row.append_child(&question)?;

        let answer = el(document, "textarea", "faq-answer")?;
        answer.set_id(&format!("rv-a-{}", faq.id));
        answer.set_text_content(Some(&faq.answer));
        row.append_child(&answer)?;

        let remove = text_el(document, "button", "remove-btn", "刪除")?;
        {
            let faq_ids: Vec<String> = review.faqs.iter().map(|f| f.id.clone()).collect();
            let id = faq.id.clone();
            let document = document.clone();
            on_click(&remove, move |_| {
                sync_then_dispatch(&document, &faq_ids, Message::ReviewRemoveFaq(id.clone()));
            })?;
        }
        row.append_child(&remove)?;
        list.append_child(&row)?;
    }
    container.append_child(&list)?;

    let add = text_el(document, "button", "link-btn", "＋ 新增一組")?;
    {
        let faq_ids: Vec<String> = review.faqs.iter().map(|f| f.id.clone()).collect();
        let document = document.clone();
        on_click(&add, move |_| {
            sync_then_dispatch(&document, &faq_ids, Message::ReviewAddFaq);
        })?;
    }
    container.append_child(&add)?;

    container.append_child(&text_el(document, "h3", "", "轉真人條件")?.into())?;
    if review.handoff_triggers.is_empty() {
        container.append_child(&text_el(document, "p", "empty-hint", "（未設定）")?.into())?;
    } else {
        let triggers = el(document, "ul", "trigger-preview")?;
        for trigger in &review.handoff_triggers {
            triggers.append_child(&text_el(document, "li", "", trigger)?.into())?;
        }
        container.append_child(&triggers)?;
    }
    if !review.handoff_preview.is_empty() {
        container.append_child(&text_el(
            document,
            "p",
            "handoff-preview",
            &review.handoff_preview,
        )?.into())?;
    }

    let footer = el(document, "div", "wizard-footer")?;
    let back = text_el(document, "button", "secondary-btn", "返回修改")?;
    {
        let faq_ids: Vec<String> = review.faqs.iter().map(|f| f.id.clone()).collect();
        let document = document.clone();
        on_click(&back, move |_| {
            sync_then_dispatch(&document, &faq_ids, Message::BackToWizard);
        })?;
    }
    footer.append_child(&back)?;

    let confirm = text_el(
        document,
        "button",
        "primary-btn",
        if is_confirming {
            "確認中…"
        } else {
            "確認，開始試用"
        },
    )?;
    confirm.set_id("confirm-setup-btn");
    if is_confirming {
        confirm.set_attribute("disabled", "true")?;
    }
    {
        let faq_ids: Vec<String> = review.faqs.iter().map(|f| f.id.clone()).collect();
        let document = document.clone();
        on_click(&confirm, move |_| {
            sync_then_dispatch(&document, &faq_ids, Message::ConfirmSetup);
        })?;
    }
    footer.append_child(&confirm)?;
    container.append_child(&footer)?;

    Ok(container)
}

/// Flush every visible FAQ field into state, then run the action.
fn sync_then_dispatch(document: &Document, faq_ids: &[String], action: Message) {
    let mut updates = Vec::new();
    for id in faq_ids {
        if document.get_element_by_id(&format!("rv-q-{}", id)).is_some() {
            updates.push(Message::ReviewUpdateFaqQuestion {
                id: id.clone(),
                value: input_value(document, &format!("rv-q-{}", id)),
            });
            updates.push(Message::ReviewUpdateFaqAnswer {
                id: id.clone(),
                value: textarea_value(document, &format!("rv-a-{}", id)),
            });
        }
    }
    for msg in updates {
        dispatch_global_message(msg);
    }
    dispatch_global_message(action);
}
