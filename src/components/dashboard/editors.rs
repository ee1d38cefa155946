//! The agents tab: sub-agent cards and the three editors (Knowledge Base,
//! Escalation Manager, Root Admin). Edits live in draft state until saved.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::STANDARD_HANDOFF_OPTIONS;
use crate::dom_utils::{el, input_value, on_click, text_el, textarea_value};
use crate::messages::{ConfigField, Message};
use crate::state::{dispatch_global_message, SubagentEditor, APP_STATE};

pub fn render(document: &Document, content: &Element) -> Result<(), JsValue> {
    let editing = APP_STATE.with(|s| s.borrow().editing_subagent);
    match editing {
        Some(SubagentEditor::KnowledgeBase) => render_knowledge_base(document, content),
        Some(SubagentEditor::EscalationManager) => render_escalation(document, content),
        Some(SubagentEditor::RootAdmin) => render_root_admin(document, content),
        None => render_cards(document, content),
    }
}

// ---------------- Sub-agent cards ----------------

fn render_cards(document: &Document, content: &Element) -> Result<(), JsValue> {
    content.append_child(&text_el(document, "h2", "", "AI 客服模組")?.into())?;

    let grid = el(document, "div", "subagent-grid")?;
    let builtin = [
        (SubagentEditor::KnowledgeBase, "FAQ 知識庫"),
        (SubagentEditor::EscalationManager, "轉真人規則"),
        (SubagentEditor::RootAdmin, "品牌與語氣設定"),
    ];
    for (editor, subtitle) in builtin {
        let card = el(document, "div", "subagent-card")?;
        card.append_child(&text_el(document, "h3", "", editor.title())?.into())?;
        card.append_child(&text_el(document, "p", "card-subtitle", subtitle)?.into())?;
        on_click(&card, move |_| {
            dispatch_global_message(Message::OpenSubagentEditor(editor));
        })?;
        grid.append_child(&card)?;
    }

    // Unlocked marketplace modules show as plain cards.
    let extras = APP_STATE.with(|s| {
        s.borrow()
            .current_agent
            .as_ref()
            .map(|a| a.used_subagent_details.clone())
            .unwrap_or_default()
    });
    for info in &extras {
        let card = el(document, "div", "subagent-card unlocked")?;
        card.append_child(&text_el(document, "h3", "", &info.name)?.into())?;
        card.append_child(&text_el(document, "p", "card-subtitle", &info.description)?.into())?;
        grid.append_child(&card)?;
    }

    let more = el(document, "div", "subagent-card add-more")?;
    more.append_child(&text_el(document, "h3", "", "＋")?.into())?;
    more.append_child(&text_el(document, "p", "card-subtitle", "探索更多模組")?.into())?;
    on_click(&more, move |_| {
        dispatch_global_message(Message::ShowSubagentMarket(true));
    })?;
    grid.append_child(&more)?;

    content.append_child(&grid)?;
    Ok(())
}

// ---------------- Knowledge Base ----------------

fn render_knowledge_base(document: &Document, content: &Element) -> Result<(), JsValue> {
    let (faqs, optimizing, is_saving) = APP_STATE.with(|s| {
        let s = s.borrow();
        (
            s.draft_faqs.clone(),
            s.optimizing_faqs.clone(),
            s.is_saving,
        )
    });

    content.append_child(&editor_header(document, SubagentEditor::KnowledgeBase)?.into())?;

    let list = el(document, "div", "faq-list")?;
    for faq in &faqs {
        let row = el(document, "div", "faq-row")?;

        let question = el(document, "input", "faq-question")?;
        question.set_id(&format!("kb-q-{}", faq.id));
        question.set_attribute("value", &faq.question)?;
        row.append_child(&question)?;

        let answer = el(document, "textarea", "faq-answer")?;
        answer.set_id(&format!("kb-a-{}", faq.id));
        answer.set_text_content(Some(&faq.answer));
        row.append_child(&answer)?;

        let busy = optimizing.contains(&faq.id);
        let optimize = el(document, "button", "optimize-btn")?;
        if busy {
            optimize.set_attribute("disabled", "true")?;
            optimize.set_inner_html("<span class=\"spinner\"></span>");
        } else {
            optimize.set_text_content(Some("AI 優化"));
        }
        {
            let faq_ids: Vec<String> = faqs.iter().map(|f| f.id.clone()).collect();
            let id = faq.id.clone();
            let document = document.clone();
            on_click(&optimize, move |_| {
                sync_then_dispatch(&document, &faq_ids, Message::RequestOptimizeFaq(id.clone()));
            })?;
        }
        row.append_child(&optimize)?;

        let remove = text_el(document, "button", "remove-btn", "刪除")?;
        {
            let faq_ids: Vec<String> = faqs.iter().map(|f| f.id.clone()).collect();
            let id = faq.id.clone();
            let document = document.clone();
            on_click(&remove, move |_| {
                sync_then_dispatch(&document, &faq_ids, Message::DraftRemoveFaq(id.clone()));
            })?;
        }
        row.append_child(&remove)?;
        list.append_child(&row)?;
    }
    content.append_child(&list)?;

    let add = text_el(document, "button", "link-btn", "＋ 新增一組")?;
    {
        let faq_ids: Vec<String> = faqs.iter().map(|f| f.id.clone()).collect();
        let document = document.clone();
        on_click(&add, move |_| {
            sync_then_dispatch(&document, &faq_ids, Message::DraftAddFaq);
        })?;
    }
    content.append_child(&add)?;

    let save = save_button(document, is_saving)?;
    {
        let faq_ids: Vec<String> = faqs.iter().map(|f| f.id.clone()).collect();
        let document = document.clone();
        on_click(&save, move |_| {
            sync_then_dispatch(&document, &faq_ids, Message::SaveFaqs);
        })?;
    }
    content.append_child(&save)?;
    Ok(())
}

// ---------------- Escalation Manager ----------------

fn render_escalation(document: &Document, content: &Element) -> Result<(), JsValue> {
    let (triggers, custom, is_saving) = APP_STATE.with(|s| {
        let s = s.borrow();
        (
            s.draft_triggers.clone(),
            s.draft_custom_trigger.clone(),
            s.is_saving,
        )
    });

    content.append_child(&editor_header(document, SubagentEditor::EscalationManager)?.into())?;

    let list = el(document, "div", "trigger-list")?;
    for option in STANDARD_HANDOFF_OPTIONS {
        let row = el(document, "label", "trigger-row")?;
        let checkbox = el(document, "input", "")?;
        checkbox.set_attribute("type", "checkbox")?;
        if triggers.iter().any(|t| t == option) {
            checkbox.set_attribute("checked", "true")?;
        }
        {
            let document = document.clone();
            on_click(&checkbox, move |_| {
                dispatch_global_message(Message::DraftUpdateCustomTrigger(input_value(
                    &document,
                    "es-custom",
                )));
                dispatch_global_message(Message::DraftToggleTrigger(option.to_string()));
            })?;
        }
        row.append_child(&checkbox)?;
        row.append_child(&text_el(document, "span", "", option)?.into())?;
        list.append_child(&row)?;
    }

    list.append_child(&text_el(
        document,
        "label",
        "field-label",
        "其他轉接條件（自由填寫）",
    )?.into())?;
    let custom_input = el(document, "input", "field-input")?;
    custom_input.set_id("es-custom");
    custom_input.set_attribute("value", &custom)?;
    list.append_child(&custom_input)?;
    content.append_child(&list)?;

    let save = save_button(document, is_saving)?;
    {
        let document = document.clone();
        on_click(&save, move |_| {
            dispatch_global_message(Message::DraftUpdateCustomTrigger(input_value(
                &document,
                "es-custom",
            )));
            dispatch_global_message(Message::SaveHandoff);
        })?;
    }
    content.append_child(&save)?;
    Ok(())
}

// ---------------- Root Admin ----------------

const CONFIG_FIELDS: [(ConfigField, &str, &str); 5] = [
    (ConfigField::MerchantName, "ra-merchant", "品牌名稱"),
    (ConfigField::Services, "ra-services", "產品與服務"),
    (ConfigField::WebsiteUrl, "ra-website", "官網網址"),
    (ConfigField::Tone, "ra-tone", "回覆語氣"),
    (ConfigField::ToneAvoid, "ra-tone-avoid", "避免的說法"),
];

fn render_root_admin(document: &Document, content: &Element) -> Result<(), JsValue> {
    let (config, stats, is_saving) = APP_STATE.with(|s| {
        let s = s.borrow();
        (s.draft_config.clone(), s.token_stats.clone(), s.is_saving)
    });

    content.append_child(&editor_header(document, SubagentEditor::RootAdmin)?.into())?;

    for (field, id, label) in CONFIG_FIELDS {
        content.append_child(&text_el(document, "label", "field-label", label)?.into())?;
        let input = el(document, "textarea", "field-input")?;
        input.set_id(id);
        input.set_text_content(Some(config_value(&config, field)));
        content.append_child(&input)?;
    }

    if let Some(stats) = stats {
        content.append_child(&text_el(
            document,
            "p",
            "token-total",
            &format!("Token 使用量：{}", stats.total_tokens),
        )?.into())?;
    }

    let save = save_button(document, is_saving)?;
    {
        let document = document.clone();
        on_click(&save, move |_| {
            for (field, id, _) in CONFIG_FIELDS {
                dispatch_global_message(Message::DraftUpdateConfigField {
                    field,
                    value: textarea_value(&document, id),
                });
            }
            dispatch_global_message(Message::SaveConfig);
        })?;
    }
    content.append_child(&save)?;
    Ok(())
}

fn config_value(config: &crate::models::RawConfig, field: ConfigField) -> &str {
    match field {
        ConfigField::MerchantName => &config.merchant_name,
        ConfigField::Services => &config.services,
        ConfigField::WebsiteUrl => &config.website_url,
        ConfigField::Tone => &config.tone,
        ConfigField::ToneAvoid => &config.tone_avoid,
    }
}

// ---------------- Shared bits ----------------

fn editor_header(document: &Document, editor: SubagentEditor) -> Result<Element, JsValue> {
    let header = el(document, "div", "editor-header")?;
    let close = text_el(document, "button", "link-btn", "← 返回")?;
    on_click(&close, move |_| {
        dispatch_global_message(Message::CloseSubagentEditor);
    })?;
    header.append_child(&close)?;
    header.append_child(&text_el(document, "h2", "", editor.title())?.into())?;
    Ok(header)
}

fn save_button(document: &Document, is_saving: bool) -> Result<Element, JsValue> {
    let save = text_el(
        document,
        "button",
        "primary-btn",
        if is_saving { "儲存中…" } else { "儲存" },
    )?;
    save.set_id("editor-save-btn");
    if is_saving {
        save.set_attribute("disabled", "true")?;
    }
    Ok(save)
}

/// Read the visible KB rows into draft updates before running the action.
fn sync_then_dispatch(document: &Document, faq_ids: &[String], action: Message) {
    let mut updates = Vec::new();
    for id in faq_ids {
        if document.get_element_by_id(&format!("kb-q-{}", id)).is_some() {
            updates.push(Message::DraftUpdateFaqQuestion {
                id: id.clone(),
                value: input_value(document, &format!("kb-q-{}", id)),
            });
            updates.push(Message::DraftUpdateFaqAnswer {
                id: id.clone(),
                value: textarea_value(document, &format!("kb-a-{}", id)),
            });
        }
    }
    for msg in updates {
        dispatch_global_message(msg);
    }
    dispatch_global_message(action);
}
