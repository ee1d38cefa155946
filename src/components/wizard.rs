//! The four-step setup wizard: brand, tone, FAQs, escalation triggers.
//!
//! Text fields are uncontrolled; their values are read out of the DOM and
//! synced into state right before any action that re-renders (step change,
//! FAQ add/remove/optimize, trigger toggles). This keeps typing from fighting
//! the full re-render cycle.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlSelectElement};

use crate::constants::{CUSTOM_TRIGGER_SENTINEL, STANDARD_HANDOFF_OPTIONS, TONE_OPTIONS};
use crate::dom_utils::{el, input_value, on_click, on_input, text_el, textarea_value};
use crate::messages::Message;
use crate::models::FormData;
use crate::reducers::wizard::WIZARD_STEP_COUNT;
use crate::state::{dispatch_global_message, APP_STATE};

const STEP_TITLES: [&str; WIZARD_STEP_COUNT] = [
    "介紹你的品牌",
    "選擇回覆語氣",
    "常見問題 FAQ",
    "什麼情況轉真人？",
];

pub fn render(document: &Document) -> Result<(), JsValue> {
    let root = crate::views::app_root(document)?;

    let (step, form, is_generating_faqs, optimizing) = APP_STATE.with(|s| {
        let s = s.borrow();
        (
            s.wizard_step,
            s.form.clone(),
            s.is_generating_faqs,
            s.optimizing_faqs.clone(),
        )
    });

    let page = el(document, "div", "wizard-page")?;
    page.append_child(&render_progress(document, step)?.into())?;
    page.append_child(&text_el(document, "h2", "wizard-title", STEP_TITLES[step])?.into())?;

    let body = el(document, "div", "wizard-body")?;
    match step {
        0 => render_brand_step(document, &body, &form)?,
        1 => render_tone_step(document, &body, &form)?,
        2 => render_faq_step(document, &body, &form, is_generating_faqs, &optimizing)?,
        _ => render_trigger_step(document, &body, &form)?,
    }
    page.append_child(&body)?;
    page.append_child(&render_footer(document, step, &form)?.into())?;

    root.append_child(&page)?;
    Ok(())
}

fn render_progress(document: &Document, step: usize) -> Result<Element, JsValue> {
    let bar = el(document, "div", "wizard-progress")?;
    for i in 0..WIZARD_STEP_COUNT {
        let class = if i <= step {
            "progress-dot active"
        } else {
            "progress-dot"
        };
        bar.append_child(&text_el(document, "span", class, &format!("{}", i + 1))?.into())?;
    }
    Ok(bar)
}

// ---------------- Step 0: brand ----------------

fn render_brand_step(
    document: &Document,
    body: &Element,
    form: &FormData,
) -> Result<(), JsValue> {
    body.append_child(&text_el(
        document,
        "label",
        "field-label",
        "品牌介紹（賣什麼、特色是什麼）",
    )?.into())?;
    let brand = el(document, "textarea", "field-input")?;
    brand.set_id("wz-brand");
    brand.set_text_content(Some(&form.brand_description));
    body.append_child(&brand)?;

    body.append_child(&text_el(
        document,
        "label",
        "field-label",
        "官網網址（選填，需為 https）",
    )?.into())?;
    let url = el(document, "input", "field-input")?;
    url.set_id("wz-url");
    url.set_attribute("placeholder", "https://example.com")?;
    url.set_attribute("value", &form.website_url)?;
    body.append_child(&url)?;

    // Live validity check drives the Next button without a state round-trip.
    let check = {
        let document = document.clone();
        move |_: String| {
            let draft = FormData {
                brand_description: textarea_value(&document, "wz-brand"),
                website_url: input_value(&document, "wz-url"),
                ..FormData::default()
            };
            crate::dom_utils::set_button_disabled(
                &document,
                "wizard-next-btn",
                !draft.brand_step_complete(),
            );
        }
    };
    on_input(&brand, check.clone())?;
    on_input(&url, check)?;
    Ok(())
}

// ---------------- Step 1: tone ----------------

fn render_tone_step(
    document: &Document,
    body: &Element,
    form: &FormData,
) -> Result<(), JsValue> {
    body.append_child(&text_el(document, "label", "field-label", "回覆語氣")?.into())?;
    let select = el(document, "select", "field-input")?;
    select.set_id("wz-tone");
    for option in TONE_OPTIONS {
        let opt = text_el(document, "option", "", option)?;
        opt.set_attribute("value", option)?;
        if option == form.tone {
            opt.set_attribute("selected", "true")?;
        }
        select.append_child(&opt)?;
    }
    body.append_child(&select)?;

    body.append_child(&text_el(
        document,
        "label",
        "field-label",
        "避免的說法（選填）",
    )?.into())?;
    let avoid = el(document, "textarea", "field-input")?;
    avoid.set_id("wz-tone-avoid");
    avoid.set_text_content(Some(&form.tone_avoid));
    body.append_child(&avoid)?;
    Ok(())
}

// ---------------- Step 2: FAQs ----------------

fn render_faq_step(
    document: &Document,
    body: &Element,
    form: &FormData,
    is_generating: bool,
    optimizing: &std::collections::HashSet<String>,
) -> Result<(), JsValue> {
    let generate = text_el(
        document,
        "button",
        "secondary-btn",
        if is_generating {
            "產生中…"
        } else {
            "用 AI 產生 FAQ"
        },
    )?;
    generate.set_id("generate-faqs-btn");
    if is_generating {
        generate.set_attribute("disabled", "true")?;
    }
    {
        let faq_ids: Vec<String> = form.faqs.iter().map(|f| f.id.clone()).collect();
        let document = document.clone();
        on_click(&generate, move |_| {
            sync_then_dispatch(&document, &faq_ids, Message::RequestGenerateFaqs);
        })?;
    }
    body.append_child(&generate)?;

    let list = el(document, "div", "faq-list")?;
    for faq in &form.faqs {
        list.append_child(&render_faq_row(document, form, faq, optimizing)?.into())?;
    }
    body.append_child(&list)?;

    let add = text_el(document, "button", "link-btn", "＋ 新增一組")?;
    add.set_id("add-faq-btn");
    {
        let faq_ids: Vec<String> = form.faqs.iter().map(|f| f.id.clone()).collect();
        let document = document.clone();
        on_click(&add, move |_| {
            sync_then_dispatch(&document, &faq_ids, Message::AddFaq);
        })?;
    }
    body.append_child(&add)?;
    Ok(())
}

fn render_faq_row(
    document: &Document,
    form: &FormData,
    faq: &crate::models::Faq,
    optimizing: &std::collections::HashSet<String>,
) -> Result<Element, JsValue> {
    let row = el(document, "div", "faq-row")?;

    let question = el(document, "input", "faq-question")?;
    question.set_id(&format!("faq-q-{}", faq.id));
    question.set_attribute("placeholder", "問題")?;
    question.set_attribute("value", &faq.question)?;
    row.append_child(&question)?;

    let answer = el(document, "textarea", "faq-answer")?;
    answer.set_id(&format!("faq-a-{}", faq.id));
    answer.set_attribute("placeholder", "回答")?;
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
        let faq_ids: Vec<String> = form.faqs.iter().map(|f| f.id.clone()).collect();
        let id = faq.id.clone();
        let document = document.clone();
        on_click(&optimize, move |_| {
            sync_then_dispatch(&document, &faq_ids, Message::RequestOptimizeFaq(id.clone()));
        })?;
    }
    row.append_child(&optimize)?;

    let remove = text_el(document, "button", "remove-btn", "刪除")?;
    {
        let faq_ids: Vec<String> = form.faqs.iter().map(|f| f.id.clone()).collect();
        let id = faq.id.clone();
        let document = document.clone();
        on_click(&remove, move |_| {
            sync_then_dispatch(&document, &faq_ids, Message::RemoveFaq(id.clone()));
        })?;
    }
    row.append_child(&remove)?;
    Ok(row)
}

// ---------------- Step 3: escalation triggers ----------------

fn render_trigger_step(
    document: &Document,
    body: &Element,
    form: &FormData,
) -> Result<(), JsValue> {
    let list = el(document, "div", "trigger-list")?;
    for option in STANDARD_HANDOFF_OPTIONS {
        let row = el(document, "label", "trigger-row")?;
        let checkbox = el(document, "input", "")?;
        checkbox.set_attribute("type", "checkbox")?;
        if form.handoff_triggers.iter().any(|t| t == option) {
            checkbox.set_attribute("checked", "true")?;
        }
        {
            let document = document.clone();
            on_click(&checkbox, move |_| {
                sync_custom_trigger(&document);
                dispatch_global_message(Message::ToggleHandoffTrigger(option.to_string()));
            })?;
        }
        row.append_child(&checkbox)?;
        row.append_child(&text_el(document, "span", "", option)?.into())?;
        list.append_child(&row)?;
    }

    // The "other" row; its text field only exists while checked.
    let other_row = el(document, "label", "trigger-row")?;
    let other_checkbox = el(document, "input", "")?;
    other_checkbox.set_attribute("type", "checkbox")?;
    let other_on = !form.handoff_custom_trigger.is_empty();
    if other_on {
        other_checkbox.set_attribute("checked", "true")?;
    }
    {
        let document = document.clone();
        on_click(&other_checkbox, move |_| {
            sync_custom_trigger(&document);
            dispatch_global_message(Message::ToggleOtherTrigger);
        })?;
    }
    other_row.append_child(&other_checkbox)?;
    other_row.append_child(&text_el(document, "span", "", CUSTOM_TRIGGER_SENTINEL)?.into())?;
    list.append_child(&other_row)?;

    if other_on {
        let custom = el(document, "input", "field-input")?;
        custom.set_id("wz-custom-trigger");
        custom.set_attribute("placeholder", "例如：詢問門市地址")?;
        if form.handoff_custom_trigger != CUSTOM_TRIGGER_SENTINEL {
            custom.set_attribute("value", &form.handoff_custom_trigger)?;
        }
        list.append_child(&custom)?;
    }

    body.append_child(&list)?;
    Ok(())
}

// ---------------- Footer ----------------

fn render_footer(document: &Document, step: usize, form: &FormData) -> Result<Element, JsValue> {
    let footer = el(document, "div", "wizard-footer")?;

    if step > 0 {
        let back = text_el(document, "button", "secondary-btn", "上一步")?;
        back.set_id("wizard-back-btn");
        {
            let faq_ids: Vec<String> = form.faqs.iter().map(|f| f.id.clone()).collect();
            let document = document.clone();
            on_click(&back, move |_| {
                sync_then_dispatch(&document, &faq_ids, Message::WizardBack);
            })?;
        }
        footer.append_child(&back)?;
    }

    let next_label = if step + 1 == WIZARD_STEP_COUNT {
        "完成，產生設定"
    } else {
        "下一步"
    };
    let next = text_el(document, "button", "primary-btn", next_label)?;
    next.set_id("wizard-next-btn");
    if step == 0 && !form.brand_step_complete() {
        next.set_attribute("disabled", "true")?;
    }
    {
        let faq_ids: Vec<String> = form.faqs.iter().map(|f| f.id.clone()).collect();
        let document = document.clone();
        on_click(&next, move |_| {
            sync_then_dispatch(&document, &faq_ids, Message::WizardNext);
        })?;
    }
    footer.append_child(&next)?;
    Ok(footer)
}

// ---------------- Value sync ----------------

/// Read every field the current DOM holds into messages, dispatch them, then
/// dispatch the action. The collect pass happens before the first dispatch so
/// later re-renders cannot clobber unsaved input.
fn sync_then_dispatch(document: &Document, faq_ids: &[String], action: Message) {
    for msg in collect_field_updates(document, faq_ids) {
        dispatch_global_message(msg);
    }
    dispatch_global_message(action);
}

fn collect_field_updates(document: &Document, faq_ids: &[String]) -> Vec<Message> {
    let mut updates = Vec::new();

    if document.get_element_by_id("wz-brand").is_some() {
        updates.push(Message::UpdateBrandDescription(textarea_value(
            document, "wz-brand",
        )));
        updates.push(Message::UpdateWebsiteUrl(input_value(document, "wz-url")));
    }

    if let Some(select) = document
        .get_element_by_id("wz-tone")
        .and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
    {
        updates.push(Message::UpdateTone(select.value()));
        updates.push(Message::UpdateToneAvoid(textarea_value(
            document,
            "wz-tone-avoid",
        )));
    }

    for id in faq_ids {
        if document
            .get_element_by_id(&format!("faq-q-{}", id))
            .is_some()
        {
            updates.push(Message::UpdateFaqQuestion {
                id: id.clone(),
                value: input_value(document, &format!("faq-q-{}", id)),
            });
            updates.push(Message::UpdateFaqAnswer {
                id: id.clone(),
                value: textarea_value(document, &format!("faq-a-{}", id)),
            });
        }
    }

    if let Some(msg) = custom_trigger_update(document) {
        updates.push(msg);
    }

    updates
}

fn custom_trigger_update(document: &Document) -> Option<Message> {
    document.get_element_by_id("wz-custom-trigger")?;
    let text = input_value(document, "wz-custom-trigger");
    if text.trim().is_empty() {
        // Empty text keeps whatever is stored, usually the sentinel.
        return None;
    }
    Some(Message::UpdateCustomTrigger(text))
}

fn sync_custom_trigger(document: &Document) {
    if let Some(msg) = custom_trigger_update(document) {
        dispatch_global_message(msg);
    }
}
