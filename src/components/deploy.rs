//! Deploy screen: LINE channel credentials form and the post-deploy summary.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils::{el, input_value, on_click, text_el};
use crate::messages::Message;
use crate::state::{dispatch_global_message, ActiveView, APP_STATE};

pub fn render(document: &Document) -> Result<(), JsValue> {
    let root = crate::views::app_root(document)?;

    let (is_deploying, deploy_done, channel_id) = APP_STATE.with(|s| {
        let s = s.borrow();
        (
            s.is_deploying,
            s.deploy_done,
            s.deployed_channel_id.clone(),
        )
    });

    let page = el(document, "div", "deploy-page")?;
    page.append_child(&text_el(document, "h2", "wizard-title", "上線到 LINE")?.into())?;

    if deploy_done {
        page.append_child(&text_el(
            document,
            "p",
            "deploy-success",
            "🎉 你的客服已經上線！",
        )?.into())?;
        if let Some(channel_id) = channel_id {
            page.append_child(&text_el(
                document,
                "p",
                "deploy-channel",
                &format!("Channel ID：{}", channel_id),
            )?.into())?;
        }
        let home = text_el(document, "button", "primary-btn", "前往管理後台")?;
        on_click(&home, move |_| {
            dispatch_global_message(Message::NavigateTo(ActiveView::AgentHome));
        })?;
        page.append_child(&home)?;
        root.append_child(&page)?;
        return Ok(());
    }

    page.append_child(&text_el(
        document,
        "p",
        "deploy-hint",
        "貼上 LINE Developers 後台的 Messaging API 憑證。",
    )?.into())?;

    page.append_child(&text_el(
        document,
        "label",
        "field-label",
        "Channel Access Token",
    )?.into())?;
    let token = el(document, "input", "field-input")?;
    token.set_id("line-access-token");
    page.append_child(&token)?;

    page.append_child(&text_el(document, "label", "field-label", "Channel Secret")?.into())?;
    let secret = el(document, "input", "field-input")?;
    secret.set_id("line-channel-secret");
    page.append_child(&secret)?;

    let submit = text_el(
        document,
        "button",
        "primary-btn",
        if is_deploying { "部署中…" } else { "開始部署" },
    )?;
    submit.set_id("deploy-line-btn");
    if is_deploying {
        submit.set_attribute("disabled", "true")?;
    }
    {
        let document = document.clone();
        on_click(&submit, move |_| {
            dispatch_global_message(Message::DeployLine {
                access_token: input_value(&document, "line-access-token"),
                channel_secret: input_value(&document, "line-channel-secret"),
            });
        })?;
    }
    page.append_child(&submit)?;

    let back = text_el(document, "button", "link-btn", "回到試用")?;
    on_click(&back, move |_| {
        dispatch_global_message(Message::NavigateTo(ActiveView::Demo));
    })?;
    page.append_child(&back)?;

    root.append_child(&page)?;
    Ok(())
}
