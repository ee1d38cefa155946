//! Landing screen: entry into the setup wizard plus the operator login used
//! by the backend dashboard.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils::{el, input_value, on_click, text_el};
use crate::messages::Message;
use crate::state::{dispatch_global_message, APP_STATE};

pub fn render(document: &Document) -> Result<(), JsValue> {
    let root = crate::views::app_root(document)?;

    let page = el(document, "div", "landing-page")?;
    page.append_child(&text_el(
        document,
        "h1",
        "landing-title",
        "AI 智能客服",
    )?.into())?;
    page.append_child(&text_el(
        document,
        "p",
        "landing-subtitle",
        "三分鐘打造你的品牌客服機器人",
    )?.into())?;

    let (is_initializing, logged_in) = APP_STATE.with(|s| {
        let s = s.borrow();
        (s.is_initializing_session, !s.line_user_id.is_empty())
    });

    let start = text_el(
        document,
        "button",
        "primary-btn",
        if is_initializing {
            "連線中…"
        } else {
            "開始設定"
        },
    )?;
    start.set_id("start-setup-btn");
    if is_initializing {
        start.set_attribute("disabled", "true")?;
    }
    on_click(&start, move |_| {
        dispatch_global_message(Message::StartSetup);
    })?;
    page.append_child(&start)?;

    // Operator login. Cookies pre-fill the fields for returning admins.
    let login = el(document, "div", "landing-login")?;
    login.append_child(&text_el(document, "h2", "", "管理後台登入")?.into())?;

    let (cookie_id, cookie_name) =
        crate::cookies::stored_login().unwrap_or((String::new(), String::new()));

    let id_input = el(document, "input", "login-input")?;
    id_input.set_id("login-user-id");
    id_input.set_attribute("placeholder", "LINE User ID")?;
    id_input.set_attribute("value", &cookie_id)?;
    login.append_child(&id_input)?;

    let name_input = el(document, "input", "login-input")?;
    name_input.set_id("login-user-name");
    name_input.set_attribute("placeholder", "顯示名稱")?;
    name_input.set_attribute("value", &cookie_name)?;
    login.append_child(&name_input)?;

    let login_btn = text_el(document, "button", "secondary-btn", "登入")?;
    login_btn.set_id("login-btn");
    {
        let document = document.clone();
        on_click(&login_btn, move |_| {
            let user_id = input_value(&document, "login-user-id");
            let name = input_value(&document, "login-user-name");
            if user_id.trim().is_empty() {
                crate::toast::error("請輸入 LINE User ID");
                return;
            }
            dispatch_global_message(Message::PlatformLogin { user_id, name });
        })?;
    }
    login.append_child(&login_btn)?;

    if logged_in {
        let home_btn = text_el(document, "button", "link-btn", "我的客服列表")?;
        on_click(&home_btn, move |_| {
            dispatch_global_message(Message::NavigateTo(crate::state::ActiveView::AgentHome));
        })?;
        login.append_child(&home_btn)?;
    }

    page.append_child(&login)?;
    root.append_child(&page)?;
    Ok(())
}
