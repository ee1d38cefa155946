use wasm_bindgen::prelude::*;

#[macro_use]
mod macros;

mod command_executors;
mod components;
mod constants;
mod cookies;
mod dom_utils;
mod messages;
mod models;
mod network;
mod reducers;
mod state;
mod toast;
mod triggers;
mod update;
mod views;

#[cfg(all(test, target_arch = "wasm32"))]
mod flow_tests;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if let Err(e) = network::init_api_config() {
        web_sys::console::error_1(&format!("API configuration error: {}", e).into());
        return Err(JsValue::from_str(&e));
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document on window"))?;

    ensure_app_container(&document)?;

    // Returning operators keep their identity across reloads; the login
    // cookies pre-seed state so the landing screen can offer the dashboard.
    if let Some((user_id, user_name)) = cookies::stored_login() {
        state::APP_STATE.with(|s| {
            let mut s = s.borrow_mut();
            s.line_user_id = user_id;
            s.line_user_name = user_name;
        });
    }

    state::AppState::refresh_ui_after_state_change()?;
    debug_log!("Application started");
    Ok(())
}

fn ensure_app_container(document: &web_sys::Document) -> Result<(), JsValue> {
    if document.get_element_by_id("app-container").is_some() {
        return Ok(());
    }
    let container = document.create_element("div")?;
    container.set_id("app-container");
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&container)?;
    Ok(())
}
