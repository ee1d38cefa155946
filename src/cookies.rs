//! Login cookie helpers. The platform identity (`line_user_id` /
//! `line_user_name`) is the only state that survives a page reload.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::constants::{COOKIE_MAX_AGE_DAYS, COOKIE_USER_ID, COOKIE_USER_NAME};

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Write a cookie with the fixed 7-day expiry used for login identity.
/// Values are URI-encoded so display names with `;`, `=` or spaces survive.
pub fn set_cookie(name: &str, value: &str) {
    if let Some(doc) = html_document() {
        let max_age = COOKIE_MAX_AGE_DAYS * 24 * 60 * 60;
        let encoded = String::from(js_sys::encode_uri_component(value));
        let _ = doc.set_cookie(&format!("{}={}; max-age={}; path=/", name, encoded, max_age));
    }
}

pub fn get_cookie(name: &str) -> Option<String> {
    let doc = html_document()?;
    let all = doc.cookie().ok()?;
    for pair in all.split(';') {
        let pair = pair.trim();
        if let Some((key, value)) = pair.split_once('=') {
            if key == name && !value.is_empty() {
                let decoded = js_sys::decode_uri_component(value)
                    .map(String::from)
                    .unwrap_or_else(|_| value.to_string());
                return Some(decoded);
            }
        }
    }
    None
}

pub fn store_login(user_id: &str, user_name: &str) {
    set_cookie(COOKIE_USER_ID, user_id);
    set_cookie(COOKIE_USER_NAME, user_name);
}

/// Returns `(user_id, user_name)` when both login cookies are present.
pub fn stored_login() -> Option<(String, String)> {
    let id = get_cookie(COOKIE_USER_ID)?;
    let name = get_cookie(COOKIE_USER_NAME)?;
    Some((id, name))
}
