//! REST client for the customer-service backend. Methods take and return
//! raw JSON strings; callers own the serde types on both sides of the call.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub struct ApiClient;

fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

impl ApiClient {
    fn api_base_url() -> String {
        super::get_api_base_url().unwrap_or_else(|_| {
            // Tests run without the bootstrap sequence; match its fallback.
            super::config::ApiConfig::default().base_url().to_string()
        })
    }

    // ---------------- Session / auth ----------------

    pub async fn init_session() -> Result<String, JsValue> {
        let url = format!("{}/api/init_session", Self::api_base_url());
        Self::fetch_json(&url, "GET", None).await
    }

    pub async fn admin_login(payload: &str) -> Result<String, JsValue> {
        let url = format!("{}/api/admin/login", Self::api_base_url());
        Self::fetch_json(&url, "POST", Some(payload)).await
    }

    // ---------------- Agent administration ----------------

    pub async fn get_agents(user_id: &str) -> Result<String, JsValue> {
        let url = format!(
            "{}/api/admin/agents?userId={}",
            Self::api_base_url(),
            encode(user_id)
        );
        Self::fetch_json(&url, "GET", None).await
    }

    pub async fn get_agent(agent_id: &str, user_id: &str) -> Result<String, JsValue> {
        let url = format!(
            "{}/api/admin/agent/{}?userId={}",
            Self::api_base_url(),
            encode(agent_id),
            encode(user_id)
        );
        Self::fetch_json(&url, "GET", None).await
    }

    pub async fn get_agent_stats(agent_id: &str, user_id: &str) -> Result<String, JsValue> {
        let url = format!(
            "{}/api/admin/agent/{}/stats?userId={}",
            Self::api_base_url(),
            encode(agent_id),
            encode(user_id)
        );
        Self::fetch_json(&url, "GET", None).await
    }

    pub async fn get_available_subagents(agent_id: &str) -> Result<String, JsValue> {
        let url = format!(
            "{}/api/admin/agent/{}/available_subagents",
            Self::api_base_url(),
            encode(agent_id)
        );
        Self::fetch_json(&url, "GET", None).await
    }

    pub async fn add_subagent(agent_id: &str, payload: &str) -> Result<String, JsValue> {
        let url = format!(
            "{}/api/admin/agent/{}/add_subagent",
            Self::api_base_url(),
            encode(agent_id)
        );
        Self::fetch_json(&url, "POST", Some(payload)).await
    }

    pub async fn update_faqs(agent_id: &str, payload: &str) -> Result<String, JsValue> {
        let url = format!(
            "{}/api/admin/agent/{}/update_faqs",
            Self::api_base_url(),
            encode(agent_id)
        );
        Self::fetch_json(&url, "POST", Some(payload)).await
    }

    pub async fn update_handoff(agent_id: &str, payload: &str) -> Result<String, JsValue> {
        let url = format!(
            "{}/api/admin/agent/{}/update_handoff",
            Self::api_base_url(),
            encode(agent_id)
        );
        Self::fetch_json(&url, "POST", Some(payload)).await
    }

    pub async fn update_config(agent_id: &str, payload: &str) -> Result<String, JsValue> {
        let url = format!(
            "{}/api/admin/agent/{}/update_config",
            Self::api_base_url(),
            encode(agent_id)
        );
        Self::fetch_json(&url, "POST", Some(payload)).await
    }

    // ---------------- Setup flow ----------------

    pub async fn generate_prompt(payload: &str) -> Result<String, JsValue> {
        let url = format!("{}/api/generate_prompt", Self::api_base_url());
        Self::fetch_json(&url, "POST", Some(payload)).await
    }

    pub async fn confirm_setup(payload: &str) -> Result<String, JsValue> {
        let url = format!("{}/api/confirm_setup", Self::api_base_url());
        Self::fetch_json(&url, "POST", Some(payload)).await
    }

    pub async fn generate_faqs(payload: &str) -> Result<String, JsValue> {
        let url = format!("{}/api/generate_faqs", Self::api_base_url());
        Self::fetch_json(&url, "POST", Some(payload)).await
    }

    pub async fn optimize_faq(payload: &str) -> Result<String, JsValue> {
        let url = format!("{}/api/optimize_faq", Self::api_base_url());
        Self::fetch_json(&url, "POST", Some(payload)).await
    }

    // ---------------- Chat & deployment ----------------

    pub async fn chat(payload: &str) -> Result<String, JsValue> {
        let url = format!("{}/api/chat", Self::api_base_url());
        Self::fetch_json(&url, "POST", Some(payload)).await
    }

    pub async fn deploy_line(payload: &str) -> Result<String, JsValue> {
        let url = format!("{}/api/deploy_line", Self::api_base_url());
        Self::fetch_json(&url, "POST", Some(payload)).await
    }

    // ---------------- Shared fetch helper ----------------

    pub async fn fetch_json(
        url: &str,
        method: &str,
        body: Option<&str>,
    ) -> Result<String, JsValue> {
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        if let Some(data) = body {
            opts.set_body(&JsValue::from_str(data));
            headers.append("Content-Type", "application/json")?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(JsValue::from_str(&format!(
                "API request failed: {} {}",
                resp.status(),
                resp.status_text()
            )));
        }

        // Body as text; the caller decodes JSON with its own types.
        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}
