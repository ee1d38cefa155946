pub mod api_client;
pub mod config;

use std::cell::RefCell;

use config::ApiConfig;

thread_local! {
    static API_CONFIG: RefCell<Option<ApiConfig>> = RefCell::new(None);
}

/// Resolve the API configuration once at start-up. Falls back to the local
/// development backend in debug builds so `wasm-pack test` and local runs
/// work without extra environment setup.
pub fn init_api_config() -> Result<(), String> {
    let config = match ApiConfig::new() {
        Ok(c) => c,
        Err(e) => {
            if cfg!(debug_assertions) {
                ApiConfig::default()
            } else {
                return Err(e.to_string());
            }
        }
    };
    API_CONFIG.with(|cell| {
        *cell.borrow_mut() = Some(config);
    });
    Ok(())
}

/// Base URL of the backend; requires `init_api_config` to have run.
pub fn get_api_base_url() -> Result<String, String> {
    API_CONFIG.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|c| c.base_url().to_string())
            .ok_or_else(|| "API configuration not initialised".to_string())
    })
}
