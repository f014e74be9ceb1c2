//! Page Configuration
//!
//! Optional overrides embedded in the page as
//! `<script id="qr-ledger-config" type="application/json">{...}</script>`.

use ledger_core::AppConfig;

const CONFIG_ELEMENT_ID: &str = "qr-ledger-config";

/// Read the page's config block, falling back to defaults
pub fn load() -> AppConfig {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(text) if !text.trim().is_empty() => match AppConfig::from_json(&text) {
            Ok(config) => config,
            Err(err) => {
                // Logger is not installed yet
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", err).into());
                AppConfig::default()
            }
        },
        _ => AppConfig::default(),
    }
}
