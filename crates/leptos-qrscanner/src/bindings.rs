//! html5-qrcode Imports

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Camera scanner with its own start/stop UI
    #[derive(Debug, Clone)]
    pub type Html5QrcodeScanner;

    /// `new Html5QrcodeScanner(elementId, config, verbose)`
    #[wasm_bindgen(constructor, catch)]
    pub fn new(element_id: &str, config: &JsValue, verbose: bool) -> Result<Html5QrcodeScanner, JsValue>;

    /// Start rendering into the element. `on_success` receives the decoded
    /// text, `on_error` a per-frame failure message.
    #[wasm_bindgen(method, catch)]
    pub fn render(
        this: &Html5QrcodeScanner,
        on_success: &Closure<dyn FnMut(String)>,
        on_error: &Closure<dyn FnMut(String)>,
    ) -> Result<(), JsValue>;

    /// Stop the camera and remove the widget UI
    #[wasm_bindgen(method, catch)]
    pub fn clear(this: &Html5QrcodeScanner) -> Result<js_sys::Promise, JsValue>;
}
