//! Mounted Scanner Widget

use ledger_core::{LedgerError, LedgerResult, ScannerSettings, ScannerWidget};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::bindings::Html5QrcodeScanner;

type TextCallback = Closure<dyn FnMut(String)>;

/// One rendered `Html5QrcodeScanner` plus the closures it calls back into.
///
/// The closures stay alive until the widget's `clear()` promise settles, so a
/// frame decoded during shutdown never hits a dropped closure.
pub struct QrScanner {
    inner: Html5QrcodeScanner,
    callbacks: Option<(TextCallback, TextCallback)>,
}

impl QrScanner {
    /// Construct the widget inside `settings.element_id` and start scanning
    pub fn mount<S, E>(settings: &ScannerSettings, on_success: S, on_error: E) -> LedgerResult<Self>
    where
        S: FnMut(String) + 'static,
        E: FnMut(String) + 'static,
    {
        let config = serde_wasm_bindgen::to_value(&settings.widget)
            .map_err(|e| LedgerError::ScannerUnavailable(e.to_string()))?;
        let inner = Html5QrcodeScanner::new(&settings.element_id, &config, settings.verbose)
            .map_err(js_error)?;

        let on_success = TextCallback::new(on_success);
        let on_error = TextCallback::new(on_error);
        let mut scanner = Self {
            inner,
            callbacks: None,
        };
        if let Err(err) = scanner.inner.render(&on_success, &on_error) {
            // Keep the callbacks until the half-started widget is cleared
            scanner.callbacks = Some((on_success, on_error));
            scanner.clear();
            return Err(js_error(err));
        }
        scanner.callbacks = Some((on_success, on_error));

        log::debug!("[SCAN] widget mounted in #{}", settings.element_id);
        Ok(scanner)
    }
}

impl ScannerWidget for QrScanner {
    fn clear(&mut self) {
        let Some(callbacks) = self.callbacks.take() else {
            return;
        };

        match self.inner.clear() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("[SCAN] widget clear failed: {:?}", err);
                }
                drop(callbacks);
            }),
            Err(err) => log::warn!("[SCAN] widget clear threw: {:?}", err),
        }
    }
}

impl Drop for QrScanner {
    fn drop(&mut self) {
        self.clear();
    }
}

fn js_error(err: JsValue) -> LedgerError {
    let message = err
        .as_string()
        .or_else(|| js_sys::Reflect::get(&err, &"message".into()).ok().and_then(|m| m.as_string()))
        .unwrap_or_else(|| format!("{:?}", err));
    LedgerError::ScannerUnavailable(message)
}
