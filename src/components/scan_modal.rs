//! Scan Modal
//!
//! Hosts the region the scanner widget renders into. Open while the scanner
//! is opening or active; closing it releases the camera.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::use_app_context;

#[component]
pub fn ScanModal() -> impl IntoView {
    let ctx = use_app_context();
    let phase = ctx.scanner.phase();
    let element_id = ctx.scanner.element_id();

    view! {
        <Modal
            title="Scan QR Code"
            open=Signal::derive(move || phase.get().is_open())
            on_cancel=move |_| ctx.close_scan()
        >
            <div class="scan-region">
                <div id=element_id.clone() class="qr-reader"></div>
                <p class="muted small">"Point the camera at a QR code"</p>
            </div>
        </Modal>
    }
}
