//! Scan Page
//!
//! Card with a single button that opens the scanner.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ScanPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page">
            <h1>"QR Scanner"</h1>
            <div class="card centered">
                <div class="card-icon accent">"🔳"</div>
                <p class="muted">"Use the scan button to read a QR code"</p>
                <button class="primary-btn large" on:click=move |_| ctx.open_scan()>
                    "📷 Start scan"
                </button>
            </div>
        </div>
    }
}
