//! Floating Action Buttons
//!
//! ＋ button in the corner that unfolds into "scan" and "add manually".

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn FloatActions() -> impl IntoView {
    let ctx = use_app_context();
    let (expanded, set_expanded) = signal(false);

    view! {
        <div class=move || if expanded.get() { "fab-group expanded" } else { "fab-group" }>
            <Show when=move || expanded.get()>
                <button
                    class="fab small"
                    title="Scan QR Code"
                    on:click=move |_| {
                        set_expanded.set(false);
                        ctx.open_scan();
                    }
                >
                    "📷"
                </button>
                <button
                    class="fab small"
                    title="Add manually"
                    on:click=move |_| {
                        set_expanded.set(false);
                        ctx.open_manual();
                    }
                >
                    "✎"
                </button>
            </Show>
            <button class="fab" on:click=move |_| set_expanded.update(|v| *v = !*v)>
                {move || if expanded.get() { "✕" } else { "＋" }}
            </button>
        </div>
    }
}
