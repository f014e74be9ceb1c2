//! Modal Component
//!
//! Centered dialog over a dimmed backdrop. Clicking the backdrop or ✕ cancels.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_cancel: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = StoredValue::new(title);

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <span class="modal-title">{title.get_value()}</span>
                        <button class="modal-close" on:click=move |_| on_cancel.run(())>
                            "✕"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
