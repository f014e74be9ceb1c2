//! Manual Entry Modal
//!
//! Form for typing in an item name and code.

use leptos::prelude::*;

use ledger_core::ManualInput;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::store::{store_submit_manual, use_app_store};

#[component]
pub fn ManualEntryModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let draft = RwSignal::new(ManualInput::default());

    let cancel = move || {
        draft.update(|d| d.reset());
        ctx.close_manual();
    };

    let submit = move || {
        let mut input = draft.get_untracked();
        if store_submit_manual(&store, &mut input) {
            draft.set(input);
            ctx.close_manual();
        }
    };

    view! {
        <Modal
            title="Add Item Manually"
            open=ctx.manual_open
            on_cancel=move |_| cancel()
        >
            <form
                class="manual-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <label class="field">
                    <span class="field-label">"Item name"</span>
                    <input
                        type="text"
                        placeholder="Enter item name"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Item code"</span>
                    <input
                        type="text"
                        placeholder="Enter item code"
                        prop:value=move || draft.with(|d| d.code.clone())
                        on:input=move |ev| draft.update(|d| d.code = event_target_value(&ev))
                    />
                </label>
                <div class="modal-footer">
                    <button type="button" class="secondary-btn" on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                    <button type="submit" class="primary-btn">"Add"</button>
                </div>
            </form>
        </Modal>
    }
}
