//! Toast Stack
//!
//! Success and error notices floating above the content.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.notices().read().notices().to_vec()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=format!("toast {}", notice.kind.as_str())
                            on:click=move |_| store_dismiss_notice(&store, id)
                        >
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
