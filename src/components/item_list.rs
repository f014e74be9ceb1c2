//! Item List Component
//!
//! Collected items, newest first, each with a delete button.

use leptos::prelude::*;

use ledger_core::Item;

use crate::store::{store_delete_item, store_items, use_app_store};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();
    let items = Memo::new(move |_| store_items(&store));

    view! {
        <Show
            when=move || !items.read().is_empty()
            fallback=|| view! {
                <div class="empty-state">
                    <div class="empty-icon">"📭"</div>
                    <p>"No data yet"</p>
                </div>
            }
        >
            <ul class="item-list">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>
        </Show>
    }
}

#[component]
fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;

    view! {
        <li class="item-row">
            <div class="item-meta">
                <span class="item-name">{item.name}</span>
                <span class="item-code">{item.code}</span>
                <span class="item-time">{item.timestamp}</span>
            </div>
            <button
                class="delete-btn"
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_delete_item(&store, id);
                }
            >
                "🗑"
            </button>
        </li>
    }
}
