//! Home Page
//!
//! Item count, the item list and the floating add buttons.

use leptos::prelude::*;

use crate::components::{FloatActions, ItemList};
use crate::store::{store_item_count, use_app_store};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Data Items"</h1>
                <span class="count-tag">{move || format!("{} items", store_item_count(&store))}</span>
            </div>
            <ItemList />
            <FloatActions />
        </div>
    }
}
