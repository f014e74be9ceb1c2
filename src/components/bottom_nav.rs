//! Bottom Navigation
//!
//! Fixed tab bar at the bottom of the screen.

use leptos::prelude::*;

use ledger_core::Tab;

use crate::store::{store_active_tab, store_set_tab, use_app_store};

#[component]
pub fn BottomNav() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="bottom-nav">
            {Tab::ALL.into_iter().map(|tab| {
                let is_active = move || store_active_tab(&store) == tab;
                view! {
                    <button
                        class=move || if is_active() { "nav-item active" } else { "nav-item" }
                        aria-label=format!("Navigate to {}", tab.label())
                        on:click=move |_| store_set_tab(&store, tab)
                    >
                        <div class="nav-icon">{tab.icon()}</div>
                        <div class="nav-label">{tab.label()}</div>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
