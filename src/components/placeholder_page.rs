//! Placeholder Page
//!
//! Static card for screens that have no content yet.

use leptos::prelude::*;

use ledger_core::Tab;

#[component]
pub fn PlaceholderPage(
    tab: Tab,
    #[prop(into)] heading: String,
    #[prop(into)] hint: String,
) -> impl IntoView {
    view! {
        <div class="page">
            <h1>{tab.label()}</h1>
            <div class="card centered">
                <div class="card-icon">{tab.icon()}</div>
                <h3>{heading}</h3>
                <p class="muted">{hint}</p>
            </div>
        </div>
    }
}
