//! QR Ledger App
//!
//! Mobile layout: current screen, bottom navigation, the two modals and the
//! toast stack.

use leptos::prelude::*;
use reactive_stores::Store;

use ledger_core::{AppConfig, Notice, Tab};
use leptos_qrscanner::use_qr_scanner;

use crate::components::{BottomNav, HomePage, ManualEntryModal, PlaceholderPage, ScanModal, ScanPage, ToastStack};
use crate::context::AppContext;
use crate::store::{store_active_tab, store_ingest_qr, store_notify, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(&config));
    provide_context(store);

    let scanner = use_qr_scanner(
        config.scanner.clone(),
        move |text| {
            store_ingest_qr(&store, &text);
        },
        move |err| store_notify(&store, Notice::from_error(&err)),
    );
    provide_context(AppContext::new(scanner, signal(false)));

    log::info!("[APP] started with {} items", store.ledger().read_untracked().len());

    view! {
        <div class="app-layout">
            <main class="main-content">
                {move || match store_active_tab(&store) {
                    Tab::Home => view! { <HomePage /> }.into_any(),
                    Tab::Scan => view! { <ScanPage /> }.into_any(),
                    Tab::Profile => view! {
                        <PlaceholderPage
                            tab=Tab::Profile
                            heading="User Profile"
                            hint="Profile settings will be available here"
                        />
                    }.into_any(),
                    Tab::Settings => view! {
                        <PlaceholderPage
                            tab=Tab::Settings
                            heading="App Settings"
                            hint="App settings will be available here"
                        />
                    }.into_any(),
                }}
            </main>

            <BottomNav />
            <ScanModal />
            <ManualEntryModal />
            <ToastStack />
        </div>
    }
}
