//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Components never
//! write fields directly; they go through the helpers below.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use ledger_core::{AppConfig, Item, ItemId, Ledger, LedgerResult, ManualInput, Notice, NoticeBoard, Tab};

/// Page-session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Collected items, newest first
    pub ledger: Ledger,
    /// Toasts currently shown
    pub notices: NoticeBoard,
    /// Screen selected in the bottom navigation
    pub active_tab: Tab,
    /// How long a toast stays up
    pub notice_ttl_ms: u32,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let ledger = if config.seed_samples { Ledger::new().with_samples() } else { Ledger::new() };
        Self {
            ledger,
            notices: NoticeBoard::with_capacity(config.max_notices),
            active_tab: Tab::Home,
            notice_ttl_ms: config.notice_ttl_ms,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Items in display order (tracked)
pub fn store_items(store: &AppStore) -> Vec<Item> {
    store.ledger().read().items().to_vec()
}

pub fn store_item_count(store: &AppStore) -> usize {
    store.ledger().read().len()
}

pub fn store_active_tab(store: &AppStore) -> Tab {
    store.active_tab().get()
}

/// Switch screens. Items and scanner are left alone.
pub fn store_set_tab(store: &AppStore, tab: Tab) {
    *store.active_tab().write() = tab;
}

/// Show a toast and schedule its dismissal
pub fn store_notify(store: &AppStore, notice: Notice) {
    let id = store.notices().write().push(notice);
    let ttl = store.notice_ttl_ms().get_untracked();
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(ttl).await;
        store_dismiss_notice(&store, id);
    });
}

pub fn store_dismiss_notice(store: &AppStore, id: u32) {
    store.notices().write().dismiss(id);
}

/// Toast the outcome of a ledger operation. Returns whether it succeeded.
pub fn store_report(store: &AppStore, result: LedgerResult<Notice>) -> bool {
    match result {
        Ok(notice) => {
            store_notify(store, notice);
            true
        }
        Err(err) => {
            log::warn!("[APP] {}", err);
            store_notify(store, Notice::from_error(&err));
            false
        }
    }
}

/// Add an item from decoded QR text
pub fn store_ingest_qr(store: &AppStore, text: &str) -> bool {
    let result = store.ledger().write().ingest_qr(text);
    store_report(store, result)
}

/// Add the manual draft. On success the draft is cleared.
pub fn store_submit_manual(store: &AppStore, draft: &mut ManualInput) -> bool {
    let result = store.ledger().write().submit_manual(draft);
    store_report(store, result)
}

/// Remove an item by ID
pub fn store_delete_item(store: &AppStore, id: ItemId) {
    let notice = store.ledger().write().delete_item(id);
    store_notify(store, notice);
}
