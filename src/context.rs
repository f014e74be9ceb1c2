//! Application Context
//!
//! View-level handles provided via Leptos Context API: the scanner and the
//! manual entry modal.

use leptos::prelude::*;
use leptos_qrscanner::ScannerController;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// The page's only scanner
    pub scanner: ScannerController,
    /// Manual entry modal visibility - read
    pub manual_open: ReadSignal<bool>,
    /// Manual entry modal visibility - write
    set_manual_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(scanner: ScannerController, manual_open: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            scanner,
            manual_open: manual_open.0,
            set_manual_open: manual_open.1,
        }
    }

    pub fn open_scan(&self) {
        self.scanner.open();
    }

    pub fn close_scan(&self) {
        self.scanner.close();
    }

    pub fn open_manual(&self) {
        self.set_manual_open.set(true);
    }

    pub fn close_manual(&self) {
        self.set_manual_open.set(false);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
