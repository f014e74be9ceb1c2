//! Scanner Controller
//!
//! Connects a `ScannerSession` to the view: opens the widget once its target
//! region is mounted, forwards decoded text, and releases the camera when the
//! modal closes or the owning view is disposed.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use ledger_core::{LedgerError, OpenTicket, ScanPhase, ScannerSession, ScannerSettings};

use crate::widget::QrScanner;

/// Handle to the page's single scanner. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct ScannerController {
    session: StoredValue<ScannerSession<QrScanner>, LocalStorage>,
    /// Delayed construction; dropping it cancels the open
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    settings: StoredValue<ScannerSettings>,
    phase: RwSignal<ScanPhase>,
    on_decoded: Callback<String>,
    on_error: Callback<LedgerError>,
}

/// Create the scanner controller for the current view.
///
/// `on_decoded` runs once per scan with the decoded text, after which the
/// widget is torn down. `on_error` receives construction failures and open
/// requests made while a scan is already running.
pub fn use_qr_scanner(
    settings: ScannerSettings,
    on_decoded: impl Fn(String) + Send + Sync + 'static,
    on_error: impl Fn(LedgerError) + Send + Sync + 'static,
) -> ScannerController {
    let controller = ScannerController {
        session: StoredValue::new_local(ScannerSession::new()),
        pending: StoredValue::new_local(None),
        settings: StoredValue::new(settings),
        phase: RwSignal::new(ScanPhase::Closed),
        on_decoded: Callback::new(on_decoded),
        on_error: Callback::new(on_error),
    };

    on_cleanup(move || {
        log::debug!("[SCAN] view disposed, closing scanner");
        controller.close();
    });

    controller
}

impl ScannerController {
    pub fn phase(&self) -> ReadSignal<ScanPhase> {
        self.phase.read_only()
    }

    pub fn element_id(&self) -> String {
        self.settings.with_value(|s| s.element_id.clone())
    }

    /// Start a scan. The widget is built after the configured delay.
    pub fn open(&self) {
        let ticket = match self.session.try_update_value(|s| s.begin()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(err)) => {
                log::warn!("[SCAN] open ignored: {}", err);
                self.on_error.run(err);
                return;
            }
            None => return,
        };
        self.phase.set(ScanPhase::Opening);

        let this = *self;
        let delay = self.settings.with_value(|s| s.open_delay_ms);
        let timeout = Timeout::new(delay, move || this.attach(ticket));
        self.pending.set_value(Some(timeout));
    }

    /// Cancel the scan and release the camera. Safe in any phase.
    pub fn close(&self) {
        let _ = self.pending.try_set_value(None);
        self.shut();
    }

    /// Timer callback: build the widget if the session still wants it
    fn attach(self, ticket: OpenTicket) {
        let wanted = self
            .session
            .try_with_value(|s| s.is_pending(ticket))
            .unwrap_or(false);
        if !wanted {
            return;
        }

        let Some(settings) = self.settings.try_get_value() else {
            return;
        };
        let mounted = QrScanner::mount(
            &settings,
            move |text| {
                // Leave the widget's callback frame before the widget is torn down
                spawn_local(async move { self.deliver(ticket, text) });
            },
            |message| log::trace!("[SCAN] frame: {}", message),
        );

        match mounted {
            Ok(widget) => match self.session.try_update_value(|s| s.activate(ticket, widget)) {
                Some(Ok(())) => {
                    let _ = self.phase.try_set(ScanPhase::Active);
                }
                Some(Err(err)) => log::debug!("[SCAN] {}", err),
                None => {}
            },
            Err(err) => {
                log::error!("[SCAN] {}", err);
                // Not `close()`: the pending timer is the one running this
                self.shut();
                self.on_error.run(err);
            }
        }
    }

    /// Hand decoded text to the application, then tear the widget down.
    /// Decodes queued after the first one, or coming from a widget that was
    /// already replaced, are dropped.
    fn deliver(self, ticket: OpenTicket, text: String) {
        let current = self
            .session
            .try_with_value(|s| s.is_active(ticket))
            .unwrap_or(false);
        if !current {
            log::debug!("[SCAN] late decode ignored");
            return;
        }

        log::info!("[SCAN] decoded {} bytes", text.len());
        self.on_decoded.run(text);
        let _ = self.session.try_update_value(|s| s.finish());
        let _ = self.phase.try_set(ScanPhase::Closed);
    }

    fn shut(&self) {
        let _ = self.session.try_update_value(|s| s.close());
        let _ = self.phase.try_set(ScanPhase::Closed);
    }
}
