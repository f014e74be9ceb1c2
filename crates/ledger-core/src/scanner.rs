//! Scanner Session
//!
//! Owns the external scanning widget for the length of one scan.
//!
//! ```text
//!   Closed ──begin()──▶ Opening ──activate()──▶ Active
//!     ▲                   │                       │
//!     └──── close() ──────┘◀── finish()/close() ──┘
//! ```
//!
//! The widget is cleared exactly once per activation: on a successful decode,
//! on explicit close, or when the session is dropped.

use crate::error::{LedgerError, LedgerResult};

/// A running scanner that holds the camera until cleared
pub trait ScannerWidget {
    /// Stop capture and release the camera
    fn clear(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Closed,
    Opening,
    Active,
}

impl ScanPhase {
    pub fn is_open(&self) -> bool {
        !matches!(self, ScanPhase::Closed)
    }
}

/// Proof of a pending open, redeemed by `activate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenTicket(u64);

impl OpenTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

enum SessionState<W> {
    Closed,
    Opening(OpenTicket),
    Active(OpenTicket, W),
}

pub struct ScannerSession<W: ScannerWidget> {
    state: SessionState<W>,
    next_ticket: u64,
}

impl<W: ScannerWidget> Default for ScannerSession<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ScannerWidget> ScannerSession<W> {
    pub fn new() -> Self {
        Self {
            state: SessionState::Closed,
            next_ticket: 1,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        match self.state {
            SessionState::Closed => ScanPhase::Closed,
            SessionState::Opening(_) => ScanPhase::Opening,
            SessionState::Active(..) => ScanPhase::Active,
        }
    }

    /// Request a scan. Only valid while closed.
    pub fn begin(&mut self) -> LedgerResult<OpenTicket> {
        match self.state {
            SessionState::Closed => {
                let ticket = OpenTicket(self.next_ticket);
                self.next_ticket += 1;
                self.state = SessionState::Opening(ticket);
                log::debug!("[SCAN] session {} opening", ticket.0);
                Ok(ticket)
            }
            SessionState::Opening(_) => Err(LedgerError::ScannerBusy("opening")),
            SessionState::Active(..) => Err(LedgerError::ScannerBusy("active")),
        }
    }

    /// Whether `ticket` still refers to the pending open
    pub fn is_pending(&self, ticket: OpenTicket) -> bool {
        matches!(self.state, SessionState::Opening(t) if t == ticket)
    }

    /// Hand over a constructed widget. A stale ticket means the user already
    /// closed the modal, so the widget is cleared straight away.
    pub fn activate(&mut self, ticket: OpenTicket, mut widget: W) -> LedgerResult<()> {
        if !self.is_pending(ticket) {
            widget.clear();
            log::debug!("[SCAN] session {} no longer pending, widget released", ticket.0);
            return Err(LedgerError::StaleTicket(ticket.0));
        }
        self.state = SessionState::Active(ticket, widget);
        log::debug!("[SCAN] session {} active", ticket.0);
        Ok(())
    }

    /// Whether the widget opened with `ticket` is the one running now.
    /// Decodes from an earlier widget that is still shutting down fail this.
    pub fn is_active(&self, ticket: OpenTicket) -> bool {
        matches!(self.state, SessionState::Active(t, _) if t == ticket)
    }

    /// Tear down after a successful decode
    pub fn finish(&mut self) -> bool {
        self.release("decoded")
    }

    /// Cancel the session. Safe to call in any phase, any number of times.
    pub fn close(&mut self) -> bool {
        self.release("closed")
    }

    /// Returns whether a widget was cleared
    fn release(&mut self, reason: &str) -> bool {
        match std::mem::replace(&mut self.state, SessionState::Closed) {
            SessionState::Active(_, mut widget) => {
                widget.clear();
                log::debug!("[SCAN] widget released ({})", reason);
                true
            }
            SessionState::Opening(ticket) => {
                log::debug!("[SCAN] session {} cancelled before activation", ticket.0);
                false
            }
            SessionState::Closed => false,
        }
    }
}

impl<W: ScannerWidget> Drop for ScannerSession<W> {
    fn drop(&mut self) {
        self.release("dropped");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Widget that counts how often it was cleared
    pub(crate) struct FakeWidget {
        pub clears: Rc<Cell<u32>>,
    }

    impl FakeWidget {
        pub fn new() -> (Self, Rc<Cell<u32>>) {
            let clears = Rc::new(Cell::new(0));
            (Self { clears: clears.clone() }, clears)
        }
    }

    impl ScannerWidget for FakeWidget {
        fn clear(&mut self) {
            self.clears.set(self.clears.get() + 1);
        }
    }

    #[test]
    fn test_open_activate_close() {
        let mut session = ScannerSession::new();
        let ticket = session.begin().unwrap();
        assert_eq!(session.phase(), ScanPhase::Opening);

        let (widget, clears) = FakeWidget::new();
        session.activate(ticket, widget).unwrap();
        assert_eq!(session.phase(), ScanPhase::Active);

        assert!(session.close());
        assert_eq!(session.phase(), ScanPhase::Closed);
        assert_eq!(clears.get(), 1);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut session = ScannerSession::new();
        let ticket = session.begin().unwrap();
        let (widget, clears) = FakeWidget::new();
        session.activate(ticket, widget).unwrap();

        session.close();
        session.close();
        assert_eq!(clears.get(), 1);
    }

    #[test]
    fn test_finish_releases_widget() {
        let mut session = ScannerSession::new();
        let ticket = session.begin().unwrap();
        let (widget, clears) = FakeWidget::new();
        session.activate(ticket, widget).unwrap();

        assert!(session.finish());
        assert_eq!(session.phase(), ScanPhase::Closed);
        assert_eq!(clears.get(), 1);
    }

    #[test]
    fn test_begin_while_open_is_rejected() {
        let mut session: ScannerSession<FakeWidget> = ScannerSession::new();
        session.begin().unwrap();
        assert_eq!(session.begin(), Err(LedgerError::ScannerBusy("opening")));
    }

    #[test]
    fn test_close_while_opening_invalidates_ticket() {
        let mut session = ScannerSession::new();
        let ticket = session.begin().unwrap();
        assert!(!session.close());
        assert!(!session.is_pending(ticket));

        let (widget, clears) = FakeWidget::new();
        assert_eq!(session.activate(ticket, widget), Err(LedgerError::StaleTicket(ticket.id())));
        assert_eq!(session.phase(), ScanPhase::Closed);
        assert_eq!(clears.get(), 1);
    }

    #[test]
    fn test_old_ticket_cannot_hijack_new_session() {
        let mut session = ScannerSession::new();
        let first = session.begin().unwrap();
        session.close();
        let second = session.begin().unwrap();

        let (widget, _) = FakeWidget::new();
        assert!(session.activate(first, widget).is_err());
        assert!(session.is_pending(second));
    }

    #[test]
    fn test_is_active_tracks_current_ticket() {
        let mut session = ScannerSession::new();
        let ticket = session.begin().unwrap();
        assert!(!session.is_active(ticket));

        let (widget, _) = FakeWidget::new();
        session.activate(ticket, widget).unwrap();
        assert!(session.is_active(ticket));

        session.finish();
        assert!(!session.is_active(ticket));
    }

    #[test]
    fn test_decode_from_previous_widget_is_not_current() {
        let mut session = ScannerSession::new();
        let first = session.begin().unwrap();
        let (widget, first_clears) = FakeWidget::new();
        session.activate(first, widget).unwrap();
        session.close();

        let second = session.begin().unwrap();
        let (widget, second_clears) = FakeWidget::new();
        session.activate(second, widget).unwrap();

        // The old widget's callback may still fire while its clear settles
        assert!(!session.is_active(first));
        assert!(session.is_active(second));
        assert_eq!(session.phase(), ScanPhase::Active);
        assert_eq!((first_clears.get(), second_clears.get()), (1, 0));
    }

    #[test]
    fn test_drop_releases_active_widget() {
        let (widget, clears) = FakeWidget::new();
        {
            let mut session = ScannerSession::new();
            let ticket = session.begin().unwrap();
            session.activate(ticket, widget).unwrap();
        }
        assert_eq!(clears.get(), 1);
    }
}
