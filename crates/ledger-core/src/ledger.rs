//! Ledger
//!
//! The item store together with id generation and the clock. Every user action
//! that changes the list goes through here and yields the notice to show.

use crate::clock::{format_timestamp, Clock, SystemClock};
use crate::error::LedgerResult;
use crate::item::{IdGenerator, Item, ItemId};
use crate::manual::ManualInput;
use crate::notice::{Notice, MSG_ITEM_ADDED, MSG_ITEM_DELETED, MSG_QR_SCANNED};
use crate::qr::QrPayload;
use crate::store::ItemStore;

#[derive(Debug, Clone, Default)]
pub struct Ledger<C: Clock = SystemClock> {
    store: ItemStore,
    ids: IdGenerator,
    clock: C,
}

impl Ledger<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Ledger<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: ItemStore::new(),
            ids: IdGenerator::default(),
            clock,
        }
    }

    /// Seed the two sample items a fresh session starts with
    pub fn with_samples(mut self) -> Self {
        let timestamp = format_timestamp(&self.clock.local_time());
        let samples = vec![
            Item::new(1, "Item Sample 1", "SAMPLE001", timestamp.clone()),
            Item::new(2, "Item Sample 2", "SAMPLE002", timestamp),
        ];
        for item in &samples {
            self.ids.observe(item.id);
        }
        self.store = ItemStore::from_items(samples);
        self
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Build an item stamped with a fresh id and the current time
    fn stamp(&mut self, name: String, code: String) -> Item {
        let id = self.ids.next(self.clock.epoch_millis());
        let timestamp = format_timestamp(&self.clock.local_time());
        Item { id, name, code, timestamp }
    }

    pub fn add_item(&mut self, item: Item) -> Notice {
        self.ids.observe(item.id);
        log::info!("[LEDGER] add #{} code={}", item.id, item.code);
        self.store.add(item);
        Notice::success(MSG_ITEM_ADDED)
    }

    /// Remove by id. Unknown ids still report success.
    pub fn delete_item(&mut self, id: ItemId) -> Notice {
        match self.store.delete(id) {
            Some(item) => log::info!("[LEDGER] deleted #{} code={}", id, item.code),
            None => log::debug!("[LEDGER] delete #{}: not present", id),
        }
        Notice::success(MSG_ITEM_DELETED)
    }

    /// Turn decoded QR text into an item. Nothing is inserted on error.
    pub fn ingest_qr(&mut self, text: &str) -> LedgerResult<Notice> {
        let now = self.clock.epoch_millis();
        let (name, code) = QrPayload::parse(text)?.resolve(text, now)?;
        let item = self.stamp(name, code);
        self.add_item(item);
        Ok(Notice::success(MSG_QR_SCANNED))
    }

    /// Insert the draft as an item and clear it. The draft is left untouched
    /// when a field is missing.
    pub fn submit_manual(&mut self, draft: &mut ManualInput) -> LedgerResult<Notice> {
        draft.validate()?;
        let item = self.stamp(draft.name.clone(), draft.code.clone());
        let notice = self.add_item(item);
        draft.reset();
        Ok(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::LedgerError;
    use crate::notice::NoticeKind;

    fn ledger() -> Ledger<ManualClock> {
        Ledger::with_clock(ManualClock::at(1_700_000_000_000))
    }

    #[test]
    fn test_samples() {
        let ledger = ledger().with_samples();
        let codes: Vec<_> = ledger.items().iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["SAMPLE001", "SAMPLE002"]);
        assert_eq!(ledger.items()[0].id, 1);
    }

    #[test]
    fn test_ingest_structured_qr() {
        let mut ledger = ledger();
        let notice = ledger.ingest_qr(r#"{"name":"Widget","code":"W-1"}"#).unwrap();

        assert_eq!(notice.message, MSG_QR_SCANNED);
        let item = &ledger.items()[0];
        assert_eq!(item.name, "Widget");
        assert_eq!(item.code, "W-1");
        assert_eq!(item.id, 1_700_000_000_000);
        assert_eq!(item.timestamp, "14/11/2023, 22.13.20");
    }

    #[test]
    fn test_ingest_raw_qr() {
        let mut ledger = ledger();
        ledger.ingest_qr("RAW123").unwrap();

        let item = &ledger.items()[0];
        assert_eq!(item.code, "RAW123");
        assert_eq!(item.name, "QR Item 1700000000000");
    }

    #[test]
    fn test_ingest_failure_inserts_nothing() {
        let mut ledger = ledger();
        let err = ledger.ingest_qr("null").unwrap_err();
        assert_eq!(Notice::from_error(&err).kind, NoticeKind::Error);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_submit_manual_clears_draft() {
        let mut ledger = ledger();
        let mut draft = ManualInput::new("Bolt", "B-42");

        let notice = ledger.submit_manual(&mut draft).unwrap();
        assert_eq!(notice.message, MSG_ITEM_ADDED);
        assert!(draft.is_blank());
        assert_eq!(ledger.items()[0].name, "Bolt");
    }

    #[test]
    fn test_submit_manual_rejects_missing_field() {
        let mut ledger = ledger().with_samples();
        let mut draft = ManualInput::new("Bolt", "");

        assert_eq!(ledger.submit_manual(&mut draft), Err(LedgerError::MissingField));
        assert_eq!(ledger.len(), 2);
        assert_eq!(draft, ManualInput::new("Bolt", ""));
    }

    #[test]
    fn test_same_millisecond_items_get_distinct_ids() {
        let mut ledger = ledger();
        ledger.ingest_qr("A").unwrap();
        ledger.ingest_qr("B").unwrap();

        let ids: Vec<_> = ledger.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1_700_000_000_001, 1_700_000_000_000]);
    }

    #[test]
    fn test_delete_reports_success_even_when_absent() {
        let mut ledger = ledger().with_samples();
        assert_eq!(ledger.delete_item(1).message, MSG_ITEM_DELETED);
        assert_eq!(ledger.delete_item(1).message, MSG_ITEM_DELETED);
        assert_eq!(ledger.len(), 1);
    }
}
