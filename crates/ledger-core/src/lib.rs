//! Ledger Core
//!
//! Pure logic behind the QR ledger view, free of DOM and JS access:
//! - store / ledger: ordered items and the operations that change them
//! - qr / manual: the two input adapters
//! - scanner: ownership of the external scanning widget
//! - notice / tab / config: UI-facing state that needs no browser

pub mod clock;
pub mod config;
pub mod error;
pub mod item;
pub mod ledger;
pub mod manual;
pub mod notice;
pub mod qr;
pub mod scanner;
pub mod store;
pub mod tab;


pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, QrBox, ScannerConfig, ScannerSettings};
pub use error::{LedgerError, LedgerResult};
pub use item::{IdGenerator, Item, ItemId};
pub use ledger::Ledger;
pub use manual::ManualInput;
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use qr::{QrPayload, QrRecord};
pub use scanner::{OpenTicket, ScanPhase, ScannerSession, ScannerWidget};
pub use store::ItemStore;
pub use tab::Tab;
