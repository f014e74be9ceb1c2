//! Leptos QR Scanner
//!
//! Binds the `html5-qrcode` widget (loaded by the page as a global script) and
//! drives it from a Leptos view:
//! - `bindings`: raw `Html5QrcodeScanner` imports
//! - `widget`: `QrScanner`, one mounted widget with its callbacks
//! - `controller`: delayed open, decode dispatch and guaranteed teardown

mod bindings;
mod controller;
mod widget;

pub use bindings::Html5QrcodeScanner;
pub use controller::{use_qr_scanner, ScannerController};
pub use widget::QrScanner;
