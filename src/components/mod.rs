//! UI Components
//!
//! Screens, navigation and dialogs of the ledger view.

mod bottom_nav;
mod float_actions;
mod home_page;
mod item_list;
mod manual_entry_modal;
mod modal;
mod placeholder_page;
mod scan_modal;
mod scan_page;
mod toast_stack;

pub use bottom_nav::BottomNav;
pub use float_actions::FloatActions;
pub use home_page::HomePage;
pub use item_list::ItemList;
pub use manual_entry_modal::ManualEntryModal;
pub use modal::Modal;
pub use placeholder_page::PlaceholderPage;
pub use scan_modal::ScanModal;
pub use scan_page::ScanPage;
pub use toast_stack::ToastStack;
