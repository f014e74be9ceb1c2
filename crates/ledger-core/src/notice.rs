//! Notices
//!
//! Short success/error messages shown as toasts.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

pub const MSG_QR_SCANNED: &str = "QR code scanned";
pub const MSG_ITEM_ADDED: &str = "Item added";
pub const MSG_ITEM_DELETED: &str = "Item deleted";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// A message waiting to be shown. `id` is assigned by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { id: 0, kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { id: 0, kind: NoticeKind::Error, message: message.into() }
    }

    pub fn from_error(err: &LedgerError) -> Self {
        Self::error(err.user_message())
    }
}

/// Visible notices, oldest first, capped at `capacity`
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    capacity: usize,
    next_id: u32,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::with_capacity(3)
    }
}

impl NoticeBoard {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            notices: Vec::new(),
            capacity: capacity.max(1),
            next_id: 1,
        }
    }

    /// Show a notice, evicting the oldest when full. Returns the assigned id.
    pub fn push(&mut self, mut notice: Notice) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        notice.id = id;
        if self.notices.len() == self.capacity {
            self.notices.remove(0);
        }
        self.notices.push(notice);
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}
