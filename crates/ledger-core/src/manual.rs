//! Manual Entry Draft
//!
//! Form state for typing an item in by hand.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualInput {
    pub name: String,
    pub code: String,
}

impl ManualInput {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Both fields must be filled in. Whitespace counts as filled.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.name.is_empty() || self.code.is_empty() {
            return Err(LedgerError::MissingField);
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.code.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_fields() {
        assert_eq!(ManualInput::new("", "C1").validate(), Err(LedgerError::MissingField));
        assert_eq!(ManualInput::new("Name", "").validate(), Err(LedgerError::MissingField));
        assert_eq!(ManualInput::default().validate(), Err(LedgerError::MissingField));
        assert!(ManualInput::new("Name", "C1").validate().is_ok());
    }

    #[test]
    fn test_reset_clears_draft() {
        let mut draft = ManualInput::new("Name", "C1");
        draft.reset();
        assert!(draft.is_blank());
    }
}
