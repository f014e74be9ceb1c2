//! QR Payload
//!
//! Decoded QR text is either a JSON record carrying `name` and/or `code`, or
//! arbitrary text that becomes the code as-is.

use serde_json::{Map, Value};

use crate::error::{LedgerError, LedgerResult};

/// Fields read from a structured payload. Missing or empty fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrRecord {
    pub name: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrPayload {
    /// Text parsed as JSON
    Structured(QrRecord),
    /// Text that is not JSON
    Raw(String),
}

impl QrPayload {
    /// Classify decoded text. Only a literal JSON `null` is rejected.
    pub fn parse(text: &str) -> LedgerResult<Self> {
        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(_) => return Ok(QrPayload::Raw(text.to_string())),
        };

        match value {
            Value::Null => Err(LedgerError::QrProcessing("payload is JSON null".to_string())),
            Value::Object(map) => Ok(QrPayload::Structured(QrRecord {
                name: field(&map, "name"),
                code: field(&map, "code"),
            })),
            // Scalars and arrays carry no fields
            _ => Ok(QrPayload::Structured(QrRecord::default())),
        }
    }

    /// Resolve the `(name, code)` pair, filling gaps with placeholders and
    /// the raw decoded text.
    pub fn resolve(self, raw: &str, now_millis: u64) -> LedgerResult<(String, String)> {
        let (name, code) = match self {
            QrPayload::Raw(text) => (format!("QR Item {}", now_millis), text),
            QrPayload::Structured(record) => (
                record.name.unwrap_or_else(|| format!("Item {}", now_millis)),
                record.code.unwrap_or_else(|| raw.to_string()),
            ),
        };

        if code.is_empty() {
            return Err(LedgerError::QrProcessing("decoded text is empty".to_string()));
        }
        Ok((name, code))
    }
}

/// Read a field the way a loosely typed record would: falsy values count as
/// absent, other non-string values use their JSON text.
fn field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_record() {
        let payload = QrPayload::parse(r#"{"name":"Widget","code":"W-1"}"#).unwrap();
        assert_eq!(
            payload,
            QrPayload::Structured(QrRecord {
                name: Some("Widget".to_string()),
                code: Some("W-1".to_string()),
            })
        );
    }

    #[test]
    fn test_plain_text_is_raw() {
        assert_eq!(QrPayload::parse("RAW123").unwrap(), QrPayload::Raw("RAW123".to_string()));
        assert_eq!(
            QrPayload::parse("{not json").unwrap(),
            QrPayload::Raw("{not json".to_string())
        );
    }

    #[test]
    fn test_raw_resolves_to_placeholder_name() {
        let (name, code) = QrPayload::parse("RAW123").unwrap().resolve("RAW123", 42).unwrap();
        assert_eq!(name, "QR Item 42");
        assert_eq!(code, "RAW123");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let raw = r#"{"code":"C-9"}"#;
        let (name, code) = QrPayload::parse(raw).unwrap().resolve(raw, 7).unwrap();
        assert_eq!((name.as_str(), code.as_str()), ("Item 7", "C-9"));

        let raw = r#"{"name":"Only name"}"#;
        let (name, code) = QrPayload::parse(raw).unwrap().resolve(raw, 7).unwrap();
        assert_eq!(name, "Only name");
        assert_eq!(code, raw);
    }

    #[test]
    fn test_non_object_json_uses_raw_text() {
        let (name, code) = QrPayload::parse("12345").unwrap().resolve("12345", 3).unwrap();
        assert_eq!(name, "Item 3");
        assert_eq!(code, "12345");
    }

    #[test]
    fn test_loose_field_types() {
        let raw = r#"{"name":"","code":987,"extra":true}"#;
        let payload = QrPayload::parse(raw).unwrap();
        assert_eq!(
            payload,
            QrPayload::Structured(QrRecord { name: None, code: Some("987".to_string()) })
        );
    }

    #[test]
    fn test_null_payload_fails_closed() {
        assert!(matches!(QrPayload::parse("null"), Err(LedgerError::QrProcessing(_))));
    }

    #[test]
    fn test_empty_text_fails_closed() {
        let err = QrPayload::parse("").unwrap().resolve("", 1).unwrap_err();
        assert!(matches!(err, LedgerError::QrProcessing(_)));
    }
}
