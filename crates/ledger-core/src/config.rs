//! Configuration
//!
//! Tunables for the scanner widget and the UI. Every field has a default, so a
//! partial JSON document only overrides what it names.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Capture region passed to the widget as `qrbox`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrBox {
    pub width: u32,
    pub height: u32,
}

/// Options understood by the scanning widget constructor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScannerConfig {
    /// Frames decoded per second
    pub fps: u32,
    pub qrbox: QrBox,
    pub aspect_ratio: f64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            fps: 10,
            qrbox: QrBox { width: 250, height: 250 },
            aspect_ratio: 1.0,
        }
    }
}

/// How and where the scanner is mounted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerSettings {
    /// DOM id of the region the widget renders into
    pub element_id: String,
    /// Delay before construction so the region is mounted
    pub open_delay_ms: u32,
    /// Widget debug output
    pub verbose: bool,
    pub widget: ScannerConfig,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            element_id: "qr-reader".to_string(),
            open_delay_ms: 100,
            verbose: false,
            widget: ScannerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scanner: ScannerSettings,
    /// Toast lifetime
    pub notice_ttl_ms: u32,
    pub max_notices: usize,
    pub log_level: LevelFilter,
    /// Start the session with the two sample items
    pub seed_samples: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scanner: ScannerSettings::default(),
            notice_ttl_ms: 3_000,
            max_notices: 3,
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
            seed_samples: true,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> LedgerResult<Self> {
        serde_json::from_str(text).map_err(|e| LedgerError::InvalidConfig(e.to_string()))
    }
}
