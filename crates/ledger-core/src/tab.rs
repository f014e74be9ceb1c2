//! Tabs
//!
//! The four screens reachable from the bottom navigation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Item list
    #[default]
    Home,
    /// Scan trigger
    #[serde(rename = "qr")]
    Scan,
    Profile,
    Settings,
}

impl Tab {
    /// Navigation order
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Scan, Tab::Profile, Tab::Settings];

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Scan => "qr",
            Tab::Profile => "profile",
            Tab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Scan => "QR",
            Tab::Profile => "Profile",
            Tab::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "🏠",
            Tab::Scan => "🔳",
            Tab::Profile => "👤",
            Tab::Settings => "⚙️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct() {
        let keys: Vec<_> = Tab::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys, vec!["home", "qr", "profile", "settings"]);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Tab::default(), Tab::Home);
    }

    #[test]
    fn test_serde_key_matches() {
        for tab in Tab::ALL {
            assert_eq!(serde_json::to_string(&tab).unwrap(), format!("\"{}\"", tab.key()));
        }
    }
}
