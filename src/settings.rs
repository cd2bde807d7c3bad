//! Track settings
//!
//! Read from the canvas element's `data-settings` attribute at mount. Nothing
//! is ever written back.

use serde::{Deserialize, Serialize};

/// Keyboard event that counts as a scoring press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyTrigger {
    #[default]
    KeyUp,
    KeyDown,
}

impl KeyTrigger {
    /// DOM event type to listen for
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyTrigger::KeyUp => "keyup",
            KeyTrigger::KeyDown => "keydown",
        }
    }
}

/// Log verbosity for the browser console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Race track settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: LogLevel,

    // === Wire names ===
    /// Event pushed once at mount
    pub ready_event: String,
    /// Event pushed for every scoring press
    pub score_event: String,
    /// Event the server pushes with a new snapshot
    pub update_event: String,

    // === Input ===
    pub key_trigger: KeyTrigger,

    // === Drawing ===
    /// Countdown / winner line above the track
    pub status_banner: bool,
    /// CSS font family for names and the banner
    pub font_family: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,

            ready_event: "ready".to_string(),
            score_event: "score_point".to_string(),
            update_event: "game_updated".to_string(),

            key_trigger: KeyTrigger::KeyUp,

            status_banner: true,
            font_family: "'Press Start 2P'".to_string(),
        }
    }
}

impl Settings {
    /// Attribute holding the settings JSON
    pub const DATA_ATTRIBUTE: &'static str = "data-settings";

    /// Parse settings JSON, falling back to defaults when it is missing or invalid
    pub fn from_json(json: Option<&str>) -> Self {
        let Some(json) = json.filter(|s| !s.trim().is_empty()) else {
            return Self::default();
        };

        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid track settings: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_settings_use_defaults() {
        assert_eq!(Settings::from_json(None), Settings::default());
        assert_eq!(Settings::from_json(Some("  ")), Settings::default());
    }

    #[test]
    fn test_partial_settings_keep_other_defaults() {
        let settings = Settings::from_json(Some(
            r#"{"ready_event": "race_track_mounted", "key_trigger": "keydown"}"#,
        ));
        assert_eq!(settings.ready_event, "race_track_mounted");
        assert_eq!(settings.key_trigger, KeyTrigger::KeyDown);
        assert_eq!(settings.score_event, "score_point");
        assert!(settings.status_banner);
    }

    #[test]
    fn test_invalid_settings_fall_back() {
        assert_eq!(Settings::from_json(Some("{not json")), Settings::default());
    }
}
