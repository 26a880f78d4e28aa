//! User preferences persisted with the rest of the app state.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// How the daily verse is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerseType {
    #[default]
    Random,
    Daily,
    Themed,
}

/// Reader font size preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// All user-configurable preferences.
///
/// `notification_time` serializes as `"HH:MM"`, the shape the settings
/// screen and the external notification scheduler both expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub show_translation: bool,
    #[serde(with = "hhmm")]
    pub notification_time: NaiveTime,
    pub notification_enabled: bool,
    pub verse_type: VerseType,
    pub dark_mode: bool,
    pub font_size: FontSize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            show_translation: true,
            notification_time: NaiveTime::from_hms_opt(8, 0, 0).expect("valid literal time"),
            notification_enabled: true,
            verse_type: VerseType::Random,
            dark_mode: false,
            font_size: FontSize::Medium,
        }
    }
}

/// serde adapter rendering a [`NaiveTime`] as `"HH:MM"`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.show_translation);
        assert!(settings.notification_enabled);
        assert_eq!(
            settings.notification_time,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        );
        assert_eq!(settings.verse_type, VerseType::Random);
        assert!(!settings.dark_mode);
        assert_eq!(settings.font_size, FontSize::Medium);
    }

    #[test]
    fn test_notification_time_renders_as_hhmm() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"notification_time\":\"08:00\""));
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut settings = Settings::default();
        settings.notification_time = NaiveTime::from_hms_opt(21, 30, 0).unwrap();
        settings.font_size = FontSize::Large;
        settings.dark_mode = true;
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }

    #[test]
    fn test_rejects_malformed_time() {
        let json = r#"{
            "show_translation": true,
            "notification_time": "8 o'clock",
            "notification_enabled": true,
            "verse_type": "random",
            "dark_mode": false,
            "font_size": "medium"
        }"#;
        assert!(serde_json::from_str::<Settings>(json).is_err());
    }
}
