//! Settings record and partial-update merging.
//!
//! # Responsibility
//! - Define the single process-wide settings record.
//! - Parse closed-choice values from UI input and reject unknown ones.
//!
//! # Invariants
//! - Closed-choice fields only ever hold enumerated values.
//! - An invalid value in an update leaves the previous value in place
//!   and is reported back by field name; it never fails other fields.

use crate::model::tool::ToolKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Tamil,
    Sinhala,
}

impl FromStr for Language {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Self::English),
            "tamil" => Ok(Self::Tamil),
            "sinhala" => Ok(Self::Sinhala),
            _ => Err(()),
        }
    }
}

/// Content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "Sri Lanka")]
    SriLanka,
    India,
    Global,
}

impl FromStr for Region {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sri lanka" => Ok(Self::SriLanka),
            "india" => Ok(Self::India),
            "global" => Ok(Self::Global),
            _ => Err(()),
        }
    }
}

/// Color theme. `Auto` follows the host system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Auto,
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "auto" | "system" => Ok(Self::Auto),
            _ => Err(()),
        }
    }
}

/// Base font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FromStr for FontSize {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(()),
        }
    }
}

/// Spacing density of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UiDensity {
    #[default]
    Comfortable,
    Compact,
}

impl FromStr for UiDensity {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "comfortable" => Ok(Self::Comfortable),
            "compact" => Ok(Self::Compact),
            _ => Err(()),
        }
    }
}

/// Tool opened automatically when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultTool {
    #[default]
    None,
    Focus,
    Stopwatch,
    Notes,
}

impl DefaultTool {
    /// Maps the setting onto the tool kind to open, if any.
    pub fn tool_kind(self) -> Option<ToolKind> {
        match self {
            Self::None => None,
            Self::Focus => Some(ToolKind::FocusTimer),
            Self::Stopwatch => Some(ToolKind::Stopwatch),
            Self::Notes => Some(ToolKind::Notebook),
        }
    }
}

impl FromStr for DefaultTool {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "focus" => Ok(Self::Focus),
            "stopwatch" => Ok(Self::Stopwatch),
            "notes" => Ok(Self::Notes),
            _ => Err(()),
        }
    }
}

/// The single process-wide settings record.
///
/// Persisted as one camelCase JSON blob under the `settings-store` key.
/// Unknown fields in stored data are ignored; missing fields take their
/// defaults, so older blobs keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub language: Language,
    pub region: Region,
    pub theme: Theme,
    pub font_size: FontSize,
    pub ui_density: UiDensity,
    pub default_tool: DefaultTool,
    pub notifications: bool,
    pub timer_alert_sound: bool,
    pub push_notifications: bool,
    pub voice_input: bool,
    pub text_to_speech: bool,
    pub reduce_motion: bool,
    pub high_contrast: bool,
    pub data_sharing: bool,
    pub auto_save_notes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            region: Region::default(),
            theme: Theme::default(),
            font_size: FontSize::default(),
            ui_density: UiDensity::default(),
            default_tool: DefaultTool::default(),
            notifications: true,
            timer_alert_sound: true,
            push_notifications: false,
            voice_input: false,
            text_to_speech: false,
            reduce_motion: false,
            high_contrast: false,
            data_sharing: false,
            auto_save_notes: true,
        }
    }
}

/// Partial settings update as it arrives from the settings panel.
///
/// Closed-choice fields come in as raw strings so invalid input can be
/// rejected per field instead of failing deserialization outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub language: Option<String>,
    pub region: Option<String>,
    pub theme: Option<String>,
    pub font_size: Option<String>,
    pub ui_density: Option<String>,
    pub default_tool: Option<String>,
    pub notifications: Option<bool>,
    pub timer_alert_sound: Option<bool>,
    pub push_notifications: Option<bool>,
    pub voice_input: Option<bool>,
    pub text_to_speech: Option<bool>,
    pub reduce_motion: Option<bool>,
    pub high_contrast: Option<bool>,
    pub data_sharing: Option<bool>,
    pub auto_save_notes: Option<bool>,
}

/// Outcome of applying a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedSettings {
    /// Whether any field actually changed.
    pub changed: bool,
    /// Field names whose values were rejected as not in the closed set.
    pub rejected: Vec<&'static str>,
}

impl AppliedSettings {
    pub fn all_accepted(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl Settings {
    /// Merges a partial update into this record field by field.
    ///
    /// Invalid closed-choice values are collected into the outcome's
    /// `rejected` list and the previous value is retained.
    pub fn apply(&mut self, update: &SettingsUpdate) -> AppliedSettings {
        let mut outcome = AppliedSettings::default();

        merge_choice(&mut self.language, &update.language, "language", &mut outcome);
        merge_choice(&mut self.region, &update.region, "region", &mut outcome);
        merge_choice(&mut self.theme, &update.theme, "theme", &mut outcome);
        merge_choice(&mut self.font_size, &update.font_size, "fontSize", &mut outcome);
        merge_choice(&mut self.ui_density, &update.ui_density, "uiDensity", &mut outcome);
        merge_choice(
            &mut self.default_tool,
            &update.default_tool,
            "defaultTool",
            &mut outcome,
        );

        merge_flag(&mut self.notifications, update.notifications, &mut outcome);
        merge_flag(&mut self.timer_alert_sound, update.timer_alert_sound, &mut outcome);
        merge_flag(&mut self.push_notifications, update.push_notifications, &mut outcome);
        merge_flag(&mut self.voice_input, update.voice_input, &mut outcome);
        merge_flag(&mut self.text_to_speech, update.text_to_speech, &mut outcome);
        merge_flag(&mut self.reduce_motion, update.reduce_motion, &mut outcome);
        merge_flag(&mut self.high_contrast, update.high_contrast, &mut outcome);
        merge_flag(&mut self.data_sharing, update.data_sharing, &mut outcome);
        merge_flag(&mut self.auto_save_notes, update.auto_save_notes, &mut outcome);

        outcome
    }
}

fn merge_choice<T: FromStr + PartialEq>(
    field: &mut T,
    input: &Option<String>,
    name: &'static str,
    outcome: &mut AppliedSettings,
) {
    let Some(raw) = input else {
        return;
    };
    match raw.parse::<T>() {
        Ok(value) => {
            if *field != value {
                *field = value;
                outcome.changed = true;
            }
        }
        Err(_) => outcome.rejected.push(name),
    }
}

fn merge_flag(field: &mut bool, input: Option<bool>, outcome: &mut AppliedSettings) {
    if let Some(value) = input {
        if *field != value {
            *field = value;
            outcome.changed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppliedSettings, Settings, SettingsUpdate, Theme};

    #[test]
    fn unknown_theme_is_rejected_and_previous_value_retained() {
        let mut settings = Settings::default();
        let outcome = settings.apply(&SettingsUpdate {
            theme: Some("Neon".to_string()),
            ..SettingsUpdate::default()
        });
        assert_eq!(outcome.rejected, vec!["theme"]);
        assert!(!outcome.changed);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn valid_and_invalid_fields_apply_independently() {
        let mut settings = Settings::default();
        let outcome = settings.apply(&SettingsUpdate {
            theme: Some("light".to_string()),
            font_size: Some("huge".to_string()),
            notifications: Some(false),
            ..SettingsUpdate::default()
        });
        assert_eq!(outcome.rejected, vec!["fontSize"]);
        assert!(outcome.changed);
        assert_eq!(settings.theme, Theme::Light);
        assert!(!settings.notifications);
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut settings = Settings::default();
        let outcome = settings.apply(&SettingsUpdate::default());
        assert_eq!(outcome, AppliedSettings::default());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn record_round_trips_through_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"autoSaveNotes\":true"));
        assert!(json.contains("\"region\":\"Sri Lanka\""));
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
