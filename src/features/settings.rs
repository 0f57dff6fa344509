//! Application settings persistence
//!
//! Handles saving and loading user preferences and the per-deployment site
//! profile. The original site shipped as three near-identical deployments
//! that disagreed on bio presentation, feedback forms, and contact details;
//! those differences live here as configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How the therapist bio is presented from the About section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BioPresentation {
    /// Open the bio in a modal overlay
    #[default]
    Modal,
    /// Expand the bio inline below the About text
    Inline,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Per-deployment site profile
    #[serde(default)]
    pub site: SiteSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language tag (en, zh-Hans, zh-Hant)
    pub language: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "en".to_string(),
        }
    }
}

/// Site profile: the details that differed between deployments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Mail relay endpoint receiving form submissions
    pub relay_endpoint: String,
    /// Practice contact email, shown in the fees/contact sections
    pub contact_email: String,
    /// Practice contact phone, shown alongside the email
    pub contact_phone: String,
    /// Consulting locations line, shown verbatim
    pub locations: String,
    /// Bio presentation variant
    #[serde(default)]
    pub bio_presentation: BioPresentation,
    /// Whether the feedback form is shown
    #[serde(default = "default_true")]
    pub feedback_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            relay_endpoint: "https://script.google.com/macros/s/AKfycby2WYqRABpQNUM2xyWJvValAoUjXU_B9bD-Qr3Rzva8VOQpkgfOE3_rOzXNQDs4mA69Fw/exec".to_string(),
            contact_email: "hello@stillpoint-therapy.example".to_string(),
            contact_phone: "+44 (0) 7700 900123".to_string(),
            locations: "Bayswater (W2), Maida Vale (W9), Online".to_string(),
            bio_presentation: BioPresentation::Modal,
            feedback_enabled: true,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stillpoint", "Stillpoint")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_json() {
        let mut settings = Settings::default();
        settings.display.dark_mode = true;
        settings.display.language = "zh-Hant".to_string();
        settings.site.bio_presentation = BioPresentation::Inline;
        settings.site.feedback_enabled = false;

        let json = serde_json::to_string(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();

        assert!(loaded.display.dark_mode);
        assert_eq!(loaded.display.language, "zh-Hant");
        assert_eq!(loaded.site.bio_presentation, BioPresentation::Inline);
        assert!(!loaded.site.feedback_enabled);
    }

    #[test]
    fn missing_site_section_falls_back_to_defaults() {
        // Settings written by an older build carry only the display section
        let json = r#"{"display":{"dark_mode":true,"language":"zh-Hans"}}"#;
        let loaded: Settings = serde_json::from_str(json).unwrap();

        assert!(loaded.display.dark_mode);
        assert!(loaded.site.feedback_enabled);
        assert_eq!(loaded.site.bio_presentation, BioPresentation::Modal);
        assert!(!loaded.site.relay_endpoint.is_empty());
    }
}
