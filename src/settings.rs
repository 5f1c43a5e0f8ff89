use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::clock::Rgb;
use crate::error::Result;
use crate::manager::settings_file_path;
use crate::password::{GenerationRequest, MIN_LENGTH};

/// Longest password the length slider offers.
pub const MAX_LENGTH: usize = 128;

/// Options the generator window opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
    /// Password length (4-128, default 12)
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        let req = GenerationRequest::default();
        Self {
            length: req.length,
            upper: req.include_upper,
            lower: req.include_lower,
            digits: req.include_digits,
            symbols: req.include_symbols,
        }
    }
}

impl GeneratorDefaults {
    pub fn to_request(self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.upper, self.lower, self.digits, self.symbols)
    }
}

/// Clock appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    pub top_color: Rgb,
    pub bottom_color: Rgb,
    pub show_seconds: bool,
    pub use_24h: bool,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            top_color: [0x1e, 0x1e, 0x1e],
            bottom_color: [0x1b, 0x4d, 0x3e],
            show_seconds: true,
            use_24h: true,
        }
    }
}

/// Application settings shared by both windows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub generator: GeneratorDefaults,
    /// Clipboard clear timeout in seconds (10-120, default 30)
    pub clipboard_clear_seconds: u32,
    pub clock: ClockSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            generator: GeneratorDefaults::default(),
            clipboard_clear_seconds: 30,
            clock: ClockSettings::default(),
        }
    }
}

impl AppSettings {
    /// Load settings from the user's config directory, or defaults.
    pub fn load() -> Self {
        Self::load_from(&settings_file_path())
    }

    /// Load settings from `path`. Missing or unreadable files give defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let parsed = fs::read_to_string(path)
            .map_err(crate::error::AppError::from)
            .and_then(|data| Ok(serde_json::from_str::<AppSettings>(&data)?));
        match parsed {
            Ok(mut settings) => {
                settings.normalize();
                settings
            }
            Err(e) => {
                warn!("ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        info!("settings saved to {}", path.display());
        Ok(())
    }

    /// Validate and clamp clipboard timeout to allowed range
    pub fn set_clipboard_timeout(&mut self, seconds: u32) {
        self.clipboard_clear_seconds = seconds.clamp(10, 120);
    }

    /// Validate and clamp default password length to the slider range
    pub fn set_default_length(&mut self, length: usize) {
        self.generator.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    /// Get clipboard timeout as u64 for comparison with Instant
    pub fn clipboard_timeout_u64(&self) -> u64 {
        self.clipboard_clear_seconds as u64
    }

    fn normalize(&mut self) {
        self.set_clipboard_timeout(self.clipboard_clear_seconds);
        self.set_default_length(self.generator.length);
    }
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.clipboard_clear_seconds, 30);
        assert_eq!(settings.generator.length, 12);
        assert!(settings.generator.symbols);
        assert!(settings.clock.use_24h);
    }

    #[test]
    fn test_clipboard_timeout_clamping() {
        let mut settings = AppSettings::default();

        settings.set_clipboard_timeout(5);
        assert_eq!(settings.clipboard_clear_seconds, 10);

        settings.set_clipboard_timeout(200);
        assert_eq!(settings.clipboard_clear_seconds, 120);

        settings.set_clipboard_timeout(60);
        assert_eq!(settings.clipboard_clear_seconds, 60);
    }

    #[test]
    fn test_default_length_clamping() {
        let mut settings = AppSettings::default();

        settings.set_default_length(1);
        assert_eq!(settings.generator.length, MIN_LENGTH);

        settings.set_default_length(1000);
        assert_eq!(settings.generator.length, MAX_LENGTH);

        settings.set_default_length(32);
        assert_eq!(settings.generator.length, 32);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "clock": { "use_24h": false } }"#).unwrap();
        assert!(!settings.clock.use_24h);
        assert!(settings.clock.show_seconds);
        assert_eq!(settings.generator, GeneratorDefaults::default());
        assert_eq!(settings.clipboard_clear_seconds, 30);
    }

    #[test]
    fn test_defaults_to_request() {
        let req = GeneratorDefaults::default().to_request();
        assert_eq!(req, GenerationRequest::default());
    }

    #[test]
    fn test_u64_conversion() {
        let settings = AppSettings::default();
        assert_eq!(settings.clipboard_timeout_u64(), 30u64);
    }
}
