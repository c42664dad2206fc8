//! Game settings and preferences
//!
//! Stored as JSON next to the binary (or wherever the host points us).
//! Missing fields fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{FRAME_RATE_HZ, MAX_DT};
use crate::sim::InputMode;

/// Errors from reading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 256,
            QualityPreset::Medium => 1024,
            QualityPreset::High => 4096,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Particle effects (eat sparks, dash puffs)
    pub particles: bool,
    /// Steering mode after every reset
    pub input_mode: InputMode,
    /// Host frame cadence
    pub frame_rate_hz: u32,
    /// Largest elapsed time handed to a single tick (seconds)
    pub max_frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            input_mode: InputMode::Pointer,
            frame_rate_hz: FRAME_RATE_HZ,
            max_frame_dt: MAX_DT,
        }
    }
}

impl Settings {
    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_rate_hz == 0 {
            return Err(SettingsError::Invalid("frame_rate_hz must be positive"));
        }
        if !(self.max_frame_dt > 0.0 && self.max_frame_dt <= MAX_DT) {
            return Err(SettingsError::Invalid("max_frame_dt must be in (0, 0.1]"));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!(
                    "Loaded settings from {} (quality {})",
                    path.display(),
                    settings.quality.as_str()
                );
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.max_particles(), 1024);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "quality": "High", "input_mode": "Keys" }"#)
            .expect("valid settings");
        assert_eq!(settings.quality, QualityPreset::High);
        assert_eq!(settings.input_mode, InputMode::Keys);
        assert_eq!(settings.frame_rate_hz, 60);
        assert_eq!(settings.max_particles(), 4096);
    }

    #[test]
    fn disabling_particles_zeroes_cap() {
        let settings = Settings {
            particles: false,
            ..Default::default()
        };
        assert_eq!(settings.max_particles(), 0);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "frame_rate_hz": 0 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "max_frame_dt": 0.5 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_falls_back() {
        let settings = Settings::load(Path::new("/definitely/not/here/arena.json"));
        assert_eq!(settings.quality, QualityPreset::Medium);
    }

    #[test]
    fn save_then_read() {
        let path = std::env::temp_dir().join(format!("arena-grow-settings-{}.json", std::process::id()));
        let settings = Settings {
            quality: QualityPreset::Low,
            ..Default::default()
        };
        settings.save(&path).expect("save");
        let loaded = Settings::read(&path).expect("read");
        assert_eq!(loaded.quality, QualityPreset::Low);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn preset_names() {
        assert_eq!(QualityPreset::Low.as_str(), "Low");
        assert_eq!(QualityPreset::High.as_str(), "High");
    }
}
