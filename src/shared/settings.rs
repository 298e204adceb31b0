use serde::{Deserialize, Serialize};
use ts_rs::TS;
use tokio::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::core::features::unit_converter::UnitCategory;
use crate::core::history::{MAX_HISTORY_CAPACITY, MAX_HISTORY_SIZE};
use crate::shared::error::{AppError, AppResult};

const MAX_DISPLAY_PRECISION: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../web/src/types/settings.ts")]
pub struct ConverterSettings {
    /// Number of conversions kept in the history
    pub history_capacity: usize,
    /// Decimals shown in result lines and history summaries
    pub display_precision: usize,
    pub default_category: UnitCategory,
    pub default_value: f64,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            history_capacity: MAX_HISTORY_SIZE,
            display_precision: 4,
            default_category: UnitCategory::Length,
            default_value: 1.0,
        }
    }
}

impl ConverterSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "uniconvert", "uniconvert")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Settings("Failed to determine config directory".to_string()))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.history_capacity == 0 {
            return Err(AppError::Settings("history_capacity must be at least 1".to_string()));
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(AppError::Settings(format!(
                "history_capacity must be at most {}",
                MAX_HISTORY_CAPACITY
            )));
        }
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(AppError::Settings(format!(
                "display_precision must be at most {}",
                MAX_DISPLAY_PRECISION
            )));
        }
        if !self.default_value.is_finite() {
            return Err(AppError::Settings("default_value must be a finite number".to_string()));
        }
        Ok(())
    }

    /// Load settings from the user config directory
    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    /// Load settings from `path`, writing the defaults there if the file does not exist
    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !fs::try_exists(path).await? {
            log::warn!("[ConverterSettings] No settings at {}, using defaults", path.display());
            let settings = Self::default();
            settings.save_to(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| AppError::Settings(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;

        log::info!("[ConverterSettings] Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub async fn save(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;
        self.save_to(&path).await
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;

        log::info!("[ConverterSettings] Saved settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = ConverterSettings::default();
        assert_eq!(settings.history_capacity, 5);
        assert_eq!(settings.display_precision, 4);
        assert_eq!(settings.default_category, UnitCategory::Length);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_capacity = ConverterSettings { history_capacity: 0, ..Default::default() };
        assert!(matches!(zero_capacity.validate(), Err(AppError::Settings(_))));

        let huge_capacity = ConverterSettings { history_capacity: 101, ..Default::default() };
        assert!(matches!(huge_capacity.validate(), Err(AppError::Settings(_))));

        let too_precise = ConverterSettings { display_precision: 20, ..Default::default() };
        assert!(too_precise.validate().is_err());

        let nan_value = ConverterSettings { default_value: f64::NAN, ..Default::default() };
        assert!(nan_value.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: ConverterSettings =
            serde_json::from_str(r#"{ "default_category": "temperature" }"#).unwrap();
        assert_eq!(settings.default_category, UnitCategory::Temperature);
        assert_eq!(settings.history_capacity, 5);
    }

    #[tokio::test]
    async fn test_load_creates_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = ConverterSettings::load_from(&path).await.unwrap();

        assert_eq!(settings, ConverterSettings::default());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = ConverterSettings {
            history_capacity: 8,
            display_precision: 2,
            default_category: UnitCategory::Data,
            default_value: 1024.0,
        };

        settings.save_to(&path).await.unwrap();
        let loaded = ConverterSettings::load_from(&path).await.unwrap();

        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn test_malformed_file_is_a_settings_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ConverterSettings::load_from(&path).await.unwrap_err();
        assert!(matches!(err, AppError::Settings(msg) if msg.starts_with("Failed to parse settings")));
    }

    #[tokio::test]
    async fn test_invalid_values_in_file_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "history_capacity": 0 }"#).unwrap();

        assert!(ConverterSettings::load_from(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_oversized_history_capacity_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "history_capacity": 18446744073709551615 }"#).unwrap();

        let err = ConverterSettings::load_from(&path).await.unwrap_err();
        assert!(matches!(err, AppError::Settings(msg) if msg.contains("history_capacity")));
    }
}
