//! Settings command module
//!
//! Handles converter settings persistence.

use crate::shared::error::AppResult;
use crate::shared::settings::ConverterSettings;

/// Get current converter settings
pub async fn get_settings() -> AppResult<ConverterSettings> {
    ConverterSettings::load().await
}

/// Save converter settings
pub async fn save_settings(settings: ConverterSettings) -> AppResult<()> {
    settings.save().await
}
