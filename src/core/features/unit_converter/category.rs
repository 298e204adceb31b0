use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use super::rules::{CategoryRules, ScaleTable, TemperatureRules};
use super::tables;
use crate::shared::error::AppError;

/// Measurement categories offered by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Volume,
    Area,
    Speed,
    Time,
    Pressure,
    Energy,
    Power,
    Data,
    Frequency,
}

/// Sidebar tab a category is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub enum CategoryGroup {
    Basic,
    Science,
    Digital,
}

impl UnitCategory {
    /// Display order of the category selector
    pub const ALL: [UnitCategory; 12] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Volume,
        UnitCategory::Area,
        UnitCategory::Speed,
        UnitCategory::Time,
        UnitCategory::Pressure,
        UnitCategory::Energy,
        UnitCategory::Power,
        UnitCategory::Data,
        UnitCategory::Frequency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Volume => "volume",
            UnitCategory::Area => "area",
            UnitCategory::Speed => "speed",
            UnitCategory::Time => "time",
            UnitCategory::Pressure => "pressure",
            UnitCategory::Energy => "energy",
            UnitCategory::Power => "power",
            UnitCategory::Data => "data",
            UnitCategory::Frequency => "frequency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Volume => "Volume",
            UnitCategory::Area => "Area",
            UnitCategory::Speed => "Speed",
            UnitCategory::Time => "Time",
            UnitCategory::Pressure => "Pressure",
            UnitCategory::Energy => "Energy",
            UnitCategory::Power => "Power",
            UnitCategory::Data => "Data",
            UnitCategory::Frequency => "Frequency",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            UnitCategory::Length => "📏",
            UnitCategory::Weight => "⚖️",
            UnitCategory::Temperature => "🌡️",
            UnitCategory::Volume => "🧪",
            UnitCategory::Area => "📐",
            UnitCategory::Speed => "⚡",
            UnitCategory::Time => "⏱️",
            UnitCategory::Pressure => "📊",
            UnitCategory::Energy => "⚗️",
            UnitCategory::Power => "🔋",
            UnitCategory::Data => "💾",
            UnitCategory::Frequency => "📶",
        }
    }

    pub fn group(&self) -> CategoryGroup {
        match self {
            UnitCategory::Length
            | UnitCategory::Weight
            | UnitCategory::Temperature
            | UnitCategory::Volume
            | UnitCategory::Area
            | UnitCategory::Speed => CategoryGroup::Basic,
            UnitCategory::Time
            | UnitCategory::Pressure
            | UnitCategory::Energy
            | UnitCategory::Power => CategoryGroup::Science,
            UnitCategory::Data | UnitCategory::Frequency => CategoryGroup::Digital,
        }
    }

    /// Conversion rules for this category.
    ///
    /// Temperature is the only affine category; all others are a scale table.
    pub fn rules(&self) -> CategoryRules {
        let units = match self {
            UnitCategory::Temperature => return TemperatureRules.into(),
            UnitCategory::Length => tables::LENGTH,
            UnitCategory::Weight => tables::WEIGHT,
            UnitCategory::Volume => tables::VOLUME,
            UnitCategory::Area => tables::AREA,
            UnitCategory::Speed => tables::SPEED,
            UnitCategory::Time => tables::TIME,
            UnitCategory::Pressure => tables::PRESSURE,
            UnitCategory::Energy => tables::ENERGY,
            UnitCategory::Power => tables::POWER,
            UnitCategory::Data => tables::DATA,
            UnitCategory::Frequency => tables::FREQUENCY,
        };
        ScaleTable::new(*self, units).into()
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        UnitCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::InvalidCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Length".parse::<UnitCategory>().unwrap(), UnitCategory::Length);
        assert_eq!("FREQUENCY".parse::<UnitCategory>().unwrap(), UnitCategory::Frequency);
        assert_eq!(" data ".parse::<UnitCategory>().unwrap(), UnitCategory::Data);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = "luminosity".parse::<UnitCategory>().unwrap_err();
        assert_eq!(err, AppError::InvalidCategory("luminosity".to_string()));
    }

    #[test]
    fn test_groups_cover_sidebar_tabs() {
        let count = |group| UnitCategory::ALL.iter().filter(|c| c.group() == group).count();
        assert_eq!(count(CategoryGroup::Basic), 6);
        assert_eq!(count(CategoryGroup::Science), 4);
        assert_eq!(count(CategoryGroup::Digital), 2);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&UnitCategory::Temperature).unwrap();
        assert_eq!(json, "\"temperature\"");
        let back: UnitCategory = serde_json::from_str("\"speed\"").unwrap();
        assert_eq!(back, UnitCategory::Speed);
    }
}
