//! Unit conversion engine
//!
//! Stateless and deterministic: every call resolves the category's rules,
//! validates both units, and returns the converted value plus the formula
//! that produced it.

mod category;
mod formatting;
mod reference;
mod rules;
mod tables;
mod temperature;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use category::{CategoryGroup, UnitCategory};
pub use formatting::format_number;
pub use reference::quick_reference;
pub use rules::{CategoryRules, ConversionRule, ScaleTable, TemperatureRules};
pub use tables::UnitDef;
pub use temperature::TemperatureScale;

use crate::shared::error::{AppError, AppResult};

pub(crate) const NO_CONVERSION: &str = "no conversion needed";

/// Result of a single conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct Conversion {
    pub result: f64,
    pub formula: String,
}

impl Conversion {
    pub fn identity(value: f64) -> Self {
        Self {
            result: value,
            formula: NO_CONVERSION.to_string(),
        }
    }
}

/// Convert `value` from one unit of `category` to another.
///
/// Units may be given by name or symbol. Unknown units fail with `InvalidUnit`.
pub fn convert(category: UnitCategory, value: f64, from_unit: &str, to_unit: &str) -> AppResult<Conversion> {
    let conversion = category.rules().apply(value, from_unit, to_unit)?;

    log::debug!(
        "[convert] {}: {} {} → {} {} ({})",
        category, value, from_unit, conversion.result, to_unit, conversion.formula
    );

    Ok(conversion)
}

/// Same as [`convert`], with the category given as a string tag
pub fn convert_named(category: &str, value: f64, from_unit: &str, to_unit: &str) -> AppResult<Conversion> {
    let category: UnitCategory = category.parse()?;
    convert(category, value, from_unit, to_unit)
}

/// Unit names of a category in display order
pub fn list_units(category: UnitCategory) -> Vec<&'static str> {
    category.rules().unit_names()
}

/// Canonical name for a unit name or symbol
pub fn canonical_unit(category: UnitCategory, unit: &str) -> AppResult<&'static str> {
    category
        .rules()
        .canonical(unit)
        .ok_or_else(|| AppError::invalid_unit(category, unit))
}

pub fn unit_symbol(category: UnitCategory, unit: &str) -> AppResult<&'static str> {
    category
        .rules()
        .symbol(unit)
        .ok_or_else(|| AppError::invalid_unit(category, unit))
}

/// Default selector values: the first unit, then the second (or the first again if it is alone)
pub fn default_units(category: UnitCategory) -> (&'static str, &'static str) {
    let units = list_units(category);
    let from = units[0];
    let to = units.get(1).copied().unwrap_or(from);
    (from, to)
}
