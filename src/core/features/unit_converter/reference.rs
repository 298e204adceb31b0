//! Quick reference tables.
//!
//! Rows are computed from the unit tables so the reference can never drift
//! from what `convert` actually does.

use super::category::UnitCategory;
use super::formatting::format_number;
use super::rules::ConversionRule;
use super::convert;
use crate::shared::error::AppResult;
use crate::shared::types::{QuickReference, ReferenceRow};

const REFERENCE_DECIMALS: usize = 6;

/// Units highlighted in the reference table for each category
fn highlighted_units(category: UnitCategory) -> &'static [&'static str] {
    match category {
        UnitCategory::Length => &["meter", "kilometer", "inch", "foot", "mile"],
        UnitCategory::Weight => &["kilogram", "gram", "pound", "ounce", "ton"],
        UnitCategory::Temperature => &["celsius", "fahrenheit", "kelvin"],
        UnitCategory::Volume => &["liter", "milliliter", "gallon (US)", "cup (US)", "fluid ounce (US)"],
        UnitCategory::Time => &["second", "minute", "hour", "day", "year (365 days)"],
        UnitCategory::Data => &["byte", "kilobyte", "megabyte", "gigabyte", "terabyte"],
        UnitCategory::Area => &["square meter", "square kilometer", "acre", "hectare"],
        UnitCategory::Speed => &["meter per second", "kilometer per hour", "mile per hour", "knot"],
        UnitCategory::Energy => &["joule", "kilojoule", "kilocalorie", "watt hour", "kilowatt hour"],
        UnitCategory::Pressure => &["pascal", "kilopascal", "bar", "atmosphere", "psi"],
        UnitCategory::Power => &["watt", "kilowatt", "horsepower", "british thermal unit per hour"],
        UnitCategory::Frequency => &["hertz", "kilohertz", "megahertz", "gigahertz"],
    }
}

/// Build the quick reference table for a category
pub fn quick_reference(category: UnitCategory) -> AppResult<QuickReference> {
    let rules = category.rules();
    let units = highlighted_units(category);

    if category == UnitCategory::Temperature {
        let mut rows = Vec::with_capacity(units.len());
        for &unit in units {
            let symbol = rules.symbol(unit).unwrap_or(unit);
            let freezing = convert(category, 0.0, "celsius", unit)?.result;
            let boiling = convert(category, 100.0, "celsius", unit)?.result;
            rows.push(ReferenceRow {
                unit: unit.to_string(),
                values: vec![
                    format!("{}{}", format_number(freezing, 2), symbol),
                    format!("{}{}", format_number(boiling, 2), symbol),
                ],
            });
        }
        return Ok(QuickReference {
            category,
            headers: vec!["Unit".to_string(), "Freezing Point".to_string(), "Boiling Point".to_string()],
            rows,
        });
    }

    let base = rules.unit_names().first().copied().unwrap_or_default();
    let base_symbol = rules.symbol(base).unwrap_or(base);

    let mut rows = Vec::with_capacity(units.len());
    for &unit in units {
        // Speed reads better as "1 m/s in <unit>"
        let equivalent = if category == UnitCategory::Speed {
            let value = convert(category, 1.0, base, unit)?.result;
            format!("{} {}", format_number(value, REFERENCE_DECIMALS), rules.symbol(unit).unwrap_or(unit))
        } else {
            let value = convert(category, 1.0, unit, base)?.result;
            format!("{} {}", format_number(value, REFERENCE_DECIMALS), base_symbol)
        };
        rows.push(ReferenceRow {
            unit: unit.to_string(),
            values: vec![equivalent],
        });
    }

    Ok(QuickReference {
        category,
        headers: vec!["Unit".to_string(), "Equivalent".to_string()],
        rows,
    })
}
