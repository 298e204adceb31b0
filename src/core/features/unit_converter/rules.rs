//! Per-category conversion rules with enum dispatch
//!
//! `CategoryRules` is a closed set: a scale table or the temperature rules.
//! enum_dispatch gives static dispatch over it without trait objects.

use enum_dispatch::enum_dispatch;

use super::category::UnitCategory;
use super::tables::UnitDef;
use super::temperature::{convert_temperature, TemperatureScale};
use super::Conversion;
use crate::shared::error::{AppError, AppResult};

#[enum_dispatch]
pub trait ConversionRule {
    /// Category this rule set belongs to
    fn category(&self) -> UnitCategory;

    /// Unit names in display order
    fn unit_names(&self) -> Vec<&'static str>;

    /// Canonical name for a unit name or symbol
    fn canonical(&self, unit: &str) -> Option<&'static str>;

    /// Display symbol for a unit name or symbol
    fn symbol(&self, unit: &str) -> Option<&'static str>;

    /// Convert between two units of this category.
    ///
    /// Unknown units are reported as `InvalidUnit`; same-unit pairs return the value untouched.
    fn apply(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<Conversion>;
}

#[enum_dispatch(ConversionRule)]
#[derive(Debug, Clone, Copy)]
pub enum CategoryRules {
    Scaled(ScaleTable),
    Temperature(TemperatureRules),
}

/// Multiplicative category backed by a static table
#[derive(Debug, Clone, Copy)]
pub struct ScaleTable {
    category: UnitCategory,
    units: &'static [UnitDef],
}

impl ScaleTable {
    pub fn new(category: UnitCategory, units: &'static [UnitDef]) -> Self {
        Self { category, units }
    }

    /// Names take precedence over symbols
    pub fn lookup(&self, unit: &str) -> Option<&'static UnitDef> {
        self.units
            .iter()
            .find(|def| def.name == unit)
            .or_else(|| self.units.iter().find(|def| def.symbol == unit))
    }

    fn resolve(&self, unit: &str) -> AppResult<&'static UnitDef> {
        self.lookup(unit)
            .ok_or_else(|| AppError::invalid_unit(self.category, unit))
    }
}

impl ConversionRule for ScaleTable {
    fn category(&self) -> UnitCategory {
        self.category
    }

    fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|def| def.name).collect()
    }

    fn canonical(&self, unit: &str) -> Option<&'static str> {
        self.lookup(unit).map(|def| def.name)
    }

    fn symbol(&self, unit: &str) -> Option<&'static str> {
        self.lookup(unit).map(|def| def.symbol)
    }

    fn apply(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<Conversion> {
        let from = self.resolve(from_unit)?;
        let to = self.resolve(to_unit)?;

        if from.name == to.name {
            return Ok(Conversion::identity(value));
        }

        let result = value * (to.factor / from.factor);
        let formula = format!("{} {} × ({}/{})", value, from.name, to.factor, from.factor);
        Ok(Conversion { result, formula })
    }
}

/// Affine temperature rules
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureRules;

impl TemperatureRules {
    fn resolve(&self, unit: &str) -> AppResult<TemperatureScale> {
        TemperatureScale::lookup(unit)
            .ok_or_else(|| AppError::invalid_unit(UnitCategory::Temperature, unit))
    }
}

impl ConversionRule for TemperatureRules {
    fn category(&self) -> UnitCategory {
        UnitCategory::Temperature
    }

    fn unit_names(&self) -> Vec<&'static str> {
        TemperatureScale::ALL.iter().map(|scale| scale.name()).collect()
    }

    fn canonical(&self, unit: &str) -> Option<&'static str> {
        TemperatureScale::lookup(unit).map(|scale| scale.name())
    }

    fn symbol(&self, unit: &str) -> Option<&'static str> {
        TemperatureScale::lookup(unit).map(|scale| scale.symbol())
    }

    fn apply(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<Conversion> {
        let from = self.resolve(from_unit)?;
        let to = self.resolve(to_unit)?;

        if from == to {
            return Ok(Conversion::identity(value));
        }

        let (result, formula) = convert_temperature(value, from, to);
        Ok(Conversion { result, formula })
    }
}
