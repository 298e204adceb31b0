//! Converter page state
//!
//! The page keeps no globals: a `ConverterState` is passed into every
//! interaction handler and a new state comes back out. The conversion engine
//! itself stays stateless; only the selection, the value and the history live
//! here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::features::unit_converter::{
    canonical_unit, convert, default_units, list_units, quick_reference, Conversion, UnitCategory,
};
use crate::core::history::ConversionHistory;
use crate::shared::error::AppResult;
use crate::shared::settings::ConverterSettings;
use crate::shared::types::{ConverterView, HistoryEntry};

/// User interactions on the converter page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload")]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub enum Interaction {
    SelectCategory(UnitCategory),
    SelectFromUnit(String),
    SelectToUnit(String),
    SetValue(f64),
    /// Exchange the from and to units
    Swap,
    /// Explicit "Convert" button
    Convert,
    ClearHistory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConverterState {
    category: UnitCategory,
    from_unit: &'static str,
    to_unit: &'static str,
    value: f64,
    precision: usize,
    last: Option<Conversion>,
    history: ConversionHistory,
}

impl ConverterState {
    /// Fresh state; nothing is converted until the first interaction
    pub fn new(settings: &ConverterSettings) -> Self {
        let category = settings.default_category;
        let (from_unit, to_unit) = default_units(category);

        Self {
            category,
            from_unit,
            to_unit,
            value: settings.default_value,
            precision: settings.display_precision,
            last: None,
            history: ConversionHistory::with_capacity(settings.history_capacity),
        }
    }

    /// Apply an interaction and return the resulting state.
    ///
    /// `self` is left untouched, so a rejected interaction keeps the previous state.
    pub fn handle(&self, interaction: Interaction) -> AppResult<ConverterState> {
        let mut next = self.clone();

        match interaction {
            Interaction::SelectCategory(category) => {
                // Re-selecting the current category keeps the selection
                if category != self.category {
                    let (default_from, default_to) = default_units(category);
                    next.category = category;
                    next.from_unit = default_from;
                    next.to_unit = default_to;
                }
            }
            Interaction::SelectFromUnit(unit) => {
                next.from_unit = canonical_unit(next.category, &unit)?;
            }
            Interaction::SelectToUnit(unit) => {
                next.to_unit = canonical_unit(next.category, &unit)?;
            }
            Interaction::SetValue(value) => {
                next.value = value;
            }
            Interaction::Swap => {
                std::mem::swap(&mut next.from_unit, &mut next.to_unit);
            }
            Interaction::Convert => {}
            Interaction::ClearHistory => {
                next.history.clear();
                return Ok(next);
            }
        }

        next.recompute()?;
        Ok(next)
    }

    // Every recompute is recorded, the page converts on each change
    fn recompute(&mut self) -> AppResult<()> {
        let conversion = convert(self.category, self.value, self.from_unit, self.to_unit)?;

        self.history.push(HistoryEntry::new(
            self.category,
            self.value,
            self.from_unit,
            self.to_unit,
            conversion.result,
            self.precision,
        ));
        self.last = Some(conversion);
        Ok(())
    }

    /// Snapshot for rendering
    pub fn view(&self) -> AppResult<ConverterView> {
        let p = self.precision;
        let result = self.last.as_ref().map(|conversion| conversion.result);

        let result_line = self.last.as_ref().map(|conversion| {
            format!(
                "{:.*} {} = {:.*} {}",
                p, self.value, self.from_unit, p, conversion.result, self.to_unit
            )
        });
        let formula_line = self
            .last
            .as_ref()
            .map(|conversion| format!("Formula: {} = {:.*}", conversion.formula, p, conversion.result));

        Ok(ConverterView {
            category: self.category,
            units: list_units(self.category).into_iter().map(String::from).collect(),
            from_unit: self.from_unit.to_string(),
            to_unit: self.to_unit.to_string(),
            value: self.value,
            result,
            result_line,
            formula_line,
            history: self.history.recent().map(|entry| entry.summary.clone()).collect(),
            quick_reference: quick_reference(self.category)?,
        })
    }

    pub fn category(&self) -> UnitCategory {
        self.category
    }

    pub fn from_unit(&self) -> &'static str {
        self.from_unit
    }

    pub fn to_unit(&self) -> &'static str {
        self.to_unit
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn last(&self) -> Option<&Conversion> {
        self.last.as_ref()
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(&ConverterSettings::default())
    }
}
