use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::features::unit_converter::{CategoryGroup, UnitCategory};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct ConvertUnitsRequest {
    pub category: String,
    pub amount: f64,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub formula: String,
    pub from_unit: String,
    pub to_unit: String,
}

// Rich Unit Data Transfer Object for frontend
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct UnitDTO {
    pub id: String,     // Canonical unit name (e.g., "foot")
    pub label: String,  // Display label (e.g., "foot (ft)")
    pub symbol: String, // Short symbol (e.g., "ft")
    pub category: UnitCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct GetUnitsResponse {
    pub category: UnitCategory,
    pub units: Vec<UnitDTO>,
    pub default_from: String,
    pub default_to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct CategoryDTO {
    pub id: UnitCategory,
    pub label: String,
    pub icon: String,
    pub group: CategoryGroup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct ReferenceRow {
    pub unit: String,
    pub values: Vec<String>,
}

/// "Quick Reference" table shown under the converter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct QuickReference {
    pub category: UnitCategory,
    pub headers: Vec<String>,
    pub rows: Vec<ReferenceRow>,
}

/// One recorded conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct HistoryEntry {
    pub id: String,
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
    pub category: UnitCategory,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
    pub summary: String, // e.g. "1.0000 meter → 3.2808 foot"
}

impl HistoryEntry {
    pub fn new(
        category: UnitCategory,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        result: f64,
        precision: usize,
    ) -> Self {
        let summary = format!(
            "{:.*} {} → {:.*} {}",
            precision, value, from_unit, precision, result, to_unit
        );

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            category,
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result,
            summary,
        }
    }
}

/// Everything the page needs to render the converter
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct ConverterView {
    pub category: UnitCategory,
    pub units: Vec<String>,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
    pub result: Option<f64>,
    pub result_line: Option<String>,  // "1.0000 meter = 3.2808 foot"
    pub formula_line: Option<String>, // "Formula: ... = 3.2808"
    pub history: Vec<String>,         // most recent first
    pub quick_reference: QuickReference,
}
