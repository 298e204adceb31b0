//! Converter command module
//!
//! Typed request/response wrappers around the conversion engine and the page state.

use crate::core::features::unit_converter::{
    self, default_units, format_number, list_units, UnitCategory,
};
use crate::core::state::{ConverterState, Interaction};
use crate::shared::error::AppResult;
use crate::shared::types::{
    CategoryDTO, ConvertUnitsRequest, ConvertUnitsResponse, ConverterView, GetUnitsResponse,
    QuickReference, UnitDTO,
};

/// Decimals in `formatted_result`
const FORMATTED_DECIMALS: usize = 4;

/// All categories in selector order
pub fn get_categories_command() -> Vec<CategoryDTO> {
    UnitCategory::ALL
        .iter()
        .map(|category| CategoryDTO {
            id: *category,
            label: category.label().to_string(),
            icon: category.icon().to_string(),
            group: category.group(),
        })
        .collect()
}

/// Units of a category in display order, with the default selection
pub fn get_units_command(category: String) -> AppResult<GetUnitsResponse> {
    let category: UnitCategory = category.parse()?;

    let units = list_units(category)
        .into_iter()
        .map(|name| -> AppResult<UnitDTO> {
            let symbol = unit_converter::unit_symbol(category, name)?;
            Ok(UnitDTO {
                id: name.to_string(),
                label: format!("{} ({})", name, symbol),
                symbol: symbol.to_string(),
                category,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let (default_from, default_to) = default_units(category);

    Ok(GetUnitsResponse {
        category,
        units,
        default_from: default_from.to_string(),
        default_to: default_to.to_string(),
    })
}

/// Convert a value between two units of a category
pub fn convert_units_command(request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
    let conversion = unit_converter::convert_named(
        &request.category,
        request.amount,
        &request.from_unit,
        &request.to_unit,
    )?;

    Ok(ConvertUnitsResponse {
        result: conversion.result,
        formatted_result: format_number(conversion.result, FORMATTED_DECIMALS),
        formula: conversion.formula,
        from_unit: request.from_unit,
        to_unit: request.to_unit,
    })
}

pub fn quick_reference_command(category: String) -> AppResult<QuickReference> {
    let category: UnitCategory = category.parse()?;
    unit_converter::quick_reference(category)
}

/// Apply a page interaction; returns the new state and what to render
pub fn interact_command(
    state: &ConverterState,
    interaction: Interaction,
) -> AppResult<(ConverterState, ConverterView)> {
    let next = state.handle(interaction)?;
    let view = next.view()?;
    Ok((next, view))
}
