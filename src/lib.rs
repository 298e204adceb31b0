//! UniConvert: unit conversion for the converter web page.
//!
//! The crate is split the same way the front end consumes it:
//! - `core::features::unit_converter` is the stateless conversion engine
//! - `core::history` and `core::state` hold the page state, threaded explicitly
//! - `api::commands` is the request/response surface the page calls
//! - `shared` carries errors, DTOs and settings

pub mod api;
pub mod core;
pub mod shared;

pub use crate::core::features::unit_converter::{
    convert, convert_named, default_units, format_number, list_units, quick_reference,
    Conversion, UnitCategory,
};
pub use crate::core::history::ConversionHistory;
pub use crate::core::state::{ConverterState, Interaction};
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::settings::ConverterSettings;
