//! Converter features
//!
//! The unit converter is the only feature the page exposes; it owns the
//! category tables and all conversion logic.

pub mod unit_converter;
