//! Command surface for the converter page
//!
//! The page calls these with serializable requests and renders the responses.
//!
//! - `converter`: conversions, unit lists, quick reference, page interactions
//! - `settings`: settings persistence

pub mod converter;
pub mod settings;
