pub mod types;
pub mod settings;
pub mod error;

#[cfg(test)]
mod types_test;
