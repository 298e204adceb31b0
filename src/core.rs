pub mod features;
pub mod history;
pub mod state;
