//! Domain models for the AI Calorie Counter analysis core

mod detection;
mod food;
mod report;

pub use detection::*;
pub use food::*;
pub use report::*;
