//! Shared types and models for the AI Calorie Counter analysis core
//!
//! This crate contains the data shapes shared between the analysis engine
//! and any caller that feeds it recognizer output or renders its reports.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
