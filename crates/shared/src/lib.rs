//! Shared types, errors, and configuration for the SYSCOHADA report engine.
//!
//! This crate provides common pieces used across all other crates:
//! - Exact decimal arithmetic over host-provided balance strings
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::amount::{self, DecimalError};
