//! Common types used across the workspace.

pub mod amount;

pub use amount::DecimalError;
