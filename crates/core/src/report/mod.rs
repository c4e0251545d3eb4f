//! Financial statement production.
//!
//! [`ReportService`] runs one statement end to end: host preconditions,
//! period resolution, balance aggregation, formula evaluation and
//! cross-checks. [`render`] lays the result out as styled rows.

pub mod environment;
pub mod error;
pub mod render;
pub mod service;
pub mod types;
pub mod warning;


pub use environment::{ACCEPTED_LICENSES, HostEnvironment, MIN_APPLICATION_VERSION, compare_versions};
pub use error::ReportError;
pub use render::{RenderCell, ReportSink, RowCollector, StyleTag, render};
pub use service::{ReportRequest, ReportService, SIDE_COLUMN};
pub use types::{FinancialReport, ReportHeader, ReportOutcome, StatementKind};
pub use warning::ReportWarning;
