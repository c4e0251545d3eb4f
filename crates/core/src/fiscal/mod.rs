//! Reporting period classification and prior-period derivation.

pub mod error;
pub mod labels;
pub mod period;
pub mod resolver;

pub use error::PeriodError;
pub use period::{
    PeriodKind, PriorPeriod, PriorRule, PriorSource, ReportingPeriod, ResolvedPeriod,
    UNKNOWN_PRIOR_LABEL,
};
pub use resolver::{PeriodResolver, classify, duration_months};
