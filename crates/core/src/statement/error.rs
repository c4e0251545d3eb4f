//! Statement definition errors.

use thiserror::Error;

/// A statement table that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// A formula, layout row or identity names a line that has no definition.
    #[error("Line {referenced} referenced by {by} is not defined")]
    UnknownLine {
        /// Missing line code.
        referenced: &'static str,
        /// Where it was referenced.
        by: &'static str,
    },

    /// Formulas depend on each other in a loop.
    #[error("Circular line dependencies: {}", lines.join(", "))]
    Cycle {
        /// Codes of the lines left unordered.
        lines: Vec<&'static str>,
    },

    /// A line key is defined twice.
    #[error("Line {0} is defined more than once")]
    DuplicateLine(&'static str),
}
