use crate::value::LiteralError;
use thiserror::Error as ThisError;

///
/// Error
///
/// The only hard failures of the engine: a filter literal that cannot be
/// turned into a value of its path's leaf type. Unknown paths and unsortable
/// shapes are skipped, not reported.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid literal for '{path}': {source}")]
    InvalidLiteral {
        path: String,
        #[source]
        source: LiteralError,
    },

    #[error("null literal for non-nullable '{path}'")]
    NullLiteral { path: String },
}

impl Error {
    /// Canonical dotted name of the path the failing filter resolved to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidLiteral { path, .. } | Self::NullLiteral { path } => path,
        }
    }
}
