//! Error type shared by the whole crate.

/// Errors reported by the eight queens GA.
///
/// Exhausting the generation budget without reaching the target fitness is
/// not an error; it shows up as [`StopReason::MaxGenerations`] in the trace.
///
/// [`StopReason::MaxGenerations`]: crate::ga::StopReason::MaxGenerations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid random range: min ({min}) must be less than or equal to max ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("invalid gene: row {row} in column {column} is outside the board")]
    InvalidGene { column: usize, row: u8 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
