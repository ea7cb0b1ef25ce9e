use thiserror::Error;

/// Errors that can occur in the fallible parts of the core.
///
/// The shaping functions (filtering, grouping, option derivation) are total
/// and never produce these; only structured label parsing does.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The episode label does not follow the `S01E01` pattern.
    #[error("invalid episode code: {code:?}")]
    InvalidEpisodeCode {
        /// The label that could not be parsed.
        code: String,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
