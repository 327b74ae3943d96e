use thiserror::Error;

/// A failure while running a command.
///
/// Input failures are raised before any collection operation runs, so the
/// collection is never touched when one of them is returned.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("Invalid input. Index must be an integer, got `{0}`.")]
    InvalidIndex(String),
    #[error("Invalid input format for value: expected {expected}, got `{input}`.")]
    InvalidValue {
        expected: &'static str,
        input: String,
    },
    #[error("{0} not supported for this type")]
    Unsupported(&'static str),
    #[error("[Error] {0}")]
    Core(#[from] lineal_core::Error),
}

impl CliError {
    /// Whether this was raised by the collection rather than by input
    /// validation.
    pub(crate) fn is_core(&self) -> bool {
        matches!(self, CliError::Core(_))
    }
}

/// Parse a signed position argument.
pub(crate) fn parse_index(input: &str) -> Result<isize, CliError> {
    input
        .parse()
        .map_err(|_| CliError::InvalidIndex(input.to_string()))
}
