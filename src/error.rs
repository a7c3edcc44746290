use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum CronError {
    /// Expression doesn't consist of exactly five whitespace-separated fields.
    #[error("invalid cron expression, exactly 5 fields expected: '{0}'")]
    Structural(String),
    /// Single value can't be parsed as a number or known alias.
    #[error("invalid value: {0}")]
    MalformedValue(String),
    /// Range has a missing or unparsable bound.
    #[error("invalid range: {0}")]
    MalformedRange(String),
    /// Step base or interval is unparsable, or interval is zero.
    #[error("invalid step: {0}")]
    MalformedStep(String),
    /// Field text contains characters outside of the allowed set.
    #[error("invalid characters in field: {0}")]
    InvalidCharacters(String),
    /// Syntactically correct term doesn't fit the field's bounds.
    #[error("{field} value out of bounds: {value}")]
    OutOfBounds {
        /// Name of the failed field.
        field: &'static str,
        /// Offending term.
        value: String,
    },
    /// Expression has invalid fields (listed by index) and can't be scheduled.
    #[error("expression has invalid fields: {0:?}")]
    InvalidFields(Vec<usize>),
    /// Calculator didn't find an occurrence within its search horizon (in months).
    #[error("no occurrence found within {0} months")]
    NoOccurrenceFound(u32),
}
