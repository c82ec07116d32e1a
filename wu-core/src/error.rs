use thiserror::Error;

/// Failure while turning a record into report lines.
///
/// These errors are local to one report: the caller can print them and
/// carry on with the next category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("field '{field}' is not a valid number: '{value}'")]
    MalformedNumber { field: &'static str, value: String },

    #[error("temperature '{value}' does not look like '<F> F (<C> C)'")]
    TemperaturePattern { value: String },

    #[error("response contained no {what}")]
    MissingEntry { what: &'static str },
}
