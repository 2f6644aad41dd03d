use thiserror::Error;

/// Error returned when a string cannot be parsed into a [`Colour`](crate::Colour).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input matched none of the recognized colour grammars.
    #[error("Invalid colour format: {input:?}")]
    InvalidFormat { input: String },

    /// A token inside a recognized grammar could not be turned into a
    /// number, or the number does not fit a colour channel.
    #[error("Numeric conversion failed for {token:?}: {reason}")]
    NumericConversion { token: String, reason: String },
}

/// Error returned when a string names none of the known [`Format`](crate::Format)s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown colour format: {0:?}")]
pub struct UnknownFormat(pub String);

impl ParseError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        ParseError::InvalidFormat {
            input: input.to_string(),
        }
    }

    pub(crate) fn numeric(token: &str, reason: impl ToString) -> Self {
        ParseError::NumericConversion {
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }
}
