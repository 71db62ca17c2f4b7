use thiserror::Error;

/// Result type for log-decoding operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while decoding chat-log lines into repair records.
///
/// Every variant carries the offending raw text so the message can be shown
/// to an operator as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The delimiter never occurred in the line
    #[error("'{line}' cannot be split by '{delimiter}'")]
    DelimiterMissing { line: String, delimiter: String },

    /// The delimiter occurred more than once
    #[error("'{line}' was split by '{delimiter}' too many times")]
    DelimiterRepeated { line: String, delimiter: String },

    /// The bracketed line prefix is not an HH:MM:SS time of day
    #[error("'{text}' is not an HH:MM:SS timestamp")]
    InvalidTimestamp { text: String },

    /// The value part parsed neither as an integer nor as a float
    #[error("'{value}' is not a number")]
    InvalidNumber { value: String },

    /// A material quantity must be a decimal integer, no float fallback
    #[error("'{value}' is not an integer quantity")]
    InvalidQuantity { value: String },

    /// An integer-only field carried a fractional value
    #[error("expected an integer for {field}, got '{value}'")]
    ExpectedInteger { field: &'static str, value: String },

    /// The boundary pair leaves no room for the schema's required lines
    #[error("event at lines {open}..={close} is too short for the {schema} schema")]
    TruncatedRecord {
        open: usize,
        close: usize,
        schema: &'static str,
    },

    /// The boundary extends past the end of the line sequence
    #[error("event close at line {close} is outside the {line_count}-line log")]
    BoundaryOutOfRange { close: usize, line_count: usize },

    /// A required record field failed to decode
    #[error("failed to decode {field}: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Wrap this error with the name of the field being decoded
    #[must_use]
    pub fn in_field(self, field: &'static str) -> Self {
        Self::Field {
            field,
            source: Box::new(self),
        }
    }

    /// The originating field, if this error was raised during record decode
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Field { field, .. } | Self::ExpectedInteger { field, .. } => Some(*field),
            _ => None,
        }
    }
}
