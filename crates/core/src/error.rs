//! Validation errors for tool arguments.

/// A tool-call argument failed its declared shape.
///
/// The `Display` form is what callers see inside the failure envelope, so
/// every variant names the offending field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The arguments value was not a JSON object.
    #[error("arguments must be a JSON object")]
    NotAnObject,

    /// A required field was absent or `null`.
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// A field had the wrong JSON type.
    #[error("field '{field}' must be a {expected}")]
    WrongType { field: String, expected: &'static str },

    /// A string field that must carry content was empty or blank.
    #[error("field '{field}' must not be empty")]
    EmptyString { field: String },

    /// An integer field fell outside its inclusive bounds.
    #[error("field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        /// The number as the caller sent it.
        value: serde_json::Number,
    },

    /// The normalized arguments could not be turned into the typed struct.
    #[error("malformed arguments: {0}")]
    Malformed(String),
}

impl ValidationError {
    /// Name of the field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::WrongType { field, .. }
            | Self::EmptyString { field }
            | Self::OutOfRange { field, .. } => Some(field),
            Self::NotAnObject | Self::Malformed(_) => None,
        }
    }
}
