use super::{Error, ErrorKind};

/// Error when the input handed to a constructor is absent or malformed.
///
/// This occurs when:
/// - A registry is built without ever being given a mapping source
/// - A mapping record names an object type or configuration with an empty name
///
/// The value being constructed is never returned in a partially built state.
#[derive(Debug)]
pub(crate) struct InvalidInput {
    message: Box<str>,
}

impl std::error::Error for InvalidInput {}

impl core::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid input: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Error {
        Error::from_kind(ErrorKind::InvalidInput(InvalidInput {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid input error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidInput(_))
    }
}
