use super::{Error, ErrorKind};

/// Error when a statement builder cannot produce a statement.
///
/// Predicate and relation text are trusted, so the only condition detected
/// is a missing relation name.
#[derive(Debug)]
pub(crate) struct InvalidStatement {
    message: Box<str>,
}

impl std::error::Error for InvalidStatement {}

impl core::fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from_kind(ErrorKind::InvalidStatement(InvalidStatement {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidStatement(_))
    }
}
