use super::{Error, ErrorKind};

/// Error carrying a free-form message.
#[derive(Debug)]
pub(crate) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: impl Into<String>) -> AdhocError {
        AdhocError {
            message: message.into().into(),
        }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an error from pre-formatted arguments. Used by [`err!`] and
    /// [`bail!`].
    ///
    /// [`err!`]: crate::err
    /// [`bail!`]: crate::bail
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        let message = match args.as_str() {
            Some(message) => message.to_string(),
            None => args.to_string(),
        };
        Error::from_kind(ErrorKind::Adhoc(AdhocError::new(message)))
    }
}
