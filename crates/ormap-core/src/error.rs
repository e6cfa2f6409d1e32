mod adhoc;
mod invalid_input;
mod invalid_statement;

use adhoc::AdhocError;
use invalid_input::InvalidInput;
use invalid_statement::InvalidStatement;
use std::sync::Arc;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while building a registry or a statement.
///
/// Lookups never produce an `Error`: asking for a type or configuration that
/// has no mappings is an ordinary outcome and yields an empty result.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed most recent first, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => inner.kind,
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    pub(crate) fn from_kind(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
pub(crate) enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    InvalidInput(InvalidInput),
    InvalidStatement(InvalidStatement),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidInput(err) => core::fmt::Display::fmt(err, f),
            InvalidStatement(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown ormap error"),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from_kind(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        assert_eq!(core::mem::size_of::<usize>(), core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("bad mapping: {}", 7));
        assert_eq!(err.to_string(), "bad mapping: 7");
    }

    #[test]
    fn bail_returns_early() {
        fn lookup(name: &str) -> crate::Result<usize> {
            if name.is_empty() {
                bail!("type name is empty; position={}", 3);
            }
            Ok(name.len())
        }

        assert_eq!(lookup("Dog").unwrap(), 3);

        let err = lookup("").unwrap_err();
        assert_eq!(err.to_string(), "type name is empty; position=3");
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn error_chain_display() {
        let err = Error::invalid_input("mapping source is missing")
            .context(err!("building registry"))
            .context(err!("startup"));

        assert_eq!(
            err.to_string(),
            "startup: building registry: invalid input: mapping source is missing"
        );
    }

    #[test]
    fn context_keeps_root_kind_reachable() {
        let err = Error::invalid_input("no mappings").context(err!("outer"));
        assert!(!err.is_invalid_input());
        assert!(err.chain().any(Error::is_invalid_input));
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("descriptor failed").into();
        assert_eq!(err.to_string(), "descriptor failed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_input_predicate() {
        let err = Error::invalid_input("empty type name");
        assert!(err.is_invalid_input());
        assert!(!err.is_invalid_statement());
        assert_eq!(err.to_string(), "invalid input: empty type name");
    }

    #[test]
    fn invalid_statement_predicate() {
        let err = Error::invalid_statement("relation name is empty");
        assert!(err.is_invalid_statement());
        assert_eq!(err.to_string(), "invalid statement: relation name is empty");
    }
}
