use std::fmt;
use std::io;
use std::sync::Arc;

/// A convenient type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur while rendering a volume header.
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
    io: Option<Arc<io::Error>>,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A route could not be registered or reversed.
    Route,
    /// A partial was not registered with the renderer.
    PartialNotFound,
    /// A partial or the renderer failed to format its output.
    Format,
    /// The underlying writer failed.
    Io,
}

impl Error {
    pub(crate) fn route(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Route,
            msg: msg.into(),
            io: None,
        }
    }

    pub(crate) fn partial_not_found(name: &str) -> Self {
        Self {
            kind: ErrorKind::PartialNotFound,
            msg: format!("unknown partial `{name}`"),
            io: None,
        }
    }

    pub(crate) fn partial(name: &str, err: crate::fmt::Error) -> Self {
        let msg = match err.message() {
            Some(msg) => format!("partial `{name}` failed: {msg}"),
            None => format!("partial `{name}` failed: format error"),
        };
        Self {
            kind: ErrorKind::Format,
            msg,
            io: None,
        }
    }

    /// Returns the category of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message without any source information.
    #[inline]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            msg: format!("failed to write header: {err}"),
            io: Some(Arc::new(err)),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self {
            kind: ErrorKind::Format,
            msg: String::from("format error"),
            io: None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.io
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("msg", &self.msg)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}
