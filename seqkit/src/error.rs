use strum::EnumMessage;
use strum_macros::{EnumMessage, IntoStaticStr};

/// Misuse of a library function.
///
/// Raised when a caller passes an argument the operation cannot work with.
/// Failures of caller-supplied callbacks are never turned into this type; they
/// are returned as-is inside a [`Partial`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, EnumMessage, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Invalid argument.
    ///
    /// An argument is outside the domain the operation accepts, such as a
    /// chunk size that is zero or negative. The operation does not attempt
    /// to proceed with an adjusted value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// The name of the error condition, such as `InvalidArgument`.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// A short description of the error condition.
    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    /// A longer explanation of when the error condition occurs.
    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The outcome of a traversal that stopped at a failing callback.
///
/// `partial` holds what was produced from the elements before the failing
/// one; `error` is the callback's error, unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Partial<R, E> {
    /// The result accumulated before the failure
    pub partial: R,
    /// The error reported by the callback
    pub error: E,
}

/// The return type of the `try_` family.
pub type PartialResult<R, E> = std::result::Result<R, Partial<R, E>>;

impl<R, E> Partial<R, E> {
    /// Pair a partial result with the error that cut it short.
    pub fn new(partial: R, error: E) -> Self {
        Partial { partial, error }
    }

    /// The result accumulated before the failure.
    pub fn partial(&self) -> &R {
        &self.partial
    }

    /// The error reported by the callback.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Split into the partial result and the error.
    pub fn into_parts(self) -> (R, E) {
        (self.partial, self.error)
    }

    /// Drop the error, keeping only the partial result.
    pub fn into_partial(self) -> R {
        self.partial
    }

    /// Drop the partial result, keeping only the error.
    ///
    /// Handy with `?`: `try_map(&input, f).map_err(Partial::into_error)?`.
    pub fn into_error(self) -> E {
        self.error
    }

    /// Transform the partial result, keeping the error.
    pub fn map_partial<S>(self, f: impl FnOnce(R) -> S) -> Partial<S, E> {
        Partial {
            partial: f(self.partial),
            error: self.error,
        }
    }
}

impl<R, E> std::fmt::Display for Partial<R, E>
where
    E: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<R, E> std::error::Error for Partial<R, E>
where
    R: std::fmt::Debug,
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
