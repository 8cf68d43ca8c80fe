use std::fmt;
use std::fmt::{Debug, Display, Formatter};

pub type Result<T> = std::result::Result<T, Error>;

/// The two failure classes of this program. Validation failures are caught at the form boundary
/// and never reach the network or the cache. Transport failures leave the cache and display
/// unchanged; every failure is recoverable by a subsequent user action.
pub enum Error {
    /// Bad user input: empty name, non-positive or non-numeric amount, missing date.
    Validation(String),
    /// A network or server failure on a store operation. Never retried automatically.
    Transport(anyhow::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(message) => write!(f, "Validation({message:?})"),
            Error::Transport(e) => write!(f, "Transport({e:?})"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(message) => write!(f, "{message}"),
            Error::Transport(e) => write!(f, "{e:#}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(_) => None,
            Error::Transport(e) => e.source(),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(e: anyhow::Error) -> Self {
        Error::Transport(e)
    }
}
