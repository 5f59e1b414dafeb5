use std::error::Error as StdError;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use thiserror::Error;

/// Generic error raised for a `throws` value given as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Message(pub String);

/// Error a stubbed method raises instead of returning.
///
/// Cloning is cheap, every clone refers to the same error.
#[derive(Clone)]
pub struct Thrown(Arc<dyn StdError + Send + Sync>);

impl Thrown {
    /// Wrap any error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Create a generic error with the passed message.
    pub fn msg<S: Into<String>>(message: S) -> Self {
        Self::new(Message(message.into()))
    }

    /// Get a reference to the wrapped error.
    #[must_use]
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// Try to get the wrapped error as concrete type `E`.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref()
    }
}

impl Debug for Thrown {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Thrown").field(&self.0).finish()
    }
}

impl Display for Thrown {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl StdError for Thrown {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}
