//! The [`error`](self) module contains the error type returned while
//! expectations are parsed, built and applied to a mock.

use thiserror::Error;

use crate::action::Thrown;

/// Result type used by the configuration API of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error raised while turning expectation literals into a configured mock.
///
/// Every variant is raised before the mock is handed out to the caller. Once
/// a mock was returned, call-time problems are reported as [`Fault`](crate::Fault)s
/// instead.
#[derive(Debug, Error)]
pub enum Error {
    /// An `invoked` literal does not match any supported shape.
    #[error("invalid invocation '{literal}': {reason}")]
    InvalidSpec {
        /// The offending literal, rendered as written.
        literal: String,

        /// Why the literal was rejected.
        reason: String,
    },

    /// An expectation sets both a result and an error to throw.
    #[error("cannot expect both 'result' and 'throws' (method '{method}')")]
    ConflictingExpectation {
        /// Method the expectation was declared for.
        method: String,
    },

    /// The mock type or mock handle does not honour the runtime contract.
    #[error("adapter misuse: {0}")]
    AdapterMisuse(String),

    /// A literal entry is structurally wrong.
    #[error("malformed expectation: {0}")]
    MalformedEntry(String),

    /// The expectation names a method the mocked class does not declare.
    #[error("cannot mock unknown method '{method}' of '{class}'")]
    UnknownMethod {
        /// Name of the mocked class.
        class: String,

        /// Name of the unknown method.
        method: String,
    },

    /// The expectation names a method that was not stubbed on the mock.
    #[error("method '{method}' of '{class}' was not stubbed and cannot be configured")]
    NotStubbed {
        /// Name of the mocked class.
        class: String,

        /// Name of the method.
        method: String,
    },

    /// The constructor hook of the mocked class rejected its arguments.
    #[error("constructor of '{class}' failed: {source}")]
    Construction {
        /// Name of the mocked class.
        class: String,

        /// The error raised by the constructor.
        source: Thrown,
    },
}

impl Error {
    pub(crate) fn invalid_spec<L, R>(literal: L, reason: R) -> Self
    where
        L: Into<String>,
        R: Into<String>,
    {
        Self::InvalidSpec {
            literal: literal.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed<S: Into<String>>(reason: S) -> Self {
        Self::MalformedEntry(reason.into())
    }
}
