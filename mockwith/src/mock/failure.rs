use thiserror::Error;

use crate::action::Thrown;

/// A call or a verification that did not satisfy the expectations of a mock.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// No registered stub accepted the call.
    #[error("No suitable expectation found for {class}::{method}({args}) (call #{index})\nTried the following expectations:\n{tried}")]
    NoMatch {
        /// Name of the mocked class.
        class: String,

        /// Name of the called method.
        method: String,

        /// Rendered arguments of the call.
        args: String,

        /// Position of the call in the call sequence of the mock.
        index: usize,

        /// Report of every stub that was tried.
        tried: String,
    },

    /// A method was called that was not stubbed on the mock.
    #[error("Method {class}::{method} was called, but it was not stubbed")]
    NotStubbed {
        /// Name of the mocked class.
        class: String,

        /// Name of the called method.
        method: String,
    },

    /// A stub received fewer calls than expected.
    #[error("Expectation {class}::{stub} was called {count} time(s), but is expected to be called {expected}")]
    Unsatisfied {
        /// Name of the mocked class.
        class: String,

        /// Description of the stub.
        stub: String,

        /// Number of calls the stub received.
        count: usize,

        /// Description of the expected number of calls.
        expected: String,
    },
}

/// Error returned by [`MockObject::invoke`](super::MockObject::invoke).
#[derive(Debug, Clone, Error)]
pub enum Fault {
    /// The call was matched and the stub raised its error.
    #[error("{0}")]
    Thrown(Thrown),

    /// The call did not satisfy the expectations of the mock.
    #[error("{0}")]
    Failed(Failure),
}

pub(crate) fn report(class: &str, failures: &[Failure]) -> String {
    use std::fmt::Write;

    let mut msg = String::new();
    let _ = writeln!(msg, "Mocked object '{class}' has unfulfilled expectations:");

    for failure in failures {
        for (i, line) in failure.to_string().lines().enumerate() {
            let prefix = if i == 0 { "- " } else { "  " };
            let _ = writeln!(msg, "{prefix}{line}");
        }
    }

    msg
}
