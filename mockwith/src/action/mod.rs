//! The [`action`](self) module contains the responses a stubbed method may
//! produce once a call matched one of its expectations.

mod returns;
mod throws;

use serde_json::Value;

pub use returns::{Callback, Returns};
pub use throws::{Message, Thrown};

/// What a stub does when a call was matched to it.
#[derive(Debug, Clone, Default)]
pub enum Response {
    /// No response was configured, the call returns `null`.
    #[default]
    Default,

    /// Return a fixed value or the value computed by a callback.
    Return(Returns),

    /// Raise the contained error.
    Throw(Thrown),
}

impl Response {
    /// Execute the response for a call with the passed `args`.
    ///
    /// # Errors
    ///
    /// Returns the configured error if the response throws, or the error
    /// raised by a fallible callback.
    pub fn exec(&self, args: &[Value]) -> Result<Value, Thrown> {
        match self {
            Self::Default => Ok(Value::Null),
            Self::Return(returns) => returns.exec(args),
            Self::Throw(thrown) => Err(thrown.clone()),
        }
    }
}
