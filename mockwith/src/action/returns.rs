use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use serde_json::Value;

use super::Thrown;

/// Value a stubbed method should return.
#[derive(Clone)]
pub enum Returns {
    /// Return a clone of the value on every call.
    Value(Value),

    /// Compute the value from the call arguments.
    Callback(Callback),
}

impl Returns {
    pub(crate) fn exec(&self, args: &[Value]) -> Result<Value, Thrown> {
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Callback(callback) => callback.call(args),
        }
    }
}

impl Debug for Returns {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Callback(_) => write!(f, "<callback>"),
        }
    }
}

impl From<Value> for Returns {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Callback> for Returns {
    fn from(callback: Callback) -> Self {
        Self::Callback(callback)
    }
}

type CallbackFn = dyn Fn(&[Value]) -> Result<Value, Thrown> + Send + Sync;

/// Computed-value provider that is invoked with the arguments of the call.
#[derive(Clone)]
pub struct Callback(Arc<CallbackFn>);

impl Callback {
    /// Create a callback that always produces a value.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(move |args| Ok(f(args))))
    }

    /// Create a callback that may raise an error instead of producing a value.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Thrown> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the callback.
    ///
    /// # Errors
    ///
    /// Forwards the error of a [fallible](Self::fallible) callback.
    pub fn call(&self, args: &[Value]) -> Result<Value, Thrown> {
        (self.0)(args)
    }
}

impl Debug for Callback {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Callback")
    }
}
