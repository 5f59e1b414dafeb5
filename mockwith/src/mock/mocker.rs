use serde_json::Value;
use tracing::debug;

use crate::action::{Response, Returns, Thrown};
use crate::error::{Error, Result};
use crate::invocation::Invocation;
use crate::matcher::Params;
use crate::times::Times;

use super::shared::Stub;
use super::MockObject;

/// First step of registering an expectation: the call-count policy is known,
/// the method is not.
#[must_use]
#[derive(Debug)]
pub struct Expects<'a> {
    object: &'a MockObject,
    invocation: Invocation,
}

impl<'a> Expects<'a> {
    pub(super) fn new(object: &'a MockObject, invocation: Invocation) -> Self {
        Self { object, invocation }
    }

    /// Select the method the expectation is registered for.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStubbed`] if the method was not stubbed on the mock
    /// and [`Error::AdapterMisuse`] if the mock was already released.
    pub fn method(self, method: &str) -> Result<InvocationMocker<'a>> {
        let shared = self.object.shared.lock();

        if shared.released {
            return Err(Error::AdapterMisuse(format!(
                "mock object of '{}' was released and does not accept expectations",
                shared.class.name()
            )));
        }

        if !shared.is_stubbed(method) {
            return Err(Error::NotStubbed {
                class: shared.class.name().into(),
                method: method.into(),
            });
        }

        drop(shared);

        Ok(InvocationMocker {
            object: self.object,
            method: method.into(),
            invocation: self.invocation,
            params: Params::default(),
            response: Response::Default,
        })
    }
}

/// Configuration of one expectation, registered by
/// [`register`](InvocationMocker::register).
#[must_use]
#[derive(Debug)]
pub struct InvocationMocker<'a> {
    object: &'a MockObject,
    method: String,
    invocation: Invocation,
    params: Params,
    response: Response,
}

impl InvocationMocker<'_> {
    /// Only accept calls with these leading argument values.
    pub fn with(mut self, params: Vec<Value>) -> Self {
        self.params = Params::new(params);

        self
    }

    /// Answer matched calls with the passed value or callback.
    pub fn will_return<R: Into<Returns>>(mut self, returns: R) -> Self {
        self.response = Response::Return(returns.into());

        self
    }

    /// Answer matched calls by raising the passed error.
    pub fn will_throw(mut self, thrown: Thrown) -> Self {
        self.response = Response::Throw(thrown);

        self
    }

    /// Register the expectation on the mock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AdapterMisuse`] if the mock was released in the
    /// meantime.
    pub fn register(self) -> Result<()> {
        let Self {
            object,
            method,
            invocation,
            params,
            response,
        } = self;

        let mut shared = object.shared.lock();
        if shared.released {
            return Err(Error::AdapterMisuse(format!(
                "mock object of '{}' was released and does not accept expectations",
                shared.class.name()
            )));
        }

        debug!(
            class = shared.class.name(),
            method = %method,
            %invocation,
            %params,
            "register expectation"
        );

        shared.stubs.push(Stub {
            method,
            params,
            response,
            invocation,
            times: Times::new(invocation.times_range()),
        });

        Ok(())
    }
}
