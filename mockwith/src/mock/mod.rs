//! The [`mock`](self) module contains the mock object runtime: the object
//! that stands in for the mocked type, the builder that creates it and the
//! configuration chain that registers expectations on it.
//!
//! Calls are answered by the first registered stub of the called method that
//! - accepts the arguments of the call
//! - did not receive its maximum number of calls yet
//! - is not bound to a different position in the call sequence of the mock
//!
//! Every handle of a mock shares the same state. When the last handle is
//! dropped, the mock verifies that every stub received its minimum number of
//! calls and that no call failed, and panics otherwise.

mod builder;
mod failure;
mod mocker;
mod shared;

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::{trace, warn};

use crate::class::ClassInfo;
use crate::invocation::Invocation;

pub use builder::{MockBuilder, MockOptions};
pub use failure::{Failure, Fault};
pub use mocker::{Expects, InvocationMocker};

use failure::report;
use shared::Shared;

/// One call received by a mock.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Position of the call in the call sequence of the mock.
    pub index: usize,

    /// Name of the called method.
    pub method: String,

    /// Arguments of the call.
    pub args: Vec<Value>,
}

/// Handle of a mock object. Clones refer to the same mock.
#[derive(Clone)]
pub struct MockObject {
    shared: Arc<Mutex<Shared>>,
}

impl MockObject {
    /// Start building a mock of the passed `class`.
    pub fn builder(class: &ClassInfo) -> MockBuilder {
        MockBuilder::new(class)
    }

    fn from_shared(shared: Shared) -> Self {
        Self {
            shared: Arc::new(Mutex::new(shared)),
        }
    }

    /// Name of the mocked class.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.shared.lock().class.name().into()
    }

    /// Options the mock was built with.
    #[must_use]
    pub fn options(&self) -> MockOptions {
        self.shared.lock().options
    }

    /// Returns `true` if calls of `method` are answered by the mock.
    #[must_use]
    pub fn is_stubbed(&self, method: &str) -> bool {
        self.shared.lock().is_stubbed(method)
    }

    /// Names of all stubbed methods.
    #[must_use]
    pub fn stubbed_methods(&self) -> Vec<String> {
        self.shared.lock().stubbed.clone()
    }

    /// Arguments passed to the constructor, `None` if the constructor was
    /// bypassed.
    #[must_use]
    pub fn constructor_args(&self) -> Option<Vec<Value>> {
        self.shared.lock().constructor_args.clone()
    }

    /// Start registering an expectation with the passed call-count policy.
    pub fn expects(&self, invocation: Invocation) -> Expects<'_> {
        Expects::new(self, invocation)
    }

    /// Call `method` of the mock with the passed `args`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::Thrown`] if the matched stub raises an error, and
    /// [`Fault::Failed`] if the call does not satisfy the expectations of the
    /// mock. Failures are recorded and reported again on verification.
    pub fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Value, Fault> {
        let selected = self.shared.lock().select(method, &args);

        match selected {
            Ok(response) => {
                trace!(method, ?args, ?response, "dispatch call");

                response.exec(&args).map_err(Fault::Thrown)
            }
            Err(failure) => {
                warn!(method, ?args, "call does not satisfy the expectations");

                Err(Fault::Failed(failure))
            }
        }
    }

    /// Like [`invoke`](Self::invoke), but panics on any fault.
    ///
    /// # Panics
    ///
    /// Panics if the stub raises an error or the call does not satisfy the
    /// expectations of the mock.
    pub fn call(&self, method: &str, args: Vec<Value>) -> Value {
        match self.invoke(method, args) {
            Ok(value) => value,
            Err(Fault::Thrown(thrown)) => {
                panic!("{}::{method} threw: {thrown}", self.class_name())
            }
            Err(Fault::Failed(failure)) => panic!("{failure}"),
        }
    }

    /// Every call received so far, in call order.
    #[must_use]
    pub fn invocations(&self) -> Vec<Call> {
        self.shared.lock().calls.clone()
    }

    /// Check the expectations of the mock.
    ///
    /// # Errors
    ///
    /// Returns the recorded call failures and every stub that did not receive
    /// its minimum number of calls.
    pub fn verify(&self) -> Result<(), Vec<Failure>> {
        let failures = self.shared.lock().verify();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }

    /// Verify the mock now.
    ///
    /// # Panics
    ///
    /// Panics if the expectations are not satisfied, or if the mock is locked
    /// because the checkpoint was requested from inside a callback of it.
    pub fn checkpoint(&self) {
        if let Some(locked) = self.shared.try_lock() {
            locked.checkpoint();
        } else {
            panic!("Unable to lock mock object: Deadlock? Make sure that you do not call `checkpoint` of a mock inside a callback of the same mock.");
        }
    }

    /// Stop checking the expectations when the mock is dropped. A released
    /// mock does not accept new expectations.
    pub fn release(&self) {
        let mut shared = self.shared.lock();
        shared.check_on_drop = false;
        shared.released = true;
    }

    /// Returns `true` if the mock was [released](Self::release).
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.shared.lock().released
    }

    /// Returns `true` if both handles refer to the same mock.
    #[must_use]
    pub fn same_object(&self, other: &MockObject) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    /// Failure report of the mock, `None` if every expectation is satisfied.
    #[must_use]
    pub fn report(&self) -> Option<String> {
        let shared = self.shared.lock();
        let failures = shared.verify();

        (!failures.is_empty()).then(|| report(shared.class.name(), &failures))
    }
}

impl AsRef<MockObject> for MockObject {
    fn as_ref(&self) -> &MockObject {
        self
    }
}

impl Debug for MockObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut s = f.debug_struct("MockObject");

        if let Some(shared) = self.shared.try_lock() {
            s.field("class", &shared.class.name())
                .field("stubbed", &shared.stubbed)
                .field("stubs", &shared.stubs.len())
                .field("calls", &shared.calls.len());
        }

        s.finish_non_exhaustive()
    }
}
