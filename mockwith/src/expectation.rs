//! The [`expectation`](self) module contains the canonical form of one
//! expectation and the code that applies it to a mock.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde_json::Value;

use crate::action::{Returns, Thrown};
use crate::error::{Error, Result};
use crate::invocation::Invocation;
use crate::mock::MockObject;

/// One fully normalized expectation for a single method.
///
/// An expectation is consumed when it is [applied](Expectation::apply) to a
/// mock, the mock keeps its own record of the configured behaviour.
#[derive(Debug, Clone)]
pub struct Expectation {
    method: String,
    params: Vec<Value>,
    result: Option<Returns>,
    throws: Option<Thrown>,
    invocation: Invocation,
}

impl Expectation {
    /// Create a new expectation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingExpectation`] if both `result` and `throws`
    /// are set, and [`Error::MalformedEntry`] for an empty method name.
    pub fn new<M>(
        method: M,
        params: Vec<Value>,
        result: Option<Returns>,
        throws: Option<Thrown>,
        invocation: Invocation,
    ) -> Result<Self>
    where
        M: Into<String>,
    {
        let method = method.into();
        if method.is_empty() {
            return Err(Error::malformed("method name must not be empty"));
        }

        if result.is_some() && throws.is_some() {
            return Err(Error::ConflictingExpectation { method });
        }

        Ok(Self {
            method,
            params,
            result,
            throws,
            invocation,
        })
    }

    /// Create an expectation that forbids any call of `method`.
    pub fn never<M: Into<String>>(method: M) -> Self {
        Self {
            method: method.into(),
            params: Vec::new(),
            result: None,
            throws: None,
            invocation: Invocation::Never,
        }
    }

    /// Name of the expected method.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Expected argument values, empty if arguments are not checked.
    #[must_use]
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Value to return.
    #[must_use]
    pub fn result(&self) -> Option<&Returns> {
        self.result.as_ref()
    }

    /// Error to throw.
    #[must_use]
    pub fn throws(&self) -> Option<&Thrown> {
        self.throws.as_ref()
    }

    /// Call-count policy.
    #[must_use]
    pub fn invocation(&self) -> Invocation {
        self.invocation
    }

    /// Register this expectation on the passed `mock`.
    ///
    /// # Errors
    ///
    /// Fails if the method was not stubbed on the mock or the mock does not
    /// accept configuration any more.
    pub fn apply(self, mock: &MockObject) -> Result<()> {
        let Self {
            method,
            params,
            result,
            throws,
            invocation,
        } = self;

        let mut mocker = mock.expects(invocation).method(&method)?;
        if !params.is_empty() {
            mocker = mocker.with(params);
        }
        if let Some(result) = result {
            mocker = mocker.will_return(result);
        }
        if let Some(throws) = throws {
            mocker = mocker.will_throw(throws);
        }

        mocker.register()
    }
}

impl Display for Expectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}(", self.method)?;
        for (i, value) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")?;

        if let Some(result) = &self.result {
            write!(f, " -> {result:?}")?;
        }
        if let Some(throws) = &self.throws {
            write!(f, " throws '{throws}'")?;
        }

        write!(f, " [{}]", self.invocation)
    }
}
