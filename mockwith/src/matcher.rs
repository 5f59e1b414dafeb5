//! The [`matcher`](self) module contains the argument matchers a stub uses to
//! decide if a call belongs to it.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde_json::Value;

/// A matcher is used to check if the passed arguments match a pre-defined
/// expectation.
pub trait Matcher<T: ?Sized> {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

/// Matcher for the argument list of a call.
///
/// An empty list of expected values does not constrain the call. Otherwise
/// the call needs at least as many arguments as expected values, and every
/// expected value must be equal to the argument at the same position.
/// Additional arguments are not checked.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Params(Vec<Value>);

impl Params {
    /// Create a new matcher from the expected values.
    #[must_use]
    pub fn new(expected: Vec<Value>) -> Self {
        Self(expected)
    }

    /// Returns `true` if the matcher accepts every argument list.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.0.is_empty()
    }

    /// Expected values.
    #[must_use]
    pub fn expected(&self) -> &[Value] {
        &self.0
    }
}

impl Matcher<[Value]> for Params {
    fn matches(&self, args: &[Value]) -> bool {
        args.len() >= self.0.len() && self.0.iter().zip(args).all(|(a, b)| a == b)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_any() {
            return write!(f, "(..)");
        }

        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Matcher::fmt(self, f)
    }
}
