//! The [`factory`](self) module contains the components that turn literal
//! tables into expectations and that build the mock objects they are applied
//! to.

use serde_json::Value;
use tracing::debug;

use crate::class::ClassInfo;
use crate::error::{Error, Result};
use crate::expectation::Expectation;
use crate::invocation::{Invocation, InvocationParser};
use crate::literal::{NamedBatch, RawBatch, RawItem};
use crate::mock::{MockBuilder, MockObject};
use crate::normalize::{normalize_entry, normalize_named, Normalized};

/// Expectations built from one table, together with the methods they refer to.
#[derive(Default, Debug, Clone)]
pub struct ExpectationBatch {
    expectations: Vec<Expectation>,
    methods: Vec<String>,
}

impl ExpectationBatch {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expectation.
    pub fn push(&mut self, expectation: Expectation) {
        if !self.methods.iter().any(|m| m == expectation.method()) {
            self.methods.push(expectation.method().into());
        }

        self.expectations.push(expectation);
    }

    /// Expectations in the order they were added.
    #[must_use]
    pub fn expectations(&self) -> &[Expectation] {
        &self.expectations
    }

    /// Names of the referenced methods, without duplicates, in the order they
    /// were first referenced.
    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Number of expectations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    /// Returns `true` if the batch contains no expectation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }

    /// Apply every expectation to `mock`, in order.
    ///
    /// # Errors
    ///
    /// Forwards the first error raised by [`Expectation::apply`].
    pub fn apply(self, mock: &MockObject) -> Result<()> {
        self.expectations
            .into_iter()
            .try_for_each(|expectation| expectation.apply(mock))
    }
}

impl IntoIterator for ExpectationBatch {
    type Item = Expectation;
    type IntoIter = std::vec::IntoIter<Expectation>;

    fn into_iter(self) -> Self::IntoIter {
        self.expectations.into_iter()
    }
}

/// Builds [`Expectation`]s from literal tables.
#[derive(Default, Debug, Clone)]
pub struct ExpectationsFactory {
    parser: InvocationParser,
}

impl ExpectationsFactory {
    /// Create a new factory that uses `parser` for the `invoked` fields.
    #[must_use]
    pub fn new(parser: InvocationParser) -> Self {
        Self { parser }
    }

    /// Build all expectations of the passed table.
    ///
    /// Entries of a name-keyed table without call-count policy may be called
    /// any number of times. Entries of an ordered table without call-count
    /// policy are bound to the next free position of the call sequence; only
    /// these entries advance the position.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while an entry is normalized or its
    /// call-count policy is parsed.
    pub fn create_expectations(&self, batch: RawBatch) -> Result<ExpectationBatch> {
        let batch = match batch {
            RawBatch::Ordered(items) => self.create_ordered(items)?,
            RawBatch::Named(named) => self.create_named(named)?,
        };

        debug!(
            expectations = batch.len(),
            methods = ?batch.methods(),
            "built expectation batch"
        );

        Ok(batch)
    }

    /// Build one expectation. Without call-count policy the method may be
    /// called any number of times.
    ///
    /// # Errors
    ///
    /// Same as [`create_expectations`](Self::create_expectations).
    pub fn create_expectation<I: Into<RawItem>>(&self, item: I) -> Result<Expectation> {
        match item.into() {
            RawItem::Prepared(expectation) => Ok(expectation),
            RawItem::Entry(entry) => {
                let normalized = normalize_entry(entry)?;
                let invocation = self.parser.parse(normalized.invoked.as_ref())?;

                build(normalized, invocation)
            }
        }
    }

    fn create_ordered(&self, items: Vec<RawItem>) -> Result<ExpectationBatch> {
        let mut batch = ExpectationBatch::new();
        let mut position = 0;

        for item in items {
            let expectation = match item {
                RawItem::Prepared(expectation) => expectation,
                RawItem::Entry(entry) => {
                    let normalized = normalize_entry(entry)?;
                    let invocation = match &normalized.invoked {
                        Some(invoked) => self.parser.parse(Some(invoked))?,
                        None => {
                            position += 1;

                            Invocation::At(position - 1)
                        }
                    };

                    build(normalized, invocation)?
                }
            };

            batch.push(expectation);
        }

        Ok(batch)
    }

    fn create_named(&self, named: NamedBatch) -> Result<ExpectationBatch> {
        let mut batch = ExpectationBatch::new();
        let mut seen: Vec<String> = Vec::new();

        for (method, spec) in named.0 {
            if seen.contains(&method) {
                return Err(Error::malformed(format!(
                    "method '{method}' is listed more than once"
                )));
            }

            let normalized = normalize_named(&method, spec)?;
            let invocation = self.parser.parse(normalized.invoked.as_ref())?;

            batch.push(build(normalized, invocation)?);
            seen.push(method);
        }

        Ok(batch)
    }
}

fn build(normalized: Normalized, invocation: Invocation) -> Result<Expectation> {
    let Normalized {
        method,
        params,
        result,
        throws,
        invoked: _,
    } = normalized;

    Expectation::new(method, params, result, throws, invocation)
}

/// Builds the partial mocks the expectations are applied to.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockFactory;

impl MockFactory {
    /// Create a new factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build a mock of `class` that stubs the passed `methods`, or every
    /// method if the list is empty.
    ///
    /// Cloning the original and copying arguments is disabled, and stubbing
    /// methods the class does not declare is an error. Without
    /// `constructor_args` the constructor of the class is bypassed.
    ///
    /// # Errors
    ///
    /// Forwards the errors of [`MockBuilder::build`].
    pub fn new_partial_mock(
        &self,
        class: &ClassInfo,
        methods: &[String],
        constructor_args: Option<Vec<Value>>,
    ) -> Result<MockObject> {
        let builder = MockBuilder::new(class)
            .disable_original_clone()
            .disable_argument_cloning()
            .disallow_mocking_unknown_types()
            .set_methods(methods.iter().cloned());

        let builder = match constructor_args {
            None => builder.disable_original_constructor(),
            Some(args) => builder.set_constructor_args(args),
        };

        builder.build()
    }
}
