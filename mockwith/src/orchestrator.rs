//! The [`orchestrator`](self) module contains [`MockWithExpectations`], the
//! entry point that turns a literal table into a ready-to-use mock.

use serde_json::Value;
use tracing::debug;

use crate::class::{ClassInfo, Mockable};
use crate::completer::complete_missing;
use crate::error::{Error, Result};
use crate::expectation::Expectation;
use crate::factory::{ExpectationsFactory, MockFactory};
use crate::literal::{RawBatch, RawItem};
use crate::mock::MockObject;

/// Creates mocks from expectation tables and adds expectations to existing
/// mocks.
///
/// The orchestrator owns the components it delegates to. A test usually
/// creates one instance in its setup and uses it for every mock of the test.
///
/// # Example
///
/// ```
/// use mockwith::{mockable, named, MockWithExpectations};
///
/// #[mockable]
/// pub trait Greeter {
///     fn name(&self) -> String;
///
///     fn greet(&self) -> String {
///         format!("Hello {}!", self.name())
///     }
/// }
///
/// let mocks = MockWithExpectations::default();
/// let greeter: MockGreeter = mocks
///     .create_mock_with_expectations(named! { "name" => [result = "World", invoked = "once"] }, None)
///     .unwrap();
///
/// assert_eq!(greeter.greet(), "Hello World!");
/// ```
#[derive(Default, Debug, Clone)]
pub struct MockWithExpectations {
    expectations: ExpectationsFactory,
    mocks: MockFactory,
}

impl MockWithExpectations {
    /// Create a new orchestrator from its components.
    #[must_use]
    pub fn new(expectations: ExpectationsFactory, mocks: MockFactory) -> Self {
        Self {
            expectations,
            mocks,
        }
    }

    /// Create a mock of type `M` configured with the passed table.
    ///
    /// Methods the table does not mention but that must be stubbed (every
    /// public method of an interface, every abstract method of an abstract
    /// class) are expected to be never called. Without `constructor_args`
    /// the constructor of the mocked class is bypassed.
    ///
    /// # Errors
    ///
    /// Returns the errors raised while the table is built, before any mock
    /// was created, or while the mock is built and configured.
    /// [`Error::AdapterMisuse`] is returned if `M` does not honour the
    /// [`Mockable`] contract.
    pub fn create_mock_with_expectations<M, B>(
        &self,
        batch: B,
        constructor_args: Option<Vec<Value>>,
    ) -> Result<M>
    where
        M: Mockable,
        B: Into<RawBatch>,
    {
        let object = self.create_object(M::class_info(), batch, constructor_args)?;
        let mock = M::from_object(object.clone());

        if !mock.object().same_object(&object) {
            object.release();

            return Err(Error::AdapterMisuse(format!(
                "mock type of '{}' does not hold the object it was created from",
                M::class_info().name()
            )));
        }

        Ok(mock)
    }

    /// Like [`create_mock_with_expectations`](Self::create_mock_with_expectations),
    /// but returns the untyped mock object of `class`.
    ///
    /// # Errors
    ///
    /// Same as [`create_mock_with_expectations`](Self::create_mock_with_expectations).
    pub fn create_object<B: Into<RawBatch>>(
        &self,
        class: &ClassInfo,
        batch: B,
        constructor_args: Option<Vec<Value>>,
    ) -> Result<MockObject> {
        if let Some(method) = class.duplicate_method() {
            return Err(Error::AdapterMisuse(format!(
                "class info of '{}' declares method '{method}' more than once",
                class.name()
            )));
        }

        let mut batch = self.expectations.create_expectations(batch.into())?;

        let missing = complete_missing(class, batch.methods());
        if !missing.is_empty() {
            debug!(class = class.name(), ?missing, "expect missing methods to be never called");
        }
        for method in missing {
            batch.push(Expectation::never(method));
        }

        let object = self
            .mocks
            .new_partial_mock(class, batch.methods(), constructor_args)?;

        if let Err(err) = batch.apply(&object) {
            object.release();

            return Err(err);
        }

        Ok(object)
    }

    /// Add one expectation to an existing mock. Without call-count policy the
    /// method may be called any number of times.
    ///
    /// # Errors
    ///
    /// Returns the errors raised while the expectation is built or applied.
    pub fn add_expectation<O, I>(&self, mock: &O, item: I) -> Result<()>
    where
        O: AsRef<MockObject> + ?Sized,
        I: Into<RawItem>,
    {
        self.expectations
            .create_expectation(item)?
            .apply(mock.as_ref())
    }

    /// Add several expectations to an existing mock.
    ///
    /// Every expectation is built and checked against the mock before the
    /// first one is applied, so a malformed item or a method the mock does
    /// not stub leaves the mock untouched.
    ///
    /// # Errors
    ///
    /// Same as [`add_expectation`](Self::add_expectation).
    pub fn add_expectations<O, T, I>(&self, mock: &O, items: T) -> Result<()>
    where
        O: AsRef<MockObject> + ?Sized,
        T: IntoIterator<Item = I>,
        I: Into<RawItem>,
    {
        let mock = mock.as_ref();
        let expectations = items
            .into_iter()
            .map(|item| self.expectations.create_expectation(item))
            .collect::<Result<Vec<_>>>()?;

        if mock.is_released() {
            return Err(Error::AdapterMisuse(format!(
                "mock object of '{}' was released and does not accept expectations",
                mock.class_name()
            )));
        }

        if let Some(expectation) = expectations.iter().find(|e| !mock.is_stubbed(e.method())) {
            return Err(Error::NotStubbed {
                class: mock.class_name(),
                method: expectation.method().into(),
            });
        }

        expectations
            .into_iter()
            .try_for_each(|expectation| expectation.apply(mock))
    }
}
