//! Declare the expectations of a mock as a compact table and get a ready to
//! use partial mock.
//!
//! A table is either an ordered list (entries without call-count policy must
//! be called in list order) or a mapping from method names to their
//! specification. Each entry names a method and optionally its expected
//! arguments, its result or the error it throws, and how often it may be
//! called.
//!
//! ```
//! use mockwith::{mockable, ordered, MockWithExpectations};
//!
//! #[mockable]
//! pub trait Repository {
//!     fn load(&self, id: u32) -> String;
//!     fn store(&self, id: u32, value: String);
//!     fn delete(&self, id: u32);
//! }
//!
//! let mocks = MockWithExpectations::default();
//! let repo: MockRepository = mocks
//!     .create_mock_with_expectations(
//!         ordered![
//!             ["load", [1], "foo"],
//!             ["store", [1, "bar"]],
//!         ],
//!         None,
//!     )
//!     .unwrap();
//!
//! assert_eq!(repo.load(1), "foo");
//! repo.store(1, "bar".into());
//!
//! // `delete` was not mentioned, so it must never be called
//! ```

pub mod action;
pub mod class;
pub mod completer;
pub mod error;
pub mod expectation;
pub mod factory;
pub mod invocation;
pub mod json;
pub mod literal;
pub mod matcher;
pub mod mock;
pub mod normalize;
pub mod orchestrator;
pub mod times;

mod macros;

#[doc(hidden)]
pub mod __private;

pub use mockwith_macros::mockable;
pub use serde_json::{json, Value};

pub use action::{Callback, Returns, Thrown};
pub use class::{ClassInfo, ClassKind, MethodFilter, MethodInfo, Mockable, Visibility};
pub use completer::complete_missing;
pub use error::Error;
pub use expectation::Expectation;
pub use factory::{ExpectationBatch, ExpectationsFactory, MockFactory};
pub use invocation::{Invocation, InvocationParser, Invoked};
pub use literal::{Field, NamedBatch, NamedSpec, Raw, RawBatch, RawEntry, RawItem};
pub use matcher::{Matcher, Params};
pub use mock::{Call, Failure, Fault, MockBuilder, MockObject, MockOptions};
pub use orchestrator::MockWithExpectations;
pub use times::{Times, TimesRange};
