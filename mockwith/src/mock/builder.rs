use serde_json::Value;
use tracing::debug;

use crate::class::{ClassInfo, MethodFilter};
use crate::error::{Error, Result};

use super::shared::Shared;
use super::MockObject;

/// Options of a mock object.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockOptions {
    /// Clones of the mock copy the original object instead of sharing the
    /// mock state. Mocks built by this crate always share their state, the
    /// option is kept to describe the requested configuration.
    pub original_clone: bool,

    /// Arguments are copied before they are recorded. Calls always hand owned
    /// values to the mock, the option is kept to describe the requested
    /// configuration.
    pub clone_arguments: bool,

    /// Methods that are not declared by the mocked class may be stubbed.
    pub allow_unknown_methods: bool,

    /// The constructor hook of the class is executed.
    pub original_constructor: bool,

    /// The expectations are verified when the last handle is dropped.
    pub check_on_drop: bool,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            original_clone: true,
            clone_arguments: true,
            allow_unknown_methods: true,
            original_constructor: true,
            check_on_drop: true,
        }
    }
}

/// Builder for a [`MockObject`].
#[must_use]
#[derive(Debug, Clone)]
pub struct MockBuilder {
    class: ClassInfo,
    methods: Option<Vec<String>>,
    options: MockOptions,
    constructor_args: Option<Vec<Value>>,
}

impl MockBuilder {
    /// Create a new builder for a mock of `class`.
    pub fn new(class: &ClassInfo) -> Self {
        Self {
            class: class.clone(),
            methods: None,
            options: MockOptions::default(),
            constructor_args: None,
        }
    }

    /// Set the methods to stub. An empty list stubs every method of the class.
    pub fn set_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for method in methods {
            let method = method.into();
            if !list.contains(&method) {
                list.push(method);
            }
        }

        self.methods = (!list.is_empty()).then_some(list);

        self
    }

    /// See [`MockOptions::original_clone`].
    pub fn disable_original_clone(mut self) -> Self {
        self.options.original_clone = false;

        self
    }

    /// See [`MockOptions::clone_arguments`].
    pub fn disable_argument_cloning(mut self) -> Self {
        self.options.clone_arguments = false;

        self
    }

    /// Fail to build the mock if a stubbed method is not declared by the class.
    pub fn disallow_mocking_unknown_types(mut self) -> Self {
        self.options.allow_unknown_methods = false;

        self
    }

    /// Do not execute the constructor hook of the class.
    pub fn disable_original_constructor(mut self) -> Self {
        self.options.original_constructor = false;

        self
    }

    /// Arguments passed to the constructor hook of the class.
    pub fn set_constructor_args(mut self, args: Vec<Value>) -> Self {
        self.constructor_args = Some(args);

        self
    }

    /// Enable or disable the verification on drop.
    pub fn check_on_drop(mut self, value: bool) -> Self {
        self.options.check_on_drop = value;

        self
    }

    /// Build the mock object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMethod`] if unknown methods are not allowed and
    /// a stubbed method is not declared by the class, and
    /// [`Error::Construction`] if the constructor hook fails.
    pub fn build(self) -> Result<MockObject> {
        let Self {
            class,
            methods,
            options,
            constructor_args,
        } = self;

        let stubbed = match methods {
            Some(methods) => methods,
            None => class.methods(MethodFilter::All).map(Into::into).collect(),
        };

        if !options.allow_unknown_methods {
            if let Some(method) = stubbed.iter().find(|m| !class.has_method(m)) {
                return Err(Error::UnknownMethod {
                    class: class.name().into(),
                    method: method.clone(),
                });
            }
        }

        let constructor_args = if options.original_constructor {
            if let Some(hook) = class.constructor_hook() {
                hook(constructor_args.as_deref().unwrap_or_default()).map_err(|source| {
                    Error::Construction {
                        class: class.name().into(),
                        source,
                    }
                })?;
            }

            Some(constructor_args.unwrap_or_default())
        } else {
            None
        };

        debug!(class = class.name(), ?stubbed, "build mock object");

        Ok(MockObject::from_shared(Shared {
            class,
            options,
            stubbed,
            stubs: Vec::new(),
            calls: Vec::new(),
            failures: Vec::new(),
            constructor_args,
            check_on_drop: options.check_on_drop,
            released: false,
        }))
    }
}
