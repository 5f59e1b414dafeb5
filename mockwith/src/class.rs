//! The [`class`](self) module contains the reflection data of a mockable type
//! and the [`Mockable`] trait that connects a mock type with its
//! [`MockObject`].
//!
//! For traits annotated with [`mockable`](crate::mockable) everything in here
//! is generated. Hand written [`ClassInfo`]s are useful to mock types
//! dynamically, without a generated mock type.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use serde_json::Value;

use crate::action::Thrown;
use crate::mock::MockObject;

/// Hook that is executed when a mock is built with constructor arguments.
pub type Constructor = fn(&[Value]) -> Result<(), Thrown>;

/// Kind of a mockable type, it decides which methods must be stubbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// No method has an implementation.
    Interface,

    /// Some methods have an implementation.
    Abstract,

    /// Every method has an implementation.
    Concrete,
}

impl Display for ClassKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Interface => write!(f, "interface"),
            Self::Abstract => write!(f, "abstract class"),
            Self::Concrete => write!(f, "class"),
        }
    }
}

/// Visibility of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Part of the public interface.
    Public,

    /// Only meant to be called from the type itself.
    Protected,
}

/// Reflection data of one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    name: String,
    visibility: Visibility,
    is_abstract: bool,
}

impl MethodInfo {
    /// Create a new [`MethodInfo`].
    pub fn new<N: Into<String>>(name: N, visibility: Visibility, is_abstract: bool) -> Self {
        Self {
            name: name.into(),
            visibility,
            is_abstract,
        }
    }

    /// Name of the method.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Visibility of the method.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `true` if the method has no implementation.
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }
}

/// Selects methods of a [`ClassInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodFilter {
    /// Every method.
    All,

    /// Public methods.
    Public,

    /// Methods without implementation.
    Abstract,
}

impl MethodFilter {
    fn accepts(self, method: &MethodInfo) -> bool {
        match self {
            Self::All => true,
            Self::Public => method.visibility == Visibility::Public,
            Self::Abstract => method.is_abstract,
        }
    }
}

/// Reflection data of a mockable type.
#[derive(Clone)]
pub struct ClassInfo {
    name: String,
    kind: ClassKind,
    methods: Vec<MethodInfo>,
    constructor: Option<Constructor>,
}

impl ClassInfo {
    /// Create a new [`ClassInfo`] without methods.
    pub fn new<N: Into<String>>(name: N, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            methods: Vec::new(),
            constructor: None,
        }
    }

    /// Add a method.
    #[must_use]
    pub fn method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);

        self
    }

    /// Set the constructor hook.
    #[must_use]
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);

        self
    }

    /// Name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of the type.
    #[must_use]
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Constructor hook, if any.
    #[must_use]
    pub fn constructor_hook(&self) -> Option<Constructor> {
        self.constructor
    }

    /// Get the method with the passed `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Returns `true` if the type declares a method with the passed `name`.
    #[must_use]
    pub fn has_method(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate the names of the methods selected by `filter`, in declaration
    /// order.
    pub fn methods(&self, filter: MethodFilter) -> impl Iterator<Item = &str> + '_ {
        self.methods
            .iter()
            .filter(move |m| filter.accepts(m))
            .map(MethodInfo::name)
    }

    /// Name of the first method that is declared more than once.
    pub(crate) fn duplicate_method(&self) -> Option<&str> {
        self.methods
            .iter()
            .enumerate()
            .find(|(i, m)| self.methods[..*i].iter().any(|x| x.name == m.name))
            .map(|(_, m)| m.name())
    }
}

impl Debug for ClassInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ClassInfo")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("methods", &self.methods)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}

/// Implemented by mock types built around a [`MockObject`].
pub trait Mockable: Sized {
    /// Reflection data of the mocked type.
    fn class_info() -> &'static ClassInfo;

    /// Wrap the passed `object` into the mock type.
    fn from_object(object: MockObject) -> Self;

    /// Get the wrapped object.
    fn object(&self) -> &MockObject;
}
