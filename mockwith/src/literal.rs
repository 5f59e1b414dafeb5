//! The [`literal`](self) module contains the loosely typed input an
//! expectation table is written in, before it is normalized.
//!
//! A table is either an ordered list of entries ([`RawBatch::Ordered`]) or a
//! mapping from method names to specifications ([`RawBatch::Named`]). Each
//! entry is a list of positional values plus optional named fields. The
//! [`entry!`](crate::entry), [`ordered!`](crate::ordered) and
//! [`named!`](crate::named) macros are the usual way to write them.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde_json::Value;

use crate::action::{Callback, Thrown};
use crate::expectation::Expectation;
use crate::invocation::Invocation;

/// A single value inside an expectation literal.
#[derive(Debug, Clone)]
pub enum Raw {
    /// Plain data: method name, parameters, result or invocation notation.
    Value(Value),

    /// A callback computing the result of a call.
    Callback(Callback),

    /// An error to throw.
    Thrown(Thrown),

    /// A pre-built call-count policy.
    Invocation(Invocation),
}

impl Raw {
    /// Returns `true` if this is the `null` value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    pub(crate) fn is_str(&self, s: &str) -> bool {
        matches!(self, Self::Value(Value::String(x)) if x == s)
    }
}

impl Display for Raw {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Callback(_) => write!(f, "<callback>"),
            Self::Thrown(thrown) => write!(f, "<error '{thrown}'>"),
            Self::Invocation(invocation) => write!(f, "<{invocation}>"),
        }
    }
}

macro_rules! impl_from_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Raw {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_value!(&str, String, bool, i32, i64, u32, u64, usize, f64, Vec<Value>);

impl From<Value> for Raw {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Callback> for Raw {
    fn from(value: Callback) -> Self {
        Self::Callback(value)
    }
}

impl From<Thrown> for Raw {
    fn from(value: Thrown) -> Self {
        Self::Thrown(value)
    }
}

impl From<Invocation> for Raw {
    fn from(value: Invocation) -> Self {
        Self::Invocation(value)
    }
}

/// Named fields of an expectation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Name of the expected method.
    Method,

    /// Expected argument values.
    Params,

    /// Value to return.
    Result,

    /// Error to throw.
    Throws,

    /// Call-count policy.
    Invoked,
}

impl Field {
    /// Name of the field as used in literals.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Params => "params",
            Self::Result => "result",
            Self::Throws => "throws",
            Self::Invoked => "invoked",
        }
    }

    /// Get the field with the passed `name`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "method" => Some(Self::Method),
            "params" => Some(Self::Params),
            "result" => Some(Self::Result),
            "throws" => Some(Self::Throws),
            "invoked" => Some(Self::Invoked),
            _ => None,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// One expectation as written: positional values and named fields.
///
/// Named fields take precedence, positional values fill the remaining fields
/// in the order `method`, `params`, `result`, `throws`, `invoked`.
#[derive(Default, Debug, Clone)]
pub struct RawEntry {
    pub(crate) positional: Vec<Raw>,
    pub(crate) named: BTreeMap<Field, Raw>,
}

impl RawEntry {
    /// Create an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional value.
    pub fn push<R: Into<Raw>>(&mut self, raw: R) -> &mut Self {
        self.positional.push(raw.into());

        self
    }

    /// Set a named field, replacing any previous value of it.
    pub fn set<R: Into<Raw>>(&mut self, field: Field, raw: R) -> &mut Self {
        self.named.insert(field, raw.into());

        self
    }

    /// Like [`push`](Self::push), but consumes and returns the entry.
    #[must_use]
    pub fn arg<R: Into<Raw>>(mut self, raw: R) -> Self {
        self.push(raw);

        self
    }

    /// Like [`set`](Self::set), but consumes and returns the entry.
    #[must_use]
    pub fn field<R: Into<Raw>>(mut self, field: Field, raw: R) -> Self {
        self.set(field, raw);

        self
    }

    /// Positional values.
    #[must_use]
    pub fn positional(&self) -> &[Raw] {
        &self.positional
    }

    /// Value of the named `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&Raw> {
        self.named.get(&field)
    }
}

impl<R: Into<Raw>> FromIterator<R> for RawEntry {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
            named: BTreeMap::new(),
        }
    }
}

/// Specification of a method inside a name-keyed table.
#[derive(Debug, Clone)]
pub enum NamedSpec {
    /// Only the call-count policy is given.
    Shorthand(Raw),

    /// A full entry, its method is taken from the key.
    Structured(RawEntry),
}

impl From<RawEntry> for NamedSpec {
    fn from(value: RawEntry) -> Self {
        Self::Structured(value)
    }
}

/// One item of an ordered table.
#[derive(Debug, Clone)]
pub enum RawItem {
    /// An entry that still needs to be normalized.
    Entry(RawEntry),

    /// An already built expectation, used as it is.
    Prepared(Expectation),
}

impl From<RawEntry> for RawItem {
    fn from(value: RawEntry) -> Self {
        Self::Entry(value)
    }
}

impl From<Expectation> for RawItem {
    fn from(value: Expectation) -> Self {
        Self::Prepared(value)
    }
}

/// Name-keyed table of expectations in insertion order.
#[derive(Default, Debug, Clone)]
pub struct NamedBatch(pub(crate) Vec<(String, NamedSpec)>);

impl NamedBatch {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the specification for `method`.
    pub fn push<K, S>(&mut self, method: K, spec: S) -> &mut Self
    where
        K: Into<String>,
        S: Into<NamedSpec>,
    {
        self.0.push((method.into(), spec.into()));

        self
    }

    /// Number of methods in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Expectation table in one of the two supported shapes.
#[derive(Debug, Clone)]
pub enum RawBatch {
    /// Ordered list, items without call-count policy are bound to their
    /// position in the call sequence.
    Ordered(Vec<RawItem>),

    /// Mapping from method names to specifications.
    Named(NamedBatch),
}

impl Default for RawBatch {
    fn default() -> Self {
        Self::Ordered(Vec::new())
    }
}

impl From<NamedBatch> for RawBatch {
    fn from(value: NamedBatch) -> Self {
        Self::Named(value)
    }
}

impl From<Vec<RawItem>> for RawBatch {
    fn from(value: Vec<RawItem>) -> Self {
        Self::Ordered(value)
    }
}

impl From<Vec<RawEntry>> for RawBatch {
    fn from(value: Vec<RawEntry>) -> Self {
        Self::Ordered(value.into_iter().map(RawItem::Entry).collect())
    }
}

impl From<Vec<Expectation>> for RawBatch {
    fn from(value: Vec<Expectation>) -> Self {
        Self::Ordered(value.into_iter().map(RawItem::Prepared).collect())
    }
}
