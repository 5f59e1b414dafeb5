//! The [`normalize`](self) module turns one literal entry into the five
//! canonical fields of an expectation.

use std::collections::{BTreeMap, VecDeque};

use serde_json::Value;

use crate::action::{Returns, Thrown};
use crate::error::{Error, Result};
use crate::invocation::Invoked;
use crate::literal::{Field, NamedSpec, Raw, RawEntry};

/// Canonical fields of one expectation. The call-count policy is still in its
/// literal form.
#[derive(Debug, Clone)]
pub struct Normalized {
    /// Name of the expected method.
    pub method: String,

    /// Expected argument values, empty if arguments are not checked.
    pub params: Vec<Value>,

    /// Value to return.
    pub result: Option<Returns>,

    /// Error to throw.
    pub throws: Option<Thrown>,

    /// Call-count policy, `None` if the default applies.
    pub invoked: Option<Invoked>,
}

/// Normalize an entry of an ordered table.
///
/// # Errors
///
/// Returns [`Error::MalformedEntry`] if the method name is missing or a field
/// has an unsupported kind of value, and [`Error::ConflictingExpectation`] if
/// both `result` and `throws` are set.
pub fn normalize_entry(entry: RawEntry) -> Result<Normalized> {
    let RawEntry { positional, named } = entry;
    let mut named = named;
    let mut positional = VecDeque::from(positional);

    let method = take(&mut named, Field::Method).or_else(|| positional.pop_front());
    let method = into_method(method)?;

    let mut invoked = take(&mut named, Field::Invoked);
    if invoked.is_none() && positional.len() == 1 && positional[0].is_str("never") {
        invoked = positional.pop_front();
    }

    let params = take(&mut named, Field::Params).or_else(|| positional.pop_front());
    let result = take(&mut named, Field::Result).or_else(|| positional.pop_front());
    let throws = take(&mut named, Field::Throws).or_else(|| positional.pop_front());
    let invoked = invoked.or_else(|| positional.pop_front());

    if !positional.is_empty() {
        let rest = positional
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        return Err(Error::malformed(format!(
            "unexpected values for method '{method}': {rest}"
        )));
    }

    let params = into_params(&method, params)?;
    let result = into_result(&method, result)?;
    let throws = into_throws(&method, throws)?;
    let invoked = into_invoked(&method, invoked)?;

    if result.is_some() && throws.is_some() {
        return Err(Error::ConflictingExpectation { method });
    }

    Ok(Normalized {
        method,
        params,
        result,
        throws,
        invoked,
    })
}

/// Normalize the specification of `method` taken from a name-keyed table.
///
/// # Errors
///
/// Same as [`normalize_entry`].
pub fn normalize_named(method: &str, spec: NamedSpec) -> Result<Normalized> {
    if method.is_empty() {
        return Err(Error::malformed("method name must not be empty"));
    }

    match spec {
        NamedSpec::Shorthand(invoked) => Ok(Normalized {
            method: method.into(),
            params: Vec::new(),
            result: None,
            throws: None,
            invoked: into_invoked(method, Some(invoked))?,
        }),
        NamedSpec::Structured(mut entry) => {
            entry.set(Field::Method, method);

            normalize_entry(entry)
        }
    }
}

/// Named fields set to `null` count as absent.
fn take(named: &mut BTreeMap<Field, Raw>, field: Field) -> Option<Raw> {
    named.remove(&field).filter(|raw| !raw.is_null())
}

fn into_method(raw: Option<Raw>) -> Result<String> {
    match raw {
        Some(Raw::Value(Value::String(s))) if !s.is_empty() => Ok(s),
        Some(Raw::Value(Value::String(_))) => Err(Error::malformed("method name must not be empty")),
        Some(raw) => Err(Error::malformed(format!(
            "method name must be a string, got {raw}"
        ))),
        None => Err(Error::malformed("missing method name")),
    }
}

fn into_params(method: &str, raw: Option<Raw>) -> Result<Vec<Value>> {
    match raw {
        None | Some(Raw::Value(Value::Null)) => Ok(Vec::new()),
        Some(Raw::Value(Value::Array(values))) => Ok(values),
        Some(Raw::Value(value)) => Ok(vec![value]),
        Some(raw) => Err(Error::malformed(format!(
            "params of method '{method}' must be plain values, got {raw}"
        ))),
    }
}

fn into_result(method: &str, raw: Option<Raw>) -> Result<Option<Returns>> {
    match raw {
        None | Some(Raw::Value(Value::Null)) => Ok(None),
        Some(Raw::Value(value)) => Ok(Some(Returns::Value(value))),
        Some(Raw::Callback(callback)) => Ok(Some(Returns::Callback(callback))),
        Some(raw) => Err(Error::malformed(format!(
            "result of method '{method}' must be a value or a callback, got {raw}"
        ))),
    }
}

fn into_throws(method: &str, raw: Option<Raw>) -> Result<Option<Thrown>> {
    match raw {
        None | Some(Raw::Value(Value::Null)) => Ok(None),
        Some(Raw::Value(Value::String(message))) => Ok(Some(Thrown::msg(message))),
        Some(Raw::Thrown(thrown)) => Ok(Some(thrown)),
        Some(raw) => Err(Error::malformed(format!(
            "throws of method '{method}' must be an error or a message, got {raw}"
        ))),
    }
}

fn into_invoked(method: &str, raw: Option<Raw>) -> Result<Option<Invoked>> {
    match raw {
        None | Some(Raw::Value(Value::Null)) => Ok(None),
        Some(Raw::Value(value)) => Ok(Some(Invoked::Literal(value))),
        Some(Raw::Invocation(invocation)) => Ok(Some(Invoked::Policy(invocation))),
        Some(raw) => Err(Error::malformed(format!(
            "invoked of method '{method}' must be a count, a keyword or a policy, got {raw}"
        ))),
    }
}
