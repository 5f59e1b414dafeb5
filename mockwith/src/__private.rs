//! Support code for the code generated by [`mockable`](crate::mockable).

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use once_cell::sync::Lazy;

/// Convert argument `index` of `method` into a value.
///
/// # Panics
///
/// Panics if the argument cannot be represented as value.
pub fn serialize_arg<T: Serialize + ?Sized>(method: &str, index: usize, value: &T) -> Value {
    match serde_json::to_value(value) {
        Ok(value) => value,
        Err(err) => panic!("Unable to convert argument #{index} of {method} into a value: {err}"),
    }
}

/// Convert the value returned for `method` into its return type.
///
/// # Panics
///
/// Panics if the value does not fit the return type.
pub fn deserialize_return<T: DeserializeOwned>(method: &str, type_name: &str, value: &Value) -> T {
    match T::deserialize(value) {
        Ok(ret) => ret,
        Err(err) => panic!(
            "Unable to convert the value {value} returned for {method} into `{type_name}`: {err}"
        ),
    }
}
