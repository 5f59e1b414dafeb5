#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(feature = "debug-to-file", feature(proc_macro_span))]

use proc_macro::TokenStream;

mod misc;
mod mockable;

/// Turn a trait into a mockable type.
///
/// The trait is emitted unchanged. Next to it the macro generates
/// - a mock type `Mock<Trait>` that implements the trait and wraps a
///   `MockObject`
/// - the reflection data of the trait (`Mockable::class_info`)
///
/// A trait without any default method is an interface, a trait with some
/// default methods is an abstract class and a trait with only default methods
/// is a concrete class. Stubbed methods are answered by the mock object,
/// methods that are not stubbed execute their default implementation.
///
/// Arguments and return values are exchanged with the mock object as JSON
/// values, so argument types must implement `serde::Serialize` and return
/// types `serde::de::DeserializeOwned`.
///
/// # Options
///
/// - `name = Ident`: name of the generated mock type
/// - `constructor = path`: function `fn(&[Value]) -> Result<(), Thrown>`
///   that is executed when a mock is created with constructor arguments
///
/// Methods marked with `#[mockwith(protected)]` are not part of the public
/// interface of the type.
#[proc_macro_attribute]
pub fn mockable(attr: TokenStream, item: TokenStream) -> TokenStream {
    mockable::exec(attr.into(), item.into()).into()
}
