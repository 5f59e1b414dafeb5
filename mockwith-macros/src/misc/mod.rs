mod attribs_ex;
mod formatted_string;
mod method_ex;

use proc_macro2::Ident;
use quote::format_ident;

pub(crate) use attribs_ex::AttribsEx;
pub(crate) use formatted_string::FormattedString;
pub(crate) use method_ex::MethodEx;

pub(crate) fn format_mock_ident(ident: &Ident) -> Ident {
    format_ident!("Mock{}", ident)
}

pub(crate) fn format_arg_ident(index: usize) -> Ident {
    format_ident!("__arg{}", index)
}

#[cfg(feature = "force-name")]
pub(crate) fn ident_mockwith() -> Ident {
    format_ident!("mockwith")
}

#[cfg(not(feature = "force-name"))]
pub(crate) fn ident_mockwith() -> Ident {
    use proc_macro_crate::{crate_name, FoundCrate};

    match crate_name("mockwith") {
        Ok(FoundCrate::Itself) => format_ident!("crate"),
        Ok(FoundCrate::Name(name)) => format_ident!("{name}"),
        Err(_) => format_ident!("mockwith"),
    }
}
