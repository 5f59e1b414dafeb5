use proc_macro2::{Ident, TokenStream, TokenTree};
use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream, Result as ParseResult},
    Block, Error, FnArg, ItemTrait, Pat, ReturnType, Signature, TraitItem,
};

use crate::misc::{format_arg_ident, AttribsEx, MethodEx};

/// Trait annotated with `#[mockable]`
pub(crate) struct Parsed {
    /// The trait without `#[mockwith(...)]` attributes.
    pub trait_: ItemTrait,
    pub methods: Vec<ParsedMethod>,
}

pub(crate) struct ParsedMethod {
    pub sig: Signature,
    pub args: Vec<ParsedArg>,
    pub default: Option<Block>,
    pub is_protected: bool,
}

/// Typed argument of a method. The mock binds it to `ident` and restores the
/// original pattern before the default implementation runs.
pub(crate) struct ParsedArg {
    pub ident: Ident,
    pub pat: Pat,
}

impl Parse for Parsed {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let trait_ = input.parse::<ItemTrait>()?;

        if !trait_.generics.params.is_empty() {
            return Err(Error::new_spanned(
                &trait_.generics,
                "generic traits can not be mocked",
            ));
        }

        let mut methods = Vec::new();
        for item in &trait_.items {
            let TraitItem::Fn(method) = item else {
                return Err(Error::new_spanned(
                    item,
                    "only methods are supported, associated types and constants can not be mocked",
                ));
            };

            method.check_mockwith_attrs(&["protected"])?;

            if method.is_associated_fn() {
                return Err(Error::new_spanned(
                    &method.sig,
                    "associated functions without receiver can not be mocked",
                ));
            }

            if method.has_type_generics() {
                return Err(Error::new_spanned(
                    &method.sig.generics,
                    "generic methods can not be mocked",
                ));
            }

            if let Some(asyncness) = &method.sig.asyncness {
                return Err(Error::new_spanned(asyncness, "async methods can not be mocked"));
            }

            if let Some(variadic) = &method.sig.variadic {
                return Err(Error::new_spanned(variadic, "variadic methods can not be mocked"));
            }

            if let ReturnType::Type(_, ty) = &method.sig.output {
                if contains(ty.to_token_stream(), &|t| is_self(t) || is_impl(t) || is_ref(t)) {
                    return Err(Error::new_spanned(
                        ty,
                        "return types with references, `impl Trait` or `Self` can not be mocked",
                    ));
                }
            }

            let mut args = Vec::new();
            for input in &method.sig.inputs {
                let FnArg::Typed(pat_type) = input else {
                    continue;
                };

                if contains(pat_type.ty.to_token_stream(), &|t| is_self(t) || is_impl(t)) {
                    return Err(Error::new_spanned(
                        &pat_type.ty,
                        "argument types with `impl Trait` or `Self` can not be mocked",
                    ));
                }

                args.push(ParsedArg {
                    ident: format_arg_ident(args.len()),
                    pat: (*pat_type.pat).clone(),
                });
            }

            methods.push(ParsedMethod {
                sig: method.sig.clone(),
                args,
                default: method.default.clone(),
                is_protected: method.has_mockwith_attr("protected"),
            });
        }

        Ok(Self {
            trait_: trait_.remove_mockwith_attrs(),
            methods,
        })
    }
}

fn contains(tokens: TokenStream, f: &dyn Fn(&TokenTree) -> bool) -> bool {
    tokens.into_iter().any(|t| match &t {
        TokenTree::Group(g) => contains(g.stream(), f),
        t => f(t),
    })
}

fn is_self(t: &TokenTree) -> bool {
    matches!(t, TokenTree::Ident(i) if i == "Self")
}

fn is_impl(t: &TokenTree) -> bool {
    matches!(t, TokenTree::Ident(i) if i == "impl")
}

fn is_ref(t: &TokenTree) -> bool {
    matches!(t, TokenTree::Punct(p) if p.as_char() == '&')
}
