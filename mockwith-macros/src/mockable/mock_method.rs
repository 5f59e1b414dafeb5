use proc_macro2::{Ident, Literal, TokenStream};
use quote::{quote, ToTokens};
use syn::{punctuated::Punctuated, FnArg, Pat, PatIdent, PatType, ReturnType};

use crate::misc::FormattedString;

use super::parsed::ParsedMethod;

/// Implementation of one trait method on the mock type.
///
/// Abstract methods always dispatch to the mock object. Methods with a
/// default implementation dispatch if they are stubbed and run the default
/// implementation otherwise.
pub(crate) struct MockMethod<'a> {
    krate: &'a Ident,
    trait_ident: &'a Ident,
    method: &'a ParsedMethod,
}

impl<'a> MockMethod<'a> {
    pub(crate) fn new(krate: &'a Ident, trait_ident: &'a Ident, method: &'a ParsedMethod) -> Self {
        Self {
            krate,
            trait_ident,
            method,
        }
    }

    fn render_dispatch(&self) -> TokenStream {
        let Self {
            krate,
            trait_ident,
            method,
        } = self;

        let name = method.sig.ident.to_string();
        let qualified = format!("{trait_ident}::{name}");
        let arg_idents = method.args.iter().map(|a| &a.ident);
        let indices = (0..method.args.len()).map(Literal::usize_unsuffixed);

        let convert = match &method.sig.output {
            ReturnType::Default => quote!(let _ = ret;),
            ReturnType::Type(_, ty) => {
                let type_name = ty.to_formatted_string();

                quote!(#krate::__private::deserialize_return::<#ty>(#qualified, #type_name, &ret))
            }
        };

        quote! {
            let args = ::std::vec![
                #( #krate::__private::serialize_arg(#qualified, #indices, &#arg_idents), )*
            ];
            let ret = self.object.call(#name, args);

            #convert
        }
    }
}

impl ToTokens for MockMethod<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let method = self.method;

        let mut sig = method.sig.clone();
        let mut args = method.args.iter();
        sig.inputs = sig
            .inputs
            .into_iter()
            .map(|input| match input {
                FnArg::Typed(pat_type) => {
                    let arg = args.next().expect("every typed input was parsed");

                    FnArg::Typed(PatType {
                        pat: Box::new(Pat::Ident(PatIdent {
                            attrs: Vec::new(),
                            by_ref: None,
                            mutability: None,
                            ident: arg.ident.clone(),
                            subpat: None,
                        })),
                        ..pat_type
                    })
                }
                receiver => receiver,
            })
            .collect::<Punctuated<_, _>>();

        let dispatch = self.render_dispatch();
        let body = match &method.default {
            None => dispatch,
            Some(block) => {
                let name = method.sig.ident.to_string();
                let pats = method.args.iter().map(|a| &a.pat);
                let idents = method.args.iter().map(|a| &a.ident);

                quote! {
                    if self.object.is_stubbed(#name) {
                        #dispatch
                    } else {
                        #( let #pats = #idents; )*

                        #block
                    }
                }
            }
        };

        tokens.extend(quote! {
            #[allow(clippy::let_unit_value, clippy::used_underscore_binding)]
            #sig {
                #body
            }
        });
    }
}
