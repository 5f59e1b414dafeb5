use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

use crate::misc::{format_mock_ident, ident_mockwith};

use super::{args::Args, class_info::ClassInfo, mock_method::MockMethod, parsed::Parsed};

/// Output of the `#[mockable]` attribute: the trait, the mock type and its
/// implementations.
pub(crate) struct Mocked {
    args: Args,
    parsed: Parsed,
}

impl Mocked {
    pub(crate) fn new(args: Args, parsed: Parsed) -> Self {
        Self { args, parsed }
    }
}

impl ToTokens for Mocked {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { args, parsed } = self;

        let krate = ident_mockwith();
        let trait_ = &parsed.trait_;
        let trait_ident = &trait_.ident;
        let vis = &trait_.vis;
        let unsafety = &trait_.unsafety;
        let mock_ident = args
            .name
            .clone()
            .unwrap_or_else(|| format_mock_ident(trait_ident));

        let doc = format!(" Mock of [`{trait_ident}`] generated by `#[mockable]`.");
        let class_info = ClassInfo::new(&krate, parsed, args.constructor.as_ref());
        let methods = parsed
            .methods
            .iter()
            .map(|m| MockMethod::new(&krate, trait_ident, m));

        tokens.extend(quote! {
            #trait_

            #[doc = #doc]
            #[derive(Clone, Debug)]
            #vis struct #mock_ident {
                object: #krate::MockObject,
            }

            impl #krate::Mockable for #mock_ident {
                fn class_info() -> &'static #krate::ClassInfo {
                    #class_info
                }

                fn from_object(object: #krate::MockObject) -> Self {
                    Self { object }
                }

                fn object(&self) -> &#krate::MockObject {
                    &self.object
                }
            }

            impl ::core::convert::AsRef<#krate::MockObject> for #mock_ident {
                fn as_ref(&self) -> &#krate::MockObject {
                    &self.object
                }
            }

            #unsafety impl #trait_ident for #mock_ident {
                #( #methods )*
            }
        });
    }
}
