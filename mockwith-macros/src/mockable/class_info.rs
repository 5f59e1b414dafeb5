use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, ToTokens};
use syn::Path;

use super::parsed::Parsed;

/// Body of the generated `Mockable::class_info` function.
pub(crate) struct ClassInfo<'a> {
    krate: &'a Ident,
    parsed: &'a Parsed,
    constructor: Option<&'a Path>,
}

impl<'a> ClassInfo<'a> {
    pub(crate) fn new(krate: &'a Ident, parsed: &'a Parsed, constructor: Option<&'a Path>) -> Self {
        Self {
            krate,
            parsed,
            constructor,
        }
    }

    fn kind(&self) -> Ident {
        let abstract_count = self
            .parsed
            .methods
            .iter()
            .filter(|m| m.default.is_none())
            .count();

        if abstract_count == self.parsed.methods.len() {
            format_ident!("Interface")
        } else if abstract_count == 0 {
            format_ident!("Concrete")
        } else {
            format_ident!("Abstract")
        }
    }
}

impl ToTokens for ClassInfo<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let krate = self.krate;
        let name = self.parsed.trait_.ident.to_string();
        let kind = self.kind();

        let methods = self.parsed.methods.iter().map(|m| {
            let name = m.sig.ident.to_string();
            let is_abstract = m.default.is_none();
            let visibility = if m.is_protected {
                format_ident!("Protected")
            } else {
                format_ident!("Public")
            };

            quote! {
                .method(#krate::MethodInfo::new(#name, #krate::Visibility::#visibility, #is_abstract))
            }
        });

        let constructor = self
            .constructor
            .map(|path| quote!(.constructor(#path)));

        tokens.extend(quote! {
            static INFO: #krate::__private::Lazy<#krate::ClassInfo> = #krate::__private::Lazy::new(|| {
                #krate::ClassInfo::new(#name, #krate::ClassKind::#kind)
                    #( #methods )*
                    #constructor
            });

            &INFO
        });
    }
}
