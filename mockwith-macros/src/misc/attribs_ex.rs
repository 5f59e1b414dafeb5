use syn::{
    parse::ParseStream, punctuated::Punctuated, token::Comma, Attribute, Error, ItemTrait, Meta,
    Path, Result, TraitItem, TraitItemFn,
};

/// Access to the `#[mockwith(...)]` attributes of an item.
pub trait AttribsEx: Sized {
    fn has_mockwith_attr(&self, ident: &str) -> bool {
        let _ident = ident;

        false
    }

    /// Fail on `#[mockwith(...)]` attributes that are malformed or use an
    /// option that is not in `known`.
    fn check_mockwith_attrs(&self, known: &[&str]) -> Result<()> {
        let _known = known;

        Ok(())
    }

    fn remove_mockwith_attrs(self) -> Self;
}

impl AttribsEx for Vec<Attribute> {
    fn has_mockwith_attr(&self, ident: &str) -> bool {
        self.iter().any(|attr| match &attr.meta {
            Meta::List(ml) if attr.path().is_ident("mockwith") => {
                let mut ret = false;

                let _ = ml.parse_args_with(|p: ParseStream<'_>| {
                    let list = Punctuated::<Path, Comma>::parse_terminated(p)?;
                    ret = list.iter().any(|p| p.is_ident(ident));

                    Ok(())
                });

                ret
            }
            _ => false,
        })
    }

    fn check_mockwith_attrs(&self, known: &[&str]) -> Result<()> {
        for attr in self.iter().filter(|a| a.path().is_ident("mockwith")) {
            let list = attr.parse_args_with(Punctuated::<Path, Comma>::parse_terminated)?;

            if let Some(path) = list.iter().find(|p| !known.iter().any(|k| p.is_ident(k))) {
                return Err(Error::new_spanned(
                    path,
                    format!("unknown mockwith option, expected one of: {}", known.join(", ")),
                ));
            }
        }

        Ok(())
    }

    fn remove_mockwith_attrs(mut self) -> Self {
        self.retain(|a| !a.path().is_ident("mockwith"));

        self
    }
}

impl AttribsEx for TraitItemFn {
    fn has_mockwith_attr(&self, ident: &str) -> bool {
        self.attrs.has_mockwith_attr(ident)
    }

    fn check_mockwith_attrs(&self, known: &[&str]) -> Result<()> {
        self.attrs.check_mockwith_attrs(known)
    }

    fn remove_mockwith_attrs(mut self) -> Self {
        self.attrs = self.attrs.remove_mockwith_attrs();

        self
    }
}

impl AttribsEx for TraitItem {
    fn remove_mockwith_attrs(self) -> Self {
        match self {
            Self::Fn(x) => Self::Fn(x.remove_mockwith_attrs()),
            x => x,
        }
    }
}

impl AttribsEx for ItemTrait {
    fn remove_mockwith_attrs(mut self) -> Self {
        self.items = self
            .items
            .into_iter()
            .map(AttribsEx::remove_mockwith_attrs)
            .collect();

        self
    }
}
