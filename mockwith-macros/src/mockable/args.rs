use proc_macro2::{Ident, TokenStream};
use syn::{meta, parse::Parser, Path, Result as ParseResult};

/// Options passed to `#[mockable(...)]`.
#[derive(Default)]
pub(crate) struct Args {
    pub name: Option<Ident>,
    pub constructor: Option<Path>,
}

impl Args {
    pub(crate) fn parse(attr: TokenStream) -> ParseResult<Self> {
        let mut args = Self::default();

        let parser = meta::parser(|meta| {
            if meta.path.is_ident("name") {
                args.name = Some(meta.value()?.parse()?);

                Ok(())
            } else if meta.path.is_ident("constructor") {
                args.constructor = Some(meta.value()?.parse()?);

                Ok(())
            } else {
                Err(meta.error("unsupported mockable option, expected `name` or `constructor`"))
            }
        });

        parser.parse2(attr)?;

        Ok(args)
    }
}
