mod args;
mod class_info;
mod mock_method;
mod mocked;
mod parsed;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::parse2;

use args::Args;
use mocked::Mocked;
use parsed::Parsed;

pub(crate) fn exec(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match Args::parse(attr) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };

    let parsed = match parse2::<Parsed>(item) {
        Ok(parsed) => parsed,
        Err(err) => return err.to_compile_error(),
    };

    #[cfg(feature = "debug-to-file")]
    let ident = parsed.trait_.ident.to_string();

    #[allow(clippy::let_and_return)]
    let tokens = Mocked::new(args, parsed).into_token_stream();

    #[cfg(feature = "debug")]
    println!("\nmockable:\n{tokens:#}\n");

    #[cfg(feature = "debug-to-file")]
    let _ = debug_to_file(&tokens, &ident);

    tokens
}

#[cfg(feature = "debug-to-file")]
fn debug_to_file(tokens: &TokenStream, ident: &str) -> std::io::Result<()> {
    use std::fs::{create_dir_all, write};
    use std::path::PathBuf;

    use convert_case::{Case, Casing};
    use proc_macro::Span;

    let path = Span::call_site()
        .source_file()
        .path()
        .join(ident.to_case(Case::Snake));
    let path = PathBuf::from("./target/generated").join(path);

    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    write(path, tokens.to_string())?;

    Ok(())
}
