use lazy_static::lazy_static;
use quote::ToTokens;
use regex::{Captures, Regex};

/// Render tokens the way a type is written in source code, e.g.
/// `Vec < Option < & str > >` as `Vec<Option<&str>>`.
pub trait FormattedString {
    fn to_formatted_string(&self) -> String;
}

impl<X> FormattedString for X
where
    X: ToTokens,
{
    fn to_formatted_string(&self) -> String {
        let code = self.to_token_stream().to_string();
        let code = ANGLE_BRACKETS.replace_all(&code, |c: &Captures<'_>| c[1].to_string());
        let code = PATH_SEPARATOR.replace_all(&code, "::");
        let code = REFERENCE.replace_all(&code, "&");
        let code = COMMA.replace_all(&code, ", ");

        code.into_owned()
    }
}

lazy_static! {
    static ref ANGLE_BRACKETS: Regex = Regex::new(r"\s*(<|>)\s*").unwrap();
    static ref PATH_SEPARATOR: Regex = Regex::new(r"\s*::\s*").unwrap();
    static ref REFERENCE: Regex = Regex::new(r"&\s*").unwrap();
    static ref COMMA: Regex = Regex::new(r"\s*,\s*").unwrap();
}
