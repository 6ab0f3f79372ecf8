//! Argument parsing for the literal macros.

use proc_macro2::{Span, TokenStream};
use syn::{
    parse::{ParseStream, Parser},
    Error, Lit, LitStr, Result, Token,
};

/// Parses the macro input as exactly one string literal, with an optional
/// trailing comma.
pub(crate) fn parse_literal(input: TokenStream, macro_name: &str) -> Result<LitStr> {
    if input.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            format!("`{macro_name}!` expects a string literal"),
        ));
    }
    let parser = move |stream: ParseStream<'_>| parse_single(stream, macro_name);
    parser.parse2(input)
}

fn parse_single(stream: ParseStream<'_>, macro_name: &str) -> Result<LitStr> {
    let literal = match stream.parse::<Lit>() {
        Ok(Lit::Str(literal)) => literal,
        Ok(other) => {
            return Err(Error::new(
                other.span(),
                format!("`{macro_name}!` expects a string literal"),
            ));
        }
        Err(_) => {
            return Err(Error::new(
                stream.span(),
                format!(
                    "`{macro_name}!` only accepts a string literal; \
runtime values cannot be trusted"
                ),
            ));
        }
    };
    if !literal.suffix().is_empty() {
        return Err(Error::new(
            literal.span(),
            "string literal suffixes are not supported",
        ));
    }
    stream.parse::<Option<Token![,]>>()?;
    if !stream.is_empty() {
        return Err(stream.error(format!(
            "`{macro_name}!` takes exactly one string literal"
        )));
    }
    Ok(literal)
}
