//! Literal constructors for `safevalues`.
//!
//! This crate provides `safe_script!` and `trusted_resource_url!`. They:
//! - accept exactly one string literal
//! - expand to a `const`-evaluable call into `safevalues::__private`, passing
//!   the literal wrapped in `MacroLiteral`
//!
//! A literal is authored by the developer and is part of the program text, so
//! it is trusted the same way the program itself is. Anything computed at
//! runtime is rejected at compile time.
//!
//! It does **not** inspect the literal. Escaping and assembly live in the
//! main `safevalues` crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};

mod literal;

use literal::parse_literal;

/// Creates a `SafeScript` from a string literal.
///
/// ```ignore
/// use safevalues::safe_script;
///
/// const ANALYTICS: safevalues::SafeScript = safe_script!("window.dataLayer = [];");
/// ```
///
/// Only a single string literal is accepted (raw strings included). Variables,
/// `format!` calls, and other expressions are compile errors.
#[proc_macro]
pub fn safe_script(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(input.into(), "script_from_literal", "safe_script").into()
}

/// Creates a `TrustedResourceUrl` from a string literal.
///
/// ```ignore
/// use safevalues::trusted_resource_url;
///
/// let url = trusted_resource_url!("https://cdn.example.com/app.js");
/// ```
///
/// The literal is not validated as a URL.
#[proc_macro]
pub fn trusted_resource_url(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(input.into(), "resource_url_from_literal", "trusted_resource_url").into()
}

fn expand(input: TokenStream, constructor: &str, macro_name: &str) -> TokenStream {
    match parse_literal(input, macro_name) {
        Ok(literal) => {
            let root = crate_root();
            let constructor = format_ident!("{}", constructor);
            quote! {
                #root::__private::#constructor(
                    #root::__private::MacroLiteral::from_macro_expansion_only(#literal)
                )
            }
        }
        Err(err) => err.into_compile_error(),
    }
}

/// Returns the token stream to reference the safevalues crate root.
///
/// Handles crate renaming (e.g., `sv = { package = "safevalues", ... }`).
/// Inside safevalues itself the crate aliases itself as `safevalues`, so
/// `Itself` can use the same absolute path as downstream crates; this keeps
/// doctests working, where proc-macro-crate also reports `Itself`.
fn crate_root() -> TokenStream {
    match crate_name("safevalues") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::safevalues },
    }
}
