//! Unforgeable trusted values for HTML, script, and resource URL sinks.
//!
//! This crate separates:
//! - **Trusted types**: what a string is safe *for* ([`SafeHtml`],
//!   [`SafeScript`], [`TrustedResourceUrl`]).
//! - **Builders**: the only code allowed to mint them, by escaping untrusted
//!   text or by assembling already-trusted inputs.
//!
//! Key rules:
//! - A trusted value cannot be created from a runtime string outside this
//!   crate. There is no `From<String>`, no public constructor, and no
//!   `Deserialize`.
//! - Raw text becomes markup only through [`escape_html`] or
//!   [`escape_html_with`].
//! - Scripts and resource URLs come from compile-time literals
//!   ([`safe_script!`], [`trusted_resource_url!`]) or from serialized data
//!   ([`script_from_json`], feature `json`).
//! - Composition ([`concat_html`], [`join_html`], [`script_to_html`], ...) only
//!   accepts trusted inputs; plain-string parameters such as attribute values
//!   are escaped.
//!
//! ```
//! use safevalues::{concat_html, escape_html, safe_script, script_to_html, ScriptOptions};
//!
//! let greeting = escape_html("Tom & Jerry <3");
//! let boot = script_to_html(&safe_script!("start()"), &ScriptOptions::new().with_nonce("abc"));
//! let page = concat_html([greeting, boot]);
//!
//! assert_eq!(
//!     page.as_str(),
//!     r#"Tom &amp; Jerry &lt;3<script nonce="abc">start()\x3c/script>"#
//! );
//! ```
//!
//! The literal macros reject anything that is not a single string literal:
//!
//! ```compile_fail
//! let user_input = String::from("alert(document.cookie)");
//! let script = safevalues::safe_script!(user_input);
//! ```
//!
//! What this crate does not do:
//! - sanitize or parse untrusted markup
//! - validate URL schemes or syntax
//! - render or patch a DOM

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    missing_docs,
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
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::cargo_common_metadata
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use safevalues_macros::{safe_script, trusted_resource_url};

// Lets the literal macros expand to `::safevalues::...` inside this crate too.
#[allow(unused_extern_crates)]
extern crate self as safevalues;

// Module declarations
mod builders;
#[cfg(feature = "serde")]
mod serialize;
pub mod sink;
#[cfg(feature = "slog")]
mod slog;
mod trusted;

// Re-exports
#[cfg(feature = "json")]
pub use builders::{script_from_json, script_with_args};
pub use builders::{
    concat_html, concat_scripts, escape_html, escape_html_with, join_html, script_to_html,
    script_url_to_html, EscapeOptions, ScriptOptions, ScriptSrcOptions, SCRIPT_CLOSE,
};
pub use trusted::{
    unwrap_html, unwrap_resource_url, unwrap_script, SafeHtml, SafeScript, TrustedResourceUrl,
    TrustedValue, EMPTY_HTML, EMPTY_SCRIPT,
};

/// Expansion targets of the literal macros. Not public API.
///
/// Calling anything in this module directly bypasses the brand: whatever
/// string is passed in comes out trusted. Only `safe_script!` and
/// `trusted_resource_url!` may expand to these items.
#[doc(hidden)]
pub mod __private {
    use crate::trusted::{SafeScript, TrustedResourceUrl};

    /// A string literal taken verbatim from a literal macro invocation.
    #[derive(Clone, Copy)]
    pub struct MacroLiteral(&'static str);

    impl MacroLiteral {
        /// Wraps the literal argument of a literal macro. Not for hand-written code.
        pub const fn from_macro_expansion_only(literal: &'static str) -> Self {
            Self(literal)
        }
    }

    /// Target of `safe_script!`.
    pub const fn script_from_literal(literal: MacroLiteral) -> SafeScript {
        SafeScript::from_static(literal.0)
    }

    /// Target of `trusted_resource_url!`.
    pub const fn resource_url_from_literal(literal: MacroLiteral) -> TrustedResourceUrl {
        TrustedResourceUrl::from_static(literal.0)
    }
}
