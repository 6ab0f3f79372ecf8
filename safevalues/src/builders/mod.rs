//! Builders: the only code that mints trusted values.
//!
//! - **`escape`**: raw text to markup (`escape_html`, `escape_html_with`)
//! - **`script`**: `<script>` elements from trusted scripts and URLs
//! - **`concat`**: composition of existing trusted values
//! - **`json`**: scripts from serialized data (feature `json`)

mod concat;
mod escape;
#[cfg(feature = "json")]
mod json;
mod script;

pub use concat::{concat_html, concat_scripts, join_html};
pub use escape::{escape_html, escape_html_with, EscapeOptions};
#[cfg(feature = "json")]
pub use json::{script_from_json, script_with_args};
pub use script::{script_to_html, script_url_to_html, ScriptOptions, ScriptSrcOptions, SCRIPT_CLOSE};
