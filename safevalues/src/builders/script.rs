//! `<script>` element builders.
//!
//! Both builders close the element with `\x3c/script>` rather than a literal
//! `</script>`, so the produced markup can itself be embedded in a script
//! string literal (e.g. a `document.write` call) without terminating the
//! enclosing script element.

use crate::{
    builders::escape::escape_structural,
    trusted::{SafeHtml, SafeScript, TrustedResourceUrl},
};

/// Closing sequence shared by the script builders.
pub const SCRIPT_CLOSE: &str = r"\x3c/script>";

/// Attributes for [`script_to_html`].
///
/// Unset or empty fields are omitted from the output. Values are plain
/// strings and are escaped before being placed in double quotes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptOptions {
    /// The `id` attribute.
    pub id: Option<String>,
    /// The CSP `nonce` attribute.
    pub nonce: Option<String>,
    /// The `type` attribute, e.g. `module` or `application/json`.
    pub script_type: Option<String>,
}

impl ScriptOptions {
    /// Options with no attributes set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the `nonce` attribute.
    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Sets the `type` attribute.
    #[must_use]
    pub fn with_type(mut self, script_type: impl Into<String>) -> Self {
        self.script_type = Some(script_type.into());
        self
    }
}

/// Attributes for [`script_url_to_html`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptSrcOptions {
    /// Emit the bare `async` attribute.
    pub is_async: bool,
    /// The CSP `nonce` attribute.
    pub nonce: Option<String>,
}

impl ScriptSrcOptions {
    /// Options for a plain, synchronous script with no nonce.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the bare `async` attribute.
    ///
    /// ```
    /// use safevalues::{script_url_to_html, trusted_resource_url, ScriptSrcOptions};
    ///
    /// let options = ScriptSrcOptions::new().with_async(true).with_nonce("n1");
    /// let html = script_url_to_html(&trusted_resource_url!("/app.js"), &options);
    /// assert_eq!(html.as_str(), r#"<script src="/app.js" async nonce="n1">\x3c/script>"#);
    /// ```
    #[must_use]
    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// Sets the `nonce` attribute.
    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }
}

/// Wraps a trusted script in an inline `<script>` element.
///
/// Attributes are written in the order `id`, `nonce`, `type`. The script body
/// is inserted as-is.
pub fn script_to_html(script: &SafeScript, options: &ScriptOptions) -> SafeHtml {
    let body = script.as_str();
    let mut out = String::with_capacity(body.len() + 32);
    out.push_str("<script");
    push_attribute(&mut out, "id", options.id.as_deref());
    push_attribute(&mut out, "nonce", options.nonce.as_deref());
    push_attribute(&mut out, "type", options.script_type.as_deref());
    out.push('>');
    out.push_str(body);
    out.push_str(SCRIPT_CLOSE);
    SafeHtml::from_raw(out)
}

/// Builds an external `<script src>` element for a trusted resource URL.
///
/// The URL is escaped for attribute context; it is trusted as a URL, not as
/// markup.
pub fn script_url_to_html(url: &TrustedResourceUrl, options: &ScriptSrcOptions) -> SafeHtml {
    let mut out = String::with_capacity(url.len() + 32);
    out.push_str("<script");
    push_attribute(&mut out, "src", Some(url.as_str()));
    if options.is_async {
        out.push_str(" async");
    }
    push_attribute(&mut out, "nonce", options.nonce.as_deref());
    out.push('>');
    out.push_str(SCRIPT_CLOSE);
    SafeHtml::from_raw(out)
}

fn push_attribute(out: &mut String, name: &str, value: Option<&str>) {
    let Some(value) = value.filter(|value| !value.is_empty()) else {
        return;
    };
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_structural(value));
    out.push('"');
}
