//! The branded value type and its construction/unwrap discipline.
//!
//! A [`TrustedValue`] can only be created inside this crate: its fields are
//! private and its constructors are `pub(crate)`. Builders in
//! [`crate::builders`] are the only callers. Reading the payload back out is
//! public, since that is what sinks need.

use std::{borrow::Cow, fmt, marker::PhantomData};

use crate::sink::{Html, ResourceUrl, Script, Sink};

/// A string that is known to be safe for the sink `S`.
///
/// Values are immutable. There is no `From<String>`, `FromStr`, or
/// `Deserialize` implementation, so the only ways to obtain one are the
/// builders of this crate, the literal macros, and composition of existing
/// trusted values of the same category.
///
/// ```compile_fail
/// use safevalues::{sink::Html, TrustedValue};
///
/// // Fields are private; a value cannot be forged from a struct literal.
/// let forged: TrustedValue<Html> = TrustedValue {
///     raw: "<img src=x onerror=alert(1)>".into(),
///     sink: std::marker::PhantomData,
/// };
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TrustedValue<S: Sink> {
    raw: Cow<'static, str>,
    sink: PhantomData<S>,
}

/// Markup safe to insert as element content or attribute text.
pub type SafeHtml = TrustedValue<Html>;

/// Script source safe to evaluate.
pub type SafeScript = TrustedValue<Script>;

/// URL safe to load executable resources from.
pub type TrustedResourceUrl = TrustedValue<ResourceUrl>;

/// The empty markup value.
pub const EMPTY_HTML: SafeHtml = SafeHtml::EMPTY;

/// The empty script value.
pub const EMPTY_SCRIPT: SafeScript = SafeScript::EMPTY;

impl<S: Sink> TrustedValue<S> {
    /// The empty value. An empty string is inert in every sink.
    pub const EMPTY: Self = Self::from_static("");

    /// Brands `raw` as safe for `S`.
    ///
    /// Callers must have established that `raw` is safe for the sink.
    pub(crate) fn from_raw(raw: impl Into<Cow<'static, str>>) -> Self {
        Self {
            raw: raw.into(),
            sink: PhantomData,
        }
    }

    /// Brands a compile-time literal. Used by the literal macros.
    pub(crate) const fn from_static(raw: &'static str) -> Self {
        Self {
            raw: Cow::Borrowed(raw),
            sink: PhantomData,
        }
    }

    /// Returns the trusted payload.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consumes the value and returns the trusted payload.
    pub fn into_string(self) -> String {
        self.raw.into_owned()
    }

    /// Returns `true` if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Length of the payload in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }
}

impl<S: Sink> Default for TrustedValue<S> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<S: Sink> fmt::Debug for TrustedValue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(S::TYPE_NAME).field(&self.as_str()).finish()
    }
}

impl<S: Sink> fmt::Display for TrustedValue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S: Sink> AsRef<str> for TrustedValue<S> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Returns the markup held by `value`.
pub fn unwrap_html(value: &SafeHtml) -> &str {
    value.as_str()
}

/// Returns the script source held by `value`.
pub fn unwrap_script(value: &SafeScript) -> &str {
    value.as_str()
}

/// Returns the URL held by `value`.
pub fn unwrap_resource_url(value: &TrustedResourceUrl) -> &str {
    value.as_str()
}
