//! Composition of existing trusted values.
//!
//! Concatenation re-uses trust that each input already carries. Nothing here
//! escapes, and nothing accepts a plain string.
//!
//! Resource URLs are not concatenable: appending one trusted URL to another
//! can move the result to a different origin.
//!
//! ```compile_fail
//! // Untrusted strings are rejected by type.
//! let html = safevalues::concat_html(["<b>", "</b>"]);
//! ```

use std::borrow::Borrow;

use crate::{
    sink::{Html, Script, Sink},
    trusted::{SafeHtml, SafeScript, TrustedValue},
};

/// Concatenates markup values in order, with no separator.
pub fn concat_html<I>(values: I) -> SafeHtml
where
    I: IntoIterator,
    I::Item: Borrow<SafeHtml>,
{
    TrustedValue::from_raw(join_raw::<Html, _>(values, ""))
}

/// Concatenates markup values in order, inserting `separator` between them.
pub fn join_html<I>(separator: &SafeHtml, values: I) -> SafeHtml
where
    I: IntoIterator,
    I::Item: Borrow<SafeHtml>,
{
    TrustedValue::from_raw(join_raw::<Html, _>(values, separator.as_str()))
}

/// Concatenates script values in order, with no separator.
pub fn concat_scripts<I>(values: I) -> SafeScript
where
    I: IntoIterator,
    I::Item: Borrow<SafeScript>,
{
    TrustedValue::from_raw(join_raw::<Script, _>(values, ""))
}

fn join_raw<S, I>(values: I, separator: &str) -> String
where
    S: Sink,
    I: IntoIterator,
    I::Item: Borrow<TrustedValue<S>>,
{
    let mut out = String::new();
    for (index, value) in values.into_iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        out.push_str(value.borrow().as_str());
    }
    out
}

impl FromIterator<SafeHtml> for SafeHtml {
    fn from_iter<I: IntoIterator<Item = SafeHtml>>(iter: I) -> Self {
        concat_html(iter)
    }
}

impl<'a> FromIterator<&'a SafeHtml> for SafeHtml {
    fn from_iter<I: IntoIterator<Item = &'a SafeHtml>>(iter: I) -> Self {
        concat_html(iter)
    }
}

impl Extend<SafeHtml> for SafeHtml {
    fn extend<I: IntoIterator<Item = SafeHtml>>(&mut self, iter: I) {
        let mut raw = std::mem::take(self).into_string();
        for value in iter {
            raw.push_str(value.as_str());
        }
        *self = TrustedValue::from_raw(raw);
    }
}
