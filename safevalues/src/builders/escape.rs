//! Escaping raw text into markup.
//!
//! Structural escaping always runs first. The whitespace options are applied
//! afterwards, in a fixed order: spaces, then newlines, then tabs. The later
//! steps insert markup (`<br>`, `<span style="white-space:pre">`) that must not
//! be seen by the earlier ones.

use crate::trusted::SafeHtml;

const NBSP: &str = "&#160;";
const LINE_BREAK: &str = "<br>";
const TAB_RUN_OPEN: &str = r#"<span style="white-space:pre">"#;
const TAB_RUN_CLOSE: &str = "</span>";

/// Whitespace handling for [`escape_html_with`].
///
/// Every option is off by default. The options are independent; the order in
/// which they are applied is fixed by the escaper, not by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EscapeOptions {
    /// Replace every second consecutive space with `&#160;` so runs of spaces
    /// survive whitespace collapsing.
    pub preserve_spaces: bool,
    /// Replace `\r\n`, `\n`, and `\r` with `<br>`.
    pub preserve_newlines: bool,
    /// Wrap each run of tabs in `<span style="white-space:pre">`.
    pub preserve_tabs: bool,
}

impl EscapeOptions {
    /// Options with every transformation disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables all whitespace preservation.
    #[must_use]
    pub fn preserve_all() -> Self {
        Self {
            preserve_spaces: true,
            preserve_newlines: true,
            preserve_tabs: true,
        }
    }

    /// Sets [`preserve_spaces`](Self::preserve_spaces).
    #[must_use]
    pub fn with_preserve_spaces(mut self, enabled: bool) -> Self {
        self.preserve_spaces = enabled;
        self
    }

    /// Sets [`preserve_newlines`](Self::preserve_newlines).
    #[must_use]
    pub fn with_preserve_newlines(mut self, enabled: bool) -> Self {
        self.preserve_newlines = enabled;
        self
    }

    /// Sets [`preserve_tabs`](Self::preserve_tabs).
    #[must_use]
    pub fn with_preserve_tabs(mut self, enabled: bool) -> Self {
        self.preserve_tabs = enabled;
        self
    }
}

/// Escapes `text` so it can be used as element content or a quoted attribute value.
///
/// `&`, `<`, `>`, `"` and `'` are replaced by `&amp;`, `&lt;`, `&gt;`,
/// `&quot;` and `&apos;`. Every other character is passed through.
///
/// Escaping is not idempotent: escaping the output again escapes its `&`.
pub fn escape_html(text: &str) -> SafeHtml {
    SafeHtml::from_raw(escape_structural(text))
}

/// Escapes `text` like [`escape_html`], then applies the whitespace options.
pub fn escape_html_with(text: &str, options: EscapeOptions) -> SafeHtml {
    let mut escaped = escape_structural(text);
    if options.preserve_spaces {
        escaped = preserve_spaces(&escaped);
    }
    if options.preserve_newlines {
        escaped = preserve_newlines(&escaped);
    }
    if options.preserve_tabs {
        escaped = preserve_tabs(&escaped);
    }
    SafeHtml::from_raw(escaped)
}

/// Replaces the five structural characters with their entities.
pub(crate) fn escape_structural(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (index, byte) in text.bytes().enumerate() {
        let entity = match byte {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&apos;",
            _ => continue,
        };
        out.push_str(&text[last..index]);
        out.push_str(entity);
        last = index + 1;
    }
    out.push_str(&text[last..]);
    out
}

const fn is_space_boundary(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n' | b'\t' | b' ')
}

/// Rewrites the second space of each "boundary, space" pair as `&#160;`.
///
/// Matches are found left to right and do not overlap, so in a run of spaces
/// every second one is replaced. Start of input counts as a zero-width
/// boundary.
fn preserve_spaces(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut index = 0;

    if bytes.first() == Some(&b' ') {
        out.push_str(NBSP);
        last = 1;
        index = 1;
    }

    while index < bytes.len() {
        if is_space_boundary(bytes[index]) && bytes.get(index + 1) == Some(&b' ') {
            out.push_str(&text[last..=index]);
            out.push_str(NBSP);
            index += 2;
            last = index;
        } else {
            index += 1;
        }
    }
    out.push_str(&text[last..]);
    out
}

fn preserve_newlines(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut index = 0;

    while index < bytes.len() {
        let width = match (bytes[index], bytes.get(index + 1)) {
            (b'\r', Some(b'\n')) => 2,
            (b'\r' | b'\n', _) => 1,
            _ => {
                index += 1;
                continue;
            }
        };
        out.push_str(&text[last..index]);
        out.push_str(LINE_BREAK);
        index += width;
        last = index;
    }
    out.push_str(&text[last..]);
    out
}

fn preserve_tabs(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] != b'\t' {
            index += 1;
            continue;
        }
        let run_start = index;
        while bytes.get(index) == Some(&b'\t') {
            index += 1;
        }
        out.push_str(&text[last..run_start]);
        out.push_str(TAB_RUN_OPEN);
        out.push_str(&text[run_start..index]);
        out.push_str(TAB_RUN_CLOSE);
        last = index;
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::{escape_html, escape_html_with, EscapeOptions};

    fn spaces() -> EscapeOptions {
        EscapeOptions::new().with_preserve_spaces(true)
    }

    #[test]
    fn escapes_structural_characters() {
        let html = escape_html(r#"<a href="x">Tom & Jerry's</a>"#);
        assert_eq!(
            html.as_str(),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&apos;s&lt;/a&gt;"
        );
    }

    #[test]
    fn escaping_twice_double_escapes_ampersands() {
        let once = escape_html("a & b");
        let twice = escape_html(once.as_str());
        assert_eq!(once.as_str(), "a &amp; b");
        assert_eq!(twice.as_str(), "a &amp;amp; b");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(escape_html("").as_str(), "");
        assert_eq!(escape_html_with("", EscapeOptions::preserve_all()).as_str(), "");
    }

    #[test]
    fn options_default_to_plain_escaping() {
        let text = "a  b\n\tc";
        assert_eq!(
            escape_html_with(text, EscapeOptions::default()),
            escape_html(text)
        );
    }

    #[test]
    fn double_space_keeps_one_literal_space() {
        assert_eq!(escape_html_with("a  b", spaces()).as_str(), "a &#160;b");
    }

    #[test]
    fn runs_of_spaces_alternate() {
        assert_eq!(escape_html_with("a   b", spaces()).as_str(), "a &#160; b");
        assert_eq!(
            escape_html_with("a    b", spaces()).as_str(),
            "a &#160; &#160;b"
        );
    }

    #[test]
    fn single_space_is_unchanged() {
        assert_eq!(escape_html_with("a b c", spaces()).as_str(), "a b c");
    }

    #[test]
    fn leading_space_is_preserved() {
        assert_eq!(escape_html_with(" a", spaces()).as_str(), "&#160;a");
        assert_eq!(escape_html_with("  a", spaces()).as_str(), "&#160; a");
    }

    #[test]
    fn space_after_whitespace_boundary_is_preserved() {
        assert_eq!(escape_html_with("a\n b", spaces()).as_str(), "a\n&#160;b");
        assert_eq!(escape_html_with("a\t b", spaces()).as_str(), "a\t&#160;b");
        assert_eq!(escape_html_with("a\r b", spaces()).as_str(), "a\r&#160;b");
    }

    #[test]
    fn newline_sequences_become_line_breaks() {
        let newlines = EscapeOptions::new().with_preserve_newlines(true);
        assert_eq!(escape_html_with("a\nb", newlines).as_str(), "a<br>b");
        assert_eq!(escape_html_with("a\r\nb", newlines).as_str(), "a<br>b");
        assert_eq!(escape_html_with("a\rb", newlines).as_str(), "a<br>b");
        assert_eq!(
            escape_html_with("a\n\r\nb\r\r", newlines).as_str(),
            "a<br><br>b<br><br>"
        );
    }

    #[test]
    fn tab_runs_are_wrapped_once() {
        let tabs = EscapeOptions::new().with_preserve_tabs(true);
        assert_eq!(
            escape_html_with("a\t\tb", tabs).as_str(),
            "a<span style=\"white-space:pre\">\t\t</span>b"
        );
        assert_eq!(
            escape_html_with("\ta\t", tabs).as_str(),
            "<span style=\"white-space:pre\">\t</span>a<span style=\"white-space:pre\">\t</span>"
        );
    }

    #[test]
    fn generated_markup_is_not_escaped() {
        let html = escape_html_with("<\n\t>", EscapeOptions::preserve_all());
        assert_eq!(
            html.as_str(),
            "&lt;<br><span style=\"white-space:pre\">\t</span>&gt;"
        );
    }

    #[test]
    fn spaces_run_before_newlines_and_tabs() {
        // The space after each newline and tab is anchored on the raw
        // whitespace, which later steps replace with markup.
        let html = escape_html_with("x\n \t y", EscapeOptions::preserve_all());
        assert_eq!(
            html.as_str(),
            "x<br>&#160;<span style=\"white-space:pre\">\t</span>&#160;y"
        );
    }

    #[test]
    fn non_ascii_passes_through() {
        let html = escape_html_with("é  ü\t💡", EscapeOptions::preserve_all());
        assert_eq!(
            html.as_str(),
            "é &#160;ü<span style=\"white-space:pre\">\t</span>💡"
        );
    }

    #[test]
    fn control_characters_pass_through() {
        assert_eq!(escape_html("\u{0}\u{7}\u{1b}").as_str(), "\u{0}\u{7}\u{1b}");
    }
}
