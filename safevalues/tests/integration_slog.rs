//! Integration tests for the slog adapter.
//!
//! These tests verify that trusted values serialize through `slog::Value` as
//! their payload string, for every category.

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use safevalues::{
    escape_html, safe_script, script_url_to_html, trusted_resource_url, ScriptSrcOptions,
};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, String>>,
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), format!("args:{val}"));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured.borrow_mut().insert(key.into(), val.into());
        Ok(())
    }
}

/// Helper function to serialize a slog::Value into the capturing serializer.
fn serialize_to_capture<V: slog::Value>(
    value: &V,
    key: &'static str,
    serializer: &mut CapturingSerializer,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

#[test]
fn test_html_is_emitted_as_str() {
    let mut serializer = CapturingSerializer::new();
    let html = escape_html("<b>bold</b>");
    serialize_to_capture(&html, "html", &mut serializer);
    assert_eq!(
        serializer.get("html").as_deref(),
        Some("&lt;b&gt;bold&lt;/b&gt;")
    );
}

#[test]
fn test_every_category_serializes() {
    let mut serializer = CapturingSerializer::new();
    let script = safe_script!("init()");
    let url = trusted_resource_url!("/app.js");
    let tag = script_url_to_html(&url, &ScriptSrcOptions::default());

    serialize_to_capture(&script, "script", &mut serializer);
    serialize_to_capture(&url, "url", &mut serializer);
    serialize_to_capture(&tag, "tag", &mut serializer);

    assert_eq!(serializer.get("script").as_deref(), Some("init()"));
    assert_eq!(serializer.get("url").as_deref(), Some("/app.js"));
    assert_eq!(
        serializer.get("tag").as_deref(),
        Some(r#"<script src="/app.js">\x3c/script>"#)
    );
}

#[test]
fn test_logs_through_a_real_logger() {
    let logger = slog::Logger::root(slog::Discard, slog::o!());
    let html = escape_html("x");
    slog::info!(logger, "rendered"; "html" => &html);
}
