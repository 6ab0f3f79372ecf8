//! Adapters for emitting trusted values through `slog`.
//!
//! Trusted values are logged as their payload string. Logging does not unwrap
//! into a sink, so this never weakens the brand; it only makes values usable
//! as structured fields:
//!
//! ```ignore
//! info!(logger, "rendered"; "html" => &fragment);
//! ```

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{sink::Sink, trusted::TrustedValue};

impl<S: Sink> SlogValue for TrustedValue<S> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, self.as_str())
    }
}
