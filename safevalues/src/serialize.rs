//! `serde` support for trusted values.
//!
//! Trusted values serialize as plain strings, so they can be embedded in API
//! responses or template contexts. There is deliberately no `Deserialize`
//! implementation: deserializing would brand arbitrary input.

use serde::{Serialize, Serializer};

use crate::{sink::Sink, trusted::TrustedValue};

impl<S: Sink> Serialize for TrustedValue<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
