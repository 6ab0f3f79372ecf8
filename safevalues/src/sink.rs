//! Marker types for "where is this value allowed to go?"
//!
//! These types are zero-sized. They exist only at the type level so a
//! [`TrustedValue`](crate::TrustedValue) can carry its category without storing
//! any runtime data.

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for trust categories.
///
/// The trait is sealed: the set of sinks is fixed by this crate, because a
/// category is only meaningful together with the builders that mint values
/// for it.
pub trait Sink: sealed::Sealed + Copy + Send + Sync + 'static {
    /// Name of the trusted type for this category, used by `Debug`.
    const TYPE_NAME: &'static str;
}

/// Sink marker for HTML markup (element content and attribute values).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Html;
impl sealed::Sealed for Html {}
impl Sink for Html {
    const TYPE_NAME: &'static str = "SafeHtml";
}

/// Sink marker for script bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Script;
impl sealed::Sealed for Script {}
impl Sink for Script {
    const TYPE_NAME: &'static str = "SafeScript";
}

/// Sink marker for URLs that load and execute a resource (e.g. `<script src>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResourceUrl;
impl sealed::Sealed for ResourceUrl {}
impl Sink for ResourceUrl {
    const TYPE_NAME: &'static str = "TrustedResourceUrl";
}
