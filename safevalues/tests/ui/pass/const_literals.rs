//! Test: literal macros can initialize `const` and `static` items.

use safevalues::{safe_script, trusted_resource_url, SafeScript, TrustedResourceUrl};

const BOOT: SafeScript = safe_script!("boot();");
static LOADER: TrustedResourceUrl = trusted_resource_url!(r"https://cdn.example.com/loader.js");

fn main() {
    assert_eq!(BOOT.as_str(), "boot();");
    assert_eq!(LOADER.as_str(), "https://cdn.example.com/loader.js");
}
