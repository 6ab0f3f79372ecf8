//! Scripts built from serialized data.
//!
//! JSON is valid JavaScript expression syntax, but a JSON string may contain
//! `</script` or `<!--`. Every `<` is therefore rewritten as `\u003C`, which
//! decodes to the same value in both JSON and JavaScript.

use serde::Serialize;

use crate::trusted::SafeScript;

fn to_script_json<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let json = serde_json::to_string(value)?;
    Ok(json.replace('<', "\\u003C"))
}

/// Serializes `value` as a JavaScript expression.
///
/// # Errors
///
/// Returns the `serde_json` error if `value` cannot be serialized (e.g. a map
/// with non-string keys).
pub fn script_from_json<T>(value: &T) -> Result<SafeScript, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    Ok(SafeScript::from_raw(to_script_json(value)?))
}

/// Builds `(function)(arg, ...)`, passing each argument as serialized JSON.
///
/// `function` is typically a function expression such as
/// `function(config) { start(config); }`.
///
/// # Errors
///
/// Returns the first `serde_json` error encountered while serializing `args`.
pub fn script_with_args<I>(function: &SafeScript, args: I) -> Result<SafeScript, serde_json::Error>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let mut out = String::with_capacity(function.len() + 16);
    out.push('(');
    out.push_str(function.as_str());
    out.push_str(")(");
    for (index, arg) in args.into_iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push_str(&to_script_json(&arg)?);
    }
    out.push(')');
    Ok(SafeScript::from_raw(out))
}
