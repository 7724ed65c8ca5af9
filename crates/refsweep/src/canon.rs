use serde_json::Value;

use crate::error::Result;

/// Serialize `value` to its canonical textual form.
///
/// Pretty-printed with two-space indentation and insertion key order. This
/// is the form the occurrence counter searches and the form written as the
/// final output, so counts always refer to the text the user ends up with.
///
/// # Errors
///
/// Returns an error if the underlying serializer fails.
pub fn canonical_text(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
