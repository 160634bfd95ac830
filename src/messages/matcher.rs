// src/messages/matcher.rs
// ============================================================================
// Module: Message Matcher
// Description: Error-envelope extraction and message comparison.
// Purpose: Decode `error.message` and compare it under the active policy.
// Dependencies: serde_json
// ============================================================================

use serde_json::Value;

/// Extracts the error message from an API error envelope.
///
/// Error responses carry `{"error": {"message": "<string>"}}`; success
/// responses return the resource directly and have no envelope.
#[must_use]
pub fn error_message(body: &Value) -> Option<&str> {
    body.get("error").and_then(|error| error.get("message")).and_then(Value::as_str)
}

/// Compares an observed error message against an expected fragment.
///
/// Strict mode requires byte equality. Relaxed mode (the default) accepts a
/// case-insensitive containment match, which tolerates the casing and
/// wording drift observed across backend revisions.
#[must_use]
pub fn matches_message(actual: &str, expected: &str, strict: bool) -> bool {
    if strict {
        return actual == expected;
    }
    actual.to_ascii_lowercase().contains(&expected.to_ascii_lowercase())
}
