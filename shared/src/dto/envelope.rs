//! # Response Envelope
//!
//! Every API response is wrapped as `{ "code": <int>, "data": <T>, "message": <string> }`.
//! A `code` whose decimal text is three digits starting with `2` is a success;
//! anything else is a logical failure, even when the HTTP status is 200.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire wrapper around every API response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub data: T,
    #[serde(default)]
    pub message: String,
}

impl<T> Envelope<T> {
    /// Success envelope with code 200 and an empty message.
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            data,
            message: String::new(),
        }
    }

    /// Whether `code` is in the success family.
    pub fn is_success(&self) -> bool {
        is_success_code(&Value::from(self.code))
    }
}

impl Envelope<Value> {
    /// Failure envelope carrying `code` and `message` with null data.
    pub fn fail(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            data: Value::Null,
            message: message.into(),
        }
    }
}

/// Test a raw `code` value against the success pattern `^2\d{2}$`.
///
/// The test runs on the textual form of the value, so a numeric `204` and a
/// string `"204"` both pass, while `2000`, `-200`, `200.5` and a missing code fail.
///
/// ```rust
/// use serde_json::json;
/// use shared::dto::envelope::is_success_code;
///
/// assert!(is_success_code(&json!(200)));
/// assert!(is_success_code(&json!("299")));
/// assert!(!is_success_code(&json!(401)));
/// assert!(!is_success_code(&json!(2000)));
/// assert!(!is_success_code(&json!(null)));
/// ```
pub fn is_success_code(code: &Value) -> bool {
    let text = match code {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => return false,
    };
    let bytes = text.as_bytes();
    bytes.len() == 3 && bytes[0] == b'2' && bytes[1..].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_code_boundaries() {
        assert!(is_success_code(&json!(200)));
        assert!(is_success_code(&json!(201)));
        assert!(is_success_code(&json!(299)));
        assert!(!is_success_code(&json!(199)));
        assert!(!is_success_code(&json!(300)));
        assert!(!is_success_code(&json!(20)));
        assert!(!is_success_code(&json!(-200)));
        assert!(!is_success_code(&json!(200.5)));
        assert!(!is_success_code(&json!(" 200")));
        assert!(!is_success_code(&json!(true)));
    }

    #[test]
    fn test_envelope_missing_data_and_message_default() {
        let envelope: Envelope<Value> = serde_json::from_str(r#"{"code":204}"#).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.data, Value::Null);
        assert_eq!(envelope.message, "");
    }

    #[test]
    fn test_envelope_fail_serializes_wire_shape() {
        let envelope = Envelope::fail(401, "expired");
        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(wire, json!({"code": 401, "data": null, "message": "expired"}));
        assert!(!envelope.is_success());
    }
}
