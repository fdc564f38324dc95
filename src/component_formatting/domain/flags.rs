//! Per-record flags written by the upstream scanners
//!
//! The scanners are loose about both spelling and type: the skip flag shows
//! up as `cgIgnore`, `CgIgnore` or `CGIgnore`, holding a boolean, a number
//! or a string. Both typed and hand-built records read it the same way.

use serde_json::Value;

/// Keys that suppress a record
pub const SKIP_FLAG_KEYS: [&str; 3] = ["cgIgnore", "CgIgnore", "CGIgnore"];

/// Display-only keys meant for other report formats
pub const DISPLAY_FLAG_KEYS: [&str; 2] = ["markdownIgnore", "MarkdownIgnore"];

/// `false`, `0`, `""` and `null` are unset, anything else is set
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthy_values() {
        for value in [json!(true), json!(1), json!(-0.5), json!("true"), json!("false"), json!([]), json!({})] {
            assert!(is_truthy(&value), "{} should be truthy", value);
        }
    }

    #[test]
    fn test_falsy_values() {
        for value in [json!(false), json!(0), json!(0.0), json!(""), Value::Null] {
            assert!(!is_truthy(&value), "{} should be falsy", value);
        }
    }
}
