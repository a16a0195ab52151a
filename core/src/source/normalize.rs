//! Maps the many payload shapes seen in the wild onto [`DrawResult`].
//!
//! The list is either the body itself or sits under one of [`LIST_KEYS`].
//! Each field is read from the first alias holding a non-empty value, the way
//! a loosely typed client would treat `0` and `""` as missing.

use serde_json::Value;
use sift_common::lottery::draw::{DrawResult, MIN_CODES};
use tracing::debug;

const LIST_KEYS: &[&str] = &["data", "rows", "list", "result"];
const ISSUE_KEYS: &[&str] = &["id", "issue", "expect", "period", "seq"];
const CODE_KEYS: &[&str] = &["opencode", "openCode", "code", "result", "number"];
const TIME_KEYS: &[&str] = &["opentime", "openTime", "time", "dateline", "open_time"];

/// Every usable record in `body`, in source order.
pub fn normalize_records(body: &Value) -> Vec<DrawResult> {
    let Some(items) = record_list(body) else {
        debug!("payload holds no record list");
        return Vec::new();
    };
    items.iter().filter_map(normalize_record).collect()
}

/// `"01 02|03+04,,05"` → `"01,02,03,04,05"`.
pub fn normalize_code(raw: &str) -> String {
    raw.split([' ', '|', '+', ','])
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join(",")
}

fn record_list(body: &Value) -> Option<&Vec<Value>> {
    body.as_array().or_else(|| {
        LIST_KEYS
            .iter()
            .find_map(|key| body.get(key).and_then(Value::as_array))
    })
}

fn normalize_record(item: &Value) -> Option<DrawResult> {
    let issue = first_text(item, ISSUE_KEYS)?;
    let code = normalize_code(&first_text(item, CODE_KEYS)?);
    if code.split(',').count() < MIN_CODES {
        debug!(issue = %issue, code = %code, "dropping draw with too few codes");
        return None;
    }
    let time = first_text(item, TIME_KEYS).unwrap_or_default();
    Some(DrawResult::new(issue, code, time))
}

fn first_text(item: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| item.get(key).and_then(as_text))
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Array(parts) => Some(
            parts
                .iter()
                .filter_map(as_text)
                .collect::<Vec<String>>()
                .join(","),
        ),
        _ => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let body = json!([
            {"expect": "2025127", "opencode": "06,40,04,34,26,28,25", "opentime": "2025-12-06 21:30:00"}
        ]);
        let records = normalize_records(&body);
        assert_eq!(
            records,
            vec![DrawResult::new("2025127", "06,40,04,34,26,28,25", "2025-12-06 21:30:00")]
        );
    }

    #[test]
    fn test_envelopes() {
        let record = json!({"issue": "1", "code": "1,2,3,4,5,6,7"});
        for key in LIST_KEYS {
            let mut envelope = serde_json::Map::new();
            envelope.insert(key.to_string(), json!([record.clone()]));
            let body = Value::Object(envelope);
            assert_eq!(normalize_records(&body).len(), 1, "envelope {key}");
        }
        assert!(normalize_records(&json!({"payload": [record]})).is_empty());
        assert!(normalize_records(&json!("nope")).is_empty());
        assert!(normalize_records(&Value::Null).is_empty());
    }

    #[test]
    fn test_field_aliases_and_numbers() {
        let body = json!({"rows": [
            {"id": 0, "period": 2025120, "openCode": "01 02 03 04 05 06 07", "dateline": "2025-11-20"}
        ]});
        let records = normalize_records(&body);
        assert_eq!(records[0].issue, "2025120");
        assert_eq!(records[0].open_code, "01,02,03,04,05,06,07");
        assert_eq!(records[0].open_time, "2025-11-20");
    }

    #[test]
    fn test_empty_strings_fall_through() {
        let body = json!([{"id": "", "issue": "7", "opencode": "", "number": "1|2|3|4|5|6+7"}]);
        let records = normalize_records(&body);
        assert_eq!(records[0].issue, "7");
        assert_eq!(records[0].open_code, "1,2,3,4,5,6,7");
        assert_eq!(records[0].open_time, "");
    }

    #[test]
    fn test_array_codes() {
        let body = json!([{"seq": "9", "result": [1, 2, 3, 4, 5, 6, 7]}]);
        assert_eq!(normalize_records(&body)[0].open_code, "1,2,3,4,5,6,7");
    }

    #[test]
    fn test_incomplete_records_are_dropped() {
        let body = json!({"data": [
            {"opencode": "1,2,3,4,5,6,7"},
            {"issue": "1"},
            {"issue": "2", "opencode": "1,2,3"},
            {"issue": "3", "opencode": "1,2,3,4,5,6,7"}
        ]});
        let records = normalize_records(&body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].issue, "3");
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code(" 01 02|03+04,,05 "), "01,02,03,04,05");
        assert_eq!(normalize_code(""), "");
    }
}
