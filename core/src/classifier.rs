//! Classification of raw backend error payloads
//!
//! The backend answers failed requests with one of several JSON shapes.
//! `classify` is total: any value, including an absent body, resolves to
//! exactly one shape.

use serde::Serialize;
use serde_json::{Map, Value};

/// Kind of error payload, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorShapeKind {
    /// `errors` is a list of `{code, description}` records
    CodedErrorList,
    /// `errors` maps field names to validation messages
    FieldValidationMap,
    /// A single `message` string
    PlainMessage,
    /// Absent or unrecognized payload
    Unknown,
}

impl ErrorShapeKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorShapeKind::CodedErrorList => "coded-error-list",
            ErrorShapeKind::FieldValidationMap => "field-validation-map",
            ErrorShapeKind::PlainMessage => "plain-message",
            ErrorShapeKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One entry of a coded error list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodedError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Classified payload with the data each shape carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorShape {
    CodedErrorList {
        status: Option<u16>,
        entries: Vec<CodedError>,
    },
    FieldValidationMap {
        title: Option<String>,
        /// Field name and raw messages, in payload order
        fields: Vec<(String, Vec<String>)>,
    },
    PlainMessage {
        message: String,
        title: Option<String>,
    },
    Unknown {
        title: Option<String>,
        /// No body at all, as opposed to a body of an unexpected form
        absent: bool,
    },
}

impl ErrorShape {
    pub fn kind(&self) -> ErrorShapeKind {
        match self {
            ErrorShape::CodedErrorList { .. } => ErrorShapeKind::CodedErrorList,
            ErrorShape::FieldValidationMap { .. } => ErrorShapeKind::FieldValidationMap,
            ErrorShape::PlainMessage { .. } => ErrorShapeKind::PlainMessage,
            ErrorShape::Unknown { .. } => ErrorShapeKind::Unknown,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ErrorShape::CodedErrorList { .. } => None,
            ErrorShape::FieldValidationMap { title, .. }
            | ErrorShape::PlainMessage { title, .. }
            | ErrorShape::Unknown { title, .. } => title.as_deref(),
        }
    }
}

/// Determine the shape of `payload`
pub fn classify(payload: Option<&Value>) -> ErrorShape {
    let object = match payload {
        Some(Value::Object(object)) => object,
        Some(value) if !is_blank(value) => {
            return ErrorShape::Unknown {
                title: None,
                absent: false,
            }
        }
        _ => {
            return ErrorShape::Unknown {
                title: None,
                absent: true,
            }
        }
    };

    let title = string_property(object, "title");

    match object.get("errors") {
        Some(Value::Array(items)) if items.iter().all(Value::is_object) => {
            return ErrorShape::CodedErrorList {
                status: object
                    .get("status")
                    .and_then(Value::as_u64)
                    .and_then(|status| u16::try_from(status).ok()),
                entries: items.iter().map(coded_entry).collect(),
            };
        }
        Some(Value::Object(fields)) => {
            return ErrorShape::FieldValidationMap {
                title,
                fields: fields
                    .iter()
                    .map(|(name, value)| (name.clone(), field_messages(value)))
                    .collect(),
            };
        }
        _ => {}
    }

    if let Some(message) = string_property(object, "message") {
        return ErrorShape::PlainMessage { message, title };
    }

    ErrorShape::Unknown {
        title,
        absent: false,
    }
}

/// Parse a raw response body; anything that is not JSON counts as absent
pub fn parse_payload(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }

    match serde_json::from_str(body) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(error = %err, "Error body is not JSON");
            None
        }
    }
}

fn string_property(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_owned)
}

// `null`, `false`, zero and the empty string carry no error information.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn coded_entry(item: &Value) -> CodedError {
    CodedError {
        code: item.get("code").and_then(Value::as_str).map(str::to_owned),
        description: item
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_owned),
    }
}

// Non-string entries keep their JSON text so nothing is dropped.
fn field_messages(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(value_text).collect(),
        Value::Null => Vec::new(),
        other => vec![value_text(other)],
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_payload_is_unknown() {
        assert_eq!(
            classify(None),
            ErrorShape::Unknown {
                title: None,
                absent: true
            }
        );
        assert_eq!(classify(Some(&Value::Null)).kind(), ErrorShapeKind::Unknown);
    }

    #[test]
    fn test_non_object_payloads_are_unknown() {
        for payload in [json!(42), json!("boom"), json!([1, 2]), json!([]), json!(true), json!({})] {
            let shape = classify(Some(&payload));
            assert_eq!(shape.kind(), ErrorShapeKind::Unknown, "payload: {payload}");
            assert!(matches!(shape, ErrorShape::Unknown { absent: false, .. }));
        }
    }

    #[test]
    fn test_blank_scalars_count_as_absent() {
        for payload in [json!(false), json!(0), json!(0.0), json!("")] {
            assert_eq!(
                classify(Some(&payload)),
                ErrorShape::Unknown {
                    title: None,
                    absent: true
                },
                "payload: {payload}"
            );
        }
    }

    #[test]
    fn test_coded_error_list() {
        let payload = json!({
            "status": 409,
            "errors": [
                {"code": "DeliveryFee.AlreadyExists", "description": "exists"},
                {"description": "second"}
            ]
        });
        let shape = classify(Some(&payload));
        assert_eq!(
            shape,
            ErrorShape::CodedErrorList {
                status: Some(409),
                entries: vec![
                    CodedError {
                        code: Some("DeliveryFee.AlreadyExists".into()),
                        description: Some("exists".into())
                    },
                    CodedError {
                        code: None,
                        description: Some("second".into())
                    },
                ],
            }
        );
    }

    #[test]
    fn test_empty_error_list_is_coded() {
        let shape = classify(Some(&json!({"errors": []})));
        assert_eq!(
            shape,
            ErrorShape::CodedErrorList {
                status: None,
                entries: vec![]
            }
        );
    }

    #[test]
    fn test_list_of_strings_is_not_coded() {
        let shape = classify(Some(&json!({"errors": ["bad"], "message": "Bad request"})));
        assert_eq!(shape.kind(), ErrorShapeKind::PlainMessage);
    }

    #[test]
    fn test_field_validation_map_keeps_order_and_normalizes_values() {
        let payload = json!({
            "title": "One or more validation errors occurred.",
            "errors": {
                "Password": ["too short", 7],
                "": "general",
                "Email": null,
                "Extra": {"nested": true}
            }
        });
        let shape = classify(Some(&payload));
        assert_eq!(shape.title(), Some("One or more validation errors occurred."));
        match shape {
            ErrorShape::FieldValidationMap { fields, .. } => {
                assert_eq!(
                    fields,
                    vec![
                        ("Password".to_string(), vec!["too short".to_string(), "7".to_string()]),
                        ("".to_string(), vec!["general".to_string()]),
                        ("Email".to_string(), vec![]),
                        ("Extra".to_string(), vec![r#"{"nested":true}"#.to_string()]),
                    ]
                );
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn test_plain_message() {
        let shape = classify(Some(&json!({"message": "Network Error", "title": "t"})));
        assert_eq!(
            shape,
            ErrorShape::PlainMessage {
                message: "Network Error".into(),
                title: Some("t".into())
            }
        );
    }

    #[test]
    fn test_non_string_message_is_unknown() {
        let shape = classify(Some(&json!({"message": 5, "title": "Server Error"})));
        assert_eq!(
            shape,
            ErrorShape::Unknown {
                title: Some("Server Error".into()),
                absent: false
            }
        );
    }

    #[test]
    fn test_parse_payload() {
        assert_eq!(parse_payload(""), None);
        assert_eq!(parse_payload("  \n"), None);
        assert_eq!(parse_payload("<html>502 Bad Gateway</html>"), None);
        assert_eq!(parse_payload(r#"{"message":"x"}"#), Some(json!({"message": "x"})));
    }
}
