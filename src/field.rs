// ABOUTME: Typed field values decoded from raw record JSON
// ABOUTME: A descriptor's type decides how a value is read; null means absent

use crate::schema::{FieldType, ListItemType};
use crate::{Error, Result};
use serde_json::{Number, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Html(String),
    Number(Number),
    Boolean(bool),
    Date(String),
    /// Resolved path of the referenced node, if the API resolved one.
    Node(Option<String>),
    /// Uuid of the embedded micronode.
    Micronode(Option<String>),
    Binary,
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Decode `raw` as `field_type`. Absent and `null` both yield `Ok(None)`;
    /// an unsupported type fails whatever the value.
    pub fn decode(field: &str, field_type: &FieldType, raw: Option<&Value>) -> Result<Option<Self>> {
        if let FieldType::Unsupported(type_tag) = field_type {
            return Err(unsupported(field, type_tag));
        }

        let raw = match raw {
            None | Some(Value::Null) => return Ok(None),
            Some(v) => v,
        };

        let value = match field_type {
            FieldType::String => FieldValue::String(text(field, raw)?),
            FieldType::Html => FieldValue::Html(text(field, raw)?),
            FieldType::Date => FieldValue::Date(text(field, raw)?),
            FieldType::Number => FieldValue::Number(number(field, raw)?),
            FieldType::Boolean => FieldValue::Boolean(boolean(field, raw)?),
            FieldType::Node => FieldValue::Node(reference(field, raw, "path")?),
            FieldType::Micronode => FieldValue::Micronode(reference(field, raw, "uuid")?),
            FieldType::Binary => FieldValue::Binary,
            FieldType::Unsupported(type_tag) => return Err(unsupported(field, type_tag)),
            FieldType::List(item_type) => {
                let items = raw.as_array().ok_or_else(|| Error::FieldValue {
                    field: field.into(),
                    expected: "list",
                })?;
                let decoded = items
                    .iter()
                    .map(|item| decode_item(field, *item_type, item))
                    .collect::<Result<Vec<_>>>()?;
                FieldValue::List(decoded)
            }
        };
        Ok(Some(value))
    }
}

fn decode_item(field: &str, item_type: ListItemType, raw: &Value) -> Result<FieldValue> {
    Ok(match item_type {
        ListItemType::String => FieldValue::String(text(field, raw)?),
        ListItemType::Html => FieldValue::Html(text(field, raw)?),
        ListItemType::Date => FieldValue::Date(text(field, raw)?),
        ListItemType::Number => FieldValue::Number(number(field, raw)?),
        ListItemType::Boolean => FieldValue::Boolean(boolean(field, raw)?),
        ListItemType::Node => FieldValue::Node(reference(field, raw, "path")?),
        // Micronode lists only ever render as a placeholder.
        ListItemType::Micronode => FieldValue::Micronode(None),
    })
}

fn unsupported(field: &str, type_tag: &str) -> Error {
    Error::UnsupportedFieldType {
        field: field.into(),
        type_tag: type_tag.into(),
    }
}

fn text(field: &str, raw: &Value) -> Result<String> {
    raw.as_str().map(str::to_owned).ok_or_else(|| Error::FieldValue {
        field: field.into(),
        expected: "string",
    })
}

fn number(field: &str, raw: &Value) -> Result<Number> {
    match raw {
        Value::Number(n) => Ok(n.clone()),
        _ => Err(Error::FieldValue {
            field: field.into(),
            expected: "number",
        }),
    }
}

fn boolean(field: &str, raw: &Value) -> Result<bool> {
    raw.as_bool().ok_or_else(|| Error::FieldValue {
        field: field.into(),
        expected: "boolean",
    })
}

fn reference(field: &str, raw: &Value, key: &str) -> Result<Option<String>> {
    let object = raw.as_object().ok_or_else(|| Error::FieldValue {
        field: field.into(),
        expected: "reference",
    })?;
    Ok(object.get(key).and_then(Value::as_str).map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_and_null_are_none() {
        assert_eq!(FieldValue::decode("a", &FieldType::String, None).unwrap(), None);
        assert_eq!(
            FieldValue::decode("a", &FieldType::Number, Some(&Value::Null)).unwrap(),
            None
        );
    }

    #[test]
    fn test_decode_node_reference() {
        let raw = json!({"uuid": "n2", "path": "/about"});
        let value = FieldValue::decode("link", &FieldType::Node, Some(&raw)).unwrap();
        assert_eq!(value, Some(FieldValue::Node(Some("/about".into()))));
    }

    #[test]
    fn test_decode_micronode_uuid() {
        let raw = json!({"uuid": "m1", "microschema": {"name": "vcard"}, "fields": {}});
        let value = FieldValue::decode("card", &FieldType::Micronode, Some(&raw)).unwrap();
        assert_eq!(value, Some(FieldValue::Micronode(Some("m1".into()))));
    }

    #[test]
    fn test_decode_number_list() {
        let raw = json!([1, 2.5]);
        let value = FieldValue::decode("n", &FieldType::List(ListItemType::Number), Some(&raw))
            .unwrap()
            .unwrap();
        match value {
            FieldValue::List(items) => assert_eq!(items.len(), 2),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_shape_is_error() {
        let raw = json!(42);
        let err = FieldValue::decode("title", &FieldType::String, Some(&raw)).unwrap_err();
        assert!(matches!(err, Error::FieldValue { expected: "string", .. }));

        let raw = json!("nope");
        let err = FieldValue::decode("tags", &FieldType::List(ListItemType::String), Some(&raw));
        assert!(matches!(err, Err(Error::FieldValue { expected: "list", .. })));
    }

    #[test]
    fn test_unsupported_type_fails_even_without_value() {
        let ty = FieldType::Unsupported("s3binary".into());
        let err = FieldValue::decode("s3", &ty, None).unwrap_err();
        match err {
            Error::UnsupportedFieldType { field, type_tag } => {
                assert_eq!(field, "s3");
                assert_eq!(type_tag, "s3binary");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_micronode_list_items_are_not_inspected() {
        let raw = json!([{"uuid": "m1"}, "not-an-object", 7]);
        let value = FieldValue::decode("cards", &FieldType::List(ListItemType::Micronode), Some(&raw))
            .unwrap()
            .unwrap();
        assert_eq!(
            value,
            FieldValue::List(vec![FieldValue::Micronode(None); 3])
        );
    }

    #[test]
    fn test_binary_is_opaque() {
        let raw = json!({"fileName": "a.jpg", "fileSize": 12});
        let value = FieldValue::decode("image", &FieldType::Binary, Some(&raw)).unwrap();
        assert_eq!(value, Some(FieldValue::Binary));
    }
}
