// ABOUTME: Typed schema model built from the raw API schema descriptors
// ABOUTME: Closed field type enum, segment classification and the per-run schema cache

use crate::model::{FieldSchema, SchemaResponse};
use crate::{Error, Result};
use std::collections::HashMap;

/// Item type of a `list` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListItemType {
    String,
    Html,
    Number,
    Boolean,
    Date,
    Node,
    Micronode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Html,
    Number,
    Boolean,
    Date,
    Node,
    Micronode,
    Binary,
    List(ListItemType),
    /// A type tag this exporter does not understand. Kept so that only
    /// projecting such a field fails, not loading the schema.
    Unsupported(String),
}

impl ListItemType {
    fn from_tag(tag: &str) -> Option<Self> {
        let item = match tag {
            "string" => ListItemType::String,
            "html" => ListItemType::Html,
            "number" => ListItemType::Number,
            "boolean" => ListItemType::Boolean,
            "date" => ListItemType::Date,
            "node" => ListItemType::Node,
            "micronode" => ListItemType::Micronode,
            _ => return None,
        };
        Some(item)
    }
}

impl FieldType {
    pub fn from_descriptor(raw: &FieldSchema) -> Self {
        match raw.type_tag.as_str() {
            "string" => FieldType::String,
            "html" => FieldType::Html,
            "number" => FieldType::Number,
            "boolean" => FieldType::Boolean,
            "date" => FieldType::Date,
            "node" => FieldType::Node,
            "micronode" => FieldType::Micronode,
            "binary" => FieldType::Binary,
            "list" => {
                let tag = raw.list_type.as_deref().unwrap_or_default();
                ListItemType::from_tag(tag)
                    .map(FieldType::List)
                    .unwrap_or_else(|| FieldType::Unsupported(format!("list<{}>", tag)))
            }
            other => FieldType::Unsupported(other.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
}

#[derive(Debug, Clone)]
pub struct Schema {
    pub uuid: String,
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    pub segment_field: Option<String>,
    pub container: bool,
}

/// How a node of a given schema lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Raw copy of the named binary field.
    Binary(String),
    /// Markdown document with front matter.
    Textual,
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn classify_segment(&self) -> Result<Segment> {
        let Some(key) = self.segment_field.as_deref() else {
            return Ok(Segment::Textual);
        };

        let descriptor = self.field(key).ok_or_else(|| {
            Error::Schema(format!(
                "segment field {} is not declared in schema {}",
                key, self.name
            ))
        })?;

        Ok(match descriptor.field_type {
            FieldType::Binary => Segment::Binary(descriptor.name.clone()),
            _ => Segment::Textual,
        })
    }
}

impl From<SchemaResponse> for Schema {
    fn from(raw: SchemaResponse) -> Self {
        let fields = raw
            .fields
            .iter()
            .map(|f| FieldDescriptor {
                name: f.name.clone(),
                field_type: FieldType::from_descriptor(f),
            })
            .collect();

        Schema {
            uuid: raw.uuid,
            name: raw.name,
            fields,
            segment_field: raw.segment_field,
            container: raw.container,
        }
    }
}

/// Schemas keyed by uuid, built once before any node is visited.
#[derive(Debug, Default)]
pub struct SchemaCache {
    schemas: HashMap<String, Schema>,
}

impl SchemaCache {
    pub fn build(raw: Vec<SchemaResponse>) -> Self {
        let schemas = raw
            .into_iter()
            .map(Schema::from)
            .map(|schema| (schema.uuid.clone(), schema))
            .collect();
        SchemaCache { schemas }
    }

    pub fn get(&self, uuid: &str) -> Result<&Schema> {
        self.schemas
            .get(uuid)
            .ok_or_else(|| Error::Schema(format!("unknown schema {}", uuid)))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
