// ABOUTME: Projects one localized content record into Hugo output
// ABOUTME: Renders front matter documents and opens binary segment streams

use crate::api::ContentSource;
use crate::field::FieldValue;
use crate::model::NodeResponse;
use crate::schema::{FieldDescriptor, FieldType, ListItemType, Schema};
use crate::Result;
use std::io::Read;

pub const DOCUMENT_FILENAME: &str = "index.md";
pub const CONTAINER_FILENAME: &str = "_index.md";

const FIELD_PREFIX: &str = "fields_";

/// Container schemas become section indexes, everything else a leaf bundle.
pub fn output_filename(schema: &Schema) -> &'static str {
    if schema.container {
        CONTAINER_FILENAME
    } else {
        DOCUMENT_FILENAME
    }
}

pub fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}

fn quote(text: &str) -> String {
    format!("\"{}\"", escape(text))
}

/// Line-oriented front matter writer.
#[derive(Debug, Default)]
pub struct FrontMatter {
    buf: String,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_line(&mut self, key: &str, rendered: &str) {
        self.buf.push_str(key);
        self.buf.push_str(": ");
        self.buf.push_str(rendered);
        self.buf.push('\n');
    }

    pub fn push_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push_line(key, &quote(value));
        }
    }

    pub fn push_string_list<'a>(&mut self, key: &str, values: impl IntoIterator<Item = &'a str>) {
        let items: Vec<String> = values.into_iter().map(quote).collect();
        self.push_line(key, &format!("[{}]", items.join(",")));
    }

    /// Append the line for one schema field, or nothing when it has no value.
    /// A field of an unsupported type is an error even when it is empty.
    pub fn push_field(
        &mut self,
        descriptor: &FieldDescriptor,
        fields: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<()> {
        let value = FieldValue::decode(
            &descriptor.name,
            &descriptor.field_type,
            fields.get(&descriptor.name),
        )?;
        let Some(value) = value else {
            return Ok(());
        };

        let key = format!("{}{}", FIELD_PREFIX, descriptor.name);
        match (&descriptor.field_type, &value) {
            (FieldType::Binary, _) => {}
            (FieldType::List(ListItemType::Micronode), _) => self.push_line(&key, "[]"),
            (FieldType::List(_), FieldValue::List(items)) => {
                let rendered: Vec<String> = items
                    .iter()
                    .map(|item| render_scalar(item).unwrap_or_else(|| quote("")))
                    .collect();
                self.push_line(&key, &format!("[{}]", rendered.join(",")));
            }
            _ => {
                if let Some(rendered) = render_scalar(&value) {
                    self.push_line(&key, &rendered);
                }
            }
        }
        Ok(())
    }

    pub fn finish(self) -> String {
        format!("---\n{}---\n", self.buf)
    }
}

fn render_scalar(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::String(s) | FieldValue::Html(s) | FieldValue::Date(s) => Some(quote(s)),
        FieldValue::Number(n) => Some(n.to_string()),
        FieldValue::Boolean(b) => Some(b.to_string()),
        FieldValue::Node(reference) | FieldValue::Micronode(reference) => {
            reference.as_deref().map(quote)
        }
        FieldValue::Binary | FieldValue::List(_) => None,
    }
}

/// Render the complete front matter document for a textual node.
pub fn project_document(record: &NodeResponse, schema: &Schema) -> Result<String> {
    let mut fm = FrontMatter::new();

    fm.push_string("path", record.path.as_deref());
    fm.push_string("lang", record.language.as_deref());
    fm.push_string("version", record.version.as_deref());
    fm.push_string("displayField", record.display_field.as_deref());
    fm.push_string("edited", record.edited.as_deref());
    fm.push_string("created", record.created.as_deref());
    fm.push_string(
        "creator",
        record.creator.as_ref().and_then(|u| u.display_name()).as_deref(),
    );
    fm.push_string(
        "editor",
        record.editor.as_ref().and_then(|u| u.display_name()).as_deref(),
    );
    fm.push_string_list("tags", record.tags.iter().map(|t| t.name.as_str()));

    for descriptor in &schema.fields {
        fm.push_field(descriptor, &record.fields)?;
    }

    Ok(fm.finish())
}

/// Open the stored content of a binary segment field.
pub fn project_binary<'a>(
    source: &'a dyn ContentSource,
    project: &str,
    record: &NodeResponse,
    lang: &str,
    field_key: &str,
) -> Result<Box<dyn Read + 'a>> {
    let lang = record.language.as_deref().unwrap_or(lang);
    source.fetch_binary_stream(project, &record.uuid, lang, field_key)
}
