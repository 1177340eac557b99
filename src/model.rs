// ABOUTME: Serde data models for the content REST API responses
// ABOUTME: Tolerant parsing with optional fields and unknown keys ignored

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Paged list envelope used by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaResponse {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub container: bool,
    #[serde(default)]
    pub segment_field: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

/// Untyped field descriptor exactly as the API sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub list_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaReference {
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishStatus {
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReference {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserReference {
    /// First and last name glued together without a separator, the way the
    /// exported front matter has always carried it.
    pub fn display_name(&self) -> Option<String> {
        let first = self.first_name.as_deref()?;
        Some(format!(
            "{}{}",
            first,
            self.last_name.as_deref().unwrap_or_default()
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagReference {
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
}

/// One node, either as a list entry or as a localized content record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeResponse {
    pub uuid: String,
    pub schema: SchemaReference,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub available_languages: BTreeMap<String, PublishStatus>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub display_field: Option<String>,
    #[serde(default)]
    pub edited: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub creator: Option<UserReference>,
    #[serde(default)]
    pub editor: Option<UserReference>,
    #[serde(default)]
    pub tags: Vec<TagReference>,
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}
