//! Form schema definitions.
//!
//! A [`Form`] is the read-only input of the generator: an ordered list of
//! fields, each with a type tag and, for choice fields, its options. Schemas
//! are loaded from JSON (the form builder's own representation) or YAML
//! (handier for hand-written fixtures).

use crate::types::FieldKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Field uses a type tag the generator does not know
    #[error("Field '{field}' has unsupported type '{tag}'")]
    UnsupportedFieldType { field: String, tag: String },

    /// Two fields share the same id
    #[error("Duplicate field id: {0}")]
    DuplicateFieldId(String),
}

// ============================================================================
// Schema Types
// ============================================================================

/// A selectable choice of a select or multi_select field.
///
/// Only `id` takes part in generation; the rest of the option (label,
/// color, ...) is carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Option identifier, the value stored in answers
    pub id: String,

    /// Display metadata
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl FieldOption {
    /// Create an option with no display metadata.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: serde_json::Map::new(),
        }
    }
}

/// One question of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Stable field identifier, the key of the answer
    pub id: String,

    /// Field type tag
    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Options of choice fields, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
}

impl FormField {
    /// Create a field without options.
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            name: None,
            options: Vec::new(),
        }
    }

    /// Attach options to the field.
    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    /// Ids of the field's options, in order.
    pub fn option_ids(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.id.as_str()).collect()
    }
}

/// A form definition: the ordered list of its fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    /// Form identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Form title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Field definitions, in display order
    #[serde(default)]
    pub properties: Vec<FormField>,
}

impl Form {
    /// Create a form from a list of fields.
    pub fn new(properties: Vec<FormField>) -> Self {
        Self {
            id: None,
            title: None,
            properties,
        }
    }

    /// Load a form from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Parse a form from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a form from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Get a field by id.
    pub fn get_field(&self, id: &str) -> Option<&FormField> {
        self.properties.iter().find(|f| f.id == id)
    }

    /// Get all field ids, in order.
    pub fn field_ids(&self) -> Vec<&str> {
        self.properties.iter().map(|f| f.id.as_str()).collect()
    }

    /// Fail on the first field whose type tag is not a known [`FieldKind`].
    pub fn ensure_supported(&self) -> Result<(), SchemaError> {
        match self.properties.iter().find(|f| !f.kind.is_supported()) {
            Some(field) => Err(SchemaError::UnsupportedFieldType {
                field: field.id.clone(),
                tag: field.kind.as_str().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Fail on the first field id that appears more than once.
    pub fn ensure_unique_ids(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.properties {
            if !seen.insert(field.id.as_str()) {
                return Err(SchemaError::DuplicateFieldId(field.id.clone()));
            }
        }
        Ok(())
    }
}
