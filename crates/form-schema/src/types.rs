//! Field type tags.
//!
//! Forms arrive from the form builder with a free-form `type` string per
//! field. [`FieldKind`] maps the tags the generator understands onto variants
//! and keeps everything else in [`FieldKind::Unsupported`], so callers can
//! decide whether an unknown tag is acceptable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of a form field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    /// Free text, answered with a person's name
    Text,
    Email,
    Checkbox,
    /// Unbounded integer input
    Number,
    /// Star rating (1-5)
    Rating,
    /// Linear scale (1-5)
    Scale,
    /// Slider (0-50)
    Slider,
    Url,
    PhoneNumber,
    Date,
    /// Single choice among the field's options
    Select,
    /// Multiple choices among the field's options
    MultiSelect,
    /// File upload
    Files,
    /// Any tag not listed above, kept verbatim
    Unsupported(String),
}

impl FieldKind {
    /// The tag as written in the form schema.
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Number => "number",
            FieldKind::Rating => "rating",
            FieldKind::Scale => "scale",
            FieldKind::Slider => "slider",
            FieldKind::Url => "url",
            FieldKind::PhoneNumber => "phone_number",
            FieldKind::Date => "date",
            FieldKind::Select => "select",
            FieldKind::MultiSelect => "multi_select",
            FieldKind::Files => "files",
            FieldKind::Unsupported(tag) => tag,
        }
    }

    /// Whether answers for this kind are drawn from the field's options.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Select | FieldKind::MultiSelect)
    }

    /// Whether this is one of the known field kinds.
    pub fn is_supported(&self) -> bool {
        !matches!(self, FieldKind::Unsupported(_))
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "checkbox" => FieldKind::Checkbox,
            "number" => FieldKind::Number,
            "rating" => FieldKind::Rating,
            "scale" => FieldKind::Scale,
            "slider" => FieldKind::Slider,
            "url" => FieldKind::Url,
            "phone_number" => FieldKind::PhoneNumber,
            "date" => FieldKind::Date,
            "select" => FieldKind::Select,
            "multi_select" => FieldKind::MultiSelect,
            "files" => FieldKind::Files,
            other => FieldKind::Unsupported(other.to_string()),
        }
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        match FieldKind::from(tag.as_str()) {
            FieldKind::Unsupported(_) => FieldKind::Unsupported(tag),
            kind => kind,
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Unsupported(tag) => tag,
            kind => kind.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_TAGS: [&str; 13] = [
        "text",
        "email",
        "checkbox",
        "number",
        "rating",
        "scale",
        "slider",
        "url",
        "phone_number",
        "date",
        "select",
        "multi_select",
        "files",
    ];

    #[test]
    fn test_known_tags_are_supported() {
        for tag in KNOWN_TAGS {
            let kind = FieldKind::from(tag);
            assert!(kind.is_supported(), "{tag} should be supported");
            assert_eq!(kind.as_str(), tag);
        }
    }

    #[test]
    fn test_unknown_tag_is_kept() {
        let kind = FieldKind::from("signature".to_string());
        assert_eq!(kind, FieldKind::Unsupported("signature".to_string()));
        assert!(!kind.is_supported());
        assert_eq!(kind.to_string(), "signature");
    }

    #[test]
    fn test_is_choice() {
        assert!(FieldKind::Select.is_choice());
        assert!(FieldKind::MultiSelect.is_choice());
        assert!(!FieldKind::Checkbox.is_choice());
        assert!(!FieldKind::Files.is_choice());
    }

    #[test]
    fn test_serde_uses_plain_tag() {
        let kind: FieldKind = serde_json::from_str("\"phone_number\"").unwrap();
        assert_eq!(kind, FieldKind::PhoneNumber);
        assert_eq!(
            serde_json::to_string(&FieldKind::MultiSelect).unwrap(),
            "\"multi_select\""
        );
        let unknown: FieldKind = serde_json::from_str("\"matrix\"").unwrap();
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"matrix\"");
    }
}
