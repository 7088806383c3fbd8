//! Answer values and submission payloads.
//!
//! [`AnswerValue`] is what the generator produces for a single field and
//! what callers pass as overrides. [`SubmissionData`] collects the answers of
//! one form fill-out.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single answer.
///
/// Serializes to the plain JSON value, without any variant tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// No answer
    Null,

    /// Checkbox answer
    Bool(bool),

    /// Number, rating, scale and slider answers
    Int(i64),

    /// Text-like answers: names, emails, URLs, phone numbers
    Text(String),

    /// Calendar date in `YYYY-MM-DD` form
    Date(String),

    /// Selected option id
    Choice(String),

    /// Selected option ids
    Choices(Vec<String>),

    /// Arbitrary JSON, for overrides that fit no other variant
    Json(serde_json::Value),
}

impl AnswerValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a string slice.
    ///
    /// Works for text, date and single-choice answers.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Date(s) | Self::Choice(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a list of option ids.
    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            Self::Choices(ids) => Some(ids),
            _ => None,
        }
    }

    /// Convert to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Text(s) | Self::Date(s) | Self::Choice(s) => serde_json::Value::from(s.as_str()),
            Self::Choices(ids) => serde_json::Value::from(ids.clone()),
            Self::Json(v) => v.clone(),
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for AnswerValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for AnswerValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(ids: Vec<String>) -> Self {
        Self::Choices(ids)
    }
}

impl From<serde_json::Value> for AnswerValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Number(n) if n.is_i64() => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Json(serde_json::Value::Number(n)),
            },
            other => Self::Json(other),
        }
    }
}

impl<'de> Deserialize<'de> for AnswerValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

/// Shape of the generated payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionFormat {
    /// Payload as posted to the answer endpoint
    #[default]
    Answer,
    /// Payload as stored in a submission record
    Stored,
}

/// Answers of one form fill-out, keyed by field id.
///
/// Keys are kept sorted so serialized output is stable for a given seed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionData {
    #[serde(skip)]
    format: SubmissionFormat,
    fields: BTreeMap<String, AnswerValue>,
}

impl SubmissionData {
    /// Create an empty payload of the given shape.
    pub fn new(format: SubmissionFormat) -> Self {
        Self {
            format,
            fields: BTreeMap::new(),
        }
    }

    /// Shape this payload was produced in.
    pub fn format(&self) -> SubmissionFormat {
        self.format
    }

    /// Set the answer of a field, returning the previous one.
    pub fn insert(&mut self, field_id: impl Into<String>, value: AnswerValue) -> Option<AnswerValue> {
        self.fields.insert(field_id.into(), value)
    }

    /// Merge overrides on top; an override replaces any answer with the same key.
    pub fn merge<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (String, AnswerValue)>,
    {
        self.fields.extend(overrides);
    }

    /// Get the answer of a field.
    pub fn get(&self, field_id: &str) -> Option<&AnswerValue> {
        self.fields.get(field_id)
    }

    /// Check whether the payload has an entry for a field.
    pub fn contains(&self, field_id: &str) -> bool {
        self.fields.contains_key(field_id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All answers, sorted by field id.
    pub fn fields(&self) -> &BTreeMap<String, AnswerValue> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<String, AnswerValue> {
        self.fields
    }

    /// Convert to a JSON object.
    pub fn to_json(&self) -> serde_json::Map<String, serde_json::Value> {
        self.fields
            .iter()
            .map(|(id, value)| (id.clone(), value.to_json()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_value_serializes_untagged() {
        let values = vec![
            (AnswerValue::Null, json!(null)),
            (AnswerValue::Bool(true), json!(true)),
            (AnswerValue::Int(3), json!(3)),
            (AnswerValue::Text("Ada".to_string()), json!("Ada")),
            (AnswerValue::Date("2021-03-04".to_string()), json!("2021-03-04")),
            (AnswerValue::Choice("o1".to_string()), json!("o1")),
            (
                AnswerValue::Choices(vec!["o1".to_string(), "o2".to_string()]),
                json!(["o1", "o2"]),
            ),
            (AnswerValue::Json(json!({"a": 1})), json!({"a": 1})),
        ];

        for (value, expected) in values {
            assert_eq!(serde_json::to_value(&value).unwrap(), expected);
            assert_eq!(value.to_json(), expected);
        }
    }

    #[test]
    fn test_answer_value_from_json() {
        assert_eq!(AnswerValue::from(json!(null)), AnswerValue::Null);
        assert_eq!(AnswerValue::from(json!(false)), AnswerValue::Bool(false));
        assert_eq!(AnswerValue::from(json!(42)), AnswerValue::Int(42));
        assert_eq!(AnswerValue::from(json!("X")), AnswerValue::from("X"));
        assert_eq!(AnswerValue::from(json!(1.5)), AnswerValue::Json(json!(1.5)));
        assert_eq!(
            AnswerValue::from(json!(["a"])),
            AnswerValue::Json(json!(["a"]))
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(AnswerValue::Bool(true).as_bool(), Some(true));
        assert_eq!(AnswerValue::Int(5).as_i64(), Some(5));
        assert_eq!(AnswerValue::Choice("o1".to_string()).as_str(), Some("o1"));
        assert_eq!(AnswerValue::Int(5).as_str(), None);
        assert!(AnswerValue::Null.is_null());
        assert_eq!(
            AnswerValue::Choices(vec!["a".to_string()]).as_choices(),
            Some(&["a".to_string()][..])
        );
    }

    #[test]
    fn test_merge_overrides_win() {
        let mut data = SubmissionData::new(SubmissionFormat::Answer);
        data.insert("f1", AnswerValue::Bool(true));
        data.insert("f2", AnswerValue::Int(3));

        data.merge([
            ("f1".to_string(), AnswerValue::from("X")),
            ("extra".to_string(), AnswerValue::Null),
        ]);

        assert_eq!(data.len(), 3);
        assert_eq!(data.get("f1"), Some(&AnswerValue::from("X")));
        assert_eq!(data.get("f2"), Some(&AnswerValue::Int(3)));
        assert!(data.contains("extra"));
    }

    #[test]
    fn test_submission_data_serializes_as_map() {
        let mut data = SubmissionData::new(SubmissionFormat::Stored);
        data.insert("b", AnswerValue::Int(1));
        data.insert("a", AnswerValue::Null);

        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"a":null,"b":1}"#
        );
        assert_eq!(data.format(), SubmissionFormat::Stored);
        assert_eq!(serde_json::Value::Object(data.to_json()), json!({"a": null, "b": 1}));
    }
}
