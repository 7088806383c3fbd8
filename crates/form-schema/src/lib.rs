//! Core types for the form-seed submission generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the populators:
//!
//! - [`FieldKind`] - Closed set of form field types
//! - [`Form`], [`FormField`], [`FieldOption`] - Form schema loaded from JSON or YAML
//! - [`AnswerValue`] - A single generated (or overridden) answer
//! - [`SubmissionData`] - Answers for one form fill-out, keyed by field id
//!
//! # Architecture
//!
//! ```text
//! form-schema (this crate)
//!    │
//!    └─── submission-generator       (fills SubmissionData from a Form)
//!            │
//!            └─── submission-populate-jsonl  (writes submissions to JSONL)
//! ```
//!
//! # Example
//!
//! ```rust
//! use form_schema::{FieldKind, Form};
//!
//! let form = Form::from_json(r#"{
//!     "properties": [
//!         { "id": "f1", "type": "checkbox" },
//!         { "id": "f2", "type": "select", "options": [{ "id": "o1" }, { "id": "o2" }] }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(form.get_field("f1").unwrap().kind, FieldKind::Checkbox);
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{FieldOption, Form, FormField, SchemaError};
pub use types::FieldKind;
pub use values::{AnswerValue, SubmissionData, SubmissionFormat};
