//! Submission data generator for form-seed.
//!
//! This crate provides the [`SubmissionDataGenerator`] which fills in a
//! plausible random answer for every field of a form. The generator owns a
//! seeded RNG, so the same form and seed always produce the same answers.
//!
//! # Architecture
//!
//! ```text
//! Form (JSON / YAML)
//!        │
//!        ▼
//! ┌──────────────────────────┐
//! │ SubmissionDataGenerator  │
//! │                          │
//! │  - form                  │
//! │  - format (answer/stored)│
//! │  - rng (StdRng)          │
//! │  - emitted emails        │
//! └────────────┬─────────────┘
//!              │  + overrides
//!              ▼
//!     SubmissionData { field id -> AnswerValue }
//! ```
//!
//! # Example
//!
//! ```rust
//! use form_schema::{AnswerValue, Form};
//! use submission_generator::SubmissionDataGenerator;
//!
//! let form = Form::from_json(r#"{ "properties": [
//!     { "id": "f1", "type": "checkbox" },
//!     { "id": "f2", "type": "select", "options": [{ "id": "o1" }, { "id": "o2" }] }
//! ] }"#).unwrap();
//!
//! let mut generator = SubmissionDataGenerator::new(form, 42);
//! let data = generator.generate_with([("f1".to_string(), AnswerValue::Bool(true))]);
//! assert_eq!(data.get("f1"), Some(&AnswerValue::Bool(true)));
//! ```
//!
//! # Field kinds
//!
//! - `text` - Person name
//! - `email` - Email address, unique per generator
//! - `checkbox` - Boolean
//! - `number` - Integer in `[0, 2147483647]`
//! - `rating`, `scale` - Integer in `[1, 5]`
//! - `slider` - Integer in `[0, 50]`
//! - `url` - Web address
//! - `phone_number` - Fixed phone number
//! - `date` - `YYYY-MM-DD` date
//! - `select` - One option id (null without options)
//! - `multi_select` - One to three option ids (empty without options)
//! - `files` - Null

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{generate_submission_data, SubmissionDataGenerator};
