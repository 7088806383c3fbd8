//! JSONL (JSON Lines) populator for seed data.
//!
//! This crate writes generated form submissions to JSONL files, one
//! submission object per line, for seed scripts and test fixtures.
//!
//! # Example
//!
//! ```ignore
//! use form_schema::Form;
//! use submission_populate_jsonl::JsonlPopulator;
//!
//! let form = Form::from_file("form.json")?;
//! let mut populator = JsonlPopulator::new(form, 42).as_stored_submission();
//!
//! let metrics = populator.populate("submissions.jsonl", 1000)?;
//! println!("Generated {} rows in {:?}", metrics.rows_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::{parse_override, CommonGenerateArgs, JSONLPopulateArgs};
pub use error::JsonlPopulatorError;
pub use populator::{JsonlPopulator, PopulateMetrics};
