//! Main generator for producing submission data.

use crate::generators::{generate_answer, GenerationState};
use chrono::NaiveDate;
use form_schema::{AnswerValue, Form, SubmissionData, SubmissionFormat};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Generator that fills in random answers for a form.
///
/// The generator owns its RNG, so results are reproducible for a given seed
/// and form. Emails are unique across all calls on one generator.
pub struct SubmissionDataGenerator<R = StdRng> {
    /// Form whose fields are answered
    form: Form,
    /// Shape of the produced payload
    format: SubmissionFormat,
    /// Random number generator, seeded for reproducibility
    rng: R,
    /// Emitted emails and date window
    state: GenerationState,
    /// Number of submissions generated so far
    index: u64,
}

impl SubmissionDataGenerator<StdRng> {
    /// Create a new generator for the given form and seed.
    pub fn new(form: Form, seed: u64) -> Self {
        Self::with_rng(form, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SubmissionDataGenerator<R> {
    /// Create a new generator drawing from the given RNG.
    pub fn with_rng(form: Form, rng: R) -> Self {
        Self {
            form,
            format: SubmissionFormat::Answer,
            rng,
            state: GenerationState::default(),
            index: 0,
        }
    }

    /// Produce payloads in the shape stored in a submission record instead
    /// of the answer endpoint shape.
    pub fn as_stored_submission(mut self) -> Self {
        self.format = SubmissionFormat::Stored;
        self
    }

    /// Restrict date answers to `start..=end`.
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.state.date_range = (start, end);
        self
    }

    /// Shape of the produced payloads.
    pub fn format(&self) -> SubmissionFormat {
        self.format
    }

    /// Get a reference to the form.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Number of submissions generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate answers for every field of the form.
    pub fn generate(&mut self) -> SubmissionData {
        self.generate_with(std::iter::empty())
    }

    /// Generate answers for every field, then apply `overrides` on top.
    ///
    /// An override replaces the generated answer with the same field id;
    /// override keys that are not fields of the form are added as-is.
    pub fn generate_with<I>(&mut self, overrides: I) -> SubmissionData
    where
        I: IntoIterator<Item = (String, AnswerValue)>,
    {
        debug!(
            "Generating submission {} for {} fields ({:?} format)",
            self.index,
            self.form.properties.len(),
            self.format
        );

        let mut data = SubmissionData::new(self.format);
        for field in &self.form.properties {
            let value = generate_answer(field, &mut self.rng, &mut self.state);
            data.insert(field.id.clone(), value);
        }

        if self.format == SubmissionFormat::Stored {
            data = format_as_stored(data);
        }

        data.merge(overrides);
        self.index += 1;
        data
    }
}

/// Reshape an answer-endpoint payload into the stored submission shape.
///
/// Both shapes currently coincide.
fn format_as_stored(data: SubmissionData) -> SubmissionData {
    data
}

/// Generate one submission for `form` with a fresh generator seeded by `seed`.
pub fn generate_submission_data<I>(form: &Form, overrides: I, seed: u64) -> SubmissionData
where
    I: IntoIterator<Item = (String, AnswerValue)>,
{
    SubmissionDataGenerator::new(form.clone(), seed).generate_with(overrides)
}
