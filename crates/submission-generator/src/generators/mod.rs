//! Individual answer generators for the different field kinds.
//!
//! This module maps each [`FieldKind`] to the generation logic in the
//! sub-modules.

pub mod choice;
pub mod date;
pub mod numeric;
pub mod text;

use chrono::NaiveDate;
use form_schema::{AnswerValue, FieldKind, FormField};
use rand::Rng;
use std::collections::HashSet;
use tracing::trace;

/// State carried across generation calls of one generator.
#[derive(Debug, Clone)]
pub struct GenerationState {
    /// Emails handed out so far
    pub emails: HashSet<String>,
    /// Inclusive window for date answers
    pub date_range: (NaiveDate, NaiveDate),
}

impl GenerationState {
    pub fn new(date_range: (NaiveDate, NaiveDate)) -> Self {
        Self {
            emails: HashSet::new(),
            date_range,
        }
    }
}

impl Default for GenerationState {
    fn default() -> Self {
        Self::new(date::default_date_range())
    }
}

/// Generate an answer for a field based on its kind.
pub fn generate_answer<R: Rng>(
    field: &FormField,
    rng: &mut R,
    state: &mut GenerationState,
) -> AnswerValue {
    match &field.kind {
        FieldKind::Text => text::generate_name(rng),

        FieldKind::Email => text::generate_unique_email(rng, &mut state.emails),

        FieldKind::Checkbox => AnswerValue::Bool(rng.gen_bool(0.5)),

        FieldKind::Number => {
            numeric::generate_int_range(rng, numeric::NUMBER_MIN, numeric::NUMBER_MAX)
        }

        FieldKind::Rating | FieldKind::Scale => {
            numeric::generate_int_range(rng, numeric::RATING_MIN, numeric::RATING_MAX)
        }

        FieldKind::Slider => {
            numeric::generate_int_range(rng, numeric::SLIDER_MIN, numeric::SLIDER_MAX)
        }

        FieldKind::Url => text::generate_url(rng),

        FieldKind::PhoneNumber => AnswerValue::Text(text::PHONE_NUMBER.to_string()),

        FieldKind::Date => {
            let (start, end) = state.date_range;
            date::generate_date(rng, start, end)
        }

        FieldKind::Select => choice::generate_select(rng, &field.options),

        FieldKind::MultiSelect => choice::generate_multi_select(rng, &field.options),

        // Upload answers are not generated
        FieldKind::Files => AnswerValue::Null,

        FieldKind::Unsupported(tag) => {
            trace!("Field '{}' has unsupported type '{}', answering null", field.id, tag);
            AnswerValue::Null
        }
    }
}
