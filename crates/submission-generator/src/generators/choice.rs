//! Answer generators for select and multi_select fields.

use form_schema::{AnswerValue, FieldOption};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Most options a multi_select answer picks.
pub const MAX_MULTI_SELECT: usize = 3;

/// Pick one option id, or null when the field has no options.
pub fn generate_select<R: Rng>(rng: &mut R, options: &[FieldOption]) -> AnswerValue {
    match options.choose(rng) {
        Some(option) => AnswerValue::Choice(option.id.clone()),
        None => AnswerValue::Null,
    }
}

/// Pick between one and [`MAX_MULTI_SELECT`] distinct option ids.
///
/// Selected ids keep the order they have in `options`. Without options the
/// answer is an empty list.
pub fn generate_multi_select<R: Rng>(rng: &mut R, options: &[FieldOption]) -> AnswerValue {
    if options.is_empty() {
        return AnswerValue::Choices(vec![]);
    }

    let count = rng.gen_range(1..=options.len().min(MAX_MULTI_SELECT));

    let mut picked = index::sample(rng, options.len(), count).into_vec();
    picked.sort_unstable();

    AnswerValue::Choices(picked.into_iter().map(|i| options[i].id.clone()).collect())
}
