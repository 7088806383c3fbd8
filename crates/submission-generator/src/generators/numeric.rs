//! Numeric answer generators.

use form_schema::AnswerValue;
use rand::Rng;

/// Bounds for `number` fields.
pub const NUMBER_MIN: i64 = 0;
pub const NUMBER_MAX: i64 = i32::MAX as i64;

/// Bounds for `rating` and `scale` fields.
pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

/// Bounds for `slider` fields.
pub const SLIDER_MIN: i64 = 0;
pub const SLIDER_MAX: i64 = 50;

/// Generate a random integer in the given range (inclusive).
///
/// Reversed bounds are swapped.
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> AnswerValue {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    AnswerValue::Int(rng.gen_range(lo..=hi))
}
