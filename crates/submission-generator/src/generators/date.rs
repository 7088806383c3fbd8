//! Date answer generators.

use chrono::{Days, NaiveDate, Utc};
use form_schema::AnswerValue;
use rand::Rng;

/// Format of date answers.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default window for date answers: the Unix epoch through today (UTC).
pub fn default_date_range() -> (NaiveDate, NaiveDate) {
    (NaiveDate::default(), Utc::now().date_naive())
}

/// Generate a random date between `start` and `end` (inclusive).
///
/// If `start` is not before `end`, `start` is returned.
pub fn generate_date<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> AnswerValue {
    let span = (end - start).num_days();
    let date = if span <= 0 {
        start
    } else {
        let offset = rng.gen_range(0..=span) as u64;
        start.checked_add_days(Days::new(offset)).unwrap_or(start)
    };
    AnswerValue::Date(date.format(DATE_FORMAT).to_string())
}
