//! CLI argument definitions for submission generation.

use chrono::NaiveDate;
use clap::Args;
use form_schema::AnswerValue;
use std::path::PathBuf;
use submission_generator::generators::date::default_date_range;

/// Arguments shared by every command that generates submissions.
#[derive(Args, Clone, Debug)]
pub struct CommonGenerateArgs {
    /// Path to the form schema (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, short = 'f', env = "FORM_SEED_FORM")]
    pub form: PathBuf,

    /// Number of submissions to generate
    #[arg(long, default_value = "1", env = "FORM_SEED_COUNT")]
    pub count: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42", env = "FORM_SEED_SEED")]
    pub seed: u64,

    /// Produce the stored submission shape instead of the answer endpoint shape
    #[arg(long)]
    pub stored: bool,

    /// Fixed answer for a field, as FIELD_ID=VALUE (VALUE is parsed as JSON when possible)
    #[arg(long = "set", value_name = "FIELD_ID=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(String, AnswerValue)>,

    /// Reject forms containing field types the generator does not know
    #[arg(long)]
    pub strict: bool,

    /// Earliest date answer, YYYY-MM-DD (default: 1970-01-01)
    #[arg(long, value_name = "YYYY-MM-DD", env = "FORM_SEED_DATE_FROM")]
    pub date_from: Option<NaiveDate>,

    /// Latest date answer, YYYY-MM-DD (default: today, so set it to keep output stable across days)
    #[arg(long, value_name = "YYYY-MM-DD", env = "FORM_SEED_DATE_TO")]
    pub date_to: Option<NaiveDate>,
}

impl CommonGenerateArgs {
    /// Date window requested on the command line, if any bound was given.
    ///
    /// A missing bound falls back to the generator's default for that side.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        if self.date_from.is_none() && self.date_to.is_none() {
            return None;
        }
        let (default_start, default_end) = default_date_range();
        Some((
            self.date_from.unwrap_or(default_start),
            self.date_to.unwrap_or(default_end),
        ))
    }
}

/// JSONL-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct JSONLPopulateArgs {
    /// Output JSONL file
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Append to the output file instead of replacing it
    #[arg(long)]
    pub append: bool,

    #[command(flatten)]
    pub common: CommonGenerateArgs,
}

/// Parse a `FIELD_ID=VALUE` override.
///
/// `VALUE` is read as JSON (`true`, `3`, `["a","b"]`, `null`, ...); anything
/// that is not valid JSON is taken as a plain string.
pub fn parse_override(s: &str) -> Result<(String, AnswerValue), String> {
    let (id, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid override '{s}': expected FIELD_ID=VALUE"))?;
    if id.is_empty() {
        return Err(format!("invalid override '{s}': empty field id"));
    }

    let value = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => AnswerValue::from(json),
        Err(_) => AnswerValue::Text(raw.to_string()),
    };
    Ok((id.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_override_plain_string() {
        assert_eq!(
            parse_override("f1=hello world").unwrap(),
            ("f1".to_string(), AnswerValue::from("hello world"))
        );
    }

    #[test]
    fn test_parse_override_json_values() {
        assert_eq!(parse_override("f=true").unwrap().1, AnswerValue::Bool(true));
        assert_eq!(parse_override("f=12").unwrap().1, AnswerValue::Int(12));
        assert_eq!(parse_override("f=null").unwrap().1, AnswerValue::Null);
        assert_eq!(
            parse_override(r#"f=["a","b"]"#).unwrap().1,
            AnswerValue::Json(json!(["a", "b"]))
        );
        assert_eq!(parse_override(r#"f="7""#).unwrap().1, AnswerValue::from("7"));
    }

    #[test]
    fn test_parse_override_keeps_later_equals() {
        let (id, value) = parse_override("url=https://x.test/?a=b").unwrap();
        assert_eq!(id, "url");
        assert_eq!(value, AnswerValue::from("https://x.test/?a=b"));
    }

    fn args_with_dates(from: Option<&str>, to: Option<&str>) -> CommonGenerateArgs {
        CommonGenerateArgs {
            form: PathBuf::from("form.json"),
            count: 1,
            seed: 42,
            stored: false,
            overrides: vec![],
            strict: false,
            date_from: from.map(|d| d.parse().unwrap()),
            date_to: to.map(|d| d.parse().unwrap()),
        }
    }

    #[test]
    fn test_date_range_unset() {
        assert_eq!(args_with_dates(None, None).date_range(), None);
    }

    #[test]
    fn test_date_range_both_bounds() {
        let range = args_with_dates(Some("2020-01-01"), Some("2020-12-31")).date_range();
        assert_eq!(
            range,
            Some((
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
            ))
        );
    }

    #[test]
    fn test_date_range_missing_start_uses_epoch() {
        let (start, end) = args_with_dates(None, Some("2001-02-03")).date_range().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2001, 2, 3).unwrap());
    }

    #[test]
    fn test_parse_override_errors() {
        assert!(parse_override("no-separator").is_err());
        assert!(parse_override("=value").is_err());
    }
}
