//! form-seed library
//!
//! Command handlers behind the `form-seed` binary. The heavy lifting lives in
//! the workspace crates:
//!
//! - `form_schema` - Form, field and answer types
//! - `submission_generator` - Seeded answer generation
//! - `submission_populate_jsonl` - JSONL output
//!
//! # CLI Usage
//!
//! ```bash
//! # Print three submissions for a form
//! form-seed generate --form form.json --count 3 --seed 7
//!
//! # Write 1000 stored-shape submissions with a fixed answer for one field
//! form-seed populate jsonl --form form.yaml --output seed.jsonl \
//!   --count 1000 --stored --set consent=true
//! ```

use anyhow::Context;
use form_schema::Form;
use submission_populate_jsonl::{CommonGenerateArgs, JSONLPopulateArgs, JsonlPopulator, PopulateMetrics};

/// Load and check the form named by the arguments.
pub fn load_form(args: &CommonGenerateArgs) -> anyhow::Result<Form> {
    let form = Form::from_file(&args.form)
        .with_context(|| format!("Failed to load form from {:?}", args.form))?;

    form.ensure_unique_ids()
        .with_context(|| format!("Invalid form {:?}", args.form))?;
    if args.strict {
        form.ensure_supported()
            .with_context(|| format!("Form {:?} rejected in strict mode", args.form))?;
    }

    tracing::debug!(
        "Loaded form {:?} with {} fields",
        args.form,
        form.properties.len()
    );
    Ok(form)
}

/// Build a populator configured by the common arguments.
pub fn build_populator(form: Form, args: &CommonGenerateArgs) -> JsonlPopulator {
    let mut populator =
        JsonlPopulator::new(form, args.seed).with_overrides(args.overrides.clone());
    if let Some((start, end)) = args.date_range() {
        populator = populator.with_date_range(start, end);
    }
    if args.stored {
        populator.as_stored_submission()
    } else {
        populator
    }
}

/// Run the generate command: write submissions to `writer` as JSONL.
pub fn run_generate<W: std::io::Write>(
    args: &CommonGenerateArgs,
    writer: W,
) -> anyhow::Result<PopulateMetrics> {
    let form = load_form(args)?;
    let mut populator = build_populator(form, args);

    tracing::info!(
        "Generating {} submissions (seed={}, stored={})",
        args.count,
        args.seed,
        args.stored
    );

    populator
        .write_to(writer, args.count)
        .context("Failed to write submissions")
}

/// Run the populate jsonl command.
pub fn run_populate_jsonl(args: &JSONLPopulateArgs) -> anyhow::Result<PopulateMetrics> {
    let form = load_form(&args.common)?;
    let mut populator = build_populator(form, &args.common);

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {parent:?}"))?;
    }

    let result = if args.append {
        populator.populate_append(&args.output, args.common.count)
    } else {
        populator.populate(&args.output, args.common.count)
    };
    let metrics =
        result.with_context(|| format!("Failed to generate JSONL file {:?}", args.output))?;

    tracing::info!(
        "Generated {:?}: {} rows in {:?}",
        args.output,
        metrics.rows_written,
        metrics.total_duration
    );
    Ok(metrics)
}
