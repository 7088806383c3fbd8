//! JSONL populator for generated submissions.

use crate::error::JsonlPopulatorError;
use chrono::NaiveDate;
use form_schema::{AnswerValue, Form};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use submission_generator::SubmissionDataGenerator;
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes generated submissions of one form as JSON Lines.
pub struct JsonlPopulator {
    generator: SubmissionDataGenerator,
    overrides: Vec<(String, AnswerValue)>,
}

impl JsonlPopulator {
    /// Create a new JSONL populator.
    ///
    /// # Arguments
    ///
    /// * `form` - Form whose fields are answered
    /// * `seed` - Random seed for deterministic generation
    pub fn new(form: Form, seed: u64) -> Self {
        Self {
            generator: SubmissionDataGenerator::new(form, seed),
            overrides: Vec::new(),
        }
    }

    /// Write submissions in the stored submission shape.
    pub fn as_stored_submission(mut self) -> Self {
        self.generator = self.generator.as_stored_submission();
        self
    }

    /// Apply the same overrides to every written submission.
    pub fn with_overrides(mut self, overrides: Vec<(String, AnswerValue)>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Restrict date answers to `start..=end`.
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.generator = self.generator.with_date_range(start, end);
        self
    }

    /// Number of submissions generated so far.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Get a reference to the form.
    pub fn form(&self) -> &Form {
        self.generator.form()
    }

    /// Generate a JSONL file with the specified number of submissions,
    /// replacing any existing file.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let output_path = output_path.as_ref();
        info!(
            "Generating JSONL file '{}' with {} submissions",
            output_path.display(),
            count
        );

        let file = File::create(output_path)?;
        let metrics = self.write_file(file, output_path, count)?;

        info!(
            "JSONL generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Append submissions to a JSONL file, creating it if needed.
    ///
    /// Generation continues from the current RNG state, so earlier and
    /// appended rows together match a single longer run.
    pub fn populate_append<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let output_path = output_path.as_ref();
        info!(
            "Appending {} submissions to JSONL file '{}' starting at index {}",
            count,
            output_path.display(),
            self.generator.current_index()
        );

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(output_path)?;
        let metrics = self.write_file(file, output_path, count)?;

        info!(
            "JSONL append complete: {} rows, total {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write submissions to any writer, one JSON object per line.
    pub fn write_to<W: Write>(
        &mut self,
        writer: W,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = self.write_rows(writer, count)?;
        metrics.total_duration = start_time.elapsed();
        Ok(metrics)
    }

    fn write_file(
        &mut self,
        file: File,
        output_path: &Path,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let start_time = Instant::now();
        let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let mut metrics = self.write_rows(writer, count)?;

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        Ok(metrics)
    }

    fn write_rows<W: Write>(
        &mut self,
        mut writer: W,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let mut metrics = PopulateMetrics::default();

        for _ in 0..count {
            let gen_start = Instant::now();
            let data = self.generator.generate_with(self.overrides.iter().cloned());
            metrics.generation_duration += gen_start.elapsed();

            let write_start = Instant::now();
            serde_json::to_writer(&mut writer, &data)?;
            writeln!(writer)?;
            metrics.write_duration += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        Ok(metrics)
    }
}
