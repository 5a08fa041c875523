use std::path::PathBuf;
use tracing::info;

use crate::aggregate::{age_distribution, gender_table, gun_count_table, gun_type_counts};
use crate::config::Config;
use crate::error::Result;
use crate::loader;
use crate::normalize::GunLabelNormalizer;
use crate::sink::{self, CsvSink};

/// Outcome of one full transform run.
#[derive(Debug)]
pub struct TransformSummary {
    pub records_loaded: usize,
    pub age_rows: usize,
    pub gun_type_rows: usize,
    pub tables_written: Vec<PathBuf>,
}

pub struct Pipeline;

impl Pipeline {
    /// Loads the cleaned incident table, runs the five aggregators over the
    /// same immutable view, and writes all five output tables. Any fatal
    /// error aborts the whole run; there is no partial-output mode.
    pub fn run(config: &Config) -> Result<TransformSummary> {
        let records = loader::load_incidents(&config.input_files)?;
        info!(records = records.len(), "incident table loaded");

        let normalizer = GunLabelNormalizer::new();
        let age_table = age_distribution(&records);
        let gun_type_table = gun_type_counts(&records, &normalizer);
        let gun_buckets_table = gun_count_table(&records);
        let suspect_gender_table = gender_table(&records, "Suspect");
        let victim_gender_table = gender_table(&records, "Victim");

        let sink = CsvSink::new(&config.output_directory)?;
        let tables_written = vec![
            sink.write_table(
                sink::AGE_DISTRIBUTION_FILE,
                &sink::AGE_DISTRIBUTION_HEADERS,
                &age_table,
            )?,
            sink.write_table(sink::GUN_TYPE_FILE, &sink::GUN_TYPE_HEADERS, &gun_type_table)?,
            sink.write_table(
                sink::GUN_COUNT_FILE,
                &sink::GUN_COUNT_HEADERS,
                &gun_buckets_table,
            )?,
            sink.write_table(
                sink::SUSPECT_GENDER_FILE,
                &sink::GENDER_HEADERS,
                &suspect_gender_table,
            )?,
            sink.write_table(
                sink::VICTIM_GENDER_FILE,
                &sink::GENDER_HEADERS,
                &victim_gender_table,
            )?,
        ];

        Ok(TransformSummary {
            records_loaded: records.len(),
            age_rows: age_table.len(),
            gun_type_rows: gun_type_table.len(),
            tables_written,
        })
    }
}
