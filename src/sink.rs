use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;

pub const AGE_DISTRIBUTION_FILE: &str = "age_distribution_df.csv";
pub const GUN_TYPE_FILE: &str = "gun_type_df.csv";
pub const GUN_COUNT_FILE: &str = "gun_count_df.csv";
pub const SUSPECT_GENDER_FILE: &str = "suspect_gender_df.csv";
pub const VICTIM_GENDER_FILE: &str = "victim_gender_df.csv";

pub const AGE_DISTRIBUTION_HEADERS: [&str; 6] = [
    "Age",
    "Age_Counts",
    "Victim_Age",
    "Victim_Age_Counts",
    "Suspect_Age",
    "Suspect_Age_Counts",
];
pub const GUN_TYPE_HEADERS: [&str; 2] = ["gun_type", "gun_type_counts"];
pub const GUN_COUNT_HEADERS: [&str; 2] = ["num_of_guns", "counts"];
pub const GENDER_HEADERS: [&str; 2] = ["gender", "gender_counts"];

/// Writes count tables as headed CSV files (no row index) under one output
/// directory.
pub struct CsvSink {
    output_dir: PathBuf,
}

impl CsvSink {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self> {
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        })
    }

    /// Writes one table. The header row is written explicitly so that an
    /// empty table still produces a headed file.
    pub fn write_table<T: Serialize>(
        &self,
        file_name: &str,
        headers: &[&str],
        rows: &[T],
    ) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        writer.write_record(headers)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!(path = %path.display(), rows = rows.len(), "wrote output table");
        Ok(path)
    }
}
