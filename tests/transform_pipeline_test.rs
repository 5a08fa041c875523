use anyhow::Result;
use std::fs;
use tempfile::tempdir;

use gva_transform::config::Config;
use gva_transform::pipeline::Pipeline;
use gva_transform::types::{AgeDistributionRow, GenderRow, GunCountRow, GunTypeRow};

const HEADER: &str =
    "participant_age,participant_status,participant_type,participant_gender,gun_type,n_guns_involved\n";

fn read_rows<T: serde::de::DeserializeOwned>(path: std::path::PathBuf) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    Ok(reader.deserialize().collect::<std::result::Result<_, _>>()?)
}

#[test]
fn transform_produces_all_five_tables_from_two_input_files() -> Result<()> {
    let dir = tempdir()?;
    let input_1 = dir.path().join("cleaned_data_1.csv");
    let input_2 = dir.path().join("cleaned_data_2.csv");
    let output_dir = dir.path().join("data_outputs");

    // Record A: a 34-year-old male suspect and a 12-year-old female victim.
    fs::write(
        &input_1,
        format!(
            "{HEADER}\"['34', '12']\",,\"['Subject-Suspect', 'Victim']\",\"['Male', 'Female']\",,\n"
        ),
    )?;
    // Record B: no participant lists, three guns involved.
    fs::write(&input_2, format!("{HEADER}[],,,,,3\n"))?;

    let config = Config {
        input_files: vec![
            input_1.display().to_string(),
            input_2.display().to_string(),
        ],
        output_directory: output_dir.display().to_string(),
    };

    let summary = Pipeline::run(&config)?;
    assert_eq!(summary.records_loaded, 2);
    assert_eq!(summary.tables_written.len(), 5);

    let age_rows: Vec<AgeDistributionRow> = read_rows(output_dir.join("age_distribution_df.csv"))?;
    assert_eq!(
        age_rows,
        vec![
            AgeDistributionRow {
                age: 12,
                age_counts: 1,
                victim_age: 12,
                victim_age_counts: 1,
                suspect_age: 0,
                suspect_age_counts: 0,
            },
            AgeDistributionRow {
                age: 34,
                age_counts: 1,
                victim_age: 0,
                victim_age_counts: 0,
                suspect_age: 34,
                suspect_age_counts: 1,
            },
        ]
    );

    // No gun types in either record: headed but empty table.
    let gun_type_rows: Vec<GunTypeRow> = read_rows(output_dir.join("gun_type_df.csv"))?;
    assert!(gun_type_rows.is_empty());

    let gun_count_rows: Vec<GunCountRow> = read_rows(output_dir.join("gun_count_df.csv"))?;
    let buckets: Vec<(&str, u64)> = gun_count_rows
        .iter()
        .map(|r| (r.num_of_guns.as_str(), r.counts))
        .collect();
    assert_eq!(
        buckets,
        vec![("1", 0), ("2", 0), ("3", 1), ("4", 0), ("5+", 0)]
    );

    let suspect_rows: Vec<GenderRow> = read_rows(output_dir.join("suspect_gender_df.csv"))?;
    assert_eq!(
        suspect_rows,
        vec![
            GenderRow {
                gender: "Male".to_string(),
                gender_counts: 1,
            },
            GenderRow {
                gender: "Female".to_string(),
                gender_counts: 0,
            },
        ]
    );

    let victim_rows: Vec<GenderRow> = read_rows(output_dir.join("victim_gender_df.csv"))?;
    assert_eq!(
        victim_rows,
        vec![
            GenderRow {
                gender: "Male".to_string(),
                gender_counts: 0,
            },
            GenderRow {
                gender: "Female".to_string(),
                gender_counts: 1,
            },
        ]
    );

    Ok(())
}

#[test]
fn malformed_list_literal_aborts_the_run_with_no_output() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("cleaned_data_1.csv");
    let output_dir = dir.path().join("data_outputs");

    // participant_age is not a bracketed list literal.
    fs::write(&input, format!("{HEADER}\"34, 12\",,,,,\n"))?;

    let config = Config {
        input_files: vec![input.display().to_string()],
        output_directory: output_dir.display().to_string(),
    };

    let result = Pipeline::run(&config);
    assert!(result.is_err());
    // Loading failed before the sink was created: no partial output.
    assert!(!output_dir.exists());

    Ok(())
}

#[test]
fn gun_types_are_normalized_and_ordered_by_count() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("cleaned_data_1.csv");
    let output_dir = dir.path().join("data_outputs");

    fs::write(
        &input,
        format!(
            "{HEADER}\
             ,,,,\"['9mm', '9mm', 'Unknown', nan]\",\n\
             ,,,,\"['12 gauge']\",\n"
        ),
    )?;

    let config = Config {
        input_files: vec![input.display().to_string()],
        output_directory: output_dir.display().to_string(),
    };
    Pipeline::run(&config)?;

    let rows: Vec<GunTypeRow> = read_rows(output_dir.join("gun_type_df.csv"))?;
    let table: Vec<(&str, u64)> = rows
        .iter()
        .map(|r| (r.gun_type.as_str(), r.gun_type_counts))
        .collect();
    // The missing element contributes nothing; ties order by label.
    assert_eq!(
        table,
        vec![("Handgun", 2), ("Shotgun", 1), ("Unknown", 1)]
    );

    Ok(())
}
