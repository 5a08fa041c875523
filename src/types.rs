use serde::{Deserialize, Serialize};

/// One decoded incident row. List-encoded columns become ordered sequences
/// with a per-element presence flag; a column absent for the row stays `None`.
/// Within one record, `participant_age[i]`, `participant_type[i]` and
/// `participant_gender[i]` describe the same participant; the index is the
/// join key, and the three lists may legitimately differ in length.
#[derive(Debug, Clone, Default)]
pub struct IncidentRecord {
    pub participant_age: Option<Vec<Option<String>>>,
    pub participant_type: Option<Vec<Option<String>>>,
    pub participant_gender: Option<Vec<Option<String>>>,
    pub participant_status: Option<Vec<Option<String>>>,
    pub gun_type: Option<Vec<Option<String>>>,
    pub n_guns_involved: Option<f64>,
}

/// One row of the merged age distribution table. An age missing from the
/// victim (or suspect) population reports 0 in both that population's age
/// column and its count column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeDistributionRow {
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Age_Counts")]
    pub age_counts: u64,
    #[serde(rename = "Victim_Age")]
    pub victim_age: i64,
    #[serde(rename = "Victim_Age_Counts")]
    pub victim_age_counts: u64,
    #[serde(rename = "Suspect_Age")]
    pub suspect_age: i64,
    #[serde(rename = "Suspect_Age_Counts")]
    pub suspect_age_counts: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GunTypeRow {
    pub gun_type: String,
    pub gun_type_counts: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GunCountRow {
    pub num_of_guns: String,
    pub counts: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderRow {
    pub gender: String,
    pub gender_counts: u64,
}
