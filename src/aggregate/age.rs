use std::collections::{BTreeMap, BTreeSet};

use crate::correlate::correlate;
use crate::types::{AgeDistributionRow, IncidentRecord};

/// Builds the merged age distribution table: overall, victim and suspect age
/// counts outer-joined on the age key, rows ascending by age.
///
/// The overall population flattens every present age; victim and suspect
/// populations come from correlating ages against participant roles. An age
/// missing from a population is filled with 0 in both that population's age
/// column and its count column after the merge.
pub fn age_distribution(records: &[IncidentRecord]) -> Vec<AgeDistributionRow> {
    let mut overall: BTreeMap<i64, u64> = BTreeMap::new();
    let mut victims: BTreeMap<i64, u64> = BTreeMap::new();
    let mut suspects: BTreeMap<i64, u64> = BTreeMap::new();

    for record in records {
        let ages = record.participant_age.as_deref();
        let roles = record.participant_type.as_deref();

        if let Some(ages) = ages {
            for age in ages.iter().flatten().filter_map(|a| coerce_age(a)) {
                *overall.entry(age).or_insert(0) += 1;
            }
        }
        for age in correlate(ages, roles, "Victim") {
            if let Some(age) = coerce_age(&age) {
                *victims.entry(age).or_insert(0) += 1;
            }
        }
        for age in correlate(ages, roles, "Suspect") {
            if let Some(age) = coerce_age(&age) {
                *suspects.entry(age).or_insert(0) += 1;
            }
        }
    }

    let mut ages: BTreeSet<i64> = overall.keys().copied().collect();
    ages.extend(victims.keys().copied());
    ages.extend(suspects.keys().copied());

    ages.into_iter()
        .map(|age| {
            let victim = victims.get(&age).copied();
            let suspect = suspects.get(&age).copied();
            AgeDistributionRow {
                age,
                age_counts: overall.get(&age).copied().unwrap_or(0),
                victim_age: if victim.is_some() { age } else { 0 },
                victim_age_counts: victim.unwrap_or(0),
                suspect_age: if suspect.is_some() { age } else { 0 },
                suspect_age_counts: suspect.unwrap_or(0),
            }
        })
        .collect()
}

/// Ages arrive as strings; the cleaned data occasionally stores them as
/// floats ("34.0"). Values that cannot be coerced to a whole number are
/// dropped, not fatal.
fn coerce_age(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(age) = trimmed.parse::<i64>() {
        return Some(age);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && a.fract() == 0.0)
        .map(|a| a as i64)
}
