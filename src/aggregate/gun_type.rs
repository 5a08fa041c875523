use std::collections::HashMap;

use crate::normalize::GunLabelNormalizer;
use crate::types::{GunTypeRow, IncidentRecord};

/// Counts canonical gun-type labels across all records, ordered by
/// descending count with ties broken by label for a deterministic table.
/// Elements marked missing inside a record's list contribute nothing.
pub fn gun_type_counts(
    records: &[IncidentRecord],
    normalizer: &GunLabelNormalizer,
) -> Vec<GunTypeRow> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for record in records {
        let Some(gun_types) = &record.gun_type else {
            continue;
        };
        for raw in gun_types.iter().flatten() {
            *counts.entry(normalizer.normalize(raw)).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<GunTypeRow> = counts
        .into_iter()
        .map(|(gun_type, gun_type_counts)| GunTypeRow {
            gun_type,
            gun_type_counts,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.gun_type_counts
            .cmp(&a.gun_type_counts)
            .then_with(|| a.gun_type.cmp(&b.gun_type))
    });
    rows
}
