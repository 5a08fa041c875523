use crate::types::{GunCountRow, IncidentRecord};

/// Fixed output domain for the guns-per-incident table. Every label is
/// always emitted, in this order, even at count zero.
pub const GUN_COUNT_BUCKETS: [&str; 5] = ["1", "2", "3", "4", "5+"];

/// Buckets `n_guns_involved` per incident: 1 through 4 get their own bucket,
/// anything at 5 or above collapses into "5+". Absent values are dropped.
///
/// The buckets are an enumerated domain initialized to zero and then
/// incremented, so an empty bucket still reports a zero row instead of
/// disappearing from the table.
pub fn gun_count_table(records: &[IncidentRecord]) -> Vec<GunCountRow> {
    let mut counts = [0u64; GUN_COUNT_BUCKETS.len()];
    for record in records {
        let Some(n) = record.n_guns_involved else {
            continue;
        };
        if !n.is_finite() {
            continue;
        }
        if n >= 5.0 {
            counts[4] += 1;
        } else if n >= 1.0 && n.fract() == 0.0 {
            counts[n as usize - 1] += 1;
        }
    }

    GUN_COUNT_BUCKETS
        .iter()
        .zip(counts)
        .map(|(label, count)| GunCountRow {
            num_of_guns: label.to_string(),
            counts: count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: Option<f64>) -> IncidentRecord {
        IncidentRecord {
            n_guns_involved: n,
            ..Default::default()
        }
    }

    fn bucket_counts(table: &[GunCountRow]) -> Vec<u64> {
        table.iter().map(|r| r.counts).collect()
    }

    #[test]
    fn always_emits_all_five_buckets_in_order() {
        let table = gun_count_table(&[]);
        let labels: Vec<&str> = table.iter().map(|r| r.num_of_guns.as_str()).collect();
        assert_eq!(labels, GUN_COUNT_BUCKETS);
        assert_eq!(bucket_counts(&table), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn five_or_more_collapses_into_the_open_bucket() {
        let records = vec![record(Some(5.0)), record(Some(7.0)), record(Some(12.0))];
        let table = gun_count_table(&records);
        assert_eq!(bucket_counts(&table), vec![0, 0, 0, 0, 3]);
    }

    #[test]
    fn exact_buckets_and_absent_values() {
        let records = vec![
            record(Some(1.0)),
            record(Some(3.0)),
            record(Some(3.0)),
            record(None),
        ];
        let table = gun_count_table(&records);
        assert_eq!(bucket_counts(&table), vec![1, 0, 2, 0, 0]);
    }

    #[test]
    fn zero_bucket_rows_survive_a_sparse_distribution() {
        let records = vec![record(Some(3.0))];
        let table = gun_count_table(&records);
        assert_eq!(table.len(), 5);
        assert_eq!(bucket_counts(&table), vec![0, 0, 1, 0, 0]);
    }
}
