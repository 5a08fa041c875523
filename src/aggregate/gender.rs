use crate::correlate::correlate;
use crate::types::{GenderRow, IncidentRecord};

/// Fixed output domain for the gender tables, in emission order.
pub const GENDER_LABELS: [&str; 2] = ["Male", "Female"];

/// Counts participant genders for one role (`"Suspect"` or `"Victim"`).
/// Genders are correlated positionally against the role list; alignment gaps
/// drop the observation. Only exact "Male"/"Female" labels are counted, and
/// both rows are always emitted.
pub fn gender_table(records: &[IncidentRecord], role_filter: &str) -> Vec<GenderRow> {
    let mut male = 0u64;
    let mut female = 0u64;
    for record in records {
        let genders = record.participant_gender.as_deref();
        let roles = record.participant_type.as_deref();
        for gender in correlate(genders, roles, role_filter) {
            match gender.as_str() {
                "Male" => male += 1,
                "Female" => female += 1,
                // Unrecognized labels never reach a bucket
                _ => {}
            }
        }
    }

    vec![
        GenderRow {
            gender: "Male".to_string(),
            gender_counts: male,
        },
        GenderRow {
            gender: "Female".to_string(),
            gender_counts: female,
        },
    ]
}
