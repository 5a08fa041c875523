/// Aligns two parallel per-record sequences by index and keeps the values
/// whose role label contains `role_filter` as a substring.
///
/// Either sequence being absent yields an empty result. The walk is bounded
/// by the values sequence; positions past the end of the roles sequence are
/// skipped rather than treated as an error, since real records carry
/// age/gender/type lists of differing lengths from partial data entry.
/// Missing elements on either side are skipped the same way. Original order
/// is preserved.
pub fn correlate<V: Clone>(
    values: Option<&[Option<V>]>,
    roles: Option<&[Option<String>]>,
    role_filter: &str,
) -> Vec<V> {
    let (values, roles) = match (values, roles) {
        (Some(values), Some(roles)) => (values, roles),
        _ => return Vec::new(),
    };

    let mut matched = Vec::new();
    for (idx, value) in values.iter().enumerate() {
        let role = match roles.get(idx) {
            Some(Some(role)) => role,
            // Role list shorter than the value list, or role missing at
            // this position: skip, never fail the record.
            _ => continue,
        };
        if !role.contains(role_filter) {
            continue;
        }
        if let Some(value) = value {
            matched.push(value.clone());
        }
    }
    matched
}
