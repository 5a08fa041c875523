use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, TransformError};
use crate::types::IncidentRecord;

/// Raw CSV row before the list-encoded columns are decoded. Extra columns in
/// the cleaned files are ignored by the header-driven deserializer.
#[derive(Debug, Deserialize)]
struct RawIncidentRow {
    participant_age: Option<String>,
    participant_type: Option<String>,
    participant_gender: Option<String>,
    participant_status: Option<String>,
    gun_type: Option<String>,
    n_guns_involved: Option<f64>,
}

/// Reads the cleaned incident CSV files and concatenates them, in order,
/// into one in-memory table with the list-encoded columns decoded.
pub fn load_incidents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<IncidentRecord>> {
    let mut records = Vec::new();
    for path in paths {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading cleaned incident file");
        let mut reader = csv::Reader::from_path(path)?;
        let before = records.len();
        for row in reader.deserialize::<RawIncidentRow>() {
            records.push(decode_row(row?)?);
        }
        info!(path = %path.display(), rows = records.len() - before, "loaded cleaned incident file");
    }
    Ok(records)
}

fn decode_row(raw: RawIncidentRow) -> Result<IncidentRecord> {
    Ok(IncidentRecord {
        participant_age: decode_cell("participant_age", raw.participant_age)?,
        participant_type: decode_cell("participant_type", raw.participant_type)?,
        participant_gender: decode_cell("participant_gender", raw.participant_gender)?,
        participant_status: decode_cell("participant_status", raw.participant_status)?,
        gun_type: decode_cell("gun_type", raw.gun_type)?,
        n_guns_involved: raw.n_guns_involved,
    })
}

/// A missing cell stays missing; anything else must be a well-formed list
/// literal. Malformed text aborts the run rather than coercing to empty.
fn decode_cell(column: &str, cell: Option<String>) -> Result<Option<Vec<Option<String>>>> {
    match cell {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => decode_list(column, &text).map(Some),
    }
}

/// Parses a bracketed list literal as emitted by the cleaning step, e.g.
/// `['Suspect', 'Victim']` or `[34, nan]`. Elements may be single- or
/// double-quoted strings or bare tokens; the tokens `nan`, `NaN` and `None`
/// (and empty elements) decode to a missing element.
pub fn decode_list(column: &str, text: &str) -> Result<Vec<Option<String>>> {
    let malformed = || TransformError::Decode {
        column: column.to_string(),
        value: text.to_string(),
    };

    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(malformed)?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut elements = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut quoted = false;
    for c in inner.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    quoted = true;
                }
                ',' => {
                    elements.push(finish_element(&current, quoted));
                    current.clear();
                    quoted = false;
                }
                _ => current.push(c),
            },
        }
    }
    if quote.is_some() {
        // Unterminated quote
        return Err(malformed());
    }
    elements.push(finish_element(&current, quoted));

    Ok(elements)
}

fn finish_element(raw: &str, quoted: bool) -> Option<String> {
    let trimmed = raw.trim();
    if quoted {
        // Quoted content is taken verbatim, even when it looks like a
        // missing-value token.
        return Some(trimmed.to_string());
    }
    match trimmed {
        "" | "nan" | "NaN" | "None" => None,
        _ => Some(trimmed.to_string()),
    }
}
