use std::collections::BTreeSet;

use super::model::Record;

// ---------------------------------------------------------------------------
// Instructor filter
// ---------------------------------------------------------------------------

/// Distinct trimmed, non-empty instructor emails, sorted ascending.
pub fn instructor_emails(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter_map(Record::email)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Records whose trimmed email equals `selected` exactly.
///
/// No selection (or an empty one) matches nothing rather than everything.
pub fn rows_for_email<'a>(records: &'a [Record], selected: Option<&str>) -> Vec<&'a Record> {
    let Some(selected) = selected.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    records
        .iter()
        .filter(|rec| rec.email() == Some(selected))
        .collect()
}
