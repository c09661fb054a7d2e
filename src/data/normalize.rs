use std::collections::BTreeMap;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::model::Record;

/// Reduce a column title to its canonical comparable form.
///
/// Trims, lowercases, strips diacritics (NFD then drop combining marks) and
/// collapses whitespace runs to a single space. Idempotent.
pub fn normalize_header(raw: &str) -> String {
    let folded: String = raw
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Re-key a parsed row by normalized header. Values are left untouched;
/// when two headers collapse to the same key the later one wins.
pub fn normalize_row<'a, I>(row: I) -> Record
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut fields = BTreeMap::new();
    for (header, value) in row {
        fields.insert(normalize_header(header), value.to_string());
    }
    Record { fields }
}
