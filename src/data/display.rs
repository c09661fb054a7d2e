use super::model::{HeaderKeys, Record};

// ---------------------------------------------------------------------------
// Render-time string transforms
// ---------------------------------------------------------------------------

/// Strip the time-of-day from a date or datetime string without parsing it.
///
/// `"2024-05-01T12:00:00"` → `"2024-05-01"`, `"1/5/2024 10:22:33"` → `"1/5/2024"`.
pub fn date_only(value: Option<&str>) -> String {
    let s = value.unwrap_or("").trim();
    if s.is_empty() {
        return String::new();
    }
    if let Some((date, _)) = s.split_once('T') {
        return date.to_string();
    }
    if let Some((date, _)) = s.split_once(' ') {
        return date.to_string();
    }
    s.to_string()
}

/// Everything before the first `--`, trimmed. Drops annotations such as
/// `"Curso A -- v2"` from program names.
pub fn left_of_double_dash(value: Option<&str>) -> String {
    let s = value.unwrap_or("").trim();
    if s.is_empty() {
        return String::new();
    }
    match s.split_once("--") {
        Some((left, _)) => left.trim().to_string(),
        None => s.to_string(),
    }
}

// ---------------------------------------------------------------------------
// DisplayRow – the seven table cells for one record
// ---------------------------------------------------------------------------

pub const COLUMN_TITLES: [&str; 7] = [
    "Fecha de solicitud",
    "Fecha de aprobación",
    "Programa de formación",
    "Código de programa",
    "Fecha de inicio",
    "Fecha de fin",
    "Ficha",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub cells: [String; 7],
    /// Request code, shown on hover.
    pub request_code: String,
}

impl DisplayRow {
    pub fn from_record(record: &Record, keys: &HeaderKeys) -> Self {
        let raw = |key: &str| record.get(key).unwrap_or("").to_string();
        DisplayRow {
            cells: [
                date_only(record.get(&keys.marca)),
                date_only(record.get(&keys.aprob)),
                left_of_double_dash(record.get(&keys.nombre_prog)),
                raw(&keys.codigo_prog),
                date_only(record.get(&keys.ini)),
                date_only(record.get(&keys.fin)),
                raw(&keys.ficha),
            ],
            request_code: raw(&keys.cod_sol),
        }
    }
}
