use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::normalize::normalize_header;

// ---------------------------------------------------------------------------
// Column titles as they appear in the published sheet
// ---------------------------------------------------------------------------

pub const TITLE_EMAIL: &str = "Correo del instructor";
pub const TITLE_MARCA: &str = "Marca temporal";
pub const TITLE_APROB: &str = "Fecha de aprobación";
pub const TITLE_NOMBRE_PROG: &str = "NOMBRE DEL PROGRAMA DE FORMACIÓN";
pub const TITLE_CODIGO_PROG: &str = "CODIGO DE PROGRAMA";
pub const TITLE_INI: &str = "FECHA DE INICIO DE LA FORMACIÓN";
pub const TITLE_FIN: &str = "FECHA DE FINALIZACIÓN DE LA FORMACIÓN";
pub const TITLE_FICHA: &str = "Número de ficha";
pub const TITLE_COD_SOL: &str = "Código de solicitud";

// ---------------------------------------------------------------------------
// HeaderKeys – logical field → normalized header
// ---------------------------------------------------------------------------

/// Normalized header strings for every field the viewer reads.
///
/// Built once from the human-readable titles above, so a sheet whose
/// headers differ only in case, accents or spacing still maps cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderKeys {
    pub email: String,
    pub marca: String,
    pub aprob: String,
    pub nombre_prog: String,
    pub codigo_prog: String,
    pub ini: String,
    pub fin: String,
    pub ficha: String,
    pub cod_sol: String,
}

impl HeaderKeys {
    fn from_titles() -> Self {
        HeaderKeys {
            email: normalize_header(TITLE_EMAIL),
            marca: normalize_header(TITLE_MARCA),
            aprob: normalize_header(TITLE_APROB),
            nombre_prog: normalize_header(TITLE_NOMBRE_PROG),
            codigo_prog: normalize_header(TITLE_CODIGO_PROG),
            ini: normalize_header(TITLE_INI),
            fin: normalize_header(TITLE_FIN),
            ficha: normalize_header(TITLE_FICHA),
            cod_sol: normalize_header(TITLE_COD_SOL),
        }
    }
}

pub static HEADER_KEYS: Lazy<HeaderKeys> = Lazy::new(HeaderKeys::from_titles);

// ---------------------------------------------------------------------------
// Record – one sheet row keyed by normalized header
// ---------------------------------------------------------------------------

/// A single training request (one CSV row), values kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Trimmed instructor email, if the row has one.
    pub fn email(&self) -> Option<&str> {
        self.get(&HEADER_KEYS.email)
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// RequestTable – the complete loaded sheet
// ---------------------------------------------------------------------------

/// All records from one successful load, plus where they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTable {
    pub records: Vec<Record>,
    /// URL or file path the records were read from.
    pub source: String,
}

impl RequestTable {
    pub fn new(records: Vec<Record>, source: impl Into<String>) -> Self {
        RequestTable {
            records,
            source: source.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
