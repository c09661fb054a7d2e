use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use super::model::{Record, RequestTable};
use super::normalize::normalize_row;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load failures. Each one ends up as the single alert message in the UI.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No hay URL de origen configurada. Define SHEET_CSV_URL con el enlace CSV publicado de la hoja.")]
    Configuration,

    #[error(
        "No se pudo descargar el CSV (HTTP {status}). \
         Verifica que la hoja esté publicada en la web con acceso de lectura público."
    )]
    Fetch { status: u16 },

    #[error("Error de red al descargar el CSV: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("No se pudo leer {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A recoverable CSV problem. Logged, never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based data row (header excluded).
    pub row: usize,
    pub message: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.message)
    }
}

/// Output of [`parse_records`]: whatever rows could be recovered plus warnings.
#[derive(Debug, Default)]
pub struct ParsedSheet {
    pub records: Vec<Record>,
    pub warnings: Vec<ParseWarning>,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Blocking HTTP client. `None` waits for the transport indefinitely.
pub fn http_client(timeout: Option<Duration>) -> Result<Client, LoadError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Build a client and load `url`. A blank URL fails before any client exists.
pub fn fetch_sheet(url: &str, timeout: Option<Duration>) -> Result<RequestTable, LoadError> {
    if url.trim().is_empty() {
        return Err(LoadError::Configuration);
    }
    let client = http_client(timeout)?;
    load_url(&client, url)
}

/// Fetch, parse and normalize the published sheet at `url`.
pub fn load_url(client: &Client, url: &str) -> Result<RequestTable, LoadError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(LoadError::Configuration);
    }
    let text = fetch_csv(client, url)?;
    Ok(RequestTable::new(parse_logged(&text), url))
}

/// Same pipeline as [`load_url`] but reading a local CSV file.
pub fn load_path(path: &Path) -> Result<RequestTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RequestTable::new(
        parse_logged(&text),
        path.display().to_string(),
    ))
}

/// GET `url` and return the body, failing on any non-2xx status.
pub fn fetch_csv(client: &Client, url: &str) -> Result<String, LoadError> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Fetch {
            status: status.as_u16(),
        });
    }
    Ok(response.text()?)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV text with the first row as field names.
///
/// Blank lines are skipped. Rows with a different field count than the
/// header are kept (missing cells absent, extra cells dropped) and reported.
/// Malformed records are skipped and reported; parsing always continues.
pub fn parse_records(text: &str) -> ParsedSheet {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut sheet = ParsedSheet::default();

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            sheet.warnings.push(ParseWarning {
                row: 0,
                message: format!("unreadable header row: {e}"),
            });
            return sheet;
        }
    };

    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                sheet.warnings.push(ParseWarning {
                    row,
                    message: e.to_string(),
                });
                continue;
            }
        };

        if record.len() != headers.len() {
            sheet.warnings.push(ParseWarning {
                row,
                message: format!(
                    "expected {} fields but found {}",
                    headers.len(),
                    record.len()
                ),
            });
        }

        sheet
            .records
            .push(normalize_row(headers.iter().zip(record.iter())));
    }

    sheet
}

fn parse_logged(text: &str) -> Vec<Record> {
    let sheet = parse_records(text);
    for warning in &sheet.warnings {
        log::warn!("CSV parse warning, {warning}");
    }
    sheet.records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::HEADER_KEYS;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one HTTP response on localhost and return its URL.
    fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/csv; charset=utf-8\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });
        format!("http://{addr}/export?format=csv")
    }

    fn local_client() -> Client {
        Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap()
    }

    const SHEET: &str = "\
Marca temporal,Correo del instructor,NOMBRE DEL PROGRAMA DE FORMACIÓN,Número de ficha
2024-05-01 10:00:00,b@x.com,Curso B,200

2024-05-02 11:00:00, a@x.com ,Curso A -- v2,100
";

    #[test]
    fn parses_and_normalizes_headers() {
        let sheet = parse_records(SHEET);
        assert!(sheet.warnings.is_empty());
        assert_eq!(sheet.records.len(), 2);
        assert_eq!(sheet.records[1].email(), Some("a@x.com"));
        assert_eq!(sheet.records[1].get(&HEADER_KEYS.ficha), Some("100"));
        assert_eq!(
            sheet.records[0].get(&HEADER_KEYS.nombre_prog),
            Some("Curso B")
        );
    }

    #[test]
    fn messy_headers_still_map_to_fields() {
        let text = "\
  correo  DEL Instructor ,Numero de  ficha,nombre del programa de formacion,FECHA DE INICIO DE LA  FORMACION
a@x.com,300,Curso C -- nocturno,2024-06-03T08:00:00
";
        let sheet = parse_records(text);
        assert!(sheet.warnings.is_empty());
        assert_eq!(sheet.records.len(), 1);

        let rec = &sheet.records[0];
        assert_eq!(rec.email(), Some("a@x.com"));
        assert_eq!(rec.get(&HEADER_KEYS.ficha), Some("300"));
        assert_eq!(rec.get(&HEADER_KEYS.nombre_prog), Some("Curso C -- nocturno"));
        assert_eq!(rec.get(&HEADER_KEYS.ini), Some("2024-06-03T08:00:00"));
    }

    #[test]
    fn ragged_rows_are_kept_with_warning() {
        let text = "Correo del instructor,Número de ficha\na@x.com\nb@x.com,2,extra\n";
        let sheet = parse_records(text);
        assert_eq!(sheet.records.len(), 2);
        assert_eq!(sheet.warnings.len(), 2);
        assert_eq!(sheet.warnings[0].row, 1);
        assert_eq!(sheet.records[0].get(&HEADER_KEYS.ficha), None);
        assert_eq!(sheet.records[1].get(&HEADER_KEYS.ficha), Some("2"));
    }

    #[test]
    fn empty_text_yields_no_records() {
        let sheet = parse_records("");
        assert!(sheet.records.is_empty());
    }

    #[test]
    fn blank_url_is_configuration_error() {
        let err = load_url(&local_client(), "   ").unwrap_err();
        assert!(matches!(err, LoadError::Configuration));
    }

    #[test]
    fn blank_url_fails_before_building_client() {
        let err = fetch_sheet(" ", Some(Duration::from_secs(1))).unwrap_err();
        assert!(matches!(err, LoadError::Configuration));
    }

    #[test]
    fn fetch_success_returns_records() {
        let url = serve_once("200 OK", SHEET);
        let table = load_url(&local_client(), &url).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.source, url);
    }

    #[test]
    fn fetch_404_reports_status() {
        let url = serve_once("404 Not Found", "");
        let err = load_url(&local_client(), &url).unwrap_err();
        assert!(matches!(err, LoadError::Fetch { status: 404 }));
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("publicada"));
    }

    #[test]
    fn load_path_reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solicitudes.csv");
        std::fs::write(&path, SHEET).unwrap();
        let table = load_path(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.source.ends_with("solicitudes.csv"));
    }

    #[test]
    fn load_path_missing_file_is_io_error() {
        let err = load_path(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
