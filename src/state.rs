use std::path::PathBuf;

use crate::data::filter::{instructor_emails, rows_for_email};
use crate::data::loader::LoadError;
use crate::data::model::{Record, RequestTable};

// ---------------------------------------------------------------------------
// Load lifecycle
// ---------------------------------------------------------------------------

/// What a load reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Url(String),
    File(PathBuf),
}

/// Where the current table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    Loading,
    Loaded(RequestTable),
    /// User-visible alert message; the record set is empty.
    Failed(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub load: LoadState,

    /// Source of the most recently started load.
    pub source: Option<LoadSource>,

    /// Text currently typed in the URL field (applied on submit).
    pub url_input: String,

    /// Selected instructor email. `None` shows no rows.
    pub selected_email: Option<String>,

    /// Id of the most recently started load; older results are discarded.
    generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            load: LoadState::Idle,
            source: None,
            url_input: String::new(),
            selected_email: None,
            generation: 0,
        }
    }
}

impl AppState {
    /// State with the URL field pre-filled; nothing is loaded yet.
    pub fn with_url_input(url: &str) -> Self {
        Self {
            url_input: url.trim().to_string(),
            ..Self::default()
        }
    }

    /// Apply the URL field. Returns the source to load when it differs from
    /// the active one (a local file counts as a different source).
    pub fn submit_url_input(&self) -> Option<LoadSource> {
        let next = LoadSource::Url(self.url_input.trim().to_string());
        if self.source.as_ref() == Some(&next) {
            return None;
        }
        Some(next)
    }

    /// Enter `Loading` for `source` and return the id the result must carry.
    pub fn begin_load(&mut self, source: LoadSource) -> u64 {
        self.generation += 1;
        self.source = Some(source);
        self.load = LoadState::Loading;
        self.generation
    }

    /// Ingest a finished load. Results from superseded loads are dropped.
    pub fn finish_load(&mut self, generation: u64, result: Result<RequestTable, LoadError>) {
        if generation != self.generation {
            log::debug!(
                "Discarding stale load result (generation {generation}, current {})",
                self.generation
            );
            return;
        }

        match result {
            Ok(table) => {
                let emails = instructor_emails(&table.records);
                log::info!(
                    "Loaded {} records for {} instructors from {}",
                    table.len(),
                    emails.len(),
                    table.source
                );
                self.selected_email = emails.into_iter().next();
                self.load = LoadState::Loaded(table);
            }
            Err(e) => {
                log::error!("Failed to load sheet: {e}");
                self.selected_email = None;
                self.load = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn select_email(&mut self, email: &str) {
        self.selected_email = Some(email.to_string());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Records of the current table; empty unless loaded.
    pub fn records(&self) -> &[Record] {
        match &self.load {
            LoadState::Loaded(table) => &table.records,
            _ => &[],
        }
    }

    pub fn email_options(&self) -> Vec<String> {
        instructor_emails(self.records())
    }

    pub fn filtered_rows(&self) -> Vec<&Record> {
        rows_for_email(self.records(), self.selected_email.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::HEADER_KEYS;

    fn url(u: &str) -> LoadSource {
        LoadSource::Url(u.to_string())
    }

    fn table(emails: &[&str]) -> RequestTable {
        let records = emails
            .iter()
            .map(|e| [(HEADER_KEYS.email.as_str(), *e)].into_iter().collect())
            .collect();
        RequestTable::new(records, "test")
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = AppState::default();
        assert_eq!(state.load, LoadState::Idle);
        assert!(state.email_options().is_empty());
        assert!(state.filtered_rows().is_empty());
    }

    #[test]
    fn success_selects_first_email_alphabetically() {
        let mut state = AppState::default();
        let id = state.begin_load(url("https://a/csv"));
        assert!(state.is_loading());

        state.finish_load(id, Ok(table(&["b@x.com", "a@x.com", "a@x.com"])));
        assert!(!state.is_loading());
        assert_eq!(state.email_options(), vec!["a@x.com", "b@x.com"]);
        assert_eq!(state.selected_email.as_deref(), Some("a@x.com"));
        assert_eq!(state.filtered_rows().len(), 2);

        state.select_email("b@x.com");
        assert_eq!(state.filtered_rows().len(), 1);
    }

    #[test]
    fn no_rows_clears_selection() {
        let mut state = AppState::default();
        state.select_email("old@x.com");
        let id = state.begin_load(url("https://a/csv"));
        state.finish_load(id, Ok(table(&[])));
        assert_eq!(state.selected_email, None);
        assert!(state.filtered_rows().is_empty());
    }

    #[test]
    fn failure_sets_message_and_empties_rows() {
        let mut state = AppState::default();
        let id = state.begin_load(url("https://a/csv"));
        state.finish_load(id, Ok(table(&["a@x.com"])));

        let id = state.begin_load(url("https://a/csv"));
        state.finish_load(id, Err(LoadError::Fetch { status: 404 }));
        assert!(!state.is_loading());
        assert!(state.error_message().unwrap().contains("404"));
        assert!(state.records().is_empty());
        assert!(state.filtered_rows().is_empty());
        assert_eq!(state.selected_email, None);
    }

    #[test]
    fn missing_source_reports_configuration() {
        let mut state = AppState::default();
        let id = state.begin_load(url(""));
        state.finish_load(id, Err(LoadError::Configuration));
        assert!(state.error_message().unwrap().contains("SHEET_CSV_URL"));
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut state = AppState::default();
        let first = state.begin_load(url("https://a/csv"));
        let second = state.begin_load(url("https://b/csv"));

        state.finish_load(first, Ok(table(&["old@x.com"])));
        assert!(state.is_loading());

        state.finish_load(second, Ok(table(&["new@x.com"])));
        assert_eq!(state.email_options(), vec!["new@x.com"]);
    }

    #[test]
    fn submitting_same_url_is_noop() {
        let mut state = AppState::with_url_input("https://a/csv");
        let id = state.begin_load(url("https://a/csv"));
        state.finish_load(id, Ok(table(&["a@x.com"])));

        state.url_input = " https://a/csv ".into();
        assert_eq!(state.submit_url_input(), None);

        state.url_input = "https://b/csv".into();
        assert_eq!(state.submit_url_input(), Some(url("https://b/csv")));
    }

    #[test]
    fn url_reloads_after_local_file() {
        let mut state = AppState::with_url_input("https://a/csv");
        let id = state.begin_load(url("https://a/csv"));
        state.finish_load(id, Ok(table(&["a@x.com"])));

        let id = state.begin_load(LoadSource::File(PathBuf::from("/tmp/local.csv")));
        state.finish_load(id, Ok(table(&["local@x.com"])));

        // URL field still shows the configured sheet.
        assert_eq!(state.url_input, "https://a/csv");
        assert_eq!(state.submit_url_input(), Some(url("https://a/csv")));
    }

    #[test]
    fn first_submit_loads_even_when_blank() {
        let state = AppState::default();
        assert_eq!(state.submit_url_input(), Some(url("")));
    }
}
