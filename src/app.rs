use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use eframe::egui;

use crate::config::Config;
use crate::data::loader::{self, LoadError};
use crate::data::model::RequestTable;
use crate::state::{AppState, LoadSource};
use crate::ui::{panels, table};

/// Result of one background load, tagged with the generation that started it.
type LoadMessage = (u64, Result<RequestTable, LoadError>);

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FichaViewerApp {
    pub state: AppState,
    config: Config,
    tx: Sender<LoadMessage>,
    rx: Receiver<LoadMessage>,
}

impl FichaViewerApp {
    pub fn new(config: Config, ctx: &egui::Context) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut app = Self {
            state: AppState::with_url_input(&config.source_url),
            config,
            tx,
            rx,
        };
        let url = app.state.url_input.clone();
        app.start_load(LoadSource::Url(url), ctx);
        app
    }

    /// Kick off a load on a worker thread. The UI keeps rendering; the result
    /// is picked up by [`Self::poll_loads`].
    pub fn start_load(&mut self, source: LoadSource, ctx: &egui::Context) {
        let generation = self.state.begin_load(source.clone());
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        let timeout = self.config.fetch_timeout;

        log::info!("Loading sheet from {source:?} (generation {generation})");
        thread::spawn(move || {
            let result = match source {
                LoadSource::Url(url) => loader::fetch_sheet(&url, timeout),
                LoadSource::File(path) => loader::load_path(&path),
            };
            // The receiver only goes away when the window closes.
            let _ = tx.send((generation, result));
            ctx.request_repaint();
        });
    }

    fn poll_loads(&mut self) {
        while let Ok((generation, result)) = self.rx.try_recv() {
            self.state.finish_load(generation, result);
        }
    }
}

impl eframe::App for FichaViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads();

        // ---- Top panel: source + status ----
        let mut requested = None;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            requested = panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: instructor selector ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: request table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::request_table(ui, &self.state);
        });

        if let Some(source) = requested {
            self.start_load(source, ctx);
        }
    }
}
