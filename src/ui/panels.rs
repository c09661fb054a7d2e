use eframe::egui::{self, Color32, Key, RichText, Ui};

use crate::state::{AppState, LoadSource, LoadState};

// ---------------------------------------------------------------------------
// Left side panel – instructor selector
// ---------------------------------------------------------------------------

/// Render the left panel with the instructor dropdown.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Instructor");
    ui.separator();

    let emails = state.email_options();
    if emails.is_empty() {
        ui.label("No hay instructores para mostrar.");
        return;
    }

    let current = state.selected_email.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("instructor_email")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for email in &emails {
                if ui.selectable_label(current == *email, email).clicked() {
                    state.select_email(email);
                }
            }
        });

    ui.add_space(6.0);
    ui.label(format!("{} instructores", emails.len()));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the menu, source field and status line. Returns a load request
/// when the user picked a file or submitted a different URL.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) -> Option<LoadSource> {
    let mut requested = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Archivo", |ui: &mut Ui| {
            if ui.button("Abrir CSV local…").clicked() {
                requested = open_file_dialog().map(LoadSource::File);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label("Origen:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut state.url_input)
                .hint_text("URL CSV publicada")
                .desired_width(420.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        let clicked = ui.button("Cargar").clicked();
        if submitted || clicked {
            if let Some(source) = state.submit_url_input() {
                requested = Some(source);
            }
        }

        ui.separator();

        match &state.load {
            LoadState::Idle => {}
            LoadState::Loading => {
                ui.spinner();
                ui.label("Cargando…");
            }
            LoadState::Loaded(table) => {
                let status = if table.is_empty() {
                    "La hoja no tiene registros".to_string()
                } else {
                    format!(
                        "{} registros cargados, {} visibles",
                        table.len(),
                        state.filtered_rows().len()
                    )
                };
                ui.label(status);
            }
            LoadState::Failed(_) => {}
        }
    });

    // ---- Alert region ----
    if let Some(msg) = state.error_message() {
        ui.label(RichText::new(msg).color(Color32::RED));
    }

    requested
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

fn open_file_dialog() -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .set_title("Abrir solicitudes")
        .add_filter("CSV", &["csv"])
        .pick_file()
}
