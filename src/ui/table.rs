use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::display::{DisplayRow, COLUMN_TITLES};
use crate::data::model::HEADER_KEYS;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Request table (central panel)
// ---------------------------------------------------------------------------

/// Render the selected instructor's requests, or a single placeholder row.
pub fn request_table(ui: &mut Ui, state: &AppState) {
    let rows: Vec<DisplayRow> = state
        .filtered_rows()
        .into_iter()
        .map(|rec| DisplayRow::from_record(rec, &HEADER_KEYS))
        .collect();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true);
    for _ in 0..COLUMN_TITLES.len() - 1 {
        builder = builder.column(Column::auto().at_least(90.0));
    }

    builder
        .column(Column::remainder())
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for title in COLUMN_TITLES {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            if rows.is_empty() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label("Sin registros");
                    });
                    for _ in 1..COLUMN_TITLES.len() {
                        row.col(|_| {});
                    }
                });
                return;
            }

            for display in &rows {
                body.row(ROW_HEIGHT, |mut row| {
                    for cell in &display.cells {
                        row.col(|ui| {
                            let label = ui.label(cell);
                            if !display.request_code.is_empty() {
                                label.on_hover_text(format!(
                                    "Código de solicitud: {}",
                                    display.request_code
                                ));
                            }
                        });
                    }
                });
            }
        });
}
