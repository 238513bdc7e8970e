use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::style::{cell_colors, style_threshold};

/// Columns of the CRM view, in display order. The CRM table is projected to
/// exactly these regardless of what else the source file carries.
const CRM_COLUMNS: [&str; 5] = ["NOME", "GESTIONES", "DATA", "SUPERVISOR", "CONTATO DIRETO"];

// ---------------------------------------------------------------------------
// Central panel – the two styled tables side by side
// ---------------------------------------------------------------------------

/// Render the ACTIONS and CRM tables (or their empty-result notices).
pub fn dual_tables(ui: &mut Ui, state: &AppState) {
    let dataset = match state.cache.get() {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No data loaded  (File → Open data folder…)");
            });
            return;
        }
    };

    ui.columns(2, |columns| {
        columns[0].push_id("actions_table", |ui| {
            ui.heading("ACTIONS 📌");
            if state.views.actions.is_empty() {
                empty_notice(ui);
            } else {
                actions_table(ui, state, dataset);
            }
        });
        columns[1].push_id("crm_table", |ui| {
            ui.heading("CRM 💼");
            if state.views.crm.is_empty() {
                empty_notice(ui);
            } else {
                crm_table(ui, state, dataset);
            }
        });
    });
}

/// Distinct from an empty table: the filters matched nothing.
fn empty_notice(ui: &mut Ui) {
    ui.label(
        RichText::new("Nenhum dado encontrado para os filtros selecionados.")
            .color(ui.visuals().warn_fg_color),
    );
}

// ---------------------------------------------------------------------------
// ACTIONS table: all source columns, Total threshold-styled
// ---------------------------------------------------------------------------

fn actions_table(ui: &mut Ui, state: &AppState, dataset: &Dataset) {
    let columns = &dataset.actions_columns;

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), columns.len())
        .header(20.0, |mut header| {
            for col in columns {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.views.actions.len(), |mut row| {
                let record = &dataset.actions[state.views.actions[row.index()]];
                for col in columns {
                    row.col(|ui| match col.as_str() {
                        "SUPERVISOR" => {
                            ui.label(record.supervisor.as_deref().unwrap_or(""));
                        }
                        "fecha_accion" => {
                            ui.label(record.fecha_accion.to_string());
                        }
                        "Total" => {
                            styled_number(ui, record.total, state.config.threshold);
                        }
                        other => {
                            let text = record
                                .extra
                                .get(other)
                                .map(|v| v.to_string())
                                .unwrap_or_default();
                            ui.label(text);
                        }
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// CRM table: fixed five-column projection, GESTIONES threshold-styled
// ---------------------------------------------------------------------------

fn crm_table(ui: &mut Ui, state: &AppState, dataset: &Dataset) {
    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), CRM_COLUMNS.len())
        .header(20.0, |mut header| {
            for col in CRM_COLUMNS {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.views.crm.len(), |mut row| {
                let record = &dataset.crm[state.views.crm[row.index()]];
                row.col(|ui| {
                    ui.label(&record.nome);
                });
                row.col(|ui| {
                    styled_number(ui, record.gestiones, state.config.threshold);
                });
                row.col(|ui| {
                    ui.label(record.data.to_string());
                });
                row.col(|ui| {
                    ui.label(record.supervisor.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(record.contato_direto.to_string());
                });
            });
        });
}

/// A numeric cell painted by its threshold classification.
fn styled_number(ui: &mut Ui, value: f64, threshold: f64) {
    let text = if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    };
    let mut rich = RichText::new(text);
    if let Some((bg, fg)) = cell_colors(style_threshold(value, threshold)) {
        rich = rich.background_color(bg).color(fg);
    }
    ui.label(rich);
}
