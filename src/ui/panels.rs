use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtros");
    ui.separator();

    if state.cache.get().is_none() {
        ui.label("No data loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Date selector ----
            ui.strong("📅 Data");
            let current = state.selection.date;
            let mut picked = None;
            egui::ComboBox::from_id_salt("date_filter")
                .selected_text(current.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    for &choice in &state.date_options {
                        if ui
                            .selectable_label(current == choice, choice.to_string())
                            .clicked()
                        {
                            picked = Some(choice);
                        }
                    }
                });
            if let Some(choice) = picked {
                state.select_date(choice);
            }
            ui.separator();

            // ---- Supervisor multi-select ----
            let n_selected = state.selection.supervisors.len();
            let n_total = state.supervisor_options.len();
            ui.strong(format!("👤 Supervisores  ({n_selected}/{n_total})"));
            ui.small("Nenhum selecionado = todos");

            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_supervisors();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_supervisors();
                }
            });

            let options = state.supervisor_options.clone();
            for supervisor in &options {
                let mut checked = state.selection.supervisors.contains(supervisor);
                if ui.checkbox(&mut checked, supervisor).changed() {
                    state.toggle_supervisor(supervisor);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload data").clicked() {
                state.invalidate_and_reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = state.cache.get() {
            ui.label(format!(
                "{} actions / {} CRM rows loaded, {} / {} visible",
                ds.actions.len(),
                ds.crm.len(),
                state.views.actions.len(),
                state.views.crm.len()
            ));
            let dropped = ds.dropped_actions + ds.dropped_crm;
            if dropped > 0 {
                ui.separator();
                ui.label(
                    RichText::new(format!("{dropped} row(s) dropped (bad dates)"))
                        .color(Color32::LIGHT_YELLOW),
                );
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

/// Point the board at a different data folder containing the two CSVs.
pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open data folder")
        .pick_folder();

    if let Some(dir) = folder {
        log::info!("switching data folder to {}", dir.display());
        state.config = state.config.clone().with_data_dir(&dir);
        state.invalidate_and_reload();
    }
}
