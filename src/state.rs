use chrono::NaiveDate;

use crate::config::BoardConfig;
use crate::data::catalog::{available_dates, available_supervisors};
use crate::data::filter::{apply, DateChoice, FilterSelection, FilteredViews};
use crate::data::loader::DatasetCache;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: BoardConfig,

    /// Process-scoped table cache; loaded once, reused every filter cycle.
    pub cache: DatasetCache,

    /// Current date + supervisor selection.
    pub selection: FilterSelection,

    /// Date options derived from the loaded tables (sentinel first).
    pub date_options: Vec<DateChoice>,

    /// Supervisor options derived from the loaded tables (ascending).
    pub supervisor_options: Vec<String>,

    /// Row indices passing the current filters (cached per filter cycle).
    pub views: FilteredViews,

    /// "today" reference used to bound the date catalog.
    pub today: NaiveDate,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: BoardConfig, today: NaiveDate) -> Self {
        Self {
            config,
            cache: DatasetCache::default(),
            selection: FilterSelection::default(),
            date_options: vec![DateChoice::AllDates],
            supervisor_options: Vec::new(),
            views: FilteredViews::default(),
            today,
            status_message: None,
        }
    }

    /// Load (or reuse) the tables and rebuild catalogs and views. Resets
    /// the selection, since stale choices may no longer be offered.
    pub fn reload(&mut self) {
        let today = self.today;
        match self.cache.get_or_load(&self.config) {
            Ok(dataset) => {
                self.date_options = available_dates(dataset, today);
                self.supervisor_options = available_supervisors(dataset);
                self.selection = FilterSelection::default();
                self.status_message = None;
            }
            Err(e) => {
                log::error!("failed to load tables: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.date_options = vec![DateChoice::AllDates];
                self.supervisor_options.clear();
            }
        }
        self.refilter();
    }

    /// Drop the cached tables and re-read the files.
    pub fn invalidate_and_reload(&mut self) {
        self.cache.invalidate();
        self.reload();
    }

    /// Recompute the filtered views after a selection change.
    pub fn refilter(&mut self) {
        self.views = match self.cache.get() {
            Some(dataset) => apply(dataset, &self.selection),
            None => FilteredViews::default(),
        };
    }

    /// Set the date half of the selection.
    pub fn select_date(&mut self, choice: DateChoice) {
        self.selection.date = choice;
        self.refilter();
    }

    /// Toggle one supervisor in the multi-select.
    pub fn toggle_supervisor(&mut self, supervisor: &str) {
        if !self.selection.supervisors.remove(supervisor) {
            self.selection.supervisors.insert(supervisor.to_string());
        }
        self.refilter();
    }

    /// Check every supervisor. Equivalent to no restriction, but keeps the
    /// checkboxes visually in sync with what the user asked for.
    pub fn select_all_supervisors(&mut self) {
        self.selection.supervisors = self.supervisor_options.iter().cloned().collect();
        self.refilter();
    }

    /// Clear the supervisor selection; an empty set means no restriction.
    pub fn select_no_supervisors(&mut self) {
        self.selection.supervisors.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn state_with_sample_data(dir: &tempfile::TempDir) -> AppState {
        let actions_path = dir.path().join("dados_analisados.csv");
        let mut f = std::fs::File::create(&actions_path).unwrap();
        f.write_all(
            b"SUPERVISOR,fecha_accion,Total\n\
              ana,2024-01-10,140\n\
              bob,2024-01-11,100\n",
        )
        .unwrap();

        let crm_path = dir.path().join("HORA.csv");
        let mut f = std::fs::File::create(&crm_path).unwrap();
        f.write_all(
            b"NOME,GESTIONES,DATA,SUPERVISOR,CONTATO DIRETO\n\
              Joao,150,2024-01-10,ana,32\n\
              Rita,120,2024-01-11,bob,18\n",
        )
        .unwrap();

        let config = BoardConfig {
            actions_path,
            crm_path,
            ..BoardConfig::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
        let mut state = AppState::new(config, today);
        state.reload();
        state
    }

    #[test]
    fn reload_builds_catalogs_and_identity_views() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with_sample_data(&dir);

        assert_eq!(state.date_options.len(), 3); // sentinel + two days
        assert_eq!(state.supervisor_options, vec!["ANA", "BOB"]);
        assert_eq!(state.views.actions, vec![0, 1]);
        assert_eq!(state.views.crm, vec![0, 1]);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn selecting_a_date_narrows_both_views() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_sample_data(&dir);

        state.select_date(DateChoice::Day(
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        ));
        assert_eq!(state.views.actions, vec![0]);
        assert_eq!(state.views.crm, vec![0]);
    }

    #[test]
    fn toggling_a_supervisor_twice_restores_no_restriction() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_sample_data(&dir);

        state.toggle_supervisor("ANA");
        assert_eq!(state.views.actions, vec![0]);
        state.toggle_supervisor("ANA");
        assert_eq!(state.views.actions, vec![0, 1]);
    }

    #[test]
    fn filtered_rows_style_as_expected_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_sample_data(&dir);

        state.select_date(DateChoice::Day(
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        ));

        let dataset = state.cache.get().unwrap();
        assert_eq!(state.views.actions, vec![0]);
        let row = &dataset.actions[state.views.actions[0]];
        assert_eq!(row.supervisor.as_deref(), Some("ANA"));
        assert_eq!(
            crate::style::style_threshold(row.total, state.config.threshold),
            crate::style::StyleTag::Above
        );

        // The CRM side matches the same date independently.
        assert_eq!(state.views.crm, vec![0]);
        let crm_row = &dataset.crm[state.views.crm[0]];
        assert_eq!(
            crate::style::style_threshold(crm_row.gestiones, state.config.threshold),
            crate::style::StyleTag::Above
        );
    }

    #[test]
    fn load_failure_sets_status_and_empty_catalogs() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig::default().with_data_dir(&dir.path().join("nowhere"));
        let mut state = AppState::new(config, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        state.reload();

        assert!(state.status_message.is_some());
        assert_eq!(state.date_options, vec![DateChoice::AllDates]);
        assert!(state.supervisor_options.is_empty());
        assert!(state.views.actions.is_empty());
    }
}
