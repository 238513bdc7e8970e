use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use super::model::Dataset;

/// Label shown for the all-dates sentinel.
pub const ALL_DATES_LABEL: &str = "Todas as datas";

// ---------------------------------------------------------------------------
// DateChoice – sentinel or one concrete day
// ---------------------------------------------------------------------------

/// One entry of the date catalog, and the date half of a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateChoice {
    /// Apply no date restriction. Future-dated rows are never offered as
    /// concrete options, but they do pass this choice.
    AllDates,
    Day(NaiveDate),
}

impl fmt::Display for DateChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateChoice::AllDates => write!(f, "{ALL_DATES_LABEL}"),
            DateChoice::Day(d) => write!(f, "{d}"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is neither the all-dates option nor a valid YYYY-MM-DD date")]
pub struct SelectionError(pub String);

impl DateChoice {
    /// Parse a selection arriving as text from the presentation layer.
    ///
    /// Only the sentinel label and ISO dates are accepted; anything else is
    /// an error, never a silent fallback to [`DateChoice::AllDates`].
    pub fn parse(s: &str) -> Result<Self, SelectionError> {
        if s == ALL_DATES_LABEL {
            return Ok(DateChoice::AllDates);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(DateChoice::Day)
            .map_err(|_| SelectionError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FilterSelection – what the user currently has chosen
// ---------------------------------------------------------------------------

/// The user's current filter state.
///
/// An empty supervisor set means "no restriction": absence of a selection
/// matches everything, not nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub date: DateChoice,
    pub supervisors: BTreeSet<String>,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            date: DateChoice::AllDates,
            supervisors: BTreeSet::new(),
        }
    }
}

impl FilterSelection {
    fn date_passes(&self, date: NaiveDate) -> bool {
        match self.date {
            DateChoice::AllDates => true,
            DateChoice::Day(d) => date == d,
        }
    }

    fn supervisor_passes(&self, supervisor: Option<&str>) -> bool {
        if self.supervisors.is_empty() {
            return true;
        }
        supervisor.is_some_and(|s| self.supervisors.contains(s))
    }
}

// ---------------------------------------------------------------------------
// apply – filtered indices per table
// ---------------------------------------------------------------------------

/// Indices of rows passing the current filters, one vector per table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredViews {
    pub actions: Vec<usize>,
    pub crm: Vec<usize>,
}

/// Apply the selection to both tables independently.
///
/// The date predicate and the supervisor predicate are conjunctive; each
/// table is filtered by its own date and supervisor columns with the same
/// selection values. The tables are never joined.
pub fn apply(dataset: &Dataset, selection: &FilterSelection) -> FilteredViews {
    let actions = dataset
        .actions
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            selection.date_passes(r.fecha_accion)
                && selection.supervisor_passes(r.supervisor.as_deref())
        })
        .map(|(i, _)| i)
        .collect();

    let crm = dataset
        .crm
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            selection.date_passes(r.data) && selection.supervisor_passes(r.supervisor.as_deref())
        })
        .map(|(i, _)| i)
        .collect();

    FilteredViews { actions, crm }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::data::model::{ActionRecord, CellValue, CrmRecord};

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Dataset {
        let action = |sup: &str, date: NaiveDate, total: f64| ActionRecord {
            supervisor: Some(sup.to_string()),
            fecha_accion: date,
            total,
            extra: BTreeMap::new(),
        };
        let crm = |sup: &str, date: NaiveDate| CrmRecord {
            nome: "X".into(),
            gestiones: 0.0,
            data: date,
            supervisor: Some(sup.to_string()),
            contato_direto: CellValue::Null,
        };
        Dataset {
            actions: vec![
                action("ANA", day(2024, 1, 10), 140.0),
                action("BOB", day(2024, 1, 11), 100.0),
            ],
            crm: vec![
                crm("ANA", day(2024, 1, 10)),
                crm("CARLA", day(2024, 1, 10)),
                crm("BOB", day(2024, 1, 11)),
            ],
            ..Dataset::default()
        }
    }

    fn select(date: DateChoice, sups: &[&str]) -> FilterSelection {
        FilterSelection {
            date,
            supervisors: sups.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn no_selection_is_the_identity_filter() {
        let views = apply(&sample(), &FilterSelection::default());
        assert_eq!(views.actions, vec![0, 1]);
        assert_eq!(views.crm, vec![0, 1, 2]);
    }

    #[test]
    fn concrete_date_filters_both_tables_independently() {
        let views = apply(&sample(), &select(DateChoice::Day(day(2024, 1, 10)), &[]));
        assert_eq!(views.actions, vec![0]);
        assert_eq!(views.crm, vec![0, 1]);
    }

    #[test]
    fn supervisor_set_filters_both_tables() {
        let views = apply(&sample(), &select(DateChoice::AllDates, &["ANA"]));
        assert_eq!(views.actions, vec![0]);
        assert_eq!(views.crm, vec![0]);
    }

    #[test]
    fn unknown_supervisor_empties_both_views() {
        let views = apply(&sample(), &select(DateChoice::AllDates, &["ZOE"]));
        assert!(views.actions.is_empty());
        assert!(views.crm.is_empty());
    }

    #[test]
    fn date_and_supervisor_are_conjunctive() {
        let views = apply(
            &sample(),
            &select(DateChoice::Day(day(2024, 1, 11)), &["BOB"]),
        );
        assert_eq!(views.actions, vec![1]);
        assert_eq!(views.crm, vec![2]);
    }

    #[test]
    fn missing_supervisor_fails_an_active_supervisor_filter() {
        let mut ds = sample();
        ds.actions[0].supervisor = None;
        let views = apply(&ds, &select(DateChoice::AllDates, &["ANA"]));
        assert!(views.actions.is_empty());
    }

    #[test]
    fn parse_accepts_sentinel_and_iso_dates_only() {
        assert_eq!(DateChoice::parse(ALL_DATES_LABEL), Ok(DateChoice::AllDates));
        assert_eq!(
            DateChoice::parse("2024-01-10"),
            Ok(DateChoice::Day(day(2024, 1, 10)))
        );
        assert_eq!(
            DateChoice::parse("10/01/2024"),
            Err(SelectionError("10/01/2024".into()))
        );
        assert!(DateChoice::parse("").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for choice in [DateChoice::AllDates, DateChoice::Day(day(2024, 1, 10))] {
            assert_eq!(DateChoice::parse(&choice.to_string()), Ok(choice));
        }
    }
}
