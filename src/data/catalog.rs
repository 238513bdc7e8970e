use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::filter::DateChoice;
use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter option catalogs, derived from the loaded tables
// ---------------------------------------------------------------------------

/// Dates offered in the date selector: distinct dates ≤ `today` from either
/// table, most recent first, with the all-dates sentinel always leading.
///
/// Future-dated rows are not offered as options but still exist in the
/// dataset; see [`DateChoice::AllDates`].
pub fn available_dates(dataset: &Dataset, today: NaiveDate) -> Vec<DateChoice> {
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    dates.extend(
        dataset
            .actions
            .iter()
            .map(|r| r.fecha_accion)
            .filter(|&d| d <= today),
    );
    dates.extend(dataset.crm.iter().map(|r| r.data).filter(|&d| d <= today));

    let mut choices = Vec::with_capacity(dates.len() + 1);
    choices.push(DateChoice::AllDates);
    choices.extend(dates.into_iter().rev().map(DateChoice::Day));
    choices
}

/// Supervisors offered in the multi-select: the deduped ascending union of
/// non-null supervisor values from both tables. Values were uppercased at
/// load, so this is effectively case-insensitive alphabetical.
pub fn available_supervisors(dataset: &Dataset) -> Vec<String> {
    let mut supervisors: BTreeSet<String> = BTreeSet::new();
    supervisors.extend(dataset.actions.iter().filter_map(|r| r.supervisor.clone()));
    supervisors.extend(dataset.crm.iter().filter_map(|r| r.supervisor.clone()));
    supervisors.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::data::model::{ActionRecord, CellValue, CrmRecord};

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn action(sup: Option<&str>, date: NaiveDate) -> ActionRecord {
        ActionRecord {
            supervisor: sup.map(str::to_string),
            fecha_accion: date,
            total: 0.0,
            extra: BTreeMap::new(),
        }
    }

    fn crm(sup: Option<&str>, date: NaiveDate) -> CrmRecord {
        CrmRecord {
            nome: "X".into(),
            gestiones: 0.0,
            data: date,
            supervisor: sup.map(str::to_string),
            contato_direto: CellValue::Null,
        }
    }

    fn sample() -> Dataset {
        Dataset {
            actions: vec![
                action(Some("ANA"), day(2024, 1, 10)),
                action(Some("BOB"), day(2024, 1, 11)),
                action(None, day(2024, 1, 11)),
                action(Some("ANA"), day(2024, 3, 1)), // future relative to "today" below
            ],
            crm: vec![
                crm(Some("CARLA"), day(2024, 1, 9)),
                crm(Some("ANA"), day(2024, 1, 10)),
                crm(None, day(2024, 1, 12)),
            ],
            ..Dataset::default()
        }
    }

    #[test]
    fn dates_are_sentinel_first_then_descending() {
        let options = available_dates(&sample(), day(2024, 1, 12));
        assert_eq!(
            options,
            vec![
                DateChoice::AllDates,
                DateChoice::Day(day(2024, 1, 12)),
                DateChoice::Day(day(2024, 1, 11)),
                DateChoice::Day(day(2024, 1, 10)),
                DateChoice::Day(day(2024, 1, 9)),
            ]
        );
    }

    #[test]
    fn future_dates_are_not_offered() {
        let options = available_dates(&sample(), day(2024, 1, 12));
        assert!(!options.contains(&DateChoice::Day(day(2024, 3, 1))));
    }

    #[test]
    fn sentinel_present_even_for_empty_dataset() {
        let options = available_dates(&Dataset::default(), day(2024, 1, 1));
        assert_eq!(options, vec![DateChoice::AllDates]);
    }

    #[test]
    fn supervisors_are_ascending_deduped_union() {
        assert_eq!(
            available_supervisors(&sample()),
            vec!["ANA".to_string(), "BOB".to_string(), "CARLA".to_string()]
        );
    }
}
