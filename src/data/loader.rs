use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::config::BoardConfig;

use super::model::{ActionRecord, CellValue, CrmRecord, Dataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load both source tables into memory.
///
/// A missing or unreadable file is fatal; a row whose date cell fails to
/// parse is dropped and counted, never surfaced as an error.
pub fn load_dataset(actions_path: &Path, crm_path: &Path) -> Result<Dataset> {
    let (actions, actions_columns, dropped_actions) =
        load_actions(actions_path).with_context(|| format!("loading {}", actions_path.display()))?;
    let (crm, dropped_crm) =
        load_crm(crm_path).with_context(|| format!("loading {}", crm_path.display()))?;

    if dropped_actions + dropped_crm > 0 {
        log::warn!(
            "dropped {dropped_actions} actions row(s) and {dropped_crm} CRM row(s) with unparseable dates"
        );
    }
    log::info!(
        "loaded {} actions rows and {} CRM rows",
        actions.len(),
        crm.len()
    );

    Ok(Dataset {
        actions,
        crm,
        actions_columns,
        dropped_actions,
        dropped_crm,
    })
}

// ---------------------------------------------------------------------------
// Actions table (dados_analisados.csv)
// ---------------------------------------------------------------------------

fn load_actions(path: &Path) -> Result<(Vec<ActionRecord>, Vec<String>, usize)> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let sup_idx = headers
        .iter()
        .position(|h| h == "SUPERVISOR")
        .context("CSV missing 'SUPERVISOR' column")?;
    let date_idx = headers
        .iter()
        .position(|h| h == "fecha_accion")
        .context("CSV missing 'fecha_accion' column")?;
    let total_idx = headers
        .iter()
        .position(|h| h == "Total")
        .context("CSV missing 'Total' column")?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        // pd.to_datetime(errors='coerce') + dropna: no date, no row.
        let Some(fecha_accion) = coerce_date(record.get(date_idx).unwrap_or("")) else {
            dropped += 1;
            continue;
        };

        let supervisor = normalize_supervisor(record.get(sup_idx).unwrap_or(""));
        let total = parse_numeric(record.get(total_idx).unwrap_or(""));

        let mut extra = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            if col_idx == sup_idx || col_idx == date_idx || col_idx == total_idx {
                continue;
            }
            let col_name = &headers[col_idx];
            extra.insert(col_name.clone(), guess_cell_type(value));
        }

        records.push(ActionRecord {
            supervisor,
            fecha_accion,
            total,
            extra,
        });
    }

    Ok((records, headers, dropped))
}

// ---------------------------------------------------------------------------
// CRM table (HORA.csv)
// ---------------------------------------------------------------------------

fn load_crm(path: &Path) -> Result<(Vec<CrmRecord>, usize)> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let find = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };

    let nome_idx = find("NOME")?;
    let gestiones_idx = find("GESTIONES")?;
    let date_idx = find("DATA")?;
    let sup_idx = find("SUPERVISOR")?;
    let contato_idx = find("CONTATO DIRETO")?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let Some(data) = coerce_date(record.get(date_idx).unwrap_or("")) else {
            dropped += 1;
            continue;
        };

        records.push(CrmRecord {
            nome: record.get(nome_idx).unwrap_or("").trim().to_string(),
            gestiones: parse_numeric(record.get(gestiones_idx).unwrap_or("")),
            data,
            supervisor: normalize_supervisor(record.get(sup_idx).unwrap_or("")),
            contato_direto: guess_cell_type(record.get(contato_idx).unwrap_or("")),
        });
    }

    Ok((records, dropped))
}

// ---------------------------------------------------------------------------
// Cell coercion helpers
// ---------------------------------------------------------------------------

/// Uppercase the supervisor cell; empty cells become `None`.
fn normalize_supervisor(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Parse a date cell, trying the formats the source files are known to use.
/// Returns `None` on failure so the caller can drop the row.
pub fn coerce_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    // Timestamps like "2024-01-10 00:00:00" reduce to their date part.
    let date_part = s.split_whitespace().next().unwrap_or(s);
    const FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%m/%d/%Y"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// Numeric cell: NaN on failure. Only date failures drop rows.
fn parse_numeric(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(f64::NAN)
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if let Some(d) = coerce_date(s) {
        return CellValue::Date(d);
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// DatasetCache – compute once, reuse until invalidated
// ---------------------------------------------------------------------------

/// Process-scoped cache of the loaded tables.
///
/// `get_or_load` reads the files at most once; a changed file on disk is
/// only picked up after an explicit [`DatasetCache::invalidate`]. There is
/// no file watching.
#[derive(Default)]
pub struct DatasetCache {
    cached: Option<Dataset>,
}

impl DatasetCache {
    pub fn get_or_load(&mut self, config: &BoardConfig) -> Result<&Dataset> {
        if self.cached.is_none() {
            let dataset = load_dataset(&config.actions_path, &config.crm_path)?;
            self.cached = Some(dataset);
        }
        // invariant: populated above
        Ok(self.cached.as_ref().unwrap())
    }

    /// Forget the cached tables; the next `get_or_load` re-reads the files.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn get(&self) -> Option<&Dataset> {
        self.cached.as_ref()
    }
}
