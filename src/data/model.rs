use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// CellValue – a single passthrough cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value for columns the board carries through
/// without interpreting. Using `BTreeMap` / `BTreeSet` downstream so
/// `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Integer(_) => 1,
                Float(_) => 2,
                String(_) => 3,
                Date(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Date(d) => d.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for threshold styling.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ActionRecord – one row of the sales-actions table
// ---------------------------------------------------------------------------

/// One row of the actions table (`dados_analisados.csv`).
///
/// The typed fields are the columns the filter/style pipeline touches; every
/// other source column rides along in `extra`, keyed by header name.
#[derive(Debug, Clone)]
pub struct ActionRecord {
    /// Uppercased at load; `None` when the source cell was empty.
    pub supervisor: Option<String>,
    /// `fecha_accion` column, already coerced to a date. Rows whose date
    /// failed to parse never reach this struct.
    pub fecha_accion: NaiveDate,
    /// `Total` column; NaN when the source cell was not numeric.
    pub total: f64,
    /// Passthrough display columns.
    pub extra: BTreeMap<String, CellValue>,
}

// ---------------------------------------------------------------------------
// CrmRecord – one row of the hourly-management table
// ---------------------------------------------------------------------------

/// One row of the CRM table (`HORA.csv`). The display projects to exactly
/// these five columns, so extra source columns are not retained.
#[derive(Debug, Clone)]
pub struct CrmRecord {
    pub nome: String,
    /// `GESTIONES` column; NaN when the source cell was not numeric.
    pub gestiones: f64,
    /// `DATA` column, coerced to a date at load.
    pub data: NaiveDate,
    /// Uppercased at load; `None` when the source cell was empty.
    pub supervisor: Option<String>,
    pub contato_direto: CellValue,
}

// ---------------------------------------------------------------------------
// Dataset – both loaded tables
// ---------------------------------------------------------------------------

/// The two loaded tables, read-only for the rest of the process run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub actions: Vec<ActionRecord>,
    pub crm: Vec<CrmRecord>,
    /// Ordered header names of the actions table, for display. Includes the
    /// typed columns at their source positions.
    pub actions_columns: Vec<String>,
    /// Rows discarded because `fecha_accion` did not parse.
    pub dropped_actions: usize,
    /// Rows discarded because `DATA` did not parse.
    pub dropped_crm: usize,
}

impl Dataset {
    /// Total surviving rows across both tables.
    pub fn len(&self) -> usize {
        self.actions.len() + self.crm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.crm.is_empty()
    }
}
