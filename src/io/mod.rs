// src/io/mod.rs
pub mod csv_table;
pub mod spreadsheet;

use crate::error::{QvError, Result};
use crate::model::{embedded_table, ElementTable};
use std::path::Path;

// Column headers of "Periodic Table of Elements.csv"
pub const SYMBOL_COLUMN: &str = "Symbol";
pub const ELECTRONS_COLUMN: &str = "NumberofElectrons";
pub const NAME_COLUMN: &str = "Element";

/// Column positions found in a header row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TableColumns {
    pub symbol: usize,
    pub electrons: usize,
    pub name: Option<usize>,
}

impl TableColumns {
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut symbol = None;
        let mut electrons = None;
        let mut name = None;

        for (i, h) in headers.into_iter().enumerate() {
            let h = h.trim();
            if h.eq_ignore_ascii_case(SYMBOL_COLUMN) {
                symbol = Some(i);
            } else if h.eq_ignore_ascii_case(ELECTRONS_COLUMN) {
                electrons = Some(i);
            } else if h.eq_ignore_ascii_case(NAME_COLUMN) {
                name = Some(i);
            }
        }

        match (symbol, electrons) {
            (Some(symbol), Some(electrons)) => Ok(Self { symbol, electrons, name }),
            _ => Err(QvError::Parse(format!(
                "element table needs '{}' and '{}' columns",
                SYMBOL_COLUMN, ELECTRONS_COLUMN
            ))),
        }
    }
}

/// Loads an element table, choosing the reader by extension.
pub fn load_element_table(path: &Path) -> Result<ElementTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => csv_table::parse(path),
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => spreadsheet::parse(path),
        _ => Err(QvError::Parse(format!(
            "unsupported element table format: {:?}",
            path
        ))),
    }
}

/// The configured table, or the built-in one when none is set or it fails to load.
pub fn element_table_or_default(path: Option<&Path>) -> ElementTable {
    if let Some(path) = path {
        match load_element_table(path) {
            Ok(table) if !table.is_empty() => {
                log::info!("Loaded {} elements from {:?}", table.len(), path);
                return table;
            }
            Ok(_) => log::warn!("Element table {:?} is empty, using built-in table", path),
            Err(e) => log::warn!("Could not load element table {:?}: {}. Using built-in table", path, e),
        }
    }
    embedded_table().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_from_headers() {
        let cols = TableColumns::from_headers(
            ["AtomicNumber", "Element", "Symbol", "AtomicMass", "NumberofElectrons"],
        )
        .unwrap();
        assert_eq!(cols, TableColumns { symbol: 2, electrons: 4, name: Some(1) });
    }

    #[test]
    fn test_columns_missing() {
        assert!(TableColumns::from_headers(["Symbol", "AtomicMass"]).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            load_element_table(Path::new("table.txt")),
            Err(QvError::Parse(_))
        ));
    }

    #[test]
    fn test_fallback_to_embedded() {
        let table = element_table_or_default(Some(Path::new("/definitely/missing.csv")));
        assert_eq!(table.len(), 118);
        let table = element_table_or_default(None);
        assert_eq!(table.electrons_for("Ne").unwrap(), 10);
    }
}
