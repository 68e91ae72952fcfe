// src/io/spreadsheet.rs

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use super::TableColumns;
use crate::error::{QvError, Result};
use crate::model::{Element, ElementTable};
use crate::physics::electron_count_from_value;

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads the first worksheet of an .xlsx/.xls/.ods workbook.
/// Row 1 must hold the column headers.
pub fn parse(path: &Path) -> Result<ElementTable> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| QvError::Parse(format!("{:?} has no worksheets", path)))??;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .ok_or_else(|| QvError::Parse(format!("{:?} is empty", path)))?
        .iter()
        .map(cell_text)
        .collect();
    let cols = TableColumns::from_headers(header.iter().map(String::as_str))?;

    let mut elements = Vec::new();
    for (i, row) in rows.enumerate() {
        let line = i + 2;

        let symbol = row.get(cols.symbol).map(cell_text).unwrap_or_default();
        if symbol.is_empty() {
            continue;
        }

        let value = row
            .get(cols.electrons)
            .and_then(cell_number)
            .ok_or_else(|| QvError::Parse(format!("row {}: electron count is not a number", line)))?;
        let electrons = electron_count_from_value(value)
            .map_err(|e| QvError::Parse(format!("row {}: {}", line, e)))?;

        let name = cols
            .name
            .and_then(|idx| row.get(idx))
            .map(cell_text)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| symbol.clone());

        elements.push(Element { symbol, name, electrons });
    }

    Ok(ElementTable::from_elements(elements))
}
