use std::fs::File;
use std::path::Path;

use ::csv::ReaderBuilder;

use super::TableColumns;
use crate::error::{QvError, Result};
use crate::model::{Element, ElementTable};
use crate::physics::electron_count_from_value;

/// Reads an element table from CSV with a header row.
pub fn parse(path: &Path) -> Result<ElementTable> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let cols = TableColumns::from_headers(headers.iter())?;

    let mut elements = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1
        let line = i + 2;

        let symbol = record.get(cols.symbol).unwrap_or("");
        if symbol.is_empty() {
            continue;
        }

        let raw = record.get(cols.electrons).unwrap_or("");
        let value: f64 = raw.parse().map_err(|_| {
            QvError::Parse(format!("line {}: electron count '{}' is not a number", line, raw))
        })?;
        let electrons = electron_count_from_value(value)
            .map_err(|e| QvError::Parse(format!("line {}: {}", line, e)))?;

        let name = cols
            .name
            .and_then(|idx| record.get(idx))
            .unwrap_or(symbol)
            .to_string();

        elements.push(Element { symbol: symbol.to_string(), name, electrons });
    }

    Ok(ElementTable::from_elements(elements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_periodic_table_layout() {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "AtomicNumber,Element,Symbol,AtomicMass,NumberofNeutrons,NumberofProtons,NumberofElectrons").unwrap();
        writeln!(file, "1,Hydrogen,H,1.007,0,1,1").unwrap();
        writeln!(file, "6,Carbon,C,12.011,6,6,6").unwrap();
        writeln!(file, "26,Iron,Fe,55.845,30,26,26").unwrap();
        file.flush().unwrap();

        let table = parse(file.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.electrons_for("fe").unwrap(), 26);
        assert_eq!(table.find("C").unwrap().name, "Carbon");
        assert!(table.electrons_for("Ne").is_err());
    }

    #[test]
    fn test_float_counts_accepted() {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "Symbol,NumberofElectrons").unwrap();
        writeln!(file, "O, 8.0").unwrap();
        file.flush().unwrap();

        let table = parse(file.path()).unwrap();
        assert_eq!(table.electrons_for("O").unwrap(), 8);
        // No name column: the symbol doubles as the name
        assert_eq!(table.find("O").unwrap().name, "O");
    }

    #[test]
    fn test_bad_count_reports_line() {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "Symbol,NumberofElectrons").unwrap();
        writeln!(file, "H,1").unwrap();
        writeln!(file, "He,-2").unwrap();
        file.flush().unwrap();

        match parse(file.path()) {
            Err(QvError::Parse(msg)) => assert!(msg.starts_with("line 3"), "{}", msg),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_columns() {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "Name,Mass").unwrap();
        writeln!(file, "Hydrogen,1.007").unwrap();
        file.flush().unwrap();

        assert!(matches!(parse(file.path()), Err(QvError::Parse(_))));
    }
}
