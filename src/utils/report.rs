// src/utils/report.rs

use crate::physics::{Analysis, ElectronRow};

/// Fixed-width table of every electron's quantum numbers
pub fn quantum_table(rows: &[ElectronRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:<9} {:>3} {:>3} {:>4} {:>5}\n",
        "Orbital", "Electron", "n", "l", "m", "s"
    ));
    out.push_str("--------------------------------------\n");

    for row in rows {
        out.push_str(&format!(
            "{:<8} {:<9} {:>3} {:>3} {:>4} {:>5.1}\n",
            row.orbital, row.electron, row.n, row.l, row.m, row.s
        ));
    }
    out
}

/// Generates the text for the results view when an element is submitted
pub fn analysis_summary(analysis: &Analysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("Element: {}\n", analysis.title()));
    out.push_str(&format!("Number of electrons: {}\n", analysis.electrons));
    out.push_str("--------------------------------------\n");

    out.push_str("Orbital Notation\n");
    out.push_str(&analysis.orbital_notation);
    out.push_str("\n\n");

    out.push_str("Standard Notation\n");
    out.push_str(&analysis.standard_notation);
    out.push_str("\n\n");

    out.push_str(&format!("Quantum Numbers for Each Electron in {}\n", analysis.symbol));
    out.push_str(&quantum_table(&analysis.rows()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::embedded_table;

    #[test]
    fn test_summary_helium() {
        let a = Analysis::run("He", embedded_table()).unwrap();
        let text = analysis_summary(&a);
        assert!(text.starts_with("Element: He (Helium)\n"));
        assert!(text.contains("Number of electrons: 2"));
        assert!(text.contains("1s: 1↑ 1↓"));
        assert!(text.contains("1s^(2)"));
        assert!(text.contains("1s       2           1   0    0  -0.5"));
    }

    #[test]
    fn test_table_has_header_only_when_empty() {
        let table = quantum_table(&[]);
        assert_eq!(table.lines().count(), 2);
    }
}
