// src/physics/analysis.rs

use crate::error::Result;
use crate::model::{ElectronConfiguration, ElementTable, QuantumNumberSet, Spin};
use crate::rendering::{render_latex, render_orbital, render_standard};
use serde::Serialize;

/// One line of the per-electron table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectronRow {
    pub orbital: String,
    /// 1-based position inside the orbital
    pub electron: usize,
    pub n: u32,
    pub l: u32,
    pub m: i32,
    pub s: f64,
}

/// Scatter point for the 3-D view: x = n, y = l, z = l + m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub spin: Spin,
}

/// Result of one pipeline run for one element.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub symbol: String,
    pub name: String,
    /// Count from the element table; can exceed what the orbitals hold
    pub electrons: u32,
    pub configuration: ElectronConfiguration,
    pub quantum_numbers: QuantumNumberSet,
    pub orbital_notation: String,
    pub standard_notation: String,
    pub latex: String,
}

impl Analysis {
    /// Looks up `symbol` and, if found, runs fill -> assign -> render.
    ///
    /// An unknown symbol returns `NotFound` before anything is computed.
    pub fn run(symbol: &str, table: &ElementTable) -> Result<Self> {
        let element = table.find(symbol)?;
        log::info!("{} ({}): {} electrons", element.symbol, element.name, element.electrons);

        let mut analysis = Self::for_electron_count(element.electrons as i64)?;
        analysis.symbol = element.symbol.clone();
        analysis.name = element.name.clone();
        analysis.electrons = element.electrons;
        Ok(analysis)
    }

    /// Pipeline without the element lookup.
    pub fn for_electron_count(electrons: i64) -> Result<Self> {
        let configuration = super::filling::fill(electrons)?;
        let quantum_numbers = super::quantum_numbers::assign(&configuration);

        Ok(Self {
            symbol: String::new(),
            name: String::new(),
            electrons: configuration.total_electrons(),
            orbital_notation: render_orbital(&configuration),
            standard_notation: render_standard(&configuration),
            latex: render_latex(&configuration),
            configuration,
            quantum_numbers,
        })
    }

    pub fn rows(&self) -> Vec<ElectronRow> {
        electron_rows(&self.quantum_numbers)
    }

    pub fn points(&self) -> Vec<PlotPoint> {
        plot_points(&self.quantum_numbers)
    }

    /// "Fe (Iron)" or just the count when no element is attached
    pub fn title(&self) -> String {
        if self.symbol.is_empty() {
            format!("{} electrons", self.electrons)
        } else {
            format!("{} ({})", self.symbol, self.name)
        }
    }
}

pub fn electron_rows(set: &QuantumNumberSet) -> Vec<ElectronRow> {
    let mut rows = Vec::with_capacity(set.electron_count());
    for (orbital, electrons) in set.iter() {
        let label = orbital.label();
        for (i, qn) in electrons.iter().enumerate() {
            rows.push(ElectronRow {
                orbital: label.clone(),
                electron: i + 1,
                n: qn.n,
                l: qn.l,
                m: qn.m,
                s: qn.s(),
            });
        }
    }
    rows
}

pub fn plot_points(set: &QuantumNumberSet) -> Vec<PlotPoint> {
    set.electrons()
        .map(|qn| {
            let l = qn.l as i32;
            PlotPoint { x: qn.n as i32, y: l, z: l + qn.m, spin: qn.spin }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QvError;
    use crate::model::{embedded_table, Element};
    use crate::utils::report;

    #[test]
    fn test_run_carbon() {
        let a = Analysis::run("c", embedded_table()).unwrap();
        assert_eq!(a.symbol, "C");
        assert_eq!(a.name, "Carbon");
        assert_eq!(a.electrons, 6);
        assert_eq!(a.standard_notation, "1s^(2) 2s^(2) 2p^(2)");
        assert_eq!(a.title(), "C (Carbon)");
    }

    #[test]
    fn test_unknown_symbol_short_circuits() {
        let err = Analysis::run("Qq", embedded_table()).unwrap_err();
        assert!(matches!(err, QvError::NotFound(_)));
        assert!(err.user_message().contains("not an element"));
    }

    #[test]
    fn test_rows_are_numbered_per_orbital() {
        let a = Analysis::for_electron_count(6).unwrap();
        let rows = a.rows();
        assert_eq!(rows.len(), 6);
        let first_2p = rows.iter().position(|r| r.orbital == "2p").unwrap();
        assert_eq!(rows[first_2p].electron, 1);
        assert_eq!(rows[first_2p + 1].electron, 2);
        assert_eq!(rows[1], ElectronRow { orbital: "1s".into(), electron: 2, n: 1, l: 0, m: 0, s: -0.5 });
    }

    #[test]
    fn test_points_use_l_plus_m() {
        let a = Analysis::for_electron_count(5).unwrap();
        let points = a.points();
        assert_eq!(points.len(), 5);
        // Single 2p electron: n = 2, l = 1, m = -1
        let last = points.last().unwrap();
        assert_eq!((last.x, last.y, last.z), (2, 1, 0));
        assert_eq!(last.spin, Spin::Up);
    }

    #[test]
    fn test_table_count_kept_when_truncated() {
        let table = ElementTable::from_elements(vec![Element {
            symbol: "Xx".into(),
            name: "Heavy".into(),
            electrons: 150,
        }]);
        let a = Analysis::run("xx", &table).unwrap();
        assert_eq!(a.electrons, 150);
        assert_eq!(a.configuration.total_electrons(), 118);
        assert_eq!(a.rows().len(), 118);
        assert!(report::analysis_summary(&a).contains("Number of electrons: 150"));
    }

    #[test]
    fn test_zero_electrons() {
        let a = Analysis::for_electron_count(0).unwrap();
        assert!(a.configuration.is_empty());
        assert!(a.quantum_numbers.is_empty());
        assert!(a.orbital_notation.is_empty());
        assert!(a.standard_notation.is_empty());
        assert!(a.rows().is_empty());
        assert!(a.points().is_empty());
    }

    #[test]
    fn test_exponents_sum_to_count() {
        for count in 0..=118 {
            let a = Analysis::for_electron_count(count).unwrap();
            let sum: i64 = a
                .standard_notation
                .split_whitespace()
                .map(|term| {
                    let start = term.find("^(").unwrap() + 2;
                    term[start..term.len() - 1].parse::<i64>().unwrap()
                })
                .sum();
            assert_eq!(sum, count);
        }
    }
}
