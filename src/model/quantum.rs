// src/model/quantum.rs

use super::orbital::Orbital;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Spin {
    Up,
    Down,
}

impl Spin {
    /// Spin quantum number s
    pub const fn value(self) -> f64 {
        match self {
            Spin::Up => 0.5,
            Spin::Down => -0.5,
        }
    }

    pub const fn arrow(self) -> char {
        match self {
            Spin::Up => '↑',
            Spin::Down => '↓',
        }
    }
}

/// (n, l, m, s) of a single electron.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumNumbers {
    pub n: u32,
    pub l: u32,
    pub m: i32,
    pub spin: Spin,
}

impl QuantumNumbers {
    pub const fn s(&self) -> f64 {
        self.spin.value()
    }
}

/// Per-orbital electron quantum numbers, in filling order.
/// Inside an orbital the spin-up group comes first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantumNumberSet {
    entries: Vec<(Orbital, Vec<QuantumNumbers>)>,
}

impl QuantumNumberSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, orbital: Orbital, electrons: Vec<QuantumNumbers>) {
        self.entries.push((orbital, electrons));
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Orbital, Vec<QuantumNumbers>)> {
        self.entries.iter()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, label: &str) -> Option<&[QuantumNumbers]> {
        self.entries
            .iter()
            .find(|(orb, _)| orb.label() == label)
            .map(|(_, electrons)| electrons.as_slice())
    }

    /// Every electron in order, flattened across orbitals.
    pub fn electrons(&self) -> impl Iterator<Item = &QuantumNumbers> {
        self.entries.iter().flat_map(|(_, electrons)| electrons.iter())
    }

    pub fn electron_count(&self) -> usize {
        self.entries.iter().map(|(_, e)| e.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
