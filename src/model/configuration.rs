// src/model/configuration.rs

use super::orbital::Orbital;

/// Electron counts of one orbital, split by spin direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilledOrbital {
    pub up: u32,
    pub down: u32,
}

impl FilledOrbital {
    pub const fn new(up: u32, down: u32) -> Self {
        Self { up, down }
    }

    pub const fn total(&self) -> u32 {
        self.up + self.down
    }

    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Orbitals in filling order with their occupancy.
///
/// Only orbitals that received at least one electron are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectronConfiguration {
    entries: Vec<(Orbital, FilledOrbital)>,
}

impl ElectronConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an orbital. Callers push in filling order.
    pub(crate) fn push(&mut self, orbital: Orbital, filled: FilledOrbital) {
        self.entries.push((orbital, filled));
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Orbital, FilledOrbital)> {
        self.entries.iter()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, label: &str) -> Option<FilledOrbital> {
        self.entries
            .iter()
            .find(|(orb, _)| orb.label() == label)
            .map(|(_, filled)| *filled)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_electrons(&self) -> u32 {
        self.entries.iter().map(|(_, f)| f.total()).sum()
    }
}

impl<'a> IntoIterator for &'a ElectronConfiguration {
    type Item = &'a (Orbital, FilledOrbital);
    type IntoIter = std::slice::Iter<'a, (Orbital, FilledOrbital)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
