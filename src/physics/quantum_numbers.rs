// src/physics/quantum_numbers.rs

use crate::model::{ElectronConfiguration, QuantumNumberSet, QuantumNumbers, Spin};

/// Derives (n, l, m, s) for every electron of `config`.
///
/// Per orbital the spin-up electrons are emitted first, then spin-down.
/// Each spin group walks m = -l, -l+1, ..., l from the start, wrapping
/// modulo 2l+1 if a group is longer than the cycle.
pub fn assign(config: &ElectronConfiguration) -> QuantumNumberSet {
    let mut set = QuantumNumberSet::new();

    for (orbital, filled) in config {
        let n = orbital.n;
        let l = orbital.l();
        let m_values = magnetic_values(l);

        let mut electrons = Vec::with_capacity(filled.total() as usize);
        for (spin, count) in [(Spin::Up, filled.up), (Spin::Down, filled.down)] {
            for i in 0..count as usize {
                electrons.push(QuantumNumbers {
                    n,
                    l,
                    m: m_values[i % m_values.len()],
                    spin,
                });
            }
        }

        set.push(*orbital, electrons);
    }

    set
}

/// -l..=l
pub fn magnetic_values(l: u32) -> Vec<i32> {
    let l = l as i32;
    (-l..=l).collect()
}
