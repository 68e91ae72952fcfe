// src/model/orbital.rs

use std::fmt;

/// Subshell letter of an orbital label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subshell {
    S,
    P,
    D,
    F,
}

impl Subshell {
    /// Maximum number of electrons the subshell holds
    pub const fn capacity(self) -> u32 {
        match self {
            Subshell::S => 2,
            Subshell::P => 6,
            Subshell::D => 10,
            Subshell::F => 14,
        }
    }

    /// Electrons of one spin direction before the other direction is used
    pub const fn half_capacity(self) -> u32 {
        self.capacity() / 2
    }

    /// Azimuthal number used throughout the app.
    ///
    /// `0` for s, `n - 1` for every other letter. This is the simplified
    /// classroom convention, not the physical l of p/d/f subshells.
    pub const fn azimuthal(self, n: u32) -> u32 {
        match self {
            Subshell::S => 0,
            _ => n.saturating_sub(1),
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Subshell::S => 's',
            Subshell::P => 'p',
            Subshell::D => 'd',
            Subshell::F => 'f',
        }
    }
}

/// One orbital class, e.g. `2p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orbital {
    pub n: u32,
    pub subshell: Subshell,
}

impl Orbital {
    pub const fn new(n: u32, subshell: Subshell) -> Self {
        Self { n, subshell }
    }

    pub const fn capacity(&self) -> u32 {
        self.subshell.capacity()
    }

    pub const fn l(&self) -> u32 {
        self.subshell.azimuthal(self.n)
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Orbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.n, self.subshell.letter())
    }
}

/// Aufbau filling order (Madelung approximation).
pub const ORBITAL_SEQUENCE: [Orbital; 19] = [
    Orbital::new(1, Subshell::S),
    Orbital::new(2, Subshell::S),
    Orbital::new(2, Subshell::P),
    Orbital::new(3, Subshell::S),
    Orbital::new(3, Subshell::P),
    Orbital::new(4, Subshell::S),
    Orbital::new(3, Subshell::D),
    Orbital::new(4, Subshell::P),
    Orbital::new(5, Subshell::S),
    Orbital::new(4, Subshell::D),
    Orbital::new(5, Subshell::P),
    Orbital::new(6, Subshell::S),
    Orbital::new(4, Subshell::F),
    Orbital::new(5, Subshell::D),
    Orbital::new(6, Subshell::P),
    Orbital::new(7, Subshell::S),
    Orbital::new(5, Subshell::F),
    Orbital::new(6, Subshell::D),
    Orbital::new(7, Subshell::P),
];

/// Sum of all capacities in [`ORBITAL_SEQUENCE`].
pub fn sequence_capacity() -> u32 {
    ORBITAL_SEQUENCE.iter().map(Orbital::capacity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacities() {
        assert_eq!(Subshell::S.capacity(), 2);
        assert_eq!(Subshell::P.capacity(), 6);
        assert_eq!(Subshell::D.capacity(), 10);
        assert_eq!(Subshell::F.capacity(), 14);
        assert_eq!(sequence_capacity(), 118);
    }

    #[test]
    fn test_simplified_l_rule() {
        assert_eq!(Orbital::new(1, Subshell::S).l(), 0);
        assert_eq!(Orbital::new(4, Subshell::S).l(), 0);
        assert_eq!(Orbital::new(2, Subshell::P).l(), 1);
        // Not the physical value (which would be 1)
        assert_eq!(Orbital::new(3, Subshell::P).l(), 2);
        assert_eq!(Orbital::new(4, Subshell::F).l(), 3);
        assert_eq!(Orbital::new(6, Subshell::D).l(), 5);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Orbital::new(3, Subshell::D).to_string(), "3d");
        let labels: Vec<String> = ORBITAL_SEQUENCE.iter().map(|o| o.label()).collect();
        assert_eq!(labels.first().map(String::as_str), Some("1s"));
        assert_eq!(labels.last().map(String::as_str), Some("7p"));
    }
}
