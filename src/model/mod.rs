//src/model/mod.rs
pub mod orbital;
pub mod configuration;
pub mod quantum;
pub mod elements;

// Re-exports for cleaner imports
pub use orbital::{Orbital, Subshell, ORBITAL_SEQUENCE};
pub use configuration::{ElectronConfiguration, FilledOrbital};
pub use quantum::{QuantumNumberSet, QuantumNumbers, Spin};
pub use elements::{embedded_table, Element, ElementTable};
