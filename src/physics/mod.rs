// src/physics/mod.rs

pub mod filling;
pub mod quantum_numbers;
pub mod analysis;

// Re-export commonly used items
pub use filling::{fill, electron_count_from_value};
pub use quantum_numbers::assign;
pub use analysis::{Analysis, ElectronRow, PlotPoint};
