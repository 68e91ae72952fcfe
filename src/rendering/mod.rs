pub mod export;
pub mod notation;
pub mod plot;

// Re-export specific functions to keep the API clean for the rest of the app
pub use export::{export_plot, export_target, setup_drawing};
pub use notation::{render_latex, render_orbital, render_standard};
