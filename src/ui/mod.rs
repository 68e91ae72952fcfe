pub mod preferences;
pub mod interactions;

// Re-exports
pub use preferences::show_preferences_window;
pub use interactions::{setup_interactions, ResultWidgets};

use gtk4::TextView;
use gtk4::prelude::*;

/// Replaces the results view content and scrolls back to the top.
pub fn show_results(results_view: &TextView, text: &str) {
    let buffer = results_view.buffer();
    buffer.set_text(text);
    let mut start = buffer.start_iter();
    results_view.scroll_to_iter(&mut start, 0.0, false, 0.0, 0.0);
}
