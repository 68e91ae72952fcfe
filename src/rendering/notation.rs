// src/rendering/notation.rs

use crate::model::{ElectronConfiguration, FilledOrbital, Spin};

/// Tokens "<up>↑" and "<down>↓", skipping zero counts.
fn spin_tokens(filled: &FilledOrbital) -> Vec<String> {
    let mut tokens = Vec::with_capacity(2);
    if filled.up > 0 {
        tokens.push(format!("{}{}", filled.up, Spin::Up.arrow()));
    }
    if filled.down > 0 {
        tokens.push(format!("{}{}", filled.down, Spin::Down.arrow()));
    }
    tokens
}

/// Orbital notation, one orbital per line: `2p: 3↑ 1↓`
pub fn render_orbital(config: &ElectronConfiguration) -> String {
    config
        .iter()
        .filter(|(_, filled)| !filled.is_empty())
        .map(|(orbital, filled)| format!("{}: {}", orbital, spin_tokens(filled).join(" ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Standard notation: `1s^(2) 2s^(2) 2p^(2)`
pub fn render_standard(config: &ElectronConfiguration) -> String {
    config
        .iter()
        .filter(|(_, filled)| !filled.is_empty())
        .map(|(orbital, filled)| format!("{}^({})", orbital, filled.total()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// LaTeX `align*` block of the orbital notation, for pasting into documents.
pub fn render_latex(config: &ElectronConfiguration) -> String {
    let mut out = String::from(r"\begin{align*}");

    for (orbital, filled) in config.iter().filter(|(_, f)| !f.is_empty()) {
        out.push_str(&format!(r"{}: & \quad ", orbital));
        if filled.up > 0 {
            out.push_str(&format!(r"{}\uparrow", filled.up));
        }
        if filled.down > 0 {
            if filled.up > 0 {
                out.push_str(r" \quad ");
            }
            out.push_str(&format!(r"{}\downarrow", filled.down));
        }
        out.push_str(r"\\");
    }

    out.push_str(r"\end{align*}");
    out
}
