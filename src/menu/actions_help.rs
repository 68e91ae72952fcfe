use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, AboutDialog, License};

pub fn setup(app: &Application, window: &ApplicationWindow) {

    // --- ABOUT ACTION ---
    let about_action = gtk4::gio::SimpleAction::new("about", None);
    let win_weak = window.downgrade();

    about_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            let dialog = AboutDialog::builder()
                .transient_for(&win)
                .modal(true)
                .program_name("qview")
                .version(env!("CARGO_PKG_VERSION"))
                .comments("Electron configurations and quantum numbers (n, l, m, s) of every electron, written in Rust and GTK4.")
                .license_type(License::MitX11)
                .logo_icon_name("applications-science")
                .build();

            dialog.present();
        }
    });
    app.add_action(&about_action);


    // --- QUANTUM NUMBER DEFINITIONS ---
    let defs_action = gtk4::gio::SimpleAction::new("definitions", None);
    let win_weak_d = window.downgrade();

    defs_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_d.upgrade() {
            let dialog = gtk4::MessageDialog::builder()
                .transient_for(&win)
                .modal(true)
                .buttons(gtk4::ButtonsType::Close)
                .text("Quantum Number Definitions")
                .secondary_text(DEFINITIONS)
                .build();
            dialog.connect_response(|d, _| d.destroy());
            dialog.present();
        }
    });
    app.add_action(&defs_action);
}

const DEFINITIONS: &str = "\
n  Principal quantum number: the shell, the leading digit of the orbital label.
l  Azimuthal quantum number: 0 for s orbitals, n - 1 otherwise (classroom simplification).
m  Magnetic quantum number: orientation, from -l to l.
s  Spin quantum number: +1/2 (up) or -1/2 (down).

Plot coordinates are (n, l, l + m). Spin-up and spin-down points use the
colours chosen in Preferences.";
