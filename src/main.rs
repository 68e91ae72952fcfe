use gtk4::prelude::*;
use gtk4::{glib, Application, ApplicationWindow, Button, DrawingArea, Entry, Frame, Label, Orientation, Paned, ScrolledWindow, TextView};
use gtk4::Box as GtkBox;
use std::cell::RefCell;
use std::rc::Rc;

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod menu;
pub mod model;
pub mod physics;
pub mod rendering;
pub mod state;
pub mod ui;
pub mod utils;

use state::AppState;
use ui::{setup_interactions, ResultWidgets};

const APP_ID: &str = "org.mavensgroup.qview";

fn main() -> glib::ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return run_headless(&args);
    }

    let app = Application::builder()
        .application_id(APP_ID)
        .build();

    app.connect_activate(build_ui);
    // Arguments were handled above; keep GTK from parsing them again
    app.run_with_args::<&str>(&[])
}

fn run_headless(args: &[String]) -> glib::ExitCode {
    utils::logger::init_cli();

    let parsed = match cli::parse_args(args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}\n\n{}", e, cli::USAGE);
            return glib::ExitCode::FAILURE;
        }
    };

    let (config, msg) = config::Config::load();
    log::debug!("{}", msg);

    match cli::run(&parsed, &config) {
        Ok(out) => {
            println!("{}", out);
            glib::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            glib::ExitCode::FAILURE
        }
    }
}

fn build_ui(app: &Application) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title("QView - Quantum Numbers of Electrons")
        .default_width(1200)
        .default_height(800)
        .build();

    // 1. TOP LEVEL: Vertical Box (Menu on top, Main Content below)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // 2. INPUT ROW: "Element Symbol [____] [Show]"
    let input_row = GtkBox::new(Orientation::Horizontal, 10);
    input_row.set_margin_top(10);
    input_row.set_margin_bottom(10);
    input_row.set_margin_start(10);
    input_row.set_margin_end(10);

    let entry = Entry::builder()
        .placeholder_text("e.g. C, Fe, Ne")
        .width_chars(8)
        .build();
    let submit_button = Button::with_label("Show");
    input_row.append(&Label::new(Some("Element Symbol:")));
    input_row.append(&entry);
    input_row.append(&submit_button);

    // 3. MAIN CONTENT: Results text | Plot
    let results_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    let results_scroll = ScrolledWindow::builder()
        .min_content_width(380)
        .child(&results_view)
        .build();

    let drawing_area = DrawingArea::new();
    drawing_area.set_hexpand(true);
    drawing_area.set_vexpand(true);

    let main_paned = Paned::new(Orientation::Horizontal);
    main_paned.set_start_child(Some(&results_scroll));
    main_paned.set_end_child(Some(&drawing_area));
    main_paned.set_position(420);
    main_paned.set_vexpand(true);

    // 4. Console
    let info_frame = Frame::new(None);
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    let console_scroll = ScrolledWindow::builder()
        .min_content_height(120)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&console_scroll));

    // Logger first so config/table messages land in the console
    if let Err(e) = utils::logger::init(&console_view) {
        eprintln!("Logger already installed: {}", e);
    }

    let mut initial_state = AppState::new();
    initial_state.load_config();
    let state = Rc::new(RefCell::new(initial_state));

    // 5. Menu Bar
    let menu_bar = menu::build_menu_and_actions(app, &window, state.clone(), &drawing_area, &results_view);

    // Assemble Root
    root_vbox.append(&menu_bar);
    root_vbox.append(&input_row);
    root_vbox.append(&main_paned);
    root_vbox.append(&info_frame);

    // --- Setup Logic ---
    rendering::setup_drawing(&drawing_area, state.clone());

    let widgets = ResultWidgets {
        results_view: results_view.clone(),
        drawing_area: drawing_area.clone(),
    };
    widgets.refresh(&state.borrow());
    setup_interactions(&window, state.clone(), &entry, &submit_button, widgets);

    window.present();
    entry.grab_focus();
}
