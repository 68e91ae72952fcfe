// src/menu/mod.rs

use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea, TextView};
use std::cell::RefCell;
use std::rc::Rc;

pub mod actions_file;
pub mod actions_help;

pub fn build_menu_and_actions(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  drawing_area: &DrawingArea,
  results_view: &TextView,
) -> gtk4::Box {
  // Register Actions
  actions_file::setup(app, window, state.clone(), drawing_area, results_view);
  actions_help::setup(app, window);

  // Keyboard Shortcuts
  app.set_accels_for_action("app.load_table", &["<Primary>o"]);
  app.set_accels_for_action("app.export", &["<Primary>e"]);
  app.set_accels_for_action("app.preferences", &["<Primary>p"]);
  app.set_accels_for_action("app.quit", &["<Primary>q"]);

  // --- BUILD MENU BAR ---
  let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
  let root_model = gtk4::gio::Menu::new();

  // --- FILE MENU ---
  let file_menu = gtk4::gio::Menu::new();
  file_menu.append(Some("Load Element Table..."), Some("app.load_table"));
  file_menu.append(Some("Export Plot..."), Some("app.export"));
  file_menu.append(Some("Preferences..."), Some("app.preferences"));
  file_menu.append(Some("Quit"), Some("app.quit"));
  root_model.append_submenu(Some("File"), &file_menu);

  // --- HELP MENU ---
  let help_menu = gtk4::gio::Menu::new();
  help_menu.append(Some("Quantum Number Definitions"), Some("app.definitions"));
  help_menu.append(Some("About"), Some("app.about"));
  root_model.append_submenu(Some("Help"), &help_menu);

  let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
  menu_bar.append(&popover_bar);

  menu_bar
}
