// src/ui/interactions.rs

use crate::error::QvError;
use crate::state::AppState;
use gtk4::gdk;
use gtk4::glib;
use gtk4::{self as gtk, prelude::*};
use gtk4::{ApplicationWindow, EventControllerKey};
use std::cell::RefCell;
use std::rc::Rc;

/// Widgets refreshed after every submission.
#[derive(Clone)]
pub struct ResultWidgets {
  pub results_view: gtk::TextView,
  pub drawing_area: gtk::DrawingArea,
}

impl ResultWidgets {
  pub fn refresh(&self, state: &AppState) {
    super::show_results(&self.results_view, &state.results_text());
    self.drawing_area.queue_draw();
  }
}

/// Runs the pipeline for whatever is in the entry.
fn submit_symbol(text: &str, state: &Rc<RefCell<AppState>>, widgets: &ResultWidgets) {
  let symbol = text.trim();
  if symbol.is_empty() {
    return;
  }

  {
    let mut st = state.borrow_mut();
    match st.submit(symbol) {
      Ok(a) => log::info!("Configuration of {}: {}", a.symbol, a.standard_notation),
      Err(QvError::NotFound(s)) => log::warn!("Unknown element symbol \"{}\"", s),
      Err(e) => log::error!("{}", e),
    }
  }

  widgets.refresh(&state.borrow());
}

pub fn setup_interactions(
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  entry: &gtk::Entry,
  submit_button: &gtk::Button,
  widgets: ResultWidgets,
) {
  // 1. ENTER in the symbol field
  let s = state.clone();
  let w = widgets.clone();
  entry.connect_activate(move |e| {
    submit_symbol(&e.text(), &s, &w);
  });

  // 2. "Show" button
  let s = state.clone();
  let w = widgets.clone();
  let entry_clone = entry.clone();
  submit_button.connect_clicked(move |_| {
    submit_symbol(&entry_clone.text(), &s, &w);
  });

  // 3. ESC clears the current element
  let key_controller = EventControllerKey::new();
  let s = state.clone();
  let entry_clone = entry.clone();
  key_controller.connect_key_pressed(move |_, keyval, _keycode, _state_flags| {
    if keyval == gdk::Key::Escape {
      {
        let mut st = s.borrow_mut();
        st.analysis = None;
        st.message = None;
      }
      entry_clone.set_text("");
      widgets.refresh(&s.borrow());
      return glib::Propagation::Stop;
    }
    glib::Propagation::Proceed
  });
  window.add_controller(key_controller);
}
