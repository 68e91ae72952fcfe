use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea, FileChooserNative, FileChooserAction, ResponseType, TextView, FileFilter};
use std::rc::Rc;
use std::cell::RefCell;
use crate::config::ExportFormat;
use crate::state::AppState;
use crate::io;
use crate::rendering::{export_plot, export_target};
use crate::ui::{show_preferences_window, ResultWidgets};

pub fn setup(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    drawing_area: &DrawingArea,
    results_view: &TextView,
) {

    // --- LOAD ELEMENT TABLE ACTION ---
    let load_action = gtk4::gio::SimpleAction::new("load_table", None);
    let win_weak = window.downgrade();
    let state_weak = Rc::downgrade(&state);
    let results_weak = results_view.downgrade();
    let da_weak = drawing_area.downgrade();

    load_action.connect_activate(move |_, _| {
        let win = match win_weak.upgrade() { Some(w) => w, None => return };

        let dialog = FileChooserNative::new(
            Some("Open Element Table"),
            Some(&win),
            FileChooserAction::Open,
            Some("Open"),
            Some("Cancel"),
        );

        let filter_any = FileFilter::new();
        filter_any.set_name(Some("Element Tables (*.csv, *.xlsx, *.ods)"));
        filter_any.add_pattern("*.csv");
        filter_any.add_pattern("*.xlsx");
        filter_any.add_pattern("*.xls");
        filter_any.add_pattern("*.ods");
        dialog.add_filter(&filter_any);

        let state_weak_inner = state_weak.clone();
        let results_weak_inner = results_weak.clone();
        let da_weak_inner = da_weak.clone();

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    if let Some(st) = state_weak_inner.upgrade() {
                        match io::load_element_table(&path) {
                            Ok(table) => {
                                log::info!("Loaded {} elements from {:?}", table.len(), path);
                                {
                                    let mut s = st.borrow_mut();
                                    s.replace_table(table, path.clone());
                                    log::info!("{}", s.config.save());
                                }
                                if let (Some(view), Some(da)) = (results_weak_inner.upgrade(), da_weak_inner.upgrade()) {
                                    let widgets = ResultWidgets { results_view: view, drawing_area: da };
                                    widgets.refresh(&st.borrow());
                                }
                            }
                            Err(e) => log::error!("Error loading element table: {}", e),
                        }
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&load_action);


    // --- EXPORT PLOT ACTION ---
    let export_action = gtk4::gio::SimpleAction::new("export", None);
    let win_weak_e = window.downgrade();
    let state_weak_e = Rc::downgrade(&state);

    export_action.connect_activate(move |_, _| {
        let win = match win_weak_e.upgrade() { Some(w) => w, None => return };
        let st_rc = match state_weak_e.upgrade() { Some(s) => s, None => return };

        let default_name = match &st_rc.borrow().analysis {
            Some(a) => a.symbol.to_lowercase(),
            None => {
                log::warn!("Nothing to export. Enter an element symbol first.");
                return;
            }
        };

        let dialog = FileChooserNative::new(Some("Export Plot"), Some(&win), FileChooserAction::Save, Some("Export"), Some("Cancel"));

        let filter_png = FileFilter::new(); filter_png.set_name(Some("PNG Image (*.png)")); filter_png.add_pattern("*.png"); dialog.add_filter(&filter_png);
        let filter_pdf = FileFilter::new(); filter_pdf.set_name(Some("PDF Document (*.pdf)")); filter_pdf.add_pattern("*.pdf"); dialog.add_filter(&filter_pdf);

        let format = st_rc.borrow().config.default_export_format;
        match format {
            ExportFormat::Png => { dialog.set_filter(&filter_png); dialog.set_current_name(&format!("{}_quantum_numbers.png", default_name)); },
            ExportFormat::Pdf => { dialog.set_filter(&filter_pdf); dialog.set_current_name(&format!("{}_quantum_numbers.pdf", default_name)); }
        }

        let state_weak_inner = state_weak_e.clone();
        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    if let Some(st) = state_weak_inner.upgrade() {
                        let s = st.borrow();
                        let (target, format) = export_target(&path, s.config.default_export_format);
                        let (title, points) = s.plot_data();
                        if let Err(e) = export_plot(&target, &title, &points, &s.config.plot_style, s.config.export_size, format) {
                            log::error!("Export failed: {}", e);
                        }
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&export_action);


    // --- PREFERENCES ACTION ---
    let pref_action = gtk4::gio::SimpleAction::new("preferences", None);
    let win_weak_p = window.downgrade();
    let state_weak_p = Rc::downgrade(&state);
    let da_weak_p = drawing_area.downgrade();

    pref_action.connect_activate(move |_, _| {
        if let (Some(win), Some(st), Some(da)) = (win_weak_p.upgrade(), state_weak_p.upgrade(), da_weak_p.upgrade()) {
            show_preferences_window(&win, st, da);
        }
    });
    app.add_action(&pref_action);


    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let win_weak_q = window.downgrade();

    quit_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_q.upgrade() {
            win.close();
        }
    });
    app.add_action(&quit_action);
}
