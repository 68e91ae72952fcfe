use gtk4::{self as gtk, prelude::*};
use gdk4 as gdk;
use std::rc::Rc;
use std::cell::RefCell;
use crate::state::AppState;

fn to_rgba(c: (f64, f64, f64)) -> gdk::RGBA {
    gdk::RGBA::new(c.0 as f32, c.1 as f32, c.2 as f32, 1.0)
}

fn from_rgba(c: &gdk::RGBA) -> (f64, f64, f64) {
    (c.red() as f64, c.green() as f64, c.blue() as f64)
}

pub fn show_preferences_window(
    parent: &gtk::ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    drawing_area: gtk::DrawingArea,
) {
    let window = gtk::Window::builder()
        .title("Preferences")
        .transient_for(parent)
        .modal(false)
        .default_width(340)
        .resizable(false)
        .build();

    let main_vbox = gtk::Box::new(gtk::Orientation::Vertical, 0);
    main_vbox.append(&build_plot_tab(state.clone(), drawing_area));

    // --- FOOTER (Close Button) ---
    let footer_box = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    footer_box.set_margin_top(10);
    footer_box.set_margin_bottom(10);
    footer_box.set_margin_start(10);
    footer_box.set_margin_end(10);
    footer_box.set_halign(gtk::Align::End);

    let close_btn = gtk::Button::with_label("Close");
    let win_clone = window.clone();
    close_btn.connect_clicked(move |_| win_clone.close());

    footer_box.append(&close_btn);
    main_vbox.append(&footer_box);

    // Persist whatever was changed
    let s = state.clone();
    window.connect_close_request(move |_| {
        let msg = s.borrow().config.save();
        log::info!("{}", msg);
        gtk4::glib::Propagation::Proceed
    });

    window.set_child(Some(&main_vbox));
    window.present();
}

/// Colours, marker size and annotations of the quantum number plot
fn build_plot_tab(state: Rc<RefCell<AppState>>, drawing_area: gtk::DrawingArea) -> gtk::Box {
    let container = gtk::Box::new(gtk::Orientation::Vertical, 15);
    container.set_margin_top(15);
    container.set_margin_bottom(15);
    container.set_margin_start(15);
    container.set_margin_end(15);

    let frame = gtk::Frame::new(Some("Plot"));
    let vbox = gtk::Box::new(gtk::Orientation::Vertical, 5);
    vbox.set_margin_top(10);
    vbox.set_margin_bottom(10);
    vbox.set_margin_start(10);
    vbox.set_margin_end(10);

    // --- Helper for colour rows ---
    fn add_color_row(
        label: &str,
        val: (f64, f64, f64),
        box_cont: &gtk::Box,
        cb: impl Fn((f64, f64, f64)) + 'static,
    ) {
        let row = gtk::Box::new(gtk::Orientation::Horizontal, 10);
        row.set_margin_top(5);

        let lbl = gtk::Label::new(Some(label));
        lbl.set_halign(gtk::Align::Start);

        let btn = gtk::ColorButton::new();
        btn.set_rgba(&to_rgba(val));
        btn.set_hexpand(true);
        btn.set_halign(gtk::Align::End);
        btn.connect_color_set(move |b| cb(from_rgba(&b.rgba())));

        row.append(&lbl);
        row.append(&btn);
        box_cont.append(&row);
    }

    let style = state.borrow().config.plot_style.clone();

    let s = state.clone(); let da = drawing_area.clone();
    add_color_row("Spin Up", style.spin_up_color, &vbox, move |c| {
        s.borrow_mut().config.plot_style.spin_up_color = c;
        da.queue_draw();
    });

    let s = state.clone(); let da = drawing_area.clone();
    add_color_row("Spin Down", style.spin_down_color, &vbox, move |c| {
        s.borrow_mut().config.plot_style.spin_down_color = c;
        da.queue_draw();
    });

    let s = state.clone(); let da = drawing_area.clone();
    add_color_row("Background", style.background_color, &vbox, move |c| {
        s.borrow_mut().config.plot_style.background_color = c;
        da.queue_draw();
    });

    vbox.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

    // Marker size
    let lbl = gtk::Label::new(Some("Point Size"));
    lbl.set_halign(gtk::Align::Start);
    lbl.set_margin_top(5);
    vbox.append(&lbl);

    let scale = gtk::Scale::with_range(gtk::Orientation::Horizontal, 2.0, 16.0, 1.0);
    scale.set_value(style.point_size as f64);
    let s = state.clone(); let da = drawing_area.clone();
    scale.connect_value_changed(move |sc| {
        s.borrow_mut().config.plot_style.point_size = sc.value().round() as u32;
        da.queue_draw();
    });
    vbox.append(&scale);

    // Count annotations
    let check_counts = gtk::CheckButton::with_label("Show electron counts per point");
    check_counts.set_active(style.show_counts);
    let s = state.clone(); let da = drawing_area.clone();
    check_counts.connect_toggled(move |btn| {
        s.borrow_mut().config.plot_style.show_counts = btn.is_active();
        da.queue_draw();
    });
    vbox.append(&check_counts);

    frame.set_child(Some(&vbox));
    container.append(&frame);

    container
}
