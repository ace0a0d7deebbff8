// src/ui/preferences.rs

use gtk4::{self as gtk, prelude::*};
use gtk4::gdk;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{ExportFormat, LearnLevel};
use crate::state::AppState;

pub fn show_preferences_window(parent: &gtk::ApplicationWindow, state: Rc<RefCell<AppState>>) {
    let window = gtk::Window::builder()
        .title("Preferences")
        .transient_for(parent)
        .modal(false)
        .default_width(360)
        .default_height(420)
        .resizable(false)
        .build();

    let main_vbox = gtk::Box::new(gtk::Orientation::Vertical, 0);

    let notebook = gtk::Notebook::new();
    notebook.set_vexpand(true);

    // --- TAB 1: LEARNING ---
    let learning_tab = build_learning_tab(state.clone());
    notebook.append_page(&learning_tab, Some(&gtk::Label::new(Some("Learning"))));

    // --- TAB 2: APPEARANCE ---
    let appearance_tab = build_appearance_tab(state.clone());
    notebook.append_page(&appearance_tab, Some(&gtk::Label::new(Some("Appearance"))));

    main_vbox.append(&notebook);

    // --- FOOTER (Close Button) ---
    let footer_box = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    footer_box.set_margin_top(10);
    footer_box.set_margin_bottom(10);
    footer_box.set_margin_start(10);
    footer_box.set_margin_end(10);
    footer_box.set_halign(gtk::Align::End);

    let close_btn = gtk::Button::with_label("Close");
    let win_clone = window.clone();
    let s = state.clone();
    close_btn.connect_clicked(move |_| {
        s.borrow().save_config();
        win_clone.close();
    });

    footer_box.append(&close_btn);
    main_vbox.append(&footer_box);

    window.set_child(Some(&main_vbox));
    window.present();
}

fn build_learning_tab(state: Rc<RefCell<AppState>>) -> gtk::Box {
    let container = gtk::Box::new(gtk::Orientation::Vertical, 15);
    container.set_margin_top(15);
    container.set_margin_bottom(15);
    container.set_margin_start(15);
    container.set_margin_end(15);

    let level_label = gtk::Label::new(Some("Description detail level"));
    level_label.set_halign(gtk::Align::Start);
    container.append(&level_label);

    let labels: Vec<&str> = LearnLevel::ALL.iter().map(|l| l.label()).collect();
    let dropdown = gtk::DropDown::from_strings(&labels);
    let current = LearnLevel::ALL
        .iter()
        .position(|&l| l == state.borrow().config.learn_level)
        .unwrap_or(0);
    dropdown.set_selected(current as u32);

    let s = state.clone();
    dropdown.connect_selected_notify(move |dd| {
        if let Some(&level) = LearnLevel::ALL.get(dd.selected() as usize) {
            s.borrow_mut().config.learn_level = level;
            log::info!("learn level set to {}", level.label());
        }
    });
    container.append(&dropdown);

    let hint = gtk::Label::new(Some(
        "Element descriptions adapt to the selected level. Reopen a detail window to see the change.",
    ));
    hint.set_wrap(true);
    hint.set_opacity(0.6);
    hint.set_halign(gtk::Align::Start);
    hint.set_xalign(0.0);
    container.append(&hint);

    container
}

fn build_appearance_tab(state: Rc<RefCell<AppState>>) -> gtk::Box {
    let container = gtk::Box::new(gtk::Orientation::Vertical, 15);
    container.set_margin_top(15);
    container.set_margin_bottom(15);
    container.set_margin_start(15);
    container.set_margin_end(15);

    // --- Glow slider ---
    let glow_label = gtk::Label::new(Some("Glow strength"));
    glow_label.set_halign(gtk::Align::Start);
    container.append(&glow_label);

    let glow = gtk::Scale::with_range(gtk::Orientation::Horizontal, 0.0, 1.0, 0.1);
    glow.set_value(state.borrow().config.style.glow_strength);
    let s = state.clone();
    glow.connect_value_changed(move |scale| {
        s.borrow_mut().config.style.glow_strength = scale.value();
    });
    container.append(&glow);

    // --- Background color ---
    let bg_box = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    let bg_label = gtk::Label::new(Some("Atom view background"));
    bg_label.set_halign(gtk::Align::Start);

    let bg_btn = gtk::ColorButton::new();
    let (r, g, b) = state.borrow().config.style.background_color;
    bg_btn.set_rgba(&gdk::RGBA::new(r as f32, g as f32, b as f32, 1.0));
    bg_btn.set_hexpand(true);
    bg_btn.set_halign(gtk::Align::End);

    let s = state.clone();
    bg_btn.connect_color_set(move |btn| {
        let c = btn.rgba();
        s.borrow_mut().config.style.background_color =
            (c.red() as f64, c.green() as f64, c.blue() as f64);
    });

    bg_box.append(&bg_label);
    bg_box.append(&bg_btn);
    container.append(&bg_box);

    container.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

    // --- Export format ---
    let fmt_label = gtk::Label::new(Some("Default export format"));
    fmt_label.set_halign(gtk::Align::Start);
    container.append(&fmt_label);

    let fmt_dropdown = gtk::DropDown::from_strings(&["PNG", "PDF"]);
    fmt_dropdown.set_selected(match state.borrow().config.default_export_format {
        ExportFormat::Png => 0,
        ExportFormat::Pdf => 1,
    });
    let s = state.clone();
    fmt_dropdown.connect_selected_notify(move |dd| {
        s.borrow_mut().config.default_export_format = if dd.selected() == 1 {
            ExportFormat::Pdf
        } else {
            ExportFormat::Png
        };
    });
    container.append(&fmt_dropdown);

    container
}
