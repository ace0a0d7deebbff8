// src/menu/actions_view.rs

use gtk4::prelude::*;
use gtk4::{Application, Revealer};
use std::rc::Rc;

use crate::panels::BuilderPanel;

pub fn setup(app: &Application, builder_panel: &Rc<BuilderPanel>, console_revealer: &Revealer) {
    // --- TOGGLE COMPOUND BUILDER ---
    let builder_action = gtk4::gio::SimpleAction::new("toggle_builder", None);
    let panel = builder_panel.clone();
    builder_action.connect_activate(move |_, _| {
        panel.toggle();
    });
    app.add_action(&builder_action);

    // --- TOGGLE ACTIVITY CONSOLE ---
    let console_action = gtk4::gio::SimpleAction::new("toggle_console", None);
    let rev_weak = console_revealer.downgrade();
    console_action.connect_activate(move |_, _| {
        if let Some(rev) = rev_weak.upgrade() {
            rev.set_reveal_child(!rev.reveals_child());
        }
    });
    app.add_action(&console_action);
}
