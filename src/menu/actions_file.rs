// src/menu/actions_file.rs

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow};
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::AppState;
use crate::ui::show_preferences_window;

pub fn setup(app: &Application, window: &ApplicationWindow, state: Rc<RefCell<AppState>>) {
    // --- PREFERENCES ACTION ---
    let pref_action = gtk4::gio::SimpleAction::new("preferences", None);
    let win_weak = window.downgrade();
    let state_pref = state.clone();

    pref_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            show_preferences_window(&win, state_pref.clone());
        }
    });
    app.add_action(&pref_action);

    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let app_weak = app.downgrade();
    let state_quit = state.clone();

    quit_action.connect_activate(move |_, _| {
        // Persist the session's temperature/preferences before exit.
        state_quit.borrow().save_config();
        if let Some(app) = app_weak.upgrade() {
            app.quit();
        }
    });
    app.add_action(&quit_action);
}
