// src/menu/actions_game.rs

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow};
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::AppState;
use crate::ui::show_trivia_window;

pub fn setup(app: &Application, window: &ApplicationWindow, state: Rc<RefCell<AppState>>) {
    let trivia_action = gtk4::gio::SimpleAction::new("trivia", None);
    let win_weak = window.downgrade();

    trivia_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            show_trivia_window(&win, state.clone());
        }
    });
    app.add_action(&trivia_action);
}
