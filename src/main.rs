use gtk4::glib;
use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{
    Application, ApplicationWindow, Frame, Orientation, Revealer, RevealerTransitionType,
    ScrolledWindow, TextView,
};
use std::cell::RefCell;
use std::rc::Rc;

pub mod chem;
pub mod config;
pub mod menu;
pub mod model;
pub mod panels;
pub mod rendering;
pub mod state;
pub mod ui;
pub mod utils;

use state::AppState;

fn main() {
    let app = Application::builder()
        .application_id("com.example.elemview")
        .build();

    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &Application) {
    // Activity console first, so table/config loading below is captured.
    let console_view = TextView::builder()
        .editable(false)
        .cursor_visible(false)
        .monospace(true)
        .left_margin(10)
        .right_margin(10)
        .top_margin(10)
        .bottom_margin(10)
        .build();
    if let Err(e) = utils::logger::init(&console_view) {
        eprintln!("logger setup failed: {e}");
    }

    let mut initial_state = AppState::new();
    initial_state.load_config();
    let state = Rc::new(RefCell::new(initial_state));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("ElemView - Interactive Periodic Table")
        .default_width(1280)
        .default_height(860)
        .build();

    // 1. TOP LEVEL: Vertical Box (Menu on top, Main Content below, Console bottom)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // 2. MAIN CONTENT: Horizontal Box (Table | Builder Panel)
    let main_hbox = GtkBox::new(Orientation::Horizontal, 0);
    main_hbox.set_vexpand(true);

    let builder_panel = panels::BuilderPanel::build(state.clone());

    // Card activation: feed the builder while it's open, otherwise open the
    // element detail view.
    let s = state.clone();
    let panel = builder_panel.clone();
    let win_weak = window.downgrade();
    let on_activate: Rc<dyn Fn(usize)> = Rc::new(move |index| {
        if panel.is_open() {
            let symbol = s.borrow().registry.get(index).map(|el| el.symbol.clone());
            if let Some(symbol) = symbol {
                panel.add_atom(&s, &symbol);
            }
        } else if let Some(win) = win_weak.upgrade() {
            ui::show_element_window(&win, s.clone(), index);
        }
    });

    let grid = ui::ElementGrid::build(state.clone(), on_activate);
    let grid_scroll = ScrolledWindow::builder().child(&grid.container).build();
    grid_scroll.set_hexpand(true);
    grid_scroll.set_vexpand(true);

    main_hbox.append(&grid_scroll);
    main_hbox.append(&builder_panel.revealer);

    // 3. Activity console (hidden until F9)
    let console_scroll = ScrolledWindow::builder()
        .min_content_height(130)
        .child(&console_view)
        .build();
    let console_frame = Frame::new(None);
    console_frame.set_child(Some(&console_scroll));
    let console_revealer = Revealer::builder()
        .transition_type(RevealerTransitionType::SlideUp)
        .child(&console_frame)
        .reveal_child(false)
        .build();

    // 4. Menu Bar
    let menu_bar = menu::build_menu_and_actions(
        app,
        &window,
        state.clone(),
        &builder_panel,
        &console_revealer,
    );

    // Assemble Root
    root_vbox.append(&menu_bar);
    root_vbox.append(&main_hbox);
    root_vbox.append(&console_revealer);

    // Persist preferences (temperature, favorites, scores) on exit.
    let s = state.clone();
    window.connect_close_request(move |_| {
        s.borrow().save_config();
        glib::Propagation::Proceed
    });

    window.present();
}
