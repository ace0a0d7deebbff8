// src/menu/actions_help.rs

use gtk4::prelude::*;
use gtk4::{AboutDialog, Application, ApplicationWindow, License};

pub fn setup(app: &Application, window: &ApplicationWindow) {
    // --- ABOUT ACTION ---
    let about_action = gtk4::gio::SimpleAction::new("help_about", None);
    let win_weak = window.downgrade();

    about_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            let dialog = AboutDialog::builder()
                .transient_for(&win)
                .modal(true)
                .program_name("ElemView")
                .version(env!("CARGO_PKG_VERSION"))
                .comments("An interactive periodic table explorer written in Rust and GTK4.")
                .license_type(License::MitX11)
                .logo_icon_name("applications-science")
                .build();

            dialog.present();
        }
    });
    app.add_action(&about_action);

    // --- CONTROLS / SHORTCUTS ACTION ---
    let controls_action = gtk4::gio::SimpleAction::new("help_controls", None);
    let win_weak_c = window.downgrade();

    controls_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_c.upgrade() {
            let dialog = gtk4::MessageDialog::builder()
                .transient_for(&win)
                .modal(true)
                .buttons(gtk4::ButtonsType::Close)
                .text("Controls")
                .secondary_text(
                    "Click a card to open the element view.\n\
                     Move the pointer over the atom to rotate it; scroll to zoom.\n\
                     With the Compound Builder open (Ctrl+B), clicking or dragging \
                     a card adds that atom to the mix.\n\
                     Ctrl+T starts Element Trivia. F9 shows the activity console.",
                )
                .build();
            dialog.connect_response(|d, _| d.close());
            dialog.present();
        }
    });
    app.add_action(&controls_action);
}
