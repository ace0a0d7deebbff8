// src/ui/game.rs
//
// The "Guess the Element" trivia window. Round logic lives in model::trivia;
// this file is widget plumbing and score bookkeeping.

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Align, ApplicationWindow, Box as GtkBox, Button, Label, Orientation, Window};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::model::trivia::{self, POINTS_PER_CORRECT};
use crate::state::AppState;

struct GameWidgets {
    clue: Label,
    options: GtkBox,
    feedback: Label,
    score: Label,
    high_score: Label,
}

pub fn show_trivia_window(parent: &ApplicationWindow, state: Rc<RefCell<AppState>>) {
    let window = Window::builder()
        .title("Element Trivia")
        .transient_for(parent)
        .default_width(480)
        .default_height(420)
        .modal(false)
        .build();

    let root = GtkBox::new(Orientation::Vertical, 12);
    root.set_margin_top(16);
    root.set_margin_bottom(16);
    root.set_margin_start(16);
    root.set_margin_end(16);

    let score_row = GtkBox::new(Orientation::Horizontal, 16);
    let score = Label::new(Some("Score: 0"));
    score.add_css_class("heading");
    score.set_hexpand(true);
    score.set_halign(Align::Start);
    let high_score = Label::new(Some(&format!(
        "High Score: {}",
        state.borrow().config.high_score
    )));
    high_score.add_css_class("dim-label");
    score_row.append(&score);
    score_row.append(&high_score);
    root.append(&score_row);

    let clue = Label::new(Some("…"));
    clue.set_wrap(true);
    clue.set_xalign(0.0);
    clue.add_css_class("title-4");
    clue.set_vexpand(true);
    clue.set_valign(Align::Start);
    root.append(&clue);

    let options = GtkBox::new(Orientation::Vertical, 6);
    root.append(&options);

    let feedback = Label::new(None);
    feedback.set_halign(Align::Start);
    root.append(&feedback);

    window.set_child(Some(&root));

    let widgets = Rc::new(GameWidgets {
        clue,
        options,
        feedback,
        score,
        high_score,
    });

    // Fresh run each time the window opens.
    state.borrow_mut().game_score = 0;
    log::info!("trivia game started");

    play_round(widgets, state);
    window.present();
}

/// Build one round's clue and option buttons. Called again, via timers, after
/// every answer.
fn play_round(widgets: Rc<GameWidgets>, state: Rc<RefCell<AppState>>) {
    widgets.feedback.set_text("");

    let round = {
        let st = state.borrow();
        trivia::next_round(&st.registry, &mut rand::thread_rng())
    };
    let Some(round) = round else {
        widgets
            .clue
            .set_text("Not enough element data for a trivia round.");
        return;
    };

    widgets.clue.set_text(&round.clue);

    while let Some(child) = widgets.options.first_child() {
        widgets.options.remove(&child);
    }

    let target_name = {
        let st = state.borrow();
        st.registry
            .get(round.options[round.answer])
            .map(|el| el.name.clone())
            .unwrap_or_default()
    };

    for (position, &element_index) in round.options.iter().enumerate() {
        let label = {
            let st = state.borrow();
            st.registry
                .get(element_index)
                .map(|el| el.name.clone())
                .unwrap_or_default()
        };
        let button = Button::with_label(&label);

        let correct = position == round.answer;
        let w = widgets.clone();
        let s = state.clone();
        let target = target_name.clone();
        button.connect_clicked(move |btn| {
            if correct {
                answer_correct(&w, &s);
            } else {
                answer_wrong(&w, &s, &target, btn);
            }
        });
        widgets.options.append(&button);
    }
}

fn answer_correct(widgets: &Rc<GameWidgets>, state: &Rc<RefCell<AppState>>) {
    let score = {
        let mut st = state.borrow_mut();
        st.game_score += POINTS_PER_CORRECT;
        let score = st.game_score;
        if st.config.record_score(score) {
            log::info!("new high score: {score}");
            st.save_config();
        }
        score
    };

    widgets.feedback.set_text(&format!("CORRECT! +{POINTS_PER_CORRECT} points"));
    widgets.score.set_text(&format!("Score: {score}"));
    widgets
        .high_score
        .set_text(&format!("High Score: {}", state.borrow().config.high_score));
    disable_options(widgets);

    let w = widgets.clone();
    let s = state.clone();
    glib::timeout_add_local_once(Duration::from_secs(1), move || play_round(w, s));
}

fn answer_wrong(
    widgets: &Rc<GameWidgets>,
    state: &Rc<RefCell<AppState>>,
    target_name: &str,
    clicked: &Button,
) {
    state.borrow_mut().game_score = 0;
    clicked.add_css_class("destructive-action");
    widgets
        .feedback
        .set_text(&format!("WRONG! It was {target_name}. Score reset."));
    widgets.score.set_text("Score: 0");
    disable_options(widgets);

    let w = widgets.clone();
    let s = state.clone();
    glib::timeout_add_local_once(Duration::from_secs(2), move || play_round(w, s));
}

fn disable_options(widgets: &Rc<GameWidgets>) {
    let mut child = widgets.options.first_child();
    while let Some(widget) = child {
        widget.set_sensitive(false);
        child = widget.next_sibling();
    }
}
