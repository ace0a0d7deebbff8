// src/panels/builder.rs
//
// The compound-builder side panel: a drop zone that accumulates atoms, a
// Mix button that runs the recipe against the compound table, and a Clear
// that wipes the mixture wholesale.

use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{
  Align, Box as GtkBox, Button, CssProvider, DropTarget, FlowBox, Frame, Label, Orientation,
  PolicyType, Revealer, RevealerTransitionType, ScrolledWindow, SelectionMode,
  STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::AppState;

pub struct BuilderPanel {
  pub revealer: Revealer,
  chips: FlowBox,
  placeholder: Label,
  result: Label,
}

impl BuilderPanel {
  pub fn build(state: Rc<RefCell<AppState>>) -> Rc<Self> {
    inject_css();

    let scroll = ScrolledWindow::builder()
      .hscrollbar_policy(PolicyType::Never)
      .vscrollbar_policy(PolicyType::Automatic)
      .min_content_width(240)
      .build();

    let root_vbox = GtkBox::new(Orientation::Vertical, 10);
    root_vbox.set_margin_start(10);
    root_vbox.set_margin_end(10);
    root_vbox.set_margin_top(10);
    root_vbox.set_margin_bottom(10);
    scroll.set_child(Some(&root_vbox));

    let title = Label::new(Some("Compound Builder"));
    title.add_css_class("heading");
    title.set_halign(Align::Start);
    root_vbox.append(&title);

    let hint = Label::new(Some("Drag element cards here, or click them while the lab is open."));
    hint.set_wrap(true);
    hint.set_xalign(0.0);
    hint.set_opacity(0.6);
    root_vbox.append(&hint);

    // --- Drop zone ---
    let chips = FlowBox::new();
    chips.set_selection_mode(SelectionMode::None);
    chips.set_max_children_per_line(6);

    let placeholder = Label::new(Some("Drop atoms here"));
    placeholder.set_opacity(0.4);

    let zone_box = GtkBox::new(Orientation::Vertical, 4);
    zone_box.set_size_request(-1, 140);
    zone_box.append(&placeholder);
    zone_box.append(&chips);

    let drop_frame = Frame::new(None);
    drop_frame.add_css_class("drop-zone");
    drop_frame.set_child(Some(&zone_box));
    root_vbox.append(&drop_frame);

    // --- Result + actions ---
    let result = Label::new(Some("H₂O"));
    result.add_css_class("mix-result");
    result.set_wrap(true);
    root_vbox.append(&result);

    let buttons = GtkBox::new(Orientation::Horizontal, 8);
    let mix_btn = Button::with_label("Mix!");
    mix_btn.add_css_class("suggested-action");
    mix_btn.set_hexpand(true);
    let clear_btn = Button::with_label("Clear");
    clear_btn.set_hexpand(true);
    buttons.append(&mix_btn);
    buttons.append(&clear_btn);
    root_vbox.append(&buttons);

    let revealer = Revealer::builder()
      .transition_type(RevealerTransitionType::SlideLeft)
      .child(&scroll)
      .reveal_child(false)
      .build();

    let panel = Rc::new(Self {
      revealer,
      chips,
      placeholder,
      result,
    });

    // Drop target: element cards publish their symbol as a string.
    let target = DropTarget::new(glib::types::Type::STRING, gdk::DragAction::COPY);
    let p = panel.clone();
    let s = state.clone();
    target.connect_drop(move |_, value, _, _| {
      if let Ok(symbol) = value.get::<String>() {
        p.add_atom(&s, &symbol);
        true
      } else {
        false
      }
    });
    drop_frame.add_controller(target);

    let p = panel.clone();
    let s = state.clone();
    mix_btn.connect_clicked(move |_| p.mix(&s));

    let p = panel.clone();
    let s = state.clone();
    clear_btn.connect_clicked(move |_| p.clear(&s));

    panel
  }

  pub fn is_open(&self) -> bool {
    self.revealer.reveals_child()
  }

  pub fn toggle(&self) {
    self.revealer.set_reveal_child(!self.revealer.reveals_child());
  }

  /// One atom per user action; the mixture accumulates until Clear.
  pub fn add_atom(&self, state: &Rc<RefCell<AppState>>, symbol: &str) {
    state.borrow_mut().mixture.add(symbol);

    let chip = Label::new(Some(symbol));
    chip.add_css_class("mini-atom");
    self.chips.insert(&chip, -1);
    self.placeholder.set_visible(false);

    self.result.set_text("Ready to Mix…");
    self.result.remove_css_class("mix-success");
    self.result.remove_css_class("mix-failure");
  }

  /// Match the mixture against the compound table. The mixture itself is
  /// left untouched so the user can keep adding atoms after a miss.
  fn mix(&self, state: &Rc<RefCell<AppState>>) {
    let st = state.borrow();
    match st.compounds.check(st.mixture.recipe()) {
      Some(entry) => {
        log::info!("mixed {}: {}", entry.formula, entry.name);
        self.result.set_text(&format!("{} ({})", entry.name, entry.formula));
        self.result.add_css_class("mix-success");
        self.result.remove_css_class("mix-failure");
      }
      None => {
        log::info!("mixture matched no known compound");
        self.result.set_text("Unknown Compound");
        self.result.add_css_class("mix-failure");
        self.result.remove_css_class("mix-success");
      }
    }
  }

  fn clear(&self, state: &Rc<RefCell<AppState>>) {
    state.borrow_mut().mixture.clear();
    while let Some(child) = self.chips.child_at_index(0) {
      self.chips.remove(&child);
    }
    self.placeholder.set_visible(true);
    self.result.set_text("H₂O");
    self.result.remove_css_class("mix-success");
    self.result.remove_css_class("mix-failure");
  }
}

fn inject_css() {
  let provider = CssProvider::new();
  provider.load_from_data(
    "
        .drop-zone { border: 2px dashed rgba(255,255,255,0.25); border-radius: 8px; }
        .mini-atom {
            background: #3b82f6;
            color: #ffffff;
            border-radius: 12px;
            padding: 4px 8px;
            margin: 2px;
            font-weight: bold;
        }
        .mix-result { font-size: 16px; }
        .mix-result.mix-success { color: #4ade80; }
        .mix-result.mix-failure { color: #f87171; }
    ",
  );

  if let Some(display) = gdk::Display::default() {
    gtk4::style_context_add_provider_for_display(
      &display,
      &provider,
      STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
  }
}
