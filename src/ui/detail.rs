// src/ui/detail.rs
//
// Per-element detail window: the animated shell model on the left, the
// reference data, learn-level summary, and mini-quiz on the right.

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{
    Align, ApplicationWindow, Box as GtkBox, Button, DrawingArea, FileChooserAction,
    FileChooserNative, FileFilter, Label, Orientation, ResponseType, ScrolledWindow,
    ToggleButton, Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ExportFormat;
use crate::model::element::ElementQuiz;
use crate::rendering::{export_image, painter, AtomScene};
use crate::state::AppState;
use crate::ui::interactions;

pub fn show_element_window(parent: &ApplicationWindow, state: Rc<RefCell<AppState>>, index: usize) {
    let (title, shells, nucleus_color, name) = {
        let st = state.borrow();
        let Some(element) = st.registry.get(index) else {
            return;
        };
        (
            format!("{} - Element {}", element.name, element.number),
            element.shells.clone(),
            element.category.rgb(),
            element.name.clone(),
        )
    };

    let window = Window::builder()
        .title(title)
        .transient_for(parent)
        .default_width(860)
        .default_height(560)
        .modal(false)
        .build();

    let root = GtkBox::new(Orientation::Horizontal, 0);

    // --- Left: the atom view ---
    let scene = Rc::new(RefCell::new(AtomScene::new(
        &shells,
        &mut rand::thread_rng(),
    )));
    log::debug!(
        "atom view for {} with {} electrons",
        name,
        scene.borrow().particle_count()
    );

    let area = DrawingArea::new();
    area.set_hexpand(true);
    area.set_vexpand(true);
    area.set_size_request(400, -1);

    let s = state.clone();
    let sc = scene.clone();
    area.set_draw_func(move |_, cr, w, h| {
        let points = sc.borrow().project(w as f64, h as f64);
        painter::draw_frame(cr, &points, nucleus_color, &s.borrow().config.style);
    });

    // The frame loop: advance + redraw on every tick until the area leaves
    // the widget tree. Breaking here is the dispose path; nothing is
    // scheduled after the window closes.
    let sc = scene.clone();
    area.add_tick_callback(move |area, _clock| {
        if !area.is_mapped() {
            return glib::ControlFlow::Break;
        }
        sc.borrow_mut().advance();
        area.queue_draw();
        glib::ControlFlow::Continue
    });

    interactions::setup_atom_view(&area, scene.clone());
    root.append(&area);

    // --- Right: reference data ---
    let info = build_info_panel(&window, state.clone(), index, scene);
    let scroll = ScrolledWindow::builder()
        .min_content_width(380)
        .child(&info)
        .build();
    root.append(&scroll);

    window.set_child(Some(&root));
    window.present();
}

fn build_info_panel(
    window: &Window,
    state: Rc<RefCell<AppState>>,
    index: usize,
    scene: Rc<RefCell<AtomScene>>,
) -> GtkBox {
    let panel = GtkBox::new(Orientation::Vertical, 12);
    panel.set_margin_top(14);
    panel.set_margin_bottom(14);
    panel.set_margin_start(14);
    panel.set_margin_end(14);

    let st = state.borrow();
    let element = st.registry.get(index).expect("index validated by caller");

    // Header: name, favorite star, badges
    let header = GtkBox::new(Orientation::Horizontal, 8);
    let name = Label::new(Some(&element.name));
    name.add_css_class("title-1");
    name.set_halign(Align::Start);
    name.set_hexpand(true);
    header.append(&name);

    let favorite = ToggleButton::with_label("★");
    favorite.set_active(st.config.is_favorite(element.number));
    favorite.set_tooltip_text(Some("Favorite"));
    {
        let s = state.clone();
        let number = element.number;
        favorite.connect_toggled(move |_| {
            let mut st = s.borrow_mut();
            let starred = st.config.toggle_favorite(number);
            log::info!(
                "element {} {} favorites",
                number,
                if starred { "added to" } else { "removed from" }
            );
            st.save_config();
        });
    }
    header.append(&favorite);
    panel.append(&header);

    let meta = GtkBox::new(Orientation::Horizontal, 10);
    meta.append(&badge(&format!("No. {}", element.number)));
    meta.append(&badge(&element.symbol));
    meta.append(&badge(&format!("{} u", element.atomic_mass)));
    if let Some(density) = element.density {
        meta.append(&badge(&format!("{} g/cm³", density)));
    }
    panel.append(&meta);

    // Learn-level summary
    let summary = Label::new(Some(&element.summary_for(st.config.learn_level)));
    summary.set_wrap(true);
    summary.set_halign(Align::Start);
    summary.set_xalign(0.0);
    panel.append(&summary);

    // Structure facts
    panel.append(&fact_row("Shells", &element.shells_display()));
    panel.append(&fact_row("Configuration", &element.electron_configuration));
    panel.append(&fact_row("Category", &element.category_name));
    if let Some(group) = element.group {
        panel.append(&fact_row(
            "Position",
            &format!("group {}, period {}", group, element.period),
        ));
    } else {
        panel.append(&fact_row("Position", &format!("period {}", element.period)));
    }

    let discovery = match (&element.discovered_by, element.year) {
        (Some(who), Some(year)) => format!("{} ({})", who, year),
        (Some(who), None) => who.clone(),
        _ => "Unknown".to_string(),
    };
    panel.append(&fact_row("Discovery", &discovery));

    // Uses
    if !element.uses.is_empty() {
        let uses_title = Label::new(Some("Common Uses"));
        uses_title.add_css_class("heading");
        uses_title.set_halign(Align::Start);
        panel.append(&uses_title);
        for use_case in &element.uses {
            let item = Label::new(Some(&format!("• {}", use_case)));
            item.set_halign(Align::Start);
            item.set_wrap(true);
            item.set_xalign(0.0);
            panel.append(&item);
        }
    }

    // Fun fact
    if let Some(fact) = &element.fun_fact {
        let fact_label = Label::new(Some(&format!("Did you know? {}", fact)));
        fact_label.set_wrap(true);
        fact_label.set_halign(Align::Start);
        fact_label.set_xalign(0.0);
        fact_label.add_css_class("dim-label");
        panel.append(&fact_label);
    }

    // Mini-quiz
    if let Some(quiz) = element.quiz.clone() {
        panel.append(&build_quiz_section(&quiz));
    }

    let nucleus_color = element.category.rgb();
    let export_name = element.name.to_lowercase();
    drop(st);

    // Export button (snapshot of the current frame)
    let export = Button::with_label("Export Image…");
    export.set_halign(Align::Start);
    {
        let win_weak = window.downgrade();
        let s = state.clone();
        export.connect_clicked(move |_| {
            let Some(win) = win_weak.upgrade() else { return };
            let dialog = FileChooserNative::new(
                Some("Export Atom Image"),
                Some(&win),
                FileChooserAction::Save,
                Some("Export"),
                Some("Cancel"),
            );

            let filter_png = FileFilter::new();
            filter_png.set_name(Some("PNG Image (*.png)"));
            filter_png.add_pattern("*.png");
            dialog.add_filter(&filter_png);
            let filter_pdf = FileFilter::new();
            filter_pdf.set_name(Some("PDF Document (*.pdf)"));
            filter_pdf.add_pattern("*.pdf");
            dialog.add_filter(&filter_pdf);

            match s.borrow().config.default_export_format {
                ExportFormat::Png => dialog.set_current_name(&format!("{export_name}.png")),
                ExportFormat::Pdf => dialog.set_current_name(&format!("{export_name}.pdf")),
            }

            let s_inner = s.clone();
            let scene_inner = scene.clone();
            dialog.connect_response(move |d, response| {
                if response == ResponseType::Accept {
                    if let Some(path) = d.file().and_then(|f| f.path()) {
                        let path_str = path.to_string_lossy().to_string();
                        let is_pdf = path_str.to_lowercase().ends_with(".pdf");
                        let result = export_image(
                            &scene_inner.borrow(),
                            nucleus_color,
                            &s_inner.borrow().config.style,
                            &path_str,
                            800,
                            is_pdf,
                        );
                        match result {
                            Ok(()) => log::info!("exported atom image to {path_str}"),
                            Err(e) => log::error!("image export failed: {e}"),
                        }
                    }
                }
                d.destroy();
            });
            dialog.show();
        });
    }
    panel.append(&export);

    panel
}

fn badge(text: &str) -> Label {
    let label = Label::new(Some(text));
    label.add_css_class("pill");
    label.add_css_class("dim-label");
    label
}

fn fact_row(key: &str, value: &str) -> GtkBox {
    let row = GtkBox::new(Orientation::Horizontal, 6);
    let k = Label::new(Some(&format!("{key}:")));
    k.add_css_class("heading");
    k.set_halign(Align::Start);
    let v = Label::new(Some(value));
    v.set_halign(Align::Start);
    v.set_wrap(true);
    v.set_xalign(0.0);
    row.append(&k);
    row.append(&v);
    row
}

/// One question with inline right/wrong feedback on the option buttons.
fn build_quiz_section(quiz: &ElementQuiz) -> GtkBox {
    let section = GtkBox::new(Orientation::Vertical, 6);

    let title = Label::new(Some("Quick Quiz"));
    title.add_css_class("heading");
    title.set_halign(Align::Start);
    section.append(&title);

    let question = Label::new(Some(&quiz.question));
    question.set_wrap(true);
    question.set_halign(Align::Start);
    question.set_xalign(0.0);
    section.append(&question);

    let options = GtkBox::new(Orientation::Vertical, 4);
    for (idx, option) in quiz.options.iter().enumerate() {
        let button = Button::with_label(option);
        let correct = idx == quiz.answer;
        let option_text = option.clone();
        button.connect_clicked(move |btn| {
            if correct {
                btn.add_css_class("suggested-action");
                btn.set_label(&format!("{option_text} ✓ Correct!"));
            } else {
                btn.add_css_class("destructive-action");
                btn.set_label(&format!("{option_text} ✗ Try again"));
            }
        });
        options.append(&button);
    }
    section.append(&options);
    section
}
