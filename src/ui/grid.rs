// src/ui/grid.rs
//
// The periodic table itself: 118 cards laid out by group/period, with the
// lanthanoid/actinoid strips below, plus the search / filter / temperature
// controls that restyle the cards in place.

use gtk4::gdk;
use gtk4::prelude::*;
use gtk4::{
    Align, Box as GtkBox, Button, CssProvider, DragSource, DropDown, Label, Orientation, Scale,
    SearchEntry, STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::model::element::{is_actinoid, is_lanthanoid};
use crate::model::{Category, Element, Phase};
use crate::state::AppState;

/// True when the card survives the current search term. Matches on name or
/// symbol substrings and on atomic-number prefix; an empty term shows all.
pub fn search_matches(element: &Element, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    element.name.to_lowercase().contains(&term)
        || element.symbol.to_lowercase().contains(&term)
        || element.number.to_string().starts_with(&term)
}

pub fn filter_matches(element: &Element, filter: Option<Category>) -> bool {
    match filter {
        Some(cat) => element.category == cat,
        None => true,
    }
}

pub struct ElementGrid {
    pub container: GtkBox,
    /// Buttons aligned with registry order.
    cards: Vec<Button>,
}

impl ElementGrid {
    pub fn build(state: Rc<RefCell<AppState>>, on_activate: Rc<dyn Fn(usize)>) -> Rc<Self> {
        inject_css();

        let container = GtkBox::new(Orientation::Vertical, 8);
        container.set_margin_top(10);
        container.set_margin_bottom(10);
        container.set_margin_start(10);
        container.set_margin_end(10);

        // --- Controls row ---
        let controls = GtkBox::new(Orientation::Horizontal, 10);

        let search = SearchEntry::new();
        search.set_placeholder_text(Some("Search name, symbol, or number"));
        search.set_hexpand(true);
        controls.append(&search);

        let mut filter_labels = vec!["All Categories".to_string()];
        filter_labels.extend(Category::ALL.iter().map(|c| c.label().to_string()));
        let label_refs: Vec<&str> = filter_labels.iter().map(|s| s.as_str()).collect();
        let filter_dropdown = DropDown::from_strings(&label_refs);
        controls.append(&filter_dropdown);

        let initial_temp = state.borrow().config.temperature;
        let temp_label = Label::new(Some(&format!("{initial_temp:.0} K")));
        temp_label.set_width_chars(7);
        let temp_scale = Scale::with_range(Orientation::Horizontal, 0.0, 6000.0, 10.0);
        temp_scale.set_value(initial_temp);
        temp_scale.set_size_request(180, -1);
        controls.append(&temp_scale);
        controls.append(&temp_label);

        container.append(&controls);

        // --- Card grids ---
        let main_grid = gtk4::Grid::new();
        main_grid.set_row_spacing(4);
        main_grid.set_column_spacing(4);
        main_grid.set_halign(Align::Center);

        let lanthanoids = gtk4::Grid::new();
        lanthanoids.set_column_spacing(4);
        lanthanoids.set_halign(Align::Center);
        let actinoids = gtk4::Grid::new();
        actinoids.set_column_spacing(4);
        actinoids.set_halign(Align::Center);

        let mut cards = Vec::new();
        {
            let st = state.borrow();
            let mut lan_col = 0;
            let mut act_col = 0;
            for (index, element) in st.registry.iter().enumerate() {
                let card = build_card(element, index, &on_activate);

                if is_lanthanoid(element.number) {
                    lanthanoids.attach(&card, lan_col, 0, 1, 1);
                    lan_col += 1;
                } else if is_actinoid(element.number) {
                    actinoids.attach(&card, act_col, 0, 1, 1);
                    act_col += 1;
                } else if let Some(group) = element.group {
                    main_grid.attach(&card, group as i32 - 1, element.period as i32 - 1, 1, 1);
                }
                cards.push(card);
            }
        }

        container.append(&main_grid);

        let lan_label = Label::new(Some("Lanthanoids"));
        lan_label.add_css_class("strip-label");
        lan_label.set_halign(Align::Center);
        container.append(&lan_label);
        container.append(&lanthanoids);

        let act_label = Label::new(Some("Actinoids"));
        act_label.add_css_class("strip-label");
        act_label.set_halign(Align::Center);
        container.append(&act_label);
        container.append(&actinoids);

        let grid = Rc::new(Self { container, cards });

        // --- Wiring ---
        let g = grid.clone();
        let s = state.clone();
        search.connect_search_changed(move |entry| {
            s.borrow_mut().search = entry.text().to_string();
            g.refresh(&s.borrow());
        });

        let g = grid.clone();
        let s = state.clone();
        filter_dropdown.connect_selected_notify(move |dd| {
            let selected = dd.selected() as usize;
            s.borrow_mut().filter = if selected == 0 {
                None
            } else {
                Category::ALL.get(selected - 1).copied()
            };
            g.refresh(&s.borrow());
        });

        let g = grid.clone();
        let s = state.clone();
        temp_scale.connect_value_changed(move |scale| {
            let temp = scale.value();
            temp_label.set_text(&format!("{:.0} K", temp));
            s.borrow_mut().config.temperature = temp;
            g.refresh(&s.borrow());
        });

        grid.refresh(&state.borrow());
        grid
    }

    /// Re-apply search/filter dimming and temperature phase classes to every
    /// card. Cheap enough to run on each keystroke.
    pub fn refresh(&self, state: &AppState) {
        for (element, card) in state.registry.iter().zip(&self.cards) {
            let visible = search_matches(element, &state.search)
                && filter_matches(element, state.filter);
            if visible {
                card.remove_css_class("dimmed");
            } else {
                card.add_css_class("dimmed");
            }
            card.set_sensitive(visible);

            card.remove_css_class("melted");
            card.remove_css_class("boiled");
            match element.phase_at(state.config.temperature) {
                Phase::Liquid => card.add_css_class("melted"),
                Phase::Gas => card.add_css_class("boiled"),
                Phase::Solid => {}
            }
        }
    }
}

fn build_card(element: &Element, index: usize, on_activate: &Rc<dyn Fn(usize)>) -> Button {
    let inner = GtkBox::new(Orientation::Vertical, 0);

    let number = Label::new(Some(&element.number.to_string()));
    number.add_css_class("card-number");
    number.set_halign(Align::Start);

    let symbol = Label::new(Some(&element.symbol));
    symbol.add_css_class("card-symbol");

    let name = Label::new(Some(&element.name));
    name.add_css_class("card-name");
    name.set_ellipsize(gtk4::pango::EllipsizeMode::End);
    name.set_max_width_chars(8);

    inner.append(&number);
    inner.append(&symbol);
    inner.append(&name);

    let card = Button::new();
    card.set_child(Some(&inner));
    card.add_css_class("element-card");
    card.add_css_class(element.category.css_class());
    card.set_size_request(58, 64);
    card.set_tooltip_text(Some(&format!("{} ({})", element.name, element.category_name)));

    let cb = on_activate.clone();
    card.connect_clicked(move |_| cb(index));

    // Cards are drag sources for the compound builder's drop zone.
    let drag = DragSource::new();
    let symbol_payload = element.symbol.clone();
    drag.connect_prepare(move |_, _, _| {
        Some(gdk::ContentProvider::for_value(&symbol_payload.to_value()))
    });
    card.add_controller(drag);

    card
}

/// Category colors and phase styling, injected once.
fn inject_css() {
    let mut css = String::from(
        "
        .element-card { padding: 2px; border-radius: 6px; background: rgba(255,255,255,0.04); }
        .element-card .card-number { font-size: 9px; opacity: 0.7; }
        .element-card .card-symbol { font-size: 18px; font-weight: bold; }
        .element-card .card-name { font-size: 8px; opacity: 0.8; }
        .element-card.dimmed { opacity: 0.12; }
        .element-card.melted { background: rgba(249, 115, 22, 0.25); }
        .element-card.boiled { background: rgba(96, 165, 250, 0.18); }
        .strip-label { font-size: 11px; opacity: 0.6; }
        ",
    );
    for cat in Category::ALL {
        css.push_str(&format!(
            ".element-card.{} {{ color: {}; border: 1px solid {}; }}\n",
            cat.css_class(),
            cat.hex_color(),
            cat.hex_color()
        ));
    }

    let provider = CssProvider::new();
    provider.load_from_data(&css);
    if let Some(display) = gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementRegistry;

    fn registry() -> ElementRegistry {
        ElementRegistry::load().expect("embedded element table should parse")
    }

    #[test]
    fn search_matches_name_symbol_and_number() {
        let reg = registry();
        let gold = reg.by_symbol("Au").unwrap();
        assert!(search_matches(gold, "gold"));
        assert!(search_matches(gold, "au"));
        assert!(search_matches(gold, "79"));
        assert!(search_matches(gold, "7"));
        assert!(search_matches(gold, ""));
        assert!(!search_matches(gold, "silver"));
        assert!(!search_matches(gold, "9"));
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let reg = registry();
        let iron = reg.by_symbol("Fe").unwrap();
        assert!(search_matches(iron, "  IRON "));
        assert!(search_matches(iron, "fE"));
    }

    #[test]
    fn category_filter() {
        let reg = registry();
        let neon = reg.by_symbol("Ne").unwrap();
        assert!(filter_matches(neon, None));
        assert!(filter_matches(neon, Some(Category::NobleGas)));
        assert!(!filter_matches(neon, Some(Category::AlkaliMetal)));
    }
}
