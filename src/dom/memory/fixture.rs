// SPDX-License-Identifier: MPL-2.0
//! A laid-out copy of the landing page markup.
//!
//! Shared by unit tests, integration tests and benchmarks so they all drive
//! the same structure the production page ships:
//!
//! ```text
//! header.site-header        0..80
//!   a.brand[href="#"]
//!   button.nav-toggle > span x3
//!   nav#nav > a[href="#features"] a[href="#roadmap"] a[href="#about"]
//! section.hero             80..720   (div.hero-card)
//! section#features        720..1620  (div.feature-card x3)
//! section#roadmap        1620..2320  (div.roadmap-item x3)
//! section#about          2320..2920  (div.about-grid > div x2)
//! section.cta            2920..3220  (form.cta-form > input#email, button[type=submit])
//! footer                 3220..3420  (span#year, a[href="#pricing"], p.footer-note)
//! ```

use super::{MemoryDom, NodeId};
use crate::dom::Dom;

/// Handles to the interesting nodes of [`landing_page`].
#[derive(Debug, Clone)]
pub struct LandingPage {
    pub header: NodeId,
    pub brand_link: NodeId,
    pub nav_toggle: NodeId,
    pub toggle_bars: Vec<NodeId>,
    pub nav_panel: NodeId,
    pub nav_links: Vec<NodeId>,
    pub hero: NodeId,
    pub hero_card: NodeId,
    pub features: NodeId,
    pub feature_cards: Vec<NodeId>,
    pub roadmap: NodeId,
    pub roadmap_items: Vec<NodeId>,
    pub about: NodeId,
    pub about_cells: Vec<NodeId>,
    pub form: NodeId,
    pub email: NodeId,
    pub submit: NodeId,
    pub year: NodeId,
    /// Points at `#pricing`, which the page does not contain.
    pub dead_link: NodeId,
    /// A plain paragraph outside the navigation.
    pub footer_note: NodeId,
}

impl LandingPage {
    /// Every element the reveal animation applies to, in document order.
    #[must_use]
    pub fn reveal_targets(&self) -> Vec<NodeId> {
        self.feature_cards
            .iter()
            .chain(&self.roadmap_items)
            .chain(&self.about_cells)
            .copied()
            .collect()
    }
}

/// Label of the signup button before any submission.
pub const SUBMIT_LABEL: &str = "Join the list";

pub const HEADER_HEIGHT: f64 = 80.0;

/// Builds the landing page with an 800px viewport scrolled to the top.
#[must_use]
pub fn landing_page() -> (MemoryDom, LandingPage) {
    let mut dom = MemoryDom::new();
    let Some(body) = dom.body() else {
        unreachable!("memory documents always have a body")
    };

    let header = dom.insert(body, "header", &[("class", "site-header")]);
    dom.set_layout(header, 0.0, HEADER_HEIGHT);
    let brand_link = dom.insert(header, "a", &[("class", "brand"), ("href", "#")]);
    dom.set_text(&brand_link, "PUMPEY");

    let nav_toggle = dom.insert(
        header,
        "button",
        &[
            ("class", "nav-toggle"),
            ("aria-expanded", "false"),
            ("aria-controls", "nav"),
        ],
    );
    let toggle_bars = (0..3).map(|_| dom.insert(nav_toggle, "span", &[])).collect();

    let nav_panel = dom.insert(header, "nav", &[("id", "nav"), ("class", "site-nav")]);
    let nav_links = ["features", "roadmap", "about"]
        .iter()
        .map(|target| {
            let href = format!("#{target}");
            let link = dom.insert(nav_panel, "a", &[("href", href.as_str())]);
            dom.set_text(&link, target);
            link
        })
        .collect();

    let hero = dom.insert(body, "section", &[("class", "hero")]);
    dom.set_layout(hero, 80.0, 640.0);
    let hero_card = dom.insert(hero, "div", &[("class", "hero-card")]);
    dom.set_layout(hero_card, 200.0, 300.0);

    let features = dom.insert(body, "section", &[("id", "features"), ("class", "features")]);
    dom.set_layout(features, 720.0, 900.0);
    let feature_cards = [800.0, 1050.0, 1300.0]
        .iter()
        .map(|top| {
            let card = dom.insert(features, "div", &[("class", "feature-card")]);
            dom.set_layout(card, *top, 220.0);
            card
        })
        .collect();

    let roadmap = dom.insert(body, "section", &[("id", "roadmap")]);
    dom.set_layout(roadmap, 1620.0, 700.0);
    let roadmap_items = [1680.0, 1880.0, 2080.0]
        .iter()
        .map(|top| {
            let item = dom.insert(roadmap, "div", &[("class", "roadmap-item")]);
            dom.set_layout(item, *top, 160.0);
            item
        })
        .collect();

    let about = dom.insert(body, "section", &[("id", "about")]);
    dom.set_layout(about, 2320.0, 600.0);
    let about_grid = dom.insert(about, "div", &[("class", "about-grid")]);
    dom.set_layout(about_grid, 2380.0, 400.0);
    let about_cells: Vec<NodeId> = (0..2)
        .map(|_| {
            let cell = dom.insert(about_grid, "div", &[]);
            dom.set_layout(cell, 2380.0, 400.0);
            cell
        })
        .collect();
    // Nested below a cell, so not a direct child of the grid.
    if let Some(first_cell) = about_cells.first() {
        let nested = dom.insert(*first_cell, "div", &[("class", "about-copy")]);
        dom.set_layout(nested, 2400.0, 200.0);
    }

    let cta = dom.insert(body, "section", &[("class", "cta")]);
    dom.set_layout(cta, 2920.0, 300.0);
    let form = dom.insert(cta, "form", &[("class", "cta-form")]);
    let email = dom.insert(
        form,
        "input",
        &[("id", "email"), ("type", "email"), ("name", "email")],
    );
    let submit = dom.insert(form, "button", &[("type", "submit")]);
    dom.set_text(&submit, SUBMIT_LABEL);

    let footer = dom.insert(body, "footer", &[("class", "site-footer")]);
    dom.set_layout(footer, 3220.0, 200.0);
    let year = dom.insert(footer, "span", &[("id", "year")]);
    let dead_link = dom.insert(footer, "a", &[("href", "#pricing")]);
    let footer_note = dom.insert(footer, "p", &[("class", "footer-note")]);

    let page = LandingPage {
        header,
        brand_link,
        nav_toggle,
        toggle_bars,
        nav_panel,
        nav_links,
        hero,
        hero_card,
        features,
        feature_cards,
        roadmap,
        roadmap_items,
        about,
        about_cells,
        form,
        email,
        submit,
        year,
        dead_link,
        footer_note,
    };
    (dom, page)
}
