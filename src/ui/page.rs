// SPDX-License-Identifier: MPL-2.0
//! Page-level touches: the footer year and the `loaded` body class.

use crate::config::Selectors;
use crate::dom::Dom;
use chrono::Datelike;

/// Class added to `<body>` once the window has loaded.
pub const LOADED_CLASS: &str = "loaded";

/// Year of the local calendar date.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Writes `year` into the year element, if the page has one.
pub fn stamp_year<D: Dom>(dom: &mut D, selectors: &Selectors, year: i32) -> bool {
    let Some(node) = dom.query(&selectors.year) else {
        return false;
    };
    dom.set_text(&node, &year.to_string());
    true
}

pub fn mark_loaded<D: Dom>(dom: &mut D) {
    if let Some(body) = dom.body() {
        dom.add_class(&body, LOADED_CLASS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::fixture::landing_page;
    use crate::dom::memory::MemoryDom;

    #[test]
    fn stamp_year_writes_text() {
        let (mut dom, page) = landing_page();
        assert!(stamp_year(&mut dom, &Selectors::default(), 2031));
        assert_eq!(dom.text_content(page.year), "2031");
    }

    #[test]
    fn stamp_year_without_element_is_skipped() {
        let mut dom = MemoryDom::new();
        assert!(!stamp_year(&mut dom, &Selectors::default(), 2031));
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }

    #[test]
    fn mark_loaded_is_idempotent() {
        let mut dom = MemoryDom::new();
        mark_loaded(&mut dom);
        mark_loaded(&mut dom);
        let body = dom.body().expect("body");
        assert_eq!(dom.attribute(&body, "class").as_deref(), Some("loaded"));
    }
}
