// SPDX-License-Identifier: MPL-2.0
//! Stylesheet injected at boot.
//!
//! Holds the rules the script's classes rely on: the reveal end state, the
//! spinner animation, toast content layout and the post-load hero delay.

use crate::dom::Dom;
use crate::ui::design_tokens::{motion, spacing};
use crate::ui::page::LOADED_CLASS;
use crate::ui::reveal::REVEALED_CLASS;

/// Marks the injected element so a second boot does not add another one.
pub const STYLE_ELEMENT_ID: &str = "pumpey-site-styles";

/// The full stylesheet text.
#[must_use]
pub fn stylesheet() -> String {
    format!(
        r".{revealed} {{
  opacity: 1 !important;
  transform: translateY(0) !important;
}}

.animate-spin {{
  animation: spin {spin}s linear infinite;
}}

@keyframes spin {{
  from {{ transform: rotate(0deg); }}
  to {{ transform: rotate(360deg); }}
}}

.notification-content {{
  display: flex;
  align-items: center;
  gap: {gap};
}}

.notification-icon {{
  font-weight: bold;
  font-size: 1.125rem;
}}

.notification-message {{
  font-weight: 500;
}}

body.{loaded} .hero-card {{
  animation-delay: {delay}s;
}}
",
        revealed = REVEALED_CLASS,
        spin = motion::SPIN_SECS,
        gap = spacing::TOAST_GAP,
        loaded = LOADED_CLASS,
        delay = motion::HERO_CARD_DELAY_SECS,
    )
}

/// Appends the stylesheet to `<head>`; returns the `<style>` element.
pub fn inject<D: Dom>(dom: &mut D) -> Option<D::Node> {
    if let Some(existing) = dom.query(&format!("#{STYLE_ELEMENT_ID}")) {
        return Some(existing);
    }
    let head = dom.head()?;
    let style = dom.create_element("style")?;
    dom.set_attribute(&style, "id", STYLE_ELEMENT_ID);
    dom.set_text(&style, &stylesheet());
    dom.append_child(&head, &style);
    Some(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryDom;

    #[test]
    fn stylesheet_contains_required_rules() {
        let css = stylesheet();
        assert!(css.contains(".animate-in {\n  opacity: 1 !important;\n  transform: translateY(0) !important;"));
        assert!(css.contains("animation: spin 1s linear infinite;"));
        assert!(css.contains("@keyframes spin"));
        assert!(css.contains("gap: 0.75rem;"));
        assert!(css.contains("body.loaded .hero-card {\n  animation-delay: 0.5s;"));
    }

    #[test]
    fn inject_appends_once_to_head() {
        let mut dom = MemoryDom::new();
        let first = inject(&mut dom).expect("memory dom has a head");
        let second = inject(&mut dom).expect("memory dom has a head");

        assert_eq!(first, second);
        let head = dom.head().expect("head");
        assert_eq!(dom.query_within(&head, "style"), vec![first]);
        assert_eq!(dom.text_content(first), stylesheet());
    }
}
