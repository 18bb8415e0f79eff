// SPDX-License-Identifier: MPL-2.0
//! Host document abstraction.
//!
//! Every component manipulates the page exclusively through the [`Dom`]
//! trait. Two implementations exist:
//!
//! - [`memory::MemoryDom`]: an arena document used natively by the headless
//!   host, the tests and the benchmarks
//! - `web::WebDom` (wasm32 only): the browser document via `web-sys`
//!
//! Mutations are infallible from the caller's point of view. A browser call
//! that throws is logged by the implementation and otherwise ignored, which
//! matches how the page script treats a missing or broken element.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::fmt;

/// How the viewport moves to a new scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump immediately.
    #[default]
    Instant,
    /// Let the browser animate the scroll.
    Smooth,
}

/// Operations the components need from a page document.
pub trait Dom {
    /// Handle to an element. Cheap to clone, compared by identity.
    type Node: Clone + PartialEq + fmt::Debug + 'static;

    // ---------------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------------

    /// First element in document order matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// All elements in document order matching `selector`.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// Descendants of `root` matching `selector`, in document order.
    fn query_within(&self, root: &Self::Node, selector: &str) -> Vec<Self::Node>;

    fn body(&self) -> Option<Self::Node>;

    fn head(&self) -> Option<Self::Node>;

    /// Whether `node` is `ancestor` itself or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Whether `node` is currently attached to the document.
    fn is_connected(&self, node: &Self::Node) -> bool;

    // ---------------------------------------------------------------------
    // Attributes and classes
    // ---------------------------------------------------------------------

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&mut self, node: &Self::Node, class: &str);

    fn remove_class(&mut self, node: &Self::Node, class: &str);

    // ---------------------------------------------------------------------
    // Styling and content
    // ---------------------------------------------------------------------

    /// Sets one inline style property (CSS property name, e.g. `opacity`).
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    /// Reads one inline style property; `None` when unset.
    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;

    /// Replaces the whole inline style declaration block.
    fn set_css_text(&mut self, node: &Self::Node, css: &str);

    fn inner_html(&self, node: &Self::Node) -> String;

    fn set_inner_html(&mut self, node: &Self::Node, html: &str);

    /// Replaces the element's children with a single text node.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    // ---------------------------------------------------------------------
    // Form controls
    // ---------------------------------------------------------------------

    /// Current value of an input; empty for non-input elements.
    fn value(&self, node: &Self::Node) -> String;

    fn set_value(&mut self, node: &Self::Node, value: &str);

    fn is_disabled(&self, node: &Self::Node) -> bool;

    fn set_disabled(&mut self, node: &Self::Node, disabled: bool);

    // ---------------------------------------------------------------------
    // Tree mutation
    // ---------------------------------------------------------------------

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> Option<Self::Node>;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Detaches `node` from its parent; no-op when already detached.
    fn remove(&mut self, node: &Self::Node);

    // ---------------------------------------------------------------------
    // Layout and viewport
    // ---------------------------------------------------------------------

    /// Distance from the document top to the element's border box, in px.
    fn offset_top(&self, node: &Self::Node) -> f64;

    /// Rendered height of the element, in px.
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Current vertical scroll offset of the viewport, in px.
    fn scroll_y(&self) -> f64;

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    /// Computed font size of the root element, in px.
    fn root_font_size(&self) -> f64;
}
