// SPDX-License-Identifier: MPL-2.0
//! The browser document through `web-sys`.
//!
//! Calls that throw are logged at `warn` and otherwise ignored.

use super::{Dom, ScrollBehavior};
use crate::config::FALLBACK_ROOT_FONT_SIZE_PX;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, NodeList, ScrollToOptions, Window,
};

#[derive(Debug, Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

fn warn(operation: &str, err: &JsValue) {
    tracing::warn!(operation, error = ?err, "browser call failed");
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn html(node: &Element) -> Option<&HtmlElement> {
    node.dyn_ref::<HtmlElement>()
}

impl Dom for WebDom {
    type Node = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document
            .query_selector(selector)
            .map_err(|err| warn("querySelector", &err))
            .ok()
            .flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                warn("querySelectorAll", &err);
                Vec::new()
            }
        }
    }

    fn query_within(&self, root: &Element, selector: &str) -> Vec<Element> {
        match root.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                warn("querySelectorAll", &err);
                Vec::new()
            }
        }
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn head(&self) -> Option<Element> {
        self.document.head().map(Element::from)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(node.as_ref()))
    }

    fn is_connected(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            warn("setAttribute", &err);
        }
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().add_1(class) {
            warn("classList.add", &err);
        }
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().remove_1(class) {
            warn("classList.remove", &err);
        }
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        let Some(element) = html(node) else {
            return;
        };
        if let Err(err) = element.style().set_property(property, value) {
            warn("style.setProperty", &err);
        }
    }

    fn style(&self, node: &Element, property: &str) -> Option<String> {
        html(node)
            .and_then(|element| element.style().get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn set_css_text(&mut self, node: &Element, css: &str) {
        if let Some(element) = html(node) {
            element.style().set_css_text(css);
        }
    }

    fn inner_html(&self, node: &Element) -> String {
        node.inner_html()
    }

    fn set_inner_html(&mut self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn value(&self, node: &Element) -> String {
        node.dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn set_value(&mut self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn is_disabled(&self, node: &Element) -> bool {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            return button.disabled();
        }
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            return input.disabled();
        }
        node.has_attribute("disabled")
    }

    fn set_disabled(&mut self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        } else if disabled {
            self.set_attribute(node, "disabled", "");
        } else if let Err(err) = node.remove_attribute("disabled") {
            warn("removeAttribute", &err);
        }
    }

    fn create_element(&mut self, tag: &str) -> Option<Element> {
        self.document
            .create_element(tag)
            .map_err(|err| warn("createElement", &err))
            .ok()
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        if let Err(err) = parent.append_child(child) {
            warn("appendChild", &err);
        }
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn offset_top(&self, node: &Element) -> f64 {
        html(node).map_or(0.0, |element| f64::from(element.offset_top()))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        html(node).map_or(0.0, |element| f64::from(element.offset_height()))
    }

    fn scroll_y(&self) -> f64 {
        self.window
            .scroll_y()
            .map_err(|err| warn("scrollY", &err))
            .unwrap_or_default()
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn root_font_size(&self) -> f64 {
        self.document
            .document_element()
            .and_then(|root| self.window.get_computed_style(&root).ok().flatten())
            .and_then(|style| style.get_property_value("font-size").ok())
            .and_then(|size| size.trim_end_matches("px").trim().parse::<f64>().ok())
            .filter(|size| *size > 0.0)
            .unwrap_or(FALLBACK_ROOT_FONT_SIZE_PX)
    }
}
