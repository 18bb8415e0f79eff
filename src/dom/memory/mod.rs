// SPDX-License-Identifier: MPL-2.0
//! In-memory document.
//!
//! `MemoryDom` is an arena of element nodes with just enough behavior for the
//! page components: attributes, class lists, inline styles, form control
//! state, static layout boxes and a scrollable viewport. Layout is not
//! computed; callers place elements with [`MemoryDom::set_layout`].
//!
//! Markup written with `set_inner_html` is stored verbatim and not parsed.

pub mod fixture;
mod selector;

pub use selector::UnsupportedSelector;

use super::{Dom, ScrollBehavior};
use crate::config::FALLBACK_ROOT_FONT_SIZE_PX;
use selector::{ElementTree, SelectorList};

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A scroll request recorded by [`Dom::scroll_to`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct LayoutBox {
    top: f64,
    height: f64,
}

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    text: String,
    /// Raw markup from `set_inner_html`; takes precedence over children.
    markup: Option<String>,
    value: String,
    disabled: bool,
    layout: LayoutBox,
    style_writes: usize,
}

/// Arena-backed document rooted at `<html>` with a `<head>` and a `<body>`.
///
/// Nodes are never freed: [`Dom::remove`] only detaches them, so removed
/// toasts keep their arena slot and [`NodeId`]s stay valid. Scroll requests
/// are recorded without limit as well. Memory therefore grows with every
/// notification and scroll; build a fresh document per test or benchmark
/// batch instead of reusing one across long runs.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    scroll_y: f64,
    viewport_height: f64,
    root_font_size: f64,
    scroll_requests: Vec<ScrollRequest>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Viewport height used until [`MemoryDom::set_viewport_height`] is called.
    pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

    #[must_use]
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            scroll_y: 0.0,
            viewport_height: Self::DEFAULT_VIEWPORT_HEIGHT,
            root_font_size: FALLBACK_ROOT_FONT_SIZE_PX,
            scroll_requests: Vec::new(),
        };
        dom.root = dom.alloc("html");
        dom.head = dom.alloc("head");
        dom.body = dom.alloc("body");
        let (root, head, body) = (dom.root, dom.head, dom.body);
        dom.attach(root, head);
        dom.attach(root, body);
        dom
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..NodeData::default()
        });
        id
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        let parent_node = self.node_mut(parent);
        parent_node.markup = None;
        parent_node.children.push(child);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.node_mut(child).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != child);
        }
    }

    // ---------------------------------------------------------------------
    // Construction helpers
    // ---------------------------------------------------------------------

    /// Creates an element with the given attributes and appends it to `parent`.
    pub fn insert(&mut self, parent: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let id = self.alloc(tag);
        for (name, value) in attributes {
            self.write_attribute(id, name, value);
        }
        self.attach(parent, id);
        id
    }

    /// Places the element's layout box (document coordinates, px).
    pub fn set_layout(&mut self, node: NodeId, top: f64, height: f64) {
        self.node_mut(node).layout = LayoutBox { top, height };
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height.max(0.0);
    }

    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn set_root_font_size(&mut self, px: f64) {
        self.root_font_size = px;
    }

    /// Moves the viewport the way a user scroll would, without a request.
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    // ---------------------------------------------------------------------
    // Inspection
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn tag_name(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    /// Concatenated text of the element and its descendants.
    ///
    /// Markup stored by `set_inner_html` contributes its text with tags stripped.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let data = self.node(node);
        if let Some(markup) = &data.markup {
            return strip_tags(markup);
        }
        let mut text = data.text.clone();
        for child in &data.children {
            text.push_str(&self.text_content(*child));
        }
        text
    }

    /// Every scroll request made so far, oldest first.
    #[must_use]
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    /// Number of `set_style` calls made on `node`.
    #[must_use]
    pub fn style_writes(&self, node: NodeId) -> usize {
        self.node(node).style_writes
    }

    /// Connected elements carrying `class`, in document order.
    #[must_use]
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(&format!(".{class}"))
    }

    fn write_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let attributes = &mut self.node_mut(node).attributes;
        match attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn class_tokens(&self, node: NodeId) -> Vec<String> {
        self.element_attribute(node, "class")
            .map(|classes| classes.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Pre-order walk of the subtree below `root`, excluding `root`.
    fn descendants(&self, root: NodeId, out: &mut Vec<NodeId>) {
        for child in &self.node(root).children {
            out.push(*child);
            self.descendants(*child, out);
        }
    }

    fn select(&self, root: NodeId, include_root: bool, selector: &str) -> Vec<NodeId> {
        let list = match SelectorList::parse(selector) {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(%err, "selector rejected");
                return Vec::new();
            }
        };

        let mut candidates = Vec::new();
        if include_root {
            candidates.push(root);
        }
        self.descendants(root, &mut candidates);
        candidates.retain(|node| list.matches(self, *node));
        candidates
    }

    fn serialize(&self, node: NodeId, out: &mut String) {
        let data = self.node(node);
        out.push('<');
        out.push_str(&data.tag);
        for (name, value) in &data.attributes {
            out.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
        }
        out.push('>');
        out.push_str(&self.inner_html(&node));
        out.push_str(&format!("</{}>", data.tag));
    }
}

impl ElementTree for MemoryDom {
    type Id = NodeId;

    fn element_tag(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    fn element_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(self.root, true, selector)
    }

    fn query_within(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select(*root, false, selector)
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn head(&self) -> Option<NodeId> {
        Some(self.head)
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut cursor = Some(*node);
        while let Some(current) = cursor {
            if current == *ancestor {
                return true;
            }
            cursor = self.node(current).parent;
        }
        false
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        self.contains(&self.root, node)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.element_attribute(*node, name).map(str::to_string)
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.write_attribute(*node, name, value);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.class_tokens(*node).iter().any(|token| token == class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        let mut tokens = self.class_tokens(*node);
        if !tokens.iter().any(|token| token == class) {
            tokens.push(class.to_string());
            self.write_attribute(*node, "class", &tokens.join(" "));
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        let mut tokens = self.class_tokens(*node);
        let before = tokens.len();
        tokens.retain(|token| token != class);
        if tokens.len() != before {
            self.write_attribute(*node, "class", &tokens.join(" "));
        }
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        let data = self.node_mut(*node);
        data.style_writes += 1;
        match data.styles.iter_mut().find(|(p, _)| p == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => data.styles.push((property.to_string(), value.to_string())),
        }
    }

    fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.node(*node)
            .styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.clone())
    }

    fn set_css_text(&mut self, node: &NodeId, css: &str) {
        let styles = css
            .split(';')
            .filter_map(|declaration| declaration.split_once(':'))
            .map(|(property, value)| (property.trim().to_string(), value.trim().to_string()))
            .filter(|(property, _)| !property.is_empty())
            .collect();
        self.node_mut(*node).styles = styles;
    }

    fn inner_html(&self, node: &NodeId) -> String {
        let data = self.node(*node);
        if let Some(markup) = &data.markup {
            return markup.clone();
        }
        let mut html = escape_html(&data.text);
        for child in &data.children {
            self.serialize(*child, &mut html);
        }
        html
    }

    fn set_inner_html(&mut self, node: &NodeId, html: &str) {
        let children = std::mem::take(&mut self.node_mut(*node).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
        let data = self.node_mut(*node);
        data.text.clear();
        data.markup = Some(html.to_string());
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.set_inner_html(node, "");
        let data = self.node_mut(*node);
        data.markup = None;
        data.text = text.to_string();
    }

    fn value(&self, node: &NodeId) -> String {
        self.node(*node).value.clone()
    }

    fn set_value(&mut self, node: &NodeId, value: &str) {
        self.node_mut(*node).value = value.to_string();
    }

    fn is_disabled(&self, node: &NodeId) -> bool {
        self.node(*node).disabled
    }

    fn set_disabled(&mut self, node: &NodeId, disabled: bool) {
        self.node_mut(*node).disabled = disabled;
    }

    fn create_element(&mut self, tag: &str) -> Option<NodeId> {
        Some(self.alloc(tag))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        if self.contains(child, parent) {
            tracing::warn!(?parent, ?child, "refusing to append an ancestor");
            return;
        }
        self.attach(*parent, *child);
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(*node);
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.node(*node).layout.top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.node(*node).layout.height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scroll_requests.push(ScrollRequest { top, behavior });
        self.scroll_y = top.max(0.0);
    }

    fn root_font_size(&self) -> f64 {
        self.root_font_size
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn strip_tags(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text
}
