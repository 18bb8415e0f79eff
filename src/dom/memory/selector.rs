// SPDX-License-Identifier: MPL-2.0
//! The subset of CSS selectors the page uses.
//!
//! Supported: type selectors, `*`, `#id`, `.class`, `[attr]`, `[attr=v]`,
//! `[attr^=v]`, the descendant and `>` combinators, and `,` lists.
//! Anything else is rejected the way a browser throws a `SyntaxError`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported selector: {0}")]
pub struct UnsupportedSelector(pub String);

/// Read access to the element tree a selector is matched against.
pub(super) trait ElementTree {
    type Id: Copy;

    fn element_tag(&self, node: Self::Id) -> &str;

    fn element_attribute(&self, node: Self::Id, name: &str) -> Option<&str>;

    fn parent_element(&self, node: Self::Id) -> Option<Self::Id>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttributeMatch {
    Exists,
    Equals(String),
    StartsWith(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeCondition {
    name: String,
    matcher: AttributeMatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeCondition>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty() && self.attributes.is_empty()
    }

    fn matches<T: ElementTree>(&self, tree: &T, node: T::Id) -> bool {
        if let Some(tag) = &self.tag {
            if !tree.element_tag(node).eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        if let Some(id) = &self.id {
            if tree.element_attribute(node, "id") != Some(id.as_str()) {
                return false;
            }
        }

        if !self.classes.is_empty() {
            let class_attr = tree.element_attribute(node, "class").unwrap_or_default();
            if self
                .classes
                .iter()
                .any(|class| !class_attr.split_whitespace().any(|token| token == class))
            {
                return false;
            }
        }

        self.attributes.iter().all(|cond| {
            let value = tree.element_attribute(node, &cond.name);
            match &cond.matcher {
                AttributeMatch::Exists => value.is_some(),
                AttributeMatch::Equals(expected) => value == Some(expected.as_str()),
                AttributeMatch::StartsWith(prefix) => value.is_some_and(|v| v.starts_with(prefix.as_str())),
            }
        })
    }
}

/// One comma-free selector: compounds joined by combinators, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
    /// `combinators[i]` joins `compounds[i]` and `compounds[i + 1]`.
    combinators: Vec<Combinator>,
}

impl Complex {
    fn matches<T: ElementTree>(&self, tree: &T, node: T::Id) -> bool {
        match self.compounds.len() {
            0 => false,
            len => self.matches_from(tree, node, len - 1),
        }
    }

    fn matches_from<T: ElementTree>(&self, tree: &T, node: T::Id, index: usize) -> bool {
        if !self.compounds[index].matches(tree, node) {
            return false;
        }
        if index == 0 {
            return true;
        }

        match self.combinators[index - 1] {
            Combinator::Child => tree
                .parent_element(node)
                .is_some_and(|parent| self.matches_from(tree, parent, index - 1)),
            Combinator::Descendant => {
                let mut cursor = tree.parent_element(node);
                while let Some(ancestor) = cursor {
                    if self.matches_from(tree, ancestor, index - 1) {
                        return true;
                    }
                    cursor = tree.parent_element(ancestor);
                }
                false
            }
        }
    }
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SelectorList(Vec<Complex>);

impl SelectorList {
    pub(super) fn parse(selector: &str) -> Result<Self, UnsupportedSelector> {
        Parser::new(selector).parse_list()
    }

    pub(super) fn matches<T: ElementTree>(&self, tree: &T, node: T::Id) -> bool {
        self.0.iter().any(|complex| complex.matches(tree, node))
    }
}

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self) -> UnsupportedSelector {
        UnsupportedSelector(self.source.to_string())
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn parse_list(mut self) -> Result<SelectorList, UnsupportedSelector> {
        let mut list = Vec::new();
        loop {
            self.skip_whitespace();
            list.push(self.parse_complex()?);
            match self.bump() {
                None => break,
                Some(',') => continue,
                Some(_) => return Err(self.error()),
            }
        }
        Ok(SelectorList(list))
    }

    /// Parses up to (not including) a `,` or the end of input.
    fn parse_complex(&mut self) -> Result<Complex, UnsupportedSelector> {
        let mut compounds = vec![self.parse_compound()?];
        let mut combinators = Vec::new();

        loop {
            let had_space = self.skip_whitespace();
            let combinator = match self.peek() {
                None | Some(',') => break,
                Some('>') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    Combinator::Child
                }
                Some(_) if had_space => Combinator::Descendant,
                Some(_) => return Err(self.error()),
            };
            combinators.push(combinator);
            compounds.push(self.parse_compound()?);
        }

        Ok(Complex {
            compounds,
            combinators,
        })
    }

    fn parse_compound(&mut self) -> Result<Compound, UnsupportedSelector> {
        let mut compound = Compound::default();
        let mut universal = false;

        if self.peek() == Some('*') {
            self.pos += 1;
            universal = true;
        } else if self.peek().is_some_and(is_ident_char) {
            compound.tag = Some(self.parse_ident()?);
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    compound.id = Some(self.parse_ident()?);
                }
                Some('.') => {
                    self.pos += 1;
                    compound.classes.push(self.parse_ident()?);
                }
                Some('[') => {
                    self.pos += 1;
                    compound.attributes.push(self.parse_attribute()?);
                }
                _ => break,
            }
        }

        if compound.is_empty() && !universal {
            return Err(self.error());
        }
        Ok(compound)
    }

    fn parse_ident(&mut self) -> Result<String, UnsupportedSelector> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error());
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    /// Parses the inside of `[...]`; the opening bracket is already consumed.
    fn parse_attribute(&mut self) -> Result<AttributeCondition, UnsupportedSelector> {
        self.skip_whitespace();
        let name = self.parse_ident()?;
        self.skip_whitespace();

        let matcher = match self.bump() {
            Some(']') => {
                return Ok(AttributeCondition {
                    name,
                    matcher: AttributeMatch::Exists,
                })
            }
            Some('=') => AttributeMatch::Equals(self.parse_attribute_value()?),
            Some('^') => {
                if self.bump() != Some('=') {
                    return Err(self.error());
                }
                AttributeMatch::StartsWith(self.parse_attribute_value()?)
            }
            _ => return Err(self.error()),
        };

        self.skip_whitespace();
        if self.bump() != Some(']') {
            return Err(self.error());
        }
        Ok(AttributeCondition { name, matcher })
    }

    fn parse_attribute_value(&mut self) -> Result<String, UnsupportedSelector> {
        self.skip_whitespace();
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let start = self.pos;
                while self.peek().is_some_and(|ch| ch != quote) {
                    self.pos += 1;
                }
                let value: String = self.chars[start..self.pos].iter().collect();
                if self.bump() != Some(quote) {
                    return Err(self.error());
                }
                Ok(value)
            }
            _ => self.parse_ident(),
        }
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Flat tree: index is the node id, parent links by index.
    struct Tree {
        nodes: Vec<(&'static str, HashMap<&'static str, &'static str>, Option<usize>)>,
    }

    impl ElementTree for Tree {
        type Id = usize;

        fn element_tag(&self, node: usize) -> &str {
            self.nodes[node].0
        }

        fn element_attribute(&self, node: usize, name: &str) -> Option<&str> {
            self.nodes[node].1.get(name).copied()
        }

        fn parent_element(&self, node: usize) -> Option<usize> {
            self.nodes[node].2
        }
    }

    fn tree() -> Tree {
        Tree {
            nodes: vec![
                ("section", HashMap::from([("class", "about-grid")]), None),
                ("div", HashMap::from([("class", "card wide")]), Some(0)),
                ("p", HashMap::new(), Some(1)),
                ("div", HashMap::new(), Some(2)),
                ("a", HashMap::from([("href", "#features"), ("id", "cta")]), Some(1)),
                ("button", HashMap::from([("type", "submit")]), Some(0)),
            ],
        }
    }

    fn matches(selector: &str, node: usize) -> bool {
        SelectorList::parse(selector)
            .expect("selector should parse")
            .matches(&tree(), node)
    }

    #[test]
    fn child_combinator_requires_direct_parent() {
        assert!(matches(".about-grid > div", 1));
        assert!(!matches(".about-grid > div", 3));
    }

    #[test]
    fn descendant_combinator_walks_all_ancestors() {
        assert!(matches(".about-grid div", 3));
        assert!(matches("section p", 2));
    }

    #[test]
    fn class_id_and_tag_combine() {
        assert!(matches("div.card.wide", 1));
        assert!(!matches("div.card.narrow", 1));
        assert!(matches("a#cta", 4));
        assert!(matches("#cta", 4));
    }

    #[test]
    fn attribute_conditions() {
        assert!(matches("a[href]", 4));
        assert!(matches("a[href^=\"#\"]", 4));
        assert!(matches("a[href^='#feat']", 4));
        assert!(!matches("a[href^=\"/\"]", 4));
        assert!(matches("button[type=\"submit\"]", 5));
        assert!(matches("button[type=submit]", 5));
        assert!(!matches("button[type=\"reset\"]", 5));
    }

    #[test]
    fn selector_list_matches_any_member() {
        assert!(matches(".feature-card, .roadmap-item, .about-grid > div", 1));
        assert!(!matches(".feature-card, .roadmap-item", 1));
    }

    #[test]
    fn universal_selector_matches_everything() {
        assert!(matches("*", 2));
        assert!(matches(".about-grid > *", 5));
    }

    #[test]
    fn rejects_unsupported_syntax() {
        for selector in ["", "#", "a:hover", "a + b", "div >", "[href~=x]", "a[href"] {
            assert!(
                SelectorList::parse(selector).is_err(),
                "{selector:?} should be rejected"
            );
        }
    }
}
