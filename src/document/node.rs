//! Owned HTML node tree.
//!
//! Text, comments and untouched start tags keep their raw source form so the
//! tree can be written back without reformatting anything that was not edited.

use crate::document::path::FieldPath;
use quick_xml::escape::{escape, partial_escape, resolve_html5_entity, unescape_with};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Raw (still escaped) character data.
    Text(String),
    Comment(String),
    CData(String),
    /// The whole `<!DOCTYPE ...>` markup as found in the source.
    DocType(String),
    Decl(String),
    PI(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// How the element was closed in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagForm {
    /// `<div>...</div>`
    Paired,
    /// `<br/>`
    SelfClosing,
    /// Void elements (`<meta ...>`) and elements whose end tag was implied.
    Unclosed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) name: String,
    /// Attribute values are kept escaped, as found in the source.
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) children: Vec<Node>,
    /// Start tag content exactly as read; dropped once an attribute changes.
    pub(crate) raw_start: Option<String>,
    pub(crate) form: TagForm,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            raw_start: None,
            form: TagForm::Paired,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn form(&self) -> TagForm {
        self.form
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Attribute names in source order.
    pub fn attr_names(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(|(k, _)| k.as_str())
    }

    /// Unescaped attribute value.
    pub fn attr(&self, key: &str) -> Option<String> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| unescape_html(v))
    }

    pub fn id(&self) -> Option<String> {
        self.attr("id")
    }

    /// Set (or add) an attribute. The start tag is re-rendered on output.
    pub fn set_attr(&mut self, key: &str, value: &str) {
        let escaped = escape(value).into_owned();
        match self.attrs.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            Some((_, v)) if *v == escaped => return,
            Some((_, v)) => *v = escaped,
            None => self.attrs.push((key.to_string(), escaped)),
        }
        self.raw_start = None;
    }

    /// Text before the first child element (unescaped).
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(raw) => out.push_str(&unescape_html(raw)),
                Node::Element(_) => break,
                _ => {}
            }
        }
        out
    }

    /// Replace the text that precedes the first child element.
    ///
    /// Child elements and anything after them are left alone; an empty value
    /// just removes the leading text.
    pub fn set_text(&mut self, value: &str) {
        let leading = self
            .children
            .iter()
            .take_while(|n| matches!(n, Node::Text(_)))
            .count();
        self.children.drain(..leading);
        if !value.is_empty() {
            self.children
                .insert(0, Node::Text(partial_escape(value).into_owned()));
        }
    }

    /// Element at a child-index chain below this one.
    pub fn descendant(&self, chain: &[usize]) -> Option<&Element> {
        let mut current = self;
        for &idx in chain {
            current = current.children.get(idx)?.as_element()?;
        }
        Some(current)
    }

    pub fn descendant_mut(&mut self, chain: &[usize]) -> Option<&mut Element> {
        let mut current = self;
        for &idx in chain {
            current = current.children.get_mut(idx)?.as_element_mut()?;
        }
        Some(current)
    }

    pub fn select(&self, path: &FieldPath) -> Option<&Element> {
        let chain = path.resolve(self)?;
        self.descendant(&chain)
    }

    pub fn select_mut(&mut self, path: &FieldPath) -> Option<&mut Element> {
        let chain = path.resolve(self)?;
        self.descendant_mut(&chain)
    }

    /// Start tag content without the angle brackets.
    pub(crate) fn start_content(&self) -> String {
        if let Some(raw) = &self.raw_start {
            return raw.clone();
        }
        let mut out = self.name.clone();
        for (k, v) in &self.attrs {
            let quote = if v.contains('"') { '\'' } else { '"' };
            out.push(' ');
            out.push_str(k);
            out.push('=');
            out.push(quote);
            out.push_str(v);
            out.push(quote);
        }
        out
    }
}

/// Unescape with the HTML5 named entities (`&nbsp;`, ...). Malformed
/// references are returned untouched.
pub(crate) fn unescape_html(raw: &str) -> String {
    unescape_with(raw, resolve_html5_entity)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
