//! HTML template document: parsing, navigation, editing and serialization.

mod fs_utils;
mod node;
mod parse;
pub mod path;
mod write;

pub use node::{Element, Node, TagForm};
pub use path::FieldPath;

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Position of an element: child indices from the top-level node list down.
pub type NodeAddr = Vec<usize>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
}

impl Document {
    pub fn parse(src: &str) -> AppResult<Self> {
        parse::parse_document(src)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let src = fs::read_to_string(path).map_err(|e| {
            AppError::Template(format!("cannot read template {}: {}", path.display(), e))
        })?;
        Self::parse(&src)
    }

    pub fn to_bytes(&self) -> AppResult<Vec<u8>> {
        write::write_document(self)
    }

    pub fn to_html(&self) -> AppResult<String> {
        String::from_utf8(self.to_bytes()?)
            .map_err(|e| AppError::Other(format!("serialized document is not UTF-8: {e}")))
    }

    /// Write the document as UTF-8, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        fs_utils::ensure_writable(path)?;
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Address of the first element (document order) whose `id` is `id`.
    pub fn find_by_id(&self, id: &str) -> Option<NodeAddr> {
        fn walk(nodes: &[Node], id: &str, addr: &mut NodeAddr) -> bool {
            for (i, node) in nodes.iter().enumerate() {
                let Node::Element(el) = node else { continue };
                addr.push(i);
                if el.id().as_deref() == Some(id) || walk(&el.children, id, addr) {
                    return true;
                }
                addr.pop();
            }
            false
        }

        let mut addr = Vec::new();
        walk(&self.nodes, id, &mut addr).then_some(addr)
    }

    pub fn element(&self, addr: &[usize]) -> Option<&Element> {
        let (first, rest) = addr.split_first()?;
        self.nodes.get(*first)?.as_element()?.descendant(rest)
    }

    pub fn element_mut(&mut self, addr: &[usize]) -> Option<&mut Element> {
        let (first, rest) = addr.split_first()?;
        self.nodes.get_mut(*first)?.as_element_mut()?.descendant_mut(rest)
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        let addr = self.find_by_id(id)?;
        self.element(&addr)
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        let addr = self.find_by_id(id)?;
        self.element_mut(&addr)
    }

    /// The sibling list holding the node at `addr`, and its index there.
    pub fn siblings_mut(&mut self, addr: &[usize]) -> Option<(&mut Vec<Node>, usize)> {
        let (last, parent) = addr.split_last()?;
        let siblings = if parent.is_empty() {
            &mut self.nodes
        } else {
            &mut self.element_mut(parent)?.children
        };
        (*last < siblings.len()).then_some((siblings, *last))
    }
}
