//! Positional element paths, a tiny subset of XPath:
//! `div/div[2]/div[15]/span`.
//!
//! Each step matches child elements by tag name (ASCII case-insensitive);
//! `[n]` keeps only the n-th such child (1-based). A step without index keeps
//! every match, and the first match in document order wins.

use crate::document::node::{Element, Node};
use crate::errors::{AppError, AppResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    name: String,
    index: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    steps: Vec<Step>,
}

impl FieldPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step matching every `name` child.
    pub fn child(mut self, name: &str) -> Self {
        self.steps.push(Step {
            name: name.to_string(),
            index: None,
        });
        self
    }

    /// Append a step matching the `index`-th `name` child (1-based).
    pub fn nth(mut self, name: &str, index: usize) -> Self {
        self.steps.push(Step {
            name: name.to_string(),
            index: Some(index),
        });
        self
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        let mut path = FieldPath::new();
        for raw in s.trim_matches('/').split('/') {
            let bad = || AppError::Template(format!("invalid element path: {s}"));
            let raw = raw.trim();
            if raw.is_empty() {
                return Err(bad());
            }
            path = match raw.split_once('[') {
                None => path.child(raw),
                Some((name, rest)) => {
                    let idx = rest
                        .strip_suffix(']')
                        .and_then(|n| n.trim().parse::<usize>().ok())
                        .filter(|n| *n > 0)
                        .ok_or_else(bad)?;
                    if name.is_empty() {
                        return Err(bad());
                    }
                    path.nth(name, idx)
                }
            };
        }
        Ok(path)
    }

    /// Child-index chain (relative to `root`) of the first matching element.
    pub fn resolve(&self, root: &Element) -> Option<Vec<usize>> {
        let mut frontier: Vec<(Vec<usize>, &Element)> = vec![(Vec::new(), root)];

        for step in &self.steps {
            let mut next = Vec::new();
            for (chain, el) in &frontier {
                let mut seen = 0;
                for (i, node) in el.children.iter().enumerate() {
                    let Node::Element(child) = node else {
                        continue;
                    };
                    if !child.name.eq_ignore_ascii_case(&step.name) {
                        continue;
                    }
                    seen += 1;
                    if step.index.is_none_or(|want| want == seen) {
                        let mut c = chain.clone();
                        c.push(i);
                        next.push((c, child));
                    }
                }
            }
            if next.is_empty() {
                return None;
            }
            frontier = next;
        }

        frontier.into_iter().next().map(|(chain, _)| chain)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match step.index {
                Some(n) => write!(f, "{}[{}]", step.name, n)?,
                None => f.write_str(&step.name)?,
            }
        }
        Ok(())
    }
}
