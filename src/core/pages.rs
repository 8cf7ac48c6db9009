use crate::core::layout::{page_id, pages_needed};
use crate::document::{Document, Element, Node};
use crate::errors::{AppError, AppResult};

/// Grows the template so that `records` visits fit, 5 per page.
pub struct PageReplicator;

impl PageReplicator {
    /// Make sure pages `page_1..=page_<ceil(records/5)>` exist.
    ///
    /// Each missing page is a deep copy of the page before it, inserted right
    /// after it (together with a copy of the whitespace that followed the
    /// source page). Existing pages are never touched, removed or renumbered.
    ///
    /// Returns the number of pages added.
    pub fn ensure_pages(doc: &mut Document, records: usize) -> AppResult<usize> {
        let needed = pages_needed(records);
        if needed == 0 {
            return Ok(0);
        }

        if doc.find_by_id(&page_id(1)).is_none() {
            return Err(AppError::Template(format!(
                "base page '{}' not found in the template",
                page_id(1)
            )));
        }

        let mut added = 0;
        for page in 2..=needed {
            if doc.find_by_id(&page_id(page)).is_some() {
                continue;
            }
            Self::clone_after(doc, page - 1, page)?;
            added += 1;
        }
        Ok(added)
    }

    fn clone_after(doc: &mut Document, source: usize, page: usize) -> AppResult<()> {
        let source_id = page_id(source);
        let addr = doc
            .find_by_id(&source_id)
            .ok_or_else(|| AppError::Template(format!("page '{source_id}' not found")))?;
        let (siblings, idx) = doc
            .siblings_mut(&addr)
            .ok_or_else(|| AppError::Template(format!("page '{source_id}' not found")))?;

        let Some(Node::Element(source_page)) = siblings.get(idx) else {
            return Err(AppError::Template(format!(
                "'{source_id}' is not an element"
            )));
        };
        let mut copy = source_page.clone();
        copy.set_attr("id", &page_id(page));

        match siblings.get(idx + 1) {
            Some(Node::Text(tail)) => {
                let tail = Node::Text(tail.clone());
                siblings.insert(idx + 2, Node::Element(copy));
                siblings.insert(idx + 3, tail);
            }
            _ => siblings.insert(idx + 1, Node::Element(copy)),
        }
        Ok(())
    }

    /// Ids of the `page_<n>` containers, in document order.
    pub fn page_ids(doc: &Document) -> Vec<String> {
        fn walk(el: &Element, out: &mut Vec<String>) {
            if let Some(id) = el.id()
                && id
                    .strip_prefix("page_")
                    .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
            {
                out.push(id);
            }
            for child in el.child_elements() {
                walk(child, out);
            }
        }

        let mut out = Vec::new();
        for el in doc.nodes().iter().filter_map(Node::as_element) {
            walk(el, &mut out);
        }
        out
    }
}
