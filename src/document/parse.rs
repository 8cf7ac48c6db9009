use crate::document::Document;
use crate::document::node::{Element, Node, TagForm};
use crate::errors::{AppError, AppResult};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// HTML elements that never have content or an end tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

fn utf8(bytes: &[u8]) -> AppResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| AppError::Template(format!("invalid UTF-8 in template: {e}")))
}

fn element_from_start(e: &BytesStart, form: TagForm) -> AppResult<Element> {
    let mut attrs = Vec::new();
    for attr in e.html_attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        attrs.push((utf8(attr.key.as_ref())?, utf8(&attr.value)?));
    }

    Ok(Element {
        name: utf8(e.name().as_ref())?,
        attrs,
        children: Vec::new(),
        raw_start: Some(utf8(e)?),
        form,
    })
}

/// Source text of the `<!...>` markup that ends at `end`.
///
/// Depending on the reader state `start` points either at the `<` or just
/// past it, so the search starts one byte earlier.
fn markup_slice(src: &str, start: usize, end: usize) -> Option<&str> {
    let from = start.saturating_sub(1);
    let offset = src
        .as_bytes()
        .get(from..end)?
        .windows(2)
        .position(|w| w == b"<!")?;
    src.get(from + offset..end)
}

/// Attach a finished node to the innermost open element (or the top level).
fn push_node(stack: &mut [Element], top: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => top.push(node),
    }
}

/// Build the node tree of an HTML document.
///
/// The reader is lenient the way browsers are: void elements need no end
/// tag, an end tag closes every element opened after its match, and stray
/// end tags are dropped.
pub(crate) fn parse_document(src: &str) -> AppResult<Document> {
    let mut reader = Reader::from_str(src);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.expand_empty_elements = false;

    let mut stack: Vec<Element> = Vec::new();
    let mut top: Vec<Node> = Vec::new();

    loop {
        let before = reader.buffer_position() as usize;
        let event = reader.read_event()?;
        let after = reader.buffer_position() as usize;
        match event {
            Event::Start(e) => {
                let el = element_from_start(&e, TagForm::Paired)?;
                if is_void(&el.name) {
                    let el = Element {
                        form: TagForm::Unclosed,
                        ..el
                    };
                    push_node(&mut stack, &mut top, Node::Element(el));
                } else {
                    stack.push(el);
                }
            }
            Event::Empty(e) => {
                let el = element_from_start(&e, TagForm::SelfClosing)?;
                push_node(&mut stack, &mut top, Node::Element(el));
            }
            Event::End(e) => {
                let name = utf8(e.name().as_ref())?;
                let Some(pos) = stack
                    .iter()
                    .rposition(|el| el.name.eq_ignore_ascii_case(&name))
                else {
                    continue;
                };
                while stack.len() > pos {
                    let Some(mut el) = stack.pop() else { break };
                    if stack.len() > pos {
                        el.form = TagForm::Unclosed;
                    }
                    push_node(&mut stack, &mut top, Node::Element(el));
                }
            }
            Event::Text(t) => push_node(&mut stack, &mut top, Node::Text(utf8(&t)?)),
            Event::CData(t) => push_node(&mut stack, &mut top, Node::CData(utf8(&t)?)),
            Event::Comment(t) => push_node(&mut stack, &mut top, Node::Comment(utf8(&t)?)),
            Event::DocType(_) => {
                let raw = markup_slice(src, before, after).ok_or_else(|| {
                    AppError::Template(format!("cannot locate the doctype at byte {before}"))
                })?;
                push_node(&mut stack, &mut top, Node::DocType(raw.to_string()));
            }
            Event::Decl(d) => push_node(&mut stack, &mut top, Node::Decl(utf8(&d)?)),
            Event::PI(p) => push_node(&mut stack, &mut top, Node::PI(utf8(&p)?)),
            Event::Eof => break,
        }
    }

    // Whatever is still open at EOF was never closed in the source
    while let Some(mut el) = stack.pop() {
        el.form = TagForm::Unclosed;
        push_node(&mut stack, &mut top, Node::Element(el));
    }

    Ok(Document { nodes: top })
}
