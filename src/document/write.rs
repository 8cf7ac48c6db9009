use crate::document::Document;
use crate::document::node::{Node, TagForm};
use crate::errors::AppResult;
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};

pub(crate) fn write_document(doc: &Document) -> AppResult<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    for node in &doc.nodes {
        write_node(&mut writer, node)?;
    }
    Ok(writer.into_inner())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> AppResult<()> {
    match node {
        Node::Element(el) => {
            let content = el.start_content();
            let start = BytesStart::from_content(content.as_str(), el.name.len());
            if el.form == TagForm::SelfClosing {
                writer.write_event(Event::Empty(start))?;
                return Ok(());
            }
            writer.write_event(Event::Start(start))?;
            for child in &el.children {
                write_node(writer, child)?;
            }
            if el.form == TagForm::Paired {
                writer.write_event(Event::End(BytesEnd::new(el.name.as_str())))?;
            }
        }
        Node::Text(raw) => writer.write_event(Event::Text(BytesText::from_escaped(raw.as_str())))?,
        Node::Comment(raw) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(raw.as_str())))?
        }
        Node::CData(raw) => writer.write_event(Event::CData(BytesCData::new(raw.as_str())))?,
        // kept verbatim, keyword case included
        Node::DocType(raw) => writer.get_mut().extend_from_slice(raw.as_bytes()),
        Node::Decl(raw) => writer.write_event(Event::Decl(BytesDecl::from_start(
            BytesStart::from_content(raw.as_str(), 3),
        )))?,
        Node::PI(raw) => writer.write_event(Event::PI(BytesPI::new(raw.as_str())))?,
    }
    Ok(())
}
