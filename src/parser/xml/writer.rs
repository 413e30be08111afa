use super::{ManifestError, ManifestNode};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Serialize a manifest tree, XML declaration included
pub fn to_xml_string(node: &ManifestNode) -> Result<String, ManifestError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(serialize_error)?;
    write_node(&mut writer, node)?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| ManifestError::Serialize(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &ManifestNode) -> Result<(), ManifestError> {
    let mut start = BytesStart::new(node.name.as_str());
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if node.children.is_empty() && node.text.is_none() {
        return writer.write_event(Event::Empty(start)).map_err(serialize_error);
    }

    writer.write_event(Event::Start(start)).map_err(serialize_error)?;

    if let Some(text) = &node.text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(serialize_error)?;
    }

    for group in node.children.values() {
        for child in group.iter() {
            write_node(writer, child)?;
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(node.name.as_str())))
        .map_err(serialize_error)
}

fn serialize_error(e: quick_xml::Error) -> ManifestError {
    ManifestError::Serialize(e.to_string())
}
