use super::node::insert_child;
use super::{Children, ManifestError, ManifestNode, XmlDocument, MANIFEST_TAG};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Parser for AndroidManifest.xml files and manifest fragments
pub struct ManifestParser;

impl ManifestParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse manifest markup into its top-level elements.
    ///
    /// Comments, processing instructions and doctypes are skipped. Text and
    /// CDATA inside an element are joined into its `text`.
    pub fn parse(&self, contents: &str) -> Result<XmlDocument, ManifestError> {
        let mut reader = Reader::from_str(contents);
        reader.trim_text(true);

        let mut document = XmlDocument::new();
        let mut stack: Vec<ManifestNode> = Vec::new();

        loop {
            let position = reader.buffer_position();
            let event = reader
                .read_event()
                .map_err(|e| parse_error(position, e.to_string()))?;

            match event {
                Event::Start(ref e) => {
                    stack.push(self.open_element(e, position)?);
                }
                Event::Empty(ref e) => {
                    let node = self.open_element(e, position)?;
                    attach(&mut stack, &mut document.elements, node);
                }
                Event::End(ref e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    let node = match stack.pop() {
                        Some(node) if node.name == name => node,
                        Some(node) => {
                            return Err(parse_error(
                                position,
                                format!("expected </{}>, found </{}>", node.name, name),
                            ))
                        }
                        None => {
                            return Err(parse_error(
                                position,
                                format!("unexpected closing tag </{}>", name),
                            ))
                        }
                    };
                    attach(&mut stack, &mut document.elements, node);
                }
                Event::Text(ref e) => {
                    let text = e
                        .unescape()
                        .map_err(|err| parse_error(position, err.to_string()))?;
                    append_text(&mut stack, &text, position)?;
                }
                Event::CData(ref e) => {
                    let text = String::from_utf8_lossy(e).to_string();
                    append_text(&mut stack, &text, position)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(parse_error(
                reader.buffer_position(),
                format!("unclosed element <{}>", open.name),
            ));
        }

        if document.is_empty() {
            return Err(parse_error(0, "document contains no elements".to_string()));
        }

        if document.has_manifest() && document.elements.values().map(|c| c.len()).sum::<usize>() > 1
        {
            return Err(parse_error(
                0,
                format!("<{}> must be the only root element", MANIFEST_TAG),
            ));
        }

        debug!(
            "Parsed manifest markup: {} top-level element name(s)",
            document.elements.len()
        );

        Ok(document)
    }

    fn open_element(&self, e: &BytesStart, position: usize) -> Result<ManifestNode, ManifestError> {
        let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
        let mut attributes = BTreeMap::new();

        for attr in e.attributes() {
            let attr = attr.map_err(|err| parse_error(position, err.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| parse_error(position, err.to_string()))?
                .to_string();
            attributes.insert(key, value);
        }

        trace!("<{}> with {} attribute(s)", name, attributes.len());
        Ok(ManifestNode::new(name).with_attributes(attributes))
    }
}

impl Default for ManifestParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_error(position: usize, message: String) -> ManifestError {
    ManifestError::Parse { position, message }
}

/// Hand a finished element to its parent, or to the document top level
fn attach(
    stack: &mut [ManifestNode],
    top_level: &mut BTreeMap<String, Children>,
    node: ManifestNode,
) {
    match stack.last_mut() {
        Some(parent) => parent.add_child(node),
        None => insert_child(top_level, node),
    }
}

fn append_text(stack: &mut [ManifestNode], text: &str, position: usize) -> Result<(), ManifestError> {
    if text.trim().is_empty() {
        return Ok(());
    }

    match stack.last_mut() {
        Some(node) => {
            match node.text {
                Some(ref mut existing) => existing.push_str(text),
                None => node.text = Some(text.to_string()),
            }
            Ok(())
        }
        None => Err(parse_error(
            position,
            "text outside of any element".to_string(),
        )),
    }
}
