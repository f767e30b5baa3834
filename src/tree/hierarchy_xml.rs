use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde::Deserialize;

use crate::error::HierarchyError;
use crate::tree::tree_model::RawNode;

/// Nesting ceiling for the XML reader.
pub const MAX_DOCUMENT_DEPTH: usize = 4096;

/// Drop C0 control characters (except tab, LF, CR) and DEL, which device dumps
/// occasionally carry and which XML forbids.
pub fn clean_dump(xml: &str) -> String {
    xml.chars()
        .filter(|&c| {
            let code = c as u32;
            !(code <= 0x08
                || code == 0x0B
                || code == 0x0C
                || (0x0E..=0x1F).contains(&code)
                || code == 0x7F)
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Read a UIAutomator-style dump into a `RawNode` tree rooted at the document element.
pub fn parse_hierarchy(xml: &str) -> Result<RawNode, HierarchyError> {
    let cleaned = clean_dump(xml);
    if cleaned.is_empty() {
        return Err(HierarchyError::EmptyDocument);
    }

    let mut reader = Reader::from_str(&cleaned);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<RawNode> = Vec::new();
    let mut root: Option<RawNode> = None;

    loop {
        let event = reader.read_event().map_err(|e| HierarchyError::Xml {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(e) => {
                if root.is_some() {
                    return Err(HierarchyError::UnbalancedDocument(
                        "more than one root element".into(),
                    ));
                }
                if stack.len() >= MAX_DOCUMENT_DEPTH {
                    return Err(HierarchyError::DepthExceeded {
                        limit: MAX_DOCUMENT_DEPTH,
                    });
                }
                stack.push(read_element(&e, &reader)?);
            }
            Event::Empty(e) => {
                let node = read_element(&e, &reader)?;
                attach(node, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let node = stack.pop().ok_or_else(|| {
                    HierarchyError::UnbalancedDocument("end tag without matching start".into())
                })?;
                attach(node, &mut stack, &mut root)?;
            }
            Event::Eof => break,
            // Text, comments, declarations and processing instructions carry no structure
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(HierarchyError::UnbalancedDocument(format!(
            "{} unclosed element(s) at end of document",
            stack.len()
        )));
    }

    root.ok_or(HierarchyError::EmptyDocument)
}

/// Read a serialized `RawNode` tree (used for dumps converted from other platforms).
/// Nesting is capped at `MAX_DOCUMENT_DEPTH` levels, as for XML dumps.
pub fn parse_tree_json(json: &str) -> Result<RawNode, HierarchyError> {
    let too_deep = HierarchyError::DepthExceeded {
        limit: MAX_DOCUMENT_DEPTH,
    };

    // Each tree level is an object plus its `children` array
    if json_nesting(json) > 2 * MAX_DOCUMENT_DEPTH {
        return Err(too_deep);
    }

    let json_error = |source: serde_json::Error| HierarchyError::Json {
        context: "hierarchy tree".into(),
        source,
    };

    // serde_json stops at 128 nested values by default, about 60 tree levels
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let tree = RawNode::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(json_error)?;
    deserializer.end().map_err(json_error)?;

    if tree.depth() > MAX_DOCUMENT_DEPTH {
        return Err(too_deep);
    }
    Ok(tree)
}

/// Deepest object/array nesting in a JSON text, ignoring brackets inside strings.
fn json_nesting(json: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

fn attach(
    node: RawNode,
    stack: &mut [RawNode],
    root: &mut Option<RawNode>,
) -> Result<(), HierarchyError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_none() => *root = Some(node),
        None => {
            return Err(HierarchyError::UnbalancedDocument(
                "more than one root element".into(),
            ));
        }
    }
    Ok(())
}

fn read_element(e: &BytesStart, reader: &Reader<&[u8]>) -> Result<RawNode, HierarchyError> {
    let xml_error = |message: String| HierarchyError::Xml {
        position: reader.buffer_position() as u64,
        message,
    };

    let mut node = RawNode::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());

    for attr in e.attributes() {
        let attr = attr.map_err(|err| xml_error(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| xml_error(err.to_string()))?
            .into_owned();
        node.attributes.insert(key, value);
    }

    Ok(node)
}
