//! Mutable SVG document tree.
//!
//! The template is parsed once into this tree, mutated by the field updater,
//! and serialized back out. Escaping of text and attribute values happens
//! here on serialization, never in the updater.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A single element: tag name, ordered attributes, direct text, children.
///
/// Attributes keep their source order so serialized output stays stable;
/// duplicate keys resolve to the first entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Tag name with any namespace prefix removed (`svg:tspan` -> `tspan`).
    pub fn local_tag(&self) -> &str {
        match self.tag.rsplit_once(':') {
            Some((_, local)) => local,
            None => &self.tag,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute, replacing an existing value in place so the
    /// attribute keeps its position in the serialized output.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(key, _)| key == name)?;
        Some(self.attrs.remove(index).1)
    }

    /// Keeps only the attributes whose name satisfies the predicate.
    pub fn retain_attrs<F: Fn(&str) -> bool>(&mut self, predicate: F) {
        self.attrs.retain(|(key, _)| predicate(key));
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Depth-first lookup of the element whose `id` attribute equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    fn write_xml(&self, out: &mut String, depth: usize) {
        indent(out, depth);
        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            escape_into(out, value, true);
            out.push('"');
        }

        if self.text.is_empty() && self.children.is_empty() {
            out.push_str("/>");
        } else if !self.text.is_empty() {
            // Inline layout: direct text must not gain indentation whitespace.
            out.push('>');
            escape_into(out, &self.text, false);
            for child in &self.children {
                child.write_xml(out, 0);
            }
            out.push_str("</");
            out.push_str(&self.tag);
            out.push('>');
        } else {
            out.push('>');
            for child in &self.children {
                out.push('\n');
                child.write_xml(out, depth + 1);
            }
            out.push('\n');
            indent(out, depth);
            out.push_str("</");
            out.push_str(&self.tag);
            out.push('>');
        }
    }
}

/// A parsed SVG document: the root element plus serialization policy.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    root: Element,
}

impl SvgDocument {
    /// Parses SVG markup into a document tree.
    ///
    /// Whitespace-only text between elements is dropped; comments, doctype
    /// and processing instructions are not preserved. Malformed markup or a
    /// missing root element is a parse error.
    pub fn parse(markup: &str) -> Result<Self> {
        let mut reader = Reader::from_str(markup);
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(element_from_tag(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = element_from_tag(e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(Self { root: element }),
                    }
                }
                Ok(Event::Text(ref t)) => {
                    let text = t.unescape().map_err(|e| Error::Parse(e.to_string()))?;
                    if !text.trim().is_empty() {
                        if let Some(current) = stack.last_mut() {
                            current.text.push_str(&text);
                        }
                    }
                }
                Ok(Event::CData(e)) => {
                    let bytes = e.into_inner();
                    let text = std::str::from_utf8(&bytes)
                        .map_err(|_| Error::Parse("invalid UTF-8 in CDATA section".to_string()))?;
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(text);
                    }
                }
                Ok(Event::End(_)) => {
                    let Some(element) = stack.pop() else {
                        return Err(Error::Parse("unexpected closing tag".to_string()));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(Self { root: element }),
                    }
                }
                Ok(Event::Eof) => break,
                // Declarations, comments, doctype and PIs are not preserved.
                Ok(_) => {}
                Err(e) => return Err(Error::Parse(e.to_string())),
            }
        }

        Err(Error::Parse("no root element found".to_string()))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }

    /// Serializes the tree with an XML declaration and pretty-printed
    /// element-only content. Elements carrying direct text stay on one line.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.root.write_xml(&mut out, 0);
        out.push('\n');
        out
    }
}

fn element_from_tag(e: &BytesStart<'_>) -> Result<Element> {
    let name = e.name();
    let tag = std::str::from_utf8(name.as_ref())
        .map_err(|_| Error::Parse("invalid UTF-8 in tag name".to_string()))?;
    let mut element = Element::new(tag);

    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::Parse(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| Error::Parse("invalid UTF-8 in attribute name".to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Parse(e.to_string()))?;
        element.set_attr(key, &value);
    }

    Ok(element)
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn escape_into(out: &mut String, value: &str, in_attribute: bool) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
