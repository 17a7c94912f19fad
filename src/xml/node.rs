use std::borrow::Cow;
use std::io::Cursor;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::escape::{escape, partial_escape, unescape};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;

use super::XmlError;

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its attributes in document order.
///
/// Names are kept as written (`prefix:local`); namespace declarations are
/// ordinary `xmlns` / `xmlns:p` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Name without its prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(p, _)| p)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace an attribute in place, or append it.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attributes.iter().position(|(k, _)| k == name)?;
        Some(self.attributes.remove(pos).1)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First child element with this local name.
    pub fn child(&self, local: &str) -> Option<&Element> {
        self.elements().find(|e| e.local_name() == local)
    }

    /// First element with this local name, searching depth-first (self included).
    pub fn find(&self, local: &str) -> Option<&Element> {
        if self.local_name() == local {
            return Some(self);
        }
        self.elements().find_map(|e| e.find(local))
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Child element at a path of child-node indices.
    pub fn at_path(&self, path: &[usize]) -> Option<&Element> {
        let mut current = self;
        for &i in path {
            current = match current.children.get(i)? {
                Node::Element(e) => e,
                Node::Text(_) => return None,
            };
        }
        Some(current)
    }

    pub fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let mut current = self;
        for &i in path {
            current = match current.children.get_mut(i)? {
                Node::Element(e) => e,
                Node::Text(_) => return None,
            };
        }
        Some(current)
    }

    /// Compact serialization (no declaration, no indentation).
    pub fn to_xml(&self) -> Result<String, XmlError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        write_element(&mut writer, self)?;
        into_string(writer)
    }
}

pub(crate) fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map(|(_, l)| l).unwrap_or(name)
}

/// A parsed document: optional declaration plus the root element.
///
/// Comments, processing instructions and the doctype are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub declaration: bool,
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            declaration: true,
            root,
        }
    }

    pub fn parse(xml: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().check_end_names = true;

        let mut declaration = false;
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Decl(_)) => declaration = true,
                Ok(Event::Start(ref e)) => stack.push(start_element(e)?),
                Ok(Event::Empty(ref e)) => {
                    let element = start_element(e)?;
                    close(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| XmlError::new("unexpected closing tag"))?;
                    close(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(ref e)) => {
                    let text = e.unescape().map_err(|e| XmlError::new(e.to_string()))?;
                    push_text(&mut stack, &normalize_newlines(&text))?;
                }
                Ok(Event::CData(ref e)) => {
                    let text = e.decode().map_err(|e| XmlError::new(e.to_string()))?;
                    push_text(&mut stack, &normalize_newlines(&text))?;
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XmlError::new(format!("XML parse error: {e}"))),
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(XmlError::new("unclosed element at end of input"));
        }
        let root = root.ok_or_else(|| XmlError::new("document has no root element"))?;
        Ok(Self { declaration, root })
    }

    pub fn to_xml(&self) -> Result<String, XmlError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        if self.declaration {
            writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
                .map_err(xml_io)?;
        }
        write_element(&mut writer, &self.root)?;
        into_string(writer)
    }
}

fn start_element(e: &BytesStart<'_>) -> Result<Element, XmlError> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|e| XmlError::new(e.to_string()))?
        .to_string();
    let mut element = Element::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(|e| XmlError::new(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| XmlError::new(e.to_string()))?
            .to_string();
        let raw = std::str::from_utf8(&attr.value).map_err(|e| XmlError::new(e.to_string()))?;
        let value = unescape(&normalize_attr_whitespace(raw))
            .map_err(|e| XmlError::new(e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn close(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => return Err(XmlError::new("more than one root element")),
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => {
            // Adjacent text and CDATA merge into one node.
            if let Some(Node::Text(prev)) = parent.children.last_mut() {
                prev.push_str(text);
            } else {
                parent.children.push(Node::Text(text.to_string()));
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(XmlError::new("text outside the root element")),
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Literal tab, CR and LF in an attribute value read as a space. Character
/// references are untouched, since they are expanded afterwards.
fn normalize_attr_whitespace(raw: &str) -> Cow<'_, str> {
    if raw.contains(['\t', '\r', '\n']) {
        let raw = raw.replace("\r\n", " ");
        Cow::Owned(raw.replace(['\t', '\r', '\n'], " "))
    } else {
        Cow::Borrowed(raw)
    }
}

fn escape_attr_value(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if escaped.contains(['\t', '\r', '\n']) {
        Cow::Owned(
            escaped
                .replace('\t', "&#9;")
                .replace('\n', "&#10;")
                .replace('\r', "&#13;"),
        )
    } else {
        escaped
    }
}

fn write_element(writer: &mut Writer<Cursor<Vec<u8>>>, element: &Element) -> Result<(), XmlError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (k, v) in &element.attributes {
        start.push_attribute(Attribute {
            key: QName(k.as_bytes()),
            value: Cow::Owned(escape_attr_value(v).into_owned().into_bytes()),
        });
    }
    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(xml_io);
    }
    writer.write_event(Event::Start(start)).map_err(xml_io)?;
    for child in &element.children {
        match child {
            Node::Element(e) => write_element(writer, e)?,
            Node::Text(t) => writer
                .write_event(Event::Text(BytesText::from_escaped(partial_escape(t.as_str()))))
                .map_err(xml_io)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(xml_io)
}

fn xml_io(e: std::io::Error) -> XmlError {
    XmlError::new(format!("XML write error: {e}"))
}

fn into_string(writer: Writer<Cursor<Vec<u8>>>) -> Result<String, XmlError> {
    let buf = writer.into_inner().into_inner();
    String::from_utf8(buf).map_err(|e| XmlError::new(format!("XML UTF-8 error: {e}")))
}
