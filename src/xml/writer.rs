use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::{Cursor, Write};

use super::XmlError;

fn xml_io(e: std::io::Error) -> XmlError {
    XmlError::new(format!("XML write error: {e}"))
}

/// Compact streaming writer for request bodies.
///
/// Output has no indentation: whitespace inside signed elements would be
/// digested.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(Cursor::new(Vec::new())),
        }
    }

    /// Start with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub fn with_declaration() -> Result<Self, XmlError> {
        let mut w = Self::new();
        w.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(w)
    }

    pub fn into_string(self) -> Result<String, XmlError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| XmlError::new(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, XmlError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, XmlError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, XmlError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, XmlError> {
        self.start_element(name)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Write `text_element` only when `text` is present.
    pub fn optional_element(&mut self, name: &str, text: Option<&str>) -> Result<&mut Self, XmlError> {
        if let Some(text) = text {
            self.text_element(name, text)?;
        }
        Ok(self)
    }

    /// Append an already serialized fragment verbatim.
    pub fn raw(&mut self, fragment: &str) -> Result<&mut Self, XmlError> {
        self.writer
            .get_mut()
            .write_all(fragment.as_bytes())
            .map_err(xml_io)?;
        Ok(self)
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
