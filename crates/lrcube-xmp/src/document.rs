//! Strict field source backed by an XML reader.
//!
//! The document is read once; attributes and leaf element text are indexed
//! by qualified name. The first occurrence of a name wins. An element whose
//! value is an `rdf:Seq`/`rdf:Bag`/`rdf:Alt` list is indexed as its items
//! with inner whitespace removed, joined by single spaces, which matches
//! what [`XmpText`](crate::XmpText) returns for the same input.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, warn};

use crate::{FieldSource, XmpError, XmpResult};

/// Parsed preset document.
#[derive(Debug, Clone, Default)]
pub struct XmpDocument {
    fields: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct Frame {
    name: String,
    text: String,
    items: Vec<String>,
    has_children: bool,
}

fn is_container(name: &str) -> bool {
    matches!(name, "rdf:Seq" | "rdf:Bag" | "rdf:Alt")
}

impl XmpDocument {
    /// Parses `text` as XML.
    pub fn parse(text: &str) -> XmpResult<Self> {
        Self::read(text).inspect_err(|e| warn!(error = %e, "preset is not well-formed XML"))
    }

    fn read(text: &str) -> XmpResult<Self> {
        let mut xml = Reader::from_reader(text.as_bytes());
        xml.config_mut().trim_text(true);

        let mut doc = Self::default();
        let mut buf = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            match xml.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    doc.index_attributes(&e);
                    if let Some(parent) = stack.last_mut() {
                        parent.has_children = true;
                    }
                    stack.push(Frame {
                        name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
                        ..Default::default()
                    });
                }
                Ok(Event::Empty(e)) => {
                    doc.index_attributes(&e);
                    if let Some(parent) = stack.last_mut() {
                        parent.has_children = true;
                    }
                }
                Ok(Event::Text(e)) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.text.push_str(&e.decode().unwrap_or_default());
                    }
                }
                Ok(Event::End(_)) => {
                    if let Some(frame) = stack.pop() {
                        doc.close(frame, &mut stack);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(XmpError::Xml {
                        position: xml.buffer_position() as u64,
                        message: e.to_string(),
                    });
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.pop() {
            return Err(XmpError::Unclosed(open.name));
        }
        debug!(fields = doc.fields.len(), "indexed preset document");
        Ok(doc)
    }

    fn index_attributes(&mut self, e: &BytesStart<'_>) {
        for attr in e.attributes().flatten() {
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = String::from_utf8_lossy(&attr.value).to_string();
            self.fields.entry(key).or_insert(value);
        }
    }

    fn close(&mut self, frame: Frame, stack: &mut [Frame]) {
        if frame.name == "rdf:li" {
            let item: String = frame.text.split_whitespace().collect();
            if item.is_empty() {
                return;
            }
            // The list belongs to the nearest element that is not a container.
            if let Some(owner) = stack.iter_mut().rev().find(|f| !is_container(&f.name)) {
                owner.items.push(item);
            }
            return;
        }
        if is_container(&frame.name) {
            return;
        }

        let value = if !frame.items.is_empty() {
            frame.items.join(" ")
        } else if !frame.has_children && !frame.text.trim().is_empty() {
            frame.text.trim().to_string()
        } else {
            return;
        };
        self.fields.entry(frame.name).or_insert(value);
    }

    /// Number of indexed names.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldSource for XmpDocument {
    fn raw_field(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESET: &str = r#"<?xml version="1.0"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""
    xmlns:crs="http://ns.adobe.com/camera-raw-settings/1.0/"
    crs:Exposure2012="+0.50"
    crs:HueAdjustmentRed="-12">
   <crs:Tint>7</crs:Tint>
   <crs:ToneCurvePV2012>
    <rdf:Seq>
     <rdf:li>0, 0</rdf:li>
     <rdf:li>128, 160</rdf:li>
     <rdf:li>255, 255</rdf:li>
    </rdf:Seq>
   </crs:ToneCurvePV2012>
  </rdf:Description>
 </rdf:RDF>
</x:xmpmeta>"#;

    #[test]
    fn indexes_attributes_and_text() {
        let doc = XmpDocument::parse(PRESET).unwrap();
        assert_eq!(doc.numeric_field("crs:Exposure2012"), Some(0.5));
        assert_eq!(doc.numeric_field("crs:HueAdjustmentRed"), Some(-12.0));
        assert_eq!(doc.numeric_field("crs:Tint"), Some(7.0));
        assert_eq!(doc.numeric_field("crs:Contrast2012"), None);
    }

    #[test]
    fn flattens_rdf_lists() {
        let doc = XmpDocument::parse(PRESET).unwrap();
        assert_eq!(
            doc.raw_field("crs:ToneCurvePV2012").as_deref(),
            Some("0,0 128,160 255,255")
        );
        // containers themselves carry no value
        assert_eq!(doc.raw_field("rdf:Description"), None);
    }

    #[test]
    fn agrees_with_lenient_source() {
        let doc = XmpDocument::parse(PRESET).unwrap();
        let text = crate::XmpText::new(PRESET);
        for name in ["crs:Exposure2012", "crs:Tint", "crs:ToneCurvePV2012"] {
            assert_eq!(doc.raw_field(name), text.raw_field(name), "{name}");
        }
    }

    #[test]
    fn rejects_malformed() {
        assert!(matches!(
            XmpDocument::parse("<a><b></a>"),
            Err(XmpError::Xml { .. })
        ));
        assert!(XmpDocument::parse("<a><b>1</b>").is_err());
    }
}
