//! Named-field lookup over preset text.
//!
//! Mapping code only asks for fields by name through [`FieldSource`], so
//! the lenient text scanner ([`XmpText`]) and the XML reader
//! ([`XmpDocument`](crate::XmpDocument)) are interchangeable.

use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::trace;

/// Something that can look up a preset field by qualified name.
pub trait FieldSource {
    /// The raw text of field `name`, or `None` when absent.
    fn raw_field(&self, name: &str) -> Option<String>;

    /// The numeric value of field `name`.
    ///
    /// Absent, empty, unparseable and non-finite values are all `None`.
    fn numeric_field(&self, name: &str) -> Option<f64> {
        self.raw_field(name).and_then(|raw| parse_number(&raw))
    }
}

/// Parses a trimmed decimal number, rejecting NaN and infinities.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Characters that may appear in a qualified name. A field name only
/// matches an attribute when the character before it is not one of these.
const NAME_BOUNDARY: &str = r"(?:^|[^A-Za-z0-9_:.\-])";

/// Lenient field source scanning raw text with regular expressions.
///
/// For each name three encodings are tried in order:
///
/// 1. attribute: `crs:Exposure2012="1.0"`
/// 2. element text: `<crs:Exposure2012>1.0</crs:Exposure2012>`
/// 3. RDF list: `<crs:ToneCurvePV2012><rdf:Seq><rdf:li>0, 0</rdf:li>...`,
///    returned as the items with inner whitespace removed, space-joined
///
/// Nothing about the surrounding document has to be well-formed.
#[derive(Debug, Clone, Copy)]
pub struct XmpText<'a> {
    text: &'a str,
}

impl<'a> XmpText<'a> {
    /// Wraps preset text.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The wrapped text.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    fn attribute(&self, patterns: &FieldPatterns) -> Option<String> {
        capture(&patterns.attribute, self.text)
    }

    fn element(&self, patterns: &FieldPatterns) -> Option<String> {
        capture(&patterns.element, self.text)
    }

    fn rdf_list(&self, patterns: &FieldPatterns) -> Option<String> {
        let body = capture(&patterns.rdf_list, self.text)?;
        let items: Vec<String> = list_item()?
            .captures_iter(&body)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().split_whitespace().collect::<String>())
            .filter(|s| !s.is_empty())
            .collect();
        (!items.is_empty()).then(|| items.join(" "))
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// The three encodings of one field name, compiled once per process.
#[derive(Debug)]
struct FieldPatterns {
    attribute: Regex,
    element: Regex,
    rdf_list: Regex,
}

impl FieldPatterns {
    fn compile(name: &str) -> Option<Self> {
        let escaped = regex::escape(name);
        Some(Self {
            attribute: Regex::new(&format!(r#"{NAME_BOUNDARY}{escaped}="([^"]+)""#)).ok()?,
            element: Regex::new(&format!(r"<{escaped}>([^<]+)</{escaped}>")).ok()?,
            rdf_list: Regex::new(&format!(
                r"(?s)<{escaped}>\s*<rdf:(?:Seq|Bag|Alt)>(.*?)</rdf:(?:Seq|Bag|Alt)>\s*</{escaped}>"
            ))
            .ok()?,
        })
    }
}

type PatternTable = Mutex<HashMap<String, Arc<FieldPatterns>>>;

/// Compiled patterns for `name`, shared by every [`XmpText`].
///
/// Field names come from the fixed preset vocabulary, so the table stays small.
fn patterns_for(name: &str) -> Option<Arc<FieldPatterns>> {
    static TABLE: OnceLock<PatternTable> = OnceLock::new();
    let table = TABLE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut table = table.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(patterns) = table.get(name) {
        return Some(Arc::clone(patterns));
    }
    let patterns = Arc::new(FieldPatterns::compile(name)?);
    table.insert(name.to_string(), Arc::clone(&patterns));
    Some(patterns)
}

fn list_item() -> Option<&'static Regex> {
    static LIST_ITEM: OnceLock<Option<Regex>> = OnceLock::new();
    LIST_ITEM
        .get_or_init(|| Regex::new(r"<rdf:li>([^<]*)</rdf:li>").ok())
        .as_ref()
}

impl FieldSource for XmpText<'_> {
    fn raw_field(&self, name: &str) -> Option<String> {
        let patterns = patterns_for(name)?;
        self.attribute(&patterns)
            .or_else(|| self.element(&patterns))
            .or_else(|| self.rdf_list(&patterns))
    }

    // An attribute that does not parse falls through to the element form.
    fn numeric_field(&self, name: &str) -> Option<f64> {
        let patterns = patterns_for(name)?;
        let value = self
            .attribute(&patterns)
            .and_then(|raw| parse_number(&raw))
            .or_else(|| self.element(&patterns).and_then(|raw| parse_number(&raw)));
        trace!(field = name, ?value, "numeric field");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_form() {
        let src = XmpText::new(r#"<rdf:Description crs:Exposure2012="+1.25" crs:Contrast2012="-20"/>"#);
        assert_eq!(src.numeric_field("crs:Exposure2012"), Some(1.25));
        assert_eq!(src.numeric_field("crs:Contrast2012"), Some(-20.0));
        assert_eq!(src.numeric_field("crs:Saturation"), None);
    }

    #[test]
    fn element_form() {
        let src = XmpText::new("<crs:Tint> 12 </crs:Tint>");
        assert_eq!(src.numeric_field("crs:Tint"), Some(12.0));
    }

    #[test]
    fn attribute_wins_over_element() {
        let src = XmpText::new(r#"<x crs:Tint="5"/><crs:Tint>9</crs:Tint>"#);
        assert_eq!(src.numeric_field("crs:Tint"), Some(5.0));
        assert_eq!(src.raw_field("crs:Tint").as_deref(), Some("5"));
    }

    #[test]
    fn unparseable_attribute_falls_through() {
        let src = XmpText::new(r#"<x crs:Tint="warm"/><crs:Tint>9</crs:Tint>"#);
        assert_eq!(src.numeric_field("crs:Tint"), Some(9.0));
        let src = XmpText::new(r#"<x crs:Tint="warm"/>"#);
        assert_eq!(src.numeric_field("crs:Tint"), None);
    }

    #[test]
    fn non_finite_is_absent() {
        let src = XmpText::new(r#"crs:Exposure2012="NaN" crs:Contrast2012="inf" crs:Tint="""#);
        assert_eq!(src.numeric_field("crs:Exposure2012"), None);
        assert_eq!(src.numeric_field("crs:Contrast2012"), None);
        assert_eq!(src.numeric_field("crs:Tint"), None);
    }

    #[test]
    fn name_needs_boundary() {
        let src = XmpText::new(r#"crs:LocalContrast2012="40""#);
        assert_eq!(src.numeric_field("crs:Contrast2012"), None);
        assert_eq!(src.numeric_field("crs:LocalContrast2012"), Some(40.0));
    }

    #[test]
    fn names_are_literal() {
        // '.' in a name must not act as a wildcard
        let src = XmpText::new(r#"aXb="1""#);
        assert_eq!(src.numeric_field("a.b"), None);
    }

    #[test]
    fn rdf_list_items() {
        let src = XmpText::new(
            "<crs:ToneCurvePV2012>\n <rdf:Seq>\n  <rdf:li>0, 0</rdf:li>\n  <rdf:li>128, 160</rdf:li>\n  \
             <rdf:li>255, 255</rdf:li>\n </rdf:Seq>\n</crs:ToneCurvePV2012>",
        );
        assert_eq!(
            src.raw_field("crs:ToneCurvePV2012").as_deref(),
            Some("0,0 128,160 255,255")
        );
        assert_eq!(src.numeric_field("crs:ToneCurvePV2012"), None);
    }

    #[test]
    fn patterns_shared_across_documents() {
        let first = patterns_for("crs:Vibrance").unwrap();
        let again = patterns_for("crs:Vibrance").unwrap();
        assert!(Arc::ptr_eq(&first, &again));
        assert!(!Arc::ptr_eq(&first, &patterns_for("crs:Saturation").unwrap()));

        let a = XmpText::new(r#"crs:Vibrance="10""#);
        let b = XmpText::new("<crs:Vibrance>-30</crs:Vibrance>");
        for _ in 0..3 {
            assert_eq!(a.numeric_field("crs:Vibrance"), Some(10.0));
            assert_eq!(b.numeric_field("crs:Vibrance"), Some(-30.0));
        }
    }

    #[test]
    fn parse_number_rules() {
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("1e2"), Some(100.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("12px"), None);
        assert_eq!(parse_number("-infinity"), None);
    }
}
