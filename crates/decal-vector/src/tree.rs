//! Minimal element tree for vector markup.
//!
//! Drawable conversion only needs tag names, attributes, and structure, so
//! parsing collapses the document to exactly that: namespace prefixes are
//! stripped from names, text content and comments are dropped, attribute
//! order is preserved.

use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, VectorError};

/// One element of a parsed vector document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgElement {
    /// Tag name without its namespace prefix, original case kept
    /// (`linearGradient` stays camel-cased).
    pub name: String,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    /// Attribute lookup by local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Attribute parsed as a number; missing or unparseable geometry
    /// defaults to zero, matching how the path synthesis treats it.
    pub fn attr_or_zero(&self, name: &str) -> f64 {
        self.attr(name)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0.0)
    }
}

/// Parses markup into an element tree rooted at the first `<svg>` element.
///
/// Elements outside the svg root are ignored; a document without an svg
/// root is an error the caller downgrades to a fallback.
pub fn parse_svg(markup: &str) -> Result<SvgElement> {
    let mut reader = Reader::from_str(markup);
    let mut stack: Vec<SvgElement> = Vec::new();
    let mut root: Option<SvgElement> = None;
    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(element_from(&start)?),
            Event::Empty(start) => {
                let element = element_from(&start)?;
                place(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                let element = stack.pop().ok_or(VectorError::Unbalanced)?;
                place(&mut stack, &mut root, element);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    root.ok_or(VectorError::NoSvgRoot)
}

fn place(stack: &mut [SvgElement], root: &mut Option<SvgElement>, element: SvgElement) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() && element.name == "svg" {
        *root = Some(element);
    }
}

fn element_from(start: &BytesStart) -> Result<SvgElement> {
    let name = text_of(start.name().local_name().as_ref());
    let mut attrs = IndexMap::new();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = text_of(attribute.key.local_name().as_ref());
        let raw = String::from_utf8_lossy(&attribute.value).into_owned();
        let value = match quick_xml::escape::unescape(&raw) {
            Ok(text) => text.into_owned(),
            Err(_) => raw,
        };
        attrs.insert(key, value);
    }
    Ok(SvgElement {
        name,
        attrs,
        children: Vec::new(),
    })
}

fn text_of(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_structure() {
        let svg = parse_svg(
            r#"<svg viewBox="0 0 24 24"><g transform="translate(2, 2)"><path d="M 0,0 L 4,4"/></g></svg>"#,
        )
        .unwrap();
        assert_eq!(svg.name, "svg");
        assert_eq!(svg.attr("viewBox"), Some("0 0 24 24"));
        assert_eq!(svg.children.len(), 1);
        let group = &svg.children[0];
        assert_eq!(group.name, "g");
        assert_eq!(group.children[0].attr("d"), Some("M 0,0 L 4,4"));
    }

    #[test]
    fn strips_namespace_prefixes() {
        let svg = parse_svg(
            r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg"><svg:rect width="4" height="4"/></svg:svg>"#,
        )
        .unwrap();
        assert_eq!(svg.name, "svg");
        assert_eq!(svg.children[0].name, "rect");
    }

    #[test]
    fn gradient_names_keep_their_case() {
        let svg = parse_svg(
            r##"<svg><defs><linearGradient id="a"><stop offset="0" stop-color="#fff"/></linearGradient></defs></svg>"##,
        )
        .unwrap();
        assert_eq!(svg.children[0].children[0].name, "linearGradient");
    }

    #[test]
    fn unescapes_attribute_values() {
        let svg = parse_svg(r#"<svg><text fill="a&amp;b"/></svg>"#).unwrap();
        assert_eq!(svg.children[0].attr("fill"), Some("a&b"));
    }

    #[test]
    fn ignores_text_and_comments() {
        let svg = parse_svg("<svg><!-- note --><path d=\"M 0,0\">label</path></svg>").unwrap();
        assert_eq!(svg.children.len(), 1);
        assert!(svg.children[0].children.is_empty());
    }

    #[test]
    fn rejects_markup_without_an_svg_root() {
        assert!(matches!(
            parse_svg("<div><p/></div>"),
            Err(VectorError::NoSvgRoot)
        ));
    }

    #[test]
    fn rejects_malformed_markup() {
        assert!(parse_svg("<svg><path></svg>").is_err());
    }

    #[test]
    fn numeric_attribute_defaults() {
        let svg = parse_svg(r#"<svg><circle cx="12" r="five"/></svg>"#).unwrap();
        let circle = &svg.children[0];
        assert_eq!(circle.attr_or_zero("cx"), 12.0);
        assert_eq!(circle.attr_or_zero("r"), 0.0);
        assert_eq!(circle.attr_or_zero("cy"), 0.0);
    }
}
