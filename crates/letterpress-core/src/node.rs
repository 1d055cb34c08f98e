//! Markup node tree.
//!
//! Renderers build documents out of [`Node`] values and serialize them once at
//! the end. Text is escaped on output; [`Node::Raw`] is written verbatim and is
//! reserved for trusted fragments such as entities.

use std::fmt::{self, Write};

use crate::css::Declarations;

/// Void (self-closing) HTML elements
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// An element with attributes, inline style and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name (lowercase)
    pub tag: String,

    /// Attributes in insertion order, excluding `style`
    pub attributes: Vec<(String, String)>,

    /// Inline style, written as the last attribute when non-empty
    pub style: Declarations,

    /// Child nodes
    pub children: Vec<Node>,
}

/// A markup node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on output
    Text(String),
    /// Pre-escaped markup written as-is
    Raw(String),
    /// A sequence of nodes without a wrapping element
    Fragment(Vec<Node>),
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element {
            tag: tag_name.to_lowercase(),
            attributes: Vec::new(),
            style: Declarations::new(),
            children: Vec::new(),
        })
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        attrs
            .into_iter()
            .fold(Self::element(tag_name), |node, (name, value)| {
                node.with_attr(name, value)
            })
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Create a raw markup node
    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    /// Create a fragment from a list of nodes
    pub fn fragment(children: Vec<Node>) -> Self {
        Node::Fragment(children)
    }

    /// Set an attribute, replacing an existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let Node::Element(element) = self else {
            return;
        };
        if let Some(existing) = element
            .attributes
            .iter_mut()
            .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
        {
            existing.1 = value.to_string();
        } else {
            element.attributes.push((name.to_string(), value.to_string()));
        }
    }

    /// Builder form of [`set_attr`](Self::set_attr)
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Replace the inline style of an element
    pub fn with_style(mut self, style: Declarations) -> Self {
        if let Node::Element(element) = &mut self {
            element.style = style;
        }
        self
    }

    /// Add a child node. Fragments accept children too.
    pub fn add_child(&mut self, child: Node) {
        match self {
            Node::Element(element) => element.children.push(child),
            Node::Fragment(children) => children.push(child),
            Node::Text(_) | Node::Raw(_) => {}
        }
    }

    /// Builder form of [`add_child`](Self::add_child)
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Append every node of an iterator as a child
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        for child in children {
            self.add_child(child);
        }
        self
    }

    /// Serialize this node as HTML into `out`
    pub fn write_html<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Node::Text(text) => out.write_str(&escape_html(text)),
            Node::Raw(markup) => out.write_str(markup),
            Node::Fragment(children) => {
                for child in children {
                    child.write_html(out)?;
                }
                Ok(())
            }
            Node::Element(element) => {
                out.write_char('<')?;
                out.write_str(&element.tag)?;
                for (name, value) in &element.attributes {
                    write!(out, " {}=\"{}\"", name, escape_html_attr(value))?;
                }
                if !element.style.is_empty() {
                    write!(out, " style=\"{}\"", escape_html_attr(&element.style.to_css()))?;
                }
                out.write_char('>')?;

                if is_void_element(&element.tag) {
                    return Ok(());
                }

                for child in &element.children {
                    child.write_html(out)?;
                }
                write!(out, "</{}>", element.tag)
            }
        }
    }

}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f)
    }
}

/// Check if a tag is a void element
fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Escape text content
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape HTML attribute value
pub fn escape_html_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tag_is_lowercased() {
        assert_eq!(Node::element("TD").to_string(), "<td></td>");
    }

    #[test]
    fn test_set_attr_replaces_case_insensitively() {
        let mut node = Node::element_with_attrs("td", vec![("align", "left"), ("width", "50%")]);
        node.set_attr("ALIGN", "center");
        assert_eq!(node.to_string(), "<td align=\"center\" width=\"50%\"></td>");
    }

    #[test]
    fn test_style_is_written_last() {
        let a = Node::element("a")
            .with_style(Declarations::new().set("color", "#333333"))
            .with_attr("href", "https://example.com?a=1&b=2")
            .with_child(Node::text("Tom & Jerry"));

        assert_eq!(
            a.to_string(),
            "<a href=\"https://example.com?a=1&amp;b=2\" style=\"color:#333333\">Tom &amp; Jerry</a>"
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let row = Node::element("td")
            .with_child(Node::element("hr").with_child(Node::text("ignored")))
            .with_child(Node::element("br"));
        assert_eq!(row.to_string(), "<td><hr><br></td>");
    }

    #[test]
    fn test_fragment_has_no_wrapper() {
        let mut fragment = Node::fragment(vec![Node::text("<a>")]);
        fragment.add_child(Node::raw("&nbsp;"));
        assert_eq!(fragment.to_string(), "&lt;a&gt;&nbsp;");
    }

    #[test]
    fn test_text_and_raw_ignore_children() {
        let text = Node::text("plain").with_children(vec![Node::text("dropped")]);
        assert_eq!(text.to_string(), "plain");
    }

    #[test]
    fn test_attribute_escaping() {
        assert_eq!(escape_html_attr("a\"<b>&"), "a&quot;&lt;b&gt;&amp;");
        assert_eq!(escape_html("\"quoted\" <tag>"), "\"quoted\" &lt;tag&gt;");
    }
}
