//! Raw HTML body support.
//!
//! Body sections may carry pre-rendered HTML instead of markdown. The HTML is
//! parsed with scraper and rebuilt as a [`Node`] tree, restyling the same
//! block elements the markdown converter emits.

use letterpress_core::{block_declarations, to_markup, Block, Declarations, Node, TextStyle};
use scraper::{ElementRef, Html, Node as ScraperNode};

/// Elements dropped together with their content
const DROPPED: &[&str] = &["script", "style", "head", "title", "meta", "link"];

/// Parse `html` and return it inside the standard body container, with
/// block elements restyled for `style`.
///
/// ```rust
/// use letterpress::html::restyle_html;
/// use letterpress_core::TextStyle;
///
/// let node = restyle_html("<p>Hi<script>x()</script></p>", &TextStyle::default());
/// let html = node.to_string();
///
/// assert!(html.contains("line-height:1.6\">Hi</p>"));
/// assert!(!html.contains("script"));
/// ```
pub fn restyle_html(html: &str, style: &TextStyle) -> Node {
    let document = Html::parse_fragment(html);
    let container = to_markup(&Block::Document(Vec::new()), style);
    container.with_children(convert_children(document.root_element(), style))
}

fn convert_children(element: ElementRef, style: &TextStyle) -> Vec<Node> {
    let mut nodes = Vec::new();

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => nodes.push(Node::text(&*text.text)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    if let Some(node) = convert_element(child_element, style) {
                        nodes.push(node);
                    }
                }
            }
            _ => {}
        }
    }

    nodes
}

fn convert_element(element: ElementRef, style: &TextStyle) -> Option<Node> {
    let tag = element.value().name();
    if DROPPED.contains(&tag) {
        return None;
    }

    let children = convert_children(element, style);

    // Fragment parsing wraps everything in <html>; unwrap it (and any body)
    if tag == "html" || tag == "body" {
        return Some(Node::fragment(children));
    }

    let mut node = Node::element(tag);
    let mut inline_style = None;
    for (name, value) in element.value().attrs() {
        if name.eq_ignore_ascii_case("style") {
            inline_style = Some(value);
        } else {
            node.set_attr(name, value);
        }
    }

    match (block_declarations(tag, style), inline_style) {
        (Some(declarations), Some(existing)) => {
            // Authored declarations win
            node = node.with_style(declarations.merge(&Declarations::parse(existing)));
        }
        (Some(declarations), None) => node = node.with_style(declarations),
        (None, Some(existing)) => node.set_attr("style", existing),
        (None, None) => {}
    }

    Some(node.with_children(children))
}
