//! Markdown AST to markup conversion
//!
//! Every block element inherits the resolved text style; headings, lists
//! and paragraphs add fixed spacing that does not depend on section styling.

use crate::ast::{Block, Inline, ListItem};
use crate::css::Declarations;
use crate::node::Node;
use crate::options::TextStyle;
use crate::parse::parse_markdown;

/// Parse `source` and convert it to a styled container node
pub fn markdown_to_markup(source: &str, style: &TextStyle) -> Node {
    to_markup(&parse_markdown(source), style)
}

/// Convert a block to a container `div` carrying the converted content
pub fn to_markup(block: &Block, style: &TextStyle) -> Node {
    let mut children = Vec::new();
    convert_block(block, style, &mut children);

    Node::element("div")
        .with_style(Declarations::new().set("word-wrap", "break-word"))
        .with_children(children)
}

/// Declarations for a styled block-level tag, or `None` for tags that keep
/// their own styling
pub fn block_declarations(tag: &str, style: &TextStyle) -> Option<Declarations> {
    let base = style.declarations();
    let declarations = match tag {
        "p" => base.set("margin", "0 0 16px 0").set("line-height", "1.6"),
        "h1" => base
            .set("font-size", "24px")
            .set("font-weight", "bold")
            .set("margin", "0 0 16px 0"),
        "h2" => base
            .set("font-size", "20px")
            .set("font-weight", "bold")
            .set("margin", "0 0 12px 0"),
        "h3" => base
            .set("font-size", "18px")
            .set("font-weight", "bold")
            .set("margin", "0 0 8px 0"),
        "li" => base.set("margin", "0 0 4px 0").set("line-height", "1.6"),
        "ul" | "ol" => base.set("margin", "0 0 16px 0").set("padding-left", "20px"),
        "a" => Declarations::new()
            .set("color", style.color.as_str())
            .set("text-decoration", "underline"),
        "hr" => Declarations::new()
            .set("border", "none")
            .set("border-top", "1px solid #e5e5e5")
            .set("margin", "16px 0"),
        _ => return None,
    };
    Some(declarations)
}

fn styled(tag: &str, style: &TextStyle) -> Node {
    let node = Node::element(tag);
    match block_declarations(tag, style) {
        Some(declarations) => node.with_style(declarations),
        None => node,
    }
}

fn convert_block(block: &Block, style: &TextStyle, out: &mut Vec<Node>) {
    if block.is_blank() {
        return;
    }

    match block {
        Block::Document(blocks) => {
            for block in blocks {
                convert_block(block, style, out);
            }
        }

        Block::Heading { level, content } => {
            let tag = match level {
                1 => "h1",
                2 => "h2",
                _ => "h3",
            };
            out.push(styled(tag, style).with_children(convert_inlines(content, style)));
        }

        Block::Paragraph(inlines) => {
            out.push(styled("p", style).with_children(convert_inlines(inlines, style)));
        }

        Block::List {
            ordered,
            start,
            items,
        } => out.push(convert_list(*ordered, *start, items, style)),

        Block::ThematicBreak => out.push(styled("hr", style)),
    }
}

fn convert_list(ordered: bool, start: u32, items: &[ListItem], style: &TextStyle) -> Node {
    let mut list = styled(if ordered { "ol" } else { "ul" }, style);
    if ordered && start != 1 {
        list.set_attr("start", &start.to_string());
    }

    list.with_children(
        items
            .iter()
            .filter(|item| !item.is_blank())
            .map(|item| styled("li", style).with_children(convert_inlines(&item.content, style))),
    )
}

fn convert_inlines(inlines: &[Inline], style: &TextStyle) -> Vec<Node> {
    inlines
        .iter()
        .map(|inline| convert_inline(inline, style))
        .collect()
}

fn convert_inline(inline: &Inline, style: &TextStyle) -> Node {
    match inline {
        Inline::Text(text) => Node::text(text.as_str()),

        Inline::Strong(content) => {
            Node::element("strong").with_children(convert_inlines(content, style))
        }

        Inline::Emphasis(content) => {
            Node::element("em").with_children(convert_inlines(content, style))
        }

        Inline::Link { content, url } => styled("a", style)
            .with_attr("href", url)
            .with_children(convert_inlines(content, style)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Alignment;
    use pretty_assertions::assert_eq;

    fn html(source: &str) -> String {
        markdown_to_markup(source, &TextStyle::default()).to_string()
    }

    #[test]
    fn test_heading_and_inline_emphasis() {
        let result = html("# Title\n**bold** and *italic*");
        assert_eq!(
            result,
            concat!(
                "<div style=\"word-wrap:break-word\">",
                "<h1 style=\"color:#333333;background-color:#ffffff;font-size:24px;text-align:center;font-weight:bold;margin:0 0 16px 0\">Title</h1>",
                "<p style=\"color:#333333;background-color:#ffffff;font-size:16px;text-align:center;margin:0 0 16px 0;line-height:1.6\">",
                "<strong>bold</strong> and <em>italic</em></p>",
                "</div>"
            )
        );
    }

    #[test]
    fn test_style_is_inherited() {
        let style = TextStyle {
            color: "#ff0000".to_string(),
            background_color: "#000000".to_string(),
            font_size: 18,
            alignment: Alignment::Left,
        };
        let result = markdown_to_markup("- item", &style).to_string();
        assert!(result.contains(concat!(
            "<li style=\"color:#ff0000;background-color:#000000;font-size:18px;",
            "text-align:left;margin:0 0 4px 0;line-height:1.6\">item</li>"
        )));
    }

    #[test]
    fn test_list_spacing_is_fixed() {
        let result = html("1. one\n2. two");
        assert!(result.contains("<ol style=\"color:#333333;background-color:#ffffff;font-size:16px;text-align:center;margin:0 0 16px 0;padding-left:20px\">"));
        assert_eq!(result.matches("<li ").count(), 2);
    }

    #[test]
    fn test_ordered_start_attribute() {
        let result = html("5. five");
        assert!(result.contains("<ol start=\"5\""));
    }

    #[test]
    fn test_link() {
        let result = html("[Learn more](https://example.com/about)");
        assert!(result.contains(
            "<a href=\"https://example.com/about\" style=\"color:#333333;text-decoration:underline\">Learn more</a>"
        ));
    }

    #[test]
    fn test_combined_emphasis_leaves_no_markers() {
        let result = html("***Important*** and *a **b** c*");
        assert!(result.contains(
            "<em><strong>Important</strong></em> and <em>a <strong>b</strong> c</em></p>"
        ));
        assert!(!result.contains('*'));
    }

    #[test]
    fn test_text_is_escaped() {
        let result = html("a <script> & b");
        assert!(result.contains("a &lt;script&gt; &amp; b"));
    }

    #[test]
    fn test_empty_source_is_empty_container() {
        assert_eq!(html(""), "<div style=\"word-wrap:break-word\"></div>");
    }

    #[test]
    fn test_unknown_tag_has_no_declarations() {
        assert!(block_declarations("table", &TextStyle::default()).is_none());
    }
}
