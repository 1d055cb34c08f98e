//! Table-based layout scaffolding.
//!
//! Email clients ignore most CSS box layout, so spacing and centring are
//! expressed with presentation tables: margins become spacer rows and
//! padding lives on a single table cell.

use letterpress_core::{Declarations, Node};

use crate::service::RenderOptions;
use crate::style::ResolvedStyle;
use crate::template::TemplateConstants;

/// A full-width layout table with all spacing attributes cleared
pub fn presentation_table() -> Node {
    Node::element_with_attrs(
        "table",
        vec![
            ("role", "presentation"),
            ("width", "100%"),
            ("border", "0"),
            ("cellpadding", "0"),
            ("cellspacing", "0"),
        ],
    )
}

/// Wrap `cell` in `table > tbody > tr`
pub fn single_cell(table: Node, cell: Node) -> Node {
    table.with_child(Node::element("tbody").with_child(Node::element("tr").with_child(cell)))
}

/// An empty row of exactly `height` pixels
pub fn spacer(height: u32) -> Node {
    let px = format!("{}px", height);
    single_cell(
        presentation_table(),
        Node::element("td")
            .with_style(
                Declarations::new()
                    .set("height", px.as_str())
                    .set("line-height", px.as_str())
                    .set("font-size", "1px"),
            )
            .with_child(Node::raw("&nbsp;")),
    )
}

/// Wrap a rendered section in its spacing scaffold: optional top spacer,
/// the padded cell, optional bottom spacer.
pub fn section_block(content: Node, style: &ResolvedStyle) -> Node {
    let mut nodes = Vec::with_capacity(3);

    if style.margin.top > 0 {
        nodes.push(spacer(style.margin.top));
    }

    let background = style.text.background_color.as_str();
    nodes.push(single_cell(
        presentation_table().with_style(
            Declarations::new()
                .set("background-color", background)
                .set("border-collapse", "collapse"),
        ),
        Node::element("td")
            .with_style(
                Declarations::new()
                    .set("padding", style.padding.to_css())
                    .set("background-color", background),
            )
            .with_child(content),
    ));

    if style.margin.bottom > 0 {
        nodes.push(spacer(style.margin.bottom));
    }

    Node::fragment(nodes)
}

/// The full document around the concatenated section blocks
pub fn document(
    subject: &str,
    template: &TemplateConstants,
    options: &RenderOptions,
    sections: Vec<Node>,
) -> Node {
    let head = Node::element("head")
        .with_child(Node::element("meta").with_attr("charset", "UTF-8"))
        .with_child(Node::element_with_attrs(
            "meta",
            vec![
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1.0"),
            ],
        ))
        .with_child(Node::element("title").with_child(Node::text(subject)));

    let width = format!("{}px", options.container_width);
    let mut container_style = Declarations::new()
        .set("max-width", width.as_str())
        .set("margin", "0 auto")
        .set("background-color", "#ffffff");
    if let Some(border) = template.container_border {
        container_style.insert("border", border);
    }

    let container = single_cell(
        presentation_table()
            .with_attr("width", &options.container_width.to_string())
            .with_attr("align", "center")
            .with_style(container_style),
        Node::element("td").with_children(sections),
    );

    let body = Node::element("body")
        .with_style(
            Declarations::new()
                .set("margin", "0")
                .set("padding", "0")
                .set("background-color", template.body_background)
                .set("font-family", "Arial, sans-serif"),
        )
        .with_child(single_cell(
            presentation_table().with_style(
                Declarations::new().set("background-color", template.body_background),
            ),
            Node::element("td")
                .with_attr("align", "center")
                .with_style(Declarations::new().set("padding", "20px 0"))
                .with_child(container),
        ));

    let html = Node::element_with_attrs(
        "html",
        vec![("lang", options.lang.as_str()), ("dir", "ltr")],
    )
    .with_child(head)
    .with_child(body);

    if options.doctype {
        Node::fragment(vec![Node::raw("<!DOCTYPE html>"), html])
    } else {
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionStyling;
    use crate::style::resolve;
    use crate::template::{CLASSIC, SIMPLE};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spacer() {
        assert_eq!(
            spacer(25).to_string(),
            concat!(
                "<table role=\"presentation\" width=\"100%\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\">",
                "<tbody><tr><td style=\"height:25px;line-height:25px;font-size:1px\">&nbsp;</td></tr></tbody>",
                "</table>"
            )
        );
    }

    #[test]
    fn test_section_block_without_margins() {
        let style = resolve(&SectionStyling::default(), &CLASSIC);
        let html = section_block(Node::text("x"), &style).to_string();
        assert_eq!(html.matches("<table").count(), 1);
        assert!(html.contains("<td style=\"padding:32px 0px 32px 0px;background-color:#ffffff\">x</td>"));
    }

    #[test]
    fn test_section_block_with_vertical_margins() {
        let styling = SectionStyling {
            margin_top: Some(25),
            margin_bottom: Some(10),
            margin_left: Some(40),
            ..Default::default()
        };
        let style = resolve(&styling, &CLASSIC);
        let html = section_block(Node::text("x"), &style).to_string();
        assert_eq!(html.matches("<table").count(), 3);
        assert!(html.starts_with("<table role=\"presentation\" width=\"100%\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\"><tbody><tr><td style=\"height:25px"));
        assert!(html.contains("height:10px"));
        assert!(!html.contains("40px"));
    }

    #[test]
    fn test_document_shell() {
        let options = RenderOptions::default();
        let html =
            document("Hello & welcome", &SIMPLE, &options, vec![Node::text("body")]).to_string();
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\" dir=\"ltr\"><head>"));
        assert!(html.contains("<title>Hello &amp; welcome</title>"));
        assert!(html.contains("background-color:#ffffff;font-family:Arial, sans-serif"));
        assert!(html.contains("max-width:600px;margin:0 auto;background-color:#ffffff;border:1px solid #e5e5e5"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_document_without_doctype() {
        let options = RenderOptions {
            doctype: false,
            ..Default::default()
        };
        let html = document("", &CLASSIC, &options, Vec::new()).to_string();
        assert!(html.starts_with("<html"));
        assert!(html.contains("background-color:#f5f5f5"));
        assert!(!html.contains("border:1px"));
    }
}
