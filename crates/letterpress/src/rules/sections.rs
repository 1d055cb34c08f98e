//! Built-in section rules.
//!
//! One rule per section kind; template differences come from the
//! [`TemplateConstants`](crate::template::TemplateConstants) in the render
//! context. A rule handed content of another kind renders nothing.

use letterpress_core::{markdown_to_markup, to_markup, Block, Declarations, Node, TextStyle};

use super::Rule;
use crate::layout::presentation_table;
use crate::model::{BodyContent, SectionContent, SectionKind};

/// Platforms in display order: label and icon
const SOCIAL_PLATFORMS: [(&str, &str); 3] =
    [("Facebook", "📘"), ("Twitter", "🐦"), ("Instagram", "📸")];

const DIVIDER_COLOR: &str = "#e5e5e5";

/// Create all built-in section rules
pub fn section_rules() -> Vec<Rule> {
    vec![
        header_rule(),
        image_rule(),
        body_rule(),
        cta_rule(),
        signup_rule(),
        social_rule(),
        footer_rule(),
    ]
}

fn px(value: u32) -> String {
    format!("{}px", value)
}

fn header_rule() -> Rule {
    Rule::new(SectionKind::Header, |content, style, ctx| {
        let SectionContent::Header(header) = content else {
            return Ok(None);
        };
        let constants = &ctx.template.header;

        let mut title_style = style
            .declarations()
            .set("margin", constants.title_margin)
            .set("font-weight", constants.title_weight);
        if let Some(size) = constants.title_size {
            title_style.insert("font-size", px(size));
        }

        let mut subtitle_style = style
            .declarations()
            .set("margin", "0")
            .set("opacity", constants.subtitle_opacity);
        if let Some(size) = constants.subtitle_size {
            subtitle_style.insert("font-size", px(size));
        }

        Ok(Some(Node::fragment(vec![
            Node::element("h1")
                .with_style(title_style)
                .with_child(Node::text(header.title.as_str())),
            Node::element("p")
                .with_style(subtitle_style)
                .with_child(Node::text(header.subtitle.as_str())),
        ])))
    })
}

fn image_rule() -> Rule {
    Rule::new(SectionKind::Image, |content, style, ctx| {
        let SectionContent::Image(image) = content else {
            return Ok(None);
        };
        if image.url.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(
            Node::element("img")
                .with_attr("src", &image.url)
                .with_attr("alt", &image.alt)
                .with_style(
                    Declarations::new()
                        .set("width", "100%")
                        .set("max-width", px(ctx.container_width))
                        .set("height", "auto")
                        .set("border-radius", px(style.image_radius))
                        .set("display", "block")
                        .set("margin", "0 auto")
                        .set("border", "none")
                        .set("outline", "none")
                        .set("text-decoration", "none"),
                ),
        ))
    })
}

fn body_rule() -> Rule {
    Rule::new(SectionKind::Body, |content, style, _| {
        let SectionContent::Body(body) = content else {
            return Ok(None);
        };
        Ok(Some(body_markup(body, &style.text)))
    })
}

/// Markdown wins over raw HTML; with neither the container stays empty
pub(crate) fn body_markup(body: &BodyContent, style: &TextStyle) -> Node {
    if !body.markdown.trim().is_empty() {
        return markdown_to_markup(&body.markdown, style);
    }
    match body.html.as_deref().filter(|html| !html.trim().is_empty()) {
        Some(html) => html_markup(html, style),
        None => to_markup(&Block::Document(Vec::new()), style),
    }
}

#[cfg(feature = "html")]
fn html_markup(html: &str, style: &TextStyle) -> Node {
    crate::html::restyle_html(html, style)
}

#[cfg(not(feature = "html"))]
fn html_markup(html: &str, style: &TextStyle) -> Node {
    to_markup(&Block::Document(Vec::new()), style).with_child(Node::raw(html))
}

fn cta_rule() -> Rule {
    Rule::new(SectionKind::Cta, |content, style, _| {
        let SectionContent::Cta(cta) = content else {
            return Ok(None);
        };

        let button = Node::element("a")
            .with_attr("href", &cta.url)
            .with_attr("target", "_blank")
            .with_style(
                Declarations::new()
                    .set("background-color", style.button_color.as_str())
                    .set("color", "#ffffff")
                    .set("padding", "16px 32px")
                    .set("font-size", "18px")
                    .set("border", "none")
                    .set("border-radius", px(style.button_radius))
                    .set("display", "inline-block")
                    .set("text-decoration", "none")
                    .set("font-weight", "bold")
                    .set("box-shadow", "0 2px 4px rgba(0, 0, 0, 0.1)"),
            )
            .with_child(Node::text(cta.text.as_str()));

        Ok(Some(
            Node::element("div")
                .with_style(Declarations::new().set("text-align", "center"))
                .with_child(button),
        ))
    })
}

fn signup_rule() -> Rule {
    Rule::new(SectionKind::Signup, |content, style, _| {
        let SectionContent::Signup(signup) = content else {
            return Ok(None);
        };
        let radius = px(style.button_radius);

        let heading = Node::element("h2")
            .with_style(
                style
                    .declarations()
                    .set("font-size", "22px")
                    .set("font-weight", "bold")
                    .set("margin", "0 0 16px 0"),
            )
            .with_child(Node::text(signup.heading.as_str()));

        // Capture of interest only: the field is a styled cell, not a form input
        let field = Node::element("td")
            .with_style(
                Declarations::new()
                    .set("border", "1px solid #cccccc")
                    .set("border-radius", radius.as_str())
                    .set("padding", "12px 16px")
                    .set("background-color", "#ffffff")
                    .set("color", "#999999")
                    .set("font-size", "14px")
                    .set("text-align", "left")
                    .set("width", "260px"),
            )
            .with_child(Node::text(signup.placeholder.as_str()));

        let button = Node::element("td")
            .with_style(Declarations::new().set("padding-left", "8px"))
            .with_child(
                Node::element("span")
                    .with_style(
                        Declarations::new()
                            .set("background-color", style.button_color.as_str())
                            .set("color", "#ffffff")
                            .set("padding", "12px 24px")
                            .set("border-radius", radius.as_str())
                            .set("font-size", "16px")
                            .set("font-weight", "bold")
                            .set("display", "inline-block"),
                    )
                    .with_child(Node::text(signup.button_text.as_str())),
            );

        let form_row = presentation_table()
            .with_attr("width", "auto")
            .with_style(Declarations::new().set("margin", "0 auto"))
            .with_child(
                Node::element("tbody").with_child(
                    Node::element("tr").with_child(field).with_child(button),
                ),
            );

        Ok(Some(Node::fragment(vec![heading, form_row])))
    })
}

fn social_rule() -> Rule {
    Rule::new(SectionKind::Social, |content, style, _| {
        let SectionContent::Social(social) = content else {
            return Ok(None);
        };

        let urls = [&social.facebook, &social.twitter, &social.instagram];
        let links: Vec<Node> = SOCIAL_PLATFORMS
            .iter()
            .zip(urls)
            .filter_map(|((platform, icon), url)| {
                let url = url.as_deref().map(str::trim).filter(|url| !url.is_empty())?;
                Some(
                    Node::element("td")
                        .with_style(Declarations::new().set("padding", "0 8px"))
                        .with_child(
                            Node::element("a")
                                .with_attr("href", url)
                                .with_attr("title", platform)
                                .with_style(
                                    Declarations::new()
                                        .set("display", "inline-block")
                                        .set("padding", "8px")
                                        .set("text-decoration", "none")
                                        .set("font-size", "24px"),
                                )
                                .with_child(Node::text(*icon)),
                        ),
                )
            })
            .collect();

        if links.is_empty() {
            return Ok(None);
        }

        let label = Node::element("p")
            .with_style(
                style
                    .declarations()
                    .set("margin", "0 0 16px 0")
                    .set("font-size", "16px")
                    .set("font-weight", "bold"),
            )
            .with_child(Node::text("Follow Us"));

        let row = presentation_table()
            .with_attr("width", "auto")
            .with_child(
                Node::element("tbody").with_child(Node::element("tr").with_children(links)),
            );

        Ok(Some(
            Node::element("div")
                .with_style(Declarations::new().set("text-align", "center"))
                .with_child(label)
                .with_child(row),
        ))
    })
}

fn footer_rule() -> Rule {
    Rule::new(SectionKind::Footer, |content, style, ctx| {
        let SectionContent::Footer(footer) = content else {
            return Ok(None);
        };
        let constants = &ctx.template.footer;
        let muted = constants.text_color.unwrap_or(style.text.color.as_str());

        let mut nodes = vec![
            Node::element("hr").with_style(
                Declarations::new()
                    .set("width", "100%")
                    .set("border", "none")
                    .set("border-top", format!("1px solid {}", DIVIDER_COLOR))
                    .set("margin", constants.divider_margin),
            ),
            Node::element("p")
                .with_style(
                    style
                        .declarations()
                        .set("font-size", "14px")
                        .set("margin", "0 0 16px 0")
                        .set("color", muted),
                )
                .with_child(Node::text(footer.copyright.as_str())),
        ];

        if !footer.links.is_empty() {
            let last = footer.links.len() - 1;
            let mut row =
                Node::element("div").with_style(style.declarations().set("font-size", "14px"));

            for (i, link) in footer.links.iter().enumerate() {
                row.add_child(
                    Node::element("a")
                        .with_attr("href", &link.url)
                        .with_style(
                            Declarations::new()
                                .set("color", muted)
                                .set("text-decoration", "underline"),
                        )
                        .with_child(Node::text(link.text.as_str())),
                );
                if i < last {
                    let mut separator = Declarations::new().set("margin", "0 8px");
                    if let Some(color) = constants.separator_color {
                        separator.insert("color", color);
                    }
                    row.add_child(
                        Node::element("span")
                            .with_style(separator)
                            .with_child(Node::text("|")),
                    );
                }
            }
            nodes.push(row);
        }

        Ok(Some(Node::fragment(nodes)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Alignment, CtaContent, FooterContent, FooterLink, HeaderContent, ImageContent,
        SectionStyling, SignupContent, SocialContent, TemplateId,
    };
    use crate::rules::RenderContext;
    use crate::style::resolve;
    use crate::template::{CLASSIC, SIMPLE};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(content: SectionContent, template: TemplateId) -> Option<String> {
        render_styled(content, template, &SectionStyling::default())
    }

    fn render_styled(
        content: SectionContent,
        template: TemplateId,
        styling: &SectionStyling,
    ) -> Option<String> {
        let constants = template.constants();
        let kind = content.kind().unwrap_or(SectionKind::Body);
        let rules = section_rules();
        let rule = rules.iter().find(|rule| rule.kind == kind)?;
        let style = resolve(styling, constants);
        let ctx = RenderContext {
            template: constants,
            container_width: 600,
        };
        rule.apply(&content, &style, &ctx).unwrap().map(|node| node.to_string())
    }

    fn header() -> SectionContent {
        SectionContent::Header(HeaderContent {
            title: "Weekly".to_string(),
            subtitle: "News".to_string(),
        })
    }

    #[test]
    fn test_header_classic() {
        let html = render(header(), TemplateId::Classic).unwrap();
        assert_eq!(
            html,
            concat!(
                "<h1 style=\"color:#333333;background-color:#ffffff;font-size:16px;text-align:center;margin:0 0 0 0;font-weight:bold\">Weekly</h1>",
                "<p style=\"color:#333333;background-color:#ffffff;font-size:16px;text-align:center;margin:0;opacity:0.8\">News</p>"
            )
        );
    }

    #[test]
    fn test_header_simple_constants() {
        let html = render(header(), TemplateId::Simple).unwrap();
        assert!(html.contains("font-size:32px;text-align:center;margin:0 0 8px 0;font-weight:normal"));
        assert!(html.contains("opacity:0.7"));
    }

    #[test]
    fn test_image_empty_url_renders_nothing() {
        let content = SectionContent::Image(ImageContent {
            url: "  ".to_string(),
            alt: "x".to_string(),
        });
        assert_eq!(render(content, TemplateId::Classic), None);
    }

    #[test]
    fn test_image_radius_and_width() {
        let content = SectionContent::Image(ImageContent {
            url: "https://example.com/a.png".to_string(),
            alt: "Hero".to_string(),
        });
        let html = render(content, TemplateId::Marketing).unwrap();
        assert!(html.starts_with("<img src=\"https://example.com/a.png\" alt=\"Hero\""));
        assert!(html.contains("max-width:600px"));
        assert!(html.contains("border-radius:8px"));
    }

    #[test]
    fn test_cta_uses_button_style() {
        let content = SectionContent::Cta(CtaContent {
            text: "Read More".to_string(),
            url: "https://example.com/blog".to_string(),
        });
        let html = render(content, TemplateId::Simple).unwrap();
        assert!(html.contains("href=\"https://example.com/blog\""));
        assert!(html.contains("background-color:#007bff"));
        assert!(html.contains("border-radius:6px"));
        assert!(html.contains(">Read More</a>"));
    }

    #[test]
    fn test_cta_is_centered_regardless_of_alignment() {
        let content = SectionContent::Cta(CtaContent {
            text: "Go".to_string(),
            url: "https://example.com".to_string(),
        });
        let styling = SectionStyling {
            alignment: Some(Alignment::Left),
            ..Default::default()
        };
        let html = render_styled(content, TemplateId::Simple, &styling).unwrap();
        assert!(html.starts_with("<div style=\"text-align:center\"><a "));
        assert!(!html.contains("text-align:left"));
    }

    #[test]
    fn test_signup_has_no_form() {
        let content = SectionContent::Signup(SignupContent {
            heading: "Join".to_string(),
            placeholder: "Enter your email".to_string(),
            button_text: "Subscribe".to_string(),
        });
        let html = render(content, TemplateId::Marketing).unwrap();
        assert!(html.contains(">Join</h2>"));
        assert!(html.contains(">Enter your email</td>"));
        assert!(html.contains(">Subscribe</span>"));
        assert!(!html.contains("<form"));
        assert!(!html.contains("<input"));
    }

    #[test]
    fn test_social_filters_empty_urls() {
        let content = SectionContent::Social(SocialContent {
            facebook: Some(String::new()),
            twitter: Some("https://twitter.com/x".to_string()),
            instagram: None,
        });
        let html = render(content, TemplateId::Simple).unwrap();
        assert!(html.contains("Follow Us"));
        assert!(html.contains("title=\"Twitter\""));
        assert!(!html.contains("Facebook"));
        assert!(!html.contains("Instagram"));
    }

    #[test]
    fn test_social_without_links_renders_nothing() {
        let content = SectionContent::Social(SocialContent {
            facebook: Some(String::new()),
            twitter: Some(String::new()),
            instagram: Some(String::new()),
        });
        assert_eq!(render(content, TemplateId::Simple), None);
    }

    #[test]
    fn test_footer_links_are_pipe_separated() {
        let content = SectionContent::Footer(FooterContent {
            copyright: "© 2024".to_string(),
            links: vec![
                FooterLink {
                    text: "Privacy".to_string(),
                    url: "https://example.com/privacy".to_string(),
                },
                FooterLink {
                    text: "Unsubscribe".to_string(),
                    url: "https://example.com/unsubscribe".to_string(),
                },
            ],
        });
        let html = render(content, TemplateId::Simple).unwrap();
        assert!(html.starts_with("<hr style=\"width:100%;border:none;border-top:1px solid #e5e5e5;margin:0 0 24px 0\">"));
        assert_eq!(html.matches(">|</span>").count(), 1);
        assert!(html.contains("<span style=\"margin:0 8px;color:#666\">|</span>"));
        assert!(html.contains("color:#666;text-decoration:underline"));
    }

    #[test]
    fn test_footer_without_links_has_no_row() {
        let content = SectionContent::Footer(FooterContent {
            copyright: "© 2024".to_string(),
            links: vec![],
        });
        let html = render(content, TemplateId::Classic).unwrap();
        assert!(html.contains("<hr"));
        assert!(html.contains(">© 2024</p>"));
        assert!(!html.contains("<div"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_body_prefers_markdown() {
        let body = BodyContent {
            markdown: "**md**".to_string(),
            html: Some("<p>html</p>".to_string()),
        };
        let html = body_markup(&body, &TextStyle::default()).to_string();
        assert!(html.contains("<strong>md</strong>"));
        assert!(!html.contains("html"));
    }

    #[test]
    fn test_body_without_source_is_empty_container() {
        let html = body_markup(&BodyContent::default(), &TextStyle::default()).to_string();
        assert_eq!(html, "<div style=\"word-wrap:break-word\"></div>");
    }

    #[test]
    fn test_mismatched_content_renders_nothing() {
        let rules = section_rules();
        let rule = rules.iter().find(|rule| rule.kind == SectionKind::Footer);
        let style = resolve(&SectionStyling::default(), &CLASSIC);
        let ctx = RenderContext {
            template: &SIMPLE,
            container_width: 600,
        };
        let unknown = SectionContent::Unknown {
            kind: "footer".to_string(),
            content: json!("oops"),
        };
        let rendered = rule.map(|rule| rule.apply(&unknown, &style, &ctx));
        assert!(matches!(rendered, Some(Ok(None))));
    }
}
