//! Starter content.
//!
//! [`create_default_sections`] builds the section list a new newsletter
//! starts from; [`default_content`] and [`default_styling`] seed sections
//! added later in the editor.

use crate::model::{
    Alignment, BodyContent, CtaContent, FontSize, FooterContent, FooterLink, HeaderContent,
    ImageContent, Section, SectionContent, SectionKind, SectionStyling, SignupContent,
    SocialContent, TemplateId,
};

const PLACEHOLDER_IMAGE: &str = "https://media.istockphoto.com/id/1147544807/vector/thumbnail-image-vector-graphic.jpg?s=612x612&w=0&k=20&c=rnCKVbdxqkjlcs3xH87-9gocETqpspHFXu5dIGB4wuM=";

const MUTED_BACKGROUND: &str = "#f8f9fa";

const CLASSIC_BODY: &str = r#"## Welcome to Our Newsletter

Lorem ipsum dolor sit amet, **consectetur adipiscing elit**. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris.

### What's Inside This Issue:

- Important updates from our team
- *Exciting* new features and improvements
- Community highlights and stories
- Upcoming events and announcements

Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. [Learn more about our mission](https://example.com/about) and how we're making a difference.

**Thank you** for being part of our community!"#;

const MARKETING_BODY: &str = r#"# Don't Miss Our Biggest Sale! 🔥

**Limited time offer** - Up to 50% off on selected items!

Lorem ipsum dolor sit amet, consectetur adipiscing elit. Mauris congue lacinia metus, sed cursus libero facilisis eu. Donec auctor blandit quam, ac sollicitudin urna cursus at.

## ✨ Featured Deals:

- **Premium products** at 50% off
- **Free shipping** on orders over $99
- **Exclusive member-only** discounts
- Special bundle offers

### ⏰ Hurry! Sale ends in 3 days.

[Shop now](https://example.com/sale) and save big on your favorite items. Don't let this amazing opportunity slip away!

*Terms and conditions apply. See website for details.*"#;

const SIMPLE_BODY: &str = r#"## Hello there! 👋

Welcome to our **monthly update**. We believe in keeping things simple and focused on what matters most to you.

This month, we're excited to share some important updates and insights that we think you'll find valuable:

### Recent Highlights:

- New feature releases
- Community feedback integration
- Performance improvements
- Upcoming roadmap items

Our team has been working hard to bring you the best content and experiences. We're constantly learning and improving based on your feedback.

*Thank you* for being part of our community. Your support means everything to us.

---

**Stay connected:** Follow us on social media for daily updates and behind-the-scenes content."#;

/// Styling shared by every starter section
fn base_styling() -> SectionStyling {
    SectionStyling {
        text_color: Some("#333333".to_string()),
        background_color: Some("#ffffff".to_string()),
        button_color: Some("#007bff".to_string()),
        font_size: Some(FontSize::Md),
        alignment: Some(Alignment::Center),
        ..Default::default()
    }
}

/// Base styling with vertical padding
fn padded(top: u32, bottom: u32) -> SectionStyling {
    SectionStyling {
        padding_top: Some(top),
        padding_bottom: Some(bottom),
        ..base_styling()
    }
}

/// Base styling with padding on all four sides
fn boxed(top: u32, bottom: u32, horizontal: u32) -> SectionStyling {
    SectionStyling {
        padding_left: Some(horizontal),
        padding_right: Some(horizontal),
        ..padded(top, bottom)
    }
}

fn header(title: &str, subtitle: &str) -> SectionContent {
    SectionContent::Header(HeaderContent {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    })
}

fn image(alt: &str) -> SectionContent {
    SectionContent::Image(ImageContent {
        url: PLACEHOLDER_IMAGE.to_string(),
        alt: alt.to_string(),
    })
}

fn body(markdown: &str) -> SectionContent {
    SectionContent::Body(BodyContent {
        markdown: markdown.to_string(),
        html: None,
    })
}

fn footer(copyright: &str, links: &[(&str, &str)]) -> SectionContent {
    SectionContent::Footer(FooterContent {
        copyright: copyright.to_string(),
        links: links
            .iter()
            .map(|(text, url)| FooterLink {
                text: text.to_string(),
                url: url.to_string(),
            })
            .collect(),
    })
}

/// The starter sections of a new newsletter, `order` numbered `0..n-1`
pub fn create_default_sections(template: TemplateId) -> Vec<Section> {
    let sections = match template {
        TemplateId::Classic => vec![
            (
                header(
                    "Weekly Newsletter",
                    "Stay updated with our latest news and insights",
                ),
                padded(40, 40),
            ),
            (
                image("Newsletter hero image"),
                SectionStyling {
                    image_radius: Some(8),
                    ..boxed(0, 0, 20)
                },
            ),
            (body(CLASSIC_BODY), boxed(40, 0, 20)),
            (
                footer(
                    "© 2024 Your Company. All rights reserved.",
                    &[
                        ("Privacy Policy", "https://example.com/privacy"),
                        ("Unsubscribe", "https://example.com/unsubscribe"),
                    ],
                ),
                padded(0, 20),
            ),
        ],

        TemplateId::Marketing => vec![
            (
                image("Marketing campaign hero image"),
                SectionStyling {
                    image_radius: Some(8),
                    ..padded(20, 0)
                },
            ),
            (
                header(
                    "Exclusive Summer Sale",
                    "Up to 50% off on selected items - Limited time offer!",
                ),
                SectionStyling {
                    margin_top: Some(25),
                    margin_bottom: Some(25),
                    ..padded(0, 0)
                },
            ),
            (body(MARKETING_BODY), boxed(0, 14, 24)),
            (
                SectionContent::Signup(SignupContent {
                    heading: "Get Exclusive Deals First!".to_string(),
                    placeholder: "Enter your email address".to_string(),
                    button_text: "Subscribe & Save".to_string(),
                }),
                SectionStyling {
                    button_radius: Some(4),
                    background_color: Some(MUTED_BACKGROUND.to_string()),
                    ..boxed(30, 30, 24)
                },
            ),
            (
                footer(
                    "© 2024 Your Store. All rights reserved.",
                    &[
                        ("Shop Now", "https://example.com/shop"),
                        ("Contact Us", "https://example.com/contact"),
                        ("Unsubscribe", "https://example.com/unsubscribe"),
                    ],
                ),
                padded(0, 20),
            ),
        ],

        TemplateId::Simple => vec![
            (
                header("Monthly Update", "Simple, focused, and meaningful content"),
                padded(40, 24),
            ),
            (body(SIMPLE_BODY), boxed(20, 30, 24)),
            (
                SectionContent::Cta(CtaContent {
                    text: "Read More".to_string(),
                    url: "https://example.com/blog".to_string(),
                }),
                SectionStyling {
                    button_radius: Some(6),
                    ..padded(30, 30)
                },
            ),
            (
                SectionContent::Social(SocialContent {
                    facebook: Some("https://facebook.com/yourpage".to_string()),
                    twitter: Some("https://twitter.com/youraccount".to_string()),
                    instagram: Some("https://instagram.com/youraccount".to_string()),
                }),
                padded(30, 20),
            ),
            (
                footer(
                    "© 2024 Your Brand. Keep it simple.",
                    &[
                        ("Website", "https://example.com"),
                        ("Unsubscribe", "https://example.com/unsubscribe"),
                    ],
                ),
                SectionStyling {
                    background_color: Some(MUTED_BACKGROUND.to_string()),
                    ..padded(30, 20)
                },
            ),
        ],
    };

    sections
        .into_iter()
        .zip(0..)
        .map(|((content, styling), order)| Section::new(content, order).with_styling(styling))
        .collect()
}

/// Content of a freshly added section
pub fn default_content(kind: SectionKind) -> SectionContent {
    match kind {
        SectionKind::Header => header("New Header", "Add your subtitle here"),
        SectionKind::Image => image("Placeholder image"),
        SectionKind::Body => body("Add your content here..."),
        SectionKind::Cta => SectionContent::Cta(CtaContent {
            text: "Click Here".to_string(),
            url: "https://example.com".to_string(),
        }),
        SectionKind::Signup => SectionContent::Signup(SignupContent {
            heading: "Subscribe to our newsletter".to_string(),
            placeholder: "Enter your email".to_string(),
            button_text: "Subscribe".to_string(),
        }),
        SectionKind::Social => SectionContent::Social(SocialContent {
            facebook: Some(String::new()),
            twitter: Some(String::new()),
            instagram: Some(String::new()),
        }),
        SectionKind::Footer => footer("© 2024 Your Company", &[]),
    }
}

/// Styling of a freshly added section under `template`
pub fn default_styling(kind: SectionKind, template: TemplateId) -> SectionStyling {
    let vertical = if template == TemplateId::Simple { 24 } else { 32 };
    let horizontal = if template == TemplateId::Classic { 0 } else { 24 };

    let base = SectionStyling {
        text_color: Some("#333333".to_string()),
        background_color: Some("#ffffff".to_string()),
        font_size: Some(FontSize::Md),
        alignment: Some(Alignment::Center),
        padding_top: Some(vertical),
        padding_right: Some(horizontal),
        padding_bottom: Some(vertical),
        padding_left: Some(horizontal),
        margin_top: Some(0),
        margin_bottom: Some(0),
        ..Default::default()
    };

    match kind {
        SectionKind::Signup => SectionStyling {
            background_color: Some(MUTED_BACKGROUND.to_string()),
            button_color: Some("#007bff".to_string()),
            button_radius: Some(4),
            ..base
        },
        SectionKind::Footer if template == TemplateId::Simple => SectionStyling {
            background_color: Some(MUTED_BACKGROUND.to_string()),
            ..base
        },
        SectionKind::Cta => SectionStyling {
            button_color: Some("#007bff".to_string()),
            button_radius: Some(6),
            ..base
        },
        _ => base,
    }
}
