//! # letterpress
//!
//! Compose newsletters from typed sections and render them to static,
//! email-client-safe HTML.
//!
//! A [`Newsletter`] is an ordered list of [`Section`]s. Rendering sorts the
//! sections by `order`, resolves each section's styling against the chosen
//! template, renders it with the rule for its kind, wraps it in a table-based
//! spacing scaffold and places everything inside the document shell of the
//! template.
//!
//! ## Design
//!
//! - **One renderer per section kind**: the three templates differ only in a
//!   [`TemplateConstants`] table, not in code.
//! - **Never fails at the edge**: [`render`] returns a placeholder instead
//!   of an error; use [`NewsletterRenderer::try_render`] to see the error.
//! - **Pure**: rendering never mutates the newsletter and keeps no state
//!   between calls.
//!
//! ## Example
//!
//! ```rust
//! use letterpress::{render, Newsletter, TemplateId};
//!
//! let newsletter = Newsletter::new(TemplateId::Simple).with_subject("Monthly");
//! let html = render(&newsletter, 3);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("<title>Monthly</title>"));
//! ```
//!
//! ## Custom rules
//!
//! ```rust
//! use letterpress::{Newsletter, NewsletterRenderer, Rule, SectionContent, SectionKind, TemplateId};
//! use letterpress_core::Node;
//!
//! let mut renderer = NewsletterRenderer::new();
//! renderer.add_rule(Rule::new(SectionKind::Cta, |content, _, _| {
//!     let SectionContent::Cta(cta) = content else { return Ok(None) };
//!     Ok(Some(Node::element("a").with_attr("href", &cta.url).with_child(Node::text("Go"))))
//! }));
//!
//! let html = renderer.render(&Newsletter::new(TemplateId::Simple), 3);
//! assert!(html.contains(">Go</a>"));
//! ```

mod defaults;
mod editor;
#[cfg(feature = "html")]
pub mod html;
mod layout;
pub mod model;
mod rules;
mod service;
mod store;
pub mod style;
pub mod template;

use once_cell::sync::Lazy;

pub use defaults::{create_default_sections, default_content, default_styling};
pub use editor::Direction;
pub use model::{
    Alignment, BodyContent, CtaContent, FontSize, FooterContent, FooterLink, HeaderContent,
    ImageContent, Newsletter, Section, SectionContent, SectionKind, SectionStyling,
    SignupContent, SocialContent, Status, TemplateId, Violation,
};
pub use rules::{section_rules, RenderContext, RenderFn, Rule, Rules};
pub use service::{NewsletterRenderer, RenderOptions, DEFAULT_PLACEHOLDER};
pub use store::NewsletterStore;
pub use style::{resolve, Edges, ResolvedStyle};
pub use template::TemplateConstants;

/// Error type for letterpress operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown template id: {0}")]
    UnknownTemplate(u8),

    #[error("Unknown section type: {0}")]
    UnknownSectionKind(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Newsletter not found: {0}")]
    NewsletterNotFound(String),

    #[error("Failed to render {kind} section: {message}")]
    Render { kind: SectionKind, message: String },

    #[error(transparent)]
    Markup(#[from] letterpress_core::CoreError),

    #[error("Invalid newsletter: {}", join(.0))]
    Validation(Vec<Violation>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, Error>;

static DEFAULT_RENDERER: Lazy<NewsletterRenderer> = Lazy::new(NewsletterRenderer::new);

/// Render `newsletter` under the template with numeric id `template_id`
/// using the default options and built-in rules.
///
/// Never fails: an unknown template id or a rendering error yields
/// [`DEFAULT_PLACEHOLDER`].
pub fn render(newsletter: &Newsletter, template_id: u8) -> String {
    DEFAULT_RENDERER.render(newsletter, template_id)
}
