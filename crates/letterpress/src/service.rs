//! NewsletterRenderer - the main entry point for newsletter rendering.

use letterpress_core::{CoreError, Node};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use crate::layout::{document, section_block};
use crate::model::{Newsletter, Section, SectionKind, TemplateId};
use crate::rules::{RenderContext, Rule, Rules};
use crate::style::resolve;
use crate::template::TemplateConstants;
use crate::Result;

/// Markup returned in place of a document that failed to render
pub const DEFAULT_PLACEHOLDER: &str =
    r#"<div style="padding: 20px; text-align: center;">Preview unavailable</div>"#;

/// Options for NewsletterRenderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Markup returned when rendering fails
    pub placeholder: String,

    /// Value of the `lang` attribute on `<html>`
    pub lang: String,

    /// Emit `<!DOCTYPE html>` before the document
    pub doctype: bool,

    /// Maximum document width in pixels
    pub container_width: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            lang: "en".to_string(),
            doctype: true,
            container_width: 600,
        }
    }
}

/// Renders newsletters under any of the three templates.
///
/// Holds only configuration and rules, so a single renderer can be shared
/// between threads.
#[derive(Debug, Default)]
pub struct NewsletterRenderer {
    options: RenderOptions,
    rules: Rules,
}

impl NewsletterRenderer {
    /// Create a new NewsletterRenderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a NewsletterRenderer with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Replace the rule for one section kind
    pub fn add_rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.add(rule);
        self
    }

    /// Drop a custom rule, falling back to the built-in one
    pub fn reset_rule(&mut self, kind: SectionKind) -> &mut Self {
        self.rules.reset(kind);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Render `newsletter` under the template with the given numeric id.
    ///
    /// Never fails: any error is logged and the configured placeholder is
    /// returned instead.
    pub fn render(&self, newsletter: &Newsletter, template_id: u8) -> String {
        let result = TemplateId::try_from(template_id)
            .and_then(|template| self.try_render(newsletter, template));

        match result {
            Ok(html) => html,
            Err(err) => {
                error!(
                    newsletter = %newsletter.id,
                    template_id,
                    error = %err,
                    "rendering failed, using placeholder"
                );
                self.options.placeholder.clone()
            }
        }
    }

    /// Render under the newsletter's own template
    pub fn render_newsletter(&self, newsletter: &Newsletter) -> String {
        self.render(newsletter, newsletter.template_id.as_u8())
    }

    /// Render one preview per template, in template id order
    pub fn render_all(&self, newsletter: &Newsletter) -> Vec<(TemplateId, String)> {
        TemplateId::ALL
            .into_iter()
            .map(|template| (template, self.render(newsletter, template.as_u8())))
            .collect()
    }

    /// Render `newsletter` under `template`, reporting failures
    #[instrument(skip_all, fields(newsletter = %newsletter.id, template = %template))]
    pub fn try_render(&self, newsletter: &Newsletter, template: TemplateId) -> Result<String> {
        let constants = template.constants();

        let mut blocks = Vec::with_capacity(newsletter.sections.len());
        for section in newsletter.sorted_sections() {
            if let Some(block) = self.render_section(section, constants)? {
                blocks.push(block);
            }
        }
        debug!(rendered = blocks.len(), total = newsletter.sections.len(), "sections rendered");

        let page = document(&newsletter.subject, constants, &self.options, blocks);

        let mut html = String::new();
        page.write_html(&mut html).map_err(CoreError::from)?;
        Ok(html)
    }

    /// Render one section wrapped in its spacing scaffold.
    ///
    /// `Ok(None)` for sections that produce nothing: unknown types, images
    /// without a URL, social sections without links.
    pub fn render_section(
        &self,
        section: &Section,
        template: &TemplateConstants,
    ) -> Result<Option<Node>> {
        let Some(kind) = section.kind() else {
            warn!(id = %section.id, kind = section.content.type_name(), "skipping unknown section");
            return Ok(None);
        };
        let Some(rule) = self.rules.for_kind(kind) else {
            warn!(id = %section.id, %kind, "no rule for section");
            return Ok(None);
        };

        let style = resolve(&section.styling, template);
        let ctx = RenderContext {
            template,
            container_width: self.options.container_width,
        };

        match rule.apply(&section.content, &style, &ctx)? {
            Some(content) => {
                debug!(id = %section.id, %kind, order = section.order, "rendered section");
                Ok(Some(section_block(content, &style)))
            }
            None => {
                debug!(id = %section.id, %kind, "section rendered nothing");
                Ok(None)
            }
        }
    }
}
