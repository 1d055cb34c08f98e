//! Rule type for section rendering.

use letterpress_core::Node;

use crate::model::{SectionContent, SectionKind};
use crate::style::ResolvedStyle;
use crate::template::TemplateConstants;
use crate::Result;

/// What a rule can see besides the section itself
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Constants of the active template
    pub template: &'a TemplateConstants,
    /// Document width in pixels
    pub container_width: u32,
}

/// Type alias for render functions. `Ok(None)` means "render nothing".
pub type RenderFn = Box<
    dyn Fn(&SectionContent, &ResolvedStyle, &RenderContext<'_>) -> Result<Option<Node>>
        + Send
        + Sync,
>;

/// A rule renders every section of one kind
pub struct Rule {
    /// Section kind this rule applies to
    pub kind: SectionKind,
    /// Render function producing the section fragment
    pub render: RenderFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(kind: SectionKind, render: F) -> Self
    where
        F: Fn(&SectionContent, &ResolvedStyle, &RenderContext<'_>) -> Result<Option<Node>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            kind,
            render: Box::new(render),
        }
    }

    /// Apply this rule
    pub fn apply(
        &self,
        content: &SectionContent,
        style: &ResolvedStyle,
        ctx: &RenderContext<'_>,
    ) -> Result<Option<Node>> {
        (self.render)(content, style, ctx)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("kind", &self.kind).finish_non_exhaustive()
    }
}
