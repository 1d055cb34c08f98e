//! Style resolution.
//!
//! Merges a section's overrides with the active template's defaults into a
//! [`ResolvedStyle`] with no optional fields. Resolution never fails.

use letterpress_core::{Declarations, TextStyle};

use crate::model::SectionStyling;
use crate::template::TemplateConstants;

pub const DEFAULT_TEXT_COLOR: &str = "#333333";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_BUTTON_COLOR: &str = "#007bff";
pub const DEFAULT_BUTTON_RADIUS: u32 = 4;
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Four pixel values in CSS order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Edges {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Shorthand value, e.g. `32px 0px 32px 0px`
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Fully concrete style of one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub text: TextStyle,
    pub button_color: String,
    pub button_radius: u32,
    pub image_radius: u32,
    pub padding: Edges,
    pub margin: Edges,
}

impl ResolvedStyle {
    /// Base text declarations (color, background, size, alignment)
    pub fn declarations(&self) -> Declarations {
        self.text.declarations()
    }
}

/// Resolve `styling` against the template defaults
pub fn resolve(styling: &SectionStyling, template: &TemplateConstants) -> ResolvedStyle {
    let text = TextStyle {
        color: styling
            .text_color
            .clone()
            .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
        background_color: styling
            .background_color
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
        font_size: styling
            .font_size
            .as_ref()
            .map_or(DEFAULT_FONT_SIZE, |size| size.px()),
        alignment: styling.alignment.unwrap_or_default(),
    };

    let defaults = template.padding;
    let padding = Edges {
        top: styling.padding_top.unwrap_or(defaults.top),
        right: styling.padding_right.unwrap_or(defaults.right),
        bottom: styling.padding_bottom.unwrap_or(defaults.bottom),
        left: styling.padding_left.unwrap_or(defaults.left),
    };

    let margin = Edges {
        top: styling.margin_top.unwrap_or(0),
        right: styling.margin_right.unwrap_or(0),
        bottom: styling.margin_bottom.unwrap_or(0),
        left: styling.margin_left.unwrap_or(0),
    };

    ResolvedStyle {
        text,
        button_color: styling
            .button_color
            .clone()
            .unwrap_or_else(|| DEFAULT_BUTTON_COLOR.to_string()),
        button_radius: styling.button_radius.unwrap_or(template.button_radius),
        image_radius: styling.image_radius.unwrap_or(template.image_radius),
        padding,
        margin,
    }
}
