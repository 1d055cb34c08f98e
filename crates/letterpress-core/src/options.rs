//! Text styling applied to converted Markdown

use crate::css::Declarations;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// The `text-align` value
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Fully resolved text style of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    /// Text color
    pub color: String,

    /// Background color
    pub background_color: String,

    /// Font size in pixels
    pub font_size: u32,

    /// Horizontal alignment
    pub alignment: Alignment,
}

impl TextStyle {
    /// Base declarations every styled text element starts from
    pub fn declarations(&self) -> Declarations {
        Declarations::new()
            .set("color", self.color.as_str())
            .set("background-color", self.background_color.as_str())
            .set("font-size", format!("{}px", self.font_size))
            .set("text-align", self.alignment.as_str())
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: "#333333".to_string(),
            background_color: "#ffffff".to_string(),
            font_size: 16,
            alignment: Alignment::Center,
        }
    }
}
