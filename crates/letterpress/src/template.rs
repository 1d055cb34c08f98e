//! Per-template constants.
//!
//! The three templates share one rendering algorithm; everything that makes
//! them look different lives in a [`TemplateConstants`] record.

use crate::model::TemplateId;
use crate::style::{Edges, DEFAULT_BUTTON_RADIUS};

/// Header title/subtitle treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderConstants {
    pub title_weight: &'static str,
    /// `None` inherits the section font size
    pub title_size: Option<u32>,
    pub title_margin: &'static str,
    pub subtitle_opacity: &'static str,
    /// `None` inherits the section font size
    pub subtitle_size: Option<u32>,
}

/// Footer divider and muted text treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterConstants {
    pub divider_margin: &'static str,
    /// `None` uses the section text color
    pub text_color: Option<&'static str>,
    /// `None` leaves the separator color to inheritance
    pub separator_color: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateConstants {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub body_background: &'static str,
    pub container_border: Option<&'static str>,
    pub padding: Edges,
    pub image_radius: u32,
    pub button_radius: u32,
    pub header: HeaderConstants,
    pub footer: FooterConstants,
}

pub static CLASSIC: TemplateConstants = TemplateConstants {
    id: TemplateId::Classic,
    name: "Classic Newsletter",
    description: "Traditional newsletter layout with header, image, content, and footer",
    body_background: "#f5f5f5",
    container_border: None,
    padding: Edges::new(32, 0, 32, 0),
    image_radius: 0,
    button_radius: DEFAULT_BUTTON_RADIUS,
    header: HeaderConstants {
        title_weight: "bold",
        title_size: None,
        title_margin: "0 0 0 0",
        subtitle_opacity: "0.8",
        subtitle_size: None,
    },
    footer: FooterConstants {
        divider_margin: "24px 0",
        text_color: None,
        separator_color: None,
    },
};

pub static MARKETING: TemplateConstants = TemplateConstants {
    id: TemplateId::Marketing,
    name: "Marketing Newsletter",
    description: "Perfect for promotions and marketing campaigns",
    body_background: "#f4f6f8",
    container_border: None,
    padding: Edges::new(32, 24, 32, 24),
    image_radius: 8,
    button_radius: DEFAULT_BUTTON_RADIUS,
    header: HeaderConstants {
        title_weight: "bold",
        title_size: Some(28),
        title_margin: "0 0 8px 0",
        subtitle_opacity: "0.85",
        subtitle_size: None,
    },
    footer: FooterConstants {
        divider_margin: "24px 0",
        text_color: None,
        separator_color: None,
    },
};

pub static SIMPLE: TemplateConstants = TemplateConstants {
    id: TemplateId::Simple,
    name: "Simple Newsletter",
    description: "Clean and minimal design for focused messaging",
    body_background: "#ffffff",
    container_border: Some("1px solid #e5e5e5"),
    padding: Edges::new(24, 24, 24, 24),
    image_radius: 0,
    button_radius: 6,
    header: HeaderConstants {
        title_weight: "normal",
        title_size: Some(32),
        title_margin: "0 0 8px 0",
        subtitle_opacity: "0.7",
        subtitle_size: Some(16),
    },
    footer: FooterConstants {
        divider_margin: "0 0 24px 0",
        text_color: Some("#666"),
        separator_color: Some("#666"),
    },
};

impl TemplateId {
    /// The constants table of this template
    pub fn constants(self) -> &'static TemplateConstants {
        match self {
            TemplateId::Classic => &CLASSIC,
            TemplateId::Marketing => &MARKETING,
            TemplateId::Simple => &SIMPLE,
        }
    }

    pub fn name(self) -> &'static str {
        self.constants().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_ids() {
        for id in TemplateId::ALL {
            assert_eq!(id.constants().id, id);
        }
    }

    #[test]
    fn test_default_paddings() {
        assert_eq!(TemplateId::Classic.constants().padding, Edges::new(32, 0, 32, 0));
        assert_eq!(TemplateId::Simple.constants().padding, Edges::new(24, 24, 24, 24));
    }

    #[test]
    fn test_names() {
        assert_eq!(TemplateId::Classic.name(), "Classic Newsletter");
        assert_eq!(TemplateId::Marketing.name(), "Marketing Newsletter");
        assert_eq!(TemplateId::Simple.name(), "Simple Newsletter");
    }
}
