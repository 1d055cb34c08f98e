//! Newsletter document model.
//!
//! The editing surface owns and mutates these values; the renderer only
//! reads them. On the wire a section keeps `type` and `content` side by side
//! (`{"id", "type", "order", "content", "styling"}`), and a section whose
//! type or content shape is not recognised is kept as
//! [`SectionContent::Unknown`] so it survives a round-trip and renders
//! nothing.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub use letterpress_core::Alignment;

use crate::defaults::create_default_sections;
use crate::{Error, Result};

/// One of the three fixed visual identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TemplateId {
    Classic = 1,
    Marketing = 2,
    Simple = 3,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [
        TemplateId::Classic,
        TemplateId::Marketing,
        TemplateId::Simple,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TemplateId {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(TemplateId::Classic),
            2 => Ok(TemplateId::Marketing),
            3 => Ok(TemplateId::Simple),
            other => Err(Error::UnknownTemplate(other)),
        }
    }
}

impl From<TemplateId> for u8 {
    fn from(id: TemplateId) -> Self {
        id.as_u8()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Draft,
    Scheduled,
}

/// Section content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Header,
    Image,
    Body,
    Cta,
    Signup,
    Social,
    Footer,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Header,
        SectionKind::Image,
        SectionKind::Body,
        SectionKind::Cta,
        SectionKind::Signup,
        SectionKind::Social,
        SectionKind::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Image => "image",
            SectionKind::Body => "body",
            SectionKind::Cta => "cta",
            SectionKind::Signup => "signup",
            SectionKind::Social => "social",
            SectionKind::Footer => "footer",
        }
    }
}

impl FromStr for SectionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownSectionKind(s.to_string()))
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderContent {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageContent {
    pub url: String,
    pub alt: String,
}

/// Freeform text; `markdown` takes precedence over pre-rendered `html`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyContent {
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaContent {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupContent {
    pub heading: String,
    pub placeholder: String,
    pub button_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub copyright: String,
    pub links: Vec<FooterLink>,
}

/// Typed section content, keyed by section type
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Header(HeaderContent),
    Image(ImageContent),
    Body(BodyContent),
    Cta(CtaContent),
    Signup(SignupContent),
    Social(SocialContent),
    Footer(FooterContent),
    /// Unrecognised type, or a known type whose content has the wrong shape
    Unknown { kind: String, content: Value },
}

impl SectionContent {
    /// The section kind, `None` for unknown content
    pub fn kind(&self) -> Option<SectionKind> {
        match self {
            SectionContent::Header(_) => Some(SectionKind::Header),
            SectionContent::Image(_) => Some(SectionKind::Image),
            SectionContent::Body(_) => Some(SectionKind::Body),
            SectionContent::Cta(_) => Some(SectionKind::Cta),
            SectionContent::Signup(_) => Some(SectionKind::Signup),
            SectionContent::Social(_) => Some(SectionKind::Social),
            SectionContent::Footer(_) => Some(SectionKind::Footer),
            SectionContent::Unknown { .. } => None,
        }
    }

    /// The wire `type` name
    pub fn type_name(&self) -> &str {
        match self {
            SectionContent::Unknown { kind, .. } => kind,
            known => known.kind().map_or("unknown", SectionKind::as_str),
        }
    }

    fn from_raw(kind: String, content: Value) -> Self {
        let parsed = match kind.as_str() {
            "header" => Some(serde_json::from_value(content.clone()).map(SectionContent::Header)),
            "image" => Some(serde_json::from_value(content.clone()).map(SectionContent::Image)),
            "body" => Some(serde_json::from_value(content.clone()).map(SectionContent::Body)),
            "cta" => Some(serde_json::from_value(content.clone()).map(SectionContent::Cta)),
            "signup" => Some(serde_json::from_value(content.clone()).map(SectionContent::Signup)),
            "social" => Some(serde_json::from_value(content.clone()).map(SectionContent::Social)),
            "footer" => Some(serde_json::from_value(content.clone()).map(SectionContent::Footer)),
            _ => None,
        };
        match parsed {
            Some(Ok(known)) => known,
            _ => SectionContent::Unknown { kind, content },
        }
    }

    fn to_raw(&self) -> (String, Value) {
        let value = match self {
            SectionContent::Header(c) => serde_json::to_value(c),
            SectionContent::Image(c) => serde_json::to_value(c),
            SectionContent::Body(c) => serde_json::to_value(c),
            SectionContent::Cta(c) => serde_json::to_value(c),
            SectionContent::Signup(c) => serde_json::to_value(c),
            SectionContent::Social(c) => serde_json::to_value(c),
            SectionContent::Footer(c) => serde_json::to_value(c),
            SectionContent::Unknown { content, .. } => Ok(content.clone()),
        };
        (self.type_name().to_string(), value.unwrap_or(Value::Null))
    }
}

/// Font size tier. Unrecognised tiers are kept and resolve to 16px.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontSize {
    Sm,
    Md,
    Lg,
    Other(String),
}

impl FontSize {
    /// Pixel size of the tier
    pub fn px(&self) -> u32 {
        match self {
            FontSize::Sm => 14,
            FontSize::Md => 16,
            FontSize::Lg => 18,
            FontSize::Other(_) => 16,
        }
    }
}

impl From<String> for FontSize {
    fn from(tier: String) -> Self {
        match tier.as_str() {
            "sm" => FontSize::Sm,
            "md" => FontSize::Md,
            "lg" => FontSize::Lg,
            _ => FontSize::Other(tier),
        }
    }
}

impl From<FontSize> for String {
    fn from(size: FontSize) -> Self {
        match size {
            FontSize::Sm => "sm".to_string(),
            FontSize::Md => "md".to_string(),
            FontSize::Lg => "lg".to_string(),
            FontSize::Other(tier) => tier,
        }
    }
}

/// Per-section style overrides. `None` means "template default", which is
/// not the same as an explicit zero.
///
/// Every field is read leniently: a value of the wrong type or out of range
/// (a negative padding, an unknown alignment) is dropped to `None` instead of
/// rejecting the whole newsletter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionStyling {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub button_radius: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub image_radius: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<u32>,
}

/// Deserialize `T`, mapping a value that does not fit to `None`
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// One typed content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSection", into = "RawSection")]
pub struct Section {
    pub id: String,
    pub order: i64,
    pub content: SectionContent,
    pub styling: SectionStyling,
}

impl Section {
    /// Create a section with a fresh id and no style overrides
    pub fn new(content: SectionContent, order: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            order,
            content,
            styling: SectionStyling::default(),
        }
    }

    pub fn with_styling(mut self, styling: SectionStyling) -> Self {
        self.styling = styling;
        self
    }

    pub fn kind(&self) -> Option<SectionKind> {
        self.content.kind()
    }
}

/// Wire shape of a section
#[derive(Serialize, Deserialize)]
struct RawSection {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    order: i64,
    #[serde(default)]
    content: Value,
    #[serde(default, deserialize_with = "lenient")]
    styling: Option<SectionStyling>,
}

impl From<RawSection> for Section {
    fn from(raw: RawSection) -> Self {
        Section {
            id: raw.id,
            order: raw.order,
            content: SectionContent::from_raw(raw.kind, raw.content),
            styling: raw.styling.unwrap_or_default(),
        }
    }
}

impl From<Section> for RawSection {
    fn from(section: Section) -> Self {
        let (kind, content) = section.content.to_raw();
        RawSection {
            id: section.id,
            kind,
            order: section.order,
            content,
            styling: Some(section.styling),
        }
    }
}

/// A model invariant violation reported by [`Newsletter::validate`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("status is scheduled but no scheduled date is set")]
    MissingScheduledDate,

    #[error("a scheduled date is set but status is draft")]
    UnexpectedScheduledDate,

    #[error("section order values {0:?} are not a contiguous 0..n-1 range")]
    NonContiguousOrder(Vec<i64>),

    #[error("duplicate section id {0}")]
    DuplicateSectionId(String),
}

/// A newsletter document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: String,
    pub subject: String,
    pub template_id: TemplateId,
    pub sections: Vec<Section>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Newsletter {
    /// Create a draft populated with the template's default sections
    pub fn new(template: TemplateId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            subject: "New Newsletter".to_string(),
            template_id: template,
            sections: create_default_sections(template),
            status: Status::Draft,
            scheduled_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Schedule for delivery at `at`
    pub fn schedule(&mut self, at: DateTime<Utc>) {
        self.status = Status::Scheduled;
        self.scheduled_date = Some(at);
    }

    /// Return to draft, dropping any scheduled date
    pub fn unschedule(&mut self) {
        self.status = Status::Draft;
        self.scheduled_date = None;
    }

    /// Mark as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// A draft copy with a fresh id and timestamps
    pub fn duplicate(&self) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            subject: format!("{} (Copy)", self.subject),
            status: Status::Draft,
            scheduled_date: None,
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Sections in render order, without touching the stored list
    pub fn sorted_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|section| section.order);
        sections
    }

    /// Every invariant violation, empty when the newsletter is consistent
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        match (self.status, self.scheduled_date) {
            (Status::Scheduled, None) => violations.push(Violation::MissingScheduledDate),
            (Status::Draft, Some(_)) => violations.push(Violation::UnexpectedScheduledDate),
            _ => {}
        }

        let mut orders: Vec<i64> = self.sections.iter().map(|s| s.order).collect();
        orders.sort_unstable();
        if orders.iter().zip(0..).any(|(order, expected)| *order != expected) {
            violations.push(Violation::NonContiguousOrder(orders));
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                violations.push(Violation::DuplicateSectionId(section.id.clone()));
            }
        }

        violations
    }

    pub fn validate(&self) -> Result<()> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(violations))
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_template_id_conversion() {
        assert_eq!(TemplateId::try_from(2).unwrap(), TemplateId::Marketing);
        assert!(matches!(TemplateId::try_from(4), Err(Error::UnknownTemplate(4))));
        assert_eq!(u8::from(TemplateId::Simple), 3);
    }

    #[test]
    fn test_section_kind_from_str() {
        assert_eq!("cta".parse::<SectionKind>().unwrap(), SectionKind::Cta);
        assert!("banner".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_section_wire_shape() {
        let section = Section {
            id: "s1".to_string(),
            order: 2,
            content: SectionContent::Cta(CtaContent {
                text: "Read".to_string(),
                url: "https://example.com".to_string(),
            }),
            styling: SectionStyling {
                padding_top: Some(0),
                ..Default::default()
            },
        };

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "s1",
                "type": "cta",
                "order": 2,
                "content": { "text": "Read", "url": "https://example.com" },
                "styling": { "paddingTop": 0 }
            })
        );

        let back: Section = serde_json::from_value(value).unwrap();
        assert_eq!(back, section);
    }

    #[test]
    fn test_unknown_type_round_trips() {
        let value = json!({
            "id": "x",
            "type": "carousel",
            "order": 0,
            "content": { "slides": [1, 2] },
            "styling": {}
        });
        let section: Section = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(section.kind(), None);
        assert_eq!(section.content.type_name(), "carousel");
        assert_eq!(serde_json::to_value(&section).unwrap(), value);
    }

    #[test]
    fn test_mismatched_content_is_unknown() {
        let section: Section = serde_json::from_value(json!({
            "id": "x",
            "type": "footer",
            "order": 0,
            "content": "not an object"
        }))
        .unwrap();
        assert_eq!(section.kind(), None);
        assert_eq!(section.content.type_name(), "footer");
    }

    #[test]
    fn test_partial_content_uses_defaults() {
        let section: Section = serde_json::from_value(json!({
            "id": "x",
            "type": "body",
            "order": 0,
            "content": { "html": "<p>hi</p>" }
        }))
        .unwrap();
        assert_eq!(
            section.content,
            SectionContent::Body(BodyContent {
                markdown: String::new(),
                html: Some("<p>hi</p>".to_string()),
            })
        );
    }

    #[test]
    fn test_font_size_tiers() {
        let styling: SectionStyling =
            serde_json::from_value(json!({ "fontSize": "xl", "alignment": "right" })).unwrap();
        assert_eq!(styling.font_size, Some(FontSize::Other("xl".to_string())));
        assert_eq!(styling.font_size.as_ref().map(FontSize::px), Some(16));
        assert_eq!(styling.alignment, Some(Alignment::Right));
        assert_eq!(FontSize::from("sm".to_string()).px(), 14);
        assert_eq!(FontSize::from("lg".to_string()).px(), 18);
    }

    #[test]
    fn test_explicit_zero_is_kept() {
        let styling: SectionStyling = serde_json::from_value(json!({ "paddingTop": 0 })).unwrap();
        assert_eq!(styling.padding_top, Some(0));
        assert_eq!(styling.padding_bottom, None);
    }

    #[test]
    fn test_out_of_range_styling_values_are_dropped() {
        let styling: SectionStyling = serde_json::from_value(json!({
            "paddingTop": -5,
            "paddingBottom": 12.5,
            "marginTop": "8",
            "alignment": "justify",
            "textColor": 42,
            "buttonRadius": 6
        }))
        .unwrap();
        assert_eq!(
            styling,
            SectionStyling {
                button_radius: Some(6),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_null_or_malformed_styling_is_default() {
        for styling in [json!(null), json!("bold"), json!([1, 2])] {
            let section: Section = serde_json::from_value(json!({
                "id": "x",
                "type": "header",
                "order": 0,
                "content": { "title": "Hi" },
                "styling": styling
            }))
            .unwrap();
            assert_eq!(section.styling, SectionStyling::default());
            assert_eq!(section.kind(), Some(SectionKind::Header));
        }
    }

    #[test]
    fn test_bad_styling_value_keeps_newsletter_loadable() {
        let mut value = serde_json::to_value(Newsletter::new(TemplateId::Simple)).unwrap();
        value["sections"][0]["styling"] = json!({ "paddingTop": -5, "alignment": "justify" });
        value["sections"][1]["styling"] = json!(null);

        let newsletter = Newsletter::from_json(&value.to_string()).unwrap();
        assert_eq!(newsletter.sections[0].styling, SectionStyling::default());
        assert_eq!(newsletter.sections[1].styling, SectionStyling::default());
        assert!(newsletter.validate().is_ok());
    }

    #[test]
    fn test_newsletter_json_round_trip() {
        let mut newsletter = Newsletter::new(TemplateId::Simple).with_subject("Hello");
        newsletter.schedule(Utc::now());

        let json = newsletter.to_json().unwrap();
        assert!(json.contains("\"templateId\": 3"));
        assert!(json.contains("\"scheduledDate\""));

        let back = Newsletter::from_json(&json).unwrap();
        assert_eq!(back, newsletter);
    }

    #[test]
    fn test_invalid_template_id_is_rejected() {
        let mut value = serde_json::to_value(Newsletter::new(TemplateId::Classic)).unwrap();
        value["templateId"] = json!(9);
        assert!(serde_json::from_value::<Newsletter>(value).is_err());
    }

    #[test]
    fn test_schedule_invariant() {
        let mut newsletter = Newsletter::new(TemplateId::Classic);
        assert!(newsletter.validate().is_ok());

        newsletter.status = Status::Scheduled;
        assert_eq!(newsletter.violations(), vec![Violation::MissingScheduledDate]);

        newsletter.schedule(Utc::now());
        assert!(newsletter.validate().is_ok());

        newsletter.status = Status::Draft;
        assert_eq!(newsletter.violations(), vec![Violation::UnexpectedScheduledDate]);

        newsletter.unschedule();
        assert!(newsletter.violations().is_empty());
    }

    #[test]
    fn test_non_contiguous_order() {
        let mut newsletter = Newsletter::new(TemplateId::Classic);
        newsletter.sections[0].order = 7;
        assert_eq!(
            newsletter.violations(),
            vec![Violation::NonContiguousOrder(vec![1, 2, 3, 7])]
        );
    }

    #[test]
    fn test_duplicate_section_id() {
        let mut newsletter = Newsletter::new(TemplateId::Classic);
        newsletter.sections[1].id = newsletter.sections[0].id.clone();
        assert!(matches!(
            newsletter.violations().as_slice(),
            [Violation::DuplicateSectionId(_)]
        ));
    }

    #[test]
    fn test_duplicate() {
        let mut original = Newsletter::new(TemplateId::Marketing).with_subject("Sale");
        original.schedule(Utc::now());

        let copy = original.duplicate();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.subject, "Sale (Copy)");
        assert_eq!(copy.status, Status::Draft);
        assert_eq!(copy.scheduled_date, None);
        assert_eq!(copy.sections, original.sections);
    }

    #[test]
    fn test_sorted_sections_does_not_mutate() {
        let mut newsletter = Newsletter::new(TemplateId::Classic);
        newsletter.sections.reverse();
        let kinds: Vec<_> = newsletter.sorted_sections().iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                Some(SectionKind::Header),
                Some(SectionKind::Image),
                Some(SectionKind::Body),
                Some(SectionKind::Footer),
            ]
        );
        assert_eq!(newsletter.sections[0].kind(), Some(SectionKind::Footer));
    }
}
