//! Ordered inline CSS declarations.
//!
//! Email clients only reliably honor inline `style` attributes, so every
//! element carries its own declaration list. Setting a property that is
//! already present replaces its value in place, which keeps the output
//! order stable when a base style is refined per element.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

/// An ordered list of `property: value` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(IndexMap<Cow<'static, str>, String>);

impl Declarations {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Parse the value of an authored `style` attribute.
    ///
    /// Malformed entries are skipped. Property names are lowercased so they
    /// line up with the ones this crate emits.
    pub fn parse(css: &str) -> Self {
        let mut declarations = Self::new();
        for entry in split_entries(css) {
            let Some((property, value)) = entry.split_once(':') else {
                continue;
            };
            let (property, value) = (property.trim(), value.trim());
            if property.is_empty() || value.is_empty() {
                continue;
            }
            declarations.insert(property.to_ascii_lowercase(), value);
        }
        declarations
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn set(
        mut self,
        property: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(property, value);
        self
    }

    /// Set a property, replacing an existing value without moving it
    pub fn insert(&mut self, property: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Apply every declaration of `other` on top of this list
    pub fn merge(mut self, other: &Declarations) -> Self {
        for (property, value) in &other.0 {
            self.0.insert(property.clone(), value.clone());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as the value of a `style` attribute
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

/// Split on `;` outside parentheses, so `url(data:...;base64,...)` stays whole
fn split_entries(css: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in css.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => {
                entries.push(&css[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&css[start..]);
    entries
}

impl fmt::Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}:{}", property, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_css_keeps_insertion_order() {
        let css = Declarations::new()
            .set("color", "#333333")
            .set("margin", "0")
            .to_css();
        assert_eq!(css, "color:#333333;margin:0");
    }

    #[test]
    fn test_override_keeps_position() {
        let css = Declarations::new()
            .set("color", "#333333")
            .set("font-size", "16px")
            .set("text-align", "center")
            .set("font-size", "24px")
            .to_css();
        assert_eq!(css, "color:#333333;font-size:24px;text-align:center");
    }

    #[test]
    fn test_merge() {
        let base = Declarations::new().set("color", "red").set("margin", "0");
        let merged = base.merge(&Declarations::new().set("margin", "8px").set("padding", "2px"));
        assert_eq!(merged.to_css(), "color:red;margin:8px;padding:2px");
    }

    #[test]
    fn test_parse_authored_style() {
        let parsed = Declarations::parse(" Color: red ;; broken; margin:0 ;padding: ");
        assert_eq!(parsed.to_css(), "color:red;margin:0");
    }

    #[test]
    fn test_parse_keeps_semicolons_inside_parentheses() {
        let parsed = Declarations::parse("background:url(data:image/png;base64,AA==);color:blue");
        assert_eq!(parsed.to_css(), "background:url(data:image/png;base64,AA==);color:blue");
    }

    #[test]
    fn test_parsed_declarations_override_in_place() {
        let base = Declarations::new()
            .set("color", "#333333")
            .set("margin", "0 0 12px 0");
        let merged = base.merge(&Declarations::parse("margin: 0; font-style: italic"));
        assert_eq!(merged.to_css(), "color:#333333;margin:0;font-style:italic");
    }

    #[test]
    fn test_empty() {
        assert!(Declarations::new().is_empty());
        assert_eq!(Declarations::new().to_css(), "");
    }
}
