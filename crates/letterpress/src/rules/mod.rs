//! Rule system for section rendering.

mod rule;
mod sections;

pub use rule::{RenderContext, RenderFn, Rule};
pub use sections::section_rules;

use indexmap::IndexMap;

use crate::model::SectionKind;

/// Collection of rules for rendering
#[derive(Debug)]
pub struct Rules {
    /// Custom rules added by the user (checked first)
    custom_rules: IndexMap<SectionKind, Rule>,
    /// Built-in section rules
    section_rules: Vec<Rule>,
}

impl Rules {
    /// Create a new Rules instance with the built-in section rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            section_rules: section_rules(),
        }
    }

    /// Add a custom rule, replacing any earlier custom rule for the same kind
    pub fn add(&mut self, rule: Rule) {
        self.custom_rules.insert(rule.kind, rule);
    }

    /// Remove the custom rule for a kind, restoring the built-in one
    pub fn reset(&mut self, kind: SectionKind) -> Option<Rule> {
        self.custom_rules.shift_remove(&kind)
    }

    /// Find the rule for a section kind
    pub fn for_kind(&self, kind: SectionKind) -> Option<&Rule> {
        self.custom_rules
            .get(&kind)
            .or_else(|| self.section_rules.iter().find(|rule| rule.kind == kind))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_builtin_rule() {
        let rules = Rules::new();
        for kind in SectionKind::ALL {
            assert_eq!(rules.for_kind(kind).map(|rule| rule.kind), Some(kind));
        }
    }

    #[test]
    fn test_custom_rule_takes_precedence() {
        let mut rules = Rules::new();
        rules.add(Rule::new(SectionKind::Cta, |_, _, _| Ok(None)));
        assert_eq!(rules.custom_rules.len(), 1);

        assert!(rules.reset(SectionKind::Cta).is_some());
        assert!(rules.reset(SectionKind::Cta).is_none());
        assert!(rules.for_kind(SectionKind::Cta).is_some());
    }
}
