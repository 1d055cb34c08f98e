//! Section editing operations on [`Newsletter`].
//!
//! Every operation leaves `order` equal to list position, so an edited
//! newsletter always satisfies the contiguous-order invariant.

use crate::defaults::{default_content, default_styling};
use crate::model::{Newsletter, Section, SectionKind};
use crate::{Error, Result};

/// Direction for [`Newsletter::move_section`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Newsletter {
    /// Insert a new section of `kind` at the front and return its id
    pub fn add_section(&mut self, kind: SectionKind) -> String {
        let section = Section::new(default_content(kind), 0)
            .with_styling(default_styling(kind, self.template_id));
        let id = section.id.clone();

        self.sections.insert(0, section);
        self.renumber();
        id
    }

    /// Swap a section with its neighbour. Moving past either end is a no-op.
    pub fn move_section(&mut self, id: &str, direction: Direction) -> Result<()> {
        let index = self.position(id)?;
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|&i| i < self.sections.len()),
        };

        if let Some(target) = target {
            self.sections.swap(index, target);
            self.renumber();
        }
        Ok(())
    }

    /// Remove a section and return it
    pub fn remove_section(&mut self, id: &str) -> Result<Section> {
        let index = self.position(id)?;
        let section = self.sections.remove(index);
        self.renumber();
        Ok(section)
    }

    /// Replace the section with the same id, keeping its position
    pub fn update_section(&mut self, section: Section) -> Result<()> {
        let index = self.position(&section.id)?;
        let order = self.sections[index].order;
        self.sections[index] = Section { order, ..section };
        self.touch();
        Ok(())
    }

    /// Look up a section by id
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Set every `order` to the section's list position
    pub fn renumber(&mut self) {
        for (section, order) in self.sections.iter_mut().zip(0..) {
            section.order = order;
        }
        self.touch();
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.sections
            .iter()
            .position(|section| section.id == id)
            .ok_or_else(|| Error::SectionNotFound(id.to_string()))
    }
}
