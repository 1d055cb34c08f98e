//! In-memory newsletter collection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Newsletter;
use crate::{Error, Result};

/// Saved newsletters plus the one currently open for editing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsletterStore {
    newsletters: Vec<Newsletter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_id: Option<String>,
}

impl NewsletterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by id, touch it and make it current
    pub fn save(&mut self, mut newsletter: Newsletter) -> &Newsletter {
        newsletter.touch();
        self.current_id = Some(newsletter.id.clone());

        let index = match self.index_of(&newsletter.id) {
            Some(index) => {
                debug!(id = %newsletter.id, "replacing newsletter");
                self.newsletters[index] = newsletter;
                index
            }
            None => {
                debug!(id = %newsletter.id, "adding newsletter");
                self.newsletters.push(newsletter);
                self.newsletters.len() - 1
            }
        };
        &self.newsletters[index]
    }

    pub fn get(&self, id: &str) -> Option<&Newsletter> {
        self.newsletters.iter().find(|newsletter| newsletter.id == id)
    }

    /// All newsletters in insertion order
    pub fn list(&self) -> &[Newsletter] {
        &self.newsletters
    }

    pub fn len(&self) -> usize {
        self.newsletters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.newsletters.is_empty()
    }

    /// Remove a newsletter, clearing the current pointer if it was open
    pub fn delete(&mut self, id: &str) -> Result<Newsletter> {
        let index = self
            .index_of(id)
            .ok_or_else(|| Error::NewsletterNotFound(id.to_string()))?;
        if self.current_id.as_deref() == Some(id) {
            self.current_id = None;
        }
        Ok(self.newsletters.remove(index))
    }

    /// Save a draft copy of a newsletter and return it
    pub fn duplicate(&mut self, id: &str) -> Result<&Newsletter> {
        let copy = self
            .get(id)
            .map(Newsletter::duplicate)
            .ok_or_else(|| Error::NewsletterNotFound(id.to_string()))?;
        Ok(self.save(copy))
    }

    /// Open a stored newsletter, or close the current one with `None`
    pub fn set_current(&mut self, id: Option<&str>) -> Result<()> {
        if let Some(id) = id {
            if self.index_of(id).is_none() {
                return Err(Error::NewsletterNotFound(id.to_string()));
            }
        }
        self.current_id = id.map(str::to_string);
        Ok(())
    }

    pub fn current(&self) -> Option<&Newsletter> {
        self.current_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.newsletters.iter().position(|newsletter| newsletter.id == id)
    }
}
