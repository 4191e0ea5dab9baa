//! Automation entity - a submitted write-up describing a scripted workflow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::StoreError;
use crate::value_objects::AutomationId;

use super::{Link, Reaction};

/// Automation entity
///
/// `id` and `submission_date` are assigned once by the store at creation and
/// never change; `reactions` holds at most one entry per distinct emoji.
/// Serialized as camelCase to match the web front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    pub id: AutomationId,
    pub title: String,
    pub description: String,
    pub student_name: String,
    pub submission_date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub links: Vec<Link>,
    pub setup_instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_code: Option<String>,
    pub reactions: Vec<Reaction>,
}

impl Automation {
    /// Create a freshly submitted Automation: stamps the submission time and
    /// starts with no reactions
    pub fn submitted(id: AutomationId, input: NewAutomation) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            student_name: input.student_name,
            submission_date: Utc::now(),
            tags: input.tags,
            images: input.images,
            links: input.links,
            setup_instructions: input.setup_instructions,
            installation_code: input.installation_code,
            reactions: Vec::new(),
        }
    }

    /// Replace all mutable fields from an update payload, preserving `id`,
    /// `submission_date`, and `reactions`
    pub fn apply(&mut self, input: NewAutomation) {
        self.title = input.title;
        self.description = input.description;
        self.student_name = input.student_name;
        self.tags = input.tags;
        self.images = input.images;
        self.links = input.links;
        self.setup_instructions = input.setup_instructions;
        self.installation_code = input.installation_code;
    }

    /// Check if the automation carries a tag
    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Look up the reaction entry for an emoji
    pub fn reaction(&self, emoji: &str) -> Option<&Reaction> {
        self.reactions.iter().find(|r| r.is_emoji(emoji))
    }

    /// Register one reaction: increments the existing counter for `emoji`,
    /// or inserts a new entry with count 1
    pub fn react(&mut self, emoji: &str) {
        match self.reactions.iter_mut().find(|r| r.is_emoji(emoji)) {
            Some(reaction) => reaction.bump(),
            None => self.reactions.push(Reaction::first(emoji)),
        }
    }
}

/// Creation/update payload: an Automation minus the server-assigned fields
/// (`id`, `submission_date`, `reactions`)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAutomation {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Student name must be 1-100 characters"))]
    pub student_name: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub links: Vec<Link>,

    #[serde(default)]
    pub setup_instructions: String,

    #[serde(default)]
    pub installation_code: Option<String>,
}

impl NewAutomation {
    /// Run the full required-field check, before any write happens.
    ///
    /// On top of the derive rules, whitespace-only values count as empty.
    pub fn validated(&self) -> Result<(), StoreError> {
        self.validate()
            .map_err(|e| StoreError::Validation(e.to_string()))?;

        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("studentName", &self.student_name),
        ] {
            if value.trim().is_empty() {
                return Err(StoreError::Validation(format!(
                    "{field} must not be blank"
                )));
            }
        }

        Ok(())
    }
}
