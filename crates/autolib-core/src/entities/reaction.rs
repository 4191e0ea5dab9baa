//! Reaction entity - an emoji-keyed approval counter on an automation

use serde::{Deserialize, Serialize};

/// Reaction palette offered by the submission UI. The store itself accepts
/// any emoji string; this list is advisory for view layers.
pub const SUGGESTED_EMOJIS: [&str; 6] = ["👍", "❤️", "🔥", "🎉", "🚀", "💡"];

/// Reaction entity - at most one per distinct emoji per automation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,
    pub count: i32,
}

impl Reaction {
    /// Create a first reaction for an emoji (count starts at 1)
    pub fn first(emoji: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            count: 1,
        }
    }

    /// Check if the reaction is keyed by a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }

    /// Increment the counter by exactly one
    pub fn bump(&mut self) {
        self.count += 1;
    }
}
