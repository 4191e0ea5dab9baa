//! Reaction model <-> entity mapper

use autolib_core::Reaction;

use crate::models::ReactionModel;

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            emoji: model.emoji,
            count: model.count,
        }
    }
}
