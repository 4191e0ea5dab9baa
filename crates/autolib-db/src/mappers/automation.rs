//! Automation assembly - join parent rows with their child rows

use std::collections::HashMap;

use autolib_core::{Automation, AutomationId, Link, Reaction};

use crate::models::{AutomationModel, LinkModel, ReactionModel};

/// Build one Automation from its parent row and already-filtered child rows
pub fn assemble(
    model: AutomationModel,
    links: Vec<Link>,
    reactions: Vec<Reaction>,
) -> Automation {
    Automation {
        id: AutomationId::new(model.id),
        title: model.title,
        description: model.description,
        student_name: model.student_name,
        submission_date: model.submission_date,
        tags: model.tags,
        images: model.images,
        links,
        setup_instructions: model.setup_instructions,
        installation_code: model.installation_code,
        reactions,
    }
}

/// Group batch-fetched child rows under their parents, preserving parent
/// order and each child query's row order
pub fn group_children(
    models: Vec<AutomationModel>,
    links: Vec<LinkModel>,
    reactions: Vec<ReactionModel>,
) -> Vec<Automation> {
    let mut links_by_parent: HashMap<i64, Vec<Link>> = HashMap::new();
    for link in links {
        links_by_parent
            .entry(link.automation_id)
            .or_default()
            .push(Link::from(link));
    }

    let mut reactions_by_parent: HashMap<i64, Vec<Reaction>> = HashMap::new();
    for reaction in reactions {
        reactions_by_parent
            .entry(reaction.automation_id)
            .or_default()
            .push(Reaction::from(reaction));
    }

    models
        .into_iter()
        .map(|model| {
            let links = links_by_parent.remove(&model.id).unwrap_or_default();
            let reactions = reactions_by_parent.remove(&model.id).unwrap_or_default();
            assemble(model, links, reactions)
        })
        .collect()
}
