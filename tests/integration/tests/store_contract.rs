//! Store contract tests
//!
//! Exercises every operation of the store contract against the in-memory
//! backend, including the end-to-end submit/react scenario.

use anyhow::Result;
use chrono::Utc;

use autolib_core::{Automation, AutomationId, AutomationStore};
use autolib_mem::MemoryAutomationStore;
use integration_tests::fixtures::{init_test_tracing, scenario_submission, submission};

#[tokio::test]
async fn create_then_find_returns_equal_record() -> Result<()> {
    init_test_tracing();
    let store = MemoryAutomationStore::new();
    let input = submission("roundtrip");

    let created = store.create(input.clone()).await?;
    let found = store
        .find_by_id(created.id)
        .await?
        .expect("created record must be findable");

    // Equal to the input in every field except the server-assigned ones
    assert_eq!(found.title, input.title);
    assert_eq!(found.description, input.description);
    assert_eq!(found.student_name, input.student_name);
    assert_eq!(found.tags, input.tags);
    assert_eq!(found.images, input.images);
    assert_eq!(found.links, input.links);
    assert_eq!(found.setup_instructions, input.setup_instructions);
    assert_eq!(found.installation_code, input.installation_code);
    assert!(found.reactions.is_empty());
    assert!(!found.id.is_zero());
    Ok(())
}

#[tokio::test]
async fn ids_are_unique_across_creates() -> Result<()> {
    let store = MemoryAutomationStore::new();
    let mut ids = std::collections::HashSet::new();

    for _ in 0..50 {
        let created = store.create(submission("ids")).await?;
        assert!(ids.insert(created.id), "duplicate id issued");
    }
    Ok(())
}

#[tokio::test]
async fn list_all_orders_newest_first() -> Result<()> {
    let store = MemoryAutomationStore::seeded();
    for _ in 0..3 {
        store.create(submission("ordering")).await?;
    }

    let all = store.list_all().await?;
    assert!(all
        .windows(2)
        .all(|w| (w[0].submission_date, w[0].id) > (w[1].submission_date, w[1].id)));
    Ok(())
}

#[tokio::test]
async fn update_preserves_id_and_submission_date() -> Result<()> {
    let store = MemoryAutomationStore::seeded();
    let before = store
        .find_by_id(AutomationId::new(1))
        .await?
        .expect("seed record");

    let updated = store
        .update(before.id, submission("updated"))
        .await?
        .expect("seed record must update");

    assert_eq!(updated.id, before.id);
    assert_eq!(updated.submission_date, before.submission_date);
    assert_eq!(updated.reactions, before.reactions);
    assert_ne!(updated.title, before.title);
    Ok(())
}

#[tokio::test]
async fn update_rejects_invalid_input_before_writing() -> Result<()> {
    let store = MemoryAutomationStore::seeded();
    let before = store
        .find_by_id(AutomationId::new(1))
        .await?
        .expect("seed record");

    let mut bad = submission("invalid");
    bad.description = String::new();
    let err = store.update(before.id, bad).await.unwrap_err();
    assert!(err.is_validation());

    let after = store.find_by_id(before.id).await?.expect("still there");
    assert_eq!(after, before);
    Ok(())
}

#[tokio::test]
async fn reactions_group_by_emoji() -> Result<()> {
    let store = MemoryAutomationStore::new();
    let created = store.create(submission("reactions")).await?;

    store.add_reaction(created.id, "👍").await?;
    store.add_reaction(created.id, "👍").await?;
    let after = store
        .add_reaction(created.id, "💡")
        .await?
        .expect("record exists");

    assert_eq!(after.reactions.len(), 2);
    assert_eq!(after.reaction("👍").map(|r| r.count), Some(2));
    assert_eq!(after.reaction("💡").map(|r| r.count), Some(1));
    Ok(())
}

#[tokio::test]
async fn all_tags_is_sorted_and_unique() -> Result<()> {
    let store = MemoryAutomationStore::seeded();
    store.create(submission("zzz-last")).await?;
    store.create(submission("aaa-first")).await?;

    let tags = store.all_tags().await?;
    let mut expected = tags.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(tags, expected);
    Ok(())
}

#[tokio::test]
async fn list_by_tag_is_an_ordered_subset_of_list_all() -> Result<()> {
    let store = MemoryAutomationStore::seeded();
    store.create(submission("productivity")).await?;

    let all = store.list_all().await?;
    let filtered = store.list_by_tag("productivity").await?;

    assert!(!filtered.is_empty());
    assert!(filtered.iter().all(|a| a.has_tag("productivity")));

    let positions: Vec<usize> = filtered
        .iter()
        .map(|f| {
            all.iter()
                .position(|a| a.id == f.id)
                .expect("filtered record must appear in list_all")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

#[tokio::test]
async fn unknown_ids_return_none_not_errors() -> Result<()> {
    let store = MemoryAutomationStore::new();
    let unknown = AutomationId::new(424_242);

    assert!(store.find_by_id(unknown).await?.is_none());
    assert!(store.update(unknown, submission("none")).await?.is_none());
    assert!(store.add_reaction(unknown, "👍").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn submit_and_react_scenario() -> Result<()> {
    init_test_tracing();
    let store = MemoryAutomationStore::new();

    let created = store.create(scenario_submission()).await?;
    let found = store
        .find_by_id(created.id)
        .await?
        .expect("created record must be findable");

    assert_eq!(found.title, "X");
    assert_eq!(found.description, "Y");
    assert_eq!(found.student_name, "Z");
    assert_eq!(found.tags, vec!["a", "b"]);
    assert!(found.links.is_empty());
    assert!(found.images.is_empty());
    assert_eq!(found.setup_instructions, "## Hi");
    assert!(found.reactions.is_empty());
    assert!(
        (Utc::now() - found.submission_date).num_seconds() < 60,
        "submission date is stamped at creation time"
    );

    let first = store
        .add_reaction(created.id, "👍")
        .await?
        .expect("record exists");
    assert_eq!(first.reactions.len(), 1);
    assert_eq!(first.reaction("👍").map(|r| r.count), Some(1));

    let second = store
        .add_reaction(created.id, "👍")
        .await?
        .expect("record exists");
    assert_eq!(second.reactions.len(), 1);
    assert_eq!(second.reaction("👍").map(|r| r.count), Some(2));

    let tags = store.all_tags().await?;
    assert!(tags.iter().any(|t| t == "a"));
    assert!(tags.iter().any(|t| t == "b"));
    Ok(())
}

#[tokio::test]
async fn wire_format_roundtrips_through_json() -> Result<()> {
    let store = MemoryAutomationStore::seeded();
    let original = store
        .find_by_id(AutomationId::new(1))
        .await?
        .expect("seed record");

    let json = serde_json::to_string(&original)?;
    assert!(json.contains("\"studentName\""));
    assert!(json.contains("\"id\":\"1\""));

    let parsed: Automation = serde_json::from_str(&json)?;
    assert_eq!(parsed, original);
    Ok(())
}
