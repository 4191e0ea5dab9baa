//! Test fixtures and data generators
//!
//! Provides reusable test data for store contract tests.

use std::sync::atomic::{AtomicU64, Ordering};

use autolib_common::{try_init_tracing, TracingConfig};
use autolib_core::{Link, NewAutomation};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Install the tracing subscriber once for the test binary; later calls
/// (and other tests racing for it) are no-ops
pub fn init_test_tracing() {
    let _ = try_init_tracing(TracingConfig::default());
}

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A fully populated, valid submission payload
pub fn submission(tag: &str) -> NewAutomation {
    let suffix = unique_suffix();
    NewAutomation {
        title: format!("Test Automation {suffix}"),
        description: "Automates something tedious".to_string(),
        student_name: format!("Student {suffix}"),
        tags: vec![tag.to_string(), format!("unique-{suffix}")],
        images: vec![format!("https://img.example.com/{suffix}.png")],
        links: vec![Link::new(
            "GitHub Repository",
            format!("https://github.com/example/auto-{suffix}"),
        )],
        setup_instructions: "## Setup\n\n1. Install\n2. Run".to_string(),
        installation_code: Some(format!("npx install-auto-{suffix}")),
    }
}

/// The minimal scenario payload: title X, description Y, student Z,
/// tags a/b, no links or images
pub fn scenario_submission() -> NewAutomation {
    NewAutomation {
        title: "X".to_string(),
        description: "Y".to_string(),
        student_name: "Z".to_string(),
        tags: vec!["a".to_string(), "b".to_string()],
        images: vec![],
        links: vec![],
        setup_instructions: "## Hi".to_string(),
        installation_code: None,
    }
}
