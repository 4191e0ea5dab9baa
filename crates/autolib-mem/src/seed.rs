//! Reference dataset for the in-memory backend
//!
//! Mirrors the two example submissions the hosted library launched with, so
//! offline development starts from a browsable, reactable state.

use chrono::{DateTime, TimeZone, Utc};

use autolib_core::{Automation, AutomationId, Link, Reaction};

fn date(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The seed submissions, oldest first
pub fn seed_automations() -> Vec<Automation> {
    vec![
        Automation {
            id: AutomationId::new(1),
            title: "Auto Email Organizer".to_string(),
            description: "Automatically organizes emails into folders based on sender and keywords"
                .to_string(),
            student_name: "Alice Johnson".to_string(),
            // 2024-01-15
            submission_date: date(1_705_276_800_000),
            tags: vec![
                "email".to_string(),
                "productivity".to_string(),
                "automation".to_string(),
            ],
            images: vec![],
            links: vec![Link::new(
                "GitHub Repository",
                "https://github.com/example/email-organizer",
            )],
            setup_instructions: "## Setup Instructions\n\n\
                1. Clone the repository\n\
                2. Install dependencies: `npm install`\n\
                3. Configure your email credentials in `.env`\n\
                4. Run: `npm start`"
                .to_string(),
            installation_code: Some("npm install -g email-organizer".to_string()),
            reactions: vec![
                Reaction {
                    emoji: "👍".to_string(),
                    count: 5,
                },
                Reaction {
                    emoji: "❤️".to_string(),
                    count: 3,
                },
            ],
        },
        Automation {
            id: AutomationId::new(2),
            title: "Assignment Deadline Reminder".to_string(),
            description: "Sends SMS reminders 24 hours before assignment deadlines from Canvas"
                .to_string(),
            student_name: "Bob Smith".to_string(),
            // 2024-01-20
            submission_date: date(1_705_708_800_000),
            tags: vec![
                "canvas".to_string(),
                "reminders".to_string(),
                "sms".to_string(),
                "productivity".to_string(),
            ],
            images: vec![],
            links: vec![Link::new(
                "Documentation",
                "https://docs.example.com/deadline-reminder",
            )],
            setup_instructions: "## Setup Instructions\n\n\
                1. Get your Canvas API token\n\
                2. Set up Twilio account for SMS\n\
                3. Configure environment variables\n\
                4. Run the script daily via cron job"
                .to_string(),
            installation_code: None,
            reactions: vec![
                Reaction {
                    emoji: "👍".to_string(),
                    count: 8,
                },
                Reaction {
                    emoji: "🔥".to_string(),
                    count: 4,
                },
            ],
        },
    ]
}
