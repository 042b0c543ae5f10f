//! Demo data for local frontend development.
//!
//! Seeded through the HTTP surface so the dev-server exercises the same
//! path the frontend does.

use crate::TestApp;
use anyhow::Result;
use payloads::requests;

/// Communities that make the dashboard look lived-in.
pub const DEMO_COMMUNITIES: &[(&str, &str)] = &[
    ("Engineering", "Team chat and build announcements"),
    ("Book Club", "Monthly reads and meetup planning"),
    ("Climbing", "Crag conditions and weekend carpools"),
];

pub async fn seed_demo_communities(app: &TestApp) -> Result<()> {
    for (name, description) in DEMO_COMMUNITIES {
        app.client
            .create_community(&requests::CreateCommunity {
                name: (*name).to_string(),
                description: (*description).to_string(),
            })
            .await?;
    }
    Ok(())
}
