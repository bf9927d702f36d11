//! Demo data covering every way a prebuild row can render.

use chrono::{Duration, Utc};
use db::DbError;
use db::repositories::{ConfigurationRepository, PrebuildRepository};
use prebuild_core::{
    Author, Commit, Configuration, ConfigurationId, Prebuild, PrebuildPhase, PrebuildStatus,
};

fn author(name: &str, login: &str) -> Author {
    Author {
        name: name.to_string(),
        avatar_url: format!("https://avatars.githubusercontent.com/{login}"),
    }
}

fn commit(sha: &str, message: &str, author: Author) -> Commit {
    Commit {
        sha: sha.to_string(),
        message: message.to_string(),
        author: Some(author),
    }
}

/// Insert demo configurations and prebuilds into an empty store.
///
/// Returns the number of prebuilds created; does nothing if any
/// configuration already exists.
pub async fn seed_demo_data() -> Result<usize, DbError> {
    if ConfigurationRepository::count().await? > 0 {
        tracing::debug!("Store already populated, skipping demo seed");
        return Ok(0);
    }

    tracing::info!("Seeding demo prebuilds...");

    let widgets = ConfigurationRepository::create(&Configuration::new(
        "acme/widgets",
        "https://github.com/acme/widgets.git",
    ))
    .await?;
    let api = ConfigurationRepository::create(&Configuration::new(
        "acme/api",
        "https://github.com/acme/api.git",
    ))
    .await?;

    let now = Utc::now();
    let ada = author("Ada Lovelace", "ada");
    let grace = author("Grace Hopper", "grace");

    let prebuilds = vec![
        Prebuild::new(widgets.id.clone(), "main")
            .with_status(
                PrebuildStatus::new(PrebuildPhase::Building)
                    .started_at(now - Duration::minutes(4)),
            )
            .with_commit(commit("9c41d2e", "Cache rendered widgets per tenant", ada.clone())),
        Prebuild::new(widgets.id.clone(), "feature/very-long-branch-name-for-wrapping-checks")
            .with_status(
                PrebuildStatus::new(PrebuildPhase::Available).started_at(now - Duration::days(3)),
            )
            .with_commit(commit(
                "51aa0f7",
                "Rework the widget layout engine so nested grids keep their gutters when resized\n\nCloses #118",
                grace.clone(),
            )),
        Prebuild::new(widgets.id.clone(), "main")
            .with_status(
                PrebuildStatus::new(PrebuildPhase::Available)
                    .started_at(now - Duration::days(400))
                    .with_message("Task 'npm ci' exited with code 1"),
            )
            .with_commit(commit("0be37c1", "Bump dependencies", ada.clone())),
        Prebuild::new(api.id.clone(), "main")
            .with_status(
                PrebuildStatus::new(PrebuildPhase::Queued).started_at(now - Duration::minutes(1)),
            )
            .with_commit(commit("e2f9b80", "Add health endpoint", grace.clone())),
        Prebuild::new(api.id.clone(), "v2.0.0")
            .with_status(
                PrebuildStatus::new(PrebuildPhase::Timeout).started_at(now - Duration::days(40)),
            ),
        Prebuild::new(api.id.clone(), "hotfix/login")
            .with_status(
                PrebuildStatus::new(PrebuildPhase::Aborted).started_at(now - Duration::hours(30)),
            )
            .with_commit(Commit {
                sha: "7d0c3aa".to_string(),
                message: "Revert session change".to_string(),
                author: None,
            }),
        Prebuild::new(api.id.clone(), "main")
            .with_status(PrebuildStatus::new(PrebuildPhase::Failed)),
        // Belongs to a repository that was removed.
        Prebuild::new(ConfigurationId::new(), "main")
            .with_status(
                PrebuildStatus::new(PrebuildPhase::Available).started_at(now - Duration::days(12)),
            )
            .with_commit(commit("aa01f3d", "Initial commit", ada)),
    ];

    for prebuild in &prebuilds {
        PrebuildRepository::create(prebuild).await?;
    }

    tracing::info!(
        configurations = 2,
        prebuilds = prebuilds.len(),
        "Demo prebuilds seeded"
    );
    Ok(prebuilds.len())
}
