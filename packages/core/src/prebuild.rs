//! Prebuild domain types: a pre-computed environment build for one commit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ConfigurationId;
use crate::id::{self, IdError};

/// Identifier of a prebuild.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrebuildId(String);

impl PrebuildId {
    /// Create a new unique prebuild ID.
    pub fn new() -> Self {
        Self(id::generate())
    }

    /// Parse a prebuild ID from a string.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        Ok(Self(id::validate(s)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Route of the details page for this prebuild.
    pub fn details_path(&self) -> String {
        format!("/prebuilds/{}", self.0)
    }
}

impl Default for PrebuildId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PrebuildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Execution phase of a prebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrebuildPhase {
    #[default]
    Unspecified,
    /// Waiting for a workspace to be scheduled.
    Queued,
    /// Init tasks are running.
    Building,
    /// Stopped before completion.
    Aborted,
    /// Exceeded the prebuild time limit.
    Timeout,
    /// Finished; a non-empty status message means the tasks failed.
    Available,
    /// The build infrastructure failed.
    Failed,
}

impl PrebuildPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrebuildPhase::Unspecified => "unspecified",
            PrebuildPhase::Queued => "queued",
            PrebuildPhase::Building => "building",
            PrebuildPhase::Aborted => "aborted",
            PrebuildPhase::Timeout => "timeout",
            PrebuildPhase::Available => "available",
            PrebuildPhase::Failed => "failed",
        }
    }

    /// Check if the prebuild has stopped running.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PrebuildPhase::Aborted
                | PrebuildPhase::Timeout
                | PrebuildPhase::Available
                | PrebuildPhase::Failed
        )
    }
}

impl std::fmt::Display for PrebuildPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime status of a prebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrebuildStatus {
    #[serde(default)]
    pub phase: PrebuildPhase,
    /// When execution began.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Failure detail reported by the build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PrebuildStatus {
    pub fn new(phase: PrebuildPhase) -> Self {
        Self {
            phase,
            ..Default::default()
        }
    }

    pub fn started_at(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Author of a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// Commit that triggered a prebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

/// A prebuild as shown in the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prebuild {
    pub id: PrebuildId,
    /// The configuration (repository) this prebuild belongs to.
    pub configuration_id: ConfigurationId,
    /// Branch or tag the prebuild was triggered for.
    #[serde(rename = "ref", default)]
    pub ref_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PrebuildStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<Commit>,
}

impl Prebuild {
    /// Create a prebuild for a ref with no status or commit yet.
    pub fn new(configuration_id: ConfigurationId, ref_name: impl Into<String>) -> Self {
        Self {
            id: PrebuildId::new(),
            configuration_id,
            ref_name: ref_name.into(),
            status: None,
            commit: None,
        }
    }

    pub fn with_id(mut self, id: PrebuildId) -> Self {
        self.id = id;
        self
    }

    pub fn with_status(mut self, status: PrebuildStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_commit(mut self, commit: Commit) -> Self {
        self.commit = Some(commit);
        self
    }

    /// When the prebuild started, if it has.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.status.as_ref().and_then(|s| s.start_time)
    }

    /// Still queued or building; a missing status counts as in progress.
    pub fn is_in_progress(&self) -> bool {
        !self
            .status
            .as_ref()
            .is_some_and(|status| status.phase.is_terminal())
    }

    /// Commit and author together; `None` unless both are known.
    pub fn commit_author(&self) -> Option<(&Commit, &Author)> {
        let commit = self.commit.as_ref()?;
        let author = commit.author.as_ref()?;
        Some((commit, author))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserializes_with_optional_fields_absent() {
        let prebuild: Prebuild = serde_json::from_str(
            r#"{"id":"pb-42","configuration_id":"cfg-1","ref":"main"}"#,
        )
        .unwrap();

        assert_eq!(prebuild.id.as_str(), "pb-42");
        assert_eq!(prebuild.ref_name, "main");
        assert!(prebuild.status.is_none());
        assert!(prebuild.commit.is_none());
        assert!(prebuild.start_time().is_none());
        assert!(prebuild.commit_author().is_none());
    }

    #[test]
    fn commit_without_author_has_no_commit_author() {
        let prebuild = Prebuild::new(ConfigurationId::new(), "main").with_commit(Commit {
            sha: "abc123".to_string(),
            message: "Fix build".to_string(),
            author: None,
        });
        assert!(prebuild.commit_author().is_none());
    }

    #[test]
    fn start_time_reads_through_status() {
        let start = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        let prebuild = Prebuild::new(ConfigurationId::new(), "main")
            .with_status(PrebuildStatus::new(PrebuildPhase::Building).started_at(start));
        assert_eq!(prebuild.start_time(), Some(start));
    }

    #[test]
    fn in_progress_until_terminal_phase() {
        let prebuild = Prebuild::new(ConfigurationId::new(), "main");
        assert!(prebuild.is_in_progress());

        let queued = prebuild
            .clone()
            .with_status(PrebuildStatus::new(PrebuildPhase::Queued));
        assert!(queued.is_in_progress());

        let available = prebuild.with_status(PrebuildStatus::new(PrebuildPhase::Available));
        assert!(!available.is_in_progress());
    }

    #[test]
    fn details_path_uses_raw_id() {
        let id = PrebuildId::parse("pb-42").unwrap();
        assert_eq!(id.details_path(), "/prebuilds/pb-42");
    }

    #[test]
    fn phase_serializes_snake_case() {
        let json = serde_json::to_string(&PrebuildPhase::Timeout).unwrap();
        assert_eq!(json, r#""timeout""#);
        assert!(PrebuildPhase::Timeout.is_terminal());
        assert!(!PrebuildPhase::Building.is_terminal());
    }
}
