//! Display derivations for prebuild rows: trigger time, commit summary and
//! status badge.

use chrono::{DateTime, Datelike, Local, SecondsFormat, TimeZone, Utc};

use crate::{Prebuild, PrebuildPhase};

/// Commit messages whose first line exceeds this are shortened.
const COMMIT_MESSAGE_MAX_CHARS: usize = 50;
/// Characters kept from a shortened commit message.
const COMMIT_MESSAGE_KEEP_CHARS: usize = 45;

/// Format `date` relative to `now`.
///
/// Same calendar day gives the time of day (`Today at 2:30 PM`), same
/// calendar year gives month and day (`Mar 5`), anything else the full date
/// (`Dec 25, 2022`). Calendar boundaries are those of `now`'s time zone.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let date = date.with_timezone(&now.timezone());

    if date.date_naive() == now.date_naive() {
        return date.format("Today at %-I:%M %p").to_string();
    }

    if date.year() == now.year() {
        return date.format("%b %-d").to_string();
    }

    date.format("%b %-d, %Y").to_string()
}

/// Format a UTC instant relative to `now` in the host's local time zone.
pub fn format_local(date: DateTime<Utc>, now: &DateTime<Local>) -> String {
    format_date(&date.with_timezone(&Local), now)
}

/// Everything the trigger-time cell shows, derived from a single instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggeredTime {
    /// Short relative label, see [`format_date`].
    pub label: String,
    /// Machine-readable timestamp for the `datetime` attribute.
    pub datetime: String,
    /// Full human-readable timestamp for the hover title.
    pub title: String,
}

impl TriggeredTime {
    /// Derive the cell contents for `start`, with calendar comparisons in
    /// `now`'s time zone.
    pub fn new<Tz: TimeZone>(start: DateTime<Utc>, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let local = start.with_timezone(&now.timezone());
        Self {
            label: format_date(&local, now),
            datetime: start.to_rfc3339_opts(SecondsFormat::Millis, true),
            title: local.format("%a %b %d %Y %H:%M:%S GMT%z").to_string(),
        }
    }
}

/// Shorten a commit message to its first line, truncated if long.
pub fn short_commit_message(message: &str) -> String {
    let first_line = message.lines().next().unwrap_or_default();
    if first_line.chars().count() > COMMIT_MESSAGE_MAX_CHARS {
        let kept: String = first_line.chars().take(COMMIT_MESSAGE_KEEP_CHARS).collect();
        format!("{kept} …")
    } else {
        first_line.to_string()
    }
}

/// Icon shown next to a prebuild's status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIcon {
    Pending,
    Running,
    Done,
    Failed,
}

impl StatusIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusIcon::Pending => "pending",
            StatusIcon::Running => "running",
            StatusIcon::Done => "done",
            StatusIcon::Failed => "failed",
        }
    }
}

/// Status badge contents for a prebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrebuildDisplay {
    /// Lower-case label; views capitalize it.
    pub label: &'static str,
    /// Text color class applied to the icon.
    pub color_class: &'static str,
    pub icon: StatusIcon,
}

impl PrebuildDisplay {
    const PENDING: Self = Self::new("pending", "text-orange-500", StatusIcon::Pending);
    const FAILED: Self = Self::new("failed", "text-red-500", StatusIcon::Failed);

    const fn new(label: &'static str, color_class: &'static str, icon: StatusIcon) -> Self {
        Self {
            label,
            color_class,
            icon,
        }
    }

    /// Classify a prebuild by its status.
    pub fn classify(prebuild: &Prebuild) -> Self {
        let Some(status) = prebuild.status.as_ref() else {
            return Self::PENDING;
        };

        match status.phase {
            PrebuildPhase::Unspecified | PrebuildPhase::Queued => Self::PENDING,
            PrebuildPhase::Building => Self::new("running", "text-blue-500", StatusIcon::Running),
            PrebuildPhase::Aborted => Self::new("aborted", "text-gray-500", StatusIcon::Failed),
            PrebuildPhase::Timeout => Self::new("timed out", "text-red-500", StatusIcon::Failed),
            PrebuildPhase::Failed => Self::FAILED,
            PrebuildPhase::Available => {
                if status.message.as_deref().is_some_and(|m| !m.is_empty()) {
                    Self::FAILED
                } else {
                    Self::new("ready", "text-green-500", StatusIcon::Done)
                }
            }
        }
    }
}
