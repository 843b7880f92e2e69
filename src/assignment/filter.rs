use crate::classify::Status;
use crate::error::TrackerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which assignments the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Every assignment
    #[default]
    All,
    /// Completed on time, or not yet due
    OnTrack,
    /// Completed late, or overdue
    Late,
    /// Manually flagged as blocked
    Blocked,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::OnTrack, Filter::Late, Filter::Blocked];

    /// Check whether an assignment with the given status passes this filter
    pub fn matches(self, status: Status) -> bool {
        match self {
            Filter::All => true,
            Filter::OnTrack => status == Status::OnTrack,
            Filter::Late => status == Status::Late,
            Filter::Blocked => status == Status::Blocked,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::OnTrack => "on_track",
            Filter::Late => "late",
            Filter::Blocked => "blocked",
        }
    }
}

impl From<Status> for Filter {
    fn from(status: Status) -> Self {
        match status {
            Status::OnTrack => Filter::OnTrack,
            Status::Late => Filter::Late,
            Status::Blocked => Filter::Blocked,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "meet" | "on_track" | "on-track" | "ontrack" => Ok(Filter::OnTrack),
            "late" => Ok(Filter::Late),
            "blocked" => Ok(Filter::Blocked),
            _ => Err(TrackerError::InvalidFilter(s.trim().to_string())),
        }
    }
}
