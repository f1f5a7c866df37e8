use serde::{Deserialize, Serialize};

use super::domain::ApplicationStatus;

/// Review urgency derived from a priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Fixed priority bands used by display formatting and the dashboard histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityBand {
    Critical,
    High,
    Medium,
    Low,
    Minimal,
}

impl PriorityBand {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Critical,
            Self::High,
            Self::Medium,
            Self::Low,
            Self::Minimal,
        ]
    }

    pub const fn from_score(score: u8) -> Self {
        if score >= 90 {
            Self::Critical
        } else if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else if score >= 40 {
            Self::Low
        } else {
            Self::Minimal
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Minimal => "Very Low",
        }
    }
}

pub fn get_urgency_level(priority_score: u8) -> UrgencyLevel {
    UrgencyLevel::from_score(priority_score)
}

/// Render a score with its band, e.g. `"85 - High"`.
pub fn format_priority_score(score: u8) -> String {
    format!("{score} - {}", PriorityBand::from_score(score).label())
}

/// Human-facing status text. Unknown statuses are echoed with a capitalized first letter.
pub fn get_status_display_text(status: &ApplicationStatus) -> String {
    let text = match status {
        ApplicationStatus::Pending => "Pending Review",
        ApplicationStatus::Processing => "Under Review",
        ApplicationStatus::Approved => "Approved",
        ApplicationStatus::Rejected => "Rejected",
        ApplicationStatus::Withdrawn => "Withdrawn",
        ApplicationStatus::LeaseCreated => "Lease Created",
        ApplicationStatus::MovedIn => "Moved In",
        ApplicationStatus::Active => "Active Lease",
        ApplicationStatus::Other(raw) => return capitalize_first(raw),
    };
    text.to_string()
}

fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
