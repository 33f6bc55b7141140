//! Task record and priority levels.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Importance of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Parse a priority from free-form user input ("high"/"medium"/"low",
    /// any case). Used by the interactive menu; the CLI goes through clap.
    pub fn parse(s: &str) -> Option<Priority> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// Format a priority for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::High => "high",
        Priority::Medium => "medium",
        Priority::Low => "low",
    }
}

/// A single to-do item.
///
/// Ids are 1-based and always form the dense range 1..=N in list order;
/// the store renumbers after deletes to keep that invariant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_priority() {
        assert_eq!(Priority::parse("high"), Some(Priority::High));
        assert_eq!(Priority::parse("  MEDIUM "), Some(Priority::Medium));
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Priority::parse(""), None);
    }

    #[test]
    fn test_completed_at_omitted_until_set() {
        let task = Task {
            id: 1,
            description: "write report".into(),
            priority: Priority::Medium,
            completed: false,
            created_at: "2026-01-05 09:30:00".into(),
            completed_at: None,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("completed_at"));

        let done = Task {
            completed: true,
            completed_at: Some("2026-01-05 10:00:00".into()),
            ..task
        };
        let json = serde_json::to_string(&done).unwrap();
        assert!(json.contains("completed_at"));
    }
}
