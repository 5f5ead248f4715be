//! Task record and priority scale stored in the task file.

use serde::{Serialize, Deserialize};
use clap::ValueEnum;
use chrono::Local;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub priority: Priority,
    pub done: bool,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl Task {
    pub fn new(id: u64, title: String, priority: Priority) -> Self {
        let created_at = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        Self {
            id,
            title,
            priority,
            done: false,
            created_at,
        }
    }
}
