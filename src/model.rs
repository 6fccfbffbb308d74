use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Topic {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Unit {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub pyqs: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CourseData {
    pub course_name: String,
    pub course_code: String,
    pub units: Vec<Unit>,
}

impl CourseData {
    pub fn total_topics(&self) -> usize {
        self.units.iter().map(|u| u.topics.len()).sum()
    }

    /// Every topic id in the catalog. Used to validate persisted progress.
    pub fn topic_ids(&self) -> HashSet<String> {
        self.units
            .iter()
            .flat_map(|u| &u.topics)
            .map(|t| t.id.clone())
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id: now.to_string(),
            role: ChatRole::User,
            text: text.into(),
            timestamp: now,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id: (now + 1).to_string(),
            role: ChatRole::Model,
            text: text.into(),
            timestamp: now,
        }
    }

    pub fn welcome(text: impl Into<String>) -> Self {
        Self {
            id: "welcome".to_string(),
            role: ChatRole::Model,
            text: text.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
