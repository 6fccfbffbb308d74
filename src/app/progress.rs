use super::*;
use crate::view_models::{OverallProgress, UnitProgress};

impl StudyApp {
    pub fn is_completed(&self, topic_id: &str) -> bool {
        self.completed.contains(topic_id)
    }

    /// Flips set membership and re-persists the whole array right away.
    pub fn toggle_topic(&mut self, topic_id: &str) {
        if !self.completed.remove(topic_id) {
            self.completed.insert(topic_id.to_string());
        }
        self.store.set(COMPLETED_TOPICS_KEY, &self.completed);
    }

    pub fn unit_progress(&self, idx: usize) -> UnitProgress {
        let unit = &self.course.units[idx];
        let total = unit.topics.len();
        let completed = unit
            .topics
            .iter()
            .filter(|t| self.completed.contains(&t.id))
            .count();
        UnitProgress {
            idx,
            completed,
            total,
            percent: percent(completed, total),
            complete: total > 0 && completed == total,
        }
    }

    pub fn overall_progress(&self) -> OverallProgress {
        let total = self.course.total_topics();
        let completed = self.completed.len();
        OverallProgress {
            completed,
            total,
            percent: percent(completed, total),
        }
    }
}

/// Rounded completion percentage; an empty unit is 0%, never an error.
pub(crate) fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}
