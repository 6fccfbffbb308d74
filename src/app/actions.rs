use super::*;

impl StudyApp {
    /// Queues a query into the chat's one-shot seed slot and opens the
    /// window; the seed fires on the next frame the chat renders.
    pub fn ask_tutor(&mut self, query: impl Into<String>) {
        self.chat.set_seed(query);
        self.chat_open = true;
    }

    pub fn explain_topic(&mut self, unit_idx: usize, topic_idx: usize) {
        let unit = &self.course.units[unit_idx];
        let query = format!(
            "Explain the topic \"{}\" from {} simply.",
            unit.topics[topic_idx].name, unit.title
        );
        self.ask_tutor(query);
    }

    pub fn draft_pyq_answer(&mut self, unit_idx: usize, pyq_idx: usize) {
        let query = format!(
            "Help me answer this exam question: \"{}\". Provide key points.",
            self.course.units[unit_idx].pyqs[pyq_idx]
        );
        self.ask_tutor(query);
    }

    pub fn create_study_plan(&mut self) {
        let query = format!(
            "Generate a 3-day revision strategy for {}.",
            self.course.course_name
        );
        self.ask_tutor(query);
    }

    pub fn start_editing_date(&mut self) {
        self.date_input = self.exam_date.clone();
        self.editing_date = true;
        self.message.clear();
    }

    /// Applies the edit buffer. A valid date persists immediately (no
    /// future-check: a past date just shows as expired); an unparseable one
    /// keeps the previous date and leaves a hint.
    pub fn apply_exam_date(&mut self) {
        match countdown::parse_exam_date(&self.date_input) {
            Some(date) => {
                self.exam_date = date.format(DATE_FORMAT).to_string();
                self.store.set(EXAM_DATE_KEY, &self.exam_date);
                self.editing_date = false;
                self.message.clear();
            }
            None => {
                self.message = "⚠ Use the YYYY-MM-DD format.".to_string();
            }
        }
    }
}
