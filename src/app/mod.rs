use crate::chat::TutorChat;
use crate::countdown::{self, DATE_FORMAT};
use crate::data::read_course_embedded;
use crate::model::CourseData;
use crate::storage::{COMPLETED_TOPICS_KEY, EXAM_DATE_KEY, LocalStore};
use crate::timer::FocusTimer;
use chrono::Local;
use egui_commonmark::CommonMarkCache;
use std::collections::HashSet;

// Submodules
pub mod actions;
pub mod progress;

pub struct StudyApp {
    pub course: CourseData,
    pub completed: HashSet<String>,
    /// ISO `YYYY-MM-DD`, always parseable; persisted verbatim.
    pub exam_date: String,
    pub date_input: String,
    pub editing_date: bool,
    pub message: String,
    pub focus: FocusTimer,
    pub chat: TutorChat,
    pub chat_open: bool,
    pub store: LocalStore,
    pub cm_cache: CommonMarkCache,
}

impl StudyApp {
    pub fn new() -> Self {
        Self::with_store(LocalStore::open_default())
    }

    pub fn with_store(store: LocalStore) -> Self {
        Self::with_course(read_course_embedded(), store)
    }

    pub fn with_course(course: CourseData, store: LocalStore) -> Self {
        // Drop persisted ids the catalog no longer knows about.
        let known = course.topic_ids();
        let mut completed: HashSet<String> = store.get(COMPLETED_TOPICS_KEY).unwrap_or_default();
        completed.retain(|id| known.contains(id));

        let exam_date = match store
            .get::<String>(EXAM_DATE_KEY)
            .filter(|s| countdown::parse_exam_date(s).is_some())
        {
            Some(saved) => saved,
            None => {
                let default = countdown::default_exam_date(Local::now().date_naive())
                    .format(DATE_FORMAT)
                    .to_string();
                store.set(EXAM_DATE_KEY, &default);
                default
            }
        };

        Self {
            course,
            completed,
            date_input: exam_date.clone(),
            exam_date,
            editing_date: false,
            message: String::new(),
            focus: FocusTimer::new(),
            chat: TutorChat::new(),
            chat_open: false,
            store,
            cm_cache: CommonMarkCache::default(),
        }
    }
}

impl Default for StudyApp {
    fn default() -> Self {
        Self::new()
    }
}
