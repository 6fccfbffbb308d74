// src/data.rs

use crate::model::CourseData;

/// Loads the course catalog from the embedded YAML.
pub fn read_course_embedded() -> CourseData {
    let file_content = include_str!("data/course_networks.yaml");
    serde_yaml::from_str(file_content).expect("embedded course catalog must parse")
}

#[cfg(test)]
mod tests {
    use super::read_course_embedded;
    use std::collections::HashSet;

    #[test]
    fn embedded_catalog_parses() {
        let course = read_course_embedded();
        assert_eq!(course.course_code, "21CSC302J");
        assert_eq!(course.units.len(), 5);
        assert_eq!(course.total_topics(), 37);
    }

    #[test]
    fn topic_ids_are_unique() {
        let course = read_course_embedded();
        let mut seen = HashSet::new();
        for unit in &course.units {
            for topic in &unit.topics {
                assert!(seen.insert(topic.id.clone()), "duplicate id {}", topic.id);
            }
        }
        assert_eq!(seen.len(), course.total_topics());
    }

    #[test]
    fn every_unit_has_practice_questions() {
        let course = read_course_embedded();
        for unit in &course.units {
            assert!(!unit.pyqs.is_empty(), "unit {} has no PYQs", unit.id);
        }
    }
}
