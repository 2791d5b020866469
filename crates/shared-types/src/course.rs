use serde::{Deserialize, Serialize};

/// A single lesson inside a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// A course visible on the student dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_tolerates_missing_lessons() {
        let json = r#"{"id":"c-1","title":"Rust basics"}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(course.lessons.is_empty());
        assert_eq!(course.description, "");
    }
}
