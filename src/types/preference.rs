use super::Period;
use serde::{Deserialize, Serialize};

/// A weighted soft constraint. Matches an assignment when every non-null
/// field equals the assignment's corresponding attribute and `course_name`
/// equals the section's course (null-means-wildcard, applied uniformly by
/// both `objective` and GRASP's candidate cost function).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preference {
    pub course_name: String,
    pub period: Option<Period>,
    pub room_name: Option<String>,
    pub teacher_name: Option<String>,
    pub value: f64,
}

impl Preference {
    pub fn new(course_name: impl Into<String>, value: f64) -> Self {
        Self {
            course_name: course_name.into(),
            period: None,
            room_name: None,
            teacher_name: None,
            value,
        }
    }
}
