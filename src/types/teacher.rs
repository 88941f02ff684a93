use super::{Period, TeacherId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A teacher, qualified to teach a fixed set of courses and available only
/// in a fixed set of periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub qualified_courses: BTreeSet<String>,
    pub availability: BTreeSet<Period>,
}

impl Teacher {
    pub fn new(id: TeacherId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            qualified_courses: BTreeSet::new(),
            availability: BTreeSet::new(),
        }
    }

    pub fn is_qualified_for(&self, course_name: &str) -> bool {
        self.qualified_courses.contains(course_name)
    }
}
