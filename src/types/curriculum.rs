use super::CurriculumId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A student cohort. Any two sections visited by the same curriculum must
/// land in distinct periods (I7).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curriculum {
    pub id: CurriculumId,
    pub name: String,
    pub num_students: u32,
    pub course_names: BTreeSet<String>,
}

impl Curriculum {
    pub fn new(id: CurriculumId, name: impl Into<String>, num_students: u32) -> Self {
        Self {
            id,
            name: name.into(),
            num_students,
            course_names: BTreeSet::new(),
        }
    }
}
