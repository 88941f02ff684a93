use super::{CurriculumId, SectionId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A teachable unit of a course, carrying a subset of the course's students
/// sized to fit some room. Created once, during section splitting (§4.1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSection {
    pub id: SectionId,
    pub course_name: String,
    pub section_index: u32,
    pub curriculum_students: BTreeMap<CurriculumId, u32>,
}

impl CourseSection {
    pub fn new(
        id: SectionId,
        course_name: impl Into<String>,
        section_index: u32,
        curriculum_students: BTreeMap<CurriculumId, u32>,
    ) -> Self {
        Self {
            id,
            course_name: course_name.into(),
            section_index,
            curriculum_students,
        }
    }

    pub fn total_students(&self) -> u32 {
        self.curriculum_students.values().sum()
    }

    pub fn curriculum_ids(&self) -> BTreeSet<CurriculumId> {
        self.curriculum_students.keys().copied().collect()
    }

    pub fn shares_curriculum_with(&self, other: &CourseSection) -> bool {
        self.curriculum_students
            .keys()
            .any(|cid| other.curriculum_students.contains_key(cid))
    }
}
