use super::{
    Assignment, CourseSection, Curriculum, CurriculumId, Period, Preference, Room, RoomId,
    SectionId, Teacher, TeacherId,
};
use crate::error::{Result, SchedulerError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Aggregates every entity of a timetabling instance plus the current
/// (possibly partial) assignment set. Registration happens before section
/// creation; sections, once created, never change shape — only
/// `assign_section` mutates `assignments` afterward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Instance {
    curriculums: Vec<Curriculum>,
    rooms: Vec<Room>,
    teachers: Vec<Teacher>,
    courses: Vec<String>,
    sections: Vec<CourseSection>,
    preferences: Vec<Preference>,
    pub assignments: Vec<Assignment>,
    periods: BTreeSet<Period>,
    sections_created: bool,
}

impl Instance {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Registration -------------------------------------------------

    pub fn add_curriculum(
        &mut self,
        name: impl Into<String>,
        num_students: u32,
        course_names: &[String],
    ) -> Result<CurriculumId> {
        let name = name.into();
        if self.curriculums.iter().any(|c| c.name == name) {
            return Err(SchedulerError::DuplicateName {
                kind: "curriculum",
                name,
            }
            .into());
        }
        let id = CurriculumId(self.curriculums.len() as u32);
        let mut curriculum = Curriculum::new(id, name, num_students);
        for course in course_names {
            curriculum.course_names.insert(course.clone());
            self.register_course_name(course);
        }
        self.curriculums.push(curriculum);
        Ok(id)
    }

    pub fn add_course(&mut self, name: impl Into<String>, curriculum_names: &[String]) -> Result<()> {
        let name = name.into();
        for cname in curriculum_names {
            let curriculum = self
                .curriculums
                .iter_mut()
                .find(|c| &c.name == cname)
                .ok_or_else(|| SchedulerError::UnknownCurriculum(cname.clone()))?;
            curriculum.course_names.insert(name.clone());
        }
        self.register_course_name(&name);
        Ok(())
    }

    pub fn add_room(
        &mut self,
        name: impl Into<String>,
        capacity: u32,
        availability: &[Period],
    ) -> Result<RoomId> {
        let name = name.into();
        if self.rooms.iter().any(|r| r.name == name) {
            return Err(SchedulerError::DuplicateName { kind: "room", name }.into());
        }
        let id = RoomId(self.rooms.len() as u32);
        let mut room = Room::new(id, name, capacity);
        for p in availability {
            room.availability.insert(*p);
            self.periods.insert(*p);
        }
        self.rooms.push(room);
        Ok(id)
    }

    pub fn add_teacher(
        &mut self,
        name: impl Into<String>,
        qualified_courses: &[String],
        availability: &[Period],
    ) -> Result<TeacherId> {
        let name = name.into();
        if self.teachers.iter().any(|t| t.name == name) {
            return Err(SchedulerError::DuplicateName {
                kind: "teacher",
                name,
            }
            .into());
        }
        let id = TeacherId(self.teachers.len() as u32);
        let mut teacher = Teacher::new(id, name);
        for course in qualified_courses {
            teacher.qualified_courses.insert(course.clone());
        }
        for p in availability {
            teacher.availability.insert(*p);
            self.periods.insert(*p);
        }
        self.teachers.push(teacher);
        Ok(id)
    }

    pub fn add_preference(
        &mut self,
        course_name: impl Into<String>,
        period: Option<Period>,
        room_name: Option<String>,
        teacher_name: Option<String>,
        value: f64,
    ) -> Result<()> {
        let course_name = course_name.into();
        if !self.courses.iter().any(|c| c == &course_name) {
            return Err(SchedulerError::UnknownCourse(course_name).into());
        }
        if let Some(room) = &room_name {
            if self.find_room_by_name(room).is_none() {
                return Err(SchedulerError::UnknownRoom(room.clone()).into());
            }
        }
        if let Some(teacher) = &teacher_name {
            if self.find_teacher_by_name(teacher).is_none() {
                return Err(SchedulerError::UnknownTeacher(teacher.clone()).into());
            }
        }
        self.preferences.push(Preference {
            course_name,
            period,
            room_name,
            teacher_name,
            value,
        });
        Ok(())
    }

    fn register_course_name(&mut self, name: &str) {
        if !self.courses.iter().any(|c| c == name) {
            self.courses.push(name.to_string());
        }
    }

    // --- Section creation (§4.1) ---------------------------------------

    /// Partitions each course's students into sections of at most
    /// `max(room.capacity)` students, deterministically in registration
    /// order. Must be called exactly once, after all registrations.
    pub fn create_course_sections(&mut self) -> Result<()> {
        if self.sections_created {
            return Err(SchedulerError::SectionsAlreadyCreated.into());
        }
        if self.rooms.is_empty() {
            return Err(SchedulerError::NoRooms.into());
        }

        let max_capacity = self.rooms.iter().map(|r| r.capacity).max().unwrap_or(0);
        let mut next_id = 0u32;

        for course_name in self.courses.clone() {
            let mut per_curriculum: BTreeMap<CurriculumId, u32> = BTreeMap::new();
            for curriculum in &self.curriculums {
                if curriculum.num_students > 0 && curriculum.course_names.contains(&course_name) {
                    per_curriculum.insert(curriculum.id, curriculum.num_students);
                }
            }
            if per_curriculum.values().sum::<u32>() == 0 {
                continue;
            }

            let mut full_sections: Vec<BTreeMap<CurriculumId, u32>> = Vec::new();
            let mut remainder: Vec<(CurriculumId, u32)> = Vec::new();

            for (cid, mut count) in per_curriculum {
                while max_capacity > 0 && count > max_capacity {
                    let mut section = BTreeMap::new();
                    section.insert(cid, max_capacity);
                    full_sections.push(section);
                    count -= max_capacity;
                }
                if count > 0 {
                    remainder.push((cid, count));
                }
            }

            remainder.sort_by(|a, b| b.1.cmp(&a.1));

            let mut packed: Vec<BTreeMap<CurriculumId, u32>> = Vec::new();
            for (cid, count) in remainder {
                let fits_current = packed
                    .last()
                    .map(|section| section.values().sum::<u32>() + count <= max_capacity)
                    .unwrap_or(false);
                if fits_current {
                    packed.last_mut().unwrap().insert(cid, count);
                } else {
                    let mut section = BTreeMap::new();
                    section.insert(cid, count);
                    packed.push(section);
                }
            }

            let mut all_sections = full_sections;
            all_sections.append(&mut packed);

            let start_index = if all_sections.len() == 1 { 0 } else { 1 };
            for (offset, curriculum_students) in all_sections.into_iter().enumerate() {
                let id = SectionId(next_id);
                next_id += 1;
                self.sections.push(CourseSection::new(
                    id,
                    course_name.clone(),
                    start_index + offset as u32,
                    curriculum_students,
                ));
            }
        }

        self.sections_created = true;
        Ok(())
    }

    // --- Raw mutation ----------------------------------------------------

    /// Places (or replaces) the assignment for `section_id`. Used by solvers
    /// only; the kernel never calls this.
    pub fn assign_section(
        &mut self,
        section_id: SectionId,
        period: Period,
        room_id: RoomId,
        teacher_id: TeacherId,
    ) {
        if let Some(existing) = self
            .assignments
            .iter_mut()
            .find(|a| a.section_id == section_id)
        {
            existing.period = period;
            existing.room_id = room_id;
            existing.teacher_id = teacher_id;
        } else {
            self.assignments
                .push(Assignment::new(section_id, period, room_id, teacher_id));
        }
    }

    pub fn unassign_section(&mut self, section_id: SectionId) {
        self.assignments.retain(|a| a.section_id != section_id);
    }

    // --- Queries over the kernel -----------------------------------------

    pub fn check_hard_constraints(&self) -> (bool, Vec<String>) {
        crate::constraint::check(self, &self.assignments)
    }

    pub fn calculate_objective(&self) -> f64 {
        crate::constraint::objective(self, &self.assignments)
    }

    pub fn get_assignment_details(&self) -> Vec<String> {
        self.assignments
            .iter()
            .map(|a| {
                let section = self.section(a.section_id);
                let room = self.room(a.room_id);
                let teacher = self.teacher(a.teacher_id);
                format!(
                    "{}: {} in {} with {}",
                    section.map(|s| s.course_name.as_str()).unwrap_or("?"),
                    a.period,
                    room.map(|r| r.name.as_str()).unwrap_or("?"),
                    teacher.map(|t| t.name.as_str()).unwrap_or("?"),
                )
            })
            .collect()
    }

    // --- Lookups -----------------------------------------------------------

    pub fn curriculums(&self) -> &[Curriculum] {
        &self.curriculums
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn sections(&self) -> &[CourseSection] {
        &self.sections
    }

    pub fn preferences(&self) -> &[Preference] {
        &self.preferences
    }

    pub fn periods(&self) -> &BTreeSet<Period> {
        &self.periods
    }

    pub fn curriculum(&self, id: CurriculumId) -> Option<&Curriculum> {
        self.curriculums.get(id.0 as usize)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0 as usize)
    }

    pub fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.get(id.0 as usize)
    }

    pub fn section(&self, id: SectionId) -> Option<&CourseSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn find_room_by_name(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().find(|r| r.name == name).map(|r| r.id)
    }

    pub fn find_teacher_by_name(&self, name: &str) -> Option<TeacherId> {
        self.teachers.iter().find(|t| t.name == name).map(|t| t.id)
    }

    pub fn find_curriculum_by_name(&self, name: &str) -> Option<CurriculumId> {
        self.curriculums
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id)
    }

    pub fn qualified_teachers_for(&self, course_name: &str) -> Vec<TeacherId> {
        let qualified: Vec<TeacherId> = self
            .teachers
            .iter()
            .filter(|t| t.is_qualified_for(course_name))
            .map(|t| t.id)
            .collect();
        if qualified.is_empty() {
            // Diagnostic fallback per §4.3: search will then fail qualification.
            self.teachers.iter().map(|t| t.id).collect()
        } else {
            qualified
        }
    }

    pub fn max_room_capacity(&self) -> u32 {
        self.rooms.iter().map(|r| r.capacity).max().unwrap_or(0)
    }
}
