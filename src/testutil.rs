//! Synthetic instance generation for tests and benchmarks, grounded in
//! `experimental.py`'s `InstanceGenerator.generate_random_instance`.

use crate::types::{Instance, Period};
use rand::seq::SliceRandom;
use rand::Rng;

pub struct GeneratorParams {
    pub num_courses: u32,
    pub num_curriculums: u32,
    pub num_rooms: u32,
    pub num_teachers: u32,
    pub num_periods: u32,
    pub room_capacity_range: (u32, u32),
    pub students_per_curriculum_range: (u32, u32),
    pub courses_per_curriculum_range: (u32, u32),
    pub availability_ratio: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            num_courses: 6,
            num_curriculums: 4,
            num_rooms: 4,
            num_teachers: 5,
            num_periods: 6,
            room_capacity_range: (50, 200),
            students_per_curriculum_range: (50, 150),
            courses_per_curriculum_range: (2, 4),
            availability_ratio: 0.8,
        }
    }
}

/// Builds a random but registration-complete (sections already split)
/// instance with period preferences, mirroring the source generator's
/// shape: named curriculums/rooms/teachers, per-course period preferences,
/// and a handful of specific (course, period, room-or-teacher) preferences.
pub fn generate_random_instance<R: Rng>(params: &GeneratorParams, rng: &mut R) -> Instance {
    let mut instance = Instance::new();

    let periods: Vec<Period> = (1..=params.num_periods).map(Period).collect();
    let course_names: Vec<String> = (1..=params.num_courses).map(|i| format!("Course {i}")).collect();

    let mut curriculum_courses: Vec<Vec<String>> = Vec::with_capacity(params.num_curriculums as usize);
    for i in 1..=params.num_curriculums {
        let num_students = rng.gen_range(params.students_per_curriculum_range.0..=params.students_per_curriculum_range.1);
        let num_courses_in_curr =
            rng.gen_range(params.courses_per_curriculum_range.0..=params.courses_per_curriculum_range.1) as usize;
        let mut shuffled = course_names.clone();
        shuffled.shuffle(rng);
        let selected: Vec<String> = shuffled.into_iter().take(num_courses_in_curr.min(course_names.len())).collect();
        instance
            .add_curriculum(format!("Curriculum {i}"), num_students, &selected)
            .expect("generated curriculum name is unique");
        curriculum_courses.push(selected);
    }

    for course_name in &course_names {
        let curriculum_names: Vec<String> = curriculum_courses
            .iter()
            .enumerate()
            .filter(|(_, courses)| courses.contains(course_name))
            .map(|(i, _)| format!("Curriculum {}", i + 1))
            .collect();
        if !curriculum_names.is_empty() {
            instance
                .add_course(course_name.clone(), &curriculum_names)
                .expect("curriculum names were just registered above");
        }
    }

    for i in 1..=params.num_rooms {
        let capacity = rng.gen_range(params.room_capacity_range.0..=params.room_capacity_range.1);
        let available = sample_periods(&periods, params.availability_ratio, rng);
        instance
            .add_room(format!("Room {i}"), capacity, &available)
            .expect("generated room name is unique");
    }

    for i in 1..=params.num_teachers {
        let num_taught = rng.gen_range(2..=4usize.min(course_names.len().max(2)));
        let mut shuffled = course_names.clone();
        shuffled.shuffle(rng);
        let taught: Vec<String> = shuffled.into_iter().take(num_taught.min(course_names.len())).collect();
        let available = sample_periods(&periods, params.availability_ratio, rng);
        instance
            .add_teacher(format!("Teacher {i}"), &taught, &available)
            .expect("generated teacher name is unique");
    }

    instance.create_course_sections().expect("rooms were registered above");

    for course_name in &course_names {
        let num_prefs = rng.gen_range(1..=3usize.min(periods.len().max(1)));
        let mut shuffled = periods.clone();
        shuffled.shuffle(rng);
        for &period in shuffled.iter().take(num_prefs) {
            let value = rng.gen_range(1.0..=5.0);
            instance
                .add_preference(course_name.clone(), Some(period), None, None, value)
                .expect("course name was just registered");
        }
    }

    for _ in 0..params.num_courses {
        let course = course_names.choose(rng).expect("at least one course was generated").clone();
        let period = *periods.choose(rng).expect("at least one period was generated");

        let room_name = (rng.gen::<f64>() < 0.5)
            .then(|| format!("Room {}", rng.gen_range(1..=params.num_rooms)));
        let teacher_name = (rng.gen::<f64>() < 0.5)
            .then(|| format!("Teacher {}", rng.gen_range(1..=params.num_teachers)));

        if room_name.is_some() || teacher_name.is_some() {
            let value = rng.gen_range(5.0..=10.0);
            instance
                .add_preference(course, Some(period), room_name, teacher_name, value)
                .expect("referenced room/teacher names were generated above");
        }
    }

    instance
}

fn sample_periods<R: Rng>(periods: &[Period], ratio: f64, rng: &mut R) -> Vec<Period> {
    let count = ((periods.len() as f64 * ratio) as usize).max(1).min(periods.len());
    let mut shuffled = periods.to_vec();
    shuffled.shuffle(rng);
    shuffled.into_iter().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn generated_instance_has_sections_and_preferences() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let instance = generate_random_instance(&GeneratorParams::default(), &mut rng);
        assert!(!instance.sections().is_empty());
        assert!(!instance.preferences().is_empty());
        assert!(!instance.rooms().is_empty());
        assert!(!instance.teachers().is_empty());
    }
}
