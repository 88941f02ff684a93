//! The canonical textual input format (§6): one entity per line, fields
//! separated by `:`/`,`/`|`. Rooms and teachers carry no explicit
//! availability in this format, so a loaded instance gives every room and
//! teacher full availability over whatever periods the preference lines
//! mention (falling back to a single period when no preference names one)
//! — the minimal reading that makes the format self-contained.

use super::read_lines;
use crate::error::{Result, SchedulerError};
use crate::types::{Instance, Period, Preference};
use std::collections::BTreeSet;
use std::path::Path;

pub struct ParsedCurriculum {
    pub name: String,
    pub num_students: u32,
    pub course_names: Vec<String>,
}

pub struct ParsedRoom {
    pub name: String,
    pub capacity: u32,
}

pub struct ParsedTeacher {
    pub name: String,
    pub qualified_courses: Vec<String>,
}

/// Loads `curriculums.txt`, `rooms.txt`, `teachers.txt`, and (optionally)
/// `preferences.txt` from `dir` and assembles a registered (but not yet
/// section-split) `Instance`.
pub fn load_instance_from_dir(dir: &Path) -> Result<Instance> {
    let curriculums = parse_curriculums(&dir.join("curriculums.txt"))?;
    let rooms = parse_rooms(&dir.join("rooms.txt"))?;
    let teachers = parse_teachers(&dir.join("teachers.txt"))?;
    let preferences_path = dir.join("preferences.txt");
    let preferences = if preferences_path.exists() {
        parse_preferences(&preferences_path)?
    } else {
        Vec::new()
    };

    let mut periods: BTreeSet<Period> = preferences.iter().filter_map(|p| p.period).collect();
    if periods.is_empty() {
        periods.insert(Period(1));
    }
    let periods: Vec<Period> = periods.into_iter().collect();

    let mut instance = Instance::new();
    for c in &curriculums {
        instance.add_curriculum(c.name.clone(), c.num_students, &c.course_names)?;
    }
    for r in &rooms {
        instance.add_room(r.name.clone(), r.capacity, &periods)?;
    }
    for t in &teachers {
        instance.add_teacher(t.name.clone(), &t.qualified_courses, &periods)?;
    }
    for p in preferences {
        instance.add_preference(p.course_name, p.period, p.room_name, p.teacher_name, p.value)?;
    }

    Ok(instance)
}

/// `name : num_students : course1, course2, …`
pub fn parse_curriculums(path: &Path) -> Result<Vec<ParsedCurriculum>> {
    let mut out = Vec::new();
    for (i, line) in read_lines(path)?.into_iter().enumerate() {
        let fields: Vec<&str> = line.split(':').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(text_error(i, "expected `name : num_students : courses`"));
        }
        let num_students: u32 = fields[1]
            .parse()
            .map_err(|_| text_error(i, "num_students must be an integer"))?;
        out.push(ParsedCurriculum {
            name: fields[0].to_string(),
            num_students,
            course_names: split_list(fields[2]),
        });
    }
    Ok(out)
}

/// `name : capacity`
pub fn parse_rooms(path: &Path) -> Result<Vec<ParsedRoom>> {
    let mut out = Vec::new();
    for (i, line) in read_lines(path)?.into_iter().enumerate() {
        let fields: Vec<&str> = line.split(':').map(str::trim).collect();
        if fields.len() != 2 {
            return Err(text_error(i, "expected `name : capacity`"));
        }
        let capacity: u32 = fields[1]
            .parse()
            .map_err(|_| text_error(i, "capacity must be an integer"))?;
        out.push(ParsedRoom {
            name: fields[0].to_string(),
            capacity,
        });
    }
    Ok(out)
}

/// `name : course1, course2, …`
pub fn parse_teachers(path: &Path) -> Result<Vec<ParsedTeacher>> {
    let mut out = Vec::new();
    for (i, line) in read_lines(path)?.into_iter().enumerate() {
        let fields: Vec<&str> = line.splitn(2, ':').map(str::trim).collect();
        if fields.len() != 2 {
            return Err(text_error(i, "expected `name : courses`"));
        }
        out.push(ParsedTeacher {
            name: fields[0].to_string(),
            qualified_courses: split_list(fields[1]),
        });
    }
    Ok(out)
}

/// `course | room | period-token | teacher | value`, where `period-token`
/// is either a bare integer or `Turno <int>`, and `room`/`teacher` may be
/// empty to mean "any".
pub fn parse_preferences(path: &Path) -> Result<Vec<Preference>> {
    let mut out = Vec::new();
    for (i, line) in read_lines(path)?.into_iter().enumerate() {
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() != 5 {
            return Err(text_error(i, "expected `course | room | period | teacher | value`"));
        }
        let period = parse_period_token(fields[2], i)?;
        let room_name = (!fields[1].is_empty()).then(|| fields[1].to_string());
        let teacher_name = (!fields[3].is_empty()).then(|| fields[3].to_string());
        let value: f64 = fields[4]
            .parse()
            .map_err(|_| text_error(i, "value must be a real number"))?;

        out.push(Preference {
            course_name: fields[0].to_string(),
            period,
            room_name,
            teacher_name,
            value,
        });
    }
    Ok(out)
}

fn parse_period_token(token: &str, line: usize) -> Result<Option<Period>> {
    if token.is_empty() {
        return Ok(None);
    }
    if let Ok(n) = token.parse::<u32>() {
        return Ok(Some(Period(n)));
    }
    if let Some(rest) = token.strip_prefix("Turno ").or_else(|| token.strip_prefix("turno ")) {
        let n: u32 = rest
            .trim()
            .parse()
            .map_err(|_| text_error(line, "malformed `Turno <int>` period token"))?;
        return Ok(Some(Period(n)));
    }
    Err(text_error(line, "period token must be an integer or `Turno <int>`"))
}

fn split_list(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn text_error(line: usize, message: &str) -> anyhow::Error {
    SchedulerError::TextParse {
        line: line + 1,
        message: message.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_turno_and_integer_period_tokens() {
        assert_eq!(parse_period_token("3", 0).unwrap(), Some(Period(3)));
        assert_eq!(parse_period_token("Turno 3", 0).unwrap(), Some(Period(3)));
        assert!(parse_period_token("nope", 0).is_err());
    }

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(split_list("A, B ,  , C"), vec!["A", "B", "C"]);
    }
}
