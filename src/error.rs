use thiserror::Error;

/// Errors raised while registering, loading or parsing a timetabling
/// instance. Constraint violations, search failure and repair
/// non-convergence are never raised here — they are returned as data
/// (see `constraint` and `solver`), per the error-handling design.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in '{file}': {message}")]
    JsonParse { file: String, message: String },

    #[error("Failed to parse text input at line {line}: {message}")]
    TextParse { line: usize, message: String },

    #[error("Unknown curriculum '{0}'")]
    UnknownCurriculum(String),

    #[error("Unknown course '{0}'")]
    UnknownCourse(String),

    #[error("Unknown room '{0}'")]
    UnknownRoom(String),

    #[error("Unknown teacher '{0}'")]
    UnknownTeacher(String),

    #[error("Unknown section id {0}")]
    UnknownSection(u32),

    #[error("Duplicate {kind} name: '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error("create_course_sections() called with zero rooms registered")]
    NoRooms,

    #[error("create_course_sections() called more than once")]
    SectionsAlreadyCreated,
}

/// Use anyhow::Result at application boundaries, matching the
/// fatal/non-fatal split described in the error-handling design.
pub type Result<T> = anyhow::Result<T>;
