//! Instance snapshot persistence (a feature the textual format alone
//! cannot express — full room/teacher availability, already-computed
//! sections, and in-progress assignments), in the teacher's
//! `load_json_file` idiom.

use crate::error::{Result, SchedulerError};
use crate::types::Instance;
use std::fs;
use std::path::Path;

pub fn load_instance_snapshot(path: &Path) -> Result<Instance> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| SchedulerError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| {
        SchedulerError::JsonParse {
            file: path_str,
            message: e.to_string(),
        }
        .into()
    })
}

pub fn save_instance_snapshot(instance: &Instance, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(instance)?;
    fs::write(path, json).map_err(|e| {
        SchedulerError::FileRead {
            path: path.display().to_string(),
            source: e,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Period;

    #[test]
    fn round_trips_through_json() {
        let mut inst = Instance::new();
        inst.add_curriculum("C1", 10, &["A".to_string()]).unwrap();
        inst.add_room("R1", 20, &[Period(1)]).unwrap();
        inst.add_teacher("T1", &["A".to_string()], &[Period(1)]).unwrap();
        inst.create_course_sections().unwrap();

        let dir = std::env::temp_dir();
        let path = dir.join(format!("cb_ctt_snapshot_test_{}.json", std::process::id()));
        save_instance_snapshot(&inst, &path).unwrap();

        let buf = fs::read_to_string(&path).unwrap();
        assert!(buf.contains("\"C1\""));

        let loaded = load_instance_snapshot(&path).unwrap();
        assert_eq!(loaded.sections().len(), inst.sections().len());

        let _ = fs::remove_file(&path);
    }
}
