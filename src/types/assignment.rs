use super::{Period, RoomId, SectionId, TeacherId};
use serde::{Deserialize, Serialize};

/// A placement of one section into a (period, room, teacher) slot. The
/// canonical record shared by every solver — hoisted here rather than
/// declared ad hoc inside each routine (per the design notes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub section_id: SectionId,
    pub period: Period,
    pub room_id: RoomId,
    pub teacher_id: TeacherId,
}

impl Assignment {
    pub fn new(section_id: SectionId, period: Period, room_id: RoomId, teacher_id: TeacherId) -> Self {
        Self {
            section_id,
            period,
            room_id,
            teacher_id,
        }
    }
}
