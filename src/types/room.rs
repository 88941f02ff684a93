use super::{Period, RoomId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A physical room, usable only in its availability set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub availability: BTreeSet<Period>,
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
            availability: BTreeSet::new(),
        }
    }
}
