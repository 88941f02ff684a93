use serde::{Deserialize, Serialize};
use std::fmt;

/// An indivisible time slot. No intra-period structure (day/hour split) is
/// modeled; callers that want one encode it into the integer themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period(pub u32);

impl Period {
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
