//! Derived per-referent capacity record.

use serde::{Deserialize, Serialize};

/// Capacity percentage at which a referent counts as at capacity.
pub const AT_CAPACITY_PERCENTAGE: f64 = 80.0;
/// Capacity percentage at which a referent counts as overloaded.
pub const OVERLOAD_PERCENTAGE: f64 = 100.0;

/// A referent's current vs. maximum assigned-student count with derived
/// capacity flags.
///
/// Workloads are recomputed from the assignment state on every mutation
/// and never cached across renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    pub current_students: u32,
    pub max_students: u32,
    pub capacity_percentage: f64,
    pub is_at_capacity: bool,
    pub is_overloaded: bool,
}

impl Workload {
    /// Derive a workload record. A `max_students` of zero is clamped to 1
    /// so the percentage stays finite; the roster default of 10 applies
    /// only to an absent field, not an explicit zero.
    pub fn new(current_students: u32, max_students: u32) -> Self {
        let max_students = max_students.max(1);
        let capacity_percentage = f64::from(current_students) / f64::from(max_students) * 100.0;
        Self {
            current_students,
            max_students,
            capacity_percentage,
            is_at_capacity: capacity_percentage >= AT_CAPACITY_PERCENTAGE,
            is_overloaded: capacity_percentage >= OVERLOAD_PERCENTAGE,
        }
    }

    /// Open seats before the hard capacity limit; zero when overloaded.
    pub fn remaining(&self) -> u32 {
        self.max_students.saturating_sub(self.current_students)
    }

    /// True if one more student still fits under `max_students`.
    pub fn has_room(&self) -> bool {
        self.current_students < self.max_students
    }
}
