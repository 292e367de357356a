//! Workload derivation from the current assignment state.

use std::collections::BTreeMap;

use tracing::warn;

use rae_model::{AssignmentState, Referent, ReferentId, Workload};

/// Derive a [`Workload`] for every referent in the input, including those
/// with zero assignments. Referents absent from `state` simply count zero
/// current students. Pure and O(students + referents).
pub fn compute_workloads<'a>(
    referents: impl IntoIterator<Item = &'a Referent>,
    state: &AssignmentState,
) -> BTreeMap<ReferentId, Workload> {
    let mut workloads = BTreeMap::new();
    for referent in referents {
        let current = state.assigned_count(&referent.id) as u32;
        let workload = Workload::new(current, referent.max_students);
        if workload.is_overloaded {
            // Manual overrides may overload a referent; surface it so the
            // UI can badge the column.
            warn!(
                referent = %referent.id,
                current = workload.current_students,
                max = workload.max_students,
                "referent overloaded"
            );
        }
        workloads.insert(referent.id.clone(), workload);
    }
    workloads
}
