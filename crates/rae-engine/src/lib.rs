#![deny(unsafe_code)]

pub mod error;
pub mod history;
pub mod planner;
pub mod score;
pub mod session;
pub mod store;
pub mod workload;

pub use error::{EngineError, Result};
pub use history::CommandHistory;
pub use planner::{MatchPlan, PlannedAssignment, plan_auto_assignment, plan_auto_assignment_with};
pub use score::{
    AVAILABILITY_WEIGHT, DOMAIN_WEIGHT, HISTORY_WEIGHT, LANGUAGE_WEIGHT, ScoreBreakdown, score,
    score_all, score_detailed,
};
pub use session::PlanningSession;
pub use store::AssignmentStore;
pub use workload::compute_workloads;
