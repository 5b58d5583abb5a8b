//! CADRE Engine - Workforce Commands
//!
//! Command handlers over the snapshot types in cadre-core:
//! - Hierarchy management (roots, traversal, agent insertion, validation)
//! - Lifecycle transitions (onboarding, review, permissions)
//! - Derived metrics and governance (risk ratings, compliance, audit log)
//!
//! Every command is a pure function from (snapshot, arguments) to a new
//! snapshot. The input snapshot is never mutated; on error the caller's
//! snapshot is still the valid current state. Commands that can change
//! status or performance recompute the cached metrics block before
//! returning, so a returned snapshot is always internally consistent.

pub mod governance;
pub mod hierarchy;
pub mod lifecycle;
pub mod metrics;

pub use governance::{
    audit_log, audit_log_recent, compliance_score, risk_distribution, risk_rating, search_agents,
    AuditEntry, RiskDistribution,
};
pub use hierarchy::{add_agent, descendants, roots, subordinates, validate, AddAgent};
pub use lifecycle::{
    complete_onboarding, initiate_review, submit_review, update_permission, PermissionChange,
    ReviewSubmission,
};
pub use metrics::{status_breakdown, top_performers, StatusBreakdown, TopPerformer};
