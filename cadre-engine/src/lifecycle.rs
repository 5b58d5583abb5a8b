//! Lifecycle state machine
//!
//! States: `onboarding -> active -> review -> active` (the review loop).
//! `inactive` is stored data only; no command produces it and none leads out
//! of it. Each command checks its precondition, applies all of its side
//! effects to a copy of the snapshot, recomputes the cached metrics, and
//! returns the copy. A rejected command leaves the caller's snapshot as the
//! unchanged current state.

use cadre_core::{
    catalog, AgentDataStore, AgentId, AgentStatus, CadreConfig, CadreError, CadreResult,
    HistoryEntry, HistoryEvent, LifecycleError, PerformanceScores, RegistryError, ReviewAction,
    ValidationError,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Arguments for the submit-review command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    pub scores: PerformanceScores,
    pub notes: String,
    pub action: ReviewAction,
}

/// A single permission grant or revocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionChange {
    Grant(String),
    Revoke(String),
}

fn not_found(id: &AgentId) -> CadreError {
    RegistryError::NotFound { id: id.clone() }.into()
}

fn invalid_transition(id: &AgentId, status: AgentStatus, command: &'static str) -> CadreError {
    LifecycleError::InvalidTransition {
        id: id.clone(),
        status,
        command,
    }
    .into()
}

/// Transition an onboarding agent to active.
///
/// Assigns the configured baseline performance and appends an
/// `onboarding_completed` history entry. Precondition: status is
/// `onboarding`.
pub fn complete_onboarding(
    store: &AgentDataStore,
    config: &CadreConfig,
    id: &AgentId,
) -> CadreResult<AgentDataStore> {
    let mut next = store.clone();
    let Some(agent) = next.agents.get_mut(id) else {
        return Err(not_found(id));
    };
    if agent.status != AgentStatus::Onboarding {
        return Err(invalid_transition(id, agent.status, "complete_onboarding"));
    }

    agent.status = AgentStatus::Active;
    agent.performance = config.onboarding_baseline;
    agent.history.push(HistoryEntry::record(
        HistoryEvent::OnboardingCompleted,
        "Agent successfully completed onboarding process",
    ));

    next.recompute_metrics();
    tracing::debug!(agent_id = %id, "onboarding completed");
    Ok(next)
}

/// Place an active agent into review.
///
/// Performance and level are unchanged. Precondition: status is `active`.
pub fn initiate_review(store: &AgentDataStore, id: &AgentId) -> CadreResult<AgentDataStore> {
    let mut next = store.clone();
    let Some(agent) = next.agents.get_mut(id) else {
        return Err(not_found(id));
    };
    if agent.status != AgentStatus::Active {
        return Err(invalid_transition(id, agent.status, "initiate_review"));
    }

    agent.status = AgentStatus::Review;
    agent.history.push(HistoryEntry::record(
        HistoryEvent::ReviewStarted,
        "Agent placed in review for performance evaluation",
    ));

    next.recompute_metrics();
    tracing::debug!(agent_id = %id, "review started");
    Ok(next)
}

/// Complete a review: record scores, return the agent to active.
///
/// Sets `last_review`, replaces the performance scores with the submitted
/// ones, and - for a `promote` action below the level cap - raises the
/// level by one. Promotion at the cap is a recorded no-op, not an error.
/// Precondition: status is `review`; scores must be within 0-100.
pub fn submit_review(
    store: &AgentDataStore,
    config: &CadreConfig,
    id: &AgentId,
    submission: ReviewSubmission,
) -> CadreResult<AgentDataStore> {
    submission.scores.validate()?;

    let mut next = store.clone();
    let Some(agent) = next.agents.get_mut(id) else {
        return Err(not_found(id));
    };
    if agent.status != AgentStatus::Review {
        return Err(invalid_transition(id, agent.status, "submit_review"));
    }

    agent.status = AgentStatus::Active;
    agent.performance = submission.scores;
    agent.last_review = Some(Utc::now());

    if submission.action == ReviewAction::Promote && agent.level < config.max_level {
        agent.level += 1;
    }
    let level = agent.level;

    let mut details = format!(
        "Performance review conducted with {}",
        submission.action.summary()
    );
    let notes = submission.notes.trim();
    if !notes.is_empty() {
        details.push_str("; notes: ");
        details.push_str(notes);
    }
    agent
        .history
        .push(HistoryEntry::record(HistoryEvent::PerformanceReview, details));

    next.recompute_metrics();
    tracing::debug!(agent_id = %id, action = %submission.action, level, "review submitted");
    Ok(next)
}

/// Grant or revoke one permission.
///
/// Orthogonal to the lifecycle: valid in any status. The set operation is
/// idempotent - granting a held permission or revoking an absent one leaves
/// the set unchanged - but every application appends a history entry, so the
/// audit log records the attempt either way. The permission id must exist in
/// the catalog.
pub fn update_permission(
    store: &AgentDataStore,
    id: &AgentId,
    change: PermissionChange,
) -> CadreResult<AgentDataStore> {
    let permission = match &change {
        PermissionChange::Grant(p) | PermissionChange::Revoke(p) => p.as_str(),
    };
    if catalog::lookup(permission).is_none() {
        return Err(ValidationError::UnknownPermission {
            id: permission.to_string(),
        }
        .into());
    }

    let mut next = store.clone();
    let Some(agent) = next.agents.get_mut(id) else {
        return Err(not_found(id));
    };
    let (event, details) = match change {
        PermissionChange::Grant(p) => {
            agent.permissions.insert(p.clone());
            (HistoryEvent::PermissionAdded, format!("Added permission: {}", p))
        }
        PermissionChange::Revoke(p) => {
            agent.permissions.remove(&p);
            (
                HistoryEvent::PermissionRemoved,
                format!("Removed permission: {}", p),
            )
        }
    };
    agent.history.push(HistoryEntry::record(event, details));

    tracing::debug!(agent_id = %id, event = %event, "permission updated");
    Ok(next)
}
