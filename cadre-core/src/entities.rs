//! Core entity structures
//!
//! The shapes here are the persisted-state contract: a snapshot must
//! round-trip exactly through the persistence collaborator. Mutation happens
//! only in cadre-engine, and always copy-on-write - commands take a snapshot
//! by reference and return a brand-new one.

use crate::{
    catalog, AgentId, AgentStatus, AgentType, DepartmentId, HistoryEvent, Timestamp,
    ValidationError,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use indexmap::IndexMap;

// ============================================================================
// PERFORMANCE
// ============================================================================

/// The three bounded performance scores, each 0-100.
///
/// Semantically undefined (held at zero) while an agent is onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PerformanceScores {
    pub efficiency: u8,
    pub accuracy: u8,
    pub satisfaction: u8,
}

impl PerformanceScores {
    /// Create a new score triple.
    pub fn new(efficiency: u8, accuracy: u8, satisfaction: u8) -> Self {
        Self {
            efficiency,
            accuracy,
            satisfaction,
        }
    }

    /// The onboarding placeholder: all zeroes.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Check that every score is within 0-100.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("efficiency", self.efficiency),
            ("accuracy", self.accuracy),
            ("satisfaction", self.satisfaction),
        ] {
            if value > 100 {
                return Err(ValidationError::ScoreOutOfRange {
                    field,
                    value: value as u16,
                });
            }
        }
        Ok(())
    }

    /// Arithmetic mean of the three scores.
    pub fn composite(&self) -> f64 {
        (self.efficiency as f64 + self.accuracy as f64 + self.satisfaction as f64) / 3.0
    }
}

// ============================================================================
// HISTORY
// ============================================================================

/// One entry in an agent's append-only history.
///
/// Insertion order is the order events were applied, which is NOT guaranteed
/// to match the order of the `date` values (clock skew in imported data is
/// tolerated). Any chronological view must re-sort by `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HistoryEntry {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub date: Timestamp,
    pub event: HistoryEvent,
    pub details: String,
}

impl HistoryEntry {
    /// Create an entry with an explicit date.
    pub fn new(date: Timestamp, event: HistoryEvent, details: impl Into<String>) -> Self {
        Self {
            date,
            event,
            details: details.into(),
        }
    }

    /// Create an entry dated now.
    pub fn record(event: HistoryEvent, details: impl Into<String>) -> Self {
        Self::new(Utc::now(), event, details)
    }
}

// ============================================================================
// AGENT
// ============================================================================

/// An agent in the workforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Agent {
    /// Unique identifier, assigned at creation, never reused
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub id: AgentId,
    /// Display name
    pub name: String,
    /// Role title, free text
    pub role: String,
    /// Functional classification
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    /// Lifecycle status
    pub status: AgentStatus,
    /// Seniority level, 1-5; raised only by an explicit promotion
    pub level: u8,
    /// Capability tags, order-irrelevant
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub capabilities: BTreeSet<String>,
    /// Current performance scores
    pub performance: PerformanceScores,
    /// Held permission ids, drawn from the fixed catalog
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub permissions: BTreeSet<String>,
    /// Supervisor, or None for a root of the reporting forest
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub reports_to: Option<AgentId>,
    /// Direct reports; kept consistent with `reports_to` on every mutation
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub subordinates: Vec<AgentId>,
    /// Creation instant, immutable
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    /// Set only by a completed review
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub last_review: Option<Timestamp>,
    /// Identifier of the underlying automation; opaque to the core
    pub model: String,
    /// Append-only event history
    pub history: Vec<HistoryEntry>,
}

impl Agent {
    /// Create a new agent with the creation defaults: onboarding status,
    /// level 1, zero performance, the basic-access grant, and an initial
    /// deployment history entry.
    pub fn new(
        id: AgentId,
        name: impl Into<String>,
        role: impl Into<String>,
        agent_type: AgentType,
    ) -> Self {
        let role = role.into();
        let deployed = format!("Initial deployment as {}", role);
        Self {
            id,
            name: name.into(),
            role,
            agent_type,
            status: AgentStatus::Onboarding,
            level: 1,
            capabilities: BTreeSet::new(),
            performance: PerformanceScores::zero(),
            permissions: BTreeSet::from([catalog::BASIC_ACCESS.to_string()]),
            reports_to: None,
            subordinates: Vec::new(),
            created_at: Utc::now(),
            last_review: None,
            model: String::new(),
            history: vec![HistoryEntry::record(HistoryEvent::Onboarding, deployed)],
        }
    }

    /// Set the supervisor back-reference. The forward edge in the parent's
    /// `subordinates` is the hierarchy manager's responsibility.
    pub fn with_supervisor(mut self, supervisor: AgentId) -> Self {
        self.reports_to = Some(supervisor);
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Add a capability tag.
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    /// Check if the agent holds a permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Check if the agent has a capability tag.
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// Check if the agent is a root of the reporting forest.
    pub fn is_root(&self) -> bool {
        self.reports_to.is_none()
    }

    /// Human-readable label for the agent's level.
    pub fn level_label(&self) -> &'static str {
        match self.level {
            1 => "Entry Level",
            2 => "Junior Level",
            3 => "Mid Level",
            4 => "Senior Level",
            5 => "Executive Level",
            _ => "Unknown Level",
        }
    }
}

// ============================================================================
// DEPARTMENT
// ============================================================================

/// A department record: a named grouping with a head and a member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Department {
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub id: DepartmentId,
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub head: AgentId,
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub members: Vec<AgentId>,
}

// ============================================================================
// METRICS
// ============================================================================

/// Workforce-wide aggregate metrics.
///
/// This block is fully derived from the agent map and cached in the
/// snapshot; `compute` is the single definition of the derivation. Averages
/// run over active agents only and are 0.0 when there are none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WorkforceMetrics {
    pub total_agents: usize,
    pub active_agents: usize,
    pub efficiency_avg: f64,
    pub accuracy_avg: f64,
    pub satisfaction_avg: f64,
}

impl WorkforceMetrics {
    /// Recompute the full block from an agent population.
    pub fn compute<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> Self {
        let mut total = 0usize;
        let mut active = 0usize;
        let mut efficiency = 0u64;
        let mut accuracy = 0u64;
        let mut satisfaction = 0u64;

        for agent in agents {
            total += 1;
            if agent.status.counts_toward_averages() {
                active += 1;
                efficiency += agent.performance.efficiency as u64;
                accuracy += agent.performance.accuracy as u64;
                satisfaction += agent.performance.satisfaction as u64;
            }
        }

        let avg = |sum: u64| {
            if active == 0 {
                0.0
            } else {
                sum as f64 / active as f64
            }
        };

        Self {
            total_agents: total,
            active_agents: active,
            efficiency_avg: avg(efficiency),
            accuracy_avg: avg(accuracy),
            satisfaction_avg: avg(satisfaction),
        }
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// The complete persisted snapshot: the agent registry, department records,
/// cached derived metrics, and the id allocation counter.
///
/// The agent map preserves insertion order, which is the registry's
/// deterministic iteration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AgentDataStore {
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub agents: IndexMap<AgentId, Agent>,
    pub departments: Vec<Department>,
    pub metrics: WorkforceMetrics,
    /// Monotonic id counter; only ever increases, so ids are never reused
    /// even across hypothetical future deletions
    #[serde(default)]
    pub next_agent_seq: u64,
}

impl AgentDataStore {
    /// An empty snapshot with the counter at its starting position.
    pub fn empty() -> Self {
        Self {
            next_agent_seq: 1,
            ..Self::default()
        }
    }

    /// Look up an agent by id.
    pub fn get(&self, id: &AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Immutable registry update: returns a new snapshot with one entry
    /// replaced or added. The receiver is untouched.
    #[must_use]
    pub fn put(&self, agent: Agent) -> Self {
        let mut next = self.clone();
        next.agents.insert(agent.id.clone(), agent);
        next
    }

    /// All agents in registry insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    /// Number of agents in the registry.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Allocate the next agent id and advance the counter.
    ///
    /// The counter is healed upward first, so snapshots written by older
    /// code (which derived ids from population size) can never hand out an
    /// id that is already present.
    pub fn allocate_agent_id(&mut self) -> AgentId {
        self.heal_id_counter();
        let id = AgentId::from_seq(self.next_agent_seq);
        self.next_agent_seq += 1;
        id
    }

    /// Raise the id counter above every canonical id already present.
    pub fn heal_id_counter(&mut self) {
        let highest = self.agents.keys().filter_map(AgentId::seq).max();
        let floor = highest.map_or(1, |h| h + 1);
        if self.next_agent_seq < floor {
            self.next_agent_seq = floor;
        }
    }

    /// Recompute the cached metrics block from the agent map.
    pub fn recompute_metrics(&mut self) {
        self.metrics = WorkforceMetrics::compute(self.agents.values());
    }
}

// ============================================================================
// TESTS
// ============================================================================
