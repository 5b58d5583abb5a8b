//! CADRE Test Utilities
//!
//! Centralized test infrastructure for the CADRE workspace:
//! - Agent and store fixtures with the tree edges wired consistently
//! - Proptest generators for scores, permission sets, and valid forests
//!
//! Fixture stores always satisfy the hierarchy invariant and carry freshly
//! computed metrics, so tests start from a valid snapshot by construction.

// Re-export the seed population and mock store from their source crate
pub use cadre_storage::{seed, MemoryStore};

use cadre_core::{Agent, AgentDataStore, AgentId, AgentStatus, AgentType, PerformanceScores};

/// An active agent fixture with deterministic fields.
///
/// `reports_to` takes the parent's sequence number; the forward edge is
/// wired by [`store_with`].
pub fn test_agent(seq: u64, reports_to: Option<u64>) -> Agent {
    let mut agent = Agent::new(
        AgentId::from_seq(seq),
        format!("Agent {:03}", seq),
        "Test Specialist",
        AgentType::Operational,
    )
    .with_model("test-model");
    agent.status = AgentStatus::Active;
    agent.performance = PerformanceScores::new(80, 85, 90);
    agent.reports_to = reports_to.map(AgentId::from_seq);
    agent
}

/// A root agent fixture in the given lifecycle status.
///
/// Onboarding fixtures keep the zeroed performance placeholder; all others
/// carry the standard fixture scores.
pub fn test_agent_with_status(seq: u64, status: AgentStatus) -> Agent {
    let mut agent = test_agent(seq, None);
    agent.status = status;
    if status == AgentStatus::Onboarding {
        agent.performance = PerformanceScores::zero();
    }
    agent
}

/// Build a snapshot from agents, wiring forward tree edges from the
/// `reports_to` back-references and recomputing the metrics block.
pub fn store_with(agents: Vec<Agent>) -> AgentDataStore {
    let mut store = AgentDataStore::empty();
    for agent in agents {
        store.agents.insert(agent.id.clone(), agent);
    }

    let edges: Vec<(AgentId, AgentId)> = store
        .agents
        .values()
        .filter_map(|a| a.reports_to.clone().map(|parent| (parent, a.id.clone())))
        .collect();
    for (parent, child) in edges {
        if let Some(parent_agent) = store.agents.get_mut(&parent) {
            if !parent_agent.subordinates.contains(&child) {
                parent_agent.subordinates.push(child);
            }
        }
    }

    store.heal_id_counter();
    store.recompute_metrics();
    store
}

pub mod strategies {
    //! Proptest generators.

    use super::*;
    use cadre_core::PERMISSION_CATALOG;
    use proptest::prelude::*;

    /// Any in-range score triple.
    pub fn performance_scores() -> impl Strategy<Value = PerformanceScores> {
        (0u8..=100, 0u8..=100, 0u8..=100)
            .prop_map(|(e, a, s)| PerformanceScores::new(e, a, s))
    }

    /// A small selection of catalog permission ids (duplicates allowed;
    /// permission sets deduplicate on insert).
    pub fn permission_ids() -> impl Strategy<Value = Vec<&'static str>> {
        let ids: Vec<&'static str> = PERMISSION_CATALOG.iter().map(|p| p.id).collect();
        prop::collection::vec(prop::sample::select(ids), 0..=6)
    }

    /// Any lifecycle status.
    pub fn agent_status() -> impl Strategy<Value = AgentStatus> {
        prop::sample::select(vec![
            AgentStatus::Onboarding,
            AgentStatus::Active,
            AgentStatus::Review,
            AgentStatus::Inactive,
        ])
    }

    /// A snapshot of 1..=max_agents agents forming a valid forest.
    ///
    /// Parents are always drawn from earlier agents, so the relation is
    /// acyclic by construction; [`store_with`] wires the forward edges.
    pub fn agent_forest(max_agents: usize) -> impl Strategy<Value = AgentDataStore> {
        (1..=max_agents).prop_flat_map(|n| {
            let parents =
                prop::collection::vec(proptest::option::of(any::<prop::sample::Index>()), n);
            let statuses = prop::collection::vec(agent_status(), n);
            let scores = prop::collection::vec(performance_scores(), n);
            (parents, statuses, scores).prop_map(move |(parents, statuses, scores)| {
                let mut agents = Vec::with_capacity(n);
                for i in 0..n {
                    let seq = (i + 1) as u64;
                    let parent = if i == 0 {
                        None
                    } else {
                        parents[i].as_ref().map(|ix| (ix.index(i) + 1) as u64)
                    };
                    let mut agent = test_agent(seq, parent);
                    agent.status = statuses[i];
                    agent.performance = if agent.status == AgentStatus::Onboarding {
                        PerformanceScores::zero()
                    } else {
                        scores[i]
                    };
                    agents.push(agent);
                }
                store_with(agents)
            })
        })
    }
}
