//! Reporting-tree management
//!
//! The tree is stored as a redundant bidirectional encoding: each agent
//! carries a `reports_to` back-reference and a `subordinates` forward list.
//! Every mutation of the edge set goes through this module so both sides are
//! written together; `validate` checks the invariant over a whole snapshot.

use cadre_core::{
    Agent, AgentDataStore, AgentId, AgentType, CadreConfig, CadreResult, HierarchyError,
    ValidationError,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Arguments for the add-agent command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddAgent {
    pub name: String,
    pub role: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    pub reports_to: Option<AgentId>,
}

/// Root agents (`reports_to = None`) in registry insertion order.
///
/// The order is deterministic: repeated calls over an unchanged snapshot
/// return the same sequence.
pub fn roots(store: &AgentDataStore) -> Vec<&Agent> {
    store.all().filter(|a| a.is_root()).collect()
}

/// Resolve an agent's direct reports.
///
/// Dangling subordinate ids (forward entries whose agent no longer exists)
/// are skipped, not errors - they reflect tolerable data drift.
pub fn subordinates<'a>(store: &'a AgentDataStore, id: &AgentId) -> Vec<&'a Agent> {
    let Some(agent) = store.get(id) else {
        return Vec::new();
    };
    agent
        .subordinates
        .iter()
        .filter_map(|sub| store.get(sub))
        .collect()
}

/// All agents below `id`, depth-first following `subordinates`.
///
/// The starting agent is not included. A seen-set guards the walk so corrupt
/// data with a cycle terminates instead of looping.
pub fn descendants<'a>(store: &'a AgentDataStore, id: &AgentId) -> Vec<&'a Agent> {
    let mut result = Vec::new();
    let mut seen: HashSet<&AgentId> = HashSet::new();
    let mut stack: Vec<&AgentId> = Vec::new();

    if let Some(start) = store.get(id) {
        seen.insert(&start.id);
        stack.extend(start.subordinates.iter().rev());
    }

    while let Some(next) = stack.pop() {
        if !seen.insert(next) {
            continue;
        }
        if let Some(agent) = store.get(next) {
            result.push(agent);
            stack.extend(agent.subordinates.iter().rev());
        }
    }

    result
}

/// Create a new agent and insert it into the reporting tree.
///
/// Allocates the next monotonic id, creates the agent with the standard
/// creation defaults, and - when a supervisor is given - writes both sides
/// of the new tree edge in this one place. Fails with `InvalidParent` when
/// `reports_to` does not resolve, and with a validation error when the name
/// or role is blank. Returns the new snapshot and the allocated id.
pub fn add_agent(
    store: &AgentDataStore,
    config: &CadreConfig,
    request: AddAgent,
) -> CadreResult<(AgentDataStore, AgentId)> {
    if request.name.trim().is_empty() {
        return Err(ValidationError::RequiredFieldMissing {
            field: "name".to_string(),
        }
        .into());
    }
    if request.role.trim().is_empty() {
        return Err(ValidationError::RequiredFieldMissing {
            field: "role".to_string(),
        }
        .into());
    }
    if let Some(parent) = &request.reports_to {
        if store.get(parent).is_none() {
            return Err(HierarchyError::InvalidParent { id: parent.clone() }.into());
        }
    }

    let mut next = store.clone();
    let id = next.allocate_agent_id();

    let mut agent = Agent::new(id.clone(), request.name, request.role, request.agent_type)
        .with_model(&config.default_model);

    if let Some(parent) = request.reports_to {
        agent = agent.with_supervisor(parent.clone());
        // Parent existence was checked against the same population above.
        if let Some(parent_agent) = next.agents.get_mut(&parent) {
            parent_agent.subordinates.push(id.clone());
        }
    }

    tracing::debug!(agent_id = %id, reports_to = ?agent.reports_to, "agent created");

    next.agents.insert(id.clone(), agent);
    next.recompute_metrics();
    Ok((next, id))
}

/// Check the tree invariant over a whole snapshot.
///
/// Holds when every `reports_to` target exists and lists the child exactly
/// once, every existing forward entry is mirrored by a back-reference, and
/// the parent chains are acyclic. Dangling forward entries are tolerated.
pub fn validate(store: &AgentDataStore) -> Result<(), HierarchyError> {
    for agent in store.all() {
        if let Some(parent_id) = &agent.reports_to {
            let Some(parent) = store.get(parent_id) else {
                return Err(HierarchyError::InvalidParent {
                    id: parent_id.clone(),
                });
            };
            let count = parent.subordinates.iter().filter(|s| **s == agent.id).count();
            match count {
                1 => {}
                0 => {
                    return Err(HierarchyError::MissingBackEdge {
                        parent: parent_id.clone(),
                        child: agent.id.clone(),
                    })
                }
                _ => {
                    return Err(HierarchyError::DuplicateChildEntry {
                        parent: parent_id.clone(),
                        child: agent.id.clone(),
                        count,
                    })
                }
            }
        }

        for child_id in &agent.subordinates {
            if let Some(child) = store.get(child_id) {
                if child.reports_to.as_ref() != Some(&agent.id) {
                    return Err(HierarchyError::ForeignChildEntry {
                        parent: agent.id.clone(),
                        child: child_id.clone(),
                    });
                }
            }
        }
    }

    // Acyclicity: walk each parent chain; a repeat within one walk is a cycle.
    for agent in store.all() {
        let mut seen: HashSet<&AgentId> = HashSet::new();
        let mut current = agent;
        while let Some(parent_id) = &current.reports_to {
            if !seen.insert(&current.id) {
                return Err(HierarchyError::CycleDetected {
                    ids: seen.into_iter().cloned().collect(),
                });
            }
            match store.get(parent_id) {
                Some(parent) => current = parent,
                None => break,
            }
        }
    }

    Ok(())
}
