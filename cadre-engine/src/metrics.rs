//! Derived workforce metrics
//!
//! On-demand projections over a snapshot. The cached averages live in
//! `WorkforceMetrics` (cadre-core) and are recomputed by the commands;
//! everything here is computed fresh from the agent map when asked.

use cadre_core::{Agent, AgentDataStore, AgentId, AgentStatus};
use serde::{Deserialize, Serialize};

/// Agent counts per lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatusBreakdown {
    pub active: usize,
    pub onboarding: usize,
    pub review: usize,
    pub inactive: usize,
}

/// One row of the top-performers ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub agent_id: AgentId,
    pub name: String,
    pub role: String,
    /// Mean of the three performance scores
    pub composite: f64,
}

/// Count agents per lifecycle status.
pub fn status_breakdown(store: &AgentDataStore) -> StatusBreakdown {
    let mut breakdown = StatusBreakdown::default();
    for agent in store.all() {
        match agent.status {
            AgentStatus::Active => breakdown.active += 1,
            AgentStatus::Onboarding => breakdown.onboarding += 1,
            AgentStatus::Review => breakdown.review += 1,
            AgentStatus::Inactive => breakdown.inactive += 1,
        }
    }
    breakdown
}

/// Active agents ranked by composite score, best first.
///
/// The sort is stable: agents with equal composites keep their registry
/// order. At most `limit` rows are returned.
pub fn top_performers(store: &AgentDataStore, limit: usize) -> Vec<TopPerformer> {
    let mut ranked: Vec<&Agent> = store
        .all()
        .filter(|a| a.status == AgentStatus::Active)
        .collect();
    ranked.sort_by(|a, b| {
        b.performance
            .composite()
            .partial_cmp(&a.performance.composite())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|a| TopPerformer {
            agent_id: a.id.clone(),
            name: a.name.clone(),
            role: a.role.clone(),
            composite: a.performance.composite(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadre_core::PerformanceScores;
    use cadre_test_utils::{store_with, test_agent, test_agent_with_status};

    #[test]
    fn test_status_breakdown_counts() {
        let store = store_with(vec![
            test_agent(1, None),
            test_agent(2, None),
            test_agent_with_status(3, AgentStatus::Onboarding),
            test_agent_with_status(4, AgentStatus::Review),
            test_agent_with_status(5, AgentStatus::Inactive),
        ]);
        let b = status_breakdown(&store);
        assert_eq!(b.active, 2);
        assert_eq!(b.onboarding, 1);
        assert_eq!(b.review, 1);
        assert_eq!(b.inactive, 1);
    }

    #[test]
    fn test_top_performers_ranked_descending() {
        let mut store = store_with(vec![test_agent(1, None), test_agent(2, None), test_agent(3, None)]);
        store
            .agents
            .get_mut(&AgentId::from_seq(1))
            .unwrap()
            .performance = PerformanceScores::new(60, 60, 60);
        store
            .agents
            .get_mut(&AgentId::from_seq(2))
            .unwrap()
            .performance = PerformanceScores::new(95, 95, 95);
        store
            .agents
            .get_mut(&AgentId::from_seq(3))
            .unwrap()
            .performance = PerformanceScores::new(80, 80, 80);

        let top = top_performers(&store, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].agent_id, AgentId::from_seq(2));
        assert_eq!(top[1].agent_id, AgentId::from_seq(3));
        assert!((top[0].composite - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_top_performers_ties_keep_registry_order() {
        let store = store_with(vec![test_agent(1, None), test_agent(2, None)]);
        // Both fixtures share the same scores.
        let top = top_performers(&store, 10);
        assert_eq!(top[0].agent_id, AgentId::from_seq(1));
        assert_eq!(top[1].agent_id, AgentId::from_seq(2));
    }

    #[test]
    fn test_top_performers_exclude_non_active() {
        let store = store_with(vec![
            test_agent_with_status(1, AgentStatus::Review),
            test_agent(2, None),
        ]);
        let top = top_performers(&store, 10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].agent_id, AgentId::from_seq(2));
    }
}
