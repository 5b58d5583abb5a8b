//! Risk ratings, compliance scoring, and the audit projection
//!
//! All pure, on-demand computations; nothing here is cached in the snapshot.
//! Permissions are descriptive labels - the risk model classifies them, it
//! does not enforce them.

use cadre_core::{
    catalog, Agent, AgentDataStore, AgentId, CadreConfig, HistoryEvent, RiskLevel, Timestamp,
};
use serde::{Deserialize, Serialize};

/// Agent counts per risk rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RiskDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// One row of the flattened, owner-tagged audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub agent_id: AgentId,
    pub agent_name: String,
    pub date: Timestamp,
    pub event: HistoryEvent,
    pub details: String,
}

/// Risk rating of a single agent, derived from its held permissions.
///
/// `full_access` and `compliance_override` force `High` on their own;
/// otherwise the rating is the highest catalog risk among held permissions.
/// Ids unknown to the catalog contribute nothing.
pub fn risk_rating(agent: &Agent) -> RiskLevel {
    if agent.has_permission(catalog::FULL_ACCESS)
        || agent.has_permission(catalog::COMPLIANCE_OVERRIDE)
    {
        return RiskLevel::High;
    }

    agent
        .permissions
        .iter()
        .filter_map(|p| catalog::lookup(p))
        .map(|def| def.risk)
        .max()
        .unwrap_or(RiskLevel::Low)
}

/// Count agents per risk rating.
pub fn risk_distribution(store: &AgentDataStore) -> RiskDistribution {
    let mut distribution = RiskDistribution::default();
    for agent in store.all() {
        match risk_rating(agent) {
            RiskLevel::High => distribution.high += 1,
            RiskLevel::Medium => distribution.medium += 1,
            RiskLevel::Low => distribution.low += 1,
        }
    }
    distribution
}

/// Organization-wide compliance score.
///
/// `100` minus a penalty per high-risk agent and a penalty per agent holding
/// a compliance override, floored at `config.compliance_floor` so the score
/// never signals total failure. Monotonically non-increasing as overrides
/// are granted.
pub fn compliance_score(store: &AgentDataStore, config: &CadreConfig) -> u32 {
    let high_risk = store
        .all()
        .filter(|a| risk_rating(a) == RiskLevel::High)
        .count() as i64;
    let overrides = store
        .all()
        .filter(|a| a.has_permission(catalog::COMPLIANCE_OVERRIDE))
        .count() as i64;

    let raw = 100
        - config.high_risk_penalty as i64 * high_risk
        - config.override_penalty as i64 * overrides;
    raw.max(config.compliance_floor as i64) as u32
}

/// Flatten every agent's history into one owner-tagged log, newest first.
///
/// Sorted by the `date` field, not by insertion order - imported data may
/// carry clock skew. The sort is stable: entries with the same date keep
/// their flatten order (registry order, then per-agent history order).
pub fn audit_log(store: &AgentDataStore) -> Vec<AuditEntry> {
    let mut log: Vec<AuditEntry> = store
        .all()
        .flat_map(|agent| {
            agent.history.iter().map(|entry| AuditEntry {
                agent_id: agent.id.clone(),
                agent_name: agent.name.clone(),
                date: entry.date,
                event: entry.event,
                details: entry.details.clone(),
            })
        })
        .collect();
    log.sort_by(|a, b| b.date.cmp(&a.date));
    log
}

/// The `limit` newest audit entries.
pub fn audit_log_recent(store: &AgentDataStore, limit: usize) -> Vec<AuditEntry> {
    let mut log = audit_log(store);
    log.truncate(limit);
    log
}

/// Case-insensitive substring search over agent names and roles.
pub fn search_agents<'a>(store: &'a AgentDataStore, query: &str) -> Vec<&'a Agent> {
    let needle = query.to_lowercase();
    store
        .all()
        .filter(|a| {
            a.name.to_lowercase().contains(&needle) || a.role.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{update_permission, PermissionChange};
    use cadre_core::HistoryEntry;
    use cadre_test_utils::{store_with, test_agent};
    use chrono::{Duration, Utc};

    fn grant(store: &AgentDataStore, seq: u64, permission: &str) -> AgentDataStore {
        update_permission(
            store,
            &AgentId::from_seq(seq),
            PermissionChange::Grant(permission.to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_risk_rating_override_forces_high() {
        let store = store_with(vec![test_agent(1, None)]);
        let store = grant(&store, 1, "compliance_override");
        assert_eq!(risk_rating(store.get(&AgentId::from_seq(1)).unwrap()), RiskLevel::High);
    }

    #[test]
    fn test_risk_rating_follows_highest_catalog_risk() {
        let store = store_with(vec![test_agent(1, None)]);
        // basic_access only: low.
        assert_eq!(risk_rating(store.get(&AgentId::from_seq(1)).unwrap()), RiskLevel::Low);

        let store = grant(&store, 1, "audit_access");
        assert_eq!(
            risk_rating(store.get(&AgentId::from_seq(1)).unwrap()),
            RiskLevel::Medium
        );

        let store = grant(&store, 1, "strategy");
        assert_eq!(risk_rating(store.get(&AgentId::from_seq(1)).unwrap()), RiskLevel::High);
    }

    #[test]
    fn test_risk_rating_ignores_unknown_ids() {
        let mut store = store_with(vec![test_agent(1, None)]);
        store
            .agents
            .get_mut(&AgentId::from_seq(1))
            .unwrap()
            .permissions
            .insert("legacy_permission".to_string());
        assert_eq!(risk_rating(store.get(&AgentId::from_seq(1)).unwrap()), RiskLevel::Low);
    }

    #[test]
    fn test_compliance_score_penalties() {
        let config = CadreConfig::default();
        let store = store_with(vec![test_agent(1, None), test_agent(2, None)]);
        assert_eq!(compliance_score(&store, &config), 100);

        // One high-risk agent: -5.
        let store = grant(&store, 1, "strategy");
        assert_eq!(compliance_score(&store, &config), 95);

        // Override makes the same agent count in both terms: -5 -10.
        let store = grant(&store, 1, "compliance_override");
        assert_eq!(compliance_score(&store, &config), 85);
    }

    #[test]
    fn test_compliance_score_floor() {
        let config = CadreConfig::default();
        let mut store = store_with((1..=8).map(|s| test_agent(s, None)).collect());
        for seq in 1..=8 {
            store = grant(&store, seq, "compliance_override");
        }
        // 100 - 8*5 - 8*10 would be -20; floored.
        assert_eq!(compliance_score(&store, &config), 60);
    }

    #[test]
    fn test_compliance_score_monotone_in_overrides() {
        let config = CadreConfig::default();
        let mut store = store_with((1..=6).map(|s| test_agent(s, None)).collect());
        let mut previous = compliance_score(&store, &config);
        for seq in 1..=6 {
            store = grant(&store, seq, "compliance_override");
            let current = compliance_score(&store, &config);
            assert!(current <= previous);
            assert!(current >= config.compliance_floor);
            previous = current;
        }
    }

    #[test]
    fn test_audit_log_sorted_by_date_descending() {
        let now = Utc::now();
        let mut store = store_with(vec![test_agent(1, None), test_agent(2, None)]);
        // Append an out-of-order entry: older date inserted last.
        store
            .agents
            .get_mut(&AgentId::from_seq(1))
            .unwrap()
            .history
            .push(HistoryEntry::new(
                now - Duration::days(30),
                HistoryEvent::ReviewStarted,
                "backdated",
            ));

        let log = audit_log(&store);
        for pair in log.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        assert_eq!(log.last().unwrap().details, "backdated");
    }

    #[test]
    fn test_audit_log_ties_keep_flatten_order() {
        let instant = Utc::now();
        let mut store = store_with(vec![test_agent(1, None), test_agent(2, None)]);
        for seq in [1u64, 2] {
            let agent = store.agents.get_mut(&AgentId::from_seq(seq)).unwrap();
            agent.history.clear();
            agent.history.push(HistoryEntry::new(
                instant,
                HistoryEvent::Onboarding,
                format!("entry-{}", seq),
            ));
        }

        let log = audit_log(&store);
        assert_eq!(log[0].details, "entry-1");
        assert_eq!(log[1].details, "entry-2");
    }

    #[test]
    fn test_audit_log_recent_truncates() {
        let store = store_with(vec![test_agent(1, None), test_agent(2, None)]);
        let log = audit_log_recent(&store, 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_search_matches_name_and_role() {
        let mut store = store_with(vec![test_agent(1, None), test_agent(2, None)]);
        {
            let agent = store.agents.get_mut(&AgentId::from_seq(1)).unwrap();
            agent.name = "Compliance Officer".to_string();
            agent.role = "Governance Lead".to_string();
        }

        assert_eq!(search_agents(&store, "compliance").len(), 1);
        assert_eq!(search_agents(&store, "GOVERNANCE").len(), 1);
        assert_eq!(search_agents(&store, "").len(), 2);
        assert!(search_agents(&store, "nonexistent").is_empty());
    }
}
