//! Default seed population
//!
//! The snapshot handed out on first use: a nine-agent organization with one
//! executive root, three department heads, and one agent still onboarding.
//! The cached metrics block is computed from the agents rather than written
//! by hand, so the seed always satisfies the derived-metrics invariant.

use cadre_core::{
    Agent, AgentDataStore, AgentId, AgentStatus, AgentType, Department, DepartmentId,
    HistoryEntry, HistoryEvent, PerformanceScores, Timestamp,
};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeSet;

fn ts(year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn ids(values: &[&str]) -> Vec<AgentId> {
    values.iter().copied().map(AgentId::from).collect()
}

fn onboarded(date: Timestamp, details: &str) -> HistoryEntry {
    HistoryEntry::new(date, HistoryEvent::Onboarding, details)
}

fn reviewed(date: Timestamp, details: &str) -> HistoryEntry {
    HistoryEntry::new(date, HistoryEvent::PerformanceReview, details)
}

/// Build the default-populated snapshot.
pub fn seed() -> AgentDataStore {
    let agents = vec![
        Agent {
            id: AgentId::from("agent-001"),
            name: "Executive Director".to_string(),
            role: "Chief AI Officer".to_string(),
            agent_type: AgentType::Strategic,
            status: AgentStatus::Active,
            level: 5,
            capabilities: tags(&[
                "strategic planning",
                "resource allocation",
                "objective setting",
            ]),
            performance: PerformanceScores::new(92, 96, 89),
            permissions: tags(&["full_access", "hiring", "strategy", "compliance_override"]),
            reports_to: None,
            subordinates: ids(&["agent-002", "agent-003", "agent-005"]),
            created_at: ts(2023, 9, 15),
            last_review: Some(ts(2024, 3, 15)),
            model: "gpt-4o".to_string(),
            history: vec![
                onboarded(ts(2023, 9, 15), "Initial deployment as Chief AI Officer"),
                reviewed(
                    ts(2024, 3, 15),
                    "Excellent strategic leadership, recommended for capability expansion",
                ),
            ],
        },
        Agent {
            id: AgentId::from("agent-002"),
            name: "Operations Manager".to_string(),
            role: "Operations Director".to_string(),
            agent_type: AgentType::Tactical,
            status: AgentStatus::Active,
            level: 4,
            capabilities: tags(&[
                "workflow optimization",
                "resource management",
                "task distribution",
            ]),
            performance: PerformanceScores::new(88, 94, 91),
            permissions: tags(&["operations_access", "task_assignment", "reporting"]),
            reports_to: Some(AgentId::from("agent-001")),
            subordinates: ids(&["agent-004", "agent-006"]),
            created_at: ts(2023, 10, 1),
            last_review: Some(ts(2024, 3, 20)),
            model: "gpt-4o-mini".to_string(),
            history: vec![
                onboarded(ts(2023, 10, 1), "Deployed as Operations Director"),
                reviewed(
                    ts(2024, 3, 20),
                    "Strong operational leadership, recommended for additional resource management training",
                ),
            ],
        },
        Agent {
            id: AgentId::from("agent-003"),
            name: "Compliance Officer".to_string(),
            role: "Governance Lead".to_string(),
            agent_type: AgentType::Administrative,
            status: AgentStatus::Active,
            level: 4,
            capabilities: tags(&[
                "policy enforcement",
                "audit trails",
                "compliance verification",
            ]),
            performance: PerformanceScores::new(86, 98, 82),
            permissions: tags(&[
                "audit_access",
                "compliance_monitoring",
                "policy_enforcement",
            ]),
            reports_to: Some(AgentId::from("agent-001")),
            subordinates: ids(&["agent-007"]),
            created_at: ts(2023, 10, 5),
            last_review: Some(ts(2024, 3, 25)),
            model: "gpt-4o-mini".to_string(),
            history: vec![
                onboarded(ts(2023, 10, 5), "Deployed as Governance Lead"),
                reviewed(
                    ts(2024, 3, 25),
                    "Excellent compliance oversight, recommended for policy development training",
                ),
            ],
        },
        Agent {
            id: AgentId::from("agent-004"),
            name: "Task Handler".to_string(),
            role: "Operations Specialist".to_string(),
            agent_type: AgentType::Operational,
            status: AgentStatus::Active,
            level: 2,
            capabilities: tags(&[
                "task execution",
                "status reporting",
                "basic problem solving",
            ]),
            performance: PerformanceScores::new(95, 92, 88),
            permissions: tags(&["task_execution", "basic_reporting"]),
            reports_to: Some(AgentId::from("agent-002")),
            subordinates: Vec::new(),
            created_at: ts(2023, 11, 1),
            last_review: Some(ts(2024, 4, 1)),
            model: "gpt-4o-mini".to_string(),
            history: vec![
                onboarded(ts(2023, 11, 1), "Deployed as Operations Specialist"),
                reviewed(
                    ts(2024, 4, 1),
                    "High efficiency in task execution, recommended for problem-solving enhancement",
                ),
            ],
        },
        Agent {
            id: AgentId::from("agent-005"),
            name: "Development Director".to_string(),
            role: "Learning & Development Head".to_string(),
            agent_type: AgentType::Strategic,
            status: AgentStatus::Active,
            level: 4,
            capabilities: tags(&[
                "capability assessment",
                "training program design",
                "performance evaluation",
            ]),
            performance: PerformanceScores::new(87, 91, 94),
            permissions: tags(&[
                "development_access",
                "training_assignment",
                "capability_management",
            ]),
            reports_to: Some(AgentId::from("agent-001")),
            subordinates: ids(&["agent-008", "agent-009"]),
            created_at: ts(2023, 10, 10),
            last_review: Some(ts(2024, 3, 30)),
            model: "gpt-4o-mini".to_string(),
            history: vec![
                onboarded(ts(2023, 10, 10), "Deployed as Learning & Development Head"),
                reviewed(
                    ts(2024, 3, 30),
                    "Excellent training program design, recommended for additional assessment methodologies",
                ),
            ],
        },
        Agent {
            id: AgentId::from("agent-006"),
            name: "Resource Coordinator".to_string(),
            role: "Resource Allocation Specialist".to_string(),
            agent_type: AgentType::Tactical,
            status: AgentStatus::Active,
            level: 3,
            capabilities: tags(&[
                "resource tracking",
                "allocation optimization",
                "utilization reporting",
            ]),
            performance: PerformanceScores::new(90, 89, 85),
            permissions: tags(&["resource_management", "allocation_authority"]),
            reports_to: Some(AgentId::from("agent-002")),
            subordinates: Vec::new(),
            created_at: ts(2023, 11, 15),
            last_review: Some(ts(2024, 4, 5)),
            model: "gpt-4o-mini".to_string(),
            history: vec![
                onboarded(ts(2023, 11, 15), "Deployed as Resource Allocation Specialist"),
                reviewed(
                    ts(2024, 4, 5),
                    "Good resource optimization, recommended for advanced allocation strategies",
                ),
            ],
        },
        Agent {
            id: AgentId::from("agent-007"),
            name: "Audit Specialist".to_string(),
            role: "Compliance Auditor".to_string(),
            agent_type: AgentType::Administrative,
            status: AgentStatus::Active,
            level: 3,
            capabilities: tags(&[
                "audit execution",
                "compliance verification",
                "documentation review",
            ]),
            performance: PerformanceScores::new(85, 97, 84),
            permissions: tags(&["audit_execution", "documentation_access"]),
            reports_to: Some(AgentId::from("agent-003")),
            subordinates: Vec::new(),
            created_at: ts(2023, 11, 20),
            last_review: Some(ts(2024, 4, 10)),
            model: "gpt-4o-mini".to_string(),
            history: vec![
                onboarded(ts(2023, 11, 20), "Deployed as Compliance Auditor"),
                reviewed(
                    ts(2024, 4, 10),
                    "Excellent accuracy in compliance verification, recommended for audit methodology expansion",
                ),
            ],
        },
        Agent {
            id: AgentId::from("agent-008"),
            name: "Training Designer".to_string(),
            role: "Capability Development Specialist".to_string(),
            agent_type: AgentType::Strategic,
            status: AgentStatus::Onboarding,
            level: 3,
            capabilities: tags(&[
                "training design",
                "capability assessment",
                "learning path creation",
            ]),
            performance: PerformanceScores::zero(),
            permissions: tags(&["training_design", "assessment_tools"]),
            reports_to: Some(AgentId::from("agent-005")),
            subordinates: Vec::new(),
            created_at: ts(2024, 5, 1),
            last_review: None,
            model: "gpt-4o-mini".to_string(),
            history: vec![onboarded(
                ts(2024, 5, 1),
                "Initial deployment as Capability Development Specialist",
            )],
        },
        Agent {
            id: AgentId::from("agent-009"),
            name: "Performance Analyst".to_string(),
            role: "Agent Evaluation Specialist".to_string(),
            agent_type: AgentType::Tactical,
            status: AgentStatus::Active,
            level: 3,
            capabilities: tags(&[
                "performance analysis",
                "metric tracking",
                "improvement recommendation",
            ]),
            performance: PerformanceScores::new(93, 90, 87),
            permissions: tags(&["performance_monitoring", "evaluation_tools"]),
            reports_to: Some(AgentId::from("agent-005")),
            subordinates: Vec::new(),
            created_at: ts(2023, 12, 1),
            last_review: Some(ts(2024, 4, 15)),
            model: "gpt-4o-mini".to_string(),
            history: vec![
                onboarded(ts(2023, 12, 1), "Deployed as Agent Evaluation Specialist"),
                reviewed(
                    ts(2024, 4, 15),
                    "Strong analytical skills, recommended for advanced metrics development",
                ),
            ],
        },
    ];

    let departments = vec![
        Department {
            id: DepartmentId::new("dept-001"),
            name: "Executive".to_string(),
            head: AgentId::from("agent-001"),
            members: ids(&["agent-001"]),
        },
        Department {
            id: DepartmentId::new("dept-002"),
            name: "Operations".to_string(),
            head: AgentId::from("agent-002"),
            members: ids(&["agent-002", "agent-004", "agent-006"]),
        },
        Department {
            id: DepartmentId::new("dept-003"),
            name: "Governance & Compliance".to_string(),
            head: AgentId::from("agent-003"),
            members: ids(&["agent-003", "agent-007"]),
        },
        Department {
            id: DepartmentId::new("dept-004"),
            name: "Learning & Development".to_string(),
            head: AgentId::from("agent-005"),
            members: ids(&["agent-005", "agent-008", "agent-009"]),
        },
    ];

    let mut store = AgentDataStore::empty();
    for agent in agents {
        store.agents.insert(agent.id.clone(), agent);
    }
    store.departments = departments;
    store.heal_id_counter();
    store.recompute_metrics();
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_population() {
        let store = seed();
        assert_eq!(store.len(), 9);
        assert_eq!(store.departments.len(), 4);
        assert_eq!(store.next_agent_seq, 10);
    }

    #[test]
    fn test_seed_metrics_are_derived() {
        let store = seed();
        assert_eq!(store.metrics.total_agents, 9);
        assert_eq!(store.metrics.active_agents, 8);
        // 716 efficiency points across 8 active agents.
        assert!((store.metrics.efficiency_avg - 89.5).abs() < f64::EPSILON);
        assert!((store.metrics.satisfaction_avg - 87.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seed_has_one_root_and_one_onboarding() {
        let store = seed();
        let roots: Vec<_> = store.all().filter(|a| a.is_root()).collect();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].id, AgentId::from("agent-001"));

        let onboarding: Vec<_> = store
            .all()
            .filter(|a| a.status == AgentStatus::Onboarding)
            .collect();
        assert_eq!(onboarding.len(), 1);
        assert_eq!(onboarding[0].id, AgentId::from("agent-008"));
        assert_eq!(onboarding[0].performance, PerformanceScores::zero());
    }

    #[test]
    fn test_seed_tree_edges_are_bidirectional() {
        let store = seed();
        for agent in store.all() {
            if let Some(parent_id) = &agent.reports_to {
                let parent = store.get(parent_id).unwrap();
                assert_eq!(
                    parent.subordinates.iter().filter(|s| **s == agent.id).count(),
                    1,
                    "agent {} missing from subordinates of {}",
                    agent.id,
                    parent_id
                );
            }
        }
    }
}
