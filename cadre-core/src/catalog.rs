//! Fixed permission catalog
//!
//! The catalog is process-wide, read-only data: permission id to name,
//! description, and risk class. Per-agent state stores only the ids; risk
//! ratings and compliance scoring look the ids up here on demand.

use crate::RiskLevel;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Unrestricted access; holding it alone makes an agent high risk.
pub const FULL_ACCESS: &str = "full_access";
/// Compliance override; weighted separately in the compliance score.
pub const COMPLIANCE_OVERRIDE: &str = "compliance_override";
/// Default grant for newly created agents.
pub const BASIC_ACCESS: &str = "basic_access";

/// A catalog entry describing one permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub risk: RiskLevel,
}

/// All permissions known to the system.
pub static PERMISSION_CATALOG: [PermissionDef; 24] = [
    PermissionDef {
        id: FULL_ACCESS,
        name: "Full System Access",
        description: "Complete unrestricted access to all system functions",
        risk: RiskLevel::High,
    },
    PermissionDef {
        id: "hiring",
        name: "Agent Hiring",
        description: "Create and onboard new agents",
        risk: RiskLevel::Medium,
    },
    PermissionDef {
        id: "strategy",
        name: "Strategic Planning",
        description: "Define organization objectives and strategy",
        risk: RiskLevel::High,
    },
    PermissionDef {
        id: COMPLIANCE_OVERRIDE,
        name: "Compliance Override",
        description: "Override compliance restrictions in exceptional cases",
        risk: RiskLevel::High,
    },
    PermissionDef {
        id: "operations_access",
        name: "Operations Access",
        description: "Access to operational systems and workflows",
        risk: RiskLevel::Medium,
    },
    PermissionDef {
        id: "task_assignment",
        name: "Task Assignment",
        description: "Assign and delegate tasks to other agents",
        risk: RiskLevel::Low,
    },
    PermissionDef {
        id: "reporting",
        name: "Reporting",
        description: "Generate and access system reports",
        risk: RiskLevel::Low,
    },
    PermissionDef {
        id: "audit_access",
        name: "Audit Access",
        description: "Access audit records and logs",
        risk: RiskLevel::Medium,
    },
    PermissionDef {
        id: "compliance_monitoring",
        name: "Compliance Monitoring",
        description: "Monitor system for compliance violations",
        risk: RiskLevel::Medium,
    },
    PermissionDef {
        id: "policy_enforcement",
        name: "Policy Enforcement",
        description: "Enforce compliance policies",
        risk: RiskLevel::Medium,
    },
    PermissionDef {
        id: "audit_execution",
        name: "Audit Execution",
        description: "Conduct compliance audits",
        risk: RiskLevel::Medium,
    },
    PermissionDef {
        id: "documentation_access",
        name: "Documentation Access",
        description: "Access system documentation",
        risk: RiskLevel::Low,
    },
    PermissionDef {
        id: "development_access",
        name: "Development Access",
        description: "Access agent development tools",
        risk: RiskLevel::Medium,
    },
    PermissionDef {
        id: "training_assignment",
        name: "Training Assignment",
        description: "Assign training to agents",
        risk: RiskLevel::Low,
    },
    PermissionDef {
        id: "capability_management",
        name: "Capability Management",
        description: "Manage agent capabilities",
        risk: RiskLevel::Medium,
    },
    PermissionDef {
        id: "resource_management",
        name: "Resource Management",
        description: "Manage and allocate system resources",
        risk: RiskLevel::Medium,
    },
    PermissionDef {
        id: "allocation_authority",
        name: "Allocation Authority",
        description: "Authority to allocate resources to agents",
        risk: RiskLevel::Medium,
    },
    PermissionDef {
        id: "training_design",
        name: "Training Design",
        description: "Design training programs for agents",
        risk: RiskLevel::Low,
    },
    PermissionDef {
        id: "assessment_tools",
        name: "Assessment Tools",
        description: "Access to capability assessment tools",
        risk: RiskLevel::Low,
    },
    PermissionDef {
        id: "performance_monitoring",
        name: "Performance Monitoring",
        description: "Monitor agent performance metrics",
        risk: RiskLevel::Low,
    },
    PermissionDef {
        id: "evaluation_tools",
        name: "Evaluation Tools",
        description: "Access to agent evaluation tools",
        risk: RiskLevel::Low,
    },
    PermissionDef {
        id: "task_execution",
        name: "Task Execution",
        description: "Execute assigned tasks",
        risk: RiskLevel::Low,
    },
    PermissionDef {
        id: "basic_reporting",
        name: "Basic Reporting",
        description: "Generate basic activity reports",
        risk: RiskLevel::Low,
    },
    PermissionDef {
        id: BASIC_ACCESS,
        name: "Basic Access",
        description: "Basic system access",
        risk: RiskLevel::Low,
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static PermissionDef>> =
    Lazy::new(|| PERMISSION_CATALOG.iter().map(|p| (p.id, p)).collect());

/// Look up a permission by id.
pub fn lookup(id: &str) -> Option<&'static PermissionDef> {
    INDEX.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        assert_eq!(INDEX.len(), PERMISSION_CATALOG.len());
    }

    #[test]
    fn test_lookup_known_permission() {
        let def = lookup(FULL_ACCESS).unwrap();
        assert_eq!(def.risk, RiskLevel::High);
        assert_eq!(def.name, "Full System Access");

        let def = lookup(BASIC_ACCESS).unwrap();
        assert_eq!(def.risk, RiskLevel::Low);
    }

    #[test]
    fn test_lookup_unknown_permission() {
        assert!(lookup("root_shell").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_override_is_high_risk() {
        assert_eq!(lookup(COMPLIANCE_OVERRIDE).unwrap().risk, RiskLevel::High);
    }
}
