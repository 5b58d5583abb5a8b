//! CADRE Core - Entity Types
//!
//! Pure data structures for the agent workforce model. All other crates
//! depend on this. This crate contains ONLY data types and the derived-metric
//! definitions that give the snapshot its meaning - no command logic.

pub mod catalog;
pub mod config;
pub mod entities;
pub mod enums;
pub mod error;
pub mod identity;

pub use catalog::{lookup, PermissionDef, BASIC_ACCESS, COMPLIANCE_OVERRIDE, FULL_ACCESS, PERMISSION_CATALOG};
pub use config::CadreConfig;
pub use entities::{
    Agent, AgentDataStore, Department, HistoryEntry, PerformanceScores, WorkforceMetrics,
};
pub use enums::{
    AgentStatus, AgentStatusParseError, AgentType, AgentTypeParseError, HistoryEvent,
    HistoryEventParseError, ReviewAction, ReviewActionParseError, RiskLevel, RiskLevelParseError,
};
pub use error::{
    CadreError, CadreResult, ConfigError, HierarchyError, IdentityError, LifecycleError,
    RegistryError, StorageError, ValidationError,
};
pub use identity::{AgentId, DepartmentId, IdParseError, Timestamp};
