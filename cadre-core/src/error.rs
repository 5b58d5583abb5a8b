//! Error types for CADRE operations
//!
//! Every command returns a typed result: either the full new snapshot or an
//! error with the previous snapshot untouched. Nothing here is ever thrown
//! past a command boundary.

use crate::{AgentId, AgentStatus};
use thiserror::Error;

/// Registry lookup errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Agent not found: {id}")]
    NotFound { id: AgentId },
}

/// Reporting-tree errors.
///
/// `InvalidParent` is a command-time fault; the remaining variants are
/// integrity-check findings over the redundant `reports_to`/`subordinates`
/// encoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("Reports-to does not resolve: {id}")]
    InvalidParent { id: AgentId },

    #[error("Agent {child} reports to {parent} but is missing from its subordinates")]
    MissingBackEdge { parent: AgentId, child: AgentId },

    #[error("Agent {child} appears {count} times in subordinates of {parent}")]
    DuplicateChildEntry {
        parent: AgentId,
        child: AgentId,
        count: usize,
    },

    #[error("Agent {child} is listed as a subordinate of {parent} but does not report to it")]
    ForeignChildEntry { parent: AgentId, child: AgentId },

    #[error("Reporting cycle detected: {ids:?}")]
    CycleDetected { ids: Vec<AgentId> },
}

/// Lifecycle state machine errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Invalid transition: {command} is not valid for agent {id} in status {status}")]
    InvalidTransition {
        id: AgentId,
        status: AgentStatus,
        command: &'static str,
    },
}

/// Input validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Score out of range for {field}: {value} (expected 0-100)")]
    ScoreOutOfRange { field: &'static str, value: u16 },

    #[error("Unknown permission: {id}")]
    UnknownPermission { id: String },
}

/// Persistence collaborator errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error during {operation}: {source}")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot (de)serialization failed: {reason}")]
    Serde { reason: String },

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// Identity collaborator errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Identity provider unavailable")]
    Unavailable,
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Master error type for all CADRE errors.
#[derive(Debug, Error)]
pub enum CadreError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Hierarchy error: {0}")]
    Hierarchy(#[from] HierarchyError),

    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for CADRE operations.
pub type CadreResult<T> = Result<T, CadreError>;

// ============================================================================
// TESTS
// ============================================================================
