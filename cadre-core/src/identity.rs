//! Identity types for CADRE entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp type using UTC timezone.
///
/// All instants in the model are UTC. History entries carry one of these as
/// their sort key; comparing locale-formatted strings is how audit logs end
/// up out of order, so the formatted form never enters the data model.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Strongly-typed agent identifier.
///
/// Ids are human-readable and stable: `agent-001`, `agent-002`, and so on.
/// They are allocated from a monotonic counter carried in the snapshot and
/// are never reused, so uniqueness does not depend on the current population
/// count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    const PREFIX: &'static str = "agent-";

    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the canonical id for a counter value: `agent-007`, `agent-1024`.
    pub fn from_seq(seq: u64) -> Self {
        Self(format!("{}{:03}", Self::PREFIX, seq))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric suffix of a canonical id, if it has one.
    ///
    /// Non-canonical ids (hand-written test data, foreign imports) yield
    /// `None` and simply don't participate in counter healing.
    pub fn seq(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AgentId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(IdParseError(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Strongly-typed department identifier (`dept-001`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(String);

impl DepartmentId {
    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DepartmentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Error when parsing an empty or malformed id string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError(pub String);

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid id: {:?}", self.0)
    }
}

impl std::error::Error for IdParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_id_from_seq_zero_pads() {
        assert_eq!(AgentId::from_seq(7).as_str(), "agent-007");
        assert_eq!(AgentId::from_seq(42).as_str(), "agent-042");
        assert_eq!(AgentId::from_seq(1024).as_str(), "agent-1024");
    }

    #[test]
    fn test_agent_id_seq_roundtrip() {
        for seq in [1u64, 9, 10, 999, 1000] {
            assert_eq!(AgentId::from_seq(seq).seq(), Some(seq));
        }
    }

    #[test]
    fn test_agent_id_seq_non_canonical() {
        assert_eq!(AgentId::new("supervisor").seq(), None);
        assert_eq!(AgentId::new("agent-xyz").seq(), None);
    }

    #[test]
    fn test_agent_id_from_str_rejects_empty() {
        assert!("".parse::<AgentId>().is_err());
        assert!("  ".parse::<AgentId>().is_err());
        assert!("agent-001".parse::<AgentId>().is_ok());
    }

    proptest::proptest! {
        #[test]
        fn prop_from_seq_seq_roundtrip(seq in proptest::num::u64::ANY) {
            proptest::prop_assert_eq!(AgentId::from_seq(seq).seq(), Some(seq));
        }

        #[test]
        fn prop_canonical_ids_order_by_seq_within_width(a in 1u64..=999, b in 1u64..=999) {
            let (lo, hi) = (a.min(b), a.max(b));
            proptest::prop_assert!(AgentId::from_seq(lo) <= AgentId::from_seq(hi));
        }
    }
}
