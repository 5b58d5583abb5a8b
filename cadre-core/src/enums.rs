//! Enum types for CADRE entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// LIFECYCLE
// ============================================================================

/// Lifecycle status of an agent.
///
/// The engine drives `Onboarding -> Active -> Review -> Active` (the review
/// loop). `Inactive` is a valid stored value but no command produces it or
/// leads out of it - it is frozen data, not a reachable engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AgentStatus {
    /// Newly created, performance not yet meaningful
    #[default]
    Onboarding,
    /// Working; the only status counted in workforce averages
    Active,
    /// Undergoing a performance review
    Review,
    /// Frozen; no engine-defined transitions in or out
    Inactive,
}

impl AgentStatus {
    /// Convert to the persisted string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            AgentStatus::Onboarding => "onboarding",
            AgentStatus::Active => "active",
            AgentStatus::Review => "review",
            AgentStatus::Inactive => "inactive",
        }
    }

    /// Parse from the persisted string representation.
    pub fn from_db_str(s: &str) -> Result<Self, AgentStatusParseError> {
        match s.to_lowercase().as_str() {
            "onboarding" => Ok(AgentStatus::Onboarding),
            "active" => Ok(AgentStatus::Active),
            "review" | "in_review" | "in-review" => Ok(AgentStatus::Review),
            "inactive" => Ok(AgentStatus::Inactive),
            _ => Err(AgentStatusParseError(s.to_string())),
        }
    }

    /// Check if this is a terminal state (no further transitions defined).
    pub fn is_terminal(&self) -> bool {
        matches!(self, AgentStatus::Inactive)
    }

    /// Check if agents in this status participate in workforce averages.
    pub fn counts_toward_averages(&self) -> bool {
        matches!(self, AgentStatus::Active)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

impl FromStr for AgentStatus {
    type Err = AgentStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s)
    }
}

/// Error when parsing an invalid agent status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentStatusParseError(pub String);

impl fmt::Display for AgentStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid agent status: {}", self.0)
    }
}

impl std::error::Error for AgentStatusParseError {}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Functional classification of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AgentType {
    /// Objective setting, planning, org-level direction
    Strategic,
    /// Coordination and resource allocation
    Tactical,
    /// Policy, audit, and record keeping
    Administrative,
    /// Task execution
    #[default]
    Operational,
}

impl AgentType {
    /// Convert to the persisted string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            AgentType::Strategic => "strategic",
            AgentType::Tactical => "tactical",
            AgentType::Administrative => "administrative",
            AgentType::Operational => "operational",
        }
    }

    /// Parse from the persisted string representation.
    pub fn from_db_str(s: &str) -> Result<Self, AgentTypeParseError> {
        match s.to_lowercase().as_str() {
            "strategic" => Ok(AgentType::Strategic),
            "tactical" => Ok(AgentType::Tactical),
            "administrative" => Ok(AgentType::Administrative),
            "operational" => Ok(AgentType::Operational),
            _ => Err(AgentTypeParseError(s.to_string())),
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

impl FromStr for AgentType {
    type Err = AgentTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s)
    }
}

/// Error when parsing an invalid agent type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTypeParseError(pub String);

impl fmt::Display for AgentTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid agent type: {}", self.0)
    }
}

impl std::error::Error for AgentTypeParseError {}

// ============================================================================
// REVIEW
// ============================================================================

/// Outcome action recorded by a completed performance review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ReviewAction {
    /// Keep the current role and level
    #[default]
    Maintain,
    /// Raise the level by one, capped at the maximum
    Promote,
    /// Recommend a role transfer (recorded only; no structural change)
    Transfer,
}

impl ReviewAction {
    /// Convert to the persisted string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ReviewAction::Maintain => "maintain",
            ReviewAction::Promote => "promote",
            ReviewAction::Transfer => "transfer",
        }
    }

    /// Parse from the persisted string representation.
    pub fn from_db_str(s: &str) -> Result<Self, ReviewActionParseError> {
        match s.to_lowercase().as_str() {
            "maintain" => Ok(ReviewAction::Maintain),
            "promote" | "promotion" => Ok(ReviewAction::Promote),
            "transfer" => Ok(ReviewAction::Transfer),
            _ => Err(ReviewActionParseError(s.to_string())),
        }
    }

    /// Human-readable summary used in review history details.
    pub fn summary(&self) -> &'static str {
        match self {
            ReviewAction::Maintain => "current role maintained",
            ReviewAction::Promote => "promotion recommended",
            ReviewAction::Transfer => "transfer recommended",
        }
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

impl FromStr for ReviewAction {
    type Err = ReviewActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s)
    }
}

/// Error when parsing an invalid review action string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewActionParseError(pub String);

impl fmt::Display for ReviewActionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid review action: {}", self.0)
    }
}

impl std::error::Error for ReviewActionParseError {}

// ============================================================================
// GOVERNANCE
// ============================================================================

/// Risk classification of a permission, and by extension of an agent.
///
/// Ordered: `Low < Medium < High`, so the highest held risk can be taken
/// with `max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Convert to the persisted string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Parse from the persisted string representation.
    pub fn from_db_str(s: &str) -> Result<Self, RiskLevelParseError> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(RiskLevelParseError(s.to_string())),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

impl FromStr for RiskLevel {
    type Err = RiskLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s)
    }
}

/// Error when parsing an invalid risk level string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskLevelParseError(pub String);

impl fmt::Display for RiskLevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid risk level: {}", self.0)
    }
}

impl std::error::Error for RiskLevelParseError {}

// ============================================================================
// HISTORY
// ============================================================================

/// Event kind of an agent history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum HistoryEvent {
    /// Initial deployment
    Onboarding,
    /// Onboarding finished, baseline performance assigned
    OnboardingCompleted,
    /// Placed into review
    ReviewStarted,
    /// Review submitted with scores and an action
    PerformanceReview,
    /// Permission granted
    PermissionAdded,
    /// Permission revoked
    PermissionRemoved,
}

impl HistoryEvent {
    /// Convert to the persisted string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            HistoryEvent::Onboarding => "onboarding",
            HistoryEvent::OnboardingCompleted => "onboarding_completed",
            HistoryEvent::ReviewStarted => "review_started",
            HistoryEvent::PerformanceReview => "performance_review",
            HistoryEvent::PermissionAdded => "permission_added",
            HistoryEvent::PermissionRemoved => "permission_removed",
        }
    }

    /// Parse from the persisted string representation.
    pub fn from_db_str(s: &str) -> Result<Self, HistoryEventParseError> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "onboarding" => Ok(HistoryEvent::Onboarding),
            "onboarding_completed" => Ok(HistoryEvent::OnboardingCompleted),
            "review_started" => Ok(HistoryEvent::ReviewStarted),
            "performance_review" => Ok(HistoryEvent::PerformanceReview),
            "permission_added" => Ok(HistoryEvent::PermissionAdded),
            "permission_removed" => Ok(HistoryEvent::PermissionRemoved),
            _ => Err(HistoryEventParseError(s.to_string())),
        }
    }
}

impl fmt::Display for HistoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

impl FromStr for HistoryEvent {
    type Err = HistoryEventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s)
    }
}

/// Error when parsing an invalid history event string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEventParseError(pub String);

impl fmt::Display for HistoryEventParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid history event: {}", self.0)
    }
}

impl std::error::Error for HistoryEventParseError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_status_roundtrip() {
        for status in [
            AgentStatus::Onboarding,
            AgentStatus::Active,
            AgentStatus::Review,
            AgentStatus::Inactive,
        ] {
            let s = status.as_db_str();
            assert_eq!(AgentStatus::from_db_str(s).unwrap(), status);
        }
    }

    #[test]
    fn test_agent_status_terminal() {
        assert!(AgentStatus::Inactive.is_terminal());
        assert!(!AgentStatus::Active.is_terminal());
        assert!(!AgentStatus::Onboarding.is_terminal());
        assert!(!AgentStatus::Review.is_terminal());
    }

    #[test]
    fn test_only_active_counts_toward_averages() {
        assert!(AgentStatus::Active.counts_toward_averages());
        assert!(!AgentStatus::Onboarding.counts_toward_averages());
        assert!(!AgentStatus::Review.counts_toward_averages());
        assert!(!AgentStatus::Inactive.counts_toward_averages());
    }

    #[test]
    fn test_history_event_roundtrip() {
        for event in [
            HistoryEvent::Onboarding,
            HistoryEvent::OnboardingCompleted,
            HistoryEvent::ReviewStarted,
            HistoryEvent::PerformanceReview,
            HistoryEvent::PermissionAdded,
            HistoryEvent::PermissionRemoved,
        ] {
            let s = event.as_db_str();
            assert_eq!(HistoryEvent::from_db_str(s).unwrap(), event);
        }
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(RiskLevel::Low.max(RiskLevel::High), RiskLevel::High);
    }

    #[test]
    fn test_review_action_lenient_parse() {
        assert_eq!(
            ReviewAction::from_db_str("Promotion").unwrap(),
            ReviewAction::Promote
        );
        assert!(ReviewAction::from_db_str("demote").is_err());
    }
}
