//! Identity collaborator
//!
//! Resolves the operator's display identity. Consumed only by the
//! presentation layer; the engine never reads it.

use cadre_core::{CadreResult, IdentityError};

/// Display identity of the current operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: String,
    pub avatar_ref: Option<String>,
}

/// Identity collaborator contract.
pub trait IdentityProvider: Send + Sync {
    /// The current operator, or `IdentityError::Unavailable`.
    fn current_user(&self) -> CadreResult<UserProfile>;
}

/// Fixed identity, for embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    profile: UserProfile,
}

impl StaticIdentity {
    /// Create a provider that always returns the given identity.
    pub fn new(display_name: impl Into<String>, avatar_ref: Option<String>) -> Self {
        Self {
            profile: UserProfile {
                display_name: display_name.into(),
                avatar_ref,
            },
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> CadreResult<UserProfile> {
        Ok(self.profile.clone())
    }
}

/// Provider that is always unavailable, for exercising the failure path.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableIdentity;

impl IdentityProvider for UnavailableIdentity {
    fn current_user(&self) -> CadreResult<UserProfile> {
        Err(IdentityError::Unavailable.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_identity_returns_profile() {
        let provider = StaticIdentity::new("Operator", Some("avatars/op.png".to_string()));
        let profile = provider.current_user().unwrap();
        assert_eq!(profile.display_name, "Operator");
        assert_eq!(profile.avatar_ref.as_deref(), Some("avatars/op.png"));
    }

    #[test]
    fn test_unavailable_identity_errors() {
        let err = UnavailableIdentity.current_user().unwrap_err();
        assert!(matches!(
            err,
            cadre_core::CadreError::Identity(IdentityError::Unavailable)
        ));
    }
}
