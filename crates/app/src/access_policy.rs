//! Access policy: maps a caller-supplied role token to an [`AccessTier`].
//!
//! An absent token is always [`AccessTier::Guest`]. Listed roles map to
//! their tier; any other token falls back to a configurable tier, which
//! defaults to [`AccessTier::Elevated`] so only `"guest"` and `"user"` are
//! restricted out of the box.

use std::collections::HashSet;

use handyhub_domain::access::AccessTier;

/// Default role with no access.
pub const DEFAULT_GUEST_ROLE: &str = "guest";

/// Default role granting read-only access.
pub const DEFAULT_USER_ROLE: &str = "user";

/// Default role granting full access.
pub const DEFAULT_ELEVATED_ROLE: &str = "admin";

/// Tier given to roles that appear in no list.
pub const DEFAULT_FALLBACK_TIER: AccessTier = AccessTier::Elevated;

/// Resolves role tokens into access tiers.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    guest_roles: HashSet<String>,
    user_roles: HashSet<String>,
    elevated_roles: HashSet<String>,
    fallback: AccessTier,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new([DEFAULT_USER_ROLE], [DEFAULT_ELEVATED_ROLE])
    }
}

impl AccessPolicy {
    /// Build a policy from the roles granting each tier.
    ///
    /// `"guest"` is the only guest role and unlisted roles get
    /// [`DEFAULT_FALLBACK_TIER`]. A role listed in several sets resolves to
    /// the highest of them.
    pub fn new<U, E>(user_roles: U, elevated_roles: E) -> Self
    where
        U: IntoIterator,
        U::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            guest_roles: HashSet::from([DEFAULT_GUEST_ROLE.to_string()]),
            user_roles: user_roles.into_iter().map(Into::into).collect(),
            elevated_roles: elevated_roles.into_iter().map(Into::into).collect(),
            fallback: DEFAULT_FALLBACK_TIER,
        }
    }

    /// Replace the roles that are explicitly denied all access.
    #[must_use]
    pub fn with_guest_roles<G>(mut self, guest_roles: G) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
    {
        self.guest_roles = guest_roles.into_iter().map(Into::into).collect();
        self
    }

    /// Set the tier for roles that appear in no list.
    #[must_use]
    pub fn with_fallback(mut self, fallback: AccessTier) -> Self {
        self.fallback = fallback;
        self
    }

    /// Classify a role token.
    #[must_use]
    pub fn resolve(&self, role: Option<&str>) -> AccessTier {
        let Some(role) = role else {
            return AccessTier::Guest;
        };
        if self.elevated_roles.contains(role) {
            AccessTier::Elevated
        } else if self.user_roles.contains(role) {
            AccessTier::User
        } else if self.guest_roles.contains(role) {
            AccessTier::Guest
        } else {
            self.fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_absent_role_to_guest() {
        assert_eq!(AccessPolicy::default().resolve(None), AccessTier::Guest);
    }

    #[test]
    fn should_resolve_absent_role_to_guest_whatever_the_fallback() {
        let policy = AccessPolicy::default().with_fallback(AccessTier::Elevated);
        assert_eq!(policy.resolve(None), AccessTier::Guest);
    }

    #[test]
    fn should_resolve_guest_role_to_guest() {
        assert_eq!(
            AccessPolicy::default().resolve(Some("guest")),
            AccessTier::Guest
        );
    }

    #[test]
    fn should_resolve_default_roles() {
        let policy = AccessPolicy::default();
        assert_eq!(policy.resolve(Some("user")), AccessTier::User);
        assert_eq!(policy.resolve(Some("admin")), AccessTier::Elevated);
    }

    #[test]
    fn should_grant_full_access_to_unlisted_role_by_default() {
        let policy = AccessPolicy::default();
        assert_eq!(policy.resolve(Some("visitor")), AccessTier::Elevated);
        assert_eq!(policy.resolve(Some("Guest")), AccessTier::Elevated);
        assert_eq!(policy.resolve(Some("")), AccessTier::Elevated);
    }

    #[test]
    fn should_apply_configured_fallback_to_unlisted_role() {
        let policy = AccessPolicy::default().with_fallback(AccessTier::Guest);
        assert_eq!(policy.resolve(Some("visitor")), AccessTier::Guest);
        assert_eq!(policy.resolve(Some("admin")), AccessTier::Elevated);

        let policy = AccessPolicy::default().with_fallback(AccessTier::User);
        assert_eq!(policy.resolve(Some("visitor")), AccessTier::User);
    }

    #[test]
    fn should_use_configured_roles() {
        let policy = AccessPolicy::new(["viewer", "reader"], ["owner"])
            .with_guest_roles(["anonymous"])
            .with_fallback(AccessTier::Guest);
        assert_eq!(policy.resolve(Some("reader")), AccessTier::User);
        assert_eq!(policy.resolve(Some("owner")), AccessTier::Elevated);
        assert_eq!(policy.resolve(Some("anonymous")), AccessTier::Guest);
        assert_eq!(policy.resolve(Some("admin")), AccessTier::Guest);
    }

    #[test]
    fn should_deny_only_listed_guest_roles_after_replacing_them() {
        let policy = AccessPolicy::default().with_guest_roles(["anonymous"]);
        assert_eq!(policy.resolve(Some("anonymous")), AccessTier::Guest);
        assert_eq!(policy.resolve(Some("guest")), AccessTier::Elevated);
    }

    #[test]
    fn should_prefer_elevated_when_role_listed_twice() {
        let policy = AccessPolicy::new(["staff"], ["staff"]).with_guest_roles(["staff"]);
        assert_eq!(policy.resolve(Some("staff")), AccessTier::Elevated);
    }
}
