use std::fmt;

use crate::role::Role;

/// An opaque jurisdiction identifier with a fixed equality contract.
///
/// Identifiers arrive from token claims, path parameters, body fields,
/// and query strings, and may carry incidental surrounding whitespace.
/// `ScopeId` normalizes once at construction (ASCII whitespace trimmed)
/// and compares the normalized form byte-for-byte. No numeric or
/// structural assumptions are made about the contents.
///
/// A value that is empty after trimming carries no information, so the
/// constructor returns `None` for it; callers treat that the same as a
/// missing identifier.
///
/// # Examples
///
/// ```
/// use jurisdiction_core::ScopeId;
///
/// let a = ScopeId::new(" S1 ").unwrap();
/// let b = ScopeId::new("S1").unwrap();
/// assert_eq!(a, b);
///
/// assert!(ScopeId::new("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeId(String);

impl ScopeId {
    /// Normalizes and wraps an identifier.
    ///
    /// Returns `None` if the value is empty after trimming.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The normalized identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The authenticated actor making a request.
///
/// Constructed once per request from already-verified token claims; the
/// scope identifiers are fixed at issuance and there are no mutators.
/// Which identifiers are present depends on the role: a state admin
/// carries `state_id`, a branch admin carries `state_id` and `branch_id`,
/// a zonal admin carries all three. Non-admin roles typically carry none.
///
/// # Examples
///
/// ```
/// use jurisdiction_core::{Principal, Role};
///
/// let admin = Principal::new(Role::BranchAdmin)
///     .with_state_id("S1")
///     .with_branch_id("B1");
///
/// assert_eq!(admin.role(), Role::BranchAdmin);
/// assert_eq!(admin.branch_id().unwrap().as_str(), "B1");
/// ```
#[derive(Debug, Clone)]
pub struct Principal {
    role: Role,
    state_id: Option<ScopeId>,
    branch_id: Option<ScopeId>,
    zone_id: Option<ScopeId>,
}

impl Principal {
    /// Creates a principal with the given role and no scope identifiers.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            state_id: None,
            branch_id: None,
            zone_id: None,
        }
    }

    /// Sets the state identifier. Empty/whitespace values are dropped.
    pub fn with_state_id(mut self, id: impl AsRef<str>) -> Self {
        self.state_id = ScopeId::new(id);
        self
    }

    /// Sets the branch identifier. Empty/whitespace values are dropped.
    pub fn with_branch_id(mut self, id: impl AsRef<str>) -> Self {
        self.branch_id = ScopeId::new(id);
        self
    }

    /// Sets the zone identifier. Empty/whitespace values are dropped.
    pub fn with_zone_id(mut self, id: impl AsRef<str>) -> Self {
        self.zone_id = ScopeId::new(id);
        self
    }

    /// The principal's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The state this principal is scoped to, if any.
    pub fn state_id(&self) -> Option<&ScopeId> {
        self.state_id.as_ref()
    }

    /// The branch this principal is scoped to, if any.
    pub fn branch_id(&self) -> Option<&ScopeId> {
        self.branch_id.as_ref()
    }

    /// The zone this principal is scoped to, if any.
    pub fn zone_id(&self) -> Option<&ScopeId> {
        self.zone_id.as_ref()
    }
}
