use std::fmt;

/// The role an authenticated principal holds.
///
/// This is a closed enum: every jurisdiction rule matches on it
/// exhaustively, so adding a role forces each rule to be reconsidered
/// rather than silently falling into a wildcard arm.
///
/// Only the four admin roles participate in jurisdiction checks.
/// `SuperAdmin` is jurisdiction-exempt; the remaining admin roles are
/// scoped to a state, branch, or zone. Every non-admin role fails every
/// jurisdiction check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Unrestricted administrator; exempt from all jurisdiction checks.
    SuperAdmin,
    /// Administrator scoped to a single state.
    StateAdmin,
    /// Administrator scoped to a single branch within a state.
    BranchAdmin,
    /// Administrator scoped to a single zone within a branch.
    ZonalAdmin,
    /// Event marketer; no jurisdiction authority.
    Marketer,
    /// Check-in concierge; no jurisdiction authority.
    Concierge,
    /// Attendee registrar; no jurisdiction authority.
    Registrar,
    /// Event worker; no jurisdiction authority.
    Worker,
    /// Event attendee; no jurisdiction authority.
    Attendee,
}

impl Role {
    /// Returns `true` for roles that hold a jurisdiction scope
    /// (state, branch, or zonal admins).
    ///
    /// `SuperAdmin` is not scoped: it is exempt rather than scoped.
    pub fn is_scoped_admin(self) -> bool {
        match self {
            Role::StateAdmin | Role::BranchAdmin | Role::ZonalAdmin => true,
            Role::SuperAdmin
            | Role::Marketer
            | Role::Concierge
            | Role::Registrar
            | Role::Worker
            | Role::Attendee => false,
        }
    }

    /// The canonical wire name of the role (as carried in token claims).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::StateAdmin => "state_admin",
            Role::BranchAdmin => "branch_admin",
            Role::ZonalAdmin => "zonal_admin",
            Role::Marketer => "marketer",
            Role::Concierge => "concierge",
            Role::Registrar => "registrar",
            Role::Worker => "worker",
            Role::Attendee => "attendee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
