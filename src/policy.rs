//! The jurisdiction policy evaluator.
//!
//! A pure function from (principal, requirement, target) to a
//! [`Decision`]. Each level rule encodes the same shape: a role scoped
//! above the checked level is authorized for the whole subtree below it,
//! while a role scoped at or below the checked level must match exactly.
//! Broader-scope roles therefore always satisfy narrower-scope checks
//! when their own scope contains the target.
//!
//! Evaluation is synchronous, touches no shared state, and never panics;
//! expected denial is a returned value, not an error.

use crate::decision::{Decision, DenialReason};
use crate::error::Error;
use crate::jurisdiction::{Jurisdiction, Requirement};
use crate::principal::{Principal, ScopeId};
use crate::role::Role;
use crate::target::ResourceTarget;

/// Decides whether a principal may act on a resource target.
///
/// `SuperAdmin` is jurisdiction-exempt and always allowed. Every other
/// role must pass each required level in declaration order; the first
/// failing level's reason becomes the denial.
///
/// # Examples
///
/// ```
/// use jurisdiction_core::{
///     evaluate, Jurisdiction, Principal, Requirement, ResourceTarget, Role,
/// };
///
/// let admin = Principal::new(Role::BranchAdmin).with_branch_id("B1");
/// let requirement = Requirement::from(Jurisdiction::Branch);
///
/// let own = ResourceTarget::default().with_branch_id("B1");
/// assert!(evaluate(&admin, &requirement, &own).is_allow());
///
/// let other = ResourceTarget::default().with_branch_id("B2");
/// assert!(!evaluate(&admin, &requirement, &other).is_allow());
/// ```
pub fn evaluate(
    principal: &Principal,
    requirement: &Requirement,
    target: &ResourceTarget,
) -> Decision {
    if principal.role() == Role::SuperAdmin {
        return Decision::Allow;
    }

    for &level in requirement.levels() {
        if let Some(reason) = check_level(principal, level, target) {
            tracing::debug!(
                role = %principal.role(),
                level = %level,
                "jurisdiction check denied"
            );
            return Decision::Deny(reason);
        }
    }

    Decision::Allow
}

/// Decides using declared level names instead of a parsed [`Requirement`].
///
/// An unrecognized name denies the entire evaluation (fail-closed) and
/// is reported at error level, since it indicates a misconfigured
/// operation rather than a bad request. Callers that can parse at
/// registration time should prefer [`Requirement::named`] and
/// [`evaluate`], which make the defect loud at startup.
pub fn evaluate_named(principal: &Principal, names: &[&str], target: &ResourceTarget) -> Decision {
    match Requirement::named(names) {
        Ok(requirement) => evaluate(principal, &requirement, target),
        Err(Error::UnrecognizedLevel(name)) => {
            tracing::error!(
                level = %name,
                "operation declares an unrecognized jurisdiction level; denying"
            );
            Decision::Deny(DenialReason::UnrecognizedLevel { name })
        }
    }
}

/// Applies one level's rule. `None` means the level passed.
fn check_level(
    principal: &Principal,
    level: Jurisdiction,
    target: &ResourceTarget,
) -> Option<DenialReason> {
    // SuperAdmin never reaches here via `evaluate`, but the rules stay
    // exhaustive so a new role cannot slip through a wildcard.
    match level {
        Jurisdiction::State => match principal.role() {
            Role::SuperAdmin => None,
            Role::StateAdmin | Role::BranchAdmin | Role::ZonalAdmin => {
                scope_match(level, target.state_id(), principal.state_id())
            }
            Role::Marketer
            | Role::Concierge
            | Role::Registrar
            | Role::Worker
            | Role::Attendee => Some(DenialReason::RoleNotPermitted { level }),
        },
        Jurisdiction::Branch => match principal.role() {
            Role::SuperAdmin => None,
            // A state admin is implicitly authorized for every branch in
            // its own state.
            Role::StateAdmin => scope_match(level, target.state_id(), principal.state_id()),
            Role::BranchAdmin => scope_match(level, target.branch_id(), principal.branch_id()),
            // Zone is fully nested in branch, so a zonal admin passes
            // branch-level checks within its own branch.
            Role::ZonalAdmin => scope_match(level, target.branch_id(), principal.branch_id()),
            Role::Marketer
            | Role::Concierge
            | Role::Registrar
            | Role::Worker
            | Role::Attendee => Some(DenialReason::RoleNotPermitted { level }),
        },
        Jurisdiction::Zone => match principal.role() {
            Role::SuperAdmin => None,
            Role::StateAdmin => scope_match(level, target.state_id(), principal.state_id()),
            Role::BranchAdmin => scope_match(level, target.branch_id(), principal.branch_id()),
            Role::ZonalAdmin => scope_match(level, target.zone_id(), principal.zone_id()),
            Role::Marketer
            | Role::Concierge
            | Role::Registrar
            | Role::Worker
            | Role::Attendee => Some(DenialReason::RoleNotPermitted { level }),
        },
    }
}

/// Compares a target identifier against the principal's scope.
///
/// Either side missing fails the comparison. A request that omits the
/// identifier a check needs is indistinguishable from one addressing a
/// resource outside the principal's scope; both deny.
fn scope_match(
    level: Jurisdiction,
    target_id: Option<&ScopeId>,
    principal_id: Option<&ScopeId>,
) -> Option<DenialReason> {
    match (target_id, principal_id) {
        (Some(t), Some(p)) if t == p => None,
        _ => Some(DenialReason::OutOfJurisdiction { level }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch_req() -> Requirement {
        Requirement::from(Jurisdiction::Branch)
    }

    #[test]
    fn super_admin_is_exempt_everywhere() {
        let principal = Principal::new(Role::SuperAdmin);
        let requirement = Requirement::new([
            Jurisdiction::State,
            Jurisdiction::Branch,
            Jurisdiction::Zone,
        ]);
        // No target identifiers at all; still allowed.
        let target = ResourceTarget::default();
        assert!(evaluate(&principal, &requirement, &target).is_allow());
    }

    #[test]
    fn state_admin_covers_every_sublevel_in_state() {
        let principal = Principal::new(Role::StateAdmin).with_state_id("S1");
        let target = ResourceTarget::default().with_state_id("S1");

        for level in [Jurisdiction::State, Jurisdiction::Branch, Jurisdiction::Zone] {
            let decision = evaluate(&principal, &Requirement::from(level), &target);
            assert!(decision.is_allow(), "state admin should pass {} check", level);
        }
    }

    #[test]
    fn state_admin_denied_outside_own_state() {
        let principal = Principal::new(Role::StateAdmin).with_state_id("S1");
        let target = ResourceTarget::default().with_state_id("S2");

        let decision = evaluate(&principal, &Requirement::from(Jurisdiction::State), &target);
        assert_eq!(
            decision.denial_reason(),
            Some(&DenialReason::OutOfJurisdiction {
                level: Jurisdiction::State
            })
        );
    }

    #[test]
    fn branch_admin_matches_own_branch_exactly() {
        let principal = Principal::new(Role::BranchAdmin).with_branch_id("B1");

        let own = ResourceTarget::default().with_branch_id("B1");
        assert!(evaluate(&principal, &branch_req(), &own).is_allow());

        let other = ResourceTarget::default().with_branch_id("B2");
        assert!(!evaluate(&principal, &branch_req(), &other).is_allow());
    }

    #[test]
    fn branch_admin_zone_check_compares_branch_not_zone() {
        let principal = Principal::new(Role::BranchAdmin).with_branch_id("B1");
        let requirement = Requirement::from(Jurisdiction::Zone);

        // Zone id present but irrelevant; the branch id is what counts.
        let target = ResourceTarget::default()
            .with_branch_id("B1")
            .with_zone_id("Z-unrelated");
        assert!(evaluate(&principal, &requirement, &target).is_allow());

        let target = ResourceTarget::default().with_zone_id("Z1");
        assert!(!evaluate(&principal, &requirement, &target).is_allow());
    }

    #[test]
    fn zonal_admin_zone_check_requires_exact_zone() {
        let principal = Principal::new(Role::ZonalAdmin)
            .with_branch_id("B1")
            .with_zone_id("Z1");
        let requirement = Requirement::from(Jurisdiction::Zone);

        let own = ResourceTarget::default().with_zone_id("Z1");
        assert!(evaluate(&principal, &requirement, &own).is_allow());

        let other = ResourceTarget::default().with_zone_id("Z2");
        assert!(!evaluate(&principal, &requirement, &other).is_allow());
    }

    #[test]
    fn zonal_admin_passes_branch_checks_in_own_branch() {
        let principal = Principal::new(Role::ZonalAdmin)
            .with_branch_id("B1")
            .with_zone_id("Z1");

        let target = ResourceTarget::default().with_branch_id("B1");
        assert!(evaluate(&principal, &branch_req(), &target).is_allow());

        let target = ResourceTarget::default().with_branch_id("B2");
        assert!(!evaluate(&principal, &branch_req(), &target).is_allow());
    }

    #[test]
    fn non_admin_roles_are_denied_at_every_level() {
        let roles = [
            Role::Marketer,
            Role::Concierge,
            Role::Registrar,
            Role::Worker,
            Role::Attendee,
        ];
        // Identifiers that would match if the role were allowed to try.
        let target = ResourceTarget::default()
            .with_state_id("S1")
            .with_branch_id("B1")
            .with_zone_id("Z1");

        for role in roles {
            let principal = Principal::new(role)
                .with_state_id("S1")
                .with_branch_id("B1")
                .with_zone_id("Z1");
            for level in [Jurisdiction::State, Jurisdiction::Branch, Jurisdiction::Zone] {
                let decision = evaluate(&principal, &Requirement::from(level), &target);
                assert_eq!(
                    decision.denial_reason(),
                    Some(&DenialReason::RoleNotPermitted { level }),
                    "{} should be denied at {} level",
                    role,
                    level
                );
            }
        }
    }

    #[test]
    fn missing_target_identifier_denies() {
        let principal = Principal::new(Role::BranchAdmin).with_branch_id("B1");
        let target = ResourceTarget::default();

        let decision = evaluate(&principal, &branch_req(), &target);
        assert_eq!(
            decision.denial_reason(),
            Some(&DenialReason::OutOfJurisdiction {
                level: Jurisdiction::Branch
            })
        );
    }

    #[test]
    fn missing_principal_scope_denies() {
        // A branch admin token without a branch claim can match nothing.
        let principal = Principal::new(Role::BranchAdmin);
        let target = ResourceTarget::default().with_branch_id("B1");

        assert!(!evaluate(&principal, &branch_req(), &target).is_allow());
    }

    #[test]
    fn state_admin_passes_zone_check_without_zone_identifier() {
        let principal = Principal::new(Role::StateAdmin).with_state_id("S1");
        let requirement = Requirement::from(Jurisdiction::Zone);
        let target = ResourceTarget::default().with_state_id("S1");

        assert!(evaluate(&principal, &requirement, &target).is_allow());
    }

    #[test]
    fn compound_requirement_fails_on_first_failing_level() {
        // Branch admin is not authorized at state level, so the state
        // check denies even though the branch check alone would pass.
        let principal = Principal::new(Role::BranchAdmin).with_branch_id("B1");
        let requirement = Requirement::new([Jurisdiction::State, Jurisdiction::Branch]);
        let target = ResourceTarget::default().with_branch_id("B1");

        let decision = evaluate(&principal, &requirement, &target);
        assert_eq!(
            decision.denial_reason(),
            Some(&DenialReason::OutOfJurisdiction {
                level: Jurisdiction::State
            })
        );
    }

    #[test]
    fn empty_requirement_allows_any_role() {
        let principal = Principal::new(Role::Attendee);
        let target = ResourceTarget::default();
        assert!(evaluate(&principal, &Requirement::new([]), &target).is_allow());
    }

    #[test]
    fn evaluate_named_denies_on_unknown_level() {
        let principal = Principal::new(Role::StateAdmin).with_state_id("S1");
        let target = ResourceTarget::default().with_state_id("S1");

        let decision = evaluate_named(&principal, &["state", "district"], &target);
        assert_eq!(
            decision.denial_reason(),
            Some(&DenialReason::UnrecognizedLevel {
                name: "district".to_string()
            })
        );
    }

    #[test]
    fn evaluate_named_matches_typed_evaluation() {
        let principal = Principal::new(Role::ZonalAdmin)
            .with_branch_id("B1")
            .with_zone_id("Z1");
        let target = ResourceTarget::default().with_zone_id("Z1");

        let named = evaluate_named(&principal, &["zone"], &target);
        let typed = evaluate(&principal, &Requirement::from(Jurisdiction::Zone), &target);
        assert_eq!(named, typed);
    }
}
