use std::fmt;

use crate::jurisdiction::Jurisdiction;

/// The outcome of one jurisdiction evaluation.
///
/// Computed fresh per request and discarded afterwards. A denial carries
/// the reason for diagnostics; expected denial is a value here, never an
/// error or a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The principal may act on the target.
    Allow,
    /// The principal may not act on the target.
    Deny(DenialReason),
}

impl Decision {
    /// `true` for [`Decision::Allow`].
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// The denial reason, if this is a denial.
    pub fn denial_reason(&self) -> Option<&DenialReason> {
        match self {
            Decision::Allow => None,
            Decision::Deny(reason) => Some(reason),
        }
    }
}

/// Why an evaluation denied.
///
/// Reasons name the failing level (or the offending declared name) but
/// never the identifiers that were compared: every denial renders as the
/// same access-denied class of message so callers cannot probe the
/// jurisdiction topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    /// The principal's role has no authority at the checked level.
    RoleNotPermitted {
        /// The level the role failed at.
        level: Jurisdiction,
    },
    /// The principal's scope does not cover the addressed resource, or
    /// the identifier needed for the comparison was missing.
    OutOfJurisdiction {
        /// The level the scope check failed at.
        level: Jurisdiction,
    },
    /// The operation declared a jurisdiction level name that does not
    /// exist. Misconfiguration, reported loudly out-of-band; the caller
    /// still just sees a denial.
    UnrecognizedLevel {
        /// The declared name that failed to parse.
        name: String,
    },
    /// A jurisdiction-checked operation was reached with no
    /// authenticated principal. Authentication runs upstream; hitting
    /// this means the pipeline was miswired, and the request denies.
    Unauthenticated,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::RoleNotPermitted { level } => {
                write!(f, "role not permitted at {} level", level)
            }
            DenialReason::OutOfJurisdiction { level } => {
                write!(f, "outside {} jurisdiction", level)
            }
            DenialReason::UnrecognizedLevel { name } => {
                write!(f, "unrecognized jurisdiction level '{}'", name)
            }
            DenialReason::Unauthenticated => f.write_str("no authenticated principal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_has_no_reason() {
        assert!(Decision::Allow.is_allow());
        assert!(Decision::Allow.denial_reason().is_none());
    }

    #[test]
    fn deny_carries_its_reason() {
        let decision = Decision::Deny(DenialReason::OutOfJurisdiction {
            level: Jurisdiction::Branch,
        });
        assert!(!decision.is_allow());
        assert_eq!(
            decision.denial_reason().unwrap().to_string(),
            "outside branch jurisdiction"
        );
    }

    #[test]
    fn reasons_never_mention_identifiers() {
        // The comparison inputs must not be reconstructible from the
        // rendered reason.
        let reasons = [
            DenialReason::RoleNotPermitted {
                level: Jurisdiction::State,
            },
            DenialReason::OutOfJurisdiction {
                level: Jurisdiction::Zone,
            },
        ];
        for reason in reasons {
            let rendered = reason.to_string();
            assert!(!rendered.contains("S1"));
            assert!(!rendered.contains("id="));
        }
    }
}
