use std::fmt;

use crate::decision::DenialReason;

/// Errors that indicate a defect rather than a denied request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation declared a jurisdiction level name that does not
    /// exist. This is a misconfiguration of the operation registry, not
    /// a property of any incoming request.
    UnrecognizedLevel(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnrecognizedLevel(name) => {
                write!(f, "unrecognized jurisdiction level '{}'", name)
            }
        }
    }
}

impl std::error::Error for Error {}

/// An expected authorization denial, ready to render as a forbidden
/// response.
///
/// All denials surface as the same access-denied class of response; the
/// internal reason is available for logging but the `Display` output is
/// uniform and never includes the identifiers that were compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forbidden {
    reason: DenialReason,
}

impl Forbidden {
    /// Wraps a denial reason.
    pub fn new(reason: DenialReason) -> Self {
        Self { reason }
    }

    /// The underlying denial reason (for diagnostics, not for clients).
    pub fn reason(&self) -> &DenialReason {
        &self.reason
    }
}

impl fmt::Display for Forbidden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Uniform client-facing message regardless of root cause.
        write!(f, "access denied")
    }
}

impl std::error::Error for Forbidden {}

impl From<DenialReason> for Forbidden {
    fn from(reason: DenialReason) -> Self {
        Forbidden::new(reason)
    }
}
