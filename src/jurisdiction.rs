use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A hierarchical scope level: state contains branches, branches contain
/// zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jurisdiction {
    /// Top scope level.
    State,
    /// Mid scope level, nested in a state.
    Branch,
    /// Bottom scope level, nested in a branch.
    Zone,
}

impl Jurisdiction {
    /// The declared name of the level, as used in operation metadata.
    pub fn as_str(self) -> &'static str {
        match self {
            Jurisdiction::State => "state",
            Jurisdiction::Branch => "branch",
            Jurisdiction::Zone => "zone",
        }
    }

    /// The typed field name carrying this level's identifier in requests.
    pub fn field_name(self) -> &'static str {
        match self {
            Jurisdiction::State => "stateId",
            Jurisdiction::Branch => "branchId",
            Jurisdiction::Zone => "zoneId",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = Error;

    /// Parses a declared level name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedLevel`] for anything other than
    /// `"state"`, `"branch"`, or `"zone"`. An unrecognized name in
    /// operation metadata is a misconfiguration, never a legitimate
    /// access attempt.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "state" => Ok(Jurisdiction::State),
            "branch" => Ok(Jurisdiction::Branch),
            "zone" => Ok(Jurisdiction::Zone),
            other => Err(Error::UnrecognizedLevel(other.to_string())),
        }
    }
}

/// The jurisdiction levels an operation requires, in declaration order.
///
/// Attached to an operation at registration time and read-only
/// thereafter. Every declared level must pass for the operation to be
/// authorized; evaluation stops at the first failing level.
///
/// # Examples
///
/// ```
/// use jurisdiction_core::{Jurisdiction, Requirement};
///
/// let req = Requirement::new([Jurisdiction::State, Jurisdiction::Branch]);
/// assert_eq!(req.levels(), &[Jurisdiction::State, Jurisdiction::Branch]);
///
/// // From declared names; unknown names are rejected.
/// let req = Requirement::named(&["branch"]).unwrap();
/// assert_eq!(req.levels(), &[Jurisdiction::Branch]);
/// assert!(Requirement::named(&["district"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    levels: Vec<Jurisdiction>,
}

impl Requirement {
    /// Builds a requirement from typed levels, deduplicating repeats
    /// while preserving first-occurrence order.
    pub fn new(levels: impl IntoIterator<Item = Jurisdiction>) -> Self {
        let mut deduped = Vec::new();
        for level in levels {
            if !deduped.contains(&level) {
                deduped.push(level);
            }
        }
        Self { levels: deduped }
    }

    /// Builds a requirement from declared level names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedLevel`] if any name is not a known
    /// jurisdiction level. The whole requirement is rejected; a partially
    /// parsed requirement would silently weaken the check.
    pub fn named(names: &[&str]) -> Result<Self, Error> {
        let levels = names
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Jurisdiction>, Error>>()?;
        Ok(Self::new(levels))
    }

    /// The required levels in declaration order.
    pub fn levels(&self) -> &[Jurisdiction] {
        &self.levels
    }

    /// `true` when no levels are required.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl From<Jurisdiction> for Requirement {
    fn from(level: Jurisdiction) -> Self {
        Requirement::new([level])
    }
}
