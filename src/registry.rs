use std::collections::HashMap;

use crate::error::Error;
use crate::jurisdiction::{Jurisdiction, Requirement};

/// Accumulates operation → requirement metadata before startup freezes
/// it.
///
/// Declarations happen once, while the application wires its routes;
/// [`RegistryBuilder::build`] then produces an immutable [`Registry`]
/// that request handling reads concurrently without coordination.
///
/// # Examples
///
/// ```
/// use jurisdiction_core::{Jurisdiction, RegistryBuilder};
///
/// let registry = RegistryBuilder::new()
///     .declare("branches.update", [Jurisdiction::Branch])
///     .declare_named("zones.checkin", &["zone"])
///     .unwrap()
///     .build();
///
/// assert!(registry.requirement_for("branches.update").is_some());
/// assert!(registry.requirement_for("events.list").is_none());
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    operations: HashMap<String, Requirement>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the jurisdiction levels an operation requires.
    ///
    /// Declaring the same operation again replaces the earlier
    /// requirement; the last declaration wins.
    pub fn declare(
        mut self,
        operation: impl Into<String>,
        levels: impl IntoIterator<Item = Jurisdiction>,
    ) -> Self {
        self.operations
            .insert(operation.into(), Requirement::new(levels));
        self
    }

    /// Declares an operation's requirement from level names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedLevel`] for an unknown name, so a
    /// misdeclared route fails at startup instead of silently denying
    /// every request it receives.
    pub fn declare_named(mut self, operation: impl Into<String>, names: &[&str]) -> Result<Self, Error> {
        let requirement = Requirement::named(names)?;
        self.operations.insert(operation.into(), requirement);
        Ok(self)
    }

    /// Freezes the declarations into an immutable registry.
    pub fn build(self) -> Registry {
        Registry {
            operations: self.operations,
        }
    }
}

/// Read-only operation → requirement lookup table.
///
/// Built once at startup and never mutated afterwards; sharing it across
/// request-handling threads needs no locking.
#[derive(Debug)]
pub struct Registry {
    operations: HashMap<String, Requirement>,
}

impl Registry {
    /// The requirement declared for an operation, if any.
    ///
    /// `None` means the operation opted out of jurisdiction checks.
    pub fn requirement_for(&self, operation: &str) -> Option<&Requirement> {
        self.operations.get(operation)
    }

    /// Number of operations with declared requirements.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// `true` when no operation has declared a requirement.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
