//! Hierarchical jurisdiction authorization for role-scoped admin systems.
//!
//! This crate decides whether an authenticated admin may act on a
//! resource that belongs to a state, branch, or zone. The hierarchy is
//! strict — states contain branches, branches contain zones — and the
//! rules are monotonic: a role scoped above the checked level is
//! authorized for the whole subtree below it, while a role scoped at the
//! checked level must match the target exactly.
//!
//! # Core Types
//!
//! - [`Principal`]: the authenticated actor (role + scope identifiers)
//! - [`Requirement`]: the jurisdiction levels an operation declares
//! - [`ResourceTarget`]: the state/branch/zone a request addresses
//! - [`Decision`]: allow, or deny with a reason
//! - [`JurisdictionGate`]: the enforcement point a request pipeline calls
//!
//! # Examples
//!
//! ```
//! use jurisdiction_core::{
//!     Jurisdiction, JurisdictionGate, Principal, RegistryBuilder, RequestParts, Role,
//! };
//!
//! // Requirements are declared per operation at startup, then frozen.
//! let registry = RegistryBuilder::new()
//!     .declare("branches.update", [Jurisdiction::Branch])
//!     .build();
//! let gate = JurisdictionGate::new(registry);
//!
//! // Per request: the authentication layer supplies the principal, the
//! // transport supplies path/body/query, and the gate decides.
//! let admin = Principal::new(Role::BranchAdmin).with_branch_id("B1");
//! let mut request = RequestParts::new();
//! request.add_path_param("id", "B1");
//!
//! assert!(gate.authorize("branches.update", &admin, &request).is_ok());
//! ```
//!
//! Checks are pure, synchronous computations over per-request data; the
//! gate can be shared across threads freely because the registry is
//! read-only after startup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decision;
mod error;
mod gate;
mod jurisdiction;
mod policy;
mod principal;
mod registry;
mod request;
mod role;
mod target;
pub mod web;

pub use decision::{Decision, DenialReason};
pub use error::{Error, Forbidden};
pub use gate::JurisdictionGate;
pub use jurisdiction::{Jurisdiction, Requirement};
pub use policy::{evaluate, evaluate_named};
pub use principal::{Principal, ScopeId};
pub use registry::{Registry, RegistryBuilder};
pub use request::RequestParts;
pub use role::Role;
pub use target::ResourceTarget;
