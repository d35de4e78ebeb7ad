//! Pipeline entry point for jurisdiction checks.
//!
//! One function, called by framework middleware after routing and
//! authentication: extract the principal and request view, hand them to
//! the gate, and either let the handler run or short-circuit with a
//! forbidden result. Synchronous and side-effect free beyond the
//! decision itself.

use crate::decision::DenialReason;
use crate::error::Forbidden;
use crate::gate::JurisdictionGate;

use super::{ExtractPrincipal, ExtractRequestParts};

/// Authorizes one request against one operation before its handler runs.
///
/// Operations with no declared requirement pass through untouched, even
/// unauthenticated ones; whatever other access control the application
/// has still applies. Operations with a declared requirement need an
/// authenticated principal — reaching the gate without one means the
/// authentication middleware was not wired in front, and the request
/// denies rather than guessing.
///
/// # Errors
///
/// Returns [`Forbidden`] when the principal is missing or out of
/// jurisdiction for the operation.
///
/// # Examples
///
/// ```
/// use jurisdiction_core::web::{authorize_request, ExtractPrincipal, ExtractRequestParts};
/// use jurisdiction_core::{
///     Jurisdiction, JurisdictionGate, Principal, RegistryBuilder, RequestParts, Role,
/// };
///
/// struct Incoming {
///     principal: Option<Principal>,
///     zone: String,
/// }
///
/// impl ExtractPrincipal for Incoming {
///     fn extract_principal(&self) -> Option<Principal> {
///         self.principal.clone()
///     }
/// }
///
/// impl ExtractRequestParts for Incoming {
///     fn extract_request_parts(&self) -> RequestParts {
///         let mut parts = RequestParts::new();
///         parts.add_path_param("zoneId", self.zone.clone());
///         parts
///     }
/// }
///
/// let gate = JurisdictionGate::new(
///     RegistryBuilder::new()
///         .declare("zones.checkin", [Jurisdiction::Zone])
///         .build(),
/// );
///
/// let request = Incoming {
///     principal: Some(
///         Principal::new(Role::ZonalAdmin)
///             .with_branch_id("B1")
///             .with_zone_id("Z1"),
///     ),
///     zone: "Z1".to_string(),
/// };
/// assert!(authorize_request(&gate, "zones.checkin", &request).is_ok());
/// ```
pub fn authorize_request<R>(
    gate: &JurisdictionGate,
    operation: &str,
    request: &R,
) -> Result<(), Forbidden>
where
    R: ExtractPrincipal + ExtractRequestParts,
{
    if gate.registry().requirement_for(operation).is_none() {
        return Ok(());
    }

    let Some(principal) = request.extract_principal() else {
        tracing::debug!(operation, "jurisdiction-checked operation reached unauthenticated");
        return Err(Forbidden::new(DenialReason::Unauthenticated));
    };

    let parts = request.extract_request_parts();
    gate.authorize(operation, &principal, &parts)
}
