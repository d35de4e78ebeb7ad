//! Web framework integration surface.
//!
//! The boundary between HTTP frameworks and the jurisdiction gate. This
//! module contains no framework-specific code; it defines the traits an
//! integration implements and the middleware-shaped entry point the
//! pipeline calls.
//!
//! # Integration Model
//!
//! Framework-specific middleware should:
//! 1. Run authentication first and attach the verified claims to its
//!    request type.
//! 2. Implement [`ExtractPrincipal`] and [`ExtractRequestParts`] for that
//!    request type.
//! 3. Call [`authorize_request`] with the matched operation name before
//!    dispatching to the handler.
//! 4. On `Err(Forbidden)`, render the framework's forbidden response and
//!    skip the handler; on `Ok(())`, proceed unmodified.
//!
//! # Example Flow
//!
//! ```ignore
//! // In a framework-specific integration (e.g., axum, actix):
//! let gate = JurisdictionGate::new(registry); // shared, built at startup
//!
//! // Per request, after authentication middleware:
//! match authorize_request(&gate, route.operation_name(), &request) {
//!     Ok(()) => next.run(request).await,
//!     Err(forbidden) => forbidden_response(forbidden),
//! }
//! ```

mod extract;
mod middleware;

pub use extract::{ExtractPrincipal, ExtractRequestParts};
pub use middleware::authorize_request;
