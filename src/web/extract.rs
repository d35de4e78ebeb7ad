//! Extraction boundary traits for web integration.
//!
//! These traits define how framework-specific request types map into the
//! crate's domain types. Integrations implement them; nothing here
//! depends on any particular HTTP framework.

use crate::principal::Principal;
use crate::request::RequestParts;

/// Extracts the authenticated principal from a framework request.
///
/// The authentication layer (session middleware, token verification)
/// runs before jurisdiction checks; this trait only surfaces its result.
/// Returning `None` means the request is unauthenticated, which denies
/// any jurisdiction-checked operation.
///
/// # Examples
///
/// ```
/// use jurisdiction_core::web::ExtractPrincipal;
/// use jurisdiction_core::{Principal, Role};
///
/// struct MyRequest {
///     claims: Option<(Role, String)>,
/// }
///
/// impl ExtractPrincipal for MyRequest {
///     fn extract_principal(&self) -> Option<Principal> {
///         self.claims.as_ref().map(|(role, state)| {
///             Principal::new(*role).with_state_id(state)
///         })
///     }
/// }
/// ```
pub trait ExtractPrincipal {
    /// The verified principal, or `None` if unauthenticated.
    fn extract_principal(&self) -> Option<Principal>;
}

/// Extracts the jurisdiction-relevant request pieces from a framework
/// request.
///
/// Integrations copy path parameters, top-level body fields, and query
/// parameters into an owned [`RequestParts`]. Only string-like values
/// matter; integrations flatten or skip structured body values.
pub trait ExtractRequestParts {
    /// The request's path/body/query view.
    fn extract_request_parts(&self) -> RequestParts;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    struct TestRequest {
        role: Option<Role>,
        branch: Option<String>,
    }

    impl ExtractPrincipal for TestRequest {
        fn extract_principal(&self) -> Option<Principal> {
            let role = self.role?;
            let mut principal = Principal::new(role);
            if let Some(branch) = &self.branch {
                principal = principal.with_branch_id(branch);
            }
            Some(principal)
        }
    }

    impl ExtractRequestParts for TestRequest {
        fn extract_request_parts(&self) -> RequestParts {
            let mut parts = RequestParts::new();
            if let Some(branch) = &self.branch {
                parts.add_path_param("branchId", branch.clone());
            }
            parts
        }
    }

    #[test]
    fn extract_principal_surfaces_authentication_result() {
        let req = TestRequest {
            role: Some(Role::BranchAdmin),
            branch: Some("B1".to_string()),
        };
        let principal = req.extract_principal().unwrap();
        assert_eq!(principal.role(), Role::BranchAdmin);
        assert_eq!(principal.branch_id().unwrap().as_str(), "B1");
    }

    #[test]
    fn unauthenticated_request_extracts_no_principal() {
        let req = TestRequest {
            role: None,
            branch: None,
        };
        assert!(req.extract_principal().is_none());
    }

    #[test]
    fn extract_request_parts_builds_owned_view() {
        let req = TestRequest {
            role: None,
            branch: Some("B9".to_string()),
        };
        let parts = req.extract_request_parts();
        assert_eq!(parts.path_param("branchId"), Some("B9"));
    }
}
