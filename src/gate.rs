use crate::decision::Decision;
use crate::error::Forbidden;
use crate::policy::evaluate;
use crate::principal::Principal;
use crate::registry::Registry;
use crate::request::RequestParts;
use crate::target::ResourceTarget;

/// The jurisdiction enforcement point for a request pipeline.
///
/// One gate wraps the frozen [`Registry`] and is shared by all request
/// handling. Per request, the pipeline calls [`JurisdictionGate::authorize`]
/// before the operation body runs; a denial short-circuits the pipeline
/// with a [`Forbidden`] result and the handler never executes.
///
/// Authorization here is opt-in: an operation with no declared
/// requirement passes unchecked, subject only to whatever other access
/// control the application applies.
///
/// # Examples
///
/// ```
/// use jurisdiction_core::{
///     Jurisdiction, JurisdictionGate, Principal, RegistryBuilder, RequestParts, Role,
/// };
///
/// let registry = RegistryBuilder::new()
///     .declare("branches.update", [Jurisdiction::Branch])
///     .build();
/// let gate = JurisdictionGate::new(registry);
///
/// let admin = Principal::new(Role::BranchAdmin).with_branch_id("B1");
/// let mut request = RequestParts::new();
/// request.add_path_param("branchId", "B1");
///
/// assert!(gate.authorize("branches.update", &admin, &request).is_ok());
///
/// let mut foreign = RequestParts::new();
/// foreign.add_path_param("branchId", "B2");
/// assert!(gate.authorize("branches.update", &admin, &foreign).is_err());
/// ```
#[derive(Debug)]
pub struct JurisdictionGate {
    registry: Registry,
}

impl JurisdictionGate {
    /// Wraps a frozen registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// The registry this gate consults.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Checks a principal against one operation and request.
    ///
    /// The principal comes from the authentication layer, which has
    /// already verified the credential; this method only decides
    /// jurisdiction. The target is extracted fresh from `request` and
    /// discarded with the decision.
    ///
    /// # Errors
    ///
    /// Returns [`Forbidden`] when the operation declares a requirement
    /// the principal does not satisfy.
    pub fn authorize(
        &self,
        operation: &str,
        principal: &Principal,
        request: &RequestParts,
    ) -> Result<(), Forbidden> {
        let Some(requirement) = self.registry.requirement_for(operation) else {
            return Ok(());
        };

        let target = ResourceTarget::from_request(request);
        match evaluate(principal, requirement, &target) {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => {
                tracing::debug!(
                    operation,
                    role = %principal.role(),
                    reason = %reason,
                    "request forbidden"
                );
                Err(Forbidden::new(reason))
            }
        }
    }
}
