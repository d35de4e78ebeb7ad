use crate::jurisdiction::Jurisdiction;
use crate::principal::ScopeId;
use crate::request::RequestParts;

/// The state/branch/zone identifiers a request is addressing.
///
/// Extracted fresh per request from [`RequestParts`] and discarded after
/// the decision. A missing identifier is recorded as `None`; absence is a
/// normal outcome here and is turned into a denial only by the policy
/// evaluator (fail-closed).
#[derive(Debug, Clone, Default)]
pub struct ResourceTarget {
    state_id: Option<ScopeId>,
    branch_id: Option<ScopeId>,
    zone_id: Option<ScopeId>,
}

impl ResourceTarget {
    /// Builds a target by running extraction for all three levels.
    pub fn from_request(parts: &RequestParts) -> Self {
        Self {
            state_id: Self::extract(Jurisdiction::State, parts),
            branch_id: Self::extract(Jurisdiction::Branch, parts),
            zone_id: Self::extract(Jurisdiction::Zone, parts),
        }
    }

    /// Extracts the identifier for one level from a request.
    ///
    /// Lookup order is the typed field name (`stateId`/`branchId`/`zoneId`)
    /// in path parameters, then body fields, then query parameters. For
    /// the state and branch levels, the generic `id` path parameter is a
    /// final fallback so self-addressing routes (`/branches/:id`) check
    /// the resource they name. Zone has no such fallback.
    ///
    /// A value that is blank after trimming is treated as not found and
    /// the search continues with the next source.
    pub fn extract(level: Jurisdiction, parts: &RequestParts) -> Option<ScopeId> {
        let field = level.field_name();

        let typed = parts
            .path_param(field)
            .and_then(ScopeId::new)
            .or_else(|| parts.body_field(field).and_then(ScopeId::new))
            .or_else(|| parts.query_param(field).and_then(ScopeId::new));

        match level {
            Jurisdiction::State | Jurisdiction::Branch => {
                typed.or_else(|| parts.path_param("id").and_then(ScopeId::new))
            }
            Jurisdiction::Zone => typed,
        }
    }

    /// Sets the state identifier directly (tests and non-HTTP callers).
    pub fn with_state_id(mut self, id: impl AsRef<str>) -> Self {
        self.state_id = ScopeId::new(id);
        self
    }

    /// Sets the branch identifier directly (tests and non-HTTP callers).
    pub fn with_branch_id(mut self, id: impl AsRef<str>) -> Self {
        self.branch_id = ScopeId::new(id);
        self
    }

    /// Sets the zone identifier directly (tests and non-HTTP callers).
    pub fn with_zone_id(mut self, id: impl AsRef<str>) -> Self {
        self.zone_id = ScopeId::new(id);
        self
    }

    /// The addressed state, if any.
    pub fn state_id(&self) -> Option<&ScopeId> {
        self.state_id.as_ref()
    }

    /// The addressed branch, if any.
    pub fn branch_id(&self) -> Option<&ScopeId> {
        self.branch_id.as_ref()
    }

    /// The addressed zone, if any.
    pub fn zone_id(&self) -> Option<&ScopeId> {
        self.zone_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_wins_over_body_and_query() {
        let mut parts = RequestParts::new();
        parts.add_path_param("stateId", "S-path");
        parts.add_body_field("stateId", "S-body");
        parts.add_query_param("stateId", "S-query");

        let id = ResourceTarget::extract(Jurisdiction::State, &parts).unwrap();
        assert_eq!(id.as_str(), "S-path");
    }

    #[test]
    fn body_wins_over_query() {
        let mut parts = RequestParts::new();
        parts.add_body_field("branchId", "B-body");
        parts.add_query_param("branchId", "B-query");

        let id = ResourceTarget::extract(Jurisdiction::Branch, &parts).unwrap();
        assert_eq!(id.as_str(), "B-body");
    }

    #[test]
    fn query_is_used_when_nothing_else_matches() {
        let mut parts = RequestParts::new();
        parts.add_query_param("zoneId", "Z-query");

        let id = ResourceTarget::extract(Jurisdiction::Zone, &parts).unwrap();
        assert_eq!(id.as_str(), "Z-query");
    }

    #[test]
    fn generic_id_path_param_backs_state_and_branch() {
        // Route like /branches/:id - the path names the resource itself.
        let mut parts = RequestParts::new();
        parts.add_path_param("id", "B1");

        let branch = ResourceTarget::extract(Jurisdiction::Branch, &parts).unwrap();
        assert_eq!(branch.as_str(), "B1");

        let state = ResourceTarget::extract(Jurisdiction::State, &parts).unwrap();
        assert_eq!(state.as_str(), "B1");
    }

    #[test]
    fn zone_does_not_fall_back_to_generic_id() {
        let mut parts = RequestParts::new();
        parts.add_path_param("id", "Z1");

        assert!(ResourceTarget::extract(Jurisdiction::Zone, &parts).is_none());
    }

    #[test]
    fn typed_field_beats_generic_id_fallback() {
        let mut parts = RequestParts::new();
        parts.add_path_param("id", "other");
        parts.add_body_field("branchId", "B1");

        let id = ResourceTarget::extract(Jurisdiction::Branch, &parts).unwrap();
        assert_eq!(id.as_str(), "B1");
    }

    #[test]
    fn blank_values_are_skipped_not_matched() {
        let mut parts = RequestParts::new();
        parts.add_path_param("stateId", "   ");
        parts.add_query_param("stateId", "S1");

        let id = ResourceTarget::extract(Jurisdiction::State, &parts).unwrap();
        assert_eq!(id.as_str(), "S1");
    }

    #[test]
    fn absent_everywhere_is_none() {
        let parts = RequestParts::new();
        assert!(ResourceTarget::extract(Jurisdiction::State, &parts).is_none());
    }

    #[test]
    fn from_request_fills_all_levels() {
        let mut parts = RequestParts::new();
        parts.add_path_param("stateId", "S1");
        parts.add_body_field("branchId", "B1");
        parts.add_query_param("zoneId", "Z1");

        let target = ResourceTarget::from_request(&parts);
        assert_eq!(target.state_id().unwrap().as_str(), "S1");
        assert_eq!(target.branch_id().unwrap().as_str(), "B1");
        assert_eq!(target.zone_id().unwrap().as_str(), "Z1");
    }
}
