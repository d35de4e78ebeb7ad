use std::collections::HashMap;

/// The pieces of an inbound request that jurisdiction checks read.
///
/// A framework-agnostic view of one request: path parameters, body
/// fields, and query parameters as plain owned string maps. Framework
/// integrations build one of these per request (see [`crate::web`]);
/// nothing here depends on any HTTP framework's types.
///
/// Only string-like fields matter to authorization, so body values are
/// carried as strings; nested body structure is flattened by the
/// integration before it lands here.
///
/// # Examples
///
/// ```
/// use jurisdiction_core::RequestParts;
///
/// let mut parts = RequestParts::new();
/// parts.add_path_param("branchId", "B1");
/// parts.add_query_param("page", "2");
///
/// assert_eq!(parts.path_param("branchId"), Some("B1"));
/// assert_eq!(parts.body_field("branchId"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    path_params: HashMap<String, String>,
    body_fields: HashMap<String, String>,
    query_params: HashMap<String, String>,
}

impl RequestParts {
    /// Creates an empty request view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path parameter (from the route match).
    pub fn add_path_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.path_params.insert(key.into(), value.into());
    }

    /// Adds a body field (flattened top-level field from the payload).
    pub fn add_body_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.body_fields.insert(key.into(), value.into());
    }

    /// Adds a query parameter.
    pub fn add_query_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query_params.insert(key.into(), value.into());
    }

    /// Looks up a path parameter.
    pub fn path_param(&self, key: &str) -> Option<&str> {
        self.path_params.get(key).map(String::as_str)
    }

    /// Looks up a body field.
    pub fn body_field(&self, key: &str) -> Option<&str> {
        self.body_fields.get(key).map(String::as_str)
    }

    /// Looks up a query parameter.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query_params.get(key).map(String::as_str)
    }
}
