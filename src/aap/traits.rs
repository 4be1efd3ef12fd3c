//! Common traits for AAP resources

use serde::Deserialize;

/// Common trait for AAP resources addressed by numeric ID
pub trait AapResource {
    /// Get the resource ID
    fn id(&self) -> u64;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    ///
    /// Default implementation checks for exact match on either field.
    fn matches(&self, input: &str) -> bool {
        self.name() == input || input.parse::<u64>().is_ok_and(|id| id == self.id())
    }
}

/// Generic list response for AAP collection endpoints
///
/// Every collection answers with `count`, `next`, `previous` and `results`.
/// Only one page is ever read; `next` is kept so callers can tell when the
/// page did not hold everything.
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<T>>,
}

impl<T> ApiListResponse<T> {
    /// True when more pages exist beyond this one
    pub fn has_more_pages(&self) -> bool {
        self.next.is_some()
    }

    /// Consume self and return the items of this page
    pub fn into_results(self) -> Vec<T> {
        self.results.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        id: u64,
        name: String,
    }

    impl AapResource for TestResource {
        fn id(&self) -> u64 {
            self.id
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn resource() -> TestResource {
        TestResource {
            id: 5,
            name: "Engineering".to_string(),
        }
    }

    #[test]
    fn test_matches_by_id() {
        assert!(resource().matches("5"));
    }

    #[test]
    fn test_matches_by_name() {
        assert!(resource().matches("Engineering"));
    }

    #[test]
    fn test_no_match() {
        assert!(!resource().matches("6"));
        assert!(!resource().matches("engineering"));
    }

    #[test]
    fn test_list_response_full_page() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "count": 7,
                "next": "/api/v2/organizations/5/projects/?page=2",
                "previous": null,
                "results": [{"id": 1}, {"id": 2}]
            }))
            .unwrap();
        assert_eq!(response.count, 7);
        assert!(response.has_more_pages());
        assert_eq!(response.into_results().len(), 2);
    }

    #[test]
    fn test_list_response_without_results() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({"count": 3})).unwrap();
        assert!(response.results.is_none());
        assert!(!response.has_more_pages());
        assert!(response.into_results().is_empty());
    }

    #[test]
    fn test_list_response_empty_object() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(response.count, 0);
        assert!(response.into_results().is_empty());
    }
}
