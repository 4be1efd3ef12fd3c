//! Related resource API operations

use log::debug;

use crate::aap::traits::ApiListResponse;
use crate::aap::AapClient;
use crate::config::api;
use crate::error::Result;

use super::models::RelatedItem;

/// Map a related link onto an endpoint relative to the API root
///
/// Absolute URLs keep whatever follows the first `/api/v2/`, and yield `None`
/// when the marker is missing. Relative links lose their leading `/` and,
/// when present, the `api/v2/` prefix the server puts on them.
pub fn related_endpoint(link: &str) -> Option<String> {
    if link.starts_with("http") {
        return link
            .split_once(api::BASE_PATH)
            .map(|(_, endpoint)| endpoint.to_string());
    }

    let path = link.trim_start_matches('/');
    let version_root = api::BASE_PATH.trim_start_matches('/');
    Some(path.strip_prefix(version_root).unwrap_or(path).to_string())
}

impl AapClient {
    /// Fetch the first page behind a related link
    ///
    /// Returns `Ok(None)` when an absolute link does not live under the API
    /// version root.
    pub async fn get_related_data(
        &self,
        link: &str,
    ) -> Result<Option<ApiListResponse<RelatedItem>>> {
        let Some(endpoint) = related_endpoint(link) else {
            debug!("Related link '{}' has no {} segment", link, api::BASE_PATH);
            return Ok(None);
        };

        let page: ApiListResponse<RelatedItem> = self.get(&endpoint).await?;
        debug!(
            "Related '{}' returned count {} ({} on this page)",
            endpoint,
            page.count,
            page.results.as_ref().map_or(0, Vec::len)
        );
        Ok(Some(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_related_endpoint_absolute() {
        assert_eq!(
            related_endpoint("https://aap.example.com/api/v2/organizations/5/teams/"),
            Some("organizations/5/teams/".to_string())
        );
    }

    #[test]
    fn test_related_endpoint_absolute_without_marker() {
        assert_eq!(
            related_endpoint("https://aap.example.com/api/controller/v2/teams/"),
            None
        );
    }

    #[test]
    fn test_related_endpoint_server_relative() {
        assert_eq!(
            related_endpoint("/api/v2/organizations/5/credentials/"),
            Some("organizations/5/credentials/".to_string())
        );
    }

    #[test]
    fn test_related_endpoint_plain_relative() {
        assert_eq!(
            related_endpoint("organizations/5/users/"),
            Some("organizations/5/users/".to_string())
        );
        assert_eq!(
            related_endpoint("/organizations/5/users/"),
            Some("organizations/5/users/".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_related_data_relative_link() {
        let mock_server = MockServer::start().await;
        let client = AapClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/5/teams/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": [
                    {"id": 1, "name": "ops"},
                    {"id": 2, "name": "dev"}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let page = client
            .get_related_data("/api/v2/organizations/5/teams/")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(page.count, 2);
        let items = page.into_results();
        assert_eq!(items[1].display_name(), "dev");
    }

    #[tokio::test]
    async fn test_get_related_data_absolute_link() {
        let mock_server = MockServer::start().await;
        let client = AapClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/5/users/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 1,
                "results": [{"id": 10, "username": "alice"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let link = format!("{}/api/v2/organizations/5/users/", mock_server.uri());
        let page = client.get_related_data(&link).await.unwrap().unwrap();
        assert_eq!(page.into_results()[0].display_name(), "alice");
    }

    #[tokio::test]
    async fn test_get_related_data_foreign_link_issues_no_request() {
        let mock_server = MockServer::start().await;
        let client = AapClient::test_client(&mock_server.uri());

        let result = client
            .get_related_data("https://elsewhere.example.com/teams/")
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }
}
