//! Documentation search endpoint.

use crate::client::PkgDocsClient;
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DOC_SEARCH_PATH: &str = "/tools/package_doc_search";

/// Docs API for searching a package's documentation.
pub struct DocsApi<'a> {
    client: &'a PkgDocsClient,
}

impl<'a> DocsApi<'a> {
    pub(crate) fn new(client: &'a PkgDocsClient) -> Self {
        Self { client }
    }

    /// Search the documentation of `package_name`.
    ///
    /// The backend's JSON answer is returned untouched.
    pub async fn search(&self, package_name: &str, query: &str) -> SdkResult<Value> {
        let request = DocSearchRequest {
            package_name: package_name.to_string(),
            query: query.to_string(),
        };
        self.client.http.post_json(DOC_SEARCH_PATH, &request).await
    }
}

/// Body of a documentation search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocSearchRequest {
    pub package_name: String,
    pub query: String,
}

#[cfg(test)]
mod tests {
    use crate::client::PkgDocsClient;
    use crate::error::SdkError;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PkgDocsClient {
        PkgDocsClient::builder()
            .base_url(server.uri())
            .api_key("sk-docs")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_search_posts_package_and_query() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tools/package_doc_search"))
            .and(query_param("api_key", "sk-docs"))
            .and(body_json(json!({"package_name": "react", "query": "useEffect"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"title": "useEffect", "url": "https://react.dev/reference/react/useEffect"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .docs()
            .search("react", "useEffect")
            .await
            .unwrap();
        assert_eq!(result["results"][0]["title"], "useEffect");
    }

    #[tokio::test]
    async fn test_search_sends_empty_query() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tools/package_doc_search"))
            .and(body_json(json!({"package_name": "react", "query": ""})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).docs().search("react", "").await.unwrap();
        assert_eq!(result, json!({"results": []}));
    }

    #[tokio::test]
    async fn test_search_surfaces_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tools/package_doc_search"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .docs()
            .search("react", "")
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Api { status: 401, .. }));
        assert_eq!(err.to_string(), "API request failed: 401 invalid api key");
    }
}
