//! HTTP transport layer for the pkgdocs SDK.

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

const API_KEY_PARAM: &str = "api_key";

/// HTTP transport for making API requests.
///
/// Requests are issued once: there is no retry loop and no timeout beyond
/// the one configured on the client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> SdkResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build the request URL: base URL + path + query, with the API key
    /// appended last.
    fn build_url(&self, path: &str, query: &[(&str, String)]) -> SdkResult<Url> {
        // Join relative to the base so a path prefix on the base URL survives
        let mut base = self.config.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        let mut url = base.join(path.trim_start_matches('/'))?;

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            pairs.append_pair(API_KEY_PARAM, &self.config.api_key);
        }
        Ok(url)
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> SdkResult<T> {
        let url = self.build_url(path, query)?;
        info!(url = %redact_api_key(&url), "GET request");

        self.execute(self.client.get(url)).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> SdkResult<T> {
        let url = self.build_url(path, &[])?;
        let body = serde_json::to_value(body)?;
        info!(url = %redact_api_key(&url), body = %body, "POST request");

        self.execute(self.client.post(url).json(&body)).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> SdkResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Request failed");
            return Err(SdkError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Copy of `url` with the API key value masked, for log output.
pub(crate) fn redact_api_key(url: &Url) -> Url {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == API_KEY_PARAM {
                (k.into_owned(), "***".to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
        value: i32,
    }

    #[derive(Debug, Serialize)]
    struct TestRequest {
        name: String,
    }

    fn create_config(base_url: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig::new(
            url::Url::parse(base_url).unwrap(),
            "sk-test-key",
        ))
    }

    #[tokio::test]
    async fn test_get_request_carries_query_and_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/test"))
            .and(query_param("q", "serde json"))
            .and(query_param("api_key", "sk-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "success".to_string(),
                value: 42,
            }))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: TestResponse = transport
            .get_with_query("/api/test", &[("q", "serde json".to_string())])
            .await
            .unwrap();
        assert_eq!(result.message, "success");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_post_request_sends_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/create"))
            .and(query_param("api_key", "sk-test-key"))
            .and(body_json(serde_json::json!({"name": "test"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "created".to_string(),
                value: 1,
            }))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let request = TestRequest {
            name: "test".to_string(),
        };
        let result: TestResponse = transport.post_json("/api/create", &request).await.unwrap();
        assert_eq!(result.message, "created");
    }

    #[tokio::test]
    async fn test_error_status_keeps_body_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/bad"))
            .respond_with(ResponseTemplate::new(400).set_body_string("{\"error\": \"Bad Request\"}"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: SdkResult<serde_json::Value> = transport.get_with_query("/api/bad", &[]).await;
        match result {
            Err(SdkError::Api { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "{\"error\": \"Bad Request\"}");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/flaky"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: SdkResult<serde_json::Value> =
            transport.get_with_query("/api/flaky", &[]).await;
        assert_eq!(result.unwrap_err().status(), Some(503));
    }

    #[tokio::test]
    async fn test_non_json_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/text"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: SdkResult<serde_json::Value> = transport.get_with_query("/api/text", &[]).await;
        assert!(matches!(result, Err(SdkError::Json(_))));
    }

    #[tokio::test]
    async fn test_timeout_is_a_network_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let mut config = ClientConfig::new(url::Url::parse(&server.uri()).unwrap(), "k");
        config.timeout = Some(Duration::from_millis(50));
        let transport = HttpTransport::new(Arc::new(config)).unwrap();

        let result: SdkResult<serde_json::Value> = transport.get_with_query("/api/slow", &[]).await;
        match result {
            Err(SdkError::Network(e)) => assert!(e.is_timeout()),
            other => panic!("Expected Network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_build_url() {
        let transport = HttpTransport::new(create_config("http://localhost:8080")).unwrap();

        let url = transport.build_url("/api/test", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/test?api_key=sk-test-key");
    }

    #[tokio::test]
    async fn test_build_url_keeps_base_path() {
        let transport = HttpTransport::new(create_config("http://localhost:8080/v1")).unwrap();

        let url = transport
            .build_url("/packages/search", &[("q", "a b".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v1/packages/search?q=a+b&api_key=sk-test-key"
        );
    }

    #[test]
    fn test_redact_api_key() {
        let url = Url::parse("http://localhost/x?q=1&api_key=secret").unwrap();
        let redacted = redact_api_key(&url);
        assert_eq!(redacted.as_str(), "http://localhost/x?q=1&api_key=***");
    }
}
