use crate::common::IdentityResponse;

use serde_json::Value;
use thiserror::Error;
use tracing::error;

/// Any transport, HTTP or decode failure from the node, collapsed into
/// a single kind.
///
/// The fetchers below never panic and never bubble this up through the
/// task; the error comes back as a plain `Err` value for the caller to
/// branch on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request failed: {0}")]
pub struct RequestFailed(String);

impl RequestFailed {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for RequestFailed {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, RequestFailed>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// The base URL is resolved once from the configured node address
    /// and injected here; see [`crate::common::NodeAddress`].
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base_url}/identity/`, the "is this a grid node" check.
    ///
    /// Failures are logged here and returned as a value.
    pub async fn fetch_identity(&self) -> ApiResult<IdentityResponse> {
        let url = format!("{}/identity/", self.base_url);
        let outcome = self.get_identity(&url).await;
        if let Err(err) = &outcome {
            error!("identity check against {url} failed: {err}");
        }
        outcome
    }

    async fn get_identity(&self, url: &str) -> ApiResult<IdentityResponse> {
        let response = self.get(url).await?;
        let body = response.text().await?;
        Ok(IdentityResponse { data: body })
    }

    /// `GET {base_url}/models/`, the node's model list.
    ///
    /// The payload shape is not enforced; whatever JSON the node
    /// answers with is handed back. Failures are logged here and
    /// returned as a value.
    pub async fn fetch_models(&self) -> ApiResult<Value> {
        let url = format!("{}/models/", self.base_url);
        let outcome = self.get_models(&url).await;
        if let Err(err) = &outcome {
            error!("model list fetch from {url} failed: {err}");
        }
        outcome
    }

    async fn get_models(&self, url: &str) -> ApiResult<Value> {
        let response = self.get(url).await?;
        let models = response.json::<Value>().await?;
        Ok(models)
    }

    /// Issue a GET and treat any non-2xx answer as a failure, the way
    /// the node's other clients do. Note that `/models/` legitimately
    /// answers 202.
    async fn get(&self, url: &str) -> ApiResult<reqwest::Response> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RequestFailed::new(format!("({status}) {body}")));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_identity_of_a_grid_node() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/identity/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OpenGrid"))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let identity = api.fetch_identity().await.unwrap();
        assert_eq!(identity.data, "OpenGrid");
        assert!(identity.is_grid_node());
    }

    #[tokio::test]
    async fn test_identity_of_some_other_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/identity/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("nginx"))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let identity = api.fetch_identity().await.unwrap();
        assert!(!identity.is_grid_node());
    }

    #[tokio::test]
    async fn test_identity_failure_is_a_value() {
        // nothing mounted, the mock server answers 404
        let server = MockServer::start().await;
        let api = ApiClient::new(server.uri());
        let outcome = api.fetch_identity().await;
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn test_identity_of_an_unreachable_node() {
        // port 9 (discard) refuses connections; the error must still
        // come back as a value, not a panic or propagation
        let api = ApiClient::new("http://127.0.0.1:9");
        let outcome = api.fetch_identity().await;
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn test_models_payload_is_unconstrained() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models/"))
            .respond_with(
                ResponseTemplate::new(202)
                    .set_body_json(serde_json::json!({"models": ["mnist", "cnn"]})),
            )
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let models = api.fetch_models().await.unwrap();
        assert_eq!(models["models"][0], "mnist");
    }

    #[tokio::test]
    async fn test_models_failure_is_a_value() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("worker crashed"))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let outcome = api.fetch_models().await;
        assert!(outcome.is_err());
    }
}
