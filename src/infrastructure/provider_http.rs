use anyhow::Context;
use log::debug;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::{ApiError, ApiRequest, Provider, RawResponse, StdResult};

/// The REST production endpoint for GitHub.
pub const GITHUB_API_ENDPOINT: &str = "https://api.github.com";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// The error body returned by the GitHub API on failed requests.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: String,
}

/// A provider performing real HTTP requests against the GitHub API.
pub struct HttpProvider {
    /// The HTTP client.
    client: reqwest::Client,

    /// The API endpoint requests are sent to.
    endpoint: String,

    /// The bearer token attached to requests, if any.
    api_token: Option<String>,
}

impl HttpProvider {
    /// Creates a new `HttpProvider` instance with the given endpoint and optional API token.
    pub fn try_new(endpoint: &str, api_token: Option<String>) -> StdResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent("github-client")
            .build()
            .with_context(|| "Failed to build the HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_token,
        })
    }

    /// Builds a `Server` error from a failed response, decoding the GitHub
    /// error body when it is well formed and falling back to the raw body.
    fn error_from_response(status: reqwest::StatusCode, body: &str) -> ApiError {
        let title = status
            .canonical_reason()
            .unwrap_or("Server error")
            .to_string();
        let description = serde_json::from_str::<ErrorBody>(body)
            .map(|error_body| error_body.message)
            .unwrap_or_else(|_| body.to_string());

        ApiError::Server { title, description }
    }
}

#[async_trait::async_trait]
impl Provider for HttpProvider {
    async fn request(&self, request: &ApiRequest) -> StdResult<RawResponse> {
        debug!("Dispatching request: {request}");
        let method = reqwest::Method::from_bytes(request.method().as_bytes())
            .with_context(|| format!("Unsupported HTTP method: {}", request.method()))?;
        let url = format!("{}{}", self.endpoint, request.path());
        let mut builder = self
            .client
            .request(method, &url)
            .query(&request.query())
            .header(ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(api_token) = &self.api_token {
            builder = builder.bearer_auth(api_token);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("Request failed: {request}"))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body: {request}"))?;
        if !status.is_success() {
            return Err(Self::error_from_response(status, &body).into());
        }

        Ok(RawResponse::new(status.as_u16(), &body))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn request_hits_the_translated_path_and_query() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/repos/org-1/repository-1/stargazers")
                .query_param("page", "2");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([{"login": "user-1"}]));
        });
        let provider = HttpProvider::try_new(&server.base_url(), None).unwrap();
        let request = ApiRequest::Stargazers {
            owner: "org-1".to_string(),
            repo: "repository-1".to_string(),
            page: 2,
        };

        let response = provider.request(&request).await.unwrap();

        mock.assert();
        assert_eq!(200, response.status());
        assert_eq!(json!([{"login": "user-1"}]).to_string(), response.body());
    }

    #[tokio::test]
    async fn request_attaches_the_bearer_token_when_present() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/user")
                .header("Authorization", "Bearer credentials");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"login": "user-1"}));
        });
        let provider =
            HttpProvider::try_new(&server.base_url(), Some("credentials".to_string())).unwrap();

        let response = provider.request(&ApiRequest::Profile).await.unwrap();

        mock.assert();
        assert_eq!(200, response.status());
    }

    #[tokio::test]
    async fn request_maps_a_failed_response_to_a_server_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/repos/org-1/missing");
            then.status(404)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "message": "Not Found",
                    "documentation_url": "https://docs.github.com/rest"
                }));
        });
        let provider = HttpProvider::try_new(&server.base_url(), None).unwrap();
        let request = ApiRequest::Repository {
            full_name: "org-1/missing".to_string(),
        };

        let error = provider
            .request(&request)
            .await
            .expect_err("Expected an error");

        mock.assert();
        assert_eq!(
            &ApiError::server("Not Found", "Not Found"),
            error.downcast_ref::<ApiError>().unwrap()
        );
    }

    #[tokio::test]
    async fn request_falls_back_to_the_raw_body_when_the_error_body_is_not_json() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/events");
            then.status(502).body("bad gateway");
        });
        let provider = HttpProvider::try_new(&server.base_url(), None).unwrap();

        let error = provider
            .request(&ApiRequest::Events { page: 1 })
            .await
            .expect_err("Expected an error");

        mock.assert();
        assert_eq!(
            &ApiError::server("Bad Gateway", "bad gateway"),
            error.downcast_ref::<ApiError>().unwrap()
        );
    }
}
