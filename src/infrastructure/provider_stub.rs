use std::collections::HashMap;

use log::debug;
use serde_json::json;
use tokio::sync::RwLock;

use crate::{ApiRequest, Provider, RawResponse, StdResult};

/// A provider serving canned fixture responses instead of performing network
/// I/O, used for staging and tests.
#[derive(Debug, Default)]
pub struct StubProvider {
    /// Fixture bodies registered per request path.
    fixtures: RwLock<HashMap<String, String>>,

    /// The total number of requests served.
    total_requests_served: RwLock<u32>,
}

impl StubProvider {
    /// Creates a new `StubProvider` instance without registered fixtures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fixture body served for the given request path, replacing
    /// the built-in fixture of the matching endpoint.
    pub async fn register_fixture(&self, path: &str, body: &str) {
        let mut fixtures = self.fixtures.write().await;
        (*fixtures).insert(path.to_string(), body.to_string());
    }

    /// Retrieves the total number of requests served.
    pub async fn total_requests_served(&self) -> u32 {
        let total_requests_served = self.total_requests_served.read().await;
        *total_requests_served
    }

    /// The built-in fixture body for a request without a registered fixture.
    fn default_fixture(request: &ApiRequest) -> String {
        match request {
            ApiRequest::SearchRepositories { .. } | ApiRequest::SearchUsers { .. } => json!({
                "total_count": 0,
                "incomplete_results": false,
                "items": []
            })
            .to_string(),
            ApiRequest::Repository { full_name } => json!({
                "full_name": full_name,
                "stargazers_count": 0
            })
            .to_string(),
            ApiRequest::User { username } => json!({"login": username}).to_string(),
            ApiRequest::Organization { name } => {
                json!({"login": name, "type": "Organization"}).to_string()
            }
            ApiRequest::Profile => json!({"login": "octocat"}).to_string(),
            ApiRequest::Watchers { .. }
            | ApiRequest::Stargazers { .. }
            | ApiRequest::Forks { .. }
            | ApiRequest::UserRepositories { .. }
            | ApiRequest::UserStarredRepositories { .. }
            | ApiRequest::UserFollowers { .. }
            | ApiRequest::UserFollowing { .. }
            | ApiRequest::Events { .. }
            | ApiRequest::RepositoryEvents { .. }
            | ApiRequest::UserReceivedEvents { .. }
            | ApiRequest::UserPerformedEvents { .. } => "[]".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Provider for StubProvider {
    async fn request(&self, request: &ApiRequest) -> StdResult<RawResponse> {
        {
            let mut total_requests_served = self.total_requests_served.write().await;
            *total_requests_served += 1;
        }
        debug!("Serving fixture for request: {request}");
        let fixtures = self.fixtures.read().await;
        let body = (*fixtures)
            .get(&request.path())
            .cloned()
            .unwrap_or_else(|| Self::default_fixture(request));

        Ok(RawResponse::new(200, &body))
    }
}
