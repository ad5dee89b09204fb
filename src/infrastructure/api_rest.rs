use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{
    ApiRequest, DeliveryScheduler, Event, GITHUB_API_ENDPOINT, GithubApi, HttpProvider,
    InlineScheduler, Provider, Repository, RepositorySearch, StdResult, StubProvider, User,
    UserSearch,
};

/// A façade implementing [GithubApi] over an injected provider.
///
/// Each operation builds an endpoint descriptor, forwards it to the provider,
/// decodes the body into its target type, and awaits the scheduler hop before
/// returning the terminal result (value or error). The façade holds no other
/// state: concurrent calls share the provider without locking, and it never
/// issues a request at construction.
pub struct RestApi {
    /// The provider requests are dispatched through.
    provider: Arc<dyn Provider>,

    /// The scheduler results are delivered on.
    scheduler: Arc<dyn DeliveryScheduler>,
}

impl RestApi {
    /// Creates a new `RestApi` instance with the given provider and scheduler.
    pub fn new(provider: Arc<dyn Provider>, scheduler: Arc<dyn DeliveryScheduler>) -> Self {
        Self {
            provider,
            scheduler,
        }
    }

    /// Creates a new `RestApi` instance backed by the stub provider when
    /// `use_staging` is set, and by the live GitHub endpoint otherwise.
    ///
    /// The choice is fixed for the lifetime of the instance. Results are
    /// delivered inline; callers needing a dedicated delivery context inject
    /// a scheduler through [RestApi::new].
    pub fn try_new(use_staging: bool, api_token: Option<String>) -> StdResult<Self> {
        let provider: Arc<dyn Provider> = if use_staging {
            Arc::new(StubProvider::new())
        } else {
            Arc::new(HttpProvider::try_new(GITHUB_API_ENDPOINT, api_token)?)
        };

        Ok(Self::new(provider, Arc::new(InlineScheduler)))
    }

    /// Dispatches a request and decodes the response into a single object,
    /// delivering the terminal result through the scheduler.
    async fn get_object<T: DeserializeOwned>(&self, request: ApiRequest) -> StdResult<T> {
        let result = match self.provider.request(&request).await {
            Ok(response) => response.decode::<T>(),
            Err(error) => Err(error),
        };
        self.scheduler.reschedule().await;

        result
    }

    /// Dispatches a request and decodes the response into a list of objects,
    /// delivering the terminal result through the scheduler.
    async fn get_list<T: DeserializeOwned>(&self, request: ApiRequest) -> StdResult<Vec<T>> {
        let result = match self.provider.request(&request).await {
            Ok(response) => response.decode_list::<T>(),
            Err(error) => Err(error),
        };
        self.scheduler.reschedule().await;

        result
    }
}

#[async_trait::async_trait]
impl GithubApi for RestApi {
    async fn search_repositories(&self, query: &str) -> StdResult<RepositorySearch> {
        self.get_object(ApiRequest::SearchRepositories {
            query: query.to_string(),
        })
        .await
    }

    async fn repository(&self, full_name: &str) -> StdResult<Repository> {
        self.get_object(ApiRequest::Repository {
            full_name: full_name.to_string(),
        })
        .await
    }

    async fn watchers(&self, owner: &str, repo: &str, page: u32) -> StdResult<Vec<User>> {
        self.get_list(ApiRequest::Watchers {
            owner: owner.to_string(),
            repo: repo.to_string(),
            page,
        })
        .await
    }

    async fn stargazers(&self, owner: &str, repo: &str, page: u32) -> StdResult<Vec<User>> {
        self.get_list(ApiRequest::Stargazers {
            owner: owner.to_string(),
            repo: repo.to_string(),
            page,
        })
        .await
    }

    async fn forks(&self, owner: &str, repo: &str, page: u32) -> StdResult<Vec<Repository>> {
        self.get_list(ApiRequest::Forks {
            owner: owner.to_string(),
            repo: repo.to_string(),
            page,
        })
        .await
    }

    async fn search_users(&self, query: &str) -> StdResult<UserSearch> {
        self.get_object(ApiRequest::SearchUsers {
            query: query.to_string(),
        })
        .await
    }

    async fn user(&self, username: &str) -> StdResult<User> {
        self.get_object(ApiRequest::User {
            username: username.to_string(),
        })
        .await
    }

    async fn organization(&self, name: &str) -> StdResult<User> {
        self.get_object(ApiRequest::Organization {
            name: name.to_string(),
        })
        .await
    }

    async fn user_repositories(&self, username: &str, page: u32) -> StdResult<Vec<Repository>> {
        self.get_list(ApiRequest::UserRepositories {
            username: username.to_string(),
            page,
        })
        .await
    }

    async fn user_starred_repositories(
        &self,
        username: &str,
        page: u32,
    ) -> StdResult<Vec<Repository>> {
        self.get_list(ApiRequest::UserStarredRepositories {
            username: username.to_string(),
            page,
        })
        .await
    }

    async fn user_followers(&self, username: &str, page: u32) -> StdResult<Vec<User>> {
        self.get_list(ApiRequest::UserFollowers {
            username: username.to_string(),
            page,
        })
        .await
    }

    async fn user_following(&self, username: &str, page: u32) -> StdResult<Vec<User>> {
        self.get_list(ApiRequest::UserFollowing {
            username: username.to_string(),
            page,
        })
        .await
    }

    async fn events(&self, page: u32) -> StdResult<Vec<Event>> {
        self.get_list(ApiRequest::Events { page }).await
    }

    async fn repository_events(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> StdResult<Vec<Event>> {
        self.get_list(ApiRequest::RepositoryEvents {
            owner: owner.to_string(),
            repo: repo.to_string(),
            page,
        })
        .await
    }

    async fn user_received_events(&self, username: &str, page: u32) -> StdResult<Vec<Event>> {
        self.get_list(ApiRequest::UserReceivedEvents {
            username: username.to_string(),
            page,
        })
        .await
    }

    async fn user_performed_events(&self, username: &str, page: u32) -> StdResult<Vec<Event>> {
        self.get_list(ApiRequest::UserPerformedEvents {
            username: username.to_string(),
            page,
        })
        .await
    }

    async fn profile(&self) -> StdResult<User> {
        self.get_object(ApiRequest::Profile).await
    }
}
