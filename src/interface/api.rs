use crate::{Event, Repository, RepositorySearch, StdResult, User, UserSearch};

/// A trait exposing one operation per supported GitHub endpoint.
///
/// Every operation is independent and stateless: callers track page numbers
/// themselves (pages are 1-based), and no call carries state into the next.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GithubApi: Sync + Send {
    // Unauthenticated requests

    /// Searches repositories matching the given query.
    async fn search_repositories(&self, query: &str) -> StdResult<RepositorySearch>;

    /// Fetches a repository by its full name (`owner/repo`).
    async fn repository(&self, full_name: &str) -> StdResult<Repository>;

    /// Lists the users watching a repository.
    async fn watchers(&self, owner: &str, repo: &str, page: u32) -> StdResult<Vec<User>>;

    /// Lists the users that starred a repository.
    async fn stargazers(&self, owner: &str, repo: &str, page: u32) -> StdResult<Vec<User>>;

    /// Lists the forks of a repository.
    async fn forks(&self, owner: &str, repo: &str, page: u32) -> StdResult<Vec<Repository>>;

    /// Searches users matching the given query.
    async fn search_users(&self, query: &str) -> StdResult<UserSearch>;

    /// Fetches a user by username.
    async fn user(&self, username: &str) -> StdResult<User>;

    /// Fetches an organization by name.
    async fn organization(&self, name: &str) -> StdResult<User>;

    /// Lists the repositories owned by a user.
    async fn user_repositories(&self, username: &str, page: u32) -> StdResult<Vec<Repository>>;

    /// Lists the repositories starred by a user.
    async fn user_starred_repositories(
        &self,
        username: &str,
        page: u32,
    ) -> StdResult<Vec<Repository>>;

    /// Lists the followers of a user.
    async fn user_followers(&self, username: &str, page: u32) -> StdResult<Vec<User>>;

    /// Lists the users a user follows.
    async fn user_following(&self, username: &str, page: u32) -> StdResult<Vec<User>>;

    /// Lists public events across the platform.
    async fn events(&self, page: u32) -> StdResult<Vec<Event>>;

    /// Lists the events of a repository.
    async fn repository_events(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> StdResult<Vec<Event>>;

    /// Lists the events received by a user.
    async fn user_received_events(&self, username: &str, page: u32) -> StdResult<Vec<Event>>;

    /// Lists the events performed by a user.
    async fn user_performed_events(&self, username: &str, page: u32) -> StdResult<Vec<Event>>;

    // Authenticated requests

    /// Fetches the profile of the authenticated user.
    ///
    /// Relies on the provider carrying credentials; the façade issues the same
    /// kind of request as the unauthenticated operations.
    async fn profile(&self) -> StdResult<User>;
}
