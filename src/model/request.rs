use std::fmt::Display;

use serde::Serialize;

/// A request to the GitHub API, one variant per supported endpoint.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Hash)]
pub enum ApiRequest {
    /// Searches repositories matching a text query.
    SearchRepositories {
        /// The text query.
        query: String,
    },

    /// Fetches a single repository by its full name (`owner/repo`).
    Repository {
        /// The full name of the repository.
        full_name: String,
    },

    /// Lists the users watching a repository.
    Watchers {
        /// The repository owner.
        owner: String,
        /// The repository name.
        repo: String,
        /// The 1-based page number.
        page: u32,
    },

    /// Lists the users that starred a repository.
    Stargazers {
        /// The repository owner.
        owner: String,
        /// The repository name.
        repo: String,
        /// The 1-based page number.
        page: u32,
    },

    /// Lists the forks of a repository.
    Forks {
        /// The repository owner.
        owner: String,
        /// The repository name.
        repo: String,
        /// The 1-based page number.
        page: u32,
    },

    /// Searches users matching a text query.
    SearchUsers {
        /// The text query.
        query: String,
    },

    /// Fetches a single user by username.
    User {
        /// The username.
        username: String,
    },

    /// Fetches a single organization by name.
    Organization {
        /// The organization name.
        name: String,
    },

    /// Lists the repositories owned by a user.
    UserRepositories {
        /// The username.
        username: String,
        /// The 1-based page number.
        page: u32,
    },

    /// Lists the repositories starred by a user.
    UserStarredRepositories {
        /// The username.
        username: String,
        /// The 1-based page number.
        page: u32,
    },

    /// Lists the followers of a user.
    UserFollowers {
        /// The username.
        username: String,
        /// The 1-based page number.
        page: u32,
    },

    /// Lists the users a user follows.
    UserFollowing {
        /// The username.
        username: String,
        /// The 1-based page number.
        page: u32,
    },

    /// Lists public events across the platform.
    Events {
        /// The 1-based page number.
        page: u32,
    },

    /// Lists the events of a repository.
    RepositoryEvents {
        /// The repository owner.
        owner: String,
        /// The repository name.
        repo: String,
        /// The 1-based page number.
        page: u32,
    },

    /// Lists the events received by a user.
    UserReceivedEvents {
        /// The username.
        username: String,
        /// The 1-based page number.
        page: u32,
    },

    /// Lists the events performed by a user.
    UserPerformedEvents {
        /// The username.
        username: String,
        /// The 1-based page number.
        page: u32,
    },

    /// Fetches the profile of the authenticated user.
    Profile,
}

impl ApiRequest {
    /// The HTTP method of the endpoint. Every supported endpoint is a read.
    pub fn method(&self) -> &'static str {
        "GET"
    }

    /// The path of the endpoint, relative to the API root.
    pub fn path(&self) -> String {
        match self {
            ApiRequest::SearchRepositories { .. } => "/search/repositories".to_string(),
            ApiRequest::Repository { full_name } => format!("/repos/{full_name}"),
            ApiRequest::Watchers { owner, repo, .. } => format!("/repos/{owner}/{repo}/subscribers"),
            ApiRequest::Stargazers { owner, repo, .. } => {
                format!("/repos/{owner}/{repo}/stargazers")
            }
            ApiRequest::Forks { owner, repo, .. } => format!("/repos/{owner}/{repo}/forks"),
            ApiRequest::SearchUsers { .. } => "/search/users".to_string(),
            ApiRequest::User { username } => format!("/users/{username}"),
            ApiRequest::Organization { name } => format!("/orgs/{name}"),
            ApiRequest::UserRepositories { username, .. } => format!("/users/{username}/repos"),
            ApiRequest::UserStarredRepositories { username, .. } => {
                format!("/users/{username}/starred")
            }
            ApiRequest::UserFollowers { username, .. } => format!("/users/{username}/followers"),
            ApiRequest::UserFollowing { username, .. } => format!("/users/{username}/following"),
            ApiRequest::Events { .. } => "/events".to_string(),
            ApiRequest::RepositoryEvents { owner, repo, .. } => {
                format!("/repos/{owner}/{repo}/events")
            }
            ApiRequest::UserReceivedEvents { username, .. } => {
                format!("/users/{username}/received_events")
            }
            ApiRequest::UserPerformedEvents { username, .. } => format!("/users/{username}/events"),
            ApiRequest::Profile => "/user".to_string(),
        }
    }

    /// The query parameters of the endpoint.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            ApiRequest::SearchRepositories { query } | ApiRequest::SearchUsers { query } => {
                vec![("q", query.to_owned())]
            }
            ApiRequest::Watchers { page, .. }
            | ApiRequest::Stargazers { page, .. }
            | ApiRequest::Forks { page, .. }
            | ApiRequest::UserRepositories { page, .. }
            | ApiRequest::UserStarredRepositories { page, .. }
            | ApiRequest::UserFollowers { page, .. }
            | ApiRequest::UserFollowing { page, .. }
            | ApiRequest::Events { page }
            | ApiRequest::RepositoryEvents { page, .. }
            | ApiRequest::UserReceivedEvents { page, .. }
            | ApiRequest::UserPerformedEvents { page, .. } => {
                vec![("page", page.to_string())]
            }
            ApiRequest::Repository { .. }
            | ApiRequest::User { .. }
            | ApiRequest::Organization { .. }
            | ApiRequest::Profile => vec![],
        }
    }

    /// Whether the endpoint requires the provider to carry credentials.
    pub fn requires_authentication(&self) -> bool {
        matches!(self, ApiRequest::Profile)
    }

    /// Creates a dummy `SearchRepositories` request for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy_search_repositories() -> Self {
        Self::SearchRepositories {
            query: "dummy".to_string(),
        }
    }
}

impl Display for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiRequest: {} {}", self.method(), self.path())?;
        for (name, value) in self.query() {
            write!(f, " {name}={value}")?;
        }
        Ok(())
    }
}
