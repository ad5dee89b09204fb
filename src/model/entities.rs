use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A GitHub user or organization account.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// The login of the account.
    pub login: String,

    /// The unique identifier of the account.
    pub id: Option<u64>,

    /// The display name of the account.
    pub name: Option<String>,

    /// The URL of the account avatar.
    pub avatar_url: Option<String>,

    /// The URL of the account page.
    pub html_url: Option<String>,

    /// The account type reported by the API (`User` or `Organization`).
    #[serde(rename = "type")]
    pub account_type: Option<String>,

    /// The company of the account.
    pub company: Option<String>,

    /// The blog URL of the account.
    pub blog: Option<String>,

    /// The location of the account.
    pub location: Option<String>,

    /// The biography of the account.
    pub bio: Option<String>,

    /// The number of public repositories of the account.
    pub public_repos: Option<u32>,

    /// The number of public gists of the account.
    pub public_gists: Option<u32>,

    /// The number of followers of the account.
    pub followers: Option<u32>,

    /// The number of accounts the account follows.
    pub following: Option<u32>,

    /// The creation date of the account.
    pub created_at: Option<DateTime<Utc>>,

    /// The last update date of the account.
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a dummy `User` instance for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(login: &str) -> Self {
        Self {
            login: login.to_string(),
            id: None,
            name: None,
            avatar_url: None,
            html_url: None,
            account_type: None,
            company: None,
            blog: None,
            location: None,
            bio: None,
            public_repos: None,
            public_gists: None,
            followers: None,
            following: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User: {}", self.login)?;
        if let Some(name) = &self.name {
            write!(f, " ({name})")?;
        }
        Ok(())
    }
}

/// Metadata of a GitHub repository.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The full name of the repository (`owner/repo`).
    pub full_name: String,

    /// The unique identifier of the repository.
    pub id: Option<u64>,

    /// The short name of the repository.
    pub name: Option<String>,

    /// The account that owns the repository.
    pub owner: Option<User>,

    /// The description of the repository.
    pub description: Option<String>,

    /// The primary language of the repository.
    pub language: Option<String>,

    /// Whether the repository is a fork.
    pub fork: Option<bool>,

    /// The number of stars the repository has.
    pub stargazers_count: Option<u32>,

    /// The number of users watching the repository.
    pub watchers_count: Option<u32>,

    /// The number of forks of the repository.
    pub forks_count: Option<u32>,

    /// The number of open issues of the repository.
    pub open_issues_count: Option<u32>,

    /// The URL of the repository page.
    pub html_url: Option<String>,

    /// The creation date of the repository.
    pub created_at: Option<DateTime<Utc>>,

    /// The last update date of the repository.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Creates a dummy `Repository` instance for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(full_name: &str, total_stars: u32) -> Self {
        Self {
            full_name: full_name.to_string(),
            id: None,
            name: None,
            owner: None,
            description: None,
            language: None,
            fork: None,
            stargazers_count: Some(total_stars),
            watchers_count: None,
            forks_count: None,
            open_issues_count: None,
            html_url: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Repository: {}", self.full_name)?;
        if let Some(total_stars) = self.stargazers_count {
            write!(f, ", Stars: {total_stars}")?;
        }
        Ok(())
    }
}

/// The compact account record embedded in an event.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EventActor {
    /// The unique identifier of the account.
    pub id: u64,

    /// The login of the account.
    pub login: String,

    /// The URL of the account avatar.
    pub avatar_url: Option<String>,
}

/// The compact repository record embedded in an event.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EventRepository {
    /// The unique identifier of the repository.
    pub id: u64,

    /// The full name of the repository (`owner/repo`).
    pub name: String,

    /// The API URL of the repository.
    pub url: Option<String>,
}

/// A public activity event on the platform.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The unique identifier of the event.
    pub id: String,

    /// The kind of the event (e.g. `PushEvent`, `WatchEvent`).
    #[serde(rename = "type")]
    pub event_type: String,

    /// The account that performed the event.
    pub actor: EventActor,

    /// The repository the event happened on.
    pub repo: EventRepository,

    /// The event payload, whose shape depends on the event kind.
    #[serde(default)]
    pub payload: serde_json::Value,

    /// Whether the event is public.
    pub public: Option<bool>,

    /// The creation date of the event.
    pub created_at: DateTime<Utc>,
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Event: {} by {} on {} at {}",
            self.event_type, self.actor.login, self.repo.name, self.created_at
        )
    }
}

/// The result of a repository search.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositorySearch {
    /// The total number of repositories matching the query.
    pub total_count: u64,

    /// Whether the search timed out before completing.
    #[serde(default)]
    pub incomplete_results: bool,

    /// The repositories of the requested page.
    #[serde(default)]
    pub items: Vec<Repository>,
}

/// The result of a user search.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserSearch {
    /// The total number of users matching the query.
    pub total_count: u64,

    /// Whether the search timed out before completing.
    #[serde(default)]
    pub incomplete_results: bool,

    /// The users of the requested page.
    #[serde(default)]
    pub items: Vec<User>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    mod user {
        use super::*;

        #[test]
        fn deserialize_a_full_payload() {
            let body = json!({
                "login": "user-1",
                "id": 42,
                "name": "User One",
                "avatar_url": "https://avatars.example.com/u/42",
                "html_url": "https://github.example.com/user-1",
                "type": "User",
                "company": "org-1",
                "location": "Somewhere",
                "bio": "A developer",
                "public_repos": 10,
                "followers": 5,
                "following": 3,
                "created_at": "2020-01-01T00:00:00Z"
            });

            let user: User = serde_json::from_value(body).unwrap();

            assert_eq!("user-1", user.login);
            assert_eq!(Some(42), user.id);
            assert_eq!(Some("User One".to_string()), user.name);
            assert_eq!(Some("User".to_string()), user.account_type);
            assert_eq!(Some(5), user.followers);
        }

        #[test]
        fn deserialize_a_minimal_payload() {
            let user: User = serde_json::from_value(json!({"login": "user-1"})).unwrap();

            assert_eq!("user-1", user.login);
            assert_eq!(None, user.id);
        }

        #[test]
        fn deserialize_without_login_fails() {
            serde_json::from_value::<User>(json!({"id": 42}))
                .expect_err("Expected an error");
        }
    }

    mod repository {
        use super::*;

        #[test]
        fn deserialize_a_full_payload() {
            let body = json!({
                "full_name": "org-1/repository-1",
                "id": 7,
                "name": "repository-1",
                "owner": {"login": "org-1"},
                "description": "A repository",
                "language": "Rust",
                "fork": false,
                "stargazers_count": 100,
                "watchers_count": 100,
                "forks_count": 4,
                "open_issues_count": 2,
                "created_at": "2021-06-01T12:00:00Z"
            });

            let repository: Repository = serde_json::from_value(body).unwrap();

            assert_eq!("org-1/repository-1", repository.full_name);
            assert_eq!(Some(100), repository.stargazers_count);
            assert_eq!("org-1", repository.owner.unwrap().login);
        }

        #[test]
        fn deserialize_a_minimal_payload() {
            let repository: Repository =
                serde_json::from_value(json!({"full_name": "org/swift"})).unwrap();

            assert_eq!("org/swift", repository.full_name);
            assert_eq!(None, repository.stargazers_count);
        }

        #[test]
        fn deserialize_without_full_name_fails() {
            serde_json::from_value::<Repository>(json!({"name": "repository-1"}))
                .expect_err("Expected an error");
        }
    }

    mod event {
        use super::*;

        #[test]
        fn deserialize_a_push_event() {
            let body = json!({
                "id": "123",
                "type": "PushEvent",
                "actor": {"id": 1, "login": "user-1"},
                "repo": {"id": 7, "name": "org-1/repository-1"},
                "payload": {"size": 1},
                "public": true,
                "created_at": "2025-01-01T00:00:00Z"
            });

            let event: Event = serde_json::from_value(body).unwrap();

            assert_eq!("PushEvent", event.event_type);
            assert_eq!("user-1", event.actor.login);
            assert_eq!("org-1/repository-1", event.repo.name);
            assert_eq!(json!({"size": 1}), event.payload);
        }

        #[test]
        fn deserialize_without_actor_fails() {
            let body = json!({
                "id": "123",
                "type": "PushEvent",
                "repo": {"id": 7, "name": "org-1/repository-1"},
                "created_at": "2025-01-01T00:00:00Z"
            });

            serde_json::from_value::<Event>(body).expect_err("Expected an error");
        }
    }

    mod search {
        use super::*;

        #[test]
        fn deserialize_a_repository_search() {
            let body = json!({
                "total_count": 1,
                "incomplete_results": false,
                "items": [{"full_name": "org/swift"}]
            });

            let search: RepositorySearch = serde_json::from_value(body).unwrap();

            assert_eq!(1, search.total_count);
            assert_eq!(1, search.items.len());
            assert_eq!("org/swift", search.items[0].full_name);
        }

        #[test]
        fn deserialize_a_user_search_without_items() {
            let search: UserSearch = serde_json::from_value(json!({"total_count": 0})).unwrap();

            assert_eq!(0, search.total_count);
            assert!(search.items.is_empty());
        }
    }
}
