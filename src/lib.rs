//! A typed client for a subset of the GitHub REST API: repository search,
//! user and organization lookups, followers, stargazers, forks and events.
//!
//! The [GithubApi] façade builds an [ApiRequest] descriptor per operation,
//! dispatches it through a [Provider] (live HTTP or stub fixtures), decodes
//! the JSON body into a domain entity, and delivers the result through an
//! injectable [DeliveryScheduler].

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
