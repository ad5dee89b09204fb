use clap::{Parser, Subcommand};
use log::info;

use github_client::{GithubApi, RestApi, StdResult};

/// Command line arguments for the GitHub client
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Use the stub provider instead of the live GitHub API
    #[arg(long, default_value_t = false)]
    staging: bool,

    /// API token attached to requests
    #[arg(long, env = "GITHUB_API_TOKEN")]
    api_token: Option<String>,

    /// Page number for listing commands (1-based)
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    #[command(subcommand)]
    command: Command,
}

/// Operations exposed by the client
#[derive(Subcommand, Debug)]
enum Command {
    /// Search repositories matching a query
    SearchRepositories {
        /// The text query
        query: String,
    },

    /// Fetch a repository by full name (`owner/repo`)
    Repository {
        /// The full name of the repository
        full_name: String,
    },

    /// List the users that starred a repository
    Stargazers {
        /// The repository owner
        owner: String,
        /// The repository name
        repo: String,
    },

    /// Search users matching a query
    SearchUsers {
        /// The text query
        query: String,
    },

    /// Fetch a user by username
    User {
        /// The username
        username: String,
    },

    /// Fetch an organization by name
    Organization {
        /// The organization name
        name: String,
    },

    /// List public events across the platform
    Events,

    /// Fetch the profile of the authenticated user
    Profile,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    info!("Starting GitHub client");
    let api = RestApi::try_new(args.staging, args.api_token.clone())?;

    match &args.command {
        Command::SearchRepositories { query } => {
            let search = api.search_repositories(query).await?;
            println!("Found {} repositories", search.total_count);
            for repository in &search.items {
                println!("{repository}");
            }
        }
        Command::Repository { full_name } => {
            println!("{}", api.repository(full_name).await?);
        }
        Command::Stargazers { owner, repo } => {
            for user in api.stargazers(owner, repo, args.page).await? {
                println!("{user}");
            }
        }
        Command::SearchUsers { query } => {
            let search = api.search_users(query).await?;
            println!("Found {} users", search.total_count);
            for user in &search.items {
                println!("{user}");
            }
        }
        Command::User { username } => {
            println!("{}", api.user(username).await?);
        }
        Command::Organization { name } => {
            println!("{}", api.organization(name).await?);
        }
        Command::Events => {
            for event in api.events(args.page).await? {
                println!("{event}");
            }
        }
        Command::Profile => {
            println!("{}", api.profile().await?);
        }
    }
    info!("Done");

    Ok(())
}
