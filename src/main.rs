use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use twittapi::{api_key_tutorial, Authentication, Endpoint, Page, TwitterApi, ENDPOINTS};

#[derive(Parser, Debug)]
#[clap(version, about = "Query the RapidAPI Twitter API")]
struct Cli {
    /// RapidAPI key (takes precedence over the auth file)
    #[clap(short, long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    key: Option<String>,
    /// Path to the authentication details file
    #[clap(short, long, default_value = "./auth.json")]
    auth: PathBuf,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the numeric id of a user
    UserId { username: String },
    /// Print the profile of a user
    Detail { username: String },
    /// Print the tweets of a user
    Tweets {
        username: String,
        #[clap(flatten)]
        page: PageArgs,
    },
    /// Print the accounts a user follows
    Following {
        username: String,
        #[clap(flatten)]
        page: PageArgs,
    },
    /// Call any endpoint by its path, e.g. `search/latest rust`
    Fetch {
        path: String,
        id: String,
        #[clap(flatten)]
        page: PageArgs,
    },
    /// List the known endpoints
    Endpoints,
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Number of items per page
    #[clap(long, default_value_t = twittapi::twitter::endpoint::DEFAULT_COUNT)]
    count: u32,
    /// Cursor returned by a previous page
    #[clap(long)]
    cursor: Option<String>,
    /// Ask for the reduced response shape
    #[clap(long)]
    simplify: bool,
}

impl From<PageArgs> for Page {
    fn from(args: PageArgs) -> Self {
        Page {
            count: args.count,
            cursor: args.cursor,
            simplify: args.simplify,
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = main2().await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

async fn main2() -> anyhow::Result<()> {
    let Cli { key, auth, command } = Cli::parse();
    let output = match command {
        Command::Endpoints => {
            for endpoint in ENDPOINTS {
                println!(
                    "{:<32} {:<10} {:?}",
                    endpoint.path, endpoint.id_param, endpoint.shape
                );
            }
            return Ok(());
        }
        Command::UserId { username } => {
            let twitter = connect(key, &auth).await?;
            Value::String(resolve(&twitter, &username).await?)
        }
        Command::Detail { username } => connect(key, &auth)
            .await?
            .get_user_detail(&username)
            .await
            .context("Unable to fetch user detail")?,
        Command::Tweets { username, page } => {
            let twitter = connect(key, &auth).await?;
            let id = resolve(&twitter, &username).await?;
            twitter
                .get_user_tweets(&id, page.into())
                .await
                .context("Unable to fetch tweets")?
        }
        Command::Following { username, page } => {
            let twitter = connect(key, &auth).await?;
            let id = resolve(&twitter, &username).await?;
            twitter
                .get_user_following(&id, page.into())
                .await
                .context("Unable to fetch following")?
        }
        Command::Fetch { path, id, page } => {
            let endpoint = Endpoint::from_path(&path)
                .with_context(|| format!("Unknown endpoint: {path}"))?;
            connect(key, &auth)
                .await?
                .call(endpoint, &id, &page.into())
                .await
                .with_context(|| format!("Request to {} failed", endpoint.path))?
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn connect(key: Option<String>, auth: &Path) -> anyhow::Result<TwitterApi> {
    let key = match key {
        Some(key) => key,
        None if auth.exists() => Authentication::load(auth).await?.rapidapi_key,
        None => {
            eprintln!("{}", api_key_tutorial());
            bail!("No API key provided (use --key, RAPIDAPI_KEY or an auth file)");
        }
    };
    TwitterApi::new(&key).context("Unable to create client")
}

async fn resolve(twitter: &TwitterApi, username: &str) -> anyhow::Result<String> {
    let id = twitter
        .get_user_id_by_username(username)
        .await
        .with_context(|| format!("User {username} not found"))?;
    log::info!("Resolved {} to {}", username, id);
    Ok(id)
}
