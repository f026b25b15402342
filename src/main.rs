//! Hack or Snooze CLI
//!
//! Command-line front end for the Hack or Snooze story-sharing API:
//! - Browse stories, favorites and your own stories
//! - Sign up, log in and out
//! - Submit, favorite and delete stories
//! - Render pages as HTML

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hack_or_snooze::config::{generate_default_config, Config, LoggingConfig};
use hack_or_snooze::{ApiClient, App, NewStory, Page, Story};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hack-or-snooze")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and share stories on Hack or Snooze")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API server URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all stories
    Stories,

    /// List your favorite stories
    Favorites,

    /// List stories you posted
    Mine,

    /// Log in and remember the login
    Login {
        username: String,
        #[arg(short, long, env = "HOS_PASSWORD")]
        password: String,
    },

    /// Create an account and log in
    Signup {
        username: String,
        /// Full name
        #[arg(short, long)]
        name: String,
        #[arg(short, long, env = "HOS_PASSWORD")]
        password: String,
    },

    /// Forget the stored login
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Submit a new story
    Submit {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        author: String,
        #[arg(short, long)]
        url: String,
    },

    /// Add a story to your favorites
    Favorite { story_id: String },

    /// Remove a story from your favorites
    Unfavorite { story_id: String },

    /// Delete one of your stories
    Delete { story_id: String },

    /// Print the HTML for a page (all, submit, login, favorites, mine)
    Render {
        #[arg(default_value = "all")]
        page: Page,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.base_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);

    if !cli.command.needs_api() {
        return run_local(&cli.command, &config);
    }

    let api = ApiClient::new(config.api.client_config()?).context("Failed to create HTTP client")?;
    let mut app = App::new(api, config.session.store());
    app.start().await.with_context(|| {
        format!("Cannot reach Hack or Snooze API at {}", config.api.base_url)
    })?;

    match cli.command {
        Commands::Stories => {
            print_stories(app.story_list().stories(), &cli.format)?;
        }

        Commands::Favorites => {
            let stories = app.nav_favorites()?;
            if stories.is_empty() && cli.format != "json" {
                println!("No favorites added!");
            } else {
                print_stories(stories, &cli.format)?;
            }
        }

        Commands::Mine => {
            let stories = app.nav_own_stories()?;
            if stories.is_empty() && cli.format != "json" {
                println!("No stories added by user yet!");
            } else {
                print_stories(stories, &cli.format)?;
            }
        }

        Commands::Login { username, password } => {
            let user = app.login(&username, &password).await?;
            println!("Logged in as {} ({})", user.username, user.name);
        }

        Commands::Signup {
            username,
            name,
            password,
        } => {
            let user = app.signup(&username, &password, &name).await?;
            println!("Created account {} ({})", user.username, user.name);
        }

        Commands::Whoami => match app.current_user() {
            Some(user) if cli.format == "json" => {
                println!("{}", serde_json::to_string_pretty(user)?);
            }
            Some(user) => {
                println!("{} ({})", user.username, user.name);
                println!("  Member since: {}", user.created_at.format("%Y-%m-%d"));
                println!("  Favorites: {}", user.favorites.len());
                println!("  Stories: {}", user.own_stories.len());
            }
            None => println!("Not logged in"),
        },

        Commands::Submit { title, author, url } => {
            let story = app.submit_story(NewStory::new(title, author, url)).await?;
            println!("Submitted \"{}\" ({})", story.title, story.story_id);
        }

        Commands::Favorite { story_id } => {
            app.favorite(&story_id).await?;
            println!("Added {} to favorites", story_id);
        }

        Commands::Unfavorite { story_id } => {
            app.unfavorite(&story_id).await?;
            println!("Removed {} from favorites", story_id);
        }

        Commands::Delete { story_id } => {
            let story = app.delete_story(&story_id).await?;
            println!("Deleted \"{}\"", story.title);
        }

        Commands::Render { page } => {
            app.navigate(page)?;
            println!("{}", app.render());
        }

        // Answered by run_local before connecting
        Commands::Logout | Commands::Config { .. } => {}
    }

    Ok(())
}

impl Commands {
    /// Whether the command talks to the API. Local commands must keep
    /// working while the server is unreachable.
    fn needs_api(&self) -> bool {
        !matches!(self, Commands::Logout | Commands::Config { .. })
    }
}

fn run_local(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Logout => {
            config.session.store().clear()?;
            println!("Logged out");
        }
        Commands::Config { output } => write_config(output.as_deref())?,
        _ => {}
    }
    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let (pretty, json) = if config.format == "json" {
        (
            None,
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
    } else {
        (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

fn write_config(output: Option<&std::path::Path>) -> Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}

fn print_stories(stories: &[Story], format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(stories)?);
        return Ok(());
    }

    if stories.is_empty() {
        println!("No stories yet.");
        return Ok(());
    }

    println!("{:<2} {:<40} {:<24} {:<16} {}", "", "Title", "Host", "Posted by", "ID");
    println!("{}", "-".repeat(100));

    for story in stories {
        println!(
            "{:<2} {:<40} {:<24} {:<16} {}",
            if story.favorite { "*" } else { "" },
            truncate(&story.title, 40),
            truncate(&story.host_name(), 24),
            truncate(&story.username, 16),
            story.story_id
        );
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
