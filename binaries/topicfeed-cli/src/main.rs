//! topicfeed command line
//!
//! ```bash
//! topicfeed serve                       # API on 0.0.0.0:3333
//! topicfeed serve --port 8080 --production
//! topicfeed feed --sort popular --limit 3
//! topicfeed search react
//! topicfeed --catalog data.json topics
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use topicfeed_config::{Config, Environment};
use topicfeed_feed::{FeedQuery, SortKey};
use topicfeed_web::{routes, state::open_catalog, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "topicfeed", version, about = "Topic catalog and feed API")]
struct Cli {
    /// YAML config file
    #[arg(long, global = true, env = "TOPICFEED_CONFIG")]
    config: Option<PathBuf>,

    /// JSON dataset to use instead of the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text, env = "LOG_FORMAT")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,

        /// Origin allowed by CORS
        #[arg(long)]
        frontend_url: Option<String>,

        /// Hide stack details in error responses
        #[arg(long)]
        production: bool,
    },

    /// Print all topics
    Topics,

    /// Print one page of the feed
    Feed {
        #[arg(long, default_value_t = 1)]
        page: i64,

        #[arg(long, default_value_t = 6)]
        limit: i64,

        #[arg(long, default_value_t = SortKey::CreatedAt)]
        sort: SortKey,
    },

    /// Rank topics and feed items against a query
    Search { query: String },

    /// Print the route table
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }

    match cli.command {
        Command::Serve {
            host,
            port,
            frontend_url,
            production,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(url) = frontend_url {
                config.frontend_url = url;
            }
            if production {
                config.environment = Environment::Production;
            }
            config.validate().context("invalid configuration")?;
            init_tracing(&config, cli.log_format);
            serve(config).await
        }
        Command::Topics => {
            init_tracing(&config, cli.log_format);
            let topics = open_catalog(&config)?.list_topics()?;
            print_json(&topics)
        }
        Command::Feed { page, limit, sort } => {
            init_tracing(&config, cli.log_format);
            let items = open_catalog(&config)?.list_feed_items()?;
            print_json(&FeedQuery::new(page, limit, sort).apply(&items))
        }
        Command::Search { query } => {
            init_tracing(&config, cli.log_format);
            let query = query.trim();
            if query.is_empty() {
                bail!("search query must not be empty");
            }
            let catalog = open_catalog(&config)?;
            let results = topicfeed_search::search(query, &catalog.list_topics()?, &catalog.list_feed_items()?);
            print_json(&results)
        }
        Command::Routes => {
            routes::print_routes();
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    info!(
        environment = ?config.environment,
        frontend_url = %config.frontend_url,
        "starting topicfeed"
    );
    let state = Arc::new(AppState::load(config).context("failed to open catalog")?);
    routes::print_routes();
    topicfeed_web::serve(state).await.context("server error")?;
    info!("Server stopped");
    Ok(())
}

/// Logs go to stderr so JSON output on stdout stays clean.
/// `RUST_LOG` wins over the configured level.
fn init_tracing(config: &Config, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let json = format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
