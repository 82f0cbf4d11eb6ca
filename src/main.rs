//! Record Forms CLI
//!
//! Command-line owner for the Group, Product and Region forms.
//!
//! # Usage
//!
//! ```bash
//! record-forms regions create --name "North" --code R1
//! record-forms products create --description Cement --price 12.5 --unit bag --category Building
//! record-forms groups update 42 --from group.json --group-name Ops
//! record-forms categories list --format json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "record-forms")]
#[command(version)]
#[command(about = "Create and update Group, Product and Region records", long_about = None)]
struct Cli {
    /// API endpoint URL
    #[arg(long, env = "RECORD_FORMS_API_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds (unbounded when unset)
    #[arg(long)]
    timeout: Option<u64>,

    /// Output format
    #[arg(long, short)]
    format: Option<output::OutputFormat>,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage groups
    Groups {
        #[command(subcommand)]
        action: GroupCommands,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductCommands,
    },
    /// Manage regions
    Regions {
        #[command(subcommand)]
        action: RegionCommands,
    },
    /// Browse product categories
    Categories {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum GroupCommands {
    /// Update an existing group
    Update {
        id: String,
        /// JSON file holding the current record
        #[arg(long)]
        from: Option<PathBuf>,
        #[arg(long)]
        group_name: Option<String>,
        #[arg(long)]
        group_id: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    /// Register a new product
    Create {
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        price: String,
        #[arg(long, default_value = "")]
        unit: String,
        #[arg(long, default_value = "")]
        category: String,
    },
}

#[derive(Subcommand)]
enum RegionCommands {
    /// Register a new region
    Create {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        code: String,
    },
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// List all categories
    List,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = config::Config::load(cli.profile.as_deref()).unwrap_or_default();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_deref().unwrap_or("warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: config::Config) -> commands::CommandResult {
    let connect = || {
        let api_url = cli
            .api_url
            .clone()
            .or_else(|| config.api_url.clone())
            .unwrap_or_else(|| config::DEFAULT_API_URL.to_string());
        let timeout = cli.timeout.or(config.timeout_secs).map(Duration::from_secs);
        let format = cli
            .format
            .or_else(|| config.default_format.as_deref().and_then(output::OutputFormat::parse))
            .unwrap_or(output::OutputFormat::Table);

        let client = record_forms::ApiClient::with_timeout(&api_url, timeout).map_err(|e| e.to_string())?;
        Ok::<_, String>(commands::Context {
            client: Arc::new(client),
            format,
        })
    };

    match cli.command {
        Commands::Groups { action } => commands::groups::handle(action, &connect()?).await,
        Commands::Products { action } => commands::products::handle(action, &connect()?).await,
        Commands::Regions { action } => commands::regions::handle(action, &connect()?).await,
        Commands::Categories { action } => commands::categories::handle(action, &connect()?).await,
        Commands::Config { action } => commands::config::handle(action, cli.profile.as_deref()).await,
    }
}
