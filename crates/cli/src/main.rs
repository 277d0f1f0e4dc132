//! ShopHub CLI - Browse the demo storefront and replay shopping sessions.
//!
//! # Usage
//!
//! ```bash
//! # List products, cheapest first
//! shophub products --sort price-low
//!
//! # Show the Home page's featured products
//! shophub products --featured
//!
//! # Replay a cart script and print the totals
//! shophub cart run session.yaml
//!
//! # Check a contact form submission
//! shophub contact -n "Ada" -e ada@example.com -s "Hello" -m "Where is my order?"
//! ```
//!
//! # Commands
//!
//! - `products` - List the catalog
//! - `orders` - List the order history
//! - `wishlist` - List saved products
//! - `cart run` - Replay a YAML script of shopper actions
//! - `contact` / `report` / `chat` - Validate Contact and Customer Care forms

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shophub_core::{IssueType, SortOrder, Storefront};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::TracingNotifier;
use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "shophub")]
#[command(author, version, about = "ShopHub storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Sort order (`featured`, `price-low`, `price-high`, `rating`)
        #[arg(short, long, default_value = "featured")]
        sort: SortOrder,

        /// Only show the Home page's featured products
        #[arg(long, conflicts_with = "search")]
        featured: bool,

        /// Filter by name or category
        #[arg(short = 'q', long)]
        search: Option<String>,
    },
    /// List past orders
    Orders,
    /// List saved products
    Wishlist,
    /// Work with the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Validate and send a Contact page message
    Contact {
        #[arg(short, long, default_value = "")]
        name: String,

        #[arg(short, long, default_value = "")]
        email: String,

        #[arg(short, long, default_value = "")]
        subject: String,

        #[arg(short, long, default_value = "")]
        message: String,
    },
    /// Validate and file a Customer Care issue report
    Report {
        /// Issue type (`order`, `payment`, `product`, `delivery`, `other`)
        #[arg(short, long)]
        issue_type: Option<IssueType>,

        #[arg(short, long, default_value = "")]
        order_id: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Send a Customer Care live-chat message
    Chat {
        /// Message text
        message: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Replay a YAML script of shopper actions and show the resulting cart
    Run {
        /// Path to the script file
        script: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing with `EnvFilter`, defaulting to info for this binary.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shophub=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = Storefront::with_policy(config.shipping, TracingNotifier);

    match cli.command {
        Commands::Products {
            sort,
            featured,
            search,
        } => commands::catalog::products(&store, sort, featured, search.as_deref()),
        Commands::Orders => commands::catalog::orders(&store),
        Commands::Wishlist => commands::catalog::wishlist(&store),
        Commands::Cart { action } => match action {
            CartAction::Run { script } => commands::cart::run_script(&mut store, &script).await?,
        },
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => commands::forms::contact(&mut store, name, email, subject, message)?,
        Commands::Report {
            issue_type,
            order_id,
            description,
        } => commands::forms::report(&mut store, issue_type, order_id, description)?,
        Commands::Chat { message } => commands::forms::chat(&mut store, &message)?,
    }
    Ok(())
}
