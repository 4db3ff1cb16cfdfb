//! Duka CLI - Terminal storefront client.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! duka products
//!
//! # List one category
//! duka products --category electronics
//!
//! # Send an STK push for an explicit amount
//! duka pay --phone 0712345678 --amount 100
//!
//! # Build a cart from catalog product IDs and pay the total
//! duka checkout --phone 0712345678 --id 1 --id 3
//! ```
//!
//! # Commands
//!
//! - `products` - Fetch and render the catalog, optionally filtered
//! - `pay` - Initiate a payment for an explicit amount
//! - `checkout` - Build a cart from the catalog and pay its total

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use duka_storefront::config::StorefrontConfig;
use duka_storefront::state::Storefront;

mod commands;

#[derive(Parser)]
#[command(name = "duka")]
#[command(author, version, about = "Duka storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Products {
        /// Only show products in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Send an STK push for an explicit amount
    Pay {
        /// Phone number to prompt (any common Kenyan format)
        #[arg(short, long)]
        phone: String,

        /// Amount in KSH
        #[arg(short, long)]
        amount: String,
    },
    /// Build a cart from catalog products and pay the total
    Checkout {
        /// Phone number to prompt (any common Kenyan format)
        #[arg(short, long)]
        phone: String,

        /// Catalog product ID to add to the cart (repeatable)
        #[arg(short = 'i', long = "id", required = true)]
        ids: Vec<i64>,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration from environment (needed for Sentry init)
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter
    // Defaults to warn level so command output stays readable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "duka=warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let storefront = Storefront::new(config);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &storefront).await;

    if let Err(e) = result {
        sentry::capture_error(&*e);
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, storefront: &Storefront) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Products { category } => {
            commands::products::list(storefront, category.as_deref()).await?;
        }
        Commands::Pay { phone, amount } => {
            commands::pay::send(storefront, &phone, &amount).await?;
        }
        Commands::Checkout { phone, ids } => {
            commands::checkout::run(storefront, &phone, &ids).await?;
        }
    }
    Ok(())
}
