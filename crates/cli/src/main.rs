//! Tailorzone CLI - Browse the catalog and manage a cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List products, optionally by category and page
//! tz products --category traditional --page 2
//!
//! # Search by name or category
//! tz search saree
//!
//! # Manage the cart
//! tz cart add t1
//! tz cart set t1 3
//! tz cart show
//!
//! # Toggle a wishlist entry, or move it into the cart
//! tz wishlist toggle w1
//! tz wishlist add-to-cart w1
//! ```
//!
//! Cart and wishlist snapshots live in `TAILORZONE_DATA_DIR` (or
//! `--data-dir`) and survive between runs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tailorzone_storefront::config::StorefrontConfig;
use tailorzone_storefront::error::AppError;
use tailorzone_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "tz")]
#[command(author, version, about = "Tailorzone storefront CLI")]
struct Cli {
    /// Directory for cart and wishlist snapshots
    #[arg(long, global = true, env = "TAILORZONE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Products per page (defaults to `TAILORZONE_PRODUCTS_PER_PAGE`)
        #[arg(long)]
        per_page: Option<usize>,
    },
    /// Show one product
    Product {
        /// Product ID
        id: String,
    },
    /// Search products by name or category
    Search {
        /// Text to look for (case-insensitive)
        term: String,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and the order summary
    Show,
    /// Add one unit of a product
    Add {
        /// Product ID
        id: String,
    },
    /// Remove a product's line
    Remove {
        /// Product ID
        id: String,
    },
    /// Set a line's quantity (0 or less removes it)
    Set {
        /// Product ID
        id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Delete the saved cart and wishlist
    ClearStorage,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show wishlist entries
    Show,
    /// Add a product, or remove it if already saved
    Toggle {
        /// Product ID
        id: String,
    },
    /// Add one unit of a saved product to the cart
    AddToCart {
        /// Product ID
        id: String,
    },
}

/// Install the tracing subscriber, logging to stderr.
///
/// Defaults to info level for our crates if `RUST_LOG` is not set.
/// `TAILORZONE_LOG_FORMAT=json` switches to one JSON object per event.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tailorzone_storefront=info,tailorzone_cli=info".into());

    let json = std::env::var("TAILORZONE_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        e.log();
        #[allow(clippy::print_stderr)]
        {
            eprintln!("{}", e.user_message());
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    // Clearing must work even when a snapshot is too corrupt to open a store.
    if let Commands::Cart {
        action: CartAction::ClearStorage,
    } = cli.command
    {
        return commands::cart::clear_storage(&config);
    }

    let state = AppState::new(config)?;

    match cli.command {
        Commands::Products {
            category,
            page,
            per_page,
        } => commands::products::list(&state, category.as_deref(), page, per_page).await,
        Commands::Product { id } => commands::products::show(&state, &id).await,
        Commands::Search { term } => commands::products::search(&state, &term).await,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state),
            CartAction::Add { id } => commands::cart::add(&state, &id).await,
            CartAction::Remove { id } => commands::cart::remove(&state, &id),
            CartAction::Set { id, quantity } => commands::cart::set_quantity(&state, &id, quantity),
            CartAction::ClearStorage => Ok(()),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show(&state),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&state, &id).await,
            WishlistAction::AddToCart { id } => commands::wishlist::add_to_cart(&state, &id),
        },
    }
}
