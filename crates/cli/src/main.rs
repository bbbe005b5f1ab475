//! OpenClose Hub CLI - Shop status and inventory console.
//!
//! # Usage
//!
//! ```bash
//! # Customer view
//! oc-cli status
//! oc-cli products list --search coffee
//!
//! # Admin session
//! oc-cli login -u admin -p admin123
//! oc-cli toggle
//! oc-cli products add --name Tea --price 2.50 --quantity 40
//! oc-cli products update <ID> --quantity 0 --image tea.png
//! oc-cli products delete <ID>
//! oc-cli logout
//! ```
//!
//! # Commands
//!
//! - `status` / `refresh` - Shop banner and last-updated time
//! - `toggle` - Open or close the shop (admin)
//! - `products` - List, add, update or delete products
//! - `login` / `logout` / `whoami` - Admin session

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use openclose_core::{NewProduct, Price, ProductId};

mod commands;
mod config;
mod error;

use commands::App;
use commands::products::ProductChanges;
use config::CliConfig;
use error::CliError;

#[derive(Parser)]
#[command(name = "oc-cli")]
#[command(author, version, about = "OpenClose Hub shop console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether the shop is open
    Status,
    /// Open or close the shop
    Toggle,
    /// Mark the inventory as refreshed
    Refresh,
    /// Browse and manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Log in as the admin
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },
    /// End the admin session
    Logout,
    /// Show the logged-in user
    Whoami,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products, optionally filtered by name or description
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add a product
    Add {
        #[arg(short, long)]
        name: String,

        /// Unit price, e.g. `3.99` or `$3.99`
        #[arg(short, long)]
        price: Price,

        #[arg(short, long)]
        quantity: u32,

        #[arg(short, long)]
        description: Option<String>,

        /// Image URL
        #[arg(long)]
        image: Option<String>,
    },
    /// Change fields of a product
    Update {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        price: Option<Price>,

        #[arg(short, long)]
        quantity: Option<u32>,

        /// New description; pass an empty string to clear it
        #[arg(short, long)]
        description: Option<String>,

        /// New image URL; pass an empty string to clear it
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove a product
    Delete { id: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match CliConfig::from_env() {
        Ok(config) => {
            init_tracing(&config);
            run(cli, &config).await
        }
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        let _ = writeln!(std::io::stderr(), "error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(config: &CliConfig) {
    // Command output owns stdout, so logs go to stderr
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "openclose_store=info,openclose_cli=info".into());

    let json_layer = config.log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!config.log_json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), CliError> {
    let mut app = App::open(config)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Status => commands::shop::status(&app, &mut out)?,
        Commands::Toggle => {
            commands::shop::toggle(&mut app, &mut out)?;
        }
        Commands::Refresh => commands::shop::refresh(&mut app, &mut out)?,
        Commands::Products { action } => match action {
            ProductAction::List { search } => {
                commands::products::list(&app, search.as_deref(), &mut out)?;
            }
            ProductAction::Add {
                name,
                price,
                quantity,
                description,
                image,
            } => {
                let mut product = NewProduct::new(name, price, quantity);
                if let Some(description) = description {
                    product = product.with_description(description);
                }
                if let Some(image) = image {
                    product = product.with_image(image);
                }
                commands::products::add(&mut app, product, &mut out)?;
            }
            ProductAction::Update {
                id,
                name,
                price,
                quantity,
                description,
                image,
            } => {
                let changes = ProductChanges {
                    name,
                    price,
                    quantity,
                    description,
                    image,
                };
                commands::products::update(&mut app, &ProductId::new(id), changes, &mut out)?;
            }
            ProductAction::Delete { id } => {
                commands::products::delete(&mut app, &ProductId::new(id), &mut out)?;
            }
        },
        Commands::Login { username, password } => {
            commands::session::login(&mut app, &username, &password, &mut out).await?;
        }
        Commands::Logout => commands::session::logout(&mut app)?,
        Commands::Whoami => commands::session::whoami(&app, &mut out)?,
    }
    Ok(())
}
