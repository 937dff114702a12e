mod api;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod product;
mod session;
mod ui;
mod workers;

use crate::api::{ApiClient, InventoryApi};
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts;
use crate::environment::Environment;
use crate::session::FileSessionProvider;
use crate::workers::{EventSender, start_dispatcher};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{error::Error, io};
use tokio::sync::{broadcast, mpsc};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the inventory dashboard
    Start,
    /// Save an access token for subsequent API requests.
    Login {
        /// Bearer token issued by the inventory service.
        #[arg(long, value_name = "TOKEN")]
        token: String,

        /// Display name shown in the dashboard header.
        #[arg(long, value_name = "USERNAME")]
        username: Option<String>,
    },
    /// Clear the saved session and logout.
    Logout,
    /// Print the product collection without starting the dashboard.
    List,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("SHELFWATCH_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start => {
            // The username is cosmetic; a missing config only means an
            // anonymous header and an empty token on each request.
            let username = Config::load_from_file(&config_path)
                .ok()
                .and_then(|config| config.username);
            start(username, environment, config_path).await
        }
        Command::Login { token, username } => {
            let config = Config::new(username, token);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Session saved to {}", config_path.display());
            Ok(())
        }
        Command::Logout => {
            println!("Logging out and clearing session configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
        Command::List => list(environment, config_path).await,
    }
}

/// Starts the dashboard UI.
///
/// # Arguments
/// * `username` - Display name of the signed-in user, if known.
/// * `env` - The environment to connect to.
/// * `config_path` - Path to the session configuration file.
async fn start(
    username: Option<String>,
    env: Environment,
    config_path: std::path::PathBuf,
) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Wire the UI to the worker side.
    let session = Arc::new(FileSessionProvider::new(config_path));
    let api: Arc<dyn InventoryApi> = Arc::new(ApiClient::new(env, session));

    let (event_tx, event_rx) = mpsc::channel(cli_consts::EVENT_QUEUE_SIZE);
    let (command_tx, command_rx) = mpsc::channel(cli_consts::COMMAND_QUEUE_SIZE);
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

    let dispatcher = start_dispatcher(api, command_rx, EventSender::new(event_tx), shutdown_rx);

    let app = ui::App::new(username, env, event_rx, command_tx, shutdown_tx);
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let _ = dispatcher.await;

    res?;
    Ok(())
}

/// Fetches and prints the product collection, headless.
async fn list(env: Environment, config_path: std::path::PathBuf) -> Result<(), Box<dyn Error>> {
    let session = Arc::new(FileSessionProvider::new(config_path));
    let client = ApiClient::new(env, session);

    let products = client.list_products().await?;

    println!(
        "{:<24} {:<12} {:>10} {:>12}  {}",
        "Product", "Category", "Price", "Stock", "Status"
    );
    for product in &products {
        let status = if product.is_low_stock() {
            "LOW STOCK"
        } else {
            "OK"
        };
        println!(
            "{:<24} {:<12} {:>10.2} {:>7} / {:<3} {}",
            product.product_name,
            product.category.to_string(),
            product.price,
            product.quantity,
            product.threshold,
            status
        );
    }

    let total_stock: u64 = products.iter().map(|p| u64::from(p.quantity)).sum();
    let low_stock = products.iter().filter(|p| p.is_low_stock()).count();
    println!(
        "\n{} products, {} units in stock, {} low on stock",
        products.len(),
        total_stock,
        low_stock
    );
    Ok(())
}
