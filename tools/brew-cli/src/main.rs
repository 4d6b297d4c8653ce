//! BrewDash CLI - terminal storefront for BrewDash.
//!
//! Commands:
//! - `brewdash browse` - Browse the catalog with filters and sorting
//! - `brewdash product` - Show a product's detail page
//! - `brewdash shop` - Run an interactive shopping session
//! - `brewdash notifications` - Show the notification feed
//! - `brewdash profile` - Show or edit the user profile
//! - `brewdash login` / `brewdash logout` - Manage the session

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, LoginArgs, LogoutArgs, ProductArgs, ProfileArgs};

/// BrewDash CLI - Browse, order, and track beverage deliveries
#[derive(Parser)]
#[command(name = "brewdash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog with filters and sorting
    Browse(BrowseArgs),

    /// Show a product's detail page
    Product(ProductArgs),

    /// Run an interactive shopping session
    Shop,

    /// Show the notification feed
    Notifications,

    /// Show or edit the user profile
    Profile(ProfileArgs),

    /// Sign in
    Login(LoginArgs),

    /// Sign out
    Logout(LogoutArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and build the application context
    let config_path = cli.config.as_deref();
    let mut ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &mut ctx),
        Commands::Product(args) => commands::product::run(args, &mut ctx),
        Commands::Shop => commands::shop::run(&mut ctx),
        Commands::Notifications => commands::notifications::run(&mut ctx),
        Commands::Profile(args) => commands::profile::run(args, &mut ctx),
        Commands::Login(args) => commands::auth::login(args, &mut ctx),
        Commands::Logout(args) => commands::auth::logout(args, &mut ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
