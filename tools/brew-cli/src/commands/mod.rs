//! CLI command implementations.

pub mod auth;
pub mod browse;
pub mod notifications;
pub mod product;
pub mod profile;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Only show this category (e.g. "ipa").
    #[arg(short, long)]
    pub category: Option<String>,

    /// Search text matched against name and tagline.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort key: name, price, or rating.
    #[arg(long, default_value = "name")]
    pub sort: String,

    /// Sort descending instead of ascending.
    #[arg(long)]
    pub desc: bool,

    /// Only show products up to this price (whole rupees).
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Only show products rated at least this highly.
    #[arg(long)]
    pub min_rating: Option<f64>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address (prompted for when omitted).
    #[arg(short, long)]
    pub email: Option<String>,
}

/// Arguments for the logout command.
#[derive(Args)]
pub struct LogoutArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: Option<ProfileCommand>,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the profile.
    Show,
    /// Edit profile fields.
    Edit {
        /// New display name.
        #[arg(long)]
        name: Option<String>,
        /// New email address.
        #[arg(long)]
        email: Option<String>,
        /// New avatar URL.
        #[arg(long)]
        avatar: Option<String>,
    },
}
