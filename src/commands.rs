//! CLI command definitions and dispatch.

use clap::{Parser, Subcommand};
use serde::Serialize;

use sharereview_core::config::AppConfig;
use sharereview_core::error::AppError;
use sharereview_service::RequestContext;

use crate::app;

/// ShareReview: review pending shares across files and apps
#[derive(Debug, Parser)]
#[command(name = "sharereview", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// User the command acts for
    #[arg(short, long, default_value = "admin")]
    pub user: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the review feed
    Read {
        /// Only shares created after the last confirmed review
        #[arg(long)]
        only_new: bool,
    },
    /// Delete a share by its action id
    Delete {
        /// Composite action id from the feed
        id: String,
    },
    /// Confirm the review up to a timestamp (default: now)
    Confirm {
        /// Unix timestamp
        timestamp: Option<String>,
    },
    /// Show or hide chat room shares
    ShowTalk {
        /// `true` to include room shares
        #[arg(action = clap::ArgAction::Set)]
        show: bool,
    },
    /// Check whether the app is restricted to groups
    Secured,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let service = app::build_service(config).await?;
        let ctx = RequestContext::new(self.user.clone());

        match &self.command {
            Commands::Read { only_new } => print_json(&service.read(&ctx, *only_new).await?),
            Commands::Delete { id } => print_json(&service.delete(&ctx, id).await?),
            Commands::Confirm { timestamp } => {
                print_json(&service.confirm(&ctx, timestamp.as_deref()).await?)
            }
            Commands::ShowTalk { show } => print_json(&service.set_show_talk(&ctx, *show).await?),
            Commands::Secured => print_json(&service.is_secured().await?),
        }
    }
}

/// Print a value as pretty JSON on stdout
fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
