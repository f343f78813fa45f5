//! Authentication token management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use cloudshare_core::error::AppError;
use cloudshare_database::repositories::token::AuthTokenRepository;
use cloudshare_entity::token::AuthToken;

use crate::output::{self, OutputFormat};

/// Arguments for the token command
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// List issued tokens
    List {
        /// Only show tokens of this user
        #[arg(long)]
        user: Option<Uuid>,
    },
    /// Backfill blank token display names with the placeholder
    Repair {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// One row of token list output
#[derive(Debug, Serialize, Tabled)]
struct TokenRow {
    /// Token ID
    id: String,
    /// Owning user ID
    user_id: String,
    /// Login name
    login_name: String,
    /// Display name
    name: String,
    /// Last activity
    last_activity: String,
}

impl From<AuthToken> for TokenRow {
    fn from(token: AuthToken) -> Self {
        Self {
            id: token.id.to_string(),
            user_id: token.user_id.to_string(),
            login_name: token.login_name.clone(),
            name: token.display_name().to_string(),
            last_activity: token.last_activity.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Execute token commands
pub async fn execute(
    args: &TokenArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let repo = AuthTokenRepository::new(pool);

    match &args.command {
        TokenCommand::List { user } => {
            let tokens = match user {
                Some(user_id) => repo.find_by_user(*user_id).await?,
                None => repo.list_all().await?,
            };
            let rows: Vec<TokenRow> = tokens.into_iter().map(TokenRow::from).collect();
            output::print_list(&rows, format);
        }
        TokenCommand::Repair { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("This will rename all blank token names to '(none)'. Continue?")
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let repaired = repo.repair_blank_names().await?;
            output::print_success(&format!("{} token name(s) repaired.", repaired));
        }
    }

    Ok(())
}
