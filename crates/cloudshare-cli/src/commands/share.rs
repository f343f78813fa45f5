//! Share management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use cloudshare_client::shares::{CreateShareParams, UpdateShareParams};
use cloudshare_client::ApiClient;
use cloudshare_core::error::AppError;
use cloudshare_entity::share::{Share, SharePermissions, ShareType};

use crate::output::{self, OutputFormat};

/// Arguments for the share command
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Share subcommand
    #[command(subcommand)]
    pub command: ShareCommand,
}

/// Share subcommands
#[derive(Debug, Subcommand)]
pub enum ShareCommand {
    /// List the current user's shares
    List,
    /// Show a single share
    Get {
        /// Share ID
        id: String,
    },
    /// Create a new share
    Create {
        /// Path of the file or folder to share
        #[arg(long)]
        path: String,
        /// Share type (user, group, link, remote)
        #[arg(long = "type")]
        share_type: ShareType,
        /// Recipient user or group
        #[arg(long)]
        share_with: Option<String>,
        /// Password for link shares
        #[arg(long)]
        password: Option<String>,
        /// Permission bits (1=read 2=update 4=create 8=delete 16=share)
        #[arg(long)]
        permissions: Option<u32>,
        /// Expiration date (YYYY-MM-DD)
        #[arg(long)]
        expire_date: Option<String>,
    },
    /// Update a persisted share
    Update {
        /// Share ID
        id: String,
        /// New permission bits
        #[arg(long)]
        permissions: Option<u32>,
        /// New link password
        #[arg(long)]
        password: Option<String>,
        /// New expiration date (YYYY-MM-DD)
        #[arg(long)]
        expire_date: Option<String>,
        /// New display name
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a share
    Delete {
        /// Share ID
        id: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Print the public link of a share
    Link {
        /// Share ID
        id: String,
    },
}

/// One row of share list output
#[derive(Debug, Serialize, Tabled)]
struct ShareRow {
    /// Share ID
    id: String,
    /// Share type
    share_type: String,
    /// Recipient (or the link token)
    target: String,
    /// Permission bits
    permissions: String,
    /// Expiration date
    expires: String,
}

impl From<&Share> for ShareRow {
    fn from(share: &Share) -> Self {
        let target = share
            .share_with
            .clone()
            .or_else(|| share.token.clone())
            .unwrap_or_default();
        Self {
            id: share.id.clone().unwrap_or_default(),
            share_type: share
                .share_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| "?".to_string()),
            target,
            permissions: share
                .permissions
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            expires: share.expire_date.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute share commands
pub async fn execute(
    args: &ShareArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let client = ApiClient::new(&config.api)?;

    match &args.command {
        ShareCommand::List => {
            let shares = client.list_shares().await?;
            let rows: Vec<ShareRow> = shares.iter().map(ShareRow::from).collect();
            output::print_list(&rows, format);
        }
        ShareCommand::Get { id } => {
            let share = client.get_share(id).await?;
            output::print_item(&share, format);
        }
        ShareCommand::Create {
            path,
            share_type,
            share_with,
            password,
            permissions,
            expire_date,
        } => {
            let share = client
                .create_share(&CreateShareParams {
                    path: path.clone(),
                    share_type: *share_type,
                    share_with: share_with.clone(),
                    password: password.clone(),
                    permissions: permissions.map(SharePermissions),
                    expire_date: expire_date.clone(),
                })
                .await?;

            output::print_item(&share, format);
            if share.is_link() {
                println!("Public link: {}", client.public_link(&share));
            }
        }
        ShareCommand::Update {
            id,
            permissions,
            password,
            expire_date,
            name,
        } => {
            let share = client
                .update_share(
                    id,
                    &UpdateShareParams {
                        permissions: permissions.map(SharePermissions),
                        password: password.clone(),
                        expire_date: expire_date.clone(),
                        name: name.clone(),
                    },
                )
                .await?;
            output::print_item(&share, format);
        }
        ShareCommand::Delete { id, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete share {id}?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            client.delete_share(id).await?;
            output::print_success("Share deleted.");
        }
        ShareCommand::Link { id } => {
            let share = client.get_share(id).await?;
            println!("{}", client.public_link(&share));
        }
    }

    Ok(())
}
