#![allow(clippy::module_inception)]
use crate::cli::cli::{Cli, Commands};
use crate::commands::handlers::{handle_configure, AddOptions, Vault};
use crate::config::config::Config;
use clap::Parser;

mod cli;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::create();

    match cli.command {
        Commands::Configure => {
            handle_configure(&config)?;
        }
        Commands::List { json } => {
            let vault = Vault::create(&config)?;
            vault.handle_list(json).await?;
        }
        Commands::Get { id } => {
            let vault = Vault::create(&config)?;
            vault.handle_get(id).await?;
        }
        Commands::Add {
            title,
            username,
            url,
            notes,
        } => {
            let vault = Vault::create(&config)?;
            let opts = AddOptions {
                title,
                username,
                url,
                notes,
            };
            vault.handle_add(opts).await?;
        }
        Commands::Update { id } => {
            let vault = Vault::create(&config)?;
            vault.handle_update(id).await?;
        }
        Commands::Delete { id, yes } => {
            let vault = Vault::create(&config)?;
            vault.handle_delete(id, yes).await?;
        }
    }

    Ok(())
}
