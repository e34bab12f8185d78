use crate::api::models::PasswordRecord;
use crate::api::ports::Transport;
use crate::api::service::VaultService;
use crate::api::transport::HttpTransport;
use crate::config::config::{load_file_config_with_path, save_file_config, Config};
use anyhow::{anyhow, Result};
use inquire::{Confirm, Password, Text};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use std::env;
use std::sync::Arc;
use tokio::task::spawn_blocking;

pub struct Vault {
    service: Arc<VaultService>,
}

impl Vault {
    pub fn create(config: &Config) -> Result<Self> {
        if config.api_key.is_empty() {
            anyhow::bail!("no API key configured; run `vaultpass configure` first");
        }
        let transport: Arc<dyn Transport> =
            Arc::new(HttpTransport::new(&config.server_url, &config.api_key)?);
        let service = Arc::new(VaultService::new(transport));

        Ok(Vault { service })
    }

    pub async fn handle_list(&self, json_mode: bool) -> Result<()> {
        let svc = self.service.clone();
        let records = spawn_blocking(move || svc.list())
            .await
            .map_err(|_| anyhow!("task join error"))??;

        if json_mode {
            // Build JSON array without secrets
            let items: Vec<serde_json::Value> = records
                .iter()
                .map(|r| {
                    let mut item = json!({"id": r.id, "title": r.title, "username": r.username});
                    if !r.url.is_empty() {
                        item["url"] = json!(r.url);
                    }
                    if !r.notes.is_empty() {
                        item["notes"] = json!(r.notes);
                    }
                    item
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
            return Ok(());
        }

        if records.is_empty() {
            println!("(empty)");
            return Ok(());
        }
        println!("ID  | Title                 | Username");
        println!("----+-----------------------+-----------------------");
        for r in &records {
            println!("{:<3} | {:<21} | {:<21}", r.id, r.title, r.username);
        }
        Ok(())
    }

    pub async fn handle_get(&self, id: i64) -> Result<()> {
        let svc = self.service.clone();
        let record = spawn_blocking(move || svc.get(id))
            .await
            .map_err(|_| anyhow!("task join error"))??;

        println!("Title:    {}", record.title);
        println!("Username: {}", record.username);
        println!("Password: {}", record.secret.expose_secret());
        if !record.url.is_empty() {
            println!("URL:      {}", record.url);
        }
        if !record.notes.is_empty() {
            println!("Notes:    {}", record.notes);
        }
        Ok(())
    }

    pub async fn handle_add(&self, opts: AddOptions) -> Result<()> {
        let title = match opts.title {
            Some(t) => t,
            None => Text::new("Title").prompt()?,
        };
        let username = match opts.username {
            Some(u) => u,
            None => Text::new("Username").prompt()?,
        };
        let secret = prompt_secret("Password")?;
        let url = match opts.url {
            Some(u) => u,
            None => Text::new("URL (optional)").with_default("").prompt()?,
        };
        let notes = match opts.notes {
            Some(n) => n,
            None => Text::new("Notes (optional)").with_default("").prompt()?,
        };

        let mut record = PasswordRecord {
            id: 0,
            title,
            username,
            secret,
            url,
            notes,
        };

        let svc = self.service.clone();
        let record = spawn_blocking(move || svc.add(&mut record).map(|_| record))
            .await
            .map_err(|_| anyhow!("task join error"))??;
        println!("✅ Password added with ID {}.", record.id);
        Ok(())
    }

    pub async fn handle_update(&self, id: i64) -> Result<()> {
        // The server copy is the authoritative baseline; empty input keeps
        // the current value.
        let svc = self.service.clone();
        let mut record = spawn_blocking(move || svc.get(id))
            .await
            .map_err(|_| anyhow!("task join error"))??;

        record.title = Text::new("Title").with_default(&record.title).prompt()?;
        record.username = Text::new("Username")
            .with_default(&record.username)
            .prompt()?;
        if let Some(secret) = prompt_replacement_secret()? {
            record.secret = secret;
        }
        record.url = Text::new("URL").with_default(&record.url).prompt()?;
        record.notes = Text::new("Notes").with_default(&record.notes).prompt()?;

        let svc = self.service.clone();
        spawn_blocking(move || svc.update(&record))
            .await
            .map_err(|_| anyhow!("task join error"))??;
        println!("✅ Password updated.");
        Ok(())
    }

    pub async fn handle_delete(&self, id: i64, yes: bool) -> Result<()> {
        if !yes {
            let msg = format!("Delete password with ID {id}?");
            let proceed = Confirm::new(&msg).with_default(false).prompt()?;
            if !proceed {
                println!("❎ Deletion cancelled.");
                return Ok(());
            }
        }

        let svc = self.service.clone();
        spawn_blocking(move || svc.delete(id))
            .await
            .map_err(|_| anyhow!("task join error"))??;
        println!("🗑️ Password {id} deleted.");
        Ok(())
    }
}

pub fn handle_configure(config: &Config) -> Result<()> {
    let server_url = Text::new("Server URL")
        .with_default(&config.server_url)
        .prompt()?;
    let api_key = Password::new("API key").without_confirmation().prompt()?;

    let (path, mut file_cfg) = load_file_config_with_path();
    file_cfg.server_url = Some(server_url);
    if !api_key.is_empty() {
        file_cfg.api_key = Some(api_key);
    }
    save_file_config(&path, &file_cfg)?;
    println!("✅ Configuration saved to {}.", path.display());
    Ok(())
}

// Secret prompts honor VAULTPASS_PASSWORD so scripted runs skip the terminal.
fn prompt_secret(prompt: &str) -> Result<SecretString> {
    if let Ok(pw) = env::var("VAULTPASS_PASSWORD") {
        return Ok(SecretString::new(pw.into()));
    }
    let pw = Password::new(prompt).without_confirmation().prompt()?;
    Ok(SecretString::new(pw.into()))
}

fn prompt_replacement_secret() -> Result<Option<SecretString>> {
    let pw = if let Ok(pw) = env::var("VAULTPASS_PASSWORD") {
        pw
    } else {
        Password::new("Password (leave empty to keep current)")
            .without_confirmation()
            .prompt()?
    };
    if pw.is_empty() {
        return Ok(None);
    }
    Ok(Some(SecretString::new(pw.into())))
}

// Options for the add command, constructed by CLI layer
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub title: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}
