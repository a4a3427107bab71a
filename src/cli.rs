// src/cli.rs
use crate::core::{ConfigManager, PlatformSettings};
use crate::relay::{AnalysisSession, MessageTransport, PageScraper, RelayClient, RelayWorker};
use crate::web::start_web_server;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "findn")]
#[command(about = "Networking suggestions from LinkedIn and Instagram profiles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the analysis backend
    Serve {
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },
    /// Extract profile fields from a saved page
    Scrape {
        /// Address the page was captured from
        #[arg(long)]
        url: String,
        /// Saved HTML of the page
        #[arg(long)]
        html: PathBuf,
    },
    /// Scrape a saved page and ask the backend for suggestions
    Analyze {
        #[arg(long)]
        url: String,
        #[arg(long)]
        html: PathBuf,
        #[arg(long, env = "FINDN_BACKEND_URL")]
        backend_url: Option<String>,
    },
    /// Report whether the backend is reachable
    Status {
        #[arg(long, env = "FINDN_BACKEND_URL")]
        backend_url: Option<String>,
    },
    /// Show or change the per-platform toggles
    Settings {
        #[arg(long)]
        linkedin: Option<bool>,
        #[arg(long)]
        instagram: Option<bool>,
    },
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let mut config = ConfigManager::load()?;

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            start_web_server(config.server).await
        }

        Command::Scrape { url, html } => {
            let page = load_page(&url, &html).await?;
            if !page.is_profile_page() {
                warn!("{} does not look like a profile page", url);
            }

            let profile = page.scrape();
            println!(
                "{}",
                serde_json::to_string_pretty(&profile).context("Failed to render profile")?
            );
            Ok(())
        }

        Command::Analyze {
            url,
            html,
            backend_url,
        } => {
            let backend_url = backend_url.unwrap_or(config.relay.backend_url);
            let settings = PlatformSettings::load(&config.relay.settings_path).await?;
            let page = load_page(&url, &html).await?;

            let (relay, worker) = RelayWorker::new(RelayClient::new(&backend_url)?).spawn();
            if let Some(message) = page.page_loaded_message() {
                relay.send(message).await?;
            }

            let session = AnalysisSession::new(relay, settings);
            let outcome = session.analyze_page(&page).await;
            drop(session);
            worker.await.context("Relay worker panicked")?;

            let result = outcome?;
            println!("{}", result.to_plain_text());
            Ok(())
        }

        Command::Status { backend_url } => {
            let backend_url = backend_url.unwrap_or(config.relay.backend_url);
            let status = RelayClient::new(&backend_url)?.check_status().await;
            info!("Backend at {} is {}", backend_url, status);
            println!("{}", status);
            Ok(())
        }

        Command::Settings {
            linkedin,
            instagram,
        } => {
            let path = &config.relay.settings_path;
            let mut settings = PlatformSettings::load(path).await?;

            if linkedin.is_some() || instagram.is_some() {
                settings.linkedin_enabled = linkedin.unwrap_or(settings.linkedin_enabled);
                settings.instagram_enabled = instagram.unwrap_or(settings.instagram_enabled);
                settings.save(path).await?;
            }

            println!(
                "{}",
                toml::to_string(&settings).context("Failed to render settings")?
            );
            Ok(())
        }
    }
}

async fn load_page(url: &str, html: &Path) -> Result<PageScraper> {
    let content = tokio::fs::read_to_string(html)
        .await
        .with_context(|| format!("Failed to read page: {}", html.display()))?;
    Ok(PageScraper::new(url, content))
}
