use std::path::PathBuf;

use agent_client::create_clients;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod completion;
mod configuration;
mod error;
mod logging;

use commands::chat::Conversation;
use configuration::Settings;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Agent service base URL (overrides AGENT_CLIENT_SERVICE__HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Bearer token for the agent service (overrides AGENT_CLIENT_SERVICE__TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Log request details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new session and print its credential
    Session {
        /// Print only the client secret
        #[arg(long)]
        secret_only: bool,
    },

    /// Send chat messages to the agent service
    Chat {
        /// Model to use
        #[arg(short, long)]
        model: Option<String>,

        /// System prompt placed at the start of the conversation
        #[arg(short, long)]
        system: Option<String>,

        /// Print the full completion payload instead of the reply text
        #[arg(long)]
        raw: bool,

        /// Message to send; starts an interactive conversation when omitted
        message: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(host) = cli.host {
        settings.service.host = host;
    }
    if let Some(token) = cli.token {
        settings.service.token = Some(token);
    }

    let clients = create_clients(settings.transport_config())
        .context("Failed to build the agent service transport")?;

    match cli.command {
        Command::Session { secret_only } => {
            let output = commands::session::run(&clients.session, secret_only).await?;
            println!("{}", output);
        }
        Command::Chat {
            model,
            system,
            raw,
            message,
        } => {
            let mut conversation = Conversation::new(
                clients.chat,
                model.unwrap_or(settings.chat.model),
                system.or(settings.chat.system_prompt),
            );
            match message {
                Some(text) => {
                    let output = commands::chat::run_once(&mut conversation, &text, raw).await?;
                    commands::chat::render(&output, raw)?;
                }
                None => commands::chat::run_interactive(&mut conversation, raw).await?,
            }
        }
    }
    Ok(())
}
