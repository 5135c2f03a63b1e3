//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::infra::config;

/// Deploy AI agents to Kubernetes
#[derive(Parser)]
#[command(
    name = "paragon",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve(commands::serve::ServeArgs),

    /// Print the manifests for an agent without deploying it
    Render(commands::AgentFileArgs),

    /// Deploy an agent and print the result
    Deploy(commands::AgentFileArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<()> {
        let config = config::load_from_env()?;
        match self.command {
            Command::Serve(args) => commands::serve::run(&args, config).await,
            Command::Render(args) => commands::render::run(&args, &config),
            Command::Deploy(args) => commands::deploy::run(&args, &config).await,
        }
    }
}
