pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio CLI - Drive the modal, toast and navigation core headlessly")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run a navigation through the route guard with scripted modal replies")]
    Navigate(commands::navigate::NavigateArgs),

    #[command(about = "Push toasts through the queue and show what survives")]
    Toast(commands::toast::ToastArgs),

    #[command(about = "List the route table")]
    Routes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Navigate(args) => commands::navigate::handle(args, output_format).await,
        Commands::Toast(args) => commands::toast::handle(args, output_format).await,
        Commands::Routes => commands::routes::handle(output_format).await,
    }
}
