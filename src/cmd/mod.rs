use std::path::PathBuf;

use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod inspect;

#[derive(Parser)]
#[command(about = "serves culture fit predictions from a trained forest")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Load the model and serve predictions over http
    Listen,
    /// Load the model, print a summary and optionally score a json payload
    Inspect {
        #[arg(long)]
        payload: Option<PathBuf>,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Inspect { payload }) => {
            inspect::run(payload.as_deref()).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
