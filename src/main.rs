// src/main.rs
// Ohio Therapy - keyword-driven wellness companion

use anyhow::Result;
use clap::Parser;
use ohio_therapy::cli::{Cli, Commands, run_server, run_stdio_chat};
use ohio_therapy::config::{CONFIG, load_dotenv};
use ohio_therapy::engine::get_welcome_message;
use ohio_therapy::prompt::instructions_for;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    let subscriber = FmtSubscriber::builder()
        .with_max_level(command.log_level(CONFIG.tracing_level()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match command {
        Commands::Serve { host, port } => {
            run_server(&CONFIG, host, port).await?;
        }
        Commands::Chat { seed, no_delay } => {
            run_stdio_chat(seed, no_delay, &CONFIG).await?;
        }
        Commands::Prompt { message } => {
            let ctx = instructions_for(message.trim());
            println!("{}", ctx.prompt);
        }
        Commands::Welcome => {
            println!("{}", get_welcome_message());
        }
    }

    Ok(())
}
