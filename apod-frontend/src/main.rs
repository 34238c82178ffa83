use apod_frontend::command::{HELP, ShellCommand};
use apod_frontend::shell::{Shell, format_target};

use anyhow::{Context, Result};
use apod_core::{ApodClient, AppConfig};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = AppConfig::load_or_default(&config_path)?;

    let _logging_guard = apod_core::logging::init_logging(
        &config.log_dir,
        "apod-frontend",
        &config.log_level,
        config.log_retention_days,
    )?;

    if config_path.exists() {
        tracing::info!("Loaded configuration from {}", config_path.display());
    } else {
        tracing::info!("No config at {}, using defaults", config_path.display());
    }

    let client = ApodClient::new(&config.apod).context("Failed to build HTTP client")?;
    tracing::info!("APOD endpoint: {}", client.endpoint());
    let mut shell = Shell::new(client);

    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match ShellCommand::parse(&line) {
            ShellCommand::Open(date) => {
                let panel = shell.open(date.as_deref()).await;
                println!("{}", format_target(&panel.render_target().await));
            }
            ShellCommand::Show => match shell.panel() {
                Some(panel) => println!("{}", format_target(&panel.render_target().await)),
                None => println!("No panel open."),
            },
            ShellCommand::Close => {
                if !shell.close() {
                    println!("No panel open.");
                }
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => break,
            ShellCommand::Empty => {}
            ShellCommand::Unknown(text) => println!("Unknown command: {}", text),
        }
    }

    shell.close();
    tracing::info!("APOD frontend exiting");

    Ok(())
}
