mod dashboard;
mod overview;

use anyhow::Result;
use casewatch_core::{ClientConfig, DashboardUseCase, HttpStatsRepository};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "casewatch")]
#[command(about = "Analytics dashboards for the case/report backend", long_about = None)]
struct Cli {
    /// Backend base URL (overrides config and CASEWATCH_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bearer token (overrides config and CASEWATCH_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print totals, growth and the combined monthly table
    Overview,
    /// Open the TUI dashboard
    Dashboard,
    /// Show or update stored connection settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand)]
enum ConfigAction {
    /// Print the stored settings
    Show,
    /// Store the backend URL and/or token
    Set {
        #[arg(long)]
        api_url: Option<String>,
        #[arg(long)]
        token: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::load(None)?;

    match cli.command {
        Some(Commands::Config { action }) => run_config(config, action),
        command => {
            let (api_url, token) =
                config.resolve(cli.api_url.as_deref(), cli.token.as_deref())?;
            let repo = HttpStatsRepository::new(&api_url, &token);
            let usecase = DashboardUseCase::new(&repo);

            match command {
                Some(Commands::Overview) => {
                    let snapshot = usecase.snapshot()?;
                    overview::show_overview(&snapshot);
                }
                // Default to the TUI, same as running `casewatch dashboard`.
                _ => dashboard::run(&usecase)?,
            }
            Ok(())
        }
    }
}

fn run_config(mut config: ClientConfig, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!(
                "api_url: {}",
                config.api_url.as_deref().unwrap_or("(not set)")
            );
            // Never echo the token itself.
            println!(
                "token:   {}",
                if config.token.is_some() {
                    "(set)"
                } else {
                    "(not set)"
                }
            );
        }
        ConfigAction::Set { api_url, token } => {
            if api_url.is_none() && token.is_none() {
                println!("Nothing to set. Pass --api-url and/or --token.");
                return Ok(());
            }
            if let Some(url) = api_url {
                config.api_url = Some(url);
            }
            if let Some(token) = token {
                config.token = Some(token);
            }
            config.save(None)?;
            println!("Settings saved.");
        }
    }
    Ok(())
}
