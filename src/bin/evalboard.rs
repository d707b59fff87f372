//! evalboard — fetch and render classification-model evaluation reports.

use std::path::PathBuf;
use std::time::Duration;
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::info;

use evalboard::{Config, Dashboard, ErrorPolicy, Format, Layout, TriggerOutcome};

/// Evalboard CLI
#[derive(Parser)]
#[command(name = "evalboard")]
#[command(version = evalboard::PKG_VERSION)]
#[command(about = "Fetch and render classification-model evaluation reports")]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Results endpoint URL (overrides the config file)
    #[arg(short, long, env = "EVALBOARD_ENDPOINT")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch results once and render them
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Page layout (default: from config)
        #[arg(short, long, value_enum)]
        layout: Option<Layout>,
        /// What to do with shown results when a fetch fails (default: from config)
        #[arg(long, value_enum)]
        on_error: Option<ErrorPolicy>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Re-fetch every SECS seconds until interrupted
        #[arg(long, value_name = "SECS")]
        watch: Option<u64>,
    },

    /// Print the explanation shown for a model
    Explain {
        /// Exact model name (e.g., "Random Forest")
        model: String,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(url) = args.endpoint {
        config.endpoint.url = url;
    }

    match args.command {
        Command::Show {
            format,
            layout,
            on_error,
            output,
            watch,
        } => {
            if let Some(layout) = layout {
                config.display.layout = layout;
            }
            if let Some(policy) = on_error {
                config.display.on_error = policy;
            }
            let dashboard = Dashboard::from_config(&config)?;
            info!(
                version = %evalboard::version_string(),
                endpoint = %config.endpoint.url,
                "evalboard starting"
            );

            match watch {
                Some(secs) => watch_loop(&dashboard, format, output.as_ref(), secs).await?,
                None => {
                    let outcome = dashboard.trigger().await;
                    emit(&dashboard.render(format), output.as_ref())?;
                    if outcome == TriggerOutcome::Failed {
                        process::exit(1);
                    }
                }
            }
        }

        Command::Explain { model } => {
            println!("{}", config.catalog().explain(&model));
        }

        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

async fn watch_loop(
    dashboard: &Dashboard,
    format: Format,
    output: Option<&PathBuf>,
    secs: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut interval = tokio::time::interval(Duration::from_secs(secs.max(1)));
    loop {
        interval.tick().await;
        dashboard.refresh().await;
        emit(&dashboard.render(format), output)?;
    }
}

fn emit(rendered: &str, output: Option<&PathBuf>) -> std::io::Result<()> {
    match output {
        Some(path) => fs::write(path, rendered),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}
