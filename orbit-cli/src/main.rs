use clap::{Parser, Subcommand};
use colored::Colorize;
use orbit_core::{CliErrorDisplay, LoggingConfig, OrbitError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

use commands::{
    handle_agents_command, handle_config_command, handle_play_command, handle_scenarios_command,
    handle_validate_command, ScenariosCommand,
};
use config::CliConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Parser)]
#[command(name = "orbit")]
#[command(version = VERSION)]
#[command(about = "Orbit - watch a team of AI agents hand work to each other")]
#[command(long_about = r#"
Orbit plays back scripted multi-agent scenarios one hand-off at a time.
An orchestrator plans the work, specialist agents pick it up, and the
results flow back until the deliverable is ready.

Use 'orbit scenarios' to see what is available and 'orbit play <id>' to
watch one unfold.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(
        long,
        global = true,
        env = "ORBIT_CATALOG",
        help = "Catalog file to use instead of the built-in one (.yaml, .toml, .json)"
    )]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List the agents in the catalog")]
    Agents {
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    #[command(about = "List and inspect scenarios")]
    Scenarios {
        #[command(subcommand)]
        action: Option<ScenariosCommand>,
    },

    #[command(about = "Play a scenario live, one hand-off per tick")]
    Play {
        #[arg(help = "Scenario id (defaults to the configured or first scenario)")]
        scenario: Option<String>,

        #[arg(short, long, help = "Milliseconds between hand-offs")]
        interval_ms: Option<u64>,

        #[arg(short, long, default_value = "text")]
        format: String,
    },

    #[command(about = "Validate a catalog file")]
    Validate {
        #[arg(help = "Catalog file (defaults to --catalog or playback.catalog_path)")]
        path: Option<PathBuf>,
    },

    #[command(about = "Show the effective configuration")]
    Config {
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    #[command(about = "Show version information")]
    Version {
        #[arg(short, long)]
        detailed: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.catalog.clone()) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e.into());
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose, &config.core.logging);

    match run(cli, config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, logging: &LoggingConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        logging.env_filter("warn")
    };

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json_format {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

fn report_error(e: &anyhow::Error) {
    match e.downcast_ref::<OrbitError>() {
        Some(err) => {
            err.log();
            eprint!("{}: {}", "Error".red().bold(), CliErrorDisplay::new(err));
        }
        None => eprintln!("{}: {}", "Error".red().bold(), e),
    }
}

async fn run(cli: Cli, config: CliConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Agents { format } => handle_agents_command(&config, &format).await,
        Commands::Scenarios { action } => handle_scenarios_command(&config, action).await,
        Commands::Play {
            scenario,
            interval_ms,
            format,
        } => handle_play_command(&config, scenario, interval_ms, &format).await,
        Commands::Validate { path } => handle_validate_command(&config, path).await,
        Commands::Config { format } => handle_config_command(&config, &format).await,
        Commands::Version { detailed } => cmd_version(detailed),
    }
}

fn cmd_version(detailed: bool) -> anyhow::Result<()> {
    if detailed {
        println!("{}", "Orbit Version Information".cyan().bold());
        println!("{}", "═".repeat(40).dimmed());
        println!("  {:<15} {}", "Version:".bold(), VERSION);
        println!("  {:<15} {}", "Name:".bold(), NAME);
        println!("  {:<15} {}", "Core:".bold(), orbit_core::VERSION);
        println!("  {:<15} Apache-2.0", "License:".bold());
        println!();
        println!("  {}", "Built-in Scenarios:".bold());
        println!("    ◆ travel-site");
        println!("    ◆ research-report");
        println!("    ◆ food-delivery");
        println!();
        println!("  {}", "Build Information:".bold());
        println!("    Rust Edition: 2021");
        #[cfg(debug_assertions)]
        println!("    Build:        Debug");
        #[cfg(not(debug_assertions))]
        println!("    Build:        Release");
    } else {
        println!("orbit {}", VERSION);
    }

    Ok(())
}
