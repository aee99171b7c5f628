use clap::{Parser, Subcommand};

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(
    name = "chargesort",
    about = "chargesort — charge-rate node filter for cluster schedulers",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a profile's filter plugins against every node of a snapshot
    Filter {
        /// Cluster snapshot (TOML, [[nodes]] name + charge_rate)
        #[arg(short, long)]
        snapshot: String,
        /// Scheduler profile config; defaults to the built-in profile
        #[arg(short, long)]
        config: Option<String>,
        /// Profile (scheduler name) to run
        #[arg(short, long, default_value = chargesort_framework::DEFAULT_PROFILE)]
        profile: String,
        /// Pod being placed, as namespace/name
        #[arg(long, default_value = "default/pod")]
        pod: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the snapshot's nodes ranked by charge rate
    Rank {
        #[arg(short, long)]
        snapshot: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List cluster events that requeue pods rejected by a profile
    Events {
        #[arg(short, long)]
        config: Option<String>,
        #[arg(short, long, default_value = chargesort_framework::DEFAULT_PROFILE)]
        profile: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chargesort=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Filter {
            snapshot,
            config,
            profile,
            pod,
            format,
        } => commands::filter::filter(&snapshot, config.as_deref(), &profile, &pod, format),
        Commands::Rank { snapshot, format } => commands::rank::rank(&snapshot, format),
        Commands::Events { config, profile } => {
            commands::events::events(config.as_deref(), &profile)
        }
    }
}
