pub mod events;
pub mod filter;
pub mod rank;

use std::path::Path;

use chargesort_framework::SchedulerConfig;

/// Report format for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load the profile config, falling back to the built-in default.
fn load_config(path: Option<&str>) -> anyhow::Result<SchedulerConfig> {
    match path {
        Some(p) => SchedulerConfig::from_file(Path::new(p)),
        None => Ok(SchedulerConfig::default()),
    }
}
