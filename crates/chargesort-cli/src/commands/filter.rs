use std::path::Path;
use std::sync::Arc;

use chargesort_framework::{ClusterSnapshot, FilterResult, Framework, Pod, in_tree_registry};

use tracing::info;

use super::OutputFormat;

pub fn filter(
    snapshot: &str,
    config: Option<&str>,
    profile: &str,
    pod: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    println!("{}", render(snapshot, config, profile, pod, format)?);
    Ok(())
}

fn render(
    snapshot: &str,
    config: Option<&str>,
    profile: &str,
    pod: &str,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let config = super::load_config(config)?;
    let profile = config.profile(profile)?;
    let snapshot = Arc::new(ClusterSnapshot::from_file(Path::new(snapshot))?);
    let pod = Pod::parse(pod);

    let framework = Framework::new(profile, &in_tree_registry(), snapshot.clone())?;
    let result = framework.find_nodes_that_fit(&pod, &snapshot.node_infos());

    info!(
        pod = %pod,
        profile = framework.profile_name(),
        filters = ?framework.filter_plugin_names(),
        feasible = result.feasible.len(),
        "filter complete"
    );

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => Ok(format_text(&pod, &result)),
    }
}

fn format_text(pod: &Pod, result: &FilterResult) -> String {
    let mut out = format!("pod {pod}\n");
    if result.feasible.is_empty() {
        out.push_str("  no feasible nodes\n");
    }
    for name in &result.feasible {
        out.push_str(&format!("  ✓ {name}\n"));
    }
    for (name, status) in &result.diagnosis {
        out.push_str(&format!("  ✗ {name}: {status}\n"));
    }
    out.trim_end().to_string()
}
