use std::path::Path;

use chargesort_core::RankedSequence;
use chargesort_framework::ClusterSnapshot;

use super::OutputFormat;

pub fn rank(snapshot: &str, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(snapshot, format)?);
    Ok(())
}

fn render(snapshot: &str, format: OutputFormat) -> anyhow::Result<String> {
    let snapshot = ClusterSnapshot::from_file(Path::new(snapshot))?;
    let ranked = chargesort_core::rank(&snapshot.candidates());

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ranked)?),
        OutputFormat::Text => Ok(format_text(&ranked)),
    }
}

fn format_text(ranked: &RankedSequence) -> String {
    if ranked.is_empty() {
        return "no nodes".to_string();
    }
    ranked
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{:>3}. {:<24} {}", i + 1, n.identifier, n.charge_rate))
        .collect::<Vec<_>>()
        .join("\n")
}
