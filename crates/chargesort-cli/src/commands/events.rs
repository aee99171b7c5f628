use std::sync::Arc;

use chargesort_framework::{ClusterSnapshot, Framework, in_tree_registry};

pub fn events(config: Option<&str>, profile: &str) -> anyhow::Result<()> {
    println!("{}", render(config, profile)?);
    Ok(())
}

fn render(config: Option<&str>, profile: &str) -> anyhow::Result<String> {
    let config = super::load_config(config)?;
    let profile = config.profile(profile)?;
    // Event registration does not depend on node data.
    let framework = Framework::new(
        profile,
        &in_tree_registry(),
        Arc::new(ClusterSnapshot::default()),
    )?;

    let events = framework.events_to_register();
    if events.is_empty() {
        return Ok(format!("{}: no requeue events", framework.profile_name()));
    }
    let lines: Vec<String> = events.iter().map(|e| format!("  {e}")).collect();
    Ok(format!("{}:\n{}", framework.profile_name(), lines.join("\n")))
}
