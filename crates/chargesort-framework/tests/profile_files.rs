//! File-based profile and snapshot loading, end to end through the
//! framework.

use std::io::Write;
use std::sync::Arc;

use chargesort_framework::*;

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    path
}

const CONFIG: &str = r#"
[[profiles]]
scheduler_name = "charge-aware"

[profiles.plugins.filter]
enabled = ["ChargeRateSort"]
"#;

#[test]
fn filters_snapshot_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_file(&dir, "chargesort.toml", CONFIG);
    let snapshot_path = write_file(
        &dir,
        "cluster.toml",
        r#"
[[nodes]]
name = "a"
charge_rate = 50

[[nodes]]
name = "b"
charge_rate = 50
"#,
    );

    let config = SchedulerConfig::from_file(&config_path).unwrap();
    let snapshot = Arc::new(ClusterSnapshot::from_file(&snapshot_path).unwrap());
    let profile = config.profile("charge-aware").unwrap();
    let fw = Framework::new(profile, &in_tree_registry(), snapshot.clone()).unwrap();

    let result = fw.find_nodes_that_fit(&Pod::parse("prod/api"), &snapshot.node_infos());

    // Equal charge rates: the first listed node wins.
    assert_eq!(result.feasible, vec!["a"]);
    assert!(result.diagnosis["b"].is_rejected());
}

#[test]
fn empty_cluster_reports_no_feasible_nodes() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot_path = write_file(&dir, "cluster.toml", "");

    let snapshot = Arc::new(ClusterSnapshot::from_file(&snapshot_path).unwrap());
    let config = SchedulerConfig::default();
    let fw = Framework::new(
        config.profile(DEFAULT_PROFILE).unwrap(),
        &in_tree_registry(),
        snapshot.clone(),
    )
    .unwrap();

    let result = fw.find_nodes_that_fit(&Pod::parse("web"), &snapshot.node_infos());
    assert!(result.feasible.is_empty());
    assert!(result.diagnosis.is_empty());
}

#[test]
fn node_missing_from_snapshot_gets_error_status() {
    // The host lists a node the handle knows nothing about.
    let snapshot = Arc::new(ClusterSnapshot::default());
    let config = SchedulerConfig::default();
    let fw = Framework::new(
        config.profile(DEFAULT_PROFILE).unwrap(),
        &in_tree_registry(),
        snapshot,
    )
    .unwrap();

    let nodes = vec![NodeInfo::new(Node {
        name: "ghost".to_string(),
    })];
    let result = fw.find_nodes_that_fit(&Pod::parse("web"), &nodes);

    let status = &result.diagnosis["ghost"];
    assert_eq!(status.code, Code::Error);
    assert_eq!(status.message(), "no candidate nodes");
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(SchedulerConfig::from_file(&dir.path().join("missing.toml")).is_err());
}
