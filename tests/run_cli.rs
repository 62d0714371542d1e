mod common;
use crate::common::init_tracing;

use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};

use rowdag::cli::CliArgs;
use rowdag::config::ConfigFile;
use rowdag::types::{RepairStrategy, RowFormat, UnreachablePolicy};
use rowdag::{load_config, run, Settings};
use rowdag_test_utils::builders::ConfigFileBuilder;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn args(graph: PathBuf) -> CliArgs {
    CliArgs {
        graph,
        root: None,
        config: None,
        output: None,
        strategy: None,
        row_format: None,
        deny_unreachable: false,
        log_level: None,
        dry_run: false,
    }
}

#[test]
fn demo_graph_is_leveled_to_output_file() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("leveled.json");

    let mut a = args(demo("lead_time.json"));
    a.config = Some(demo("Rowdag.toml"));
    a.output = Some(out.clone());

    run(a).unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let nodes = value["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 6);

    let row = |name: &str| {
        nodes
            .iter()
            .find(|n| n["name"] == json!(name))
            .map(|n| n["row"].clone())
            .unwrap()
    };

    // design is seeded at row2 directly below lead_time and then lifted
    // above build.
    assert_eq!(row("lead_time"), json!("row1"));
    assert_eq!(row("review"), json!("row2"));
    assert_eq!(row("build"), json!("row3"));
    assert_eq!(row("design"), json!("row4"));
    assert_eq!(row("ideation"), json!("row5"));
    assert_eq!(row("ci_cache"), Value::Null);

    assert_eq!(nodes[0]["unit"], json!("hours"));
    assert_eq!(value["edges"].as_array().unwrap().len(), 5);
    assert_eq!(
        value["edges"][0],
        json!({ "source": "design", "target": "lead_time" })
    );
    assert_eq!(value["unreachable"], json!(["ci_cache"]));
}

#[test]
fn cli_flags_override_config() {
    let cfg = ConfigFileBuilder::new()
        .root("from_config")
        .strategy(RepairStrategy::Worklist)
        .row_format(RowFormat::Label)
        .build();

    let mut a = args(demo("lead_time.json"));
    a.root = Some("from_cli".to_string());
    a.strategy = Some(RepairStrategy::Rescan);
    a.row_format = Some(RowFormat::Integer);
    a.deny_unreachable = true;

    let settings = Settings::resolve(&cfg, &a).unwrap();

    assert_eq!(settings.root, "from_cli");
    assert_eq!(settings.options.strategy, RepairStrategy::Rescan);
    assert_eq!(settings.options.unreachable, UnreachablePolicy::Deny);
    assert_eq!(settings.row_format, RowFormat::Integer);
}

#[test]
fn root_is_required_from_somewhere() {
    let result = Settings::resolve(&ConfigFile::default(), &args(demo("lead_time.json")));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("--root"));
}

#[test]
fn deny_unreachable_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();

    let mut a = args(demo("lead_time.json"));
    a.root = Some("lead_time".to_string());
    a.deny_unreachable = true;
    a.output = Some(dir.path().join("never.json"));

    let err = run(a).unwrap_err();

    assert!(err.to_string().contains("ci_cache"));
    assert!(!dir.path().join("never.json").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");

    let mut a = args(demo("lead_time.json"));
    a.root = Some("lead_time".to_string());
    a.output = Some(out.clone());
    a.dry_run = true;

    run(a).unwrap();

    assert!(!out.exists());
}

#[test]
fn broken_default_config_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let default_path = dir.path().join("Rowdag.toml");
    fs::write(&default_path, "[level]\ncorrection_budget = 0\n").unwrap();

    let err = load_config(None, &default_path).unwrap_err();

    assert!(err.to_string().contains("Rowdag.toml"), "{err}");
    assert!(format!("{err:#}").contains("correction_budget"), "{err:#}");
}

#[test]
fn missing_default_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let cfg = load_config(None, &dir.path().join("Rowdag.toml")).unwrap();

    assert_eq!(cfg.level.root, None);
}
