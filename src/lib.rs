// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod level;
pub mod logging;
pub mod types;

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{default_config_path, load_and_validate, ConfigFile};
use crate::graph::{load_and_validate_graph, Graph};
use crate::level::{LevelOptions, Leveler};
use crate::types::{RowFormat, UnreachablePolicy};

pub use crate::errors::{Result as RowdagResult, RowdagError};
pub use crate::graph::{Edge, Node, RawGraph};
pub use crate::level::{level, LeveledGraph, Row};

/// Everything `run` needs after merging the config file with CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: String,
    pub options: LevelOptions,
    pub row_format: RowFormat,
    pub pretty: bool,
}

impl Settings {
    /// CLI flags win over the config file. The root must come from one of
    /// them.
    pub fn resolve(cfg: &ConfigFile, args: &CliArgs) -> Result<Self> {
        let root = args
            .root
            .clone()
            .or_else(|| cfg.level.root.clone())
            .context("no root node given; pass --root or set [level].root")?;

        let mut options = cfg.level_options();
        if let Some(strategy) = args.strategy {
            options.strategy = strategy;
        }
        if args.deny_unreachable {
            options.unreachable = UnreachablePolicy::Deny;
        }

        Ok(Self {
            root,
            options,
            row_format: args.row_format.unwrap_or(cfg.output.row_format),
            pretty: cfg.output.pretty,
        })
    }
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (explicit `--config`, else `Rowdag.toml` if present)
/// - graph loading + validation
/// - leveling
/// - writing the result to stdout or `--output`
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_config(args.config.as_deref(), &default_config_path())?;
    let settings = Settings::resolve(&cfg, &args)?;

    let graph = load_and_validate_graph(&args.graph)
        .with_context(|| format!("failed to load graph {}", args.graph.display()))?;

    if args.dry_run {
        print_dry_run(&graph, &settings);
        return Ok(());
    }

    let leveled = Leveler::new(settings.options).level(&graph, &settings.root)?;
    let value = leveled.to_value(settings.row_format);
    let mut rendered = if settings.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    rendered.push('\n');

    match args.output {
        Some(ref path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "leveled graph written");
        }
        None => {
            std::io::stdout().lock().write_all(rendered.as_bytes())?;
        }
    }

    Ok(())
}

/// Load `explicit` if given; otherwise `default_path` if it exists;
/// otherwise an all-defaults config.
pub fn load_config(explicit: Option<&Path>, default_path: &Path) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return load_and_validate(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    if default_path.is_file() {
        debug!(path = %default_path.display(), "using default config file");
        return load_and_validate(default_path)
            .with_context(|| format!("failed to load config {}", default_path.display()));
    }

    Ok(ConfigFile::default())
}

/// Simple dry-run output: print nodes, edges and the effective settings.
fn print_dry_run(graph: &Graph, settings: &Settings) {
    println!("rowdag dry-run");
    println!("  root = {}", settings.root);
    println!("  strategy = {:?}", settings.options.strategy);
    println!("  unreachable = {:?}", settings.options.unreachable);
    match settings.options.correction_budget {
        Some(budget) => println!("  correction_budget = {budget}"),
        None => println!(
            "  correction_budget = {} (nodes x edges)",
            crate::level::repair::default_budget(graph)
        ),
    }
    println!("  row_format = {:?}", settings.row_format);
    println!();

    println!("nodes ({}):", graph.node_count());
    for node in graph.nodes() {
        if node.attrs.is_empty() {
            println!("  - {}", node.name);
        } else {
            let keys: Vec<&str> = node.attrs.keys().map(|k| k.as_str()).collect();
            println!("  - {} {:?}", node.name, keys);
        }
    }

    println!("edges ({}):", graph.edge_count());
    for edge in graph.edges() {
        println!("  - {} -> {}", edge.source, edge.target);
    }

    if graph.node_index(&settings.root).is_none() {
        println!();
        println!("warning: root '{}' is not a node of this graph", settings.root);
    }

    debug!("dry-run complete (no leveling)");
}
