mod options;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use note_graph_config::{Config, DEFAULT_CONFIG, DEFAULT_PALETTES};
use note_graph_engine::{build_graph, io, run_graphviz, write_dot_file};
use std::path::{Path, PathBuf};

/// Generates a Graphviz graph of the tags and note links in a notes directory
#[derive(Parser, Debug)]
#[command(name = "note-graph", version, about, long_about = None)]
struct Cli {
    /// Configuration file to use. Use --dump-config to get a sample
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Notes directory, overriding graph.notes_path
    #[arg(long, value_name = "DIR")]
    notes: Option<PathBuf>,

    /// Print the default configuration file and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the default palette file and exit
    #[arg(long)]
    dump_palette: bool,

    /// Mangle the tags and note names preserving their look
    #[arg(long)]
    anonymise: bool,

    /// Show only tag links
    #[arg(long, conflicts_with = "only_notes")]
    only_tags: bool,

    /// Show only note links
    #[arg(long)]
    only_notes: bool,

    /// Set logging to debug level
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if cli.dump_palette {
        print!("{DEFAULT_PALETTES}");
        return Ok(());
    }
    if cli.dump_config {
        print!("{DEFAULT_CONFIG}");
        return Ok(());
    }

    let mut config = load_config(cli.config.as_deref())?;
    apply_flags(&mut config, &cli);
    log::debug!("{config:?}");

    generate(&config)
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let config = Config::load_from_path(path)?
            .ok_or_else(|| anyhow!("Configuration file not found: {}", path.display()))?;
        log::info!("Using configuration from {}", path.display());
        return Ok(config);
    }

    let config_path = Config::config_path();
    match Config::load()? {
        Some(config) => {
            log::info!("Using configuration from {}", config_path.display());
            Ok(config)
        }
        None => {
            log::debug!(
                "No config file at {}, using built-in defaults",
                config_path.display()
            );
            let mut config = Config::default();
            config.expand_paths();
            Ok(config)
        }
    }
}

fn apply_flags(config: &mut Config, cli: &Cli) {
    if let Some(notes) = &cli.notes {
        config.graph.notes_path = notes.clone();
    }
    if cli.anonymise {
        config.graph.anonymise = true;
    }
    if cli.only_tags {
        config.graph.show_note_edges = false;
    }
    if cli.only_notes {
        config.graph.show_tag_edges = false;
    }
}

fn generate(config: &Config) -> Result<()> {
    let graph_config = &config.graph;
    let style = options::dot_style(config).context("Invalid colour configuration")?;
    let filter = options::graph_filter(graph_config);

    let notes = io::load_notes(&graph_config.notes_path).with_context(|| {
        format!(
            "Failed to load notes from {}",
            graph_config.notes_path.display()
        )
    })?;

    let graph = build_graph(&notes, &filter);
    write_dot_file(&graph, &style, &graph_config.destination)?;

    if let Some(output) = run_graphviz(
        &graph_config.run_graphviz,
        &graph_config.output_format,
        &graph_config.destination,
    )? {
        log::info!("Run \"open {}\" to open the generated file", output.display());
    }
    Ok(())
}
