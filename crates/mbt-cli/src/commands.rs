//! Subcommand handlers

use crate::logging::init_logging;
use crate::settings::{LogFormat, Settings};
use anyhow::{anyhow, Context};
use clap::ArgMatches;
use mbt_graph::FileDecoder;
use mbt_sequence::{
    covered_nodes, display_sequence, GenerationOutput, GenerationParams, GeneratorConfig,
    SequenceGenerationService,
};
use mbt_suite::{ReportWriter, SuiteBuilder};
use std::io::Write;
use std::path::PathBuf;

/// Execute parsed command line, writing user output to `out`
///
/// # Errors
/// Settings, decoding, generation, suite or IO failures.
pub fn run(matches: &ArgMatches, out: &mut impl Write) -> anyhow::Result<()> {
    let mut settings = match matches.get_one::<PathBuf>("config") {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(level) = matches.get_one::<String>("log-level") {
        settings.log.level.clone_from(level);
    }
    if let Some(format) = matches.get_one::<String>("log-format") {
        settings.log.format = if format == "json" {
            LogFormat::Json
        } else {
            LogFormat::Text
        };
    }
    init_logging(&settings.log);

    match matches.subcommand() {
        Some(("generate", args)) => generate(args, settings.generator, out),
        Some(("inspect", args)) => inspect(args, settings.generator, out),
        Some((other, _)) => Err(anyhow!("unknown command '{other}'")),
        None => Err(anyhow!("no command given")),
    }
}

fn generate(
    args: &ArgMatches,
    config: GeneratorConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let output = run_generation(args, config)?;
    let name = required::<String>(args, "testsuite")?;
    let libraries: Vec<String> = args
        .get_many::<String>("libraries")
        .map(|libs| libs.cloned().collect())
        .unwrap_or_default();

    let suite = SuiteBuilder::new()
        .create_suite(name, &output.graph, &output.sequences, &libraries)
        .context("failed to build test suite")?;
    let path = ReportWriter::new(required::<PathBuf>(args, "report")?)
        .write(&suite)
        .context("failed to write report")?;

    writeln!(out, "{} test cases written to {}", suite.len(), path.display())?;
    Ok(())
}

fn inspect(
    args: &ArgMatches,
    config: GeneratorConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let output = run_generation(args, config)?;
    let graph = &output.graph;
    let covered = covered_nodes(&output.sequences).len();

    if args.get_flag("json") {
        let report = serde_json::json!({
            "start": graph.start(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "cyclic_pairs": graph.cyclic_pairs(),
            "strategy": output.strategy,
            "covered_nodes": covered,
            "sequences": output.sequences,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "Start: {}", graph.start())?;
    writeln!(out, "Nodes: {}", graph.node_count())?;
    writeln!(out, "Edges: {}", graph.edge_count())?;
    for (a, b) in graph.cyclic_pairs() {
        if a < b {
            writeln!(out, "Loop: {a} <-> {b}")?;
        }
    }
    writeln!(
        out,
        "Strategy: {} ({} sequences, {}/{} nodes covered)",
        output.strategy,
        output.sequences.len(),
        covered,
        graph.node_count()
    )?;
    for sequence in &output.sequences {
        writeln!(out, "  {}", display_sequence(sequence))?;
    }
    Ok(())
}

fn run_generation(
    args: &ArgMatches,
    mut config: GeneratorConfig,
) -> anyhow::Result<GenerationOutput> {
    if let Some(limit) = args.get_one::<usize>("max-paths") {
        config.max_paths = Some(*limit);
    }
    if let Some(start) = args.get_one::<String>("start-node") {
        config.start_node = Some(start.as_str().into());
    }

    let graph = required::<PathBuf>(args, "graph")?;
    let strategy = required::<String>(args, "strategy")?;
    let params = GenerationParams {
        coverage: args.get_one::<u32>("coverage").copied(),
    };

    SequenceGenerationService::new(FileDecoder, config)
        .generate(graph, strategy, params)
        .with_context(|| format!("failed to generate sequences for {}", graph.display()))
}

fn required<'a, T: Clone + Send + Sync + 'static>(
    args: &'a ArgMatches,
    id: &str,
) -> anyhow::Result<&'a T> {
    args.get_one::<T>(id)
        .ok_or_else(|| anyhow!("missing required argument '--{id}'"))
}
