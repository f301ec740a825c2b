//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Build the `mbt` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("mbt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Model-based test case generator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter, e.g. info or mbt_sequence=debug (RUST_LOG wins)"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .value_parser(["text", "json"])
                .help("Log output format"),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a test suite from a state graph")
                .arg(graph_arg())
                .arg(strategy_arg().required(true))
                .arg(coverage_arg())
                .arg(
                    Arg::new("testsuite")
                        .long("testsuite")
                        .short('t')
                        .required(true)
                        .help("Test suite name"),
                )
                .arg(
                    Arg::new("libraries")
                        .long("libraries")
                        .short('l')
                        .num_args(1..)
                        .action(ArgAction::Append)
                        .help("Keyword libraries imported by the suite"),
                )
                .arg(
                    Arg::new("report")
                        .long("report")
                        .short('r')
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory the suite report is written to"),
                )
                .args(limit_args()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print graph statistics and generated sequences")
                .arg(graph_arg())
                .arg(strategy_arg().default_value("full"))
                .arg(coverage_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                )
                .args(limit_args()),
        )
}

fn graph_arg() -> Arg {
    Arg::new("graph")
        .long("graph")
        .short('g')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Path to the graph file (.json, .yaml, .graphml)")
}

fn strategy_arg() -> Arg {
    Arg::new("strategy")
        .long("strategy")
        .short('s')
        .help("Path generation strategy: full or random")
}

fn coverage_arg() -> Arg {
    Arg::new("coverage")
        .long("coverage")
        .short('c')
        .value_parser(value_parser!(u32))
        .help("Node coverage percentage for the random strategy (default 100)")
}

fn limit_args() -> [Arg; 2] {
    [
        Arg::new("max-paths")
            .long("max-paths")
            .value_parser(value_parser!(usize))
            .help("Abort when enumeration explores more paths"),
        Arg::new("start-node")
            .long("start-node")
            .help("Start node id, overriding the graph document"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn generate_accepts_short_flags() {
        let matches = build_cli()
            .try_get_matches_from([
                "mbt", "generate", "-g", "model.json", "-s", "random", "-c", "45", "-t", "Suite",
                "-l", "StatesLib", "ActionsLib", "-r", "out",
            ])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "generate");
        assert_eq!(args.get_one::<u32>("coverage"), Some(&45));
        let libs: Vec<&String> = args.get_many::<String>("libraries").unwrap().collect();
        assert_eq!(libs, vec!["StatesLib", "ActionsLib"]);
    }

    #[test]
    fn coverage_must_be_numeric() {
        let err = build_cli().try_get_matches_from([
            "mbt", "inspect", "-g", "model.json", "-c", "lots",
        ]);
        assert!(err.is_err());
    }
}
