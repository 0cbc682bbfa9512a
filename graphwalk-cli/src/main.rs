//! graphwalk CLI - depth-first graph queries from the command line.
//!
//! Graphs are described inline with repeated `--edge FROM:TO` and
//! `--node NAME` arguments; the same description is read as a word graph,
//! a flight network or an adjacency map depending on the command.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use graphwalk_core::{
    build_adjacency, can_reach, generate_dot, init_structured_logging, load_config,
    load_config_file, log_warn, longest_word, print_json, print_plain, print_self_loopers,
    print_short_words, self_loopers, short_words, unreachable, write_reach_json, Airport,
    FlightNetwork, GraphwalkConfig, VertexGraph, VertexId, WriteSink,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Depth-first queries over small directed graphs")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directed edge, repeatable
    #[arg(long = "edge", value_name = "FROM:TO", global = true)]
    edges: Vec<String>,

    /// Node without edges of its own, repeatable
    #[arg(long = "node", value_name = "NAME", global = true)]
    nodes: Vec<String>,

    /// Output results in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Read settings from this file instead of ./graphwalk.toml
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print reachable words shorter than a length bound
    ShortWords {
        /// Starting vertex label
        #[arg(long)]
        start: String,

        /// Exclusive length bound (defaults to the config threshold)
        #[arg(long)]
        max_len: Option<usize>,
    },

    /// Print the longest reachable word
    Longest {
        /// Starting vertex label
        #[arg(long)]
        start: String,
    },

    /// Print reachable vertices that have an edge to themselves
    SelfLoops {
        /// Starting vertex label
        #[arg(long)]
        start: String,
    },

    /// Check whether one airport can be reached from another
    CanReach {
        /// Departure airport code
        #[arg(long)]
        from: String,

        /// Destination airport code
        #[arg(long)]
        to: String,
    },

    /// List nodes that cannot be reached from a start node
    Unreachable {
        /// Starting node
        #[arg(long)]
        start: String,

        /// Emit Graphviz DOT instead of a list
        #[arg(long)]
        dot: bool,
    },
}

/// Parses a `FROM:TO` edge spec. Both sides are trimmed and must be non-empty.
fn parse_edge(spec: &str) -> Result<(String, String)> {
    let (from, to) = spec
        .split_once(':')
        .ok_or_else(|| anyhow!("Edge must look like FROM:TO, got '{}'", spec))?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(anyhow!("Edge endpoints must not be empty: '{}'", spec));
    }
    Ok((from.to_string(), to.to_string()))
}

fn parse_edges(specs: &[String]) -> Result<Vec<(String, String)>> {
    specs.iter().map(|s| parse_edge(s)).collect()
}

/// Builds a word graph where each distinct label is one vertex.
fn build_vertex_graph(
    edges: &[(String, String)],
    nodes: &[String],
) -> Result<(VertexGraph<String>, HashMap<String, VertexId>)> {
    let mut graph = VertexGraph::new();
    let mut labels: HashMap<String, VertexId> = HashMap::new();

    let mut intern = |graph: &mut VertexGraph<String>, label: &str| -> VertexId {
        *labels
            .entry(label.to_string())
            .or_insert_with(|| graph.add_vertex(label.to_string()))
    };

    for node in nodes {
        intern(&mut graph, node);
    }
    let mut pairs = Vec::with_capacity(edges.len());
    for (from, to) in edges {
        let a = intern(&mut graph, from);
        let b = intern(&mut graph, to);
        pairs.push((a, b));
    }
    for (a, b) in pairs {
        graph.add_edge(a, b).context("Failed to add edge")?;
    }

    Ok((graph, labels))
}

fn build_flight_network(edges: &[(String, String)], nodes: &[String]) -> FlightNetwork {
    let mut network = FlightNetwork::new();
    for node in nodes {
        network.add_airport(Airport::new(node.as_str()));
    }
    for (from, to) in edges {
        network.add_flight(&Airport::new(from.as_str()), &Airport::new(to.as_str()));
    }
    network
}

/// Loads settings. An explicit `--config` must be valid; a broken
/// `./graphwalk.toml` only produces a warning.
fn resolve_config(explicit: Option<&Path>, dir: &Path) -> Result<GraphwalkConfig> {
    if let Some(path) = explicit {
        return load_config_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }
    match load_config(dir) {
        Ok(cfg) => Ok(cfg.unwrap_or_default()),
        Err(e) if e.is_recoverable() => {
            log_warn(&format!("Ignoring config: {}", e));
            Ok(GraphwalkConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Runs one command and returns the process exit code.
fn run(cli: &Cli) -> Result<i32> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = resolve_config(cli.config.as_deref(), &cwd)?;
    let json = cli.json || config.wants_json();
    let edges = parse_edges(&cli.edges)?;

    match &cli.command {
        Command::ShortWords { start, max_len } => {
            let (graph, labels) = build_vertex_graph(&edges, &cli.nodes)?;
            let start = labels.get(start).copied();
            let max_len = max_len.unwrap_or_else(|| config.threshold_or_default());
            if json {
                print_json("short_words", &short_words(&graph, start, max_len))?;
            } else {
                print_short_words(&graph, start, max_len, &mut WriteSink::stdout())?;
            }
            Ok(0)
        }

        Command::Longest { start } => {
            let (graph, labels) = build_vertex_graph(&edges, &cli.nodes)?;
            let word = longest_word(&graph, labels.get(start).copied());
            if json {
                print_json("longest", word)?;
            } else {
                println!("{}", word);
            }
            Ok(0)
        }

        Command::SelfLoops { start } => {
            let (graph, labels) = build_vertex_graph(&edges, &cli.nodes)?;
            let start = labels.get(start).copied();
            if json {
                print_json("self_loops", &self_loopers(&graph, start))?;
            } else {
                print_self_loopers(&graph, start, &mut WriteSink::stdout())?;
            }
            Ok(0)
        }

        Command::CanReach { from, to } => {
            let network = build_flight_network(&edges, &cli.nodes);
            let (a, b) = (Airport::new(from.as_str()), Airport::new(to.as_str()));
            let reachable = can_reach(&network, Some(&a), Some(&b));
            if json {
                write_reach_json(&mut std::io::stdout().lock(), from, to, reachable)?;
            } else {
                let verdict = if reachable { "reachable" } else { "not reachable" };
                println!("{} -> {}: {}", from, to, verdict);
            }
            Ok(if reachable { 0 } else { 1 })
        }

        Command::Unreachable { start, dot } => {
            let graph = build_adjacency(edges.iter().cloned(), cli.nodes.iter().cloned());
            let dead = unreachable(Some(&graph), start);
            if *dot {
                print!("{}", generate_dot(&graph, &dead));
            } else {
                let mut items: Vec<String> = dead.iter().cloned().collect();
                items.sort();
                if json {
                    print_json("unreachable", &items)?;
                } else {
                    print_plain("Unreachable nodes", &items)?;
                }
            }
            Ok(if dead.is_empty() { 0 } else { 1 })
        }
    }
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] graphwalk internal error: {}", info);
        eprintln!("[PANIC] The process will exit with code 2.");
    }));

    // JSON logs to stderr, filtered by RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();
    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            2
        }
    };
    std::process::exit(code);
}
