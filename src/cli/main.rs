#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use csv::Writer;
use edmonds_karp::{check, compute_max_flow, total_flow, Flow, FlowGraph, RawEdge};
use log::LevelFilter;
use serde::Serialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Compute the maximum flow between two nodes of a capacitated directed graph.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// CSV file of edges with a `start,end,capacity` header
    input: PathBuf,

    /// Identifier of the source node
    #[arg(short, long)]
    source: String,

    /// Identifier of the sink node
    #[arg(short = 't', long)]
    sink: String,

    /// Write the flow on every edge to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct FlowRecord<'a> {
    start: &'a str,
    end: &'a str,
    capacity: i64,
    flow: i64,
}

// Read the edges of a CSV source, in row order
fn read_graph_csv<R: io::Read>(rdr: R) -> Result<FlowGraph<String, i64>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_reader(rdr);
    let mut graph = FlowGraph::new();
    for row in rdr.deserialize() {
        let RawEdge {
            start,
            end,
            capacity,
        }: RawEdge<String, i64> = row?;
        graph.add_edge(start, end, capacity)?;
    }
    Ok(graph)
}

// Write the flow on every edge, in insertion order
fn write_flow_csv<W: io::Write>(
    graph: &FlowGraph<String, i64>,
    flow: &Flow<i64>,
    wtr: W,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_writer(wtr);
    for (e, (_, used)) in graph.edges().iter().zip(flow.iter()) {
        wtr.serialize(FlowRecord {
            start: e.start(),
            end: e.end(),
            capacity: e.capacity(),
            flow: used,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let graph = read_graph_csv(File::open(&cli.input)?)?;
    log::info!(
        "read {} edges between {} nodes from {}",
        graph.edge_count(),
        graph.node_count(),
        cli.input.display()
    );
    let flow = compute_max_flow(&graph, &cli.source, &cli.sink)?;
    check(&graph, &flow, &cli.source, &cli.sink)?;

    println!("{}", total_flow(&flow, &graph, &cli.source)?);

    if let Some(output) = cli.output {
        write_flow_csv(&graph, &flow, File::create(&output)?)?;
        log::info!("wrote edge flows to {}", output.display());
    }

    Ok(())
}
