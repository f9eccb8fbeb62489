use clap::Parser;
use flowscope::outline::{format_bounds, format_graph};
use flowscope::prelude::*;
use std::time::Instant;
use tracing::Level;

/// Merge, simplify and measure nested workflow diagrams
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the root flow JSON file
    root_path: String,
    /// Optional path to the flow library JSON file used to resolve subflows
    library_path: Option<String>,

    /// Show subflow call-sites without inlining them
    #[arg(long)]
    no_expand: bool,

    /// Collapse plumbing nodes
    #[arg(short, long)]
    simplify: bool,

    /// Id of the currently executing node (always kept when simplifying)
    #[arg(long)]
    active: Option<String>,

    #[arg(long, default_value_t = MergeLimits::default().max_depth)]
    max_depth: usize,
    #[arg(long, default_value_t = MergeLimits::default().max_nodes)]
    max_nodes: usize,
    #[arg(long, default_value_t = MergeLimits::default().max_edges)]
    max_edges: usize,

    /// Print the resulting diagram as JSON instead of a text outline
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let total_start = Instant::now();

    // --- 1. Loading ---
    let root = FlowDefinition::from_file(&cli.root_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load root flow: {}", e)));
    let library = match &cli.library_path {
        Some(path) => FlowLibrary::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow library: {}", e))),
        None => FlowLibrary::new(),
    };

    // --- 2. Merge / simplify / measure ---
    let options = DiagramOptions {
        expand: !cli.no_expand,
        simplify: cli.simplify,
        limits: MergeLimits {
            max_depth: cli.max_depth,
            max_nodes: cli.max_nodes,
            max_edges: cli.max_edges,
        },
        ..DiagramOptions::default()
    };
    let build_start = Instant::now();
    let diagram = build_diagram(&root, &library, &options, cli.active.as_deref());
    let build_duration = build_start.elapsed();

    // --- 3. Output ---
    if cli.json {
        let json = serde_json::to_string_pretty(&diagram)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize diagram: {}", e)));
        println!("{}", json);
        return;
    }

    let title = if root.name.is_empty() {
        root.id.as_str()
    } else {
        root.name.as_str()
    };
    println!("{}", format_graph(&diagram.graph, title));
    println!("{}", format_bounds(&diagram.bounds));

    println!("\n--- Summary ---");
    println!("Library Flows:        {}", library.len());
    println!("Root Nodes:           {}", root.nodes.len());
    println!("Diagram Nodes:        {}", diagram.graph.nodes.len());
    println!("Diagram Edges:        {}", diagram.graph.edges.len());
    println!("Build Time:           {:?}", build_duration);
    println!("Total Execution:      {:?}", total_start.elapsed());
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
