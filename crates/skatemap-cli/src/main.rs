use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skatemap_cli::commands::inspect::{handle_inspect, InspectArgs};
use skatemap_cli::commands::route::{handle_route, RouteArgs};
use skatemap_cli::{OutputFormat, Point};
use skatemap_lib::{Heuristic, NodeId, RoutingOptions, SnapStrategy, DEFAULT_AVG_SPEED_KMH};

#[derive(Parser, Debug)]
#[command(author, version, about = "Terrain-aware skating route planner")]
struct Cli {
    /// Raw network JSON file.
    #[arg(long, env = "SKATEMAP_NETWORK_PATH", global = true)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Search heuristic: geographic, admissible or none.
    #[arg(long, default_value_t = Heuristic::Geographic, global = true)]
    heuristic: Heuristic,

    /// Endpoint snapping strategy: linear or kd-tree.
    #[arg(long, default_value_t = SnapStrategy::Linear, global = true)]
    snap: SnapStrategy,

    /// Average skating speed in km/h used for time estimates.
    #[arg(long, default_value_t = DEFAULT_AVG_SPEED_KMH, global = true)]
    speed: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a skating route between two coordinates.
    Route {
        /// Start point as LAT,LNG.
        #[arg(long = "from", allow_hyphen_values = true)]
        from: Point,
        /// Destination as LAT,LNG.
        #[arg(long = "to", allow_hyphen_values = true)]
        to: Point,
    },
    /// Print graph totals and a sample of nodes and edges.
    Inspect {
        /// Number of nodes and edges to list.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Show one node and its neighbours.
        #[arg(long)]
        node: Option<NodeId>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = cli
        .network
        .context("no network file given; pass --network or set SKATEMAP_NETWORK_PATH")?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Route { from, to } => {
            let options = RoutingOptions {
                avg_speed_kmh: cli.speed,
                heuristic: cli.heuristic,
                snap: cli.snap,
            };
            handle_route(
                &network,
                options,
                &RouteArgs { from, to },
                cli.format,
                &mut stdout,
            )
        }
        Command::Inspect { limit, node } => handle_inspect(
            &network,
            &InspectArgs { limit, node },
            cli.format,
            &mut stdout,
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
