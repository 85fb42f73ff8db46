use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;

use u_assign::bnb::{BnbConfig, TieBreak};
use u_assign::models::AssignmentProblem;
use u_assign::priority::UniformPriority;
use u_assign::records;
use u_assign::report::AssignmentReport;

#[derive(Parser)]
#[clap(
    author,
    version,
    about = "Assign cargoes to trucks minimizing total travel distance",
    long_about = None
)]
struct Cli {
    /// Truck file: truck,city,state,lat,lng
    #[arg(short, long, default_value = "trucks.csv")]
    trucks: PathBuf,

    /// Cargo file: product,origin city/state/lat/lng,destination city/state/lat/lng
    #[arg(short, long, default_value = "cargo.csv")]
    cargo: PathBuf,

    /// Seed for truck priorities (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rule for choosing between equal-cost assignments
    #[arg(long, value_enum, default_value_t = TieBreakArg::FirstFound)]
    tie_break: TieBreakArg,

    /// Split the search across threads (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum TieBreakArg {
    FirstFound,
    HighestPriority,
    LowestPriority,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::FirstFound => TieBreak::FirstFound,
            TieBreakArg::HighestPriority => TieBreak::HighestPriority,
            TieBreakArg::LowestPriority => TieBreak::LowestPriority,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut priorities = UniformPriority::new(seed);

    let carriers = records::load_carriers(&cli.trucks, &mut priorities)
        .with_context(|| format!("reading trucks from {}", cli.trucks.display()))?;
    let jobs = records::load_jobs(&cli.cargo)
        .with_context(|| format!("reading cargoes from {}", cli.cargo.display()))?;
    info!(trucks = carriers.len(), cargoes = jobs.len(), seed, "loaded problem");

    let problem = AssignmentProblem::with_entities(carriers, jobs);
    let config = BnbConfig::default()
        .with_tie_break(cli.tie_break.into())
        .with_parallel(cli.parallel);
    let assignment = problem.solve_with(&config).context("solving assignment")?;
    info!(
        total_km = assignment.total_distance(),
        nodes = assignment.stats().nodes,
        "solved"
    );

    let report = AssignmentReport::new(&problem, &assignment);
    match cli.format {
        Format::Text => print!("{report}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
