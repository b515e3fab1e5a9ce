use std::path::PathBuf;

/// Districting CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "districter", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Partition a tract adjacency graph into districts
    Partition(PartitionArgs),
}

#[derive(clap::Args, Debug)]
pub struct PartitionArgs {
    /// Input graph file: a JSON array of tracts with adjacency lists
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub graph: PathBuf,

    /// Population target per district
    #[arg(short, long)]
    pub target: u64,

    /// Tract id to seed the first district from (random if omitted)
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Output assignment file, defaults to "./districts.csv"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Reject dangling adjacency references before partitioning
    #[arg(long)]
    pub validate: bool,
}
