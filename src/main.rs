use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod error;
mod graph;
mod persist;
mod render;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("taskdag=debug")
    } else {
        EnvFilter::new("taskdag=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Add(args) => cli::add::execute(args),
        Commands::Update(args) => cli::update::execute(args),
        Commands::Delete(args) => cli::delete::execute(args),
        Commands::Start(args) => cli::start::execute(args),
        Commands::Complete(args) => cli::complete::execute(args),
        Commands::Validate => cli::validate::execute(),
        Commands::Show(args) => cli::show::execute(args),
        Commands::Available => cli::available::execute(),
        Commands::After(args) => cli::after::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
