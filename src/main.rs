use clap::Parser;

use source_indexer::cli::{Cli, Commands};
use source_indexer::commands::{run_cache, run_index};
use source_indexer::logging::{self, Verbosity};

fn main() {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let exit_code = match &cli.command {
        Commands::Index(args) => run_index(args),
        Commands::Cache(args) => run_cache(args),
    };

    std::process::exit(exit_code);
}
