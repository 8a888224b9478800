use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use discbag::config::ReportConfig;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Bag statistics for disc golf inventories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON report config; explicit flags still win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute bag statistics for one or more inventory exports
    Stats(cmd::stats::StatsArgs),
    /// Show which of the recognized categories a bag covers
    Coverage(cmd::coverage::CoverageArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let cli_config = match &cli.command {
        Commands::Stats(args) => &args.config,
        Commands::Coverage(args) => &args.config,
    };

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading report config from: {}", path);
            let mut file_config = ReportConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            if let Some((_, sub_matches)) = matches.subcommand() {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    if let Err(e) = config.validate() {
        error!("{}", e);
        process::exit(1);
    }

    let ok = match &cli.command {
        Commands::Stats(args) => cmd::stats::run(args, &config),
        Commands::Coverage(args) => cmd::coverage::run(args, &config),
    };

    if !ok {
        process::exit(1);
    }
}
