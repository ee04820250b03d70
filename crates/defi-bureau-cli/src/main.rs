use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "defi-bureau", version, about = "Defi Bureau stand-up challenge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count one stand-up for a participant (gated by work hours)
    Count {
        /// Participant name (brice or cecile)
        participant: String,
    },
    /// Print the current board state as JSON
    Status,
    /// Reset all scores to zero (asks for confirmation)
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Work-hours gate inspection
    Gate {
        #[command(subcommand)]
        action: commands::gate::GateAction,
    },
    /// Watch the gate, printing changes once per minute
    Watch {
        /// Seconds between gate evaluations
        #[arg(long, default_value = "60")]
        interval_secs: u64,
    },
    /// Stand-up statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Count { participant } => commands::board::count(&participant),
        Commands::Status => commands::board::status(),
        Commands::Reset { yes } => commands::board::reset(yes),
        Commands::Gate { action } => commands::gate::run(action),
        Commands::Watch { interval_secs } => commands::board::watch(interval_secs),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
