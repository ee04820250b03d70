use chrono::{Local, NaiveDateTime};
use clap::Subcommand;
use defi_bureau_core::{evaluate, Config};

#[derive(Subcommand)]
pub enum GateAction {
    /// Print the gate decision as JSON
    Check {
        /// Evaluate at this local time instead of now (e.g. 2025-01-01T10:00:00)
        #[arg(long)]
        at: Option<String>,
    },
}

pub fn run(action: GateAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GateAction::Check { at } => {
            let now = match at {
                Some(s) => s.parse::<NaiveDateTime>()?,
                None => Local::now().naive_local(),
            };
            let config = Config::load_or_default();
            let decision = evaluate(now, &config.hours);
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
    }
    Ok(())
}
