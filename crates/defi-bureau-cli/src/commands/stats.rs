use clap::Subcommand;
use defi_bureau_core::Database;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Stand-ups counted today
    Today,
    /// All-time stand-up totals
    All,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let stats = match action {
        StatsAction::Today => db.stats_today()?,
        StatsAction::All => db.stats_all()?,
    };
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
