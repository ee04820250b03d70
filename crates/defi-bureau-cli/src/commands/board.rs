use std::io::Write;

use chrono::{Local, Utc};
use defi_bureau_core::{evaluate, Config, Event, GateMonitor, Participant, ScoreStore};

/// Count one stand-up for `name`, evaluating the gate at the current
/// local time. A blocked gate surfaces its advisory and exits non-zero.
pub fn count(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let participant: Participant = name.parse()?;
    let config = Config::load_or_default();
    let decision = evaluate(Local::now().naive_local(), &config.hours);

    let store = ScoreStore::open()?;
    let state = store.increment(participant, &decision)?;

    let event = Event::ScoreIncremented {
        participant,
        count: state.count(participant),
        at: Utc::now(),
    };
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}

/// Print the full board state: counts, leader, totals, and gate status.
pub fn status() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let decision = evaluate(Local::now().naive_local(), &config.hours);
    let store = ScoreStore::open()?;
    let state = store.load();

    let snapshot = Event::BoardSnapshot {
        brice: state.count(Participant::Brice),
        cecile: state.count(Participant::Cecile),
        leader: state.leader(),
        total: state.total(),
        difference: state.difference(),
        allowed: decision.allowed,
        reason: decision.reason,
        at: Utc::now(),
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Reset all scores, prompting for confirmation unless `assume_yes`.
pub fn reset(assume_yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let confirmed = assume_yes || confirm("Reset all scores to zero? [y/N] ")?;

    let store = ScoreStore::open()?;
    store.reset(confirmed);

    if confirmed {
        let event = Event::ScoresReset { at: Utc::now() };
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else {
        eprintln!("reset aborted");
    }
    Ok(())
}

/// Re-evaluate the gate on an interval, printing an event on every flip.
/// The loop owns the interval; ending the process ends the timer.
pub fn watch(interval_secs: u64) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut monitor = GateMonitor::new(config.hours, Local::now().naive_local());
    println!("{}", serde_json::to_string_pretty(monitor.decision())?);

    loop {
        std::thread::sleep(std::time::Duration::from_secs(interval_secs));
        if let Some(event) = monitor.tick(Local::now().naive_local()) {
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
}

fn confirm(prompt: &str) -> Result<bool, Box<dyn std::error::Error>> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
