//! Day-rollover commands: offer and apply the yesterday-to-today
//! migration of unfinished tasks.

use clap::Subcommand;

use super::{open_store, report_events};

#[derive(Subcommand)]
pub enum RolloverAction {
    /// Show whether a rollover is currently offered
    Status,
    /// Migrate yesterday's unfinished tasks into today
    Apply,
}

pub fn run(action: RolloverAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;
    let today = store.today();

    match action {
        RolloverAction::Status => {
            let yesterday_open = store
                .tasks_for_day(today.yesterday())
                .iter()
                .filter(|t| !t.completed)
                .count();
            if store.rollover_available(today) {
                println!(
                    "Rollover available: {yesterday_open} unfinished task(s) from {}.",
                    today.yesterday()
                );
            } else {
                println!("No rollover offered for {today}.");
            }
        }
        RolloverAction::Apply => {
            let carried = store.rollover();
            if carried == 0 {
                println!("Nothing to carry over.");
            }
            report_events(&mut store);
        }
    }

    Ok(())
}
