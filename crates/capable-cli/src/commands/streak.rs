//! Streak inspection commands.

use clap::Subcommand;

use super::open_store;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Show the current streak
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;

    match action {
        StreakAction::Show { json } => {
            let streak = store.streak();
            if json {
                println!("{}", serde_json::to_string_pretty(streak)?);
                return Ok(());
            }
            match &streak.last_completion_date {
                Some(_) if streak.completed_on(store.today()) => {
                    println!(
                        "{} day(s) -- completed something today (stage {}).",
                        streak.count,
                        streak.growth_stage()
                    );
                }
                Some(last) => {
                    println!(
                        "{} day(s), last completion on {last} (stage {}).",
                        streak.count,
                        streak.growth_stage()
                    );
                }
                None => println!("No completions yet."),
            }
        }
    }

    Ok(())
}
