//! Task management commands for CLI.

use capable_core::{Config, Quadrant, Task, ViewMode};
use chrono::Utc;
use clap::Subcommand;

use super::{open_store, report_events, resolve_day};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task (newest tasks show first)
    Add {
        /// Task text
        text: String,
        /// Quadrant: do, schedule, delegate or eliminate
        #[arg(long, default_value = "do")]
        quadrant: String,
        /// Day bucket (YYYY-MM-DD, default: today)
        #[arg(long)]
        day: Option<String>,
    },
    /// List a day's tasks
    List {
        /// Day bucket (YYYY-MM-DD, default: today)
        #[arg(long)]
        day: Option<String>,
        /// Sort linearly by quadrant priority (focus view)
        #[arg(long)]
        focus: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit a task's text (empty text deletes the task)
    Edit {
        /// Task ID
        id: String,
        /// New text
        text: String,
    },
    /// Toggle a task's completion
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Move a task to another quadrant
    Move {
        /// Task ID
        id: String,
        /// Target quadrant
        quadrant: String,
    },
    /// Move a task between positions in a day's bucket
    Reorder {
        /// Source index (0-based)
        from: usize,
        /// Destination index (0-based)
        to: usize,
        /// Day bucket (YYYY-MM-DD, default: today)
        #[arg(long)]
        day: Option<String>,
    },
    /// Remove all completed tasks from a day
    Clear {
        /// Day bucket (YYYY-MM-DD, default: today)
        #[arg(long)]
        day: Option<String>,
        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        TaskAction::Add { text, quadrant, day } => {
            let quadrant: Quadrant = quadrant.parse()?;
            let day = resolve_day(&store, day)?;
            match store.add_task(day, &text, quadrant) {
                Some(task) => println!("Added [{}] {} ({})", task.id, task.text, task.quadrant),
                None => println!("Nothing to add: task text is empty."),
            }
            report_events(&mut store);
        }
        TaskAction::List { day, focus, json } => {
            let day = resolve_day(&store, day)?;
            let focus = focus || store.view_mode() == ViewMode::Focus;
            if json {
                let tasks: Vec<&Task> = if focus {
                    store.focus_order(day)
                } else {
                    store.tasks_for_day(day).iter().collect()
                };
                print_tasks(&tasks, true)?;
            } else if focus {
                print_tasks(&store.focus_order(day), false)?;
            } else {
                for quadrant in Quadrant::ALL {
                    let tasks = store.tasks_by_quadrant(day, quadrant);
                    if !tasks.is_empty() {
                        println!("{} -- {}", quadrant, quadrant.title());
                        print_tasks(&tasks, false)?;
                    }
                }
            }
            if store.rollover_available(day) {
                println!("Hint: yesterday has unfinished tasks; run `capable rollover apply`.");
            }
        }
        TaskAction::Edit { id, text } => {
            if store.find(&id).is_none() {
                println!("No task with id {id}.");
                return Ok(());
            }
            store.update_text(&id, &text);
            match store.find(&id) {
                Some(task) => println!("Updated [{}] {}", task.id, task.text),
                None => println!("Task removed."),
            }
            report_events(&mut store);
        }
        TaskAction::Toggle { id } => {
            store.toggle(&id);
            match store.find(&id) {
                Some(task) if task.completed => println!("Done: {}", task.text),
                Some(task) => println!("Reopened: {}", task.text),
                None => println!("No task with id {id}."),
            }
            report_events(&mut store);
        }
        TaskAction::Delete { id } => {
            store.delete_task(&id);
            println!("Deleted {id}.");
            report_events(&mut store);
        }
        TaskAction::Move { id, quadrant } => {
            let quadrant: Quadrant = quadrant.parse()?;
            store.reclassify(&id, quadrant);
            match store.find(&id) {
                Some(task) => println!("Moved [{}] to {}", task.id, task.quadrant),
                None => println!("No task with id {id}."),
            }
            report_events(&mut store);
        }
        TaskAction::Reorder { from, to, day } => {
            let day = resolve_day(&store, day)?;
            store.reorder(day, from, to);
            println!("Order for {day}:");
            print_tasks(&store.tasks_for_day(day).iter().collect::<Vec<_>>(), false)?;
            report_events(&mut store);
        }
        TaskAction::Clear { day, yes } => {
            let day = resolve_day(&store, day)?;
            let completed = store.day_summary(day).completed;
            if completed == 0 {
                println!("Nothing to clear on {day}.");
                return Ok(());
            }
            let config = Config::load()?;
            if completed > config.clear_confirm_threshold && !yes {
                println!(
                    "This would remove {completed} completed task(s); re-run with --yes to confirm."
                );
                return Ok(());
            }
            store.clear_completed(day);
            report_events(&mut store);
        }
    }

    Ok(())
}

fn print_tasks(tasks: &[&Task], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(tasks)?);
        return Ok(());
    }
    let now = Utc::now();
    for task in tasks {
        let mark = if task.completed { "x" } else { " " };
        let thermal = match task.thermal(now) {
            Some(capable_core::Thermal::Hot) => " (hot)",
            Some(capable_core::Thermal::Cold) => " (cold)",
            None => "",
        };
        println!("  [{mark}] {}  {}{thermal}", task.id, task.text);
    }
    Ok(())
}
