//! View-mode and mute preference commands.

use capable_core::ViewMode;
use clap::Subcommand;

use super::open_store;

#[derive(Subcommand)]
pub enum ViewAction {
    /// Show the persisted view mode and mute state
    Get,
    /// Set the view mode: matrix or focus
    Set {
        /// View mode
        mode: String,
    },
    /// Mute sound effects
    Mute,
    /// Unmute sound effects
    Unmute,
}

pub fn run(action: ViewAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        ViewAction::Get => {
            println!("view: {}", store.view_mode());
            println!("muted: {}", store.muted());
        }
        ViewAction::Set { mode } => {
            let mode: ViewMode = mode.parse()?;
            store.set_view_mode(mode);
            println!("View set to {mode}.");
        }
        ViewAction::Mute => {
            store.set_muted(true);
            println!("Muted.");
        }
        ViewAction::Unmute => {
            store.set_muted(false);
            println!("Unmuted.");
        }
    }

    Ok(())
}
