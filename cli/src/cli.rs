// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use calboard_core::{EventId, EventStore, JsonFileMirror, Planner};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::Config;
use crate::prompt::{TermConfirm, TermNotify};

#[derive(Debug, Parser)]
#[command(name = "calboard")]
#[command(about = "A drag-and-drop calendar event board", version)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the event board
    Show(commands::ShowArgs),

    /// Create an event: pick an empty slot (or none) and fill in the form
    New {
        /// Start date of the selected slot, YYYY-MM-DD
        start: Option<NaiveDate>,

        /// End date of the selected slot, YYYY-MM-DD
        end: Option<NaiveDate>,
    },

    /// Edit an event through the form; delete is reachable from there
    Edit {
        /// Id of the event to edit
        id: EventId,
    },

    /// Delete an event after confirmation
    Delete {
        /// Id of the event to delete
        id: EventId,
    },

    /// Drag an event to a new date range
    Move {
        /// Id of the event to move
        id: EventId,

        /// New start date, YYYY-MM-DD
        start: NaiveDate,

        /// New end date, YYYY-MM-DD
        end: NaiveDate,
    },

    /// Resize an event to a new date range
    Resize {
        /// Id of the event to resize
        id: EventId,

        /// New start date, YYYY-MM-DD
        start: NaiveDate,

        /// New end date, YYYY-MM-DD
        end: NaiveDate,
    },

    /// End the session; the next run starts from the seed events again
    Clear,
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let config = Config::parse(self.config)?;
        let session = config.session_file()?;
        tracing::debug!(path = %session.display(), "using session file");

        let store = EventStore::hydrate(Box::new(JsonFileMirror::new(session)));
        let mut planner = Planner::new(store, Box::new(TermConfirm), Box::new(TermNotify));

        match self.command {
            Commands::Show(args) => commands::show(&planner, &args),
            Commands::New { start, end } => commands::new_event(&mut planner, start, end),
            Commands::Edit { id } => commands::edit_event(&mut planner, id),
            Commands::Delete { id } => commands::delete_event(&mut planner, id),
            Commands::Move { id, start, end } => {
                commands::move_event(&mut planner, id, start, end)
            }
            Commands::Resize { id, start, end } => {
                commands::resize_event(&mut planner, id, start, end)
            }
            Commands::Clear => commands::clear_session(planner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_move() {
        let cli = Cli::parse_from(["calboard", "move", "1", "2022-10-28", "2022-10-31"]);
        match cli.command {
            Commands::Move { id, start, end } => {
                assert_eq!(id, EventId(1));
                assert_eq!(start, NaiveDate::from_ymd_opt(2022, 10, 28).unwrap());
                assert_eq!(end, NaiveDate::from_ymd_opt(2022, 10, 31).unwrap());
            }
            _ => panic!("expected move command"),
        }
    }

    #[test]
    fn test_parse_new_without_slot() {
        let cli = Cli::parse_from(["calboard", "new"]);
        assert!(matches!(
            cli.command,
            Commands::New {
                start: None,
                end: None
            }
        ));
    }
}
