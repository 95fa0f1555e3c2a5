// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calboard_core::{Deletion, Event, EventId, Gesture, Planner, Submit};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use colored::Colorize;

use crate::formatter::{BoardFormatter, OutputFormat};
use crate::tui::{self, FormAction};

#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,
}

pub fn show(planner: &Planner, args: &ShowArgs) -> Result<(), Box<dyn Error>> {
    let formatter = BoardFormatter::new(args.output_format);
    println!("{}", formatter.format(planner.events()));
    Ok(())
}

/// The create flow: slot selection (or the bare create button) opens the
/// form; submit appends a new event.
pub fn new_event(
    planner: &mut Planner,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), Box<dyn Error>> {
    match (start, end) {
        (Some(start), end) => planner.handle(Gesture::SlotSelected {
            start: midnight(start),
            end: midnight(end.unwrap_or(start)),
        })?,
        (None, _) => planner.open_create(),
    }
    run_form(planner)
}

/// The edit flow: event selection opens the form with delete reachable.
pub fn edit_event(planner: &mut Planner, id: EventId) -> Result<(), Box<dyn Error>> {
    planner.handle(Gesture::EventSelected(id))?;
    run_form(planner)
}

/// Direct deletion, still going through selection and confirmation.
pub fn delete_event(planner: &mut Planner, id: EventId) -> Result<(), Box<dyn Error>> {
    planner.handle(Gesture::EventSelected(id))?;
    match planner.delete()? {
        Deletion::Deleted(event) => print_outcome("Deleted", &event),
        Deletion::Declined => println!("{}", "Kept".italic()),
    }
    Ok(())
}

pub fn move_event(
    planner: &mut Planner,
    id: EventId,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), Box<dyn Error>> {
    planner.handle(Gesture::EventDropped {
        id,
        start: midnight(start),
        end: midnight(end),
    })?;
    report_gesture(planner, id)
}

pub fn resize_event(
    planner: &mut Planner,
    id: EventId,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), Box<dyn Error>> {
    planner.handle(Gesture::EventResized {
        id,
        start: midnight(start),
        end: midnight(end),
    })?;
    report_gesture(planner, id)
}

pub fn clear_session(planner: Planner) -> Result<(), Box<dyn Error>> {
    planner.close_session()?;
    println!("Session cleared; the next run starts from the seed events.");
    Ok(())
}

/// Drives the modal form until it resolves: a rejected submit or a declined
/// delete reopens it, matching the modal staying open on screen.
fn run_form(planner: &mut Planner) -> Result<(), Box<dyn Error>> {
    loop {
        match tui::edit_form(planner)? {
            None => {
                planner.close();
                println!("{}", "Discarded".italic());
                return Ok(());
            }
            Some(FormAction::Submit) => match planner.submit()? {
                Submit::Rejected => continue,
                Submit::Created(event) => {
                    print_outcome("Created", &event);
                    return Ok(());
                }
                Submit::Updated(event) => {
                    print_outcome("Updated", &event);
                    return Ok(());
                }
            },
            Some(FormAction::Delete) => match planner.delete()? {
                Deletion::Deleted(event) => {
                    print_outcome("Deleted", &event);
                    return Ok(());
                }
                Deletion::Declined => continue,
            },
        }
    }
}

fn report_gesture(planner: &Planner, id: EventId) -> Result<(), Box<dyn Error>> {
    if let Some(event) = planner.events().iter().find(|e| e.id == id) {
        print_outcome("Rescheduled", event);
    }
    Ok(())
}

fn print_outcome(verb: &str, event: &Event) {
    println!(
        "{} #{}: {} ({} ~ {})",
        verb.green().bold(),
        event.id,
        event.title,
        event.start.format("%Y-%m-%d"),
        event.end.format("%Y-%m-%d"),
    );
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
