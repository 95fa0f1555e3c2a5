// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use calboard_core::Event;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// The output format for the `show` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Renders the event list as an aligned table or as the session JSON.
#[derive(Debug)]
pub struct BoardFormatter {
    format: OutputFormat,
}

impl BoardFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> Display<'a> {
        Display {
            events,
            format: self.format,
        }
    }
}

pub struct Display<'a> {
    events: &'a [Event],
    format: OutputFormat,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table => write_table(f, self.events),
        }
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, events: &[Event]) -> fmt::Result {
    if events.is_empty() {
        return write!(f, "{}", "No events".italic());
    }

    let rows: Vec<[String; 4]> = events
        .iter()
        .map(|e| {
            [
                e.id.to_string(),
                e.title.clone(),
                e.start.format("%Y-%m-%d %H:%M").to_string(),
                e.end.format("%Y-%m-%d %H:%M").to_string(),
            ]
        })
        .collect();

    let header = ["Id", "Title", "Start", "End"];
    let widths = column_widths(&header, &rows);

    for (i, cell) in header.iter().enumerate() {
        let padded = pad(cell, widths[i]);
        write!(f, "{}", padded.bold())?;
        write!(f, "{}", if i + 1 < header.len() { "  " } else { "\n" })?;
    }

    for (n, row) in rows.iter().enumerate() {
        for (i, cell) in row.iter().enumerate() {
            // last column needs no trailing padding
            if i + 1 < row.len() {
                write!(f, "{}  ", pad(cell, widths[i]))?;
            } else {
                write!(f, "{cell}")?;
            }
        }
        if n + 1 < rows.len() {
            writeln!(f)?;
        }
    }
    Ok(())
}

fn column_widths(header: &[&str; 4], rows: &[[String; 4]]) -> [usize; 4] {
    let mut widths = header.map(UnicodeWidthStr::width);
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calboard_core::seed_events;

    #[test]
    fn test_table_alignment() {
        let formatter = BoardFormatter::new(OutputFormat::Table);
        let out = formatter.format(&seed_events()).to_string();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5); // header + four events
        assert!(out.contains("Test event 3"));
        assert!(out.contains("2022-11-20 00:00"));
    }

    #[test]
    fn test_json_output_is_the_event_list() {
        let events = seed_events();
        let formatter = BoardFormatter::new(OutputFormat::Json);
        let out = formatter.format(&events).to_string();

        let parsed: Vec<Event> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, events);
    }

    #[test]
    fn test_empty_board() {
        let formatter = BoardFormatter::new(OutputFormat::Table);
        let out = formatter.format(&[]).to_string();
        assert!(out.contains("No events"));
    }
}
