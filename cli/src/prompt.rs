// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use calboard_core::{Confirm, Notify};
use cliclack::{confirm, note};

/// Blocking yes/no prompt on the terminal.
#[derive(Debug, Default)]
pub struct TermConfirm;

impl Confirm for TermConfirm {
    fn confirm(&self, message: &str) -> bool {
        // An aborted prompt (Ctrl-C, closed tty) counts as "no".
        confirm(message).interact().unwrap_or(false)
    }
}

/// Blocking notice on the terminal.
#[derive(Debug, Default)]
pub struct TermNotify;

impl Notify for TermNotify {
    fn notify(&self, message: &str) {
        if let Err(e) = note("Calendar", message) {
            tracing::warn!(%e, "failed to display notice");
            eprintln!("{message}");
        }
    }
}
