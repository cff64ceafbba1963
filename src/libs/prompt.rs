//! Capabilities the task store needs from the user interface.
//!
//! The store never talks to a terminal or a browser directly. It asks a
//! [`UserPrompt`] to confirm or to show a notice, and hands finished
//! projections to a [`Renderer`].

use super::projector::TaskView;
use crate::msg_warning;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Blocking yes/no and notice capability.
pub trait UserPrompt {
    /// Asks the user to confirm `message`.
    fn confirm(&self, message: &str) -> bool;

    /// Shows `message` to the user.
    fn notify(&self, message: &str);
}

/// Draws a full projection of the task list.
pub trait Renderer {
    fn render(&self, view: &TaskView);
}

/// Terminal implementation backed by `dialoguer`.
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompt {
    /// Answer every confirmation with "yes" without asking.
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl UserPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        // A closed or non-interactive terminal counts as "no".
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        msg_warning!(message);
    }
}
