use super::messages::Message;
use super::projector::TaskView;
use super::prompt::Renderer;
use crate::{msg_info, msg_print};
use prettytable::{format, row, Table};

/// Terminal renderer for task projections.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    dark_mode: bool,
}

impl TableRenderer {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    /// Builds the task table for `view`.
    pub fn table(&self, view: &TaskView) -> Table {
        let mut table = Table::new();
        if self.dark_mode {
            table.set_format(*format::consts::FORMAT_BOX_CHARS);
        } else {
            table.set_format(*format::consts::FORMAT_DEFAULT);
        }

        table.set_titles(row!["ID", "DONE", "CATEGORY", "TITLE", "CREATED"]);
        for item in &view.visible {
            let task = &item.task;
            let done = if task.completed { "[x]" } else { "[ ]" };
            let category = format!("{} ({})", task.category, task.category.label());
            let title = if item.editing { format!("{} ✎", task.title) } else { task.title.clone() };
            let created = task.created_at.format("%Y-%m-%d %H:%M").to_string();
            table.add_row(row![task.id, done, category, title, created]);
        }
        table
    }
}

impl Renderer for TableRenderer {
    fn render(&self, view: &TaskView) {
        msg_print!(Message::TasksHeader(view.filter.to_string()), true);
        if view.is_empty {
            msg_info!(Message::NoTasks);
        } else {
            self.table(view).printstd();
        }
        msg_print!(format!("{} ({}%)", view.progress, view.progress.percent));
    }
}
