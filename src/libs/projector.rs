//! Pure projection from store state to a render description.
//!
//! The projector never touches storage and never suspends. Renderers redraw
//! everything from a [`TaskView`] after each change; there is no incremental
//! patching.

use super::task::{Filter, Task, TaskId};
use std::collections::HashSet;
use std::fmt;

/// One visible row.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskItem {
    pub task: Task,
    /// Whether an edit session is open for this task.
    pub editing: bool,
}

/// Completion summary over the whole list, independent of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent; 0 when there are no tasks.
    pub percent: u8,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let percent = if total == 0 {
            0
        } else {
            // Integer half-up rounding of completed * 100 / total.
            ((completed * 200 + total) / (total * 2)) as u8
        };
        Self { completed, total, percent }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} 완료", self.completed, self.total)
    }
}

/// Everything a renderer needs to draw the list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskView {
    pub filter: Filter,
    pub visible: Vec<TaskItem>,
    /// True when the filtered list has nothing to show.
    pub is_empty: bool,
    pub progress: Progress,
}

/// Projects `tasks` through `filter`, keeping stored order.
pub fn project(tasks: &[Task], filter: Filter, editing: &HashSet<TaskId>) -> TaskView {
    let visible: Vec<TaskItem> = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .map(|task| TaskItem {
            task: task.clone(),
            editing: editing.contains(&task.id),
        })
        .collect();

    TaskView {
        filter,
        is_empty: visible.is_empty(),
        visible,
        progress: Progress::of(tasks),
    }
}
