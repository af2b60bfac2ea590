//! Some utility functions

use crate::Task;

/// The secondary line that is displayed under a task title
pub fn task_summary(task: &Task) -> String {
    format!("優先級: {} | 狀態: {}", task.priority(), task.status())
}

/// A debug utility that pretty-prints a task list
pub fn print_task_list(tasks: &[Task]) {
    for task in tasks {
        print_task(task);
    }
}

pub fn print_task(task: &Task) {
    let completion = if task.status().is_completed() { "✓" } else { " " };
    let reminder = if task.notification_enabled() { "!" } else { " " };
    println!("    {}{} {}\t{}\t{}", completion, reminder, task.title(), task_summary(task), task.id());
}
