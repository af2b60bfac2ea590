//! Turns what the user typed into a [`Task`]
//!
//! The [`TaskStore`](crate::TaskStore) trusts the tasks it is given. Input coming from text fields and pickers should go through a [`TaskForm`] first,
//! so that an empty title or an unknown status never reaches the store.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};

use crate::Task;
use crate::task::{TaskId, TaskPriority, TaskStatus, UnknownVariant};


/// Why a [`TaskForm`] has been rejected
#[derive(Clone, Debug, PartialEq)]
pub enum FormError {
    EmptyTitle,
    InvalidField(UnknownVariant),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            FormError::EmptyTitle => write!(f, "A task must have a title"),
            FormError::InvalidField(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::InvalidField(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnknownVariant> for FormError {
    fn from(err: UnknownVariant) -> Self {
        FormError::InvalidField(err)
    }
}



/// The raw content of the task editor
#[derive(Clone, Debug)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    /// Either a label (`待辦`) or an ASCII name (`todo`)
    pub status: String,
    /// Either a label (`高`) or an ASCII name (`high`)
    pub priority: String,
    pub due_date: DateTime<Utc>,
    pub notification_enabled: bool,
}

impl TaskForm {
    /// An empty form, with the same defaults as [`Task::new`]
    pub fn new(due_date: DateTime<Utc>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::default().label().to_string(),
            priority: TaskPriority::default().label().to_string(),
            due_date,
            notification_enabled: false,
        }
    }

    /// A form pre-filled with an existing task, e.g. to edit it
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_string(),
            description: task.description().unwrap_or_default().to_string(),
            status: task.status().label().to_string(),
            priority: task.priority().label().to_string(),
            due_date: *task.due_date(),
            notification_enabled: task.notification_enabled(),
        }
    }

    /// Build a brand new task (with a random ID) out of this form
    pub fn into_task(self) -> Result<Task, FormError> {
        self.build(TaskId::random())
    }

    /// Build a task that replaces `original`, i.e. that keeps its ID
    pub fn into_task_replacing(self, original: &Task) -> Result<Task, FormError> {
        self.build(*original.id())
    }

    fn build(self, id: TaskId) -> Result<Task, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }
        let status: TaskStatus = self.status.parse()?;
        let priority: TaskPriority = self.priority.parse()?;

        let description = match self.description.trim() {
            "" => None,
            d => Some(d.to_string()),
        };

        Ok(Task::new_with_parameters(id, title.to_string(), description, self.due_date,
                                     status, priority, self.notification_enabled))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let now = Utc::now();
        let mut form = TaskForm::new(now);
        form.title = String::from("  回覆郵件 ");

        let task = form.into_task().unwrap();
        let expected = Task::new(String::from("回覆郵件"), now);
        assert_eq!(task.title(), expected.title());
        assert_eq!(task.description(), None);
        assert_eq!(task.status(), expected.status());
        assert_eq!(task.priority(), expected.priority());
        assert!(!task.notification_enabled());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let mut form = TaskForm::new(Utc::now());
        assert_eq!(form.clone().into_task().unwrap_err(), FormError::EmptyTitle);
        form.title = String::from("   ");
        assert_eq!(form.into_task().unwrap_err(), FormError::EmptyTitle);
    }

    #[test]
    fn test_unknown_variants_are_rejected() {
        let mut form = TaskForm::new(Utc::now());
        form.title = String::from("a");
        form.status = String::from("blocked");
        match form.clone().into_task() {
            Err(FormError::InvalidField(err)) => assert_eq!(err.field(), "status"),
            other => panic!("Unexpected result {:?}", other),
        }

        form.status = String::from("進行中");
        form.priority = String::from("urgent");
        match form.into_task() {
            Err(FormError::InvalidField(err)) => assert_eq!(err.field(), "priority"),
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_edit_keeps_the_id() {
        let original = Task::new(String::from("預約醫生"), Utc::now())
            .with_description(Some(String::from("年度檢查")));

        let mut form = TaskForm::from_task(&original);
        assert_eq!(form.description, "年度檢查");
        form.status = String::from("completed");
        form.priority = String::from("高");
        form.description = String::new();
        form.notification_enabled = true;

        let edited = form.into_task_replacing(&original).unwrap();
        assert_eq!(edited.id(), original.id());
        assert_eq!(edited.title(), "預約醫生");
        assert_eq!(edited.description(), None);
        assert_eq!(edited.status(), TaskStatus::Completed);
        assert_eq!(edited.priority(), TaskPriority::High);
        assert!(edited.notification_enabled());
    }
}
