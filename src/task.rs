//! To-do tasks

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};


/// The identifier of a task.
///
/// It is picked by whoever creates the task, never changes afterwards, and is never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: Uuid,
}

impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }
}

impl From<Uuid> for TaskId {
    fn from(content: Uuid) -> Self {
        Self { content }
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let u = Uuid::parse_str(s)?;
        Ok(Self::from(u))
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}



/// Returned when a string matches no variant of [`TaskStatus`] or [`TaskPriority`]
#[derive(Clone, Debug, PartialEq)]
pub struct UnknownVariant {
    field: &'static str,
    value: String,
}

impl UnknownVariant {
    fn new(field: &'static str, value: &str) -> Self {
        Self { field, value: value.to_string() }
    }

    /// The name of the field that could not be parsed (`"status"` or `"priority"`)
    pub fn field(&self) -> &str { self.field }
    /// The rejected input
    pub fn value(&self) -> &str { &self.value }
}

impl Display for UnknownVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:?} is not a valid task {}", self.value, self.field)
    }
}

impl std::error::Error for UnknownVariant {}



/// The progress of a task.
///
/// There are no transition rules: any status may follow any status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// The label that is displayed to the user
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "待辦",
            TaskStatus::InProgress => "進行中",
            TaskStatus::Completed => "完成",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.label())
    }
}

/// Accepts both the displayed labels and the ASCII names
impl FromStr for TaskStatus {
    type Err = UnknownVariant;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "待辦" | "todo" => Ok(TaskStatus::Todo),
            "進行中" | "in-progress" => Ok(TaskStatus::InProgress),
            "完成" | "completed" => Ok(TaskStatus::Completed),
            other => Err(UnknownVariant::new("status", other)),
        }
    }
}



/// How urgent a task is. This is orthogonal to its [`TaskStatus`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// The label that is displayed to the user
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "低",
            TaskPriority::Medium => "中",
            TaskPriority::High => "高",
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.label())
    }
}

/// Accepts both the displayed labels and the ASCII names
impl FromStr for TaskPriority {
    type Err = UnknownVariant;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "低" | "low" => Ok(TaskPriority::Low),
            "中" | "medium" => Ok(TaskPriority::Medium),
            "高" | "high" => Ok(TaskPriority::High),
            other => Err(UnknownVariant::new("priority", other)),
        }
    }
}



/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, also used to key the reminder of this task
    id: TaskId,

    /// The display name of the task.
    /// This is expected to be non-empty, but this is up to the caller to check it (see [`crate::form`])
    title: String,
    description: Option<String>,
    /// Whether this is a day or a precise time is up to the caller
    due_date: DateTime<Utc>,
    status: TaskStatus,
    priority: TaskPriority,

    /// Whether a reminder should be scheduled when this task is added to a [`TaskStore`](crate::TaskStore)
    notification_enabled: bool,
}


impl Task {
    /// Create a brand new Task, the way the "add" dialog does.
    /// This will pick a new (random) task ID. The task is a medium-priority to-do, without description nor reminder.
    pub fn new(title: String, due_date: DateTime<Utc>) -> Self {
        Self::new_with_parameters(TaskId::random(), title, None, due_date,
                                  TaskStatus::default(), TaskPriority::default(), false)
    }

    /// Create a new Task instance with every field given
    pub fn new_with_parameters(id: TaskId, title: String, description: Option<String>,
                               due_date: DateTime<Utc>, status: TaskStatus, priority: TaskPriority,
                               notification_enabled: bool,
                            ) -> Self
    {
        Self {
            id,
            title,
            description,
            due_date,
            status,
            priority,
            notification_enabled,
        }
    }

    pub fn id(&self) -> &TaskId                 { &self.id          }
    pub fn title(&self) -> &str                 { &self.title       }
    pub fn description(&self) -> Option<&str>   { self.description.as_deref() }
    pub fn due_date(&self) -> &DateTime<Utc>    { &self.due_date    }
    pub fn status(&self) -> TaskStatus          { self.status       }
    pub fn priority(&self) -> TaskPriority      { self.priority     }
    pub fn notification_enabled(&self) -> bool  { self.notification_enabled }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_notification(mut self, enabled: bool) -> Self {
        self.notification_enabled = enabled;
        self
    }
}
