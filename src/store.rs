//! The in-memory list of tasks that is currently displayed
//!
//! A [`TaskStore`] is the only one that mutates its list. Every mutation ends with a call to the registered observer (see [`TaskStore::set_on_tasks_updated`]).
//! The observer carries no payload: once the mutating call has returned, the whole list has to be re-read with [`TaskStore::tasks`].

use chrono::{NaiveDate, TimeZone, Utc};

use crate::Task;
use crate::task::{TaskId, TaskPriority, TaskStatus};
use crate::traits::{NotificationCenter, TaskSource};
use crate::reminder::ReminderScheduler;

/// The observer that is called after each change of a [`TaskStore`]
pub type TasksUpdatedCallback = Box<dyn FnMut() + Send>;


/// A [`TaskSource`] that always returns the same three demonstration tasks, due on the requested day
#[derive(Clone, Debug, Default)]
pub struct SampleTasks;

impl TaskSource for SampleTasks {
    fn tasks_for(&mut self, date: NaiveDate) -> Vec<Task> {
        let due_date = match date.and_hms_opt(0, 0, 0) {
            Some(midnight) => Utc.from_utc_datetime(&midnight),
            None => Utc::now(),
        };

        vec![
            Task::new_with_parameters(TaskId::random(), String::from("完成專案報告"), Some(String::from("需要提交給主管")),
                                      due_date, TaskStatus::Todo, TaskPriority::High, true),
            Task::new_with_parameters(TaskId::random(), String::from("回覆郵件"), None,
                                      due_date, TaskStatus::InProgress, TaskPriority::Medium, false),
            Task::new_with_parameters(TaskId::random(), String::from("預約醫生"), Some(String::from("年度檢查")),
                                      due_date, TaskStatus::Todo, TaskPriority::Low, true),
        ]
    }
}



/// Holds the tasks of the currently loaded day
pub struct TaskStore<S, N>
where
    S: TaskSource,
    N: NotificationCenter,
{
    source: S,
    scheduler: ReminderScheduler<N>,

    loaded_date: Option<NaiveDate>,
    tasks: Vec<Task>,

    on_tasks_updated: Option<TasksUpdatedCallback>,
}

impl<N: NotificationCenter> TaskStore<SampleTasks, N> {
    /// Create an empty store, that will load the demonstration tasks
    pub fn new(scheduler: ReminderScheduler<N>) -> Self {
        Self::with_source(SampleTasks, scheduler)
    }
}

impl<S, N> TaskStore<S, N>
where
    S: TaskSource,
    N: NotificationCenter,
{
    /// Create an empty store, that will load its tasks from `source`
    pub fn with_source(source: S, scheduler: ReminderScheduler<N>) -> Self {
        Self {
            source,
            scheduler,
            loaded_date: None,
            tasks: Vec::new(),
            on_tasks_updated: None,
        }
    }

    /// Register the observer that is called after each change. This replaces the previous one, if any.
    ///
    /// The observer is called synchronously, from within the method that changed the list, while the store is still mutably borrowed.
    /// It thus cannot read the store itself (a store shared behind a `Mutex` is still locked at that time). \
    /// It should rather raise a flag or send a message, so that the list is re-read after the mutating call has returned.
    /// Dispatching to a UI thread (if needed) is up to the observer.
    pub fn set_on_tasks_updated<F>(&mut self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.on_tasks_updated = Some(Box::new(callback));
    }

    pub fn clear_on_tasks_updated(&mut self) {
        self.on_tasks_updated = None;
    }

    /// The current tasks, in display order
    pub fn tasks(&self) -> &[Task]          { &self.tasks }
    pub fn get(&self, index: usize) -> Option<&Task> { self.tasks.get(index) }
    pub fn len(&self) -> usize              { self.tasks.len() }
    pub fn is_empty(&self) -> bool          { self.tasks.is_empty() }
    /// The day of the last [`Self::load`], if any
    pub fn loaded_date(&self) -> Option<NaiveDate> { self.loaded_date }

    pub fn source(&self) -> &S { &self.source }
    pub fn scheduler(&self) -> &ReminderScheduler<N> { &self.scheduler }
    pub fn scheduler_mut(&mut self) -> &mut ReminderScheduler<N> { &mut self.scheduler }

    /// Replace the whole list by the tasks of `date`
    pub fn load(&mut self, date: NaiveDate) {
        self.tasks = self.source.tasks_for(date);
        self.loaded_date = Some(date);
        log::info!("Loaded {} tasks for {}", self.tasks.len(), date);
        self.tasks_updated();
    }

    /// Append a task at the end of the list, and schedule its reminder if it has one.
    ///
    /// Neither the uniqueness of its ID nor its title are checked.
    pub fn add(&mut self, task: Task) {
        log::debug!("Adding task {} ({})", task.id(), task.title());
        let wants_reminder = task.notification_enabled();
        self.tasks.push(task);
        self.tasks_updated();

        if wants_reminder {
            if let Some(task) = self.tasks.last() {
                self.scheduler.schedule_reminder(task);
            }
        }
    }

    /// Replace the task at `index`.
    ///
    /// Returns `false` (and changes nothing, nor calls the observer) in case `index` is out of bounds. \
    /// This never schedules a reminder, even if `task` has its notification enabled. See [`Self::schedule_reminder_at`].
    pub fn update(&mut self, task: Task, index: usize) -> bool {
        match self.tasks.get_mut(index) {
            None => {
                log::warn!("Ignoring the update of task {}: index {} is out of bounds ({} tasks)", task.id(), index, self.tasks.len());
                false
            },
            Some(slot) => {
                log::debug!("Updating task #{} with {} ({})", index, task.id(), task.title());
                *slot = task;
                self.tasks_updated();
                true
            },
        }
    }

    /// Schedule the reminder of the task at `index` (e.g. after its notification has been enabled by an update).
    ///
    /// Returns whether a reminder has been requested, i.e. whether there is such a task and it has its notification enabled. \
    /// The list is not changed, so the observer is not called.
    pub fn schedule_reminder_at(&mut self, index: usize) -> bool {
        match self.tasks.get(index) {
            Some(task) if task.notification_enabled() => {
                self.scheduler.schedule_reminder(task);
                true
            },
            _ => false,
        }
    }

    fn tasks_updated(&mut self) {
        if let Some(callback) = self.on_tasks_updated.as_mut() {
            callback();
        }
    }
}
