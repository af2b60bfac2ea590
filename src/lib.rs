//! This crate provides the state of a to-do list screen.
//!
//! The list itself lives in a [`TaskStore`], that tells a registered observer whenever it changes, so that a UI can re-render it. \
//! Tasks that have their notification enabled get a one-shot local reminder, through the [`reminder`] module. \
//! How reminders are actually displayed is up to a [`NotificationCenter`](traits::NotificationCenter) provided by the host.
//!
//! User input should be validated by the [`form`] module before it is handed over to the store.

pub mod traits;

mod task;
pub use task::{Task, TaskId, TaskPriority, TaskStatus, UnknownVariant};
pub mod store;
pub use store::TaskStore;
pub mod reminder;
pub use reminder::ReminderScheduler;
pub mod form;

pub mod mock_notification_center;
pub mod config;
pub mod utils;
