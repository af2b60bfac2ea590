use std::error::Error;

use chrono::NaiveDate;

use crate::Task;
use crate::reminder::ReminderRequest;

/// Where the tasks of a given day come from
pub trait TaskSource {
    /// Returns the tasks that should be displayed for `date`.
    /// Tasks are returned in display order.
    fn tasks_for(&mut self, date: NaiveDate) -> Vec<Task>;
}

/// The notification subsystem of the host platform
pub trait NotificationCenter {
    /// Ask the host to display a reminder later on.
    ///
    /// What happens when a request re-uses the identifier of a pending one is up to the implementor.
    fn submit(&mut self, request: ReminderRequest) -> Result<(), Box<dyn Error>>;
}
