//! Local reminders for tasks
//!
//! A [`ReminderScheduler`] turns a [`Task`] into a one-shot [`ReminderRequest`] and hands it over to a [`NotificationCenter`].
//! This crate ships two notification centers: [`LogNotificationCenter`] and [`TimerNotificationCenter`]. \
//! Hosts that have an actual notification subsystem (a desktop notification daemon, a mobile OS...) will implement their own.

use std::error::Error;
use std::time::Duration;

use crate::Task;
use crate::traits::NotificationCenter;


/// A request for a reminder, as it is submitted to a [`NotificationCenter`]
#[derive(Clone, Debug, PartialEq)]
pub struct ReminderRequest {
    identifier: String,
    title: String,
    body: String,
    delay: Duration,
    repeats: bool,
}

impl ReminderRequest {
    /// Create a one-shot reminder
    pub fn new(identifier: String, title: String, body: String, delay: Duration) -> Self {
        Self { identifier, title, body, delay, repeats: false }
    }

    /// Create the reminder of a task, using the current [`config`](crate::config) values
    pub fn for_task(task: &Task) -> Self {
        Self::new(
            task.id().to_string(),
            crate::config::reminder_title(),
            task.title().to_string(),
            crate::config::reminder_delay(),
        )
    }

    /// The key of this reminder. This is the ID of the task it has been created for
    pub fn identifier(&self) -> &str { &self.identifier }
    pub fn title(&self) -> &str      { &self.title      }
    pub fn body(&self) -> &str       { &self.body       }
    /// How long after its submission this reminder should fire
    pub fn delay(&self) -> Duration  { self.delay       }
    pub fn repeats(&self) -> bool    { self.repeats     }
}



/// Schedules reminders for tasks.
///
/// This is fire-and-forget: submission failures are logged, but never reported to the caller.
#[derive(Debug)]
pub struct ReminderScheduler<N: NotificationCenter> {
    center: N,
}

impl<N: NotificationCenter> ReminderScheduler<N> {
    pub fn new(center: N) -> Self {
        Self { center }
    }

    /// Returns the notification center requests are submitted to
    pub fn center(&self) -> &N { &self.center }
    /// Returns the notification center requests are submitted to
    pub fn center_mut(&mut self) -> &mut N { &mut self.center }

    /// Request a reminder for `task`
    pub fn schedule_reminder(&mut self, task: &Task) {
        let request = ReminderRequest::for_task(task);
        let identifier = request.identifier().to_string();
        let delay = request.delay();

        match self.center.submit(request) {
            Ok(()) => log::info!("Scheduled a reminder for task {} in {:?}", identifier, delay),
            Err(err) => log::warn!("Unable to schedule a reminder for task {}: {}", identifier, err),
        }
    }
}



/// A notification center that only logs the requests it receives
#[derive(Clone, Debug, Default)]
pub struct LogNotificationCenter;

impl NotificationCenter for LogNotificationCenter {
    fn submit(&mut self, request: ReminderRequest) -> Result<(), Box<dyn Error>> {
        log::info!("Reminder {} requested in {:?}: [{}] {}", request.identifier(), request.delay(), request.title(), request.body());
        Ok(())
    }
}



/// See [`timer_notification_center`]
pub type ReminderSender = tokio::sync::mpsc::UnboundedSender<ReminderRequest>;
/// See [`timer_notification_center`]
pub type ReminderReceiver = tokio::sync::mpsc::UnboundedReceiver<ReminderRequest>;

/// Create an in-process notification center.
///
/// Every submitted request is delivered to the returned receiver once its delay has elapsed.
pub fn timer_notification_center() -> (TimerNotificationCenter, ReminderReceiver) {
    let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
    (TimerNotificationCenter { sender }, receiver)
}

/// A notification center that relies on tokio timers.
///
/// Submitting a request requires a running tokio runtime.
#[derive(Clone, Debug)]
pub struct TimerNotificationCenter {
    sender: ReminderSender,
}

impl NotificationCenter for TimerNotificationCenter {
    fn submit(&mut self, request: ReminderRequest) -> Result<(), Box<dyn Error>> {
        let runtime = tokio::runtime::Handle::try_current()?;
        if self.sender.is_closed() {
            return Err("The reminder receiver has been dropped".into());
        }

        let sender = self.sender.clone();
        runtime.spawn(async move {
            tokio::time::sleep(request.delay()).await;
            log::debug!("Reminder {} is due", request.identifier());
            if sender.send(request).is_err() {
                log::debug!("Nobody is listening for reminders anymore");
            }
        });
        Ok(())
    }
}
