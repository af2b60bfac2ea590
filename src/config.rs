//! Support for library configuration options

use std::sync::{Arc, Mutex};
use std::time::Duration;
use once_cell::sync::Lazy;

/// The title of every reminder (its body is the title of the task).
/// Feel free to override it when initing this library.
pub static REMINDER_TITLE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("任務提醒".to_string())));

/// How long after being scheduled a reminder fires.
/// Feel free to override it when initing this library.
pub static REMINDER_DELAY_SECS: Lazy<Arc<Mutex<u64>>> = Lazy::new(|| Arc::new(Mutex::new(60)));

/// The current value of [`REMINDER_TITLE`]
pub fn reminder_title() -> String {
    match REMINDER_TITLE.lock() {
        Ok(title) => title.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// The current value of [`REMINDER_DELAY_SECS`]
pub fn reminder_delay() -> Duration {
    let secs = match REMINDER_DELAY_SECS.lock() {
        Ok(secs) => *secs,
        Err(poisoned) => *poisoned.into_inner(),
    };
    Duration::from_secs(secs)
}
