use std::time::Duration;

use chrono::Utc;

use task_list::form::TaskForm;
use task_list::reminder::timer_notification_center;
use task_list::{ReminderScheduler, TaskStore};


#[tokio::main]
async fn main() {
    env_logger::init();

    // Shorten the reminders, so that this example does not last a whole minute
    if let Ok(mut delay) = task_list::config::REMINDER_DELAY_SECS.lock() {
        *delay = 2;
    }

    let (center, mut reminders) = timer_notification_center();
    let mut store = TaskStore::new(ReminderScheduler::new(center));
    store.set_on_tasks_updated(|| println!("(the list has changed)"));

    store.load(Utc::now().date_naive());
    println!("---- Loaded tasks -----");
    task_list::utils::print_task_list(store.tasks());

    let mut form = TaskForm::new(Utc::now());
    form.title = String::from("買牛奶");
    form.priority = String::from("high");
    form.notification_enabled = true;
    match form.into_task() {
        Ok(task) => store.add(task),
        Err(err) => log::error!("Invalid task: {}", err),
    }

    if let Some(first) = store.get(0) {
        let mut form = TaskForm::from_task(first);
        form.status = String::from("進行中");
        match form.into_task_replacing(first) {
            Ok(edited) => { store.update(edited, 0); },
            Err(err) => log::error!("Invalid edit: {}", err),
        }
    }

    println!("---- After edition -----");
    task_list::utils::print_task_list(store.tasks());

    println!("Waiting for the reminder...");
    match tokio::time::timeout(Duration::from_secs(5), reminders.recv()).await {
        Ok(Some(reminder)) => println!("🔔 {}: {}", reminder.title(), reminder.body()),
        _ => println!("No reminder has fired"),
    }
}
