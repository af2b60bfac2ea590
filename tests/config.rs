//! Overriding the configuration is process-wide, so this lives in its own test binary

use std::time::Duration;

use chrono::Utc;

use task_list::config::{REMINDER_DELAY_SECS, REMINDER_TITLE};
use task_list::mock_notification_center::RecordingNotificationCenter;
use task_list::reminder::ReminderRequest;
use task_list::{ReminderScheduler, Task, TaskStore};


#[test]
fn test_overridden_config_is_used_by_next_reminders() {
    let _ = env_logger::builder().is_test(true).try_init();

    let task = Task::new(String::from("完成專案報告"), Utc::now()).with_notification(true);
    let before = ReminderRequest::for_task(&task);
    assert_eq!(before.title(), "任務提醒");
    assert_eq!(before.delay(), Duration::from_secs(60));

    *REMINDER_TITLE.lock().unwrap() = String::from("Task reminder");
    *REMINDER_DELAY_SECS.lock().unwrap() = 5;

    let after = ReminderRequest::for_task(&task);
    assert_eq!(after.title(), "Task reminder");
    assert_eq!(after.delay(), Duration::from_secs(5));
    assert_eq!(after.body(), "完成專案報告");

    // A store picks the new values up at scheduling time
    let mut store = TaskStore::new(ReminderScheduler::new(RecordingNotificationCenter::new()));
    store.add(task.clone());
    let requests = store.scheduler().center().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].title(), "Task reminder");
    assert_eq!(requests[0].delay(), Duration::from_secs(5));
}
