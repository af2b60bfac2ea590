//! This module provides a notification center that records requests instead of displaying them, and that can be told to fail on some tests

use std::error::Error;

use crate::reminder::ReminderRequest;
use crate::traits::NotificationCenter;

/// Records every accepted request.
///
/// So that submissions fail _n_ times after _m_ initial successes, set `(m, n)` as its behaviour
#[derive(Default, Clone, Debug)]
pub struct RecordingNotificationCenter {
    requests: Vec<ReminderRequest>,
    n_failures: u32,
    submit_behaviour: (u32, u32),
}

impl RecordingNotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first `n_fails` submissions will fail
    pub fn failing(n_fails: u32) -> Self {
        Self::with_behaviour((0, n_fails))
    }

    /// Submissions will fail `n` times after `m` initial successes
    pub fn with_behaviour(behaviour: (u32, u32)) -> Self {
        Self { submit_behaviour: behaviour, ..Self::default() }
    }

    /// The requests that have been accepted, in submission order
    pub fn requests(&self) -> &[ReminderRequest] {
        &self.requests
    }

    /// The accepted requests with the given identifier
    pub fn requests_for(&self, identifier: &str) -> Vec<&ReminderRequest> {
        self.requests.iter()
            .filter(|r| r.identifier() == identifier)
            .collect()
    }

    /// How many submissions have been rejected so far
    pub fn n_failures(&self) -> u32 {
        self.n_failures
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

impl NotificationCenter for RecordingNotificationCenter {
    fn submit(&mut self, request: ReminderRequest) -> Result<(), Box<dyn Error>> {
        if let Err(err) = decrement(&mut self.submit_behaviour) {
            self.n_failures += 1;
            return Err(err);
        }
        self.requests.push(request);
        Ok(())
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32)) -> Result<(), Box<dyn Error>> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 -= 1;
        log::debug!("Mock notification center: allowing a submission ({:?})", value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 -= 1;
        log::debug!("Mock notification center: failing a submission ({:?})", value);
        Err(format!("Mocked behaviour requires this submission to fail this time. ({:?})", value).into())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    fn request(id: &str) -> ReminderRequest {
        ReminderRequest::new(id.to_string(), "任務提醒".to_string(), "body".to_string(), Duration::from_secs(60))
    }

    #[test]
    fn test_recording() {
        let mut ok = RecordingNotificationCenter::new();
        assert!(ok.submit(request("a")).is_ok());
        assert!(ok.submit(request("b")).is_ok());
        assert!(ok.submit(request("a")).is_ok());

        assert_eq!(ok.requests().len(), 3);
        assert_eq!(ok.requests_for("a").len(), 2);
        assert_eq!(ok.requests_for("c").len(), 0);

        ok.clear();
        assert!(ok.requests().is_empty());
    }

    #[test]
    fn test_custom_behaviour() {
        let mut custom = RecordingNotificationCenter::with_behaviour((1, 2));
        assert!(custom.submit(request("a")).is_ok());
        assert!(custom.submit(request("b")).is_err());
        assert!(custom.submit(request("c")).is_err());
        assert!(custom.submit(request("d")).is_ok());
        assert!(custom.submit(request("e")).is_ok());

        assert_eq!(custom.n_failures(), 2);
        let ids: Vec<&str> = custom.requests().iter().map(|r| r.identifier()).collect();
        assert_eq!(ids, vec!["a", "d", "e"]);
    }
}
