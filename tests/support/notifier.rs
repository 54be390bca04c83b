use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use edgescan::error::{Error, Result};
use edgescan::port::{Alert, Notifier};

/// Thread-safe alert collector for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<Alert>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.alerts.lock().expect("lock notifier alerts").len()
    }

    pub fn names(&self) -> Vec<String> {
        self.alerts
            .lock()
            .expect("lock notifier alerts")
            .iter()
            .map(|a| a.name.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, alert: &Alert) -> Result<()> {
        self.alerts
            .lock()
            .expect("lock notifier alerts")
            .push(alert.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Notifier whose every delivery fails.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _alert: &Alert) -> Result<()> {
        Err(Error::Notification("channel unavailable".into()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
