use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use herald::domain::Notification;
use herald::error::{NotifyError, Result};
use herald::notify::{Delivery, NotificationSink};

/// What the sink should do with incoming deliveries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkMode {
    Deliver,
    Skip,
    Fail,
}

/// Thread-safe notification collector for delivery assertions in tests.
#[derive(Clone)]
pub struct RecordingSink {
    mode: Arc<Mutex<SinkMode>>,
    delivered: Arc<Mutex<Vec<Notification>>>,
    calls: Arc<Mutex<usize>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            mode: Arc::new(Mutex::new(SinkMode::Deliver)),
            delivered: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn set_mode(&self, mode: SinkMode) {
        *self.mode.lock().expect("lock sink mode") = mode;
    }

    /// Notifications the sink accepted, in delivery order.
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered.lock().expect("lock delivered").clone()
    }

    /// Number of deliver calls, including skipped and failed ones.
    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("lock call count")
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn deliver(&self, notification: &Notification) -> Result<Delivery> {
        *self.calls.lock().expect("lock call count") += 1;
        match *self.mode.lock().expect("lock sink mode") {
            SinkMode::Deliver => {
                self.delivered
                    .lock()
                    .expect("lock delivered")
                    .push(notification.clone());
                Ok(Delivery::Sent)
            }
            SinkMode::Skip => Ok(Delivery::Skipped),
            SinkMode::Fail => Err(NotifyError::Rejected {
                status: 500,
                body: "scripted failure".to_string(),
            }
            .into()),
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
