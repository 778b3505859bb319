// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! Event bus for controller notifications

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

use super::ActivityLogEntry;

/// Notifications emitted by the controller, in the order its state changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerEvent {
    /// An entry was appended to the activity log
    LogChanged(ActivityLogEntry),
    /// The alarm fired
    Alarm { reason: String },
}

pub type EventReceiver = mpsc::UnboundedReceiver<ControllerEvent>;

/// Fan-out to every live subscriber.
///
/// Each subscriber has its own unbounded queue, so a slow reader never
/// loses events and publishing never blocks.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<mpsc::UnboundedSender<ControllerEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> EventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        debug!(subscribers = self.subscriber_count(), "Event subscriber added");
        rx
    }

    pub fn publish_log(&mut self, entry: &ActivityLogEntry) {
        self.publish(ControllerEvent::LogChanged(entry.clone()));
    }

    pub fn publish_alarm(&mut self, reason: &str) {
        self.publish(ControllerEvent::Alarm {
            reason: reason.to_string(),
        });
    }

    fn publish(&mut self, event: ControllerEvent) {
        // Dropped receivers are pruned here.
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
