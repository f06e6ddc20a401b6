//! # Diagnostics
//!
//! Fire-and-forget message channel for conversion diagnostics. Subscribers
//! receive one human-readable line per failure, removal or validation error;
//! with no subscribers the line is dropped, never buffered. Every line is
//! also mirrored to the `log` facade at debug level.

use std::fmt;

type Subscriber = Box<dyn Fn(&str)>;

/// Multi-subscriber diagnostic sink.
#[derive(Default)]
pub struct MessageSink {
    subscribers: Vec<Subscriber>,
}

impl MessageSink {
    /// Creates a sink with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber receiving every posted line.
    pub fn subscribe(&mut self, subscriber: impl Fn(&str) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Returns true when at least one subscriber is registered.
    pub fn has_subscribers(&self) -> bool {
        !self.subscribers.is_empty()
    }

    /// Posts one diagnostic line to all subscribers.
    pub fn post(&self, message: &str) {
        log::debug!("{message}");
        for subscriber in &self.subscribers {
            subscriber(message);
        }
    }
}

impl fmt::Debug for MessageSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
