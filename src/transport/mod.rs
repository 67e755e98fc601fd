//! Pub/sub transport seam
//!
//! The controller talks to the message bus through the [`Transport`] trait:
//! fire-and-forget publishes on a named channel plus a subscription that
//! feeds channel lifecycle events into an `mpsc` sink. Nothing in here knows
//! about colors; payloads are opaque [`Bytes`].
//!
//! Transport implementations never surface failures to the caller. They log
//! them and report them as [`TransportEvent::Error`] to registered sinks, so
//! a flaky network can never poison controller state.

pub mod config;
pub mod memory;

pub use config::TransportConfig;
pub use memory::MemoryBus;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;

/// Opaque identifier of a pub/sub topic
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    /// Create a channel identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The channel name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Channel lifecycle events delivered to subscription sinks
#[derive(Debug, Clone)]
pub enum TransportEvent {
    /// Subscription established
    Connect { channel: ChannelId },

    /// Subscription torn down
    Disconnect { channel: ChannelId },

    /// Subscription re-established after an interruption
    Reconnect { channel: ChannelId },

    /// A payload arrived on the channel
    Message { channel: ChannelId, payload: Bytes },

    /// A transport-level failure was observed
    Error { channel: ChannelId, reason: String },
}

/// Sink half of a subscription
pub type TransportSink = mpsc::Sender<TransportEvent>;

/// A managed pub/sub message bus
///
/// Contract:
/// - `publish` is fire-and-forget: no delivery, ordering, or deduplication
///   guarantees, and no error escapes to the caller.
/// - `subscribe` is idempotent per `(channel, sink)` pair.
/// - The client identifier is fixed at construction, before any subscribe.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Deliver `payload` to subscribers of `channel`, best effort
    async fn publish(&self, channel: &ChannelId, payload: Bytes);

    /// Register `sink` for lifecycle events on `channel`
    async fn subscribe(&self, channel: &ChannelId, sink: TransportSink);

    /// Drop all sinks registered on `channel`
    async fn unsubscribe(&self, channel: &ChannelId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_display() {
        let channel = ChannelId::from("phue");
        assert_eq!(channel.to_string(), "phue");
        assert_eq!(channel.as_str(), "phue");
    }

    #[test]
    fn test_channel_id_equality() {
        assert_eq!(ChannelId::from("phue"), ChannelId::new("phue"));
        assert_ne!(ChannelId::from("phue"), ChannelId::from("other"));
    }
}
