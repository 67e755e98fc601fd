//! In-process message bus
//!
//! A loopback [`Transport`] that fans published payloads out to every sink
//! subscribed on the channel. It honors the full transport contract —
//! lifecycle events, idempotent subscription, no failure ever escaping a
//! call — which makes it the bus of choice for tests and demos, and a
//! reference for network-backed adapters.

use std::collections::HashMap;

use bytes::Bytes;
use tokio::sync::RwLock;

use super::{ChannelId, Transport, TransportConfig, TransportEvent, TransportSink};

/// In-process pub/sub bus
pub struct MemoryBus {
    config: TransportConfig,
    channels: RwLock<HashMap<ChannelId, Vec<TransportSink>>>,
}

impl MemoryBus {
    /// Create a bus with the given credentials and client identity
    pub fn new(config: TransportConfig) -> Self {
        tracing::debug!(client_id = %config.client_id, "Memory bus created");
        Self {
            config,
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// The client identifier this bus was constructed with
    pub fn client_id(&self) -> &str {
        &self.config.client_id
    }

    /// Number of sinks currently subscribed on a channel
    pub async fn subscriber_count(&self, channel: &ChannelId) -> usize {
        self.channels
            .read()
            .await
            .get(channel)
            .map_or(0, Vec::len)
    }
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new(TransportConfig::default())
    }
}

#[async_trait::async_trait]
impl Transport for MemoryBus {
    async fn publish(&self, channel: &ChannelId, payload: Bytes) {
        let channels = self.channels.read().await;

        let Some(sinks) = channels.get(channel) else {
            tracing::trace!(channel = %channel, "Publish on channel without subscribers");
            return;
        };

        for sink in sinks {
            let event = TransportEvent::Message {
                channel: channel.clone(),
                payload: payload.clone(),
            };
            // Best effort: a slow subscriber loses frames, never blocks the bus
            if sink.try_send(event).is_err() {
                tracing::warn!(channel = %channel, "Dropping frame for slow subscriber");
            }
        }
    }

    async fn subscribe(&self, channel: &ChannelId, sink: TransportSink) {
        let mut channels = self.channels.write().await;
        let sinks = channels.entry(channel.clone()).or_default();

        if sinks.iter().any(|existing| existing.same_channel(&sink)) {
            tracing::debug!(channel = %channel, "Sink already subscribed");
            return;
        }

        let _ = sink.try_send(TransportEvent::Connect {
            channel: channel.clone(),
        });
        sinks.push(sink);

        tracing::info!(
            channel = %channel,
            client_id = %self.config.client_id,
            subscribers = sinks.len(),
            "Subscribed"
        );
    }

    async fn unsubscribe(&self, channel: &ChannelId) {
        let mut channels = self.channels.write().await;

        if let Some(sinks) = channels.remove(channel) {
            for sink in &sinks {
                let _ = sink.try_send(TransportEvent::Disconnect {
                    channel: channel.clone(),
                });
            }
            tracing::info!(
                channel = %channel,
                subscribers = sinks.len(),
                "Unsubscribed"
            );
        }
    }
}
