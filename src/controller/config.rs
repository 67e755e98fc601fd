//! Controller configuration

use std::time::Duration;

use crate::limiter::MIN_PUBLISH_INTERVAL;
use crate::transport::ChannelId;

/// Channel the lamp listens on
pub const DEFAULT_CHANNEL: &str = "phue";

/// Interval between animation frames
pub const ANIM_TICK: Duration = Duration::from_millis(100);

/// Streaming controller options
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Pub/sub channel to publish on and subscribe to
    pub channel: ChannelId,

    /// Minimum interval between continuous-source publishes
    pub min_publish_interval: Duration,

    /// Interval between animation frames
    pub anim_tick: Duration,

    /// Capacity of the input event queue
    pub input_queue: usize,

    /// Capacity of the UI command queue
    pub ui_queue: usize,

    /// Capacity of the diagnostic queue
    pub diag_queue: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            channel: ChannelId::from(DEFAULT_CHANNEL),
            min_publish_interval: MIN_PUBLISH_INTERVAL,
            anim_tick: ANIM_TICK,
            input_queue: 64,
            ui_queue: 64,
            diag_queue: 64,
        }
    }
}

impl ControllerConfig {
    /// Create a config for a specific channel
    pub fn with_channel(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
            ..Default::default()
        }
    }

    /// Set the channel
    pub fn channel(mut self, channel: impl Into<ChannelId>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Set the minimum inter-publish interval
    pub fn min_publish_interval(mut self, interval: Duration) -> Self {
        self.min_publish_interval = interval;
        self
    }

    /// Set the animation tick interval
    pub fn anim_tick(mut self, tick: Duration) -> Self {
        self.anim_tick = tick;
        self
    }
}
