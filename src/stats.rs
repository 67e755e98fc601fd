//! Controller statistics
//!
//! Cheap atomic counters shared between the controller loop, the animation
//! worker, and whoever holds the controller handle.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters for a streaming controller
#[derive(Debug, Default)]
pub struct ControllerStats {
    /// Payloads handed to the transport
    publishes: AtomicU64,

    /// Continuous-source frames dropped by the rate limiter
    throttled: AtomicU64,

    /// Frames generated by Animation Mode
    animation_frames: AtomicU64,

    /// Inbound payloads decoded cleanly
    messages_decoded: AtomicU64,

    /// Inbound payloads discarded as undecodable
    decode_errors: AtomicU64,

    /// Failures reported by the transport
    transport_errors: AtomicU64,
}

impl ControllerStats {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_publish(&self) {
        self.publishes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_throttled(&self) {
        self.throttled.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_animation_frame(&self) {
        self.animation_frames.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_message_decoded(&self) {
        self.messages_decoded.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_decode_error(&self) {
        self.decode_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_transport_error(&self) {
        self.transport_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a consistent-enough snapshot for display
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            publishes: self.publishes.load(Ordering::Relaxed),
            throttled: self.throttled.load(Ordering::Relaxed),
            animation_frames: self.animation_frames.load(Ordering::Relaxed),
            messages_decoded: self.messages_decoded.load(Ordering::Relaxed),
            decode_errors: self.decode_errors.load(Ordering::Relaxed),
            transport_errors: self.transport_errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub publishes: u64,
    pub throttled: u64,
    pub animation_frames: u64,
    pub messages_decoded: u64,
    pub decode_errors: u64,
    pub transport_errors: u64,
}

impl std::fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "publishes={} throttled={} anim_frames={} decoded={} decode_errors={} transport_errors={}",
            self.publishes,
            self.throttled,
            self.animation_frames,
            self.messages_decoded,
            self.decode_errors,
            self.transport_errors,
        )
    }
}
