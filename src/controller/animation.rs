//! Animation Mode worker
//!
//! A background task that sweeps the wave phase while the animation flag
//! stays set. Each tick it pushes non-user slider frames back into the
//! controller loop (so sliders and preview follow the animation) and offers
//! the frame's color to the transport through the shared rate limiter.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::color::wave::{self, FULL_SWEEP, PHASE_STEP};
use crate::color::{codec, Channel};
use crate::limiter::RateLimiter;
use crate::stats::ControllerStats;
use crate::transport::{ChannelId, Transport};

use super::events::InputEvent;
use super::state::AnimationState;

/// Everything a wave worker needs to run detached from the controller
pub(crate) struct WaveWorker<T> {
    pub animation: AnimationState,
    pub transport: Arc<T>,
    pub channel: ChannelId,
    pub limiter: Arc<RateLimiter>,
    pub epoch: Instant,
    pub frames: mpsc::Sender<InputEvent>,
    pub tick: Duration,
    pub stats: Arc<ControllerStats>,
}

/// Spawn the worker task
pub(crate) fn spawn<T: Transport>(worker: WaveWorker<T>) -> JoinHandle<()> {
    tokio::spawn(worker.run())
}

impl<T: Transport> WaveWorker<T> {
    async fn run(self) {
        tracing::debug!(channel = %self.channel, "Animation worker started");

        loop {
            for angle in (0..FULL_SWEEP).step_by(PHASE_STEP as usize) {
                // Cancellation is cooperative: the flag is checked once per
                // tick, so at most one frame follows a stop request
                if !self.animation.is_on() {
                    tracing::debug!(phase = angle, "Animation worker stopping");
                    return;
                }

                self.animation.set_phase(angle);
                let color = wave::wave_color(angle);
                self.stats.record_animation_frame();

                for channel in Channel::ALL {
                    let frame = InputEvent::SliderMoved {
                        channel,
                        value: color.get(channel),
                        by_user: false,
                    };
                    if self.frames.send(frame).await.is_err() {
                        tracing::debug!("Controller gone, animation worker exiting");
                        return;
                    }
                }

                let now_ms = self.epoch.elapsed().as_millis() as u64;
                if self.limiter.try_admit(now_ms) {
                    self.transport
                        .publish(&self.channel, codec::encode(color))
                        .await;
                    self.stats.record_publish();
                } else {
                    self.stats.record_throttled();
                }

                tokio::time::sleep(self.tick).await;
            }
        }
    }
}
