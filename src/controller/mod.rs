//! Streaming controller
//!
//! The orchestrator of the crate: it owns the current color, consumes the
//! UI collaborator's [`InputEvent`] stream, drives Animation Mode, applies
//! the rate limiter, and hands encoded payloads to the transport. Inbound
//! subscription traffic is decoded and mirrored to a diagnostic queue.
//!
//! # Architecture
//!
//! ```text
//!   UI collaborator                StreamController              Transport
//!   ───────────────                ────────────────              ─────────
//!   InputEvent ──────────────────► event loop ── encode ───────► publish
//!        ▲                          │     ▲                         │
//!        └── UiCommand ◄────────────┘     │ non-user frames         │
//!                                         │                         ▼
//!   diagnostics ◄── decode ◄── sink ◄─────┼───────────────────── subscribe
//!                                         │
//!                              animation worker (per run)
//! ```
//!
//! The controller is logically single threaded: all state mutation happens
//! on its event loop. The animation worker only touches the shared atomic
//! flag, the shared rate limiter, and the transport.

mod animation;
pub mod config;
pub mod events;
pub mod state;

pub use config::{ControllerConfig, ANIM_TICK, DEFAULT_CHANNEL};
pub use events::{DiagnosticEvent, InputEvent, UiCommand};
pub use state::{AnimationState, ControllerState};

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::color::{codec, Channel, Color};
use crate::error::{Error, Result};
use crate::limiter::RateLimiter;
use crate::stats::{ControllerStats, StatsSnapshot};
use crate::transport::{Transport, TransportEvent};

/// Caller-side handle to a running controller
///
/// Dropping the handle (or calling [`shutdown`](Self::shutdown)) tears the
/// controller down: the animation flag is cleared and the transport
/// unsubscribed.
pub struct ControllerHandle {
    input: mpsc::Sender<InputEvent>,
    shutdown: Option<oneshot::Sender<()>>,
    stats: Arc<ControllerStats>,

    /// Commands for the UI collaborator (slider positions, preview color)
    pub ui: mpsc::Receiver<UiCommand>,

    /// Decoded subscription traffic for logging
    pub diagnostics: mpsc::Receiver<DiagnosticEvent>,
}

impl ControllerHandle {
    /// Push an input event into the controller
    pub async fn send(&self, event: InputEvent) -> Result<()> {
        self.input
            .send(event)
            .await
            .map_err(|_| Error::ControllerClosed)
    }

    /// Request teardown without dropping the queues
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }

    /// Snapshot of the controller's counters
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

/// The RGB streaming controller
pub struct StreamController<T: Transport> {
    transport: Arc<T>,
    config: ControllerConfig,
    state: ControllerState,
    limiter: Arc<RateLimiter>,
    stats: Arc<ControllerStats>,

    /// Start of the controller's monotonic millisecond clock
    epoch: Instant,

    input_rx: mpsc::Receiver<InputEvent>,
    /// Sender side of the input queue, handed to animation workers so their
    /// frames come back through the same event loop
    loopback_tx: mpsc::Sender<InputEvent>,
    ui_tx: mpsc::Sender<UiCommand>,
    diag_tx: mpsc::Sender<DiagnosticEvent>,
    shutdown_rx: oneshot::Receiver<()>,

    worker: Option<JoinHandle<()>>,
}

impl<T: Transport> StreamController<T> {
    /// Create a controller and its handle
    ///
    /// Nothing runs until [`run`](Self::run) is awaited (usually on a
    /// spawned task).
    pub fn new(transport: Arc<T>, config: ControllerConfig) -> (Self, ControllerHandle) {
        let (input_tx, input_rx) = mpsc::channel(config.input_queue);
        let (ui_tx, ui_rx) = mpsc::channel(config.ui_queue);
        let (diag_tx, diag_rx) = mpsc::channel(config.diag_queue);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let stats = Arc::new(ControllerStats::new());
        let limiter = Arc::new(RateLimiter::new(config.min_publish_interval));

        let controller = Self {
            transport,
            limiter,
            stats: Arc::clone(&stats),
            state: ControllerState::new(),
            epoch: Instant::now(),
            loopback_tx: input_tx.clone(),
            input_rx,
            ui_tx,
            diag_tx,
            shutdown_rx,
            worker: None,
            config,
        };

        let handle = ControllerHandle {
            input: input_tx,
            shutdown: Some(shutdown_tx),
            stats,
            ui: ui_rx,
            diagnostics: diag_rx,
        };

        (controller, handle)
    }

    /// Run the controller until its handle shuts it down
    ///
    /// Subscribes the transport first, then serves input events. On exit the
    /// animation flag is cleared, the worker joined, and the transport
    /// unsubscribed.
    pub async fn run(mut self) {
        let (sink_tx, sink_rx) = mpsc::channel(self.config.diag_queue);
        self.transport.subscribe(&self.config.channel, sink_tx).await;
        let diagnostics = self.spawn_diagnostics(sink_rx);

        tracing::info!(channel = %self.config.channel, "Controller running");

        loop {
            tokio::select! {
                maybe_event = self.input_rx.recv() => match maybe_event {
                    Some(event) => self.handle_event(event).await,
                    None => break,
                },
                // Resolves on explicit shutdown and on handle drop
                _ = &mut self.shutdown_rx => break,
            }
        }

        self.state.animation.stop();
        if let Some(worker) = self.worker.take() {
            // Cooperative: the worker observes the flag within one tick
            let _ = worker.await;
        }
        self.transport.unsubscribe(&self.config.channel).await;
        let _ = diagnostics.await;

        tracing::info!(
            channel = %self.config.channel,
            stats = %self.stats.snapshot(),
            "Controller stopped"
        );
    }

    async fn handle_event(&mut self, event: InputEvent) {
        tracing::trace!(event = ?event, "Input event");

        // Any user touch cancels Animation Mode
        if event.is_user_touch() && self.state.animation.is_on() {
            tracing::debug!("User touch cancels animation");
            self.stop_animation();
        }

        match event {
            // Gesture boundaries publish unconditionally so the endpoint
            // always holds the final state of the gesture
            InputEvent::SliderGrabbed | InputEvent::SliderReleased => {
                self.publish_current().await;
            }

            InputEvent::SliderMoved {
                channel,
                value,
                by_user,
            } => self.slider_moved(channel, value, by_user).await,

            InputEvent::AllOff => self.set_all(Color::BLACK).await,
            InputEvent::AllOn => self.set_all(Color::WHITE).await,

            InputEvent::AnimationStart => self.start_animation(),
            InputEvent::AnimationStop => self.stop_animation(),
        }
    }

    async fn slider_moved(&mut self, channel: Channel, value: u8, by_user: bool) {
        self.state.current = self.state.current.with(channel, value);

        if !by_user {
            // Programmatic move (animation frame or on/off echo): keep the
            // slider in sync, never publish
            self.send_ui(UiCommand::SetSlider(channel, value));
        }
        self.send_ui(UiCommand::SetPreview(self.state.current));

        if by_user {
            if self.limiter.try_admit(self.now_ms()) {
                self.publish_current().await;
            } else {
                self.stats.record_throttled();
                tracing::trace!(channel = %channel, value = value, "Throttled");
            }
        }
    }

    async fn set_all(&mut self, color: Color) {
        self.state.current = color;
        self.publish_current().await;

        for channel in Channel::ALL {
            self.send_ui(UiCommand::SetSlider(channel, color.get(channel)));
        }
        self.send_ui(UiCommand::SetPreview(color));
    }

    fn start_animation(&mut self) {
        if self.state.animation.is_on() {
            tracing::debug!("Animation already running");
            return;
        }

        let animation = AnimationState::live();
        self.state.animation = animation.clone();
        self.worker = Some(animation::spawn(animation::WaveWorker {
            animation,
            transport: Arc::clone(&self.transport),
            channel: self.config.channel.clone(),
            limiter: Arc::clone(&self.limiter),
            epoch: self.epoch,
            frames: self.loopback_tx.clone(),
            tick: self.config.anim_tick,
            stats: Arc::clone(&self.stats),
        }));

        tracing::info!("Animation started");
    }

    fn stop_animation(&mut self) {
        if self.state.animation.is_on() {
            self.state.animation.stop();
            tracing::info!(phase = self.state.animation.phase(), "Animation stopped");
        }
        // The worker drains itself; the handle is only kept for teardown
    }

    async fn publish_current(&self) {
        let color = self.state.current;
        self.transport
            .publish(&self.config.channel, codec::encode(color))
            .await;
        self.stats.record_publish();
        tracing::debug!(channel = %self.config.channel, color = %color, "Published");
    }

    fn send_ui(&self, command: UiCommand) {
        // UI updates are best effort; a stalled collaborator must not stall
        // the event loop
        if self.ui_tx.try_send(command).is_err() {
            tracing::trace!("UI queue full, dropping command");
        }
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn spawn_diagnostics(&self, mut sink_rx: mpsc::Receiver<TransportEvent>) -> JoinHandle<()> {
        let diag_tx = self.diag_tx.clone();
        let stats = Arc::clone(&self.stats);

        tokio::spawn(async move {
            while let Some(event) = sink_rx.recv().await {
                let record = match event {
                    TransportEvent::Connect { channel } => {
                        tracing::info!(channel = %channel, "Subscription connected");
                        DiagnosticEvent::Connect
                    }
                    TransportEvent::Disconnect { channel } => {
                        tracing::info!(channel = %channel, "Subscription disconnected");
                        DiagnosticEvent::Disconnect
                    }
                    TransportEvent::Reconnect { channel } => {
                        tracing::info!(channel = %channel, "Subscription reconnected");
                        DiagnosticEvent::Reconnect
                    }
                    TransportEvent::Message { channel, payload } => {
                        match codec::decode(&payload) {
                            Ok(color) => {
                                stats.record_message_decoded();
                                tracing::debug!(channel = %channel, color = %color, "Inbound message");
                                DiagnosticEvent::Message(color)
                            }
                            Err(err) => {
                                stats.record_decode_error();
                                tracing::warn!(channel = %channel, error = %err, "Discarding undecodable message");
                                DiagnosticEvent::DecodeError(err.to_string())
                            }
                        }
                    }
                    TransportEvent::Error { channel, reason } => {
                        stats.record_transport_error();
                        tracing::warn!(channel = %channel, reason = %reason, "Transport error");
                        DiagnosticEvent::TransportError(reason)
                    }
                };

                if diag_tx.try_send(record).is_err() {
                    tracing::trace!("Diagnostic queue full, dropping record");
                }
            }
        })
    }
}
