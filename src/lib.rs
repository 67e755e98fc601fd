//! RGB streaming controller for networked lamps over pub/sub
//!
//! `phue-rs` turns continuous slider input and an autonomous animation mode
//! into a rate-limited stream of color messages on a named pub/sub channel,
//! and mirrors the same channel back as diagnostic events.
//!
//! The pieces:
//!
//! - [`transport`] — the pub/sub seam: [`Transport`] trait, lifecycle
//!   events, and an in-process [`MemoryBus`]
//! - [`color`] — the RGB model, the JSON wire codec, and the half-sine
//!   animation generator
//! - [`limiter`] — one publish per 100 ms from continuous sources
//! - [`controller`] — the [`StreamController`] orchestrating all of it
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use phue_rs::{ControllerConfig, InputEvent, MemoryBus, StreamController};
//!
//! # async fn example() -> phue_rs::Result<()> {
//! let bus = Arc::new(MemoryBus::default());
//! let (controller, handle) = StreamController::new(bus, ControllerConfig::default());
//! tokio::spawn(controller.run());
//!
//! handle.send(InputEvent::AllOn).await?;
//! handle.send(InputEvent::AnimationStart).await?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod controller;
pub mod error;
pub mod limiter;
pub mod stats;
pub mod transport;

pub use color::{Channel, Color, DecodeError};
pub use controller::{
    ControllerConfig, ControllerHandle, DiagnosticEvent, InputEvent, StreamController, UiCommand,
};
pub use error::{Error, Result};
pub use limiter::{RateLimiter, MIN_PUBLISH_INTERVAL};
pub use stats::{ControllerStats, StatsSnapshot};
pub use transport::{ChannelId, MemoryBus, Transport, TransportConfig, TransportEvent};
