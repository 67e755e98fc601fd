//! End-to-end demo on the in-process bus
//!
//! Run with: cargo run --example wave
//!
//! Wires a controller to a `MemoryBus`, attaches an observer playing the
//! role of the lamp endpoint, and drives a short session: lights on, a
//! slider drag, and a couple of seconds of Animation Mode. The observer
//! prints every color it receives.
//!
//! Set `RUST_LOG=phue_rs=debug` to watch the controller's internals.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

use phue_rs::{
    color, Channel, ChannelId, ControllerConfig, InputEvent, MemoryBus, StreamController,
    Transport, TransportConfig, TransportEvent, UiCommand,
};

#[tokio::main]
async fn main() -> phue_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phue_rs=info".into()),
        )
        .init();

    let config = TransportConfig::new("demo", "demo").client_id("wave-demo");
    let bus = Arc::new(MemoryBus::new(config));

    // The "lamp": subscribes to the channel and prints whatever arrives
    let channel = ChannelId::from("phue");
    let (lamp_tx, mut lamp_rx) = mpsc::channel(64);
    bus.subscribe(&channel, lamp_tx).await;
    tokio::spawn(async move {
        while let Some(event) = lamp_rx.recv().await {
            if let TransportEvent::Message { payload, .. } = event {
                match color::decode(&payload) {
                    Ok(color) => println!("lamp <- {}", color),
                    Err(err) => eprintln!("lamp: bad payload: {}", err),
                }
            }
        }
    });

    let (controller, mut handle) = StreamController::new(bus, ControllerConfig::default());
    let controller_task = tokio::spawn(controller.run());

    // Lights on, then a short red drag
    handle.send(InputEvent::AllOn).await?;
    handle.send(InputEvent::SliderGrabbed).await?;
    for value in (0..=250u16).step_by(25) {
        handle
            .send(InputEvent::SliderMoved {
                channel: Channel::Red,
                value: value as u8,
                by_user: true,
            })
            .await?;
        sleep(Duration::from_millis(30)).await;
    }
    handle.send(InputEvent::SliderReleased).await?;

    // Let Animation Mode run for a couple of seconds
    handle.send(InputEvent::AnimationStart).await?;
    sleep(Duration::from_secs(2)).await;
    handle.send(InputEvent::AnimationStop).await?;
    sleep(Duration::from_millis(200)).await;

    // Show what the controller pushed at the widget layer meanwhile
    let mut slider_updates = 0;
    while let Ok(command) = handle.ui.try_recv() {
        if matches!(command, UiCommand::SetSlider(..)) {
            slider_updates += 1;
        }
    }
    println!("ui  <- {} slider updates", slider_updates);
    println!("stats: {}", handle.stats());

    handle.shutdown();
    let _ = controller_task.await;
    Ok(())
}
