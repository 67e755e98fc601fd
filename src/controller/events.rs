//! Controller event vocabulary
//!
//! The UI collaborator pushes a single stream of [`InputEvent`]s into the
//! controller instead of wiring per-widget listeners; the controller answers
//! with [`UiCommand`]s and mirrors subscription traffic as
//! [`DiagnosticEvent`]s.

use crate::color::{Channel, Color};

/// An input event from the UI collaborator (or the animation worker)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A slider moved to a new position
    ///
    /// `by_user` distinguishes a finger on the slider (continuous source,
    /// rate limited) from a programmatic echo out of Animation Mode or an
    /// on/off button (never published).
    SliderMoved {
        channel: Channel,
        value: u8,
        by_user: bool,
    },

    /// A slider drag began
    SliderGrabbed,

    /// A slider drag ended
    SliderReleased,

    /// Turn every channel off
    AllOff,

    /// Turn every channel to full
    AllOn,

    /// Start Animation Mode
    AnimationStart,

    /// Stop Animation Mode
    AnimationStop,
}

impl InputEvent {
    /// Whether this event is a user touching the surface
    ///
    /// Any user touch cancels Animation Mode; the animation's own echo
    /// frames and the mode toggles themselves do not.
    pub fn is_user_touch(&self) -> bool {
        match self {
            InputEvent::SliderMoved { by_user, .. } => *by_user,
            InputEvent::SliderGrabbed
            | InputEvent::SliderReleased
            | InputEvent::AllOff
            | InputEvent::AllOn => true,
            InputEvent::AnimationStart | InputEvent::AnimationStop => false,
        }
    }

    /// Whether this event publishes unconditionally, bypassing the limiter
    ///
    /// Gesture boundaries and the on/off buttons always reach the endpoint
    /// so it ends up holding the final state of the gesture.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            InputEvent::SliderGrabbed
                | InputEvent::SliderReleased
                | InputEvent::AllOff
                | InputEvent::AllOn
        )
    }
}

/// A command for the UI collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Move a slider to a position
    SetSlider(Channel, u8),

    /// Repaint the color preview surface
    SetPreview(Color),
}

/// A record for the diagnostic sink
///
/// Mirrors the subscription's lifecycle events with inbound payloads already
/// decoded. Consumers only log these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Subscription established
    Connect,

    /// Subscription torn down
    Disconnect,

    /// Subscription re-established
    Reconnect,

    /// An inbound payload decoded cleanly
    Message(Color),

    /// An inbound payload was discarded as undecodable
    DecodeError(String),

    /// The transport reported a failure
    TransportError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_touch_classification() {
        assert!(InputEvent::SliderGrabbed.is_user_touch());
        assert!(InputEvent::SliderReleased.is_user_touch());
        assert!(InputEvent::AllOff.is_user_touch());
        assert!(InputEvent::AllOn.is_user_touch());
        assert!(InputEvent::SliderMoved {
            channel: Channel::Red,
            value: 1,
            by_user: true
        }
        .is_user_touch());

        assert!(!InputEvent::SliderMoved {
            channel: Channel::Red,
            value: 1,
            by_user: false
        }
        .is_user_touch());
        assert!(!InputEvent::AnimationStart.is_user_touch());
        assert!(!InputEvent::AnimationStop.is_user_touch());
    }

    #[test]
    fn test_discrete_classification() {
        assert!(InputEvent::SliderGrabbed.is_discrete());
        assert!(InputEvent::AllOn.is_discrete());

        assert!(!InputEvent::SliderMoved {
            channel: Channel::Blue,
            value: 9,
            by_user: true
        }
        .is_discrete());
        assert!(!InputEvent::AnimationStart.is_discrete());
    }
}
