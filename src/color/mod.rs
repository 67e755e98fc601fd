//! RGB color model
//!
//! A color is three 8-bit channel intensities. The controller keeps exactly
//! one of these as its current state and every wire payload carries one.

pub mod codec;
pub mod wave;

pub use codec::{decode, encode, DecodeError};

/// One of the three color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels, in red-green-blue order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// An immutable RGB triple, each component in `[0, 255]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Full white, the controller's initial color
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// All channels off
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Create a color from channel intensities
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wide integers, clamping each component into range
    ///
    /// Out-of-range components are reported at debug level. UI layers that
    /// hand over plain `i32` slider positions go through here.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_component(Channel::Red, r),
            g: clamp_component(Channel::Green, g),
            b: clamp_component(Channel::Blue, b),
        }
    }

    /// Get a single channel intensity
    pub const fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Set a single channel intensity, returning the updated color
    #[must_use]
    pub const fn with(self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => Color::new(value, self.g, self.b),
            Channel::Green => Color::new(self.r, value, self.b),
            Channel::Blue => Color::new(self.r, self.g, value),
        }
    }

    /// Pack into an opaque 0xAARRGGBB word for preview surfaces
    pub const fn to_argb(&self) -> u32 {
        (0xFF << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn clamp_component(channel: Channel, value: i32) -> u8 {
    if !(0..=255).contains(&value) {
        tracing::debug!(channel = %channel, value = value, "Clamping out-of-range component");
    }
    value.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_with_roundtrip() {
        let mut color = Color::BLACK;
        color = color.with(Channel::Red, 10);
        color = color.with(Channel::Green, 20);
        color = color.with(Channel::Blue, 30);

        assert_eq!(color, Color::new(10, 20, 30));
        assert_eq!(color.get(Channel::Red), 10);
        assert_eq!(color.get(Channel::Green), 20);
        assert_eq!(color.get(Channel::Blue), 30);
    }

    #[test]
    fn test_clamped_in_range_is_identity() {
        assert_eq!(Color::clamped(1, 128, 255), Color::new(1, 128, 255));
    }

    #[test]
    fn test_clamped_out_of_range() {
        assert_eq!(Color::clamped(-1, 300, 900), Color::new(0, 255, 255));
    }

    #[test]
    fn test_to_argb() {
        assert_eq!(Color::WHITE.to_argb(), 0xFFFF_FFFF);
        assert_eq!(Color::BLACK.to_argb(), 0xFF00_0000);
        assert_eq!(Color::new(0x12, 0x34, 0x56).to_argb(), 0xFF12_3456);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::new(255, 0, 137).to_string(), "rgb(255, 0, 137)");
    }
}
