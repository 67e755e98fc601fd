//! Positive half-sine color generator
//!
//! Animation Mode sweeps a phase angle and maps it through three sine waves
//! of different frequencies, one per channel. With an amplitude of 50 the
//! wave spans the full `[0, 255]` intensity range.

use super::Color;

/// Wave amplitude, in percent of full intensity
pub const WAVE_AMPLITUDE: f64 = 50.0;

/// Per-channel wave frequencies (red, green, blue)
pub const WAVE_FREQUENCIES: (f64, f64, f64) = (0.5, 1.0, 2.0);

/// Degrees the phase advances per animation tick
pub const PHASE_STEP: u32 = 3;

/// Extent of one full sweep, in degrees
///
/// The generator is periodic well before 720 degrees, but the sweep extent
/// is part of the observable phase sequence and is kept as-is.
pub const FULL_SWEEP: u32 = 720;

/// Evaluate one channel of the wave
///
/// `amplitude` is a percentage; the result is scaled to `[0, 255]`, rounded,
/// and clamped. Angles outside `[0, FULL_SWEEP)` wrap.
pub fn pos_sin_wave(amplitude: f64, angle_deg: u32, frequency: f64) -> u8 {
    let angle = normalize_phase(angle_deg);
    let radians = f64::from(angle).to_radians();
    let percent = amplitude + amplitude * (radians * frequency).sin();
    let scaled = (percent / 100.0 * 255.0).round();
    scaled.clamp(0.0, 255.0) as u8
}

/// The full animation color for a phase angle
pub fn wave_color(angle_deg: u32) -> Color {
    let (fr, fg, fb) = WAVE_FREQUENCIES;
    Color::new(
        pos_sin_wave(WAVE_AMPLITUDE, angle_deg, fr),
        pos_sin_wave(WAVE_AMPLITUDE, angle_deg, fg),
        pos_sin_wave(WAVE_AMPLITUDE, angle_deg, fb),
    )
}

/// Wrap a phase angle into `[0, FULL_SWEEP)`
pub fn normalize_phase(angle_deg: u32) -> u32 {
    if angle_deg >= FULL_SWEEP {
        tracing::debug!(angle = angle_deg, "Wrapping out-of-range phase");
    }
    angle_deg % FULL_SWEEP
}
