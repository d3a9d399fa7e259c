//! Value-to-color mapping for the heatmap grid.
//!
//! A `ColorScale` holds an ordered stop table spread evenly across the
//! observed value range and interpolates linearly between adjacent stops.
//! Cell text color is derived from the perceptual luminance of the same
//! interpolated fill color.

use crate::error::{ChartError, ChartResult};

/// Color value in RGB format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Default stop table: dark navy -> steel blue -> pale yellow -> warm gold
/// -> deep orange, low sunshine to high.
pub const DEFAULT_STOPS: [Rgb; 5] = [
    Rgb::new(30, 50, 100),
    Rgb::new(70, 130, 180),
    Rgb::new(180, 200, 160),
    Rgb::new(240, 200, 60),
    Rgb::new(210, 120, 20),
];

/// Cell text color over bright fills.
pub const DARK_TEXT: Rgb = Rgb::new(0x1a, 0x1a, 0x2e);

/// Cell text color over dark fills.
pub const LIGHT_TEXT: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Perceptual luminance cutoff between dark and light cell text.
const LUMINANCE_THRESHOLD: f32 = 0.55;

/// Piecewise-linear gradient over `[min, max]`.
///
/// Stops are evenly spaced across the range and traversed in order,
/// never re-sorted.
#[derive(Debug, Clone)]
pub struct ColorScale {
    min: f32,
    max: f32,
    stops: Vec<Rgb>,
}

impl ColorScale {
    /// Build a scale over `[min, max]` with the given stop table.
    ///
    /// At least two stops are required.
    pub fn new(min: f32, max: f32, stops: Vec<Rgb>) -> ChartResult<Self> {
        if stops.len() < 2 {
            return Err(ChartError::Style(format!(
                "color scale needs at least 2 stops, got {}",
                stops.len()
            )));
        }
        Ok(Self { min, max, stops })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    /// Map a value to its interpolated fill color.
    ///
    /// The value is normalized against `[min, max]` (clamped to the range),
    /// scaled onto the stop segments, and interpolated per channel between
    /// the two surrounding stops. A value exactly on a stop boundary yields
    /// that stop's literal color. A degenerate range (`min == max`) maps
    /// everything to the first stop.
    pub fn color_for(&self, value: f32) -> Rgb {
        let t = if self.max > self.min {
            ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let scaled = t * (self.stops.len() - 1) as f32;
        let segment = (scaled.floor() as usize).min(self.stops.len() - 2);
        let fraction = scaled - segment as f32;

        let low = self.stops[segment];
        let high = self.stops[segment + 1];
        Rgb::new(
            lerp_channel(low.r, high.r, fraction),
            lerp_channel(low.g, high.g, fraction),
            lerp_channel(low.b, high.b, fraction),
        )
    }

    /// Choose a readable text color for a cell filled with `color_for(value)`.
    ///
    /// Recomputes the interpolated fill (never a cached value) so the cell
    /// fill and its overlaid text always derive from one color computation.
    pub fn text_color_for(&self, value: f32) -> Rgb {
        let Rgb { r, g, b } = self.color_for(value);
        let luminance = (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0;
        if luminance > LUMINANCE_THRESHOLD {
            DARK_TEXT
        } else {
            LIGHT_TEXT
        }
    }
}

/// Linear single-channel interpolation, rounded to the nearest integer.
fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_channel_endpoints() {
        assert_eq!(lerp_channel(30, 210, 0.0), 30);
        assert_eq!(lerp_channel(30, 210, 1.0), 210);
        assert_eq!(lerp_channel(0, 255, 0.5), 128);
    }

    #[test]
    fn test_new_rejects_short_stop_table() {
        assert!(ColorScale::new(0.0, 1.0, vec![Rgb::new(0, 0, 0)]).is_err());
        assert!(ColorScale::new(0.0, 1.0, vec![]).is_err());
    }
}
