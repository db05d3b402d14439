//! RGB colors and the two-endpoint distance gradient.

use std::fmt;

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black, the default near-distance color.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white, the default far-distance color.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Construct a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// A linear two-color gradient over normalized distance `[0, 1]`.
///
/// Interpolation is channel-independent and oriented per channel:
/// `norm = 0` always yields `start`'s channel value and `norm = 1`
/// always yields `end`'s, even on channels where `end` is numerically
/// smaller than `start`. Results truncate to 8 bits.
///
/// # Examples
///
/// ```
/// use quadrex_core::{Gradient, Rgb};
///
/// let grad = Gradient::default();
/// assert_eq!(grad.at(0.0), Rgb::BLACK);
/// assert_eq!(grad.at(1.0), Rgb::WHITE);
/// assert_eq!(grad.at(0.5), Rgb::new(127, 127, 127));
///
/// // A descending channel still lands on `end` at norm = 1.
/// let grad = Gradient::new(Rgb::new(200, 0, 0), Rgb::new(50, 255, 0));
/// assert_eq!(grad.at(1.0).r, 50);
/// assert_eq!(grad.at(0.0).r, 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    /// Color at normalized distance 0 (a matched address).
    pub start: Rgb,
    /// Color at normalized distance 1 (maximally far from any match).
    pub end: Rgb,
}

impl Gradient {
    /// Construct a gradient from its two endpoint colors.
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }

    /// The color at normalized distance `norm`, expected in `[0, 1]`.
    pub fn at(&self, norm: f64) -> Rgb {
        Rgb {
            r: Self::channel(norm, self.start.r, self.end.r),
            g: Self::channel(norm, self.start.g, self.end.g),
            b: Self::channel(norm, self.start.b, self.end.b),
        }
    }

    /// Interpolate one channel, tying the walk to the absolute gap so
    /// the direction of the endpoints does not matter.
    fn channel(norm: f64, start: u8, end: u8) -> u8 {
        let eff = if end >= start { norm } else { 1.0 - norm };
        let lo = f64::from(start.min(end));
        let gap = f64::from(start.abs_diff(end));
        (lo + eff * gap) as u8
    }
}

impl Default for Gradient {
    /// Black at distance 0, white at maximal distance.
    fn default() -> Self {
        Self::new(Rgb::BLACK, Rgb::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn endpoints_are_exact_per_channel() {
        // Channels deliberately mix ascending (r, b) and descending (g)
        // directions.
        let grad = Gradient::new(Rgb::new(143, 143, 236), Rgb::new(255, 220, 0));
        assert_eq!(grad.at(0.0), Rgb::new(143, 143, 236));
        assert_eq!(grad.at(1.0), Rgb::new(255, 220, 0));
    }

    #[test]
    fn midpoint_truncates() {
        let grad = Gradient::default();
        assert_eq!(grad.at(0.5), Rgb::new(127, 127, 127));
    }

    #[test]
    fn flat_channel_is_constant() {
        let grad = Gradient::new(Rgb::new(10, 0, 0), Rgb::new(10, 255, 0));
        assert_eq!(grad.at(0.0).r, 10);
        assert_eq!(grad.at(0.37).r, 10);
        assert_eq!(grad.at(1.0).r, 10);
    }

    proptest! {
        #[test]
        fn output_stays_between_endpoints(
            start in any::<(u8, u8, u8)>(),
            end in any::<(u8, u8, u8)>(),
            norm in 0.0f64..=1.0,
        ) {
            let grad = Gradient::new(
                Rgb::new(start.0, start.1, start.2),
                Rgb::new(end.0, end.1, end.2),
            );
            let out = grad.at(norm);
            for (o, s, e) in [
                (out.r, start.0, end.0),
                (out.g, start.1, end.1),
                (out.b, start.2, end.2),
            ] {
                prop_assert!(o >= s.min(e) && o <= s.max(e));
            }
        }

        #[test]
        fn endpoints_exact_for_any_gradient(
            start in any::<(u8, u8, u8)>(),
            end in any::<(u8, u8, u8)>(),
        ) {
            let s = Rgb::new(start.0, start.1, start.2);
            let e = Rgb::new(end.0, end.1, end.2);
            let grad = Gradient::new(s, e);
            prop_assert_eq!(grad.at(0.0), s);
            prop_assert_eq!(grad.at(1.0), e);
        }
    }
}
