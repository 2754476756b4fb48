//! Dominant color naming.
//!
//! Maps the two most area-dominant colors onto a small fixed set of names
//! using channel thresholds and perceptual brightness, rather than a full
//! color-name database.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::{ColorSample, Rgb};

/// Only this many of the most dominant samples are named.
pub const DOMINANT_COLOR_COUNT: usize = 2;

/// All channels above this read as white.
const WHITE_MIN_CHANNEL: f32 = 200.0;
/// All channels below this read as black.
const BLACK_MAX_CHANNEL: f32 = 50.0;
/// Secondary channel must exceed this for yellow / magenta.
const WARM_SECONDARY_MIN: f32 = 180.0;
/// Remaining channel must stay below this for yellow / magenta.
const WARM_TERTIARY_MAX: f32 = 120.0;
/// Blue must exceed this for a green-primary color to read as cyan.
const CYAN_BLUE_MIN: f32 = 160.0;
/// Bare primary colors below this brightness get the "dark" prefix.
const DARK_BRIGHTNESS_MAX: f32 = 90.0;

/// The channel holding the largest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// A color name produced by [`ColorClassifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedColor {
    White,
    Black,
    Yellow,
    Magenta,
    Cyan,
    Red,
    Green,
    Blue,
    DarkRed,
    DarkGreen,
    DarkBlue,
}

impl NamedColor {
    /// Tag text for this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::DarkRed => "dark red",
            Self::DarkGreen => "dark green",
            Self::DarkBlue => "dark blue",
        }
    }

    /// The bare color name for a primary channel.
    fn primary(channel: Channel) -> Self {
        match channel {
            Channel::Red => Self::Red,
            Channel::Green => Self::Green,
            Channel::Blue => Self::Blue,
        }
    }

    /// The "dark" variant of a bare primary name; derived names stay as they are.
    fn darkened(self) -> Self {
        match self {
            Self::Red => Self::DarkRed,
            Self::Green => Self::DarkGreen,
            Self::Blue => Self::DarkBlue,
            other => other,
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rec. 709 relative luminance on the 0-255 scale.
pub fn brightness(rgb: Rgb) -> f32 {
    0.2126 * rgb.red + 0.7152 * rgb.green + 0.0722 * rgb.blue
}

/// The channel with the largest value. Exact ties go to red, then green.
pub fn primary_channel(rgb: Rgb) -> Channel {
    [
        (Channel::Red, rgb.red),
        (Channel::Green, rgb.green),
        (Channel::Blue, rgb.blue),
    ]
    .into_iter()
    .fold((Channel::Red, rgb.red), |best, candidate| {
        if candidate.1 > best.1 {
            candidate
        } else {
            best
        }
    })
    .0
}

/// Names dominant colors.
pub struct ColorClassifier;

impl ColorClassifier {
    /// Name a single RGB triple.
    ///
    /// Channels are rounded to the nearest integer before any threshold or
    /// brightness check, so `180.4` compares as `180` and `49.6` as `50`.
    pub fn classify(rgb: Rgb) -> NamedColor {
        let rgb = Rgb::new(rgb.red.round(), rgb.green.round(), rgb.blue.round());
        let Rgb { red, green, blue } = rgb;

        if red > WHITE_MIN_CHANNEL && green > WHITE_MIN_CHANNEL && blue > WHITE_MIN_CHANNEL {
            return NamedColor::White;
        }
        if red < BLACK_MAX_CHANNEL && green < BLACK_MAX_CHANNEL && blue < BLACK_MAX_CHANNEL {
            return NamedColor::Black;
        }

        let name = match primary_channel(rgb) {
            Channel::Red if green > WARM_SECONDARY_MIN && blue < WARM_TERTIARY_MAX => {
                NamedColor::Yellow
            }
            Channel::Red if blue > WARM_SECONDARY_MIN && green < WARM_TERTIARY_MAX => {
                NamedColor::Magenta
            }
            Channel::Green if blue > CYAN_BLUE_MIN => NamedColor::Cyan,
            channel => NamedColor::primary(channel),
        };

        if brightness(rgb) < DARK_BRIGHTNESS_MAX {
            name.darkened()
        } else {
            name
        }
    }

    /// The most dominant samples by pixel fraction, largest first.
    ///
    /// The sort is stable, so samples with equal fractions keep detector order.
    pub fn dominant(samples: &[ColorSample]) -> Vec<ColorSample> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| b.pixel_fraction.total_cmp(&a.pixel_fraction));
        sorted.truncate(DOMINANT_COLOR_COUNT);
        sorted
    }

    /// Name the two most dominant samples. Yields 0 to 2 tags.
    pub fn classify_dominant(samples: &[ColorSample]) -> BTreeSet<String> {
        Self::dominant(samples)
            .into_iter()
            .map(|sample| {
                let name = Self::classify(sample.color);
                tracing::trace!(
                    "Color ({:.0}, {:.0}, {:.0}) @ {:.2} -> {}",
                    sample.color.red,
                    sample.color.green,
                    sample.color.blue,
                    sample.pixel_fraction,
                    name
                );
                name.as_str().to_string()
            })
            .collect()
    }
}
