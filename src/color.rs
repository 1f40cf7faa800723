use crate::error::{QuantizeError, Result};
use image::Rgb;
use std::cmp::Ordering;
use std::fmt;

pub const COMPONENTS: usize = 3;

/// An RGB color with 8 bits per component.
///
/// The derived `Ord` compares `(r, g, b)` lexicographically. The quantizer
/// uses it wherever two colors or clusters would otherwise tie.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    rgb: [u8; COMPONENTS],
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Unpacks a `0xRRGGBB` pixel. Bits above the low 24 (alpha) are ignored.
    #[inline]
    pub const fn from_packed(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.rgb[0] as u32) << 16) | ((self.rgb[1] as u32) << 8) | self.rgb[2] as u32
    }

    /// Panics if `component >= 3`.
    #[inline]
    pub fn component(&self, component: usize) -> u8 {
        self.rgb[component]
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.rgb[0]
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.rgb[1]
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.rgb[2]
    }

    pub fn distance_squared(&self, other: Color) -> u32 {
        self.rgb
            .iter()
            .zip(other.rgb)
            .map(|(&a, b)| {
                let d = a.abs_diff(b) as u32;
                d * d
            })
            .sum()
    }

    /// Weighted mean of `(color, count)` pairs, rounded half to even per
    /// component. Sums are accumulated in u128, so any u64 weights are exact.
    ///
    /// Fails with [`QuantizeError::EmptyInput`] when the total weight is zero.
    pub fn centroid<I>(weighted: I) -> Result<Color>
    where
        I: IntoIterator<Item = (Color, u64)>,
    {
        let mut sums = [0u128; COMPONENTS];
        let mut total = 0u128;
        for (color, count) in weighted {
            let count = count as u128;
            total += count;
            sums.iter_mut()
                .zip(color.rgb)
                .for_each(|(s, c)| *s += c as u128 * count);
        }
        if total == 0 {
            return Err(QuantizeError::EmptyInput);
        }
        let [r, g, b] = sums.map(|sum| div_round_half_even(sum, total));
        Ok(Color::new(r, g, b))
    }
}

// The mean of u8 values never exceeds 255, so neither does the rounded result.
fn div_round_half_even(sum: u128, total: u128) -> u8 {
    let quotient = sum / total;
    let remainder = sum % total;
    let rounded = match (2 * remainder).cmp(&total) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + (quotient & 1),
    };
    rounded as u8
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_packed())
    }
}

impl From<Rgb<u8>> for Color {
    #[inline]
    fn from(rgb: Rgb<u8>) -> Self {
        Self { rgb: rgb.0 }
    }
}

impl From<Color> for Rgb<u8> {
    #[inline]
    fn from(color: Color) -> Self {
        Rgb(color.rgb)
    }
}
