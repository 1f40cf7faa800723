use crate::color::Color;
use image::Rgb;
use std::collections::hash_map::{self, HashMap};

/// A multiset of colors: every distinct color with the number of times it
/// occurs.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ColorHist {
    map: HashMap<Color, u64>,
    total: u64,
}

impl ColorHist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pixels(pixels: &[Rgb<u8>]) -> Self {
        pixels.iter().map(|&rgb| Color::from(rgb)).collect()
    }

    #[inline]
    pub fn add(&mut self, color: Color) {
        self.add_count(color, 1);
    }

    pub fn add_count(&mut self, color: Color, count: u32) {
        self.add_wide(color, count as u64);
    }

    // Counts are kept as u64 so repeated u32 insertions of one color can't wrap.
    pub(crate) fn add_wide(&mut self, color: Color, count: u64) {
        if count == 0 {
            return;
        }
        *self.map.entry(color).or_insert(0) += count;
        self.total += count;
    }

    /// Occurrences of `color`, zero if it is absent.
    #[inline]
    pub fn count(&self, color: Color) -> u64 {
        self.map.get(&color).copied().unwrap_or(0)
    }

    #[inline]
    pub fn distinct(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.map.iter(),
        }
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.map.keys().copied()
    }
}

pub struct Iter<'a> {
    inner: hash_map::Iter<'a, Color, u64>,
}

impl Iterator for Iter<'_> {
    type Item = (Color, u64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&color, &count)| (color, count))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a ColorHist {
    type Item = (Color, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Color> for ColorHist {
    fn extend<T: IntoIterator<Item = Color>>(&mut self, iter: T) {
        iter.into_iter().for_each(|color| self.add(color));
    }
}

impl Extend<(Color, u32)> for ColorHist {
    fn extend<T: IntoIterator<Item = (Color, u32)>>(&mut self, iter: T) {
        iter.into_iter()
            .for_each(|(color, count)| self.add_count(color, count));
    }
}

impl FromIterator<Color> for ColorHist {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        let mut hist = Self::new();
        hist.extend(iter);
        hist
    }
}

impl FromIterator<(Color, u32)> for ColorHist {
    fn from_iter<T: IntoIterator<Item = (Color, u32)>>(iter: T) -> Self {
        let mut hist = Self::new();
        hist.extend(iter);
        hist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_repeated_colors() {
        let red = Color::from_packed(0xff0000);
        let blue = Color::from_packed(0x0000ff);
        let hist: ColorHist = [red, blue, red, red].into_iter().collect();
        assert_eq!(hist.count(red), 3);
        assert_eq!(hist.count(blue), 1);
        assert_eq!(hist.count(Color::default()), 0);
        assert_eq!(hist.distinct(), 2);
        assert_eq!(hist.total(), 4);
    }

    #[test]
    fn zero_count_is_ignored() {
        let mut hist = ColorHist::new();
        hist.add_count(Color::new(1, 2, 3), 0);
        assert!(hist.is_empty());
        assert_eq!(hist.total(), 0);
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let a = Color::new(1, 0, 0);
        let b = Color::new(0, 1, 0);
        let forward: ColorHist = [(a, 2), (b, 5)].into_iter().collect();
        let backward: ColorHist = [(b, 3), (a, 2), (b, 2)].into_iter().collect();
        assert_eq!(forward, backward);
    }

    #[test]
    fn total_matches_sum_of_counts() {
        let pixels: Vec<Rgb<u8>> = (0..100u8).map(|i| Rgb([i % 7, i % 3, 0])).collect();
        let hist = ColorHist::from_pixels(&pixels);
        assert_eq!(hist.total(), 100);
        assert_eq!(hist.iter().map(|(_, n)| n).sum::<u64>(), hist.total());
        assert_eq!(hist.colors().count(), hist.distinct());
    }

    #[test]
    fn count_grows_past_u32() {
        let color = Color::new(9, 8, 7);
        let hist: ColorHist = [(color, u32::MAX), (color, 1)].into_iter().collect();
        assert_eq!(hist.count(color), u32::MAX as u64 + 1);
        assert_eq!(hist.total(), u32::MAX as u64 + 1);
        assert_eq!(hist.distinct(), 1);
    }
}
