use crate::color::Color;
use crate::color_hist::ColorHist;
use crate::error::{QuantizeError, Result};
use image::RgbImage;

/// An immutable, row-major grid of colors. Width and height are never zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
}

impl Image {
    /// Fails with `RaggedRow` if a row differs in length from the first one,
    /// and with `ZeroDimension` if the rows are consistent but empty.
    pub fn from_grid(grid: Vec<Vec<Color>>) -> Result<Self> {
        let width = grid.first().map_or(0, Vec::len);
        check_rows(grid.iter().map(Vec::len), width)?;
        let height = grid.len();
        let pixels = grid.into_iter().flatten().collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Builds an image from rows of `0xRRGGBB` pixels. Every row must be as
    /// long as the first one.
    pub fn from_packed_grid<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        check_rows(rows.iter().map(|row| row.as_ref().len()), width)?;
        let pixels = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied().map(Color::from_packed))
            .collect();
        Ok(Self {
            pixels,
            width,
            height: rows.len(),
        })
    }

    /// Builds an image from a framebuffer of `0xRRGGBB` pixels laid out row
    /// after row. The height is `pixels.len() / width`.
    pub fn from_packed_flat(pixels: &[u32], width: usize) -> Result<Self> {
        if width == 0 || pixels.is_empty() {
            return Err(QuantizeError::ZeroDimension);
        }
        if pixels.len() % width != 0 {
            return Err(QuantizeError::IndivisibleLength {
                len: pixels.len(),
                width,
            });
        }
        Ok(Self {
            pixels: pixels.iter().copied().map(Color::from_packed).collect(),
            width,
            height: pixels.len() / width,
        })
    }

    pub fn from_rgb_image(img: &RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(QuantizeError::ZeroDimension);
        }
        Ok(Self {
            pixels: img.pixels().map(|&p| Color::from(p)).collect(),
            width: width as usize,
            height: height as usize,
        })
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.pixels[y as usize * self.width + x as usize].into()
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width)
    }

    pub fn color_at(&self, x: usize, y: usize) -> Result<Color> {
        if x >= self.width || y >= self.height {
            return Err(QuantizeError::CoordinateOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[y * self.width + x])
    }

    pub fn color_at_index(&self, index: usize) -> Result<Color> {
        self.pixels
            .get(index)
            .copied()
            .ok_or(QuantizeError::IndexOutOfRange {
                index,
                len: self.pixels.len(),
            })
    }

    /// Counts every pixel once, in row-major order.
    pub fn color_frequencies(&self) -> ColorHist {
        self.pixels.iter().copied().collect()
    }
}

fn check_rows<I>(lengths: I, width: usize) -> Result<()>
where
    I: ExactSizeIterator<Item = usize>,
{
    if lengths.len() == 0 {
        return Err(QuantizeError::ZeroDimension);
    }
    for (row, actual) in lengths.enumerate() {
        if actual != width {
            return Err(QuantizeError::RaggedRow {
                row,
                expected: width,
                actual,
            });
        }
    }
    if width == 0 {
        return Err(QuantizeError::ZeroDimension);
    }
    Ok(())
}
