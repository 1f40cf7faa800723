//! Median cut color quantization.
//!
//! Reduces a true-color image to a bounded palette before it is written to a
//! palette-indexed format such as GIF:
//!
//! ```
//! use mcut::{ColorQuantizer, Image, MedianCutQuantizer};
//!
//! let pixels = [0xff0000, 0xff0000, 0x00ff00, 0x0000ff];
//! let img = Image::from_packed_flat(&pixels, 2)?;
//! let palette = MedianCutQuantizer.quantize(&img.color_frequencies(), 2)?;
//! assert!(palette.len() <= 2);
//! # Ok::<(), mcut::QuantizeError>(())
//! ```
//!
//! Remapping the image onto the palette is left to a [`Ditherer`].

pub mod color;
pub mod color_hist;
pub mod dither;
pub mod error;
pub mod median_cut;
pub mod raster;

pub use color::Color;
pub use color_hist::ColorHist;
pub use dither::Ditherer;
pub use error::{QuantizeError, Result};
pub use median_cut::{ColorQuantizer, MedianCutQuantizer};
pub use raster::Image;
