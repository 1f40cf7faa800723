use crate::color::Color;
use crate::raster::Image;
use std::collections::BTreeSet;

/// Remaps an image onto a quantized palette.
///
/// Implementations must return an image with the same dimensions as `image`
/// in which every pixel is either a member of `palette` or `transparent`.
/// Wherever the source pixel equals `transparent` it is reproduced verbatim;
/// all other pixels are approximated by palette colors however the
/// implementation sees fit (nearest color, error diffusion, ordered
/// dithering).
pub trait Ditherer {
    fn dither(&self, image: &Image, palette: &BTreeSet<Color>, transparent: Color) -> Image;
}
