use std::path::Path;

use image::RgbaImage;
use log::debug;

use crate::colour::{scale_rgb, transform, AdjustmentParams, NormalizedColour};
use crate::error::{BamError, Result};

const CHANNEL_MAX: u8 = 0xFF;

/// Grades an RGBA8 buffer pixel by pixel. Alpha comes out opaque.
pub fn adjust_pixels(pixels: &[u8], params: &AdjustmentParams) -> Result<Vec<u8>> {
    if pixels.len() % 4 != 0 {
        return Err(BamError::PixelBuffer(pixels.len()));
    }

    let mut out = vec![0; pixels.len()];
    for (src, dst) in pixels.chunks_exact(4).zip(out.chunks_exact_mut(4)) {
        let colour = NormalizedColour::from_ints(src[0], src[1], src[2], CHANNEL_MAX);
        let [r, g, b] = scale_rgb(transform(colour, params), CHANNEL_MAX);
        dst[0] = r;
        dst[1] = g;
        dst[2] = b;
        dst[3] = 0xFF;
    }
    Ok(out)
}

pub fn adjust_image(img: &RgbaImage, params: &AdjustmentParams) -> Result<RgbaImage> {
    let pixels = adjust_pixels(img.as_raw(), params)?;
    let len = pixels.len();
    RgbaImage::from_raw(img.width(), img.height(), pixels).ok_or(BamError::PixelBuffer(len))
}

pub fn load_screenshot(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?.to_rgba8();
    debug!("Loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

pub fn save_screenshot(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path)?;
    Ok(())
}
