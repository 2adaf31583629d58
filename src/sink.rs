use std::io;
use std::path::Path;

use image::RgbImage;
use thiserror::Error;
use tracing::debug;

use crate::palette::Rgb;
use crate::render::CHANNELS;
use crate::render::PixelBuffer;
use crate::term;

/// Turns rendered pixels into an image object.
pub trait ImageSink {
    type Image;
    type Error;

    fn convert(&self, pixels: PixelBuffer) -> Result<Self::Image, Self::Error>;
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Pixel buffer of {len} bytes does not match a {width}x{height} RGB image")]
    Shape {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
}

/// Converts pixel buffers into [`BoardImage`]s backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbImageSink;

impl ImageSink for RgbImageSink {
    type Image = BoardImage;
    type Error = SinkError;

    fn convert(&self, pixels: PixelBuffer) -> Result<BoardImage, SinkError> {
        let (width, height) = (pixels.width(), pixels.height());
        let shape_err = |len| SinkError::Shape { width, height, len };

        let len = pixels.as_raw().len();
        if width.checked_mul(height).and_then(|n| n.checked_mul(CHANNELS)) != Some(len) {
            return Err(shape_err(len));
        }

        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(shape_err(len));
        };

        let img = RgbImage::from_raw(w, h, pixels.into_raw()).ok_or_else(|| shape_err(len))?;

        Ok(BoardImage(img))
    }
}

/// A rendered board that can be shown on the terminal or saved to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardImage(RgbImage);

impl BoardImage {
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Color of the pixel at column `x`, row `y`
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        Rgb::from(self.0.get_pixel(x, y).0)
    }

    /// Encode the image and write it to `path`. The format is picked from the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SinkError> {
        let path = path.as_ref();

        self.0.save(path)?;
        debug!(path = %path.display(), "Saved board image");

        Ok(())
    }

    /// Draw the image on the terminal, scaled down to fit its width
    pub fn show(&self) -> Result<(), SinkError> {
        term::show(self)?;
        Ok(())
    }

    pub fn into_inner(self) -> RgbImage {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::BoardImage;
    use super::ImageSink;
    use super::RgbImageSink;
    use crate::palette::Rgb;
    use crate::render::PixelBuffer;

    #[test]
    fn convert_keeps_pixels() {
        let mut fb = PixelBuffer::new(5, 3);
        fb.fill_square(1, 0, 2, Rgb::GREEN);
        fb.fill_square(4, 2, 1, Rgb::new(1, 2, 3));
        let raw = fb.as_raw().to_vec();

        let img = RgbImageSink.convert(fb).unwrap();

        assert_eq!((img.width(), img.height()), (5, 3));
        assert_eq!(img.pixel(1, 0), Rgb::GREEN);
        assert_eq!(img.pixel(2, 1), Rgb::GREEN);
        assert_eq!(img.pixel(4, 2), Rgb::new(1, 2, 3));
        assert_eq!(img.pixel(0, 0), Rgb::BLACK);
        assert_eq!(img.into_inner().into_raw(), raw);
    }

    #[test]
    fn save_and_reload_png() {
        let mut fb = PixelBuffer::new(4, 4);
        fb.fill_square(0, 0, 2, Rgb::BLUE);
        let img: BoardImage = RgbImageSink.convert(fb).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.png");
        img.save(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();

        assert_eq!(loaded, img.into_inner());
    }

    #[test]
    fn save_unknown_extension_fails() {
        let img = RgbImageSink.convert(PixelBuffer::new(1, 1)).unwrap();
        let dir = tempfile::tempdir().unwrap();

        assert!(img.save(dir.path().join("board.not-a-format")).is_err());
    }
}
