use tracing::debug;
use tracing::trace;

use crate::CellCoord;
use crate::CellKind;
use crate::board::Board;
use crate::config::ConfigError;
use crate::config::RendererConfig;
use crate::palette::Palette;
use crate::palette::Rgb;
use crate::sink::ImageSink;

/// Number of channels per pixel
pub const CHANNELS: usize = 3;

/// A rasterized board.
///
/// Shaped `(height, width, 3)`: rows top to bottom, pixels left to right, then the red, green and
/// blue channels of each pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,

    /// Width in pixels
    w: usize,

    /// Height in pixels
    h: usize,
}

impl PixelBuffer {
    /// A black `w x h` buffer
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            data: vec![0; w * h * CHANNELS],
            w,
            h,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// `(height, width, channels)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.h, self.w, CHANNELS)
    }

    /// Color of the pixel in row `y`, column `x`
    pub fn pixel(&self, y: usize, x: usize) -> Rgb {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Paint an `s x s` square whose top left corner is at `(x, y)`
    pub fn fill_square(&mut self, x: usize, y: usize, s: usize, color: Rgb) {
        assert!(x + s <= self.w, "x is out of bounds");
        assert!(y + s <= self.h, "y is out of bounds");

        let color = color.to_array();

        for dy in 0..s {
            let start = self.xy_from(x, y + dy);
            let row = &mut self.data[start..start + s * CHANNELS];

            for px in row.chunks_exact_mut(CHANNELS) {
                px.copy_from_slice(&color);
            }
        }
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * CHANNELS
    }
}

/// Owns a board and draws it as a grid of colored squares.
#[derive(Debug, Clone)]
pub struct GridRenderer {
    board: Board,

    /// Side length of a rendered cell, in pixels
    cell_size: usize,

    palette: Palette,
}

impl Default for GridRenderer {
    fn default() -> Self {
        let RendererConfig {
            size,
            cell_size,
            palette,
        } = RendererConfig::default();

        Self {
            board: Board::new(size),
            cell_size,
            palette,
        }
    }
}

impl GridRenderer {
    pub fn new(config: RendererConfig) -> Result<Self, ConfigError> {
        let side = config.validate()?;

        debug!(
            size = config.size,
            cell_size = config.cell_size,
            side,
            "Created grid renderer"
        );

        Ok(Self {
            board: Board::new(config.size),
            cell_size: config.cell_size,
            palette: config.palette,
        })
    }

    /// Number of cells along one side of the board
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Set every cell to 0
    pub fn reset(&mut self) -> &Board {
        self.board.clear();
        &self.board
    }

    /// Write `value` at `(row, col)`. Coordinates off the board are ignored.
    pub fn set_cell(&mut self, row: CellCoord, col: CellCoord, value: CellKind) {
        if !self.board.set(row, col, value) {
            trace!(row, col, value, "Ignoring write outside the board");
        }
    }

    pub fn get_cell(&self, row: CellCoord, col: CellCoord) -> Option<CellKind> {
        self.board.get(row, col)
    }

    /// A copy of the board. Changing it does not affect the renderer.
    pub fn get_state(&self) -> Board {
        self.board.clone()
    }

    /// Rasterize the board. Cell `(r, c)` becomes the `cell_size x cell_size` square at pixel
    /// `(r * cell_size, c * cell_size)`, colored by the palette.
    pub fn render_to_array(&self) -> PixelBuffer {
        let s = self.cell_size;
        let side = self.size() * s;

        let mut fb = PixelBuffer::new(side, side);

        for (r, row) in self.board.rows().enumerate() {
            for (c, &kind) in row.iter().enumerate() {
                let color = self.palette.get(kind);

                // freshly allocated buffers are already black
                if color != Rgb::BLACK {
                    fb.fill_square(c * s, r * s, s, color);
                }
            }
        }

        debug!(width = side, height = side, "Rendered board");

        fb
    }

    /// Render the board and hand the pixels to `sink`, unchanged.
    pub fn render_image<S: ImageSink>(&self, sink: &S) -> Result<S::Image, S::Error> {
        sink.convert(self.render_to_array())
    }
}
