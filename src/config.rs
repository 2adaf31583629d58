use thiserror::Error;

use crate::palette::Palette;

pub const DEFAULT_SIZE: usize = 10;
pub const DEFAULT_CELL_SIZE: usize = 20;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size must be at least 1")]
    ZeroSize,

    #[error("Cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("A {size}x{size} board with {cell_size}px cells does not fit in memory")]
    TooLarge { size: usize, cell_size: usize },
}

/// Construction parameters of a [`GridRenderer`](crate::render::GridRenderer).
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Number of cells along one side of the board
    pub size: usize,

    /// Side length of a rendered cell, in pixels
    pub cell_size: usize,

    pub palette: Palette,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            palette: Palette::default(),
        }
    }
}

impl RendererConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_cell_size(mut self, cell_size: usize) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Side length of the rendered image in pixels, checking that the whole pixel buffer is
    /// addressable.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }

        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let too_large = ConfigError::TooLarge {
            size: self.size,
            cell_size: self.cell_size,
        };

        // The image must also fit `image`'s u32 dimensions
        let side = self
            .size
            .checked_mul(self.cell_size)
            .filter(|&side| u32::try_from(side).is_ok())
            .ok_or_else(|| too_large.clone())?;

        side.checked_mul(side)
            .and_then(|n| n.checked_mul(3))
            .ok_or(too_large)?;

        Ok(side)
    }
}

#[cfg(test)]
mod test {
    use super::ConfigError;
    use super::RendererConfig;

    #[test]
    fn default_is_valid() {
        let config = RendererConfig::default();

        assert_eq!(config.size, 10);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.validate(), Ok(200));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let zero_size = RendererConfig::default().with_size(0);
        let zero_cell = RendererConfig::default().with_cell_size(0);

        assert_eq!(zero_size.validate(), Err(ConfigError::ZeroSize));
        assert_eq!(zero_cell.validate(), Err(ConfigError::ZeroCellSize));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let config = RendererConfig::default()
            .with_size(usize::MAX / 2)
            .with_cell_size(3);

        assert_eq!(
            config.validate(),
            Err(ConfigError::TooLarge {
                size: usize::MAX / 2,
                cell_size: 3,
            })
        );
    }
}
