pub mod board;
pub mod config;
pub mod palette;
pub mod render;
pub mod sink;
pub mod term;

/// The kind of a cell, e.g. empty or occupied. Colors are looked up by kind.
pub type CellKind = u8;

/// Row or column of a cell. Signed so callers can pass coordinates off the board.
pub type CellCoord = i64;
