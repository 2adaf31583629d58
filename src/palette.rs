use crate::CellKind;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Colors of the default palette, indexed by cell kind.
///
/// ```notrust
/// 0: empty  black
/// 1:        green
/// 2:        red
/// 3:        blue
/// ```
///
/// Any other kind falls back to white.
const DEFAULT_COLORS: [Rgb; 4] = [Rgb::BLACK, Rgb::GREEN, Rgb::RED, Rgb::BLUE];

/// Number of distinct cell kinds, one slot per possible `u8`
const NUM_KINDS: usize = CellKind::MAX as usize + 1;

/// Maps cell kinds to colors.
///
/// # Representation
/// A full lookup table with one entry per cell kind. Kinds that were never given a color hold the
/// fallback, so lookup is total and never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; NUM_KINDS],
    fallback: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        let mut palette = Self::new(Rgb::WHITE);

        for (kind, &color) in DEFAULT_COLORS.iter().enumerate() {
            palette.colors[kind] = color;
        }

        palette
    }
}

impl Palette {
    /// A palette with no mapped kinds. Every kind renders as `fallback`.
    pub fn new(fallback: Rgb) -> Self {
        Self {
            colors: [fallback; NUM_KINDS],
            fallback,
        }
    }

    /// Builder form of [`Palette::insert`]
    pub fn with(mut self, kind: CellKind, color: Rgb) -> Self {
        self.insert(kind, color);
        self
    }

    /// Map `kind` to `color`, replacing any previous mapping
    pub fn insert(&mut self, kind: CellKind, color: Rgb) {
        self.colors[kind as usize] = color;
    }

    /// Color of `kind`, or the fallback if `kind` was never mapped
    pub fn get(&self, kind: CellKind) -> Rgb {
        self.colors[kind as usize]
    }

    pub fn fallback(&self) -> Rgb {
        self.fallback
    }
}
