use std::io;
use std::io::Write;

use crossterm::queue;
use crossterm::style;
use crossterm::style::Color;
use crossterm::terminal;
use tracing::debug;

use crate::palette::Rgb;
use crate::sink::BoardImage;

/// Upper half block. The foreground paints the top pixel, the background the bottom one.
const HALF_BLOCK: char = '\u{2580}';

/// Width assumed when stdout is not a terminal
const FALLBACK_COLUMNS: u16 = 80;

/// Sample every `stride`-th pixel of `img` and pair up vertically adjacent samples. Each pair is
/// one terminal cell, `(upper, lower)`. If there is an odd number of sampled rows, the last one is
/// paired with black.
pub fn half_blocks(img: &BoardImage, stride: u32) -> Vec<Vec<(Rgb, Rgb)>> {
    let stride = stride.max(1) as usize;

    let xs: Vec<u32> = (0..img.width()).step_by(stride).collect();
    let ys: Vec<u32> = (0..img.height()).step_by(stride).collect();

    ys.chunks(2)
        .map(|pair| {
            xs.iter()
                .map(|&x| {
                    let upper = img.pixel(x, pair[0]);
                    let lower = pair.get(1).map_or(Rgb::BLACK, |&y| img.pixel(x, y));

                    (upper, lower)
                })
                .collect()
        })
        .collect()
}

/// Smallest stride that makes an image of width `width` fit in `cols` columns
pub fn stride_for(width: u32, cols: u16) -> u32 {
    width.div_ceil(cols.max(1) as u32).max(1)
}

/// Print `img` to stdout using 24-bit colors
pub fn show(img: &BoardImage) -> io::Result<()> {
    let (cols, _) = terminal::size().unwrap_or((FALLBACK_COLUMNS, 0));
    let stride = stride_for(img.width(), cols);

    debug!(
        width = img.width(),
        height = img.height(),
        stride,
        "Showing board image"
    );

    let mut stdout = io::stdout().lock();
    write_blocks(&mut stdout, &half_blocks(img, stride))?;
    stdout.flush()
}

fn write_blocks<W: Write>(w: &mut W, rows: &[Vec<(Rgb, Rgb)>]) -> io::Result<()> {
    let color = |c: Rgb| Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    };

    for row in rows {
        for &(upper, lower) in row {
            queue!(
                w,
                style::SetForegroundColor(color(upper)),
                style::SetBackgroundColor(color(lower)),
                style::Print(HALF_BLOCK),
            )?;
        }

        queue!(w, style::ResetColor, style::Print('\n'))?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::half_blocks;
    use super::stride_for;
    use super::write_blocks;
    use crate::palette::Rgb;
    use crate::render::PixelBuffer;
    use crate::sink::ImageSink;
    use crate::sink::RgbImageSink;

    #[test]
    fn pairs_rows_and_pads_odd_height() {
        let mut fb = PixelBuffer::new(2, 3);
        fb.fill_square(0, 0, 1, Rgb::RED);
        fb.fill_square(1, 1, 1, Rgb::GREEN);
        fb.fill_square(0, 2, 1, Rgb::BLUE);
        let img = RgbImageSink.convert(fb).unwrap();

        let rows = half_blocks(&img, 1);

        assert_eq!(
            rows,
            vec![
                vec![(Rgb::RED, Rgb::BLACK), (Rgb::BLACK, Rgb::GREEN)],
                vec![(Rgb::BLUE, Rgb::BLACK), (Rgb::BLACK, Rgb::BLACK)],
            ]
        );
    }

    #[test]
    fn stride_skips_pixels() {
        let mut fb = PixelBuffer::new(4, 4);
        fb.fill_square(2, 0, 2, Rgb::WHITE);
        let img = RgbImageSink.convert(fb).unwrap();

        let rows = half_blocks(&img, 2);

        assert_eq!(rows, vec![vec![(Rgb::BLACK, Rgb::BLACK), (Rgb::WHITE, Rgb::BLACK)]]);
    }

    #[test]
    fn stride_fits_columns() {
        assert_eq!(stride_for(300, 80), 4);
        assert_eq!(stride_for(80, 80), 1);
        assert_eq!(stride_for(10, 80), 1);
        assert_eq!(stride_for(10, 0), 10);
    }

    #[test]
    fn one_line_per_row() {
        let rows = vec![vec![(Rgb::RED, Rgb::BLUE); 3]; 2];
        let mut out = Vec::new();

        write_blocks(&mut out, &rows).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches('\n').count(), 2);
        assert_eq!(out.matches('\u{2580}').count(), 6);
    }
}
