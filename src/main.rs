use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use board_env::config::RendererConfig;
use board_env::render::GridRenderer;
use board_env::sink::RgbImageSink;

/// Draws a green 2x2 square on a 10x10 board, shows it on the terminal and optionally saves it to
/// the path given as the first argument.
fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = RendererConfig::default().with_cell_size(30);
    let mut env = GridRenderer::new(config).context("Invalid renderer config")?;
    env.reset();

    env.set_cell(3, 3, 1);
    env.set_cell(3, 4, 1);
    env.set_cell(4, 3, 1);
    env.set_cell(4, 4, 1);

    let img = env
        .render_image(&RgbImageSink)
        .context("Failed to convert board to an image")?;

    img.show().context("Failed to show board")?;

    if let Some(path) = std::env::args().nth(1) {
        img.save(&path)
            .with_context(|| format!("Failed to save board to {path}"))?;
        info!(%path, "Saved board");
    }

    Ok(())
}
