use anyhow::Context;
use ballgen::{Ball, emit::write_table};
use ballgen_helpers::setup_tracing;
use std::io::{self, BufWriter};
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    setup_tracing();

    let ball = Ball::DEFAULT;
    debug!(
        dim = ball.dim,
        max_intensity = ball.max_intensity,
        center = ball.center(),
        "generating ball table"
    );

    let stdout = io::stdout();
    let lines = write_table(&ball, BufWriter::new(stdout.lock()))
        .context("failed to write table to stdout")?;

    info!(lines, "table written");
    Ok(())
}
