//! Fills a canvas with random shapes.
//!
//! Usage: `cargo run --example random_drawing -- [count] [seed]`
//! Prints the SVG to stdout.

use rand::SeedableRng;
use rand::rngs::StdRng;
use shapedraw::random::RandomShapes;
use shapedraw::{Canvas, render_svg};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(5);
    let mut rng = match args.next().and_then(|a| a.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut canvas = Canvas::default();
    let mut source = RandomShapes::new(canvas.bounds());
    for _ in 0..count {
        canvas.add_shape(source.line(&mut rng));
        canvas.add_shape(source.rectangle(&mut rng));
        canvas.add_shape(source.circle(&mut rng));
    }
    tracing::info!(shapes = canvas.len(), "canvas filled");

    println!("{}", render_svg(&mut canvas));
    Ok(())
}
