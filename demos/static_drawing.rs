//! Draws one of each shape and writes `static_drawing.svg` / `static_drawing.png`.
//!
//! Run with `RUST_LOG=debug cargo run --example static_drawing --features tracing`
//! to see repaint logging.

use shapedraw::form::{CircleForm, LineForm, RectangleForm};
use shapedraw::{Canvas, Color, Line, SolidPen, Thickness, render_raster, render_svg};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut canvas = Canvas::default();

    canvas.add_shape(Line::new(
        SolidPen::new(Color::BLACK).with_thickness(Thickness::new(2)),
        60,
        540,
        740,
        110,
    ));
    canvas.add_shape(
        LineForm {
            x1: "100".into(),
            y1: "500".into(),
            x2: "700".into(),
            y2: "500".into(),
            thickness: 3.0,
        }
        .submit(),
    );
    canvas.add_shape(
        RectangleForm {
            x: "150".into(),
            y: "150".into(),
            width: "200".into(),
            height: "120".into(),
            thickness: 4.0,
        }
        .submit(),
    );
    canvas.add_shape(
        CircleForm {
            cx: "500".into(),
            cy: "300".into(),
            radius: "100".into(),
            thickness: 2.0,
        }
        .submit(),
    );

    let svg = render_svg(&mut canvas);
    std::fs::write("static_drawing.svg", svg).map_err(shapedraw::SurfaceError::from)?;

    let raster = render_raster(&mut canvas)?;
    raster.save_png("static_drawing.png")?;

    println!("wrote static_drawing.svg and static_drawing.png ({} shapes)", canvas.len());
    Ok(())
}
