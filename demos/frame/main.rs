//! Frame demo: a few bodies, one collision sweep, one rendered frame.
//!
//! Usage:
//! ```text
//! cargo run --example frame
//! RUST_LOG=geoscan=debug cargo run --example frame
//! ```

use geoscan::collision::BodyStore;
use geoscan::geometry::{Circle, Geometric, Point, Rectangle, Shape, Square, Triangle, Vector};
use geoscan::raster::{RenderItem, RenderSettings, Renderer};
use geoscan::Result;
use tracing::info;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this demo and geoscan.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geoscan=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("frame=info".parse().unwrap_or_default())
        .add_directive("geoscan=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let walls = Rectangle::from_corners(Point::new(0.0, 0.0)?, Point::new(39.0, 14.0)?)?;
    let crate_box = Square::with_side(Point::new(6.0, 3.0)?, 5.0)?;
    let ball = Circle::new(Point::new(20.0, 7.0)?, 4.0)?;
    let ramp = Triangle::new([
        Point::new(24.0, 2.0)?,
        Point::new(36.0, 2.0)?,
        Point::new(30.0, 10.0)?,
    ])?;

    let mut store = BodyStore::new();
    store.insert(walls.clone(), true);
    let crate_id = store.insert(crate_box.clone(), false);
    let ball_id = store.insert(ball, false);
    let ramp_id = store.insert(ramp.clone(), false);

    let pairs = store.sweep();
    info!(bodies = store.len(), pairs, "first sweep");

    // Roll the ball onto the ramp and sweep again.
    let rolled = ball.translate(Vector::new(5.0, 0.0))?;
    store.set_shape(ball_id, rolled)?;
    let pairs = store.sweep();
    info!(
        pairs,
        ball_hits = store.body(ball_id)?.hits().len(),
        ramp_hits = store.body(ramp_id)?.hits().len(),
        "second sweep"
    );

    let food: Shape = Circle::new(Point::new(14.0, 11.0)?, 1.0)?.into();
    info!(blocked = store.collides_any(&food), "food placement");

    let items = [
        RenderItem::new(walls.clone()),
        RenderItem::new(crate_box).filled(true).glyph('='),
        RenderItem::new(ramp).glyph('/'),
        RenderItem::new(rolled).filled(true).layer(1).glyph('o'),
        RenderItem::new(food).glyph('*'),
    ];
    let renderer = Renderer::new(RenderSettings {
        background: '.',
        ..RenderSettings::default()
    });
    let frame = renderer.render(&walls, &items);
    info!(crate_hits = store.body(crate_id)?.hits().len(), "rendered");
    print!("{frame}");
    Ok(())
}
