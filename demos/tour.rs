//! Walks through the vector API.
//!
//! ```text
//! cargo run --example tour
//! RUST_LOG=vectra=debug cargo run --example tour   # show rejected arguments
//! ```

use serde_json::json;
use vectra::{vector2, vector3, Vector2, Vector3, VectorError};

fn main() -> Result<(), VectorError> {
    // Default: WARN for everything, INFO for the tour, DEBUG for vectra.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tour=info".parse().unwrap_or_default())
        .add_directive("vectra=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut position = Vector2::new(3.0, 4.0)?;
    position.add(1.0).multiply(&Vector2::of(2.0, Some(0.5))?);
    tracing::info!(%position, mag = position.mag(), "moved");

    position.normalize().rotate(std::f64::consts::FRAC_PI_2);
    tracing::info!(%position, heading = position.heading(), "turned");

    let parsed = Vector2::from_value(&json!({ "x": 1, "y": 1, "label": "spawn" }))?;
    let midpoint = vector2::lerp(&parsed, &Vector2::zero(), 0.5)?;
    tracing::info!(%midpoint, distance = vector2::distance(&parsed, &midpoint)?, "interpolated");

    let mut normal = Vector3::right();
    normal.cross(&Vector3::back())?;
    let bounds = vector3::max(&[normal, Vector3::up(), Vector3::one()])?;
    tracing::info!(%normal, %bounds, json = %bounds.to_json(), "3d");

    if let Err(err) = position.divide(0.0) {
        tracing::warn!(%err, "division refused");
    }
    if let Err(err) = Vector3::from_value(&json!([1, 2])) {
        tracing::warn!(%err, "parse refused");
    }

    Ok(())
}
