//! Classifies a fixed set of sample points against each shape and logs the
//! results.
//!
//! ```text
//! cargo run --example classify
//! RUST_LOG=geopred=trace cargo run --example classify
//! ```

use geopred::{
    is_point_in_rect, signed_volume, Circle, Containment, Ellipse, Point2, Point3, Rect, Triangle,
    TriangleAlgorithm, Vector2,
};

fn main() {
    // Default: WARN for everything, INFO for this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geopred=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("classify=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let triangle = Triangle::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    );
    let circle = Circle::new(Point2::new(0.0, 0.0), 2.0);
    let ellipse = Ellipse::new(Point2::new(0.0, 0.0), Vector2::new(2.0, 1.0), 0.3);
    let by_orientation = triangle.with_algorithm(TriangleAlgorithm::Orientation);
    let by_area = triangle.with_algorithm(TriangleAlgorithm::AreaSum);
    let rect = Rect::new(Point2::new(0.0, 0.0), Vector2::new(2.0, 2.0), 0.0);
    let shapes: [(&str, &dyn Containment); 6] = [
        ("circle", &circle),
        ("ellipse", &ellipse),
        ("triangle/barycentric", &triangle),
        ("triangle/orientation", &by_orientation),
        ("triangle/area", &by_area),
        ("rect", &rect),
    ];
    let samples = [
        Point2::new(0.0, 0.0),
        Point2::new(0.25, 0.25),
        Point2::new(0.5, 0.5),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 0.0),
        Point2::new(2.0, 2.0),
    ];

    for (name, shape) in shapes {
        for point in &samples {
            let location = shape.locate(point);
            tracing::info!(shape = name, x = point.x, y = point.y, ?location, "classified");
        }
    }

    let volume = signed_volume(
        &Point3::new(1.0, 0.0, 0.0),
        &Point3::new(0.0, 1.0, 0.0),
        &Point3::new(0.0, 0.0, 1.0),
        &Point3::origin(),
    );
    tracing::info!(volume, "unit tetrahedron");

    if let Err(err) = is_point_in_rect(
        &Point2::new(0.0, 0.0),
        &Vector2::new(2.0, 2.0),
        0.0,
        &Point2::new(0.0, 0.0),
    ) {
        tracing::info!(%err, "direct rectangle test unavailable");
    }
}
