// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_vector::prelude::*;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Decimal Vector Example ===\n");

    let config = VectorConfig::reference();
    println!("Working precision: {}\n", config.precision);

    // Elementwise arithmetic
    let a = Vector::new(["8.218", "-9.341"])?;
    let b = Vector::new(["-1.129", "2.111"])?;
    println!("{} + {} = {}", a, b, a.add(&b)?);
    println!("{} - {} = {}", a, b, a.subtract(&b)?);
    println!("7.41 * {} = {}\n", a, a.scale("7.41")?);

    // Magnitude and direction
    let v = Vector::new([-0.221, 7.437])?;
    println!("|{}| = {}", v, v.magnitude()?);
    println!("direction of {} = {}\n", v, v.normalize()?);

    // Angles and relationships
    let x = Vector::new([3.183, -7.627])?;
    let y = Vector::new([-2.668, 5.319])?;
    println!("angle({}, {}) = {} rad", x, y, x.angle(&y, AngleUnit::Radians)?);
    println!("parallel: {}", x.is_parallel(&y)?);
    println!("orthogonal: {}\n", x.is_orthogonal(&y)?);

    // Decomposition against a basis
    let basis = Vector::new([0.825, 2.036])?;
    let w = Vector::new([3.039, 1.879])?;
    println!("parallel component: {}", w.component_parallel_to(&basis)?);
    println!("orthogonal component: {}\n", w.component_orthogonal_to(&basis)?);

    // Three-dimensional products
    let p = Vector::new([8.462, 7.893, -8.187])?;
    let q = Vector::new([6.984, -5.975, 4.778])?;
    println!("{} x {} = {}", p, q, p.cross(&q)?);
    println!("parallelogram area: {}", p.area_of_parallelogram_with(&q)?);
    println!("triangle area: {}\n", p.area_of_triangle_with(&q)?);

    // Failures are typed errors, not panics
    let zero = Vector::zero(2, config)?;
    if let Err(err) = zero.normalize() {
        println!("normalize zero vector: {}", err);
    }
    if let Err(err) = a.cross(&p) {
        println!("cross 2D with 3D: {}", err);
    }

    Ok(())
}
