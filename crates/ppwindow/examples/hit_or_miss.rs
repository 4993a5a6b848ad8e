//! Hit-or-miss volume probe for the unit ball.
//!
//! Purpose
//! - Cross-check the closed-form n-ball volume against sampling: draw points
//!   uniformly in the bounding box, count how many land in the ball, and scale
//!   by the box volume.
//! - Exercise both windows end to end with a fixed seed.

use std::time::Instant;

use ppwindow::prelude::*;

fn main() -> Result<(), WindowError> {
    let samples = 200_000;
    let mut rng = random_source(Some(2021));
    for dimension in 1..=6 {
        let ball = BallWindow::unit(None, dimension)?;
        let cube = ball.bounding_box()?;

        let start = Instant::now();
        let points = cube.rand(samples, &mut rng);
        let mut hits = 0usize;
        let mut row = vec![0.0; dimension];
        for r in points.row_iter() {
            row.iter_mut().zip(r.iter()).for_each(|(dst, &src)| *dst = src);
            if ball.contains(&row)? {
                hits += 1;
            }
        }
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        let estimate = cube.volume() * hits as f64 / samples as f64;

        println!(
            "d={dimension} exact={:.6} estimate={estimate:.6} rel_err={:.2e} time_ms={elapsed_ms:.1}",
            ball.volume(),
            (estimate - ball.volume()).abs() / ball.volume()
        );
    }
    Ok(())
}
