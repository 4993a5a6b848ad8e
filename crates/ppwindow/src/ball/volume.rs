//! Closed-form n-ball volumes.
//!
//! Formulas (R = radius)
//! - even n: π^(n/2) · R^n / (n/2)!
//! - odd n:  2^((n+1)/2) · π^((n-1)/2) · R^n / (1·3·5···n)
//!
//! Factorial and odd product are integer products carried in `f64`; they are
//! exact while the result stays below 2^53 (n/2 ≤ 18, n ≤ 31 for the odd product).

use std::f64::consts::PI;

/// Volume of the unit ball in R^n. `n = 0` gives 1 (a point of unit measure).
pub fn unit_ball_volume(n: usize) -> f64 {
    if n % 2 == 0 {
        let k = n / 2;
        PI.powi(k as i32) / factorial(k)
    } else {
        let k = (n - 1) / 2;
        2f64.powi((k + 1) as i32) * PI.powi(k as i32) / odd_product(n)
    }
}

/// Volume of a ball of `radius` in R^n.
pub fn ball_volume(n: usize, radius: f64) -> f64 {
    unit_ball_volume(n) * radius.powi(n as i32)
}

fn factorial(k: usize) -> f64 {
    (1..=k).map(|i| i as f64).product()
}

/// 1 · 3 · 5 ··· n for odd `n`.
fn odd_product(n: usize) -> f64 {
    (1..=n).step_by(2).map(|i| i as f64).product()
}
