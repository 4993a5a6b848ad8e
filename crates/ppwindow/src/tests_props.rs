//! Property tests shared by both window kinds.
//!
//! Dimensions 1–4, seeded sampling; membership is checked against an
//! independent per-axis / distance computation. The `huge_*` strategies push
//! coordinates, radii and spans toward `f64::MAX`.

use proptest::prelude::*;

use crate::{BallWindow, BoxWindow, Window, WindowError};

fn bounds_strategy() -> impl Strategy<Value = Vec<[f64; 2]>> {
    prop::collection::vec((-100.0f64..100.0, 0.0f64..50.0), 1..=4)
        .prop_map(|pairs| pairs.into_iter().map(|(a, len)| [a, a + len]).collect())
}

fn box_and_point() -> impl Strategy<Value = (Vec<[f64; 2]>, Vec<f64>)> {
    bounds_strategy().prop_flat_map(|bounds| {
        let d = bounds.len();
        (Just(bounds), prop::collection::vec(-200.0f64..200.0, d))
    })
}

fn ball_and_point() -> impl Strategy<Value = (Vec<f64>, f64, Vec<f64>)> {
    (1usize..=4, 0.0f64..50.0).prop_flat_map(|(d, radius)| {
        (
            prop::collection::vec(-100.0f64..100.0, d),
            Just(radius),
            prop::collection::vec(-150.0f64..150.0, d),
        )
    })
}

const HALF_MAX: f64 = f64::MAX / 2.0;

/// Bounds with lows in `[-MAX, -MAX/2)` and highs in `[MAX/2, MAX)`, so every
/// span overflows `f64`.
fn huge_bounds_strategy() -> impl Strategy<Value = Vec<[f64; 2]>> {
    prop::collection::vec((-f64::MAX..-HALF_MAX, HALF_MAX..f64::MAX), 1..=4)
        .prop_map(|pairs| pairs.into_iter().map(|(lo, hi)| [lo, hi]).collect())
}

fn huge_ball() -> impl Strategy<Value = (Vec<f64>, f64)> {
    (1usize..=4, 1e200f64..HALF_MAX).prop_flat_map(|(d, radius)| {
        (prop::collection::vec(-1e300f64..1e300, d), Just(radius))
    })
}

proptest! {
    #[test]
    fn box_contains_agrees_with_axis_checks((bounds, point) in box_and_point()) {
        let b = BoxWindow::new(&bounds).unwrap();
        let expected = bounds
            .iter()
            .zip(&point)
            .all(|(&[lo, hi], &x)| lo <= x && x <= hi);
        prop_assert_eq!(b.contains(&point).unwrap(), expected);
        prop_assert_eq!(b.dimension(), bounds.len());
    }

    #[test]
    fn box_corners_are_contained(bounds in bounds_strategy()) {
        let b = BoxWindow::new(&bounds).unwrap();
        let lows: Vec<f64> = bounds.iter().map(|p| p[0]).collect();
        let highs: Vec<f64> = bounds.iter().map(|p| p[1]).collect();
        prop_assert!(b.contains(&lows).unwrap());
        prop_assert!(b.contains(&highs).unwrap());
    }

    #[test]
    fn ball_contains_agrees_with_distance((center, radius, point) in ball_and_point()) {
        let b = BallWindow::new(&center, radius).unwrap();
        let dist = center
            .iter()
            .zip(&point)
            .map(|(c, x)| (x - c).powi(2))
            .sum::<f64>()
            .sqrt();
        prop_assert_eq!(b.contains(&point).unwrap(), dist <= radius);
        prop_assert_eq!(b.dimension(), center.len());
    }

    #[test]
    fn mismatched_points_always_error(bounds in bounds_strategy(), extra in 1usize..3) {
        let b = BoxWindow::new(&bounds).unwrap();
        let longer = vec![0.0; bounds.len() + extra];
        let is_mismatch = matches!(
            b.contains(&longer),
            Err(WindowError::DimensionMismatch { .. })
        );
        prop_assert!(is_mismatch);
        let ball = BallWindow::unit(None, bounds.len()).unwrap();
        let is_mismatch = matches!(
            ball.contains(&longer),
            Err(WindowError::DimensionMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn box_samples_are_contained(bounds in bounds_strategy(), n in 1usize..40, seed in any::<u64>()) {
        let b = BoxWindow::new(&bounds).unwrap();
        let points = b.rand_seeded(n, Some(seed));
        prop_assert_eq!(points.shape(), (n, bounds.len()));
        prop_assert!(b.indicator_function_rows(&points).unwrap());
    }

    #[test]
    fn ball_samples_are_contained(
        (center, radius, _point) in ball_and_point(),
        n in 1usize..40,
        seed in any::<u64>(),
    ) {
        let b = BallWindow::new(&center, radius).unwrap();
        let points = b.rand_seeded(n, Some(seed));
        prop_assert_eq!(points.shape(), (n, center.len()));
        prop_assert!(b.indicator_function_rows(&points).unwrap());
    }

    #[test]
    fn unit_box_has_unit_volume(center in prop::collection::vec(-10.0f64..10.0, 1..=4)) {
        let b = BoxWindow::unit(Some(&center), center.len()).unwrap();
        prop_assert!((b.volume() - 1.0).abs() < 1e-9);
        prop_assert!(b.contains(&center).unwrap());
    }

    #[test]
    fn huge_box_samples_are_finite_and_contained(
        bounds in huge_bounds_strategy(),
        n in 1usize..40,
        seed in any::<u64>(),
    ) {
        let b = BoxWindow::new(&bounds).unwrap();
        let points = b.rand_seeded(n, Some(seed));
        prop_assert!(points.iter().all(|x| x.is_finite()));
        prop_assert!(b.indicator_function_rows(&points).unwrap());
    }

    #[test]
    fn huge_ball_samples_are_finite_and_contained(
        (center, radius) in huge_ball(),
        n in 1usize..40,
        seed in any::<u64>(),
    ) {
        let b = BallWindow::new(&center, radius).unwrap();
        let points = b.rand_seeded(n, Some(seed));
        prop_assert!(points.iter().all(|x| x.is_finite()));
        prop_assert!(b.indicator_function_rows(&points).unwrap());
    }

    #[test]
    fn huge_ball_contains_points_along_an_axis(
        (center, radius) in huge_ball(),
        axis_pick in any::<prop::sample::Index>(),
        t in 0.0f64..0.99,
        s in 1.01f64..1.9,
    ) {
        let b = BallWindow::new(&center, radius).unwrap();
        let axis = axis_pick.index(center.len());
        let mut inside = center.clone();
        inside[axis] += t * radius;
        prop_assert!(b.contains(&inside).unwrap());
        let mut outside = center.clone();
        outside[axis] -= s * radius;
        prop_assert!(!b.contains(&outside).unwrap());
    }
}
