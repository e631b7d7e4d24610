#![no_main]
use green_score::scoring::{base_score_from_points, GreenScoreGrade};
use libfuzzer_sys::fuzz_target;

/// Fuzz the impact-points transform with arbitrary bit patterns,
/// including NaN, infinities and subnormals.
fuzz_target!(|points: f64| {
    let score = base_score_from_points(points);
    assert!((0.0..=100.0).contains(&score));
    let _ = GreenScoreGrade::from_score(score).letter();
});
