pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Returns `true` if `a` and `b` differ by less than [`TOLERANCE`].
#[must_use]
pub fn are_equal(a: f64, b: f64) -> bool {
    (b - a).abs() < TOLERANCE
}

/// `a <= b`, accepting values that exceed `b` by less than [`TOLERANCE`].
#[must_use]
pub fn is_less_or_equal(a: f64, b: f64) -> bool {
    a < b + TOLERANCE
}

/// `a >= b`, accepting values below `b` by less than [`TOLERANCE`].
#[must_use]
pub fn is_greater_or_equal(a: f64, b: f64) -> bool {
    a > b - TOLERANCE
}
