//! Small numeric helpers shared by the bases and combinators.

/// Split `x` into its lattice cell and the offset inside that cell.
///
/// The offset is taken against the `f64` floor, so it stays in `[0, 1]` for
/// every finite `x`, including magnitudes past `i64::MAX` where the cell index
/// saturates. Exact negative integers like `-3.0` land in cell `-3`, not `-4`.
#[inline]
#[must_use]
pub fn split_floor(x: f64) -> (i64, f64) {
    let floor = x.floor();
    (floor as i64, x - floor)
}

/// Quintic fade `6t^5 - 15t^4 + 10t^3`; flat first and second derivative at 0 and 1.
#[inline]
#[must_use]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
