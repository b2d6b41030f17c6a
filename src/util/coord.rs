use geo_types::{Coord, Point};

/// Trait for types that can provide a longitude/latitude pair.
///
/// Implemented for `(f64, f64)` and `(f32, f32)` tuples, `geo_types::Point<f64>`
/// and `geo_types::Coord<f64>`, so grid functions accept any of them.
///
/// Behaviour for NaN or infinite components is unspecified. Callers must not
/// rely on what the grid functions return for them.
pub trait Coordinate {
    /// Returns the longitude in degrees.
    fn lon(&self) -> f64;
    /// Returns the latitude in degrees.
    fn lat(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl Coordinate for (f32, f32) {
    fn lon(&self) -> f64 {
        widen(self.0)
    }
    fn lat(&self) -> f64 {
        widen(self.1)
    }
}

impl Coordinate for Point<f64> {
    fn lon(&self) -> f64 {
        Point::x(*self)
    }
    fn lat(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn lon(&self) -> f64 {
        self.x
    }
    fn lat(&self) -> f64 {
        self.y
    }
}

/// Widens an `f32` to the `f64` nearest its shortest decimal form.
///
/// `-74.05f32` is stored as `-74.05000305...`; a plain `as f64` cast keeps that
/// error and pushes boundary points off the grid. Going through the decimal
/// text recovers `-74.05`.
///
/// This formats and parses each component, so `(f32, f32)` coordinates cost a
/// small allocation per axis. Bulk callers that already hold `f64` values
/// should pass `(f64, f64)` or `Point<f64>`, which skip it.
pub fn widen(value: f32) -> f64 {
    if !value.is_finite() {
        return f64::from(value);
    }
    value.to_string().parse().unwrap_or(f64::from(value))
}
