//! Geometry shared by the field, its renderer and the drawing surface.

/// A location in surface pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the left edge.
	pub x: f64,
	/// Vertical offset from the top edge.
	pub y: f64,
}

impl Point {
	/// Shorthand constructor.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Drawable surface dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
}

impl Viewport {
	/// Shorthand constructor.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Surface area, clamped so negative or NaN dimensions count as empty.
	pub fn area(self) -> f64 {
		let area = self.width * self.height;
		if area.is_nan() { 0.0 } else { area.max(0.0) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn distance_is_symmetric() {
		let (a, b) = (Point::new(0.0, 0.0), Point::new(3.0, 4.0));
		assert_eq!(a.distance(b), 5.0);
		assert_eq!(b.distance(a), 5.0);
	}

	#[test]
	fn degenerate_area_is_zero() {
		assert_eq!(Viewport::new(-10.0, 50.0).area(), 0.0);
		assert_eq!(Viewport::new(f64::NAN, 50.0).area(), 0.0);
		assert_eq!(Viewport::new(800.0, 600.0).area(), 480_000.0);
	}
}
