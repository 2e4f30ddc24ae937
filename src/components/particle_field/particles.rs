//! A single drifting background particle.

use rand::Rng;

use super::config::FieldConfig;
use super::types::{Point, Viewport};

/// A single floating particle.
///
/// Radius and opacity are fixed at spawn time and only exposed read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Horizontal drift per frame.
	pub vx: f64,
	/// Vertical drift per frame.
	pub vy: f64,
	radius: f64,
	opacity: f64,
}

/// Uniform draw from `[lo, hi)`; collapses to `lo` for an empty range.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	lo + rng.random::<f64>() * (hi - lo)
}

impl Particle {
	/// Builds a particle from explicit values.
	pub fn new(position: Point, velocity: Point, radius: f64, opacity: f64) -> Self {
		Self {
			x: position.x,
			y: position.y,
			vx: velocity.x,
			vy: velocity.y,
			radius,
			opacity,
		}
	}

	/// Spawns a particle somewhere inside `viewport` with randomized drift,
	/// radius and opacity.
	pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, config: &FieldConfig) -> Self {
		let x = rng.random::<f64>() * viewport.width;
		let y = rng.random::<f64>() * viewport.height;
		let radius = uniform(rng, config.radius_min, config.radius_max);
		let vx = uniform(rng, -config.drift_speed, config.drift_speed);
		let vy = uniform(rng, -config.drift_speed, config.drift_speed);
		let opacity = uniform(rng, config.opacity_min, config.opacity_max);

		Self {
			x,
			y,
			vx,
			vy,
			radius,
			opacity,
		}
	}

	/// Current position.
	pub fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}

	pub fn radius(&self) -> f64 {
		self.radius
	}

	pub fn opacity(&self) -> f64 {
		self.opacity
	}

	/// Advances one frame: drift, pointer repulsion, then edge reflection.
	///
	/// The repulsion push is the raw pointer offset over the divisor, so it
	/// is strongest at the edge of the radius and zero on the pointer itself.
	/// Reflection only flips velocity; the position is left where it landed
	/// and may sit just outside the bounds for a frame.
	pub fn update(&mut self, pointer: Point, viewport: Viewport, config: &FieldConfig) {
		self.x += self.vx;
		self.y += self.vy;

		let (dx, dy) = (pointer.x - self.x, pointer.y - self.y);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance < config.repulsion_radius {
			self.x -= dx / config.repulsion_divisor;
			self.y -= dy / config.repulsion_divisor;
		}

		if self.x < 0.0 || self.x > viewport.width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > viewport.height {
			self.vy = -self.vy;
		}
	}
}
