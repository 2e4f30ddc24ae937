//! Particle field state: the particle sequence plus the pointer and viewport
//! it reacts to.
//!
//! The field is rebuilt wholesale whenever the viewport is set, including on
//! construction. Nothing is carried across a rebuild: positions, drift and
//! attributes are all redrawn from the field's generator.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::FieldConfig;
use super::particles::Particle;
use super::types::{Point, Viewport};

/// A line between two nearby particles, ready to be stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle.
	pub from: usize,
	/// Index of the second particle, always greater than `from`.
	pub to: usize,
	/// Position of the first particle.
	pub a: Point,
	/// Position of the second particle.
	pub b: Point,
	/// Stroke alpha, already faded by distance.
	pub opacity: f64,
}

/// Stroke alpha for two particles `distance` apart, or `None` when they are
/// too far apart to be linked.
///
/// Falls off linearly from `link_opacity` at distance zero to zero at
/// `link_distance`; the threshold itself is excluded.
pub fn link_opacity(distance: f64, config: &FieldConfig) -> Option<f64> {
	if distance < config.link_distance {
		Some(config.link_opacity * (1.0 - distance / config.link_distance))
	} else {
		None
	}
}

/// Owns the particles together with the shared pointer and viewport.
///
/// Created once when the canvas mounts, then mutated each frame by the
/// animation loop and by the pointer/resize handlers.
pub struct ParticleField<R = StdRng> {
	particles: Vec<Particle>,
	pointer: Point,
	viewport: Viewport,
	config: FieldConfig,
	rng: R,
}

impl ParticleField<StdRng> {
	/// Field backed by a deterministic generator.
	pub fn seeded(viewport: Viewport, config: FieldConfig, seed: u64) -> Self {
		Self::new(viewport, config, StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> ParticleField<R> {
	pub fn new(viewport: Viewport, config: FieldConfig, rng: R) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			pointer: Point::default(),
			viewport,
			config,
			rng,
		};
		field.initialize();
		field
	}

	/// Number of particles a viewport gets: one per `area_per_particle`
	/// square pixels, rounded down, capped at `max_particles`.
	pub fn particle_count(viewport: Viewport, config: &FieldConfig) -> usize {
		let per_area = (viewport.area() / config.area_per_particle).floor();
		// NaN and negatives saturate to 0.
		(per_area as usize).min(config.max_particles)
	}

	/// Discards every particle and spawns a fresh sequence for the current
	/// viewport.
	pub fn initialize(&mut self) {
		let count = Self::particle_count(self.viewport, &self.config);
		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			let particle = Particle::spawn(&mut self.rng, self.viewport, &self.config);
			self.particles.push(particle);
		}
		debug!(
			"particle field: {} particles for {}x{}",
			count, self.viewport.width, self.viewport.height
		);
	}

	/// Adopts new surface dimensions and rebuilds the field.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.initialize();
	}

	/// Advances every particle by one frame.
	pub fn tick(&mut self) {
		let (pointer, viewport) = (self.pointer, self.viewport);
		for p in &mut self.particles {
			p.update(pointer, viewport, &self.config);
		}
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Point::new(x, y);
	}
}

impl<R> ParticleField<R> {
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Mutable access for callers that place particles by hand.
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	/// Last reported pointer position, `(0, 0)` until the first move.
	pub fn pointer(&self) -> Point {
		self.pointer
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Every unordered pair `(i, j)` with `i < j` closer than the link
	/// distance, in index order.
	pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
		let particles = &self.particles;
		(0..particles.len()).flat_map(move |i| {
			let a = particles[i].position();
			(i + 1..particles.len()).filter_map(move |j| {
				let b = particles[j].position();
				link_opacity(a.distance(b), &self.config).map(|opacity| Link {
					from: i,
					to: j,
					a,
					b,
					opacity,
				})
			})
		})
	}
}
