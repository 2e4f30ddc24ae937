//! Frame rendering for the particle field.
//!
//! Passes run in a fixed order so a frame is a consistent snapshot:
//! 1. Clear
//! 2. Every particle as a filled circle
//! 3. Every link between nearby particles

use super::field::ParticleField;
use super::surface::Surface;

/// Paints the field's current state onto `surface`.
pub fn render<R, S: Surface + ?Sized>(field: &ParticleField<R>, surface: &mut S) {
	let config = field.config();

	surface.clear();

	for p in field.particles() {
		surface.draw_circle(p.position(), p.radius(), config.color.with_alpha(p.opacity()));
	}

	for link in field.links() {
		surface.draw_line(
			link.a,
			link.b,
			config.color.with_alpha(link.opacity),
			config.link_width,
		);
	}
}

#[cfg(test)]
mod tests {
	use super::super::config::FieldConfig;
	use super::super::particles::Particle;
	use super::super::theme::Color;
	use super::super::types::{Point, Viewport};
	use super::*;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear,
		Circle(Point, f64, Color),
		Line(Point, Point, Color, f64),
	}

	#[derive(Default)]
	struct Recorder {
		ops: Vec<Op>,
	}

	impl Surface for Recorder {
		fn dimensions(&self) -> Viewport {
			Viewport::new(400.0, 400.0)
		}

		fn clear(&mut self) {
			self.ops.push(Op::Clear);
		}

		fn draw_circle(&mut self, center: Point, radius: f64, fill: Color) {
			self.ops.push(Op::Circle(center, radius, fill));
		}

		fn draw_line(&mut self, a: Point, b: Point, stroke: Color, width: f64) {
			self.ops.push(Op::Line(a, b, stroke, width));
		}
	}

	/// A 200x100 field holds exactly two particles; pin them in place.
	fn pair(a: (f64, f64), b: (f64, f64)) -> ParticleField {
		let mut field = ParticleField::seeded(Viewport::new(200.0, 100.0), FieldConfig::default(), 11);
		let slots = field.particles_mut();
		assert_eq!(slots.len(), 2);
		slots[0] = Particle::new(Point::new(a.0, a.1), Point::default(), 2.0, 0.4);
		slots[1] = Particle::new(Point::new(b.0, b.1), Point::default(), 3.0, 0.6);
		field
	}

	#[test]
	fn clear_then_circles_then_lines() {
		let field = pair((10.0, 10.0), (85.0, 10.0));
		let mut recorder = Recorder::default();
		render(&field, &mut recorder);

		assert_eq!(recorder.ops.len(), 4);
		assert_eq!(recorder.ops[0], Op::Clear);
		assert_eq!(
			recorder.ops[1],
			Op::Circle(Point::new(10.0, 10.0), 2.0, Color::ACCENT.with_alpha(0.4))
		);
		assert_eq!(
			recorder.ops[2],
			Op::Circle(Point::new(85.0, 10.0), 3.0, Color::ACCENT.with_alpha(0.6))
		);
		match &recorder.ops[3] {
			Op::Line(a, b, stroke, width) => {
				assert_eq!((*a, *b), (Point::new(10.0, 10.0), Point::new(85.0, 10.0)));
				assert_eq!((stroke.r, stroke.g, stroke.b), (107, 189, 143));
				assert!((stroke.a - 0.1).abs() < 1e-12);
				assert_eq!(*width, 1.0);
			}
			other => panic!("expected a line, got {other:?}"),
		}
	}

	#[test]
	fn distant_pair_draws_no_line() {
		let field = pair((0.0, 0.0), (150.0, 0.0));
		let mut recorder = Recorder::default();
		render(&field, &mut recorder);
		assert_eq!(recorder.ops.len(), 3);
		assert!(!recorder.ops.iter().any(|op| matches!(op, Op::Line(..))));
	}

	#[test]
	fn empty_field_only_clears() {
		let field = ParticleField::seeded(Viewport::new(50.0, 50.0), FieldConfig::default(), 0);
		let mut recorder = Recorder::default();
		render(&field, &mut recorder);
		assert_eq!(recorder.ops, vec![Op::Clear]);
	}
}
