//! Frame driver for the particle field.
//!
//! The host calls [`Animation::frame`] once per display refresh. The loop has
//! no natural end; it runs until someone holding a [`StopHandle`] stops it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;

use super::field::ParticleField;
use super::render::render;
use super::surface::Surface;

/// Shared stop flag for a running animation. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
	/// Requests the animation to stop. Idempotent.
	pub fn stop(&self) {
		self.0.store(true, Ordering::Relaxed);
	}

	pub fn is_stopped(&self) -> bool {
		self.0.load(Ordering::Relaxed)
	}
}

/// A particle field paired with its stop flag and a frame counter.
pub struct Animation<R> {
	field: ParticleField<R>,
	stop: StopHandle,
	frames: u64,
}

impl<R: Rng> Animation<R> {
	pub fn new(field: ParticleField<R>) -> Self {
		Self {
			field,
			stop: StopHandle::default(),
			frames: 0,
		}
	}

	/// Updates every particle, then draws the frame.
	///
	/// Returns `false` without touching the field or the surface once the
	/// animation has been stopped; the caller should stop scheduling frames.
	pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
		if self.stop.is_stopped() {
			return false;
		}
		self.field.tick();
		render(&self.field, surface);
		self.frames += 1;
		true
	}
}

impl<R> Animation<R> {
	/// A handle that stops this animation from anywhere.
	pub fn stop_handle(&self) -> StopHandle {
		self.stop.clone()
	}

	pub fn is_running(&self) -> bool {
		!self.stop.is_stopped()
	}

	/// Frames rendered so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	pub fn field(&self) -> &ParticleField<R> {
		&self.field
	}

	/// Mutable field access for pointer and resize handlers.
	pub fn field_mut(&mut self) -> &mut ParticleField<R> {
		&mut self.field
	}
}

#[cfg(test)]
mod tests {
	use super::super::config::FieldConfig;
	use super::super::theme::Color;
	use super::super::types::{Point, Viewport};
	use super::*;

	#[derive(Default)]
	struct Counter {
		clears: usize,
		circles: usize,
	}

	impl Surface for Counter {
		fn dimensions(&self) -> Viewport {
			Viewport::new(300.0, 300.0)
		}

		fn clear(&mut self) {
			self.clears += 1;
		}

		fn draw_circle(&mut self, _: Point, _: f64, _: Color) {
			self.circles += 1;
		}

		fn draw_line(&mut self, _: Point, _: Point, _: Color, _: f64) {}
	}

	fn animation() -> Animation<rand::rngs::StdRng> {
		Animation::new(ParticleField::seeded(Viewport::new(300.0, 300.0), FieldConfig::default(), 4))
	}

	#[test]
	fn frames_run_until_stopped() {
		let mut anim = animation();
		let mut surface = Counter::default();
		let handle = anim.stop_handle();

		for _ in 0..5 {
			assert!(anim.frame(&mut surface));
		}
		handle.stop();
		assert!(!anim.frame(&mut surface));
		assert!(!anim.is_running());

		assert_eq!(anim.frames(), 5);
		assert_eq!(surface.clears, 5);
		assert_eq!(surface.circles, 5 * 9);
	}

	#[test]
	fn stopped_frame_leaves_field_untouched() {
		let mut anim = animation();
		anim.stop_handle().stop();
		let before = anim.field().particles().to_vec();
		anim.frame(&mut Counter::default());
		assert_eq!(anim.field().particles(), &before[..]);
	}

	#[test]
	fn stop_is_shared_between_clones() {
		let a = StopHandle::default();
		let b = a.clone();
		assert!(!a.is_stopped());
		b.stop();
		b.stop();
		assert!(a.is_stopped());
	}
}
