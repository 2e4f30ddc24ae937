//! Tunables for particle sizing, motion, pointer repulsion and links.
//!
//! Defaults reproduce the portfolio background as designed. Any subset of the
//! fields can be overridden from the `background` object of the site data.

use serde::Deserialize;

use super::theme::Color;

/// Configuration for a [`ParticleField`](super::ParticleField).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Hard cap on the particle count, whatever the viewport area.
	pub max_particles: usize,
	/// One particle is spawned per this many square pixels.
	pub area_per_particle: f64,
	/// Velocity components are drawn from `[-drift_speed, drift_speed)`.
	pub drift_speed: f64,
	/// Lower bound (inclusive) of the particle radius.
	pub radius_min: f64,
	/// Upper bound (exclusive) of the particle radius.
	pub radius_max: f64,
	/// Lower bound (inclusive) of the particle opacity.
	pub opacity_min: f64,
	/// Upper bound (exclusive) of the particle opacity.
	pub opacity_max: f64,
	/// Pointer distance under which particles are pushed away.
	pub repulsion_radius: f64,
	/// The push is the pointer offset divided by this.
	pub repulsion_divisor: f64,
	/// Particle distance under which a link line is drawn.
	pub link_distance: f64,
	/// Link opacity for coincident particles, fading linearly to zero.
	pub link_opacity: f64,
	/// Link stroke width in pixels.
	pub link_width: f64,
	/// Hue shared by particles and links.
	pub color: Color,
	/// Fixed generator seed. Drawn from the host when absent.
	pub seed: Option<u64>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			max_particles: 100,
			area_per_particle: 10_000.0,
			drift_speed: 0.25,
			radius_min: 1.0,
			radius_max: 4.0,
			opacity_min: 0.2,
			opacity_max: 0.7,
			repulsion_radius: 100.0,
			repulsion_divisor: 50.0,
			link_distance: 150.0,
			link_opacity: 0.2,
			link_width: 1.0,
			color: Color::ACCENT,
			seed: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_override_keeps_other_defaults() {
		let config: FieldConfig =
			serde_json::from_str(r#"{"max_particles": 40, "seed": 7}"#).unwrap();
		assert_eq!(config.max_particles, 40);
		assert_eq!(config.seed, Some(7));
		assert_eq!(config.link_distance, 150.0);
		assert_eq!(config.color, Color::ACCENT);
	}

	#[test]
	fn empty_object_is_default() {
		let config: FieldConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, FieldConfig::default());
	}
}
