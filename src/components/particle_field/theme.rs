//! Colors and stroke styling for the particle field.

use serde::Deserialize;

/// RGBA color representation. Channels are 0-255, alpha is 0.0-1.0.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 1.0 when omitted from config.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// The site's accent green, used for particles and their links.
	pub const ACCENT: Color = Color::rgb(107, 189, 143);

	/// Fully opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same hue, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba()` string for canvas fill and stroke styles.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::ACCENT
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn with_alpha_keeps_hue() {
		let c = Color::ACCENT.with_alpha(0.35);
		assert_eq!((c.r, c.g, c.b), (107, 189, 143));
		assert_eq!(c.a, 0.35);
	}

	#[test]
	fn css_uses_rgba_notation() {
		assert_eq!(
			Color::rgba(107, 189, 143, 0.5).to_css(),
			"rgba(107, 189, 143, 0.5)"
		);
	}

	#[test]
	fn alpha_defaults_to_opaque_when_deserialized() {
		let c: Color = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
		assert_eq!(c, Color::rgb(1, 2, 3));
	}
}
