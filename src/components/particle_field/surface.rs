//! Drawing seam between the particle renderer and whatever it paints on.

use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::Color;
use super::types::{Point, Viewport};

/// The handful of primitives the particle renderer needs.
pub trait Surface {
	/// Current drawable size.
	fn dimensions(&self) -> Viewport;
	/// Wipes the whole surface.
	fn clear(&mut self);
	/// Fills a circle.
	fn draw_circle(&mut self, center: Point, radius: f64, fill: Color);
	/// Strokes a straight segment.
	fn draw_line(&mut self, a: Point, b: Point, stroke: Color, width: f64);
}

/// A 2D canvas context together with the canvas it draws into.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}

	/// Resizes the backing canvas, which also clears it.
	pub fn set_size(&self, viewport: Viewport) {
		self.canvas.set_width(viewport.width as u32);
		self.canvas.set_height(viewport.height as u32);
	}
}

impl Surface for CanvasSurface {
	fn dimensions(&self) -> Viewport {
		Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn clear(&mut self) {
		let Viewport { width, height } = self.dimensions();
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn draw_circle(&mut self, center: Point, radius: f64, fill: Color) {
		self.ctx.set_fill_style_str(&fill.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
		self.ctx.fill();
	}

	fn draw_line(&mut self, a: Point, b: Point, stroke: Color, width: f64) {
		self.ctx.set_stroke_style_str(&stroke.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(a.x, a.y);
		self.ctx.line_to(b.x, b.y);
		self.ctx.stroke();
	}
}
