//! Leptos component wrapping the particle background canvas.
//!
//! The canvas fills the viewport behind the page. Window `resize` rebuilds the
//! field at the new size and window `mousemove` feeds the repulsion pointer.
//! An animation loop runs via `requestAnimationFrame` until the component is
//! cleaned up.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{info, warn};
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::animation::Animation;
use super::config::FieldConfig;
use super::field::ParticleField;
use super::surface::CanvasSurface;
use super::types::Viewport;

/// Bundles the running animation with the surface it paints on.
struct CanvasContext {
	animation: Animation<StdRng>,
	surface: CanvasSurface,
}

fn window_viewport(window: &Window) -> Viewport {
	let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn host_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Full-viewport animated particle background.
///
/// `config` overrides the field tunables; set `config.seed` for a
/// reproducible layout.
#[component]
pub fn ParticleCanvas(#[prop(optional)] config: FieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<CanvasContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("particle canvas: no window, background disabled");
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			warn!("particle canvas: 2d context unavailable, background disabled");
			return;
		};

		let viewport = window_viewport(&window);
		let surface = CanvasSurface::new(canvas, ctx);
		surface.set_size(viewport);

		let seed = config.seed.unwrap_or_else(host_seed);
		let animation = Animation::new(ParticleField::seeded(viewport, config.clone(), seed));
		let stop = animation.stop_handle();
		info!("particle canvas: started with seed {seed}");
		*context.borrow_mut() = Some(CanvasContext { animation, surface });

		let context_resize = context.clone();
		let on_resize = window_event_listener(ev::resize, move |_| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let viewport = window_viewport(&win);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.surface.set_size(viewport);
				c.animation.field_mut().resize(viewport);
			}
		});

		let context_pointer = context.clone();
		let on_pointer = window_event_listener(ev::mousemove, move |event| {
			if let Some(ref mut c) = *context_pointer.borrow_mut() {
				c.animation
					.field_mut()
					.set_pointer(event.client_x() as f64, event.client_y() as f64);
			}
		});

		on_cleanup(move || {
			stop.stop();
			on_resize.remove();
			on_pointer.remove();
		});

		let (context_anim, animate_inner) = (context.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			let running = match *context_anim.borrow_mut() {
				Some(ref mut c) => c.animation.frame(&mut c.surface),
				None => false,
			};
			if !running {
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="bg-canvas"
			class="particle-canvas"
			style="position: fixed; inset: 0; z-index: -1; display: block; pointer-events: none;"
		/>
	}
}
