//! One-shot reveal of page elements as they scroll into view.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Elements revealed on first intersection.
pub const REVEAL_SELECTOR: &str = ".timeline-item, .project-card";
/// Class added to revealed elements. Never removed.
pub const VISIBLE_CLASS: &str = "visible";
const THRESHOLD: f64 = 0.1;
// Trigger 100px before the element clears the bottom edge.
const ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Watches every element matching `selector` and marks it visible the first
/// time it enters the viewport. Returns `None` when the host lacks
/// `IntersectionObserver`.
pub fn observe_reveals(selector: &str) -> Option<IntersectionObserver> {
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		|entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					let target = entry.target();
					let _ = target.class_list().add_1(VISIBLE_CLASS);
					observer.unobserve(&target);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(THRESHOLD));
	options.set_root_margin(ROOT_MARGIN);

	let observer =
		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
			Ok(observer) => observer,
			Err(e) => {
				warn!("reveal: IntersectionObserver unavailable: {e:?}");
				return None;
			}
		};
	// Lives as long as the page.
	callback.forget();

	let nodes = web_sys::window()?
		.document()?
		.query_selector_all(selector)
		.ok()?;
	for i in 0..nodes.length() {
		if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			observer.observe(&el);
		}
	}
	Some(observer)
}

/// Fades the page in once the app has mounted.
pub fn show_body() {
	let body = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body());
	if let Some(body) = body {
		let _ = body.style().set_property("opacity", "1");
	}
}
