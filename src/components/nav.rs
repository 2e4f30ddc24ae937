//! Fixed navigation bar: burger menu toggle and scroll-spy highlighting.

use leptos::ev;
use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Added to the scroll position before matching sections, so a section
/// becomes current a little before its top reaches the top of the window.
pub const SCROLL_SPY_OFFSET: f64 = 200.0;

/// A navigation entry pointing at a page section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SectionLink {
	/// Section element id, without the leading `#`.
	pub id: String,
	/// Link text.
	pub label: String,
}

/// Measured vertical extent of a page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
	pub id: String,
	pub top: f64,
	pub height: f64,
}

impl SectionBounds {
	/// Whether document offset `y` falls inside the section (top inclusive).
	pub fn contains(&self, y: f64) -> bool {
		y >= self.top && y < self.top + self.height
	}
}

/// Id of the section under the scroll-spy probe, if any.
///
/// When sections overlap the last one in document order wins.
pub fn current_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
	let probe = scroll_y + SCROLL_SPY_OFFSET;
	sections
		.iter()
		.rev()
		.find(|s| s.contains(probe))
		.map(|s| s.id.as_str())
}

fn measure_sections() -> Vec<SectionBounds> {
	let Ok(nodes) = document().query_selector_all("section") else {
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|i| nodes.item(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.map(|el| SectionBounds {
			id: el.id(),
			top: el.offset_top() as f64,
			height: el.offset_height() as f64,
		})
		.collect()
}

/// Top navigation with a collapsible menu for narrow screens.
///
/// Clicking the burger toggles the menu; following any link closes it. The
/// link for the section currently under the scroll-spy probe is marked
/// `active`, and keeps that mark while the probe sits between sections.
#[component]
pub fn NavBar(links: Vec<SectionLink>) -> impl IntoView {
	let menu_open = RwSignal::new(false);
	let current = RwSignal::new(None::<String>);

	let on_scroll = window_event_listener(ev::scroll, move |_| {
		let scroll_y = window().scroll_y().unwrap_or(0.0);
		let sections = measure_sections();
		if let Some(id) = current_section(scroll_y, &sections) {
			if current.with_untracked(|c| c.as_deref() != Some(id)) {
				current.set(Some(id.to_string()));
			}
		}
	});
	on_cleanup(move || on_scroll.remove());

	let items = links
		.into_iter()
		.map(|link| {
			let SectionLink { id, label } = link;
			let href = format!("#{id}");
			let is_current = move || current.with(|c| c.as_deref() == Some(id.as_str()));
			view! {
				<li>
					<a href=href class:active=is_current on:click=move |_| menu_open.set(false)>
						{label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<nav class="navbar">
			<ul id="navMenu" class="nav-menu" class:active=move || menu_open.get()>
				{items}
			</ul>
			<button
				id="burger"
				class="burger"
				aria-label="Menu"
				class:active=move || menu_open.get()
				on:click=move |_| menu_open.update(|open| *open = !*open)
			>
				<span></span>
				<span></span>
				<span></span>
			</button>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sections() -> Vec<SectionBounds> {
		[("accueil", 0.0, 700.0), ("parcours", 700.0, 900.0), ("projets", 1600.0, 800.0)]
			.into_iter()
			.map(|(id, top, height)| SectionBounds {
				id: id.to_string(),
				top,
				height,
			})
			.collect()
	}

	#[test]
	fn probe_is_offset_from_scroll_position() {
		let s = sections();
		assert_eq!(current_section(0.0, &s), Some("accueil"));
		assert_eq!(current_section(499.0, &s), Some("accueil"));
		assert_eq!(current_section(500.0, &s), Some("parcours"));
		assert_eq!(current_section(1400.0, &s), Some("projets"));
	}

	#[test]
	fn past_the_last_section_nothing_matches() {
		assert_eq!(current_section(2200.0, &sections()), None);
		assert_eq!(current_section(0.0, &[]), None);
	}

	#[test]
	fn overlapping_sections_prefer_the_later_one() {
		let mut s = sections();
		s[1].height = 2000.0;
		assert_eq!(current_section(1500.0, &s), Some("projets"));
	}

	#[test]
	fn links_deserialize() {
		let links: Vec<SectionLink> =
			serde_json::from_str(r#"[{"id": "contact", "label": "Contact"}]"#).unwrap();
		assert_eq!(links[0].id, "contact");
	}
}
