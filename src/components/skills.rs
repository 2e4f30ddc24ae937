//! Collapsible skill categories.

use leptos::prelude::*;
use serde::Deserialize;

/// A titled group of skills.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkillCategory {
	pub name: String,
	/// Font Awesome icon class for the header.
	pub icon: String,
	pub items: Vec<String>,
}

/// Open/closed flags for a fixed number of panels, all closed initially.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelSet {
	open: Vec<bool>,
}

impl PanelSet {
	pub fn new(count: usize) -> Self {
		Self {
			open: vec![false; count],
		}
	}

	/// Flips one panel. Out-of-range indices are ignored; returns whether
	/// anything changed.
	pub fn toggle(&mut self, index: usize) -> bool {
		match self.open.get_mut(index) {
			Some(open) => {
				*open = !*open;
				true
			}
			None => false,
		}
	}

	pub fn is_open(&self, index: usize) -> bool {
		self.open.get(index).copied().unwrap_or(false)
	}
}

/// One panel per category; clicking a header expands or collapses it
/// independently of the others.
#[component]
pub fn SkillPanels(categories: Vec<SkillCategory>) -> impl IntoView {
	let panels = RwSignal::new(PanelSet::new(categories.len()));

	categories
		.into_iter()
		.enumerate()
		.map(|(index, category)| {
			let is_open = move || panels.with(|p| p.is_open(index));
			let items = category
				.items
				.into_iter()
				.map(|item| view! { <li>{item}</li> })
				.collect_view();
			view! {
				<div class="skill-category">
					<div
						class="skill-header"
						on:click=move |_| {
							panels.update(|p| {
								p.toggle(index);
							})
						}
					>
						<h3>
							<i class=category.icon></i>
							" "
							{category.name}
						</h3>
						<span class="skill-toggle" class:active=is_open>
							"▾"
						</span>
					</div>
					<div class="skill-content" class:active=is_open>
						<ul>{items}</ul>
					</div>
				</div>
			}
		})
		.collect_view()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn panels_toggle_independently() {
		let mut panels = PanelSet::new(3);
		assert!(panels.toggle(1));
		assert!(panels.is_open(1));
		assert!(!panels.is_open(0));
		assert!(!panels.is_open(2));
		panels.toggle(1);
		assert!(!panels.is_open(1));
	}

	#[test]
	fn out_of_range_toggle_is_ignored() {
		let mut panels = PanelSet::new(2);
		assert!(!panels.toggle(2));
		assert_eq!(panels, PanelSet::new(2));
		assert!(!panels.is_open(7));
	}
}
