//! Project showcase: a grid of cards, each opening a modal with the full
//! write-up.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::warn;
use serde::Deserialize;

/// A screenshot shown in the project modal.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Screenshot {
	pub src: String,
	#[serde(default)]
	pub alt: String,
}

/// A labelled badge, optionally with a Font Awesome icon class.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Tag {
	#[serde(default)]
	pub icon: String,
	pub label: String,
}

/// One portfolio project. Every field is optional in the site data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
	pub title: String,
	/// Short text on the card.
	pub summary: String,
	pub objective: String,
	pub technologies: String,
	/// Development notes, one paragraph per entry.
	pub development: Vec<String>,
	pub features: String,
	pub results: String,
	pub screenshots: Vec<Screenshot>,
	pub tags: Vec<Tag>,
}

/// Which project the modal is showing, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
	selected: Option<usize>,
}

impl ModalState {
	/// Opens on `index` if the catalog has that many entries.
	/// Returns whether the modal opened.
	pub fn open(&mut self, index: usize, catalog_len: usize) -> bool {
		if index < catalog_len {
			self.selected = Some(index);
			true
		} else {
			false
		}
	}

	pub fn close(&mut self) {
		self.selected = None;
	}

	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn is_open(&self) -> bool {
		self.selected.is_some()
	}
}

fn lock_page_scroll(locked: bool) {
	if let Some(body) = document().body() {
		let overflow = if locked { "hidden" } else { "auto" };
		let _ = body.style().set_property("overflow", overflow);
	}
}

fn tag_list(tags: Vec<Tag>) -> impl IntoView {
	tags.into_iter()
		.map(|tag| {
			view! {
				<span class="tag">
					<i class=tag.icon></i>
					" "
					{tag.label}
				</span>
			}
		})
		.collect_view()
}

fn project_detail(project: Project) -> impl IntoView {
	let Project {
		title,
		objective,
		technologies,
		development,
		features,
		results,
		screenshots,
		tags,
		..
	} = project;

	let shots = screenshots
		.into_iter()
		.map(|shot| view! { <img src=shot.src alt=shot.alt /> })
		.collect_view();
	let notes = development
		.into_iter()
		.map(|paragraph| view! { <p>{paragraph}</p> })
		.collect_view();

	view! {
		<h3>{title}</h3>
		<div class="project-detail">
			<h4><i class="fas fa-bullseye"></i>" Objectif"</h4>
			<p>{objective}</p>
		</div>
		<div class="modal-screenshots">{shots}</div>
		<div class="project-detail">
			<h4><i class="fas fa-tools"></i>" Technologies utilisées"</h4>
			<p>{technologies}</p>
		</div>
		<div class="project-detail">
			<h4><i class="fas fa-lightbulb"></i>" Développement"</h4>
			{notes}
		</div>
		<div class="project-detail">
			<h4><i class="fas fa-star"></i>" Fonctionnalités principales"</h4>
			<p>{features}</p>
		</div>
		<div class="project-detail">
			<h4><i class="fas fa-chart-bar"></i>" Résultats"</h4>
			<p>{results}</p>
		</div>
		<div class="modal-tags">{tag_list(tags)}</div>
	}
}

/// Project cards plus the shared detail modal.
///
/// Opening the modal locks page scrolling until it is closed, either with the
/// close button or by clicking the backdrop around the content.
#[component]
pub fn ProjectShowcase(projects: Vec<Project>) -> impl IntoView {
	let catalog = StoredValue::new(projects);
	let modal = RwSignal::new(ModalState::default());

	let open = move |index: usize| {
		let len = catalog.with_value(|c| c.len());
		let mut opened = false;
		modal.update(|m| opened = m.open(index, len));
		if opened {
			lock_page_scroll(true);
		} else {
			warn!("projects: no project at index {index} (catalog has {len})");
		}
	};
	let close = move || {
		modal.update(ModalState::close);
		lock_page_scroll(false);
	};

	let cards = catalog.with_value(|c| {
		c.iter()
			.enumerate()
			.map(|(index, project)| {
				view! {
					<div class="project-card" on:click=move |_| open(index)>
						<h3>{project.title.clone()}</h3>
						<p>{project.summary.clone()}</p>
						<div class="project-tags">{tag_list(project.tags.clone())}</div>
					</div>
				}
			})
			.collect_view()
	});

	let detail = move || {
		modal
			.get()
			.selected()
			.and_then(|i| catalog.with_value(|c| c.get(i).cloned()))
			.map(project_detail)
	};

	view! {
		<div class="projects-grid">{cards}</div>
		<div
			id="projectModal"
			class="modal"
			class:active=move || modal.get().is_open()
			on:click=move |ev: MouseEvent| {
				if ev.target() == ev.current_target() {
					close();
				}
			}
		>
			<div class="modal-content">
				<button class="modal-close" aria-label="Fermer" on:click=move |_| close()>
					"×"
				</button>
				<div id="modalBody">{detail}</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn modal_opens_only_inside_catalog() {
		let mut modal = ModalState::default();
		assert!(!modal.is_open());
		assert!(!modal.open(5, 5));
		assert_eq!(modal.selected(), None);
		assert!(modal.open(4, 5));
		assert_eq!(modal.selected(), Some(4));
		modal.close();
		assert!(!modal.is_open());
	}

	#[test]
	fn reopening_switches_project() {
		let mut modal = ModalState::default();
		modal.open(0, 3);
		modal.open(2, 3);
		assert_eq!(modal.selected(), Some(2));
		// an invalid index leaves the current selection alone
		modal.open(9, 3);
		assert_eq!(modal.selected(), Some(2));
	}

	#[test]
	fn sparse_project_deserializes() {
		let project: Project = serde_json::from_str(
			r#"{
				"title": "FootStats",
				"development": ["Ligues", "Classement"],
				"tags": [{"icon": "fab fa-js", "label": "JavaScript ES6"}, {"label": "POO"}],
				"screenshots": [{"src": "img/footstats-1.jpg"}]
			}"#,
		)
		.unwrap();
		assert_eq!(project.title, "FootStats");
		assert_eq!(project.development.len(), 2);
		assert_eq!(project.tags[1].icon, "");
		assert_eq!(project.screenshots[0].alt, "");
		assert!(project.objective.is_empty());
	}
}
