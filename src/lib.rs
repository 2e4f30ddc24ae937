//! portfolio-canvas: a personal portfolio front end with an animated
//! particle background.
//!
//! This crate provides the WASM client: the particle field behind the page,
//! scroll-spy navigation, reveal-on-scroll, the project showcase modal,
//! collapsible skills and a local-only contact form.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

use components::contact::ContactForm;
use components::nav::{NavBar, SectionLink};
use components::particle_field::{FieldConfig, ParticleCanvas};
use components::projects::{Project, ProjectShowcase};
use components::reveal::{REVEAL_SELECTOR, observe_reveals, show_body};
use components::skills::{SkillCategory, SkillPanels};
use components::timeline::{Timeline, TimelineItem};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Page content and background tunables, read from the inline site data.
///
/// Every key is optional; anything missing falls back to its default.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteData {
	/// Name shown in the hero banner.
	pub name: String,
	/// One-line tagline under the name.
	pub headline: String,
	/// "About" paragraph.
	pub about: String,
	/// Navigation entries, [`default_sections`] when absent.
	pub sections: Vec<SectionLink>,
	pub timeline: Vec<TimelineItem>,
	pub projects: Vec<Project>,
	pub skills: Vec<SkillCategory>,
	/// Particle background overrides.
	pub background: FieldConfig,
}

/// The page's own sections, in document order.
pub fn default_sections() -> Vec<SectionLink> {
	[
		("accueil", "Accueil"),
		("parcours", "Parcours"),
		("projets", "Projets"),
		("competences", "Compétences"),
		("contact", "Contact"),
	]
	.into_iter()
	.map(|(id, label)| SectionLink {
		id: id.to_string(),
		label: label.to_string(),
	})
	.collect()
}

impl Default for SiteData {
	fn default() -> Self {
		Self {
			name: String::new(),
			headline: String::new(),
			about: String::new(),
			sections: default_sections(),
			timeline: Vec::new(),
			projects: Vec::new(),
			skills: Vec::new(),
			background: FieldConfig::default(),
		}
	}
}

impl SiteData {
	/// Parses a site data document.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// Load site data from a script element with id="site-data".
/// Expected format: JSON, see [`SiteData`].
fn load_site_data() -> Option<SiteData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SiteData::from_json(&json_text) {
		Ok(data) => {
			info!(
				"portfolio: loaded {} projects, {} skill categories, {} timeline items",
				data.projects.len(),
				data.skills.len(),
				data.timeline.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("portfolio: failed to parse site data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads site data from the DOM and lays out every section over the
/// particle background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let SiteData {
		name,
		headline,
		about,
		sections,
		timeline,
		projects,
		skills,
		background,
	} = load_site_data().unwrap_or_default();

	// Runs once, after the first render has put the sections in the DOM.
	Effect::new(move |_| {
		observe_reveals(REVEAL_SELECTOR);
		show_body();
	});

	view! {
		<Html attr:lang="fr" attr:dir="ltr" />
		<Title text=name.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleCanvas config=background />
		<NavBar links=sections />

		<main>
			<section id="accueil" class="hero">
				<h1>{name}</h1>
				<p class="subtitle">{headline}</p>
				<p class="about">{about}</p>
			</section>
			<section id="parcours">
				<h2 class="section-title">"Parcours"</h2>
				<Timeline items=timeline />
			</section>
			<section id="projets">
				<h2 class="section-title">"Projets"</h2>
				<ProjectShowcase projects=projects />
			</section>
			<section id="competences">
				<h2 class="section-title">"Compétences"</h2>
				<SkillPanels categories=skills />
			</section>
			<section id="contact">
				<h2 class="section-title">"Contact"</h2>
				<ContactForm />
			</section>
		</main>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_document_uses_defaults() {
		let data = SiteData::from_json("{}").unwrap();
		assert_eq!(data.sections, default_sections());
		assert!(data.projects.is_empty());
		assert_eq!(data.background, FieldConfig::default());
	}

	#[test]
	fn nested_sections_are_read() {
		let data = SiteData::from_json(
			r#"{
				"name": "Portfolio",
				"sections": [{"id": "projets", "label": "Projets"}],
				"projects": [{"title": "Agenda C++"}, {"title": "Morpion JS"}],
				"skills": [{"name": "Langages", "items": ["Rust", "C++"]}],
				"timeline": [{"period": "2024", "title": "BUT Informatique"}],
				"background": {"link_distance": 120.0, "color": {"r": 10, "g": 20, "b": 30}}
			}"#,
		)
		.unwrap();
		assert_eq!(data.sections.len(), 1);
		assert_eq!(data.projects[1].title, "Morpion JS");
		assert_eq!(data.skills[0].items, vec!["Rust", "C++"]);
		assert_eq!(data.timeline[0].period, "2024");
		assert_eq!(data.background.link_distance, 120.0);
		assert_eq!(data.background.color.g, 20);
		assert_eq!(data.background.max_particles, 100);
	}

	#[test]
	fn malformed_document_is_an_error() {
		assert!(SiteData::from_json(r#"{"projects": 3}"#).is_err());
	}
}
