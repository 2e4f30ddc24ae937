//! Education and work history, revealed item by item on scroll.

use leptos::prelude::*;
use serde::Deserialize;

/// One entry of the timeline.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimelineItem {
	/// Free-form date range, e.g. "2023 - 2025".
	pub period: String,
	pub title: String,
	pub place: String,
	pub description: String,
}

#[component]
pub fn Timeline(items: Vec<TimelineItem>) -> impl IntoView {
	let entries = items
		.into_iter()
		.map(|item| {
			view! {
				<div class="timeline-item">
					<span class="timeline-date">{item.period}</span>
					<h3>{item.title}</h3>
					<h4>{item.place}</h4>
					<p>{item.description}</p>
				</div>
			}
		})
		.collect_view();

	view! { <div class="timeline">{entries}</div> }
}
