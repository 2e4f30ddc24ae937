//! Contact form with local-only submission feedback.
//!
//! Nothing is sent anywhere: submitting swaps the button into a confirmation
//! state for a few seconds, then resets the form.

use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::info;

/// Button text while the confirmation is showing.
pub const SENT_LABEL: &str = "✓ Message envoyé !";
/// How long the confirmation stays before the form resets.
pub const REVERT_DELAY: Duration = Duration::from_secs(3);

/// Confirmation state of the submit button.
///
/// Each submission gets a generation number; a revert only applies to the
/// submission that scheduled it, so a resubmit keeps its full delay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitFeedback {
	generation: u64,
	sent: bool,
}

impl SubmitFeedback {
	/// Enters the confirmation state and returns the generation to expire.
	pub fn submit(&mut self) -> u64 {
		self.generation += 1;
		self.sent = true;
		self.generation
	}

	/// Leaves the confirmation state if `generation` is still the latest
	/// submission. Returns whether it did.
	pub fn expire(&mut self, generation: u64) -> bool {
		if self.sent && generation == self.generation {
			self.sent = false;
			true
		} else {
			false
		}
	}

	pub fn is_sent(&self) -> bool {
		self.sent
	}

	/// Button text for the current state.
	pub fn label<'a>(&self, idle: &'a str) -> &'a str {
		if self.sent { SENT_LABEL } else { idle }
	}
}

#[component]
pub fn ContactForm(#[prop(into, default = "Envoyer".to_string())] button_label: String) -> impl IntoView {
	let form_ref = NodeRef::<leptos::html::Form>::new();
	let feedback = RwSignal::new(SubmitFeedback::default());
	let idle_label = StoredValue::new(button_label);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let mut generation = 0;
		feedback.update(|f| generation = f.submit());
		info!("contact form: submission {generation} acknowledged locally");

		set_timeout(
			move || {
				let mut reverted = false;
				feedback.update(|f| reverted = f.expire(generation));
				if reverted {
					if let Some(form) = form_ref.get_untracked() {
						form.reset();
					}
				}
			},
			REVERT_DELAY,
		);
	};

	view! {
		<form class="contact-form" node_ref=form_ref on:submit=on_submit>
			<input type="text" name="name" placeholder="Nom" required />
			<input type="email" name="email" placeholder="Email" required />
			<textarea name="message" placeholder="Message" rows="5" required></textarea>
			<button type="submit" class="btn" class:sent=move || feedback.with(|f| f.is_sent())>
				{move || idle_label.with_value(|idle| feedback.with(|f| f.label(idle).to_string()))}
			</button>
		</form>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn submit_then_expire_round_trip() {
		let mut fb = SubmitFeedback::default();
		assert_eq!(fb.label("Envoyer"), "Envoyer");
		let generation = fb.submit();
		assert!(fb.is_sent());
		assert_eq!(fb.label("Envoyer"), SENT_LABEL);
		assert!(fb.expire(generation));
		assert_eq!(fb.label("Envoyer"), "Envoyer");
	}

	#[test]
	fn stale_timer_does_not_cut_a_resubmit_short() {
		let mut fb = SubmitFeedback::default();
		let first = fb.submit();
		let second = fb.submit();
		assert!(!fb.expire(first));
		assert!(fb.is_sent());
		assert!(fb.expire(second));
		assert!(!fb.is_sent());
	}

	#[test]
	fn expire_twice_is_harmless() {
		let mut fb = SubmitFeedback::default();
		let generation = fb.submit();
		assert!(fb.expire(generation));
		assert!(!fb.expire(generation));
	}
}
