//! Contact section: a mailto-backed form plus a direct "Say Hello" link.
//!
//! Submitting the form hands the composed message to the visitor's mail
//! client. The status line walks idle -> sending -> success -> idle on timers.

use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::{info, warn};

use crate::content::Contact;
use crate::error::ContactError;

/// Time between handing off to the mail client and showing success.
pub const SENDING_DELAY: Duration = Duration::from_millis(1500);
/// How long the success message stays up.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(5000);

/// Form state at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
	/// Sender's name
	pub name: String,
	/// Sender's reply address
	pub email: String,
	/// Message body
	pub message: String,
}

impl ContactDraft {
	/// Checks fields in form order and reports the first problem.
	pub fn validate(&self) -> Result<(), ContactError> {
		if self.name.trim().is_empty() {
			return Err(ContactError::EmptyName);
		}
		if !is_valid_email(&self.email) {
			return Err(ContactError::InvalidEmail);
		}
		if self.message.trim().is_empty() {
			return Err(ContactError::EmptyMessage);
		}
		Ok(())
	}

	/// Mail subject naming the sender.
	pub fn subject(&self) -> String {
		format!("Portfolio contact from {}", self.name.trim())
	}

	/// Message followed by a signature line.
	pub fn body(&self) -> String {
		format!(
			"{}\n\n— {} ({})",
			self.message.trim(),
			self.name.trim(),
			self.email.trim()
		)
	}

	/// `mailto:` URL addressed to `to`; `encode` percent-encodes a URI component.
	pub fn mailto_href<F>(&self, to: &str, encode: F) -> String
	where
		F: Fn(&str) -> String,
	{
		format!(
			"mailto:{}?subject={}&body={}",
			to,
			encode(&self.subject()),
			encode(&self.body())
		)
	}
}

/// One `@`, a non-empty local part, and a dotted domain without whitespace.
pub fn is_valid_email(email: &str) -> bool {
	let email = email.trim();
	if email.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	!local.is_empty()
		&& !domain.contains('@')
		&& domain.contains('.')
		&& !domain.starts_with('.')
		&& !domain.ends_with('.')
}

/// Progress line under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactStatus {
	/// Nothing submitted
	Idle,
	/// Handed to the mail client, waiting out the delay
	Sending,
	/// Showing the thank-you message
	Success,
}

impl ContactStatus {
	/// Text to show, if any.
	pub fn label(self) -> Option<&'static str> {
		match self {
			ContactStatus::Idle => None,
			ContactStatus::Sending => Some("Opening your mail app..."),
			ContactStatus::Success => Some("Thanks! I'll get back to you soon."),
		}
	}
}

/// Contact form plus a direct mail link.
#[component]
pub fn ContactSection(
	/// Recipient address and pitch text
	contact: Contact,
) -> impl IntoView {
	let (name, set_name) = signal(String::new());
	let (email, set_email) = signal(String::new());
	let (message, set_message) = signal(String::new());
	let (status, set_status) = signal(ContactStatus::Idle);
	let (error, set_error) = signal(None::<ContactError>);

	let owner_email = contact.email.clone();
	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if status.get_untracked() == ContactStatus::Sending {
			return;
		}

		let draft = ContactDraft {
			name: name.get_untracked(),
			email: email.get_untracked(),
			message: message.get_untracked(),
		};
		if let Err(e) = draft.validate() {
			set_error.set(Some(e));
			return;
		}
		set_error.set(None);
		set_status.set(ContactStatus::Sending);

		let href = draft.mailto_href(&owner_email, |s| {
			String::from(js_sys::encode_uri_component(s))
		});
		match window().location().set_href(&href) {
			Ok(()) => info!("contact: handed message to mail client"),
			Err(e) => warn!("contact: could not open mail client: {:?}", e),
		}

		set_timeout(
			move || {
				let _ = set_status.try_set(ContactStatus::Success);
				let _ = set_name.try_set(String::new());
				let _ = set_email.try_set(String::new());
				let _ = set_message.try_set(String::new());
				set_timeout(
					move || {
						let _ = set_status.try_set(ContactStatus::Idle);
					},
					SUCCESS_DISPLAY,
				);
			},
			SENDING_DELAY,
		);
	};

	view! {
		<section id="contact" class="section contact">
			<div class="container narrow fade-in">
				<h2 class="section-title">
					<span class="accent">"04."</span>
					" What's Next?"
				</h2>
				<h3 class="contact-heading">"Get In Touch"</h3>
				<p class="contact-pitch">{contact.pitch.clone()}</p>

				<form class="contact-form" on:submit=on_submit>
					<input
						type="text"
						name="name"
						placeholder="Your name"
						prop:value=name
						on:input=move |ev| set_name.set(event_target_value(&ev))
					/>
					<input
						type="email"
						name="email"
						placeholder="Your email"
						prop:value=email
						on:input=move |ev| set_email.set(event_target_value(&ev))
					/>
					<textarea
						name="message"
						rows="5"
						placeholder="Your message"
						prop:value=message
						on:input=move |ev| set_message.set(event_target_value(&ev))
					></textarea>
					<button
						type="submit"
						class="button"
						disabled=move || status.get() == ContactStatus::Sending
					>
						"Send Message"
					</button>
					{move || error.get().map(|e| view! { <p class="form-error">{e.to_string()}</p> })}
					{move || status.get().label().map(|l| view! { <p class="form-status">{l}</p> })}
				</form>

				<a href=format!("mailto:{}", contact.email) class="button button-large">
					"Say Hello"
				</a>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
		ContactDraft {
			name: name.to_string(),
			email: email.to_string(),
			message: message.to_string(),
		}
	}

	#[test]
	fn test_validation_order() {
		assert_eq!(
			draft(" ", "bad", "").validate(),
			Err(ContactError::EmptyName)
		);
		assert_eq!(
			draft("Ada", "bad", "").validate(),
			Err(ContactError::InvalidEmail)
		);
		assert_eq!(
			draft("Ada", "ada@example.com", "  \n").validate(),
			Err(ContactError::EmptyMessage)
		);
		assert_eq!(draft("Ada", "ada@example.com", "Hi").validate(), Ok(()));
	}

	#[test]
	fn test_email_shapes() {
		assert!(is_valid_email("ada@example.com"));
		assert!(is_valid_email("  ada.l@mail.example.org "));
		assert!(!is_valid_email("ada@example"));
		assert!(!is_valid_email("@example.com"));
		assert!(!is_valid_email("ada@@example.com"));
		assert!(!is_valid_email("ada@example.com."));
		assert!(!is_valid_email("ada@.com"));
		assert!(!is_valid_email("ada lovelace@example.com"));
		assert!(!is_valid_email("ada.example.com"));
	}

	#[test]
	fn test_mailto_composition() {
		let d = draft(" Ada ", "ada@example.com", "Hello there ");
		assert_eq!(d.subject(), "Portfolio contact from Ada");
		assert_eq!(d.body(), "Hello there\n\n— Ada (ada@example.com)");

		let href = d.mailto_href("me@example.com", |s| s.replace(' ', "%20").replace('\n', "%0A"));
		assert_eq!(
			href,
			"mailto:me@example.com?subject=Portfolio%20contact%20from%20Ada\
			 &body=Hello%20there%0A%0A—%20Ada%20(ada@example.com)"
		);
	}

	#[test]
	fn test_status_labels() {
		assert_eq!(ContactStatus::Idle.label(), None);
		assert!(ContactStatus::Sending.label().is_some());
		assert!(ContactStatus::Success.label().is_some());
	}
}
