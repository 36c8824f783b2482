//! Fixed header with section navigation.
//!
//! Tracks which section sits under the middle of the viewport, switches the
//! header to its opaque style once the page has scrolled, and smooth-scrolls
//! to sections when a link is clicked.

use leptos::ev::{self, MouseEvent};
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Page sections in document order.
pub const SECTIONS: [&str; 5] = ["home", "about", "projects", "skills", "contact"];

/// Scroll offset (px) past which the header turns opaque.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

/// Picks the last section whose top edge is at or above `focus_y`.
///
/// Sections without a known offset (not in the DOM) are skipped; when none
/// qualify the first section wins.
pub fn active_section<'a, I>(focus_y: f64, offsets: I) -> &'a str
where
	I: IntoIterator<Item = (&'a str, Option<f64>)>,
{
	let mut current = SECTIONS[0];
	for (id, top) in offsets {
		if top.is_some_and(|top| focus_y >= top) {
			current = id;
		}
	}
	current
}

/// Whether the page has scrolled far enough for the opaque header.
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLLED_THRESHOLD
}

fn section_top(id: &str) -> Option<f64> {
	document()
		.get_element_by_id(id)
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		.map(|el| el.offset_top() as f64)
}

/// Smooth-scrolls the section with the given id into view.
pub fn scroll_to_section(id: &str) {
	let Some(element) = document().get_element_by_id(id) else {
		warn!("nav: no section with id {:?}", id);
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn nav_links(
	active: ReadSignal<&'static str>,
	set_menu_open: WriteSignal<bool>,
) -> impl IntoView {
	SECTIONS
		.iter()
		.map(|&id| {
			view! {
				<a
					href=format!("#{id}")
					class="nav-link"
					class:active=move || active.get() == id
					on:click=move |ev: MouseEvent| {
						ev.prevent_default();
						scroll_to_section(id);
						set_menu_open.set(false);
					}
				>
					{id}
				</a>
			}
		})
		.collect_view()
}

/// Fixed site header with desktop links and a collapsible mobile menu.
#[component]
pub fn Header(
	/// Wordmark shown at the left of the bar
	#[prop(into)]
	brand: String,
) -> impl IntoView {
	let (active, set_active) = signal(SECTIONS[0]);
	let (scrolled, set_scrolled) = signal(false);
	let (menu_open, set_menu_open) = signal(false);

	let handle = window_event_listener(ev::scroll, move |_| {
		let window = window();
		let scroll_y = window.scroll_y().unwrap_or(0.0);
		let viewport_height = window
			.inner_height()
			.ok()
			.and_then(|h| h.as_f64())
			.unwrap_or(0.0);
		let focus_y = scroll_y + viewport_height / 2.0;

		set_scrolled.set(is_scrolled(scroll_y));
		set_active.set(active_section(
			focus_y,
			SECTIONS.iter().map(|&id| (id, section_top(id))),
		));
	});
	on_cleanup(move || handle.remove());

	view! {
		<header class={move || if scrolled.get() { "site-header scrolled" } else { "site-header" }}>
			<div class="container header-bar">
				<a
					href="#home"
					class="brand"
					on:click=move |ev: MouseEvent| {
						ev.prevent_default();
						scroll_to_section("home");
						set_menu_open.set(false);
					}
				>
					<span class="brand-mark">"</>"</span>
					<span>{brand}</span>
				</a>
				<nav class="nav-desktop">{nav_links(active, set_menu_open)}</nav>
				<button
					class="menu-toggle"
					aria-label="Toggle navigation"
					on:click=move |_| set_menu_open.update(|open| *open = !*open)
				>
					{move || if menu_open.get() { "✕" } else { "☰" }}
				</button>
			</div>
			<div class={move || if menu_open.get() { "mobile-menu open" } else { "mobile-menu" }}>
				<nav class="nav-mobile">{nav_links(active, set_menu_open)}</nav>
			</div>
		</header>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn offsets(tops: [Option<f64>; 5]) -> Vec<(&'static str, Option<f64>)> {
		SECTIONS.iter().copied().zip(tops).collect()
	}

	#[test]
	fn test_active_section_follows_viewport_middle() {
		let tops = [Some(0.0), Some(900.0), Some(1600.0), Some(2800.0), Some(3500.0)];
		assert_eq!(active_section(450.0, offsets(tops)), "home");
		assert_eq!(active_section(900.0, offsets(tops)), "about");
		assert_eq!(active_section(2000.0, offsets(tops)), "projects");
		assert_eq!(active_section(99999.0, offsets(tops)), "contact");
	}

	#[test]
	fn test_active_section_skips_missing() {
		let tops = [Some(0.0), None, Some(1600.0), None, None];
		assert_eq!(active_section(1000.0, offsets(tops)), "home");
		assert_eq!(active_section(1700.0, offsets(tops)), "projects");
		assert_eq!(active_section(5000.0, offsets([None; 5])), "home");
	}

	#[test]
	fn test_scrolled_threshold() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(20.0));
		assert!(is_scrolled(20.5));
	}
}
