//! particle-portfolio: single-page personal portfolio.
//!
//! This crate builds a WASM client that renders the whole page: navigation,
//! content sections, a mailto contact form, and an animated, pointer-reactive
//! particle background behind the hero section.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
pub mod error;

use components::contact::ContactSection;
use components::nav::Header;
use components::sections::{AboutSection, Footer, HomeSection, ProjectsSection, SkillsSection};
use components::use_scroll_reveal;
pub use content::PortfolioContent;

/// Id of the optional `<script type="application/json">` element carrying page content.
pub const CONTENT_ELEMENT_ID: &str = "portfolio-data";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

fn embedded_content_json() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONTENT_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Content embedded in the page if present and valid, else the bundled copy.
fn load_content() -> PortfolioContent {
	if let Some(json) = embedded_content_json() {
		match PortfolioContent::from_json(&json) {
			Ok(content) => {
				info!(
					"portfolio: loaded embedded content, {} projects, {} skills",
					content.projects.len(),
					content.skills.len()
				);
				return content;
			}
			Err(e) => warn!("portfolio: embedded content rejected, using bundled copy: {}", e),
		}
	}

	match PortfolioContent::bundled() {
		Ok(content) => content,
		Err(e) => {
			warn!("portfolio: bundled content unreadable: {}", e);
			PortfolioContent::default()
		}
	}
}

/// Main application component.
/// Loads page content and renders every section, with the particle field behind the hero.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = load_content();
	use_scroll_reveal();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=format!("{} | Portfolio", content.profile.name) />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<Header brand=content.profile.brand.clone() />
			<main>
				<HomeSection
					profile=content.profile.clone()
					field_style=content.particles.clone()
				/>
				<AboutSection profile=content.profile.clone() />
				<ProjectsSection projects=content.projects.clone() />
				<SkillsSection
					skills=content.skills.clone()
					blog_posts=content.blog_posts.clone()
				/>
				<ContactSection contact=content.contact.clone() />
			</main>
			<Footer contact=content.contact.clone() />
		</div>
	}
}
