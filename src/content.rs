//! Page content: profile, projects, skills, blog posts and contact details.
//!
//! Content is plain JSON. A page can embed its own copy in
//! `<script id="portfolio-data" type="application/json">`; otherwise the copy
//! bundled at build time from `content/portfolio.json` is used.

use serde::Deserialize;

use crate::components::particle_field::FieldStyle;
use crate::error::Result;

/// JSON compiled into the binary as the fallback content.
pub const BUNDLED_CONTENT: &str = include_str!("../content/portfolio.json");

/// Who the page is about.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
	/// Full name.
	pub name: String,
	/// Short wordmark shown in the header.
	pub brand: String,
	/// Line above the name in the hero.
	pub greeting: String,
	/// Tagline under the name.
	pub headline: String,
	/// Hero paragraph.
	pub intro: String,
	/// Paragraphs of the about section.
	pub about: Vec<String>,
	/// Bullet list under the about text.
	pub recent_technologies: Vec<String>,
	/// Image path or URL for the about section portrait.
	pub portrait: Option<String>,
}

/// A featured project card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
	/// Card heading.
	pub title: String,
	/// Card body.
	pub description: String,
	/// Technology tags.
	#[serde(default)]
	pub tags: Vec<String>,
	/// Screenshot path or URL.
	#[serde(default)]
	pub image: Option<String>,
	/// Deployed site.
	#[serde(default)]
	pub live_url: Option<String>,
	/// Source repository.
	#[serde(default)]
	pub code_url: Option<String>,
}

/// A link card to an external article.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BlogPost {
	/// Article title.
	pub title: String,
	/// Where the article lives.
	pub url: String,
	/// Teaser text.
	#[serde(default)]
	pub description: String,
	/// Cover image path or URL.
	#[serde(default)]
	pub image: Option<String>,
}

/// Where visitors can reach the owner.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
	/// Address the form and mail links point at.
	pub email: String,
	/// Paragraph above the contact form.
	pub pitch: String,
	/// GitHub profile URL.
	pub github: Option<String>,
	/// LinkedIn profile URL.
	pub linkedin: Option<String>,
}

/// Everything the page renders.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
	/// Who the page is about.
	pub profile: Profile,
	/// Featured projects, in display order.
	pub projects: Vec<Project>,
	/// Skill names.
	pub skills: Vec<String>,
	/// External articles.
	pub blog_posts: Vec<BlogPost>,
	/// Contact details.
	pub contact: Contact,
	/// Overrides for the particle background; out-of-range values fall back to defaults.
	pub particles: FieldStyle,
}

impl PortfolioContent {
	/// Parses content JSON, replacing an out-of-range particle style with the defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		let mut content: Self = serde_json::from_str(json)?;
		content.particles = content.particles.sanitized();
		Ok(content)
	}

	/// The copy compiled into the binary.
	pub fn bundled() -> Result<Self> {
		Self::from_json(BUNDLED_CONTENT)
	}
}
