//! Static page sections rendered from [`PortfolioContent`](crate::content::PortfolioContent).

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::nav::scroll_to_section;
use super::particle_field::{FieldStyle, ParticleCanvas};
use crate::content::{BlogPost, Contact, Profile, Project};

/// Alternating card layout: even-indexed projects read left-to-right.
fn project_side(index: usize) -> &'static str {
	if index % 2 == 0 { "left" } else { "right" }
}

/// Hero section with the particle background behind it.
#[component]
pub fn HomeSection(
	/// Hero text
	profile: Profile,
	/// Particle background settings
	field_style: FieldStyle,
) -> impl IntoView {
	view! {
		<section id="home" class="hero">
			<ParticleCanvas field_style=field_style />
			<div class="container hero-content">
				<p class="hero-greeting fade-in">{profile.greeting}</p>
				<h1 class="hero-name fade-in">{format!("{}.", profile.name)}</h1>
				<h2 class="hero-headline fade-in">{profile.headline}</h2>
				<p class="hero-intro fade-in">{profile.intro}</p>
				<div class="fade-in">
					<a
						href="#projects"
						class="button button-large"
						on:click=move |ev: MouseEvent| {
							ev.prevent_default();
							scroll_to_section("projects");
						}
					>
						"Check out my work →"
					</a>
				</div>
			</div>
		</section>
	}
}

/// Biography, recent technologies and the optional portrait.
#[component]
pub fn AboutSection(
	/// About text and portrait
	profile: Profile,
) -> impl IntoView {
	let portrait = profile.portrait.clone().map(|src| {
		view! {
			<div class="portrait">
				<div class="portrait-backdrop"></div>
				<div class="portrait-frame"></div>
				<img src=src alt=profile.name.clone() />
			</div>
		}
	});

	view! {
		<section id="about" class="section">
			<div class="container">
				<h2 class="section-title fade-in">
					<span class="accent">"01."</span>
					" About Me"
				</h2>
				<div class="about-grid fade-in">
					<div class="about-text">
						{profile
							.about
							.into_iter()
							.map(|paragraph| view! { <p>{paragraph}</p> })
							.collect_view()}
						<p>"Here are a few technologies I've been working with recently:"</p>
						<ul class="tech-list">
							{profile
								.recent_technologies
								.into_iter()
								.map(|tech| view! { <li>{tech}</li> })
								.collect_view()}
						</ul>
					</div>
					{portrait}
				</div>
			</div>
		</section>
	}
}

/// Featured project cards, alternating sides.
#[component]
pub fn ProjectsSection(
	/// Cards to render, in order
	projects: Vec<Project>,
) -> impl IntoView {
	view! {
		<section id="projects" class="section section-alt">
			<div class="container">
				<h2 class="section-title fade-in">
					<span class="accent">"02."</span>
					" Some Things I've Built"
				</h2>
				<div class="project-list">
					{projects
						.into_iter()
						.enumerate()
						.map(|(i, project)| {
							let side = project_side(i);
							let image = project.image.clone().map(|src| {
								view! {
									<div class="portrait">
										<div class="portrait-backdrop"></div>
										<div class="portrait-frame"></div>
										<img src=src alt=project.title.clone() />
									</div>
								}
							});
							view! {
								<article class=format!("project fade-in project-{side}")>
									<div class="project-image">{image}</div>
									<div class="project-details">
										<p class="project-kicker">"Featured Project"</p>
										<h3>{project.title}</h3>
										<p class="project-description">{project.description}</p>
										<div class="project-tags">
											{project
												.tags
												.into_iter()
												.map(|tag| view! { <span>{tag}</span> })
												.collect_view()}
										</div>
										<div class="project-links">
											{project
												.code_url
												.map(|url| {
													view! {
														<a href=url target="_blank" rel="noopener noreferrer">
															"Code"
														</a>
													}
												})}
											{project
												.live_url
												.map(|url| {
													view! {
														<a href=url target="_blank" rel="noopener noreferrer">
															"Live →"
														</a>
													}
												})}
										</div>
									</div>
								</article>
							}
						})
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

/// Skill tiles, followed by blog post cards when there are any.
#[component]
pub fn SkillsSection(
	/// Skill names
	skills: Vec<String>,
	/// Article cards; the block is hidden when empty
	blog_posts: Vec<BlogPost>,
) -> impl IntoView {
	let blogs = (!blog_posts.is_empty()).then(|| {
		view! {
			<div class="blog-block fade-in">
				<h3>"My Blog Posts"</h3>
				<div class="blog-grid">
					{blog_posts
						.into_iter()
						.map(|post| {
							let image = post
								.image
								.clone()
								.map(|src| view! { <img src=src alt=post.title.clone() /> });
							view! {
								<a
									class="blog-card"
									href=post.url
									target="_blank"
									rel="noopener noreferrer"
								>
									{image}
									<div class="blog-card-body">
										<h4>{post.title}</h4>
										<p>{post.description}</p>
									</div>
								</a>
							}
						})
						.collect_view()}
				</div>
			</div>
		}
	});

	view! {
		<section id="skills" class="section">
			<div class="container">
				<h2 class="section-title fade-in">
					<span class="accent">"03."</span>
					" My Skills & Blogs"
				</h2>
				<div class="skill-grid fade-in">
					{skills
						.into_iter()
						.map(|skill| view! { <div class="skill"><p>{skill}</p></div> })
						.collect_view()}
				</div>
				{blogs}
			</div>
		</section>
	}
}

/// External profile links and a mail link.
#[component]
pub fn Footer(
	/// Links to render
	contact: Contact,
) -> impl IntoView {
	let external = |href: Option<String>, label: &'static str| {
		href.map(|href| {
			view! {
				<a href=href target="_blank" rel="noopener noreferrer">
					{label}
				</a>
			}
		})
	};

	view! {
		<footer class="site-footer">
			<div class="footer-links">
				{external(contact.github, "GitHub")}
				{external(contact.linkedin, "LinkedIn")}
				<a href=format!("mailto:{}", contact.email)>"Email"</a>
			</div>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_project_sides_alternate() {
		let sides: Vec<_> = (0..4).map(project_side).collect();
		assert_eq!(sides, vec!["left", "right", "left", "right"]);
	}
}
