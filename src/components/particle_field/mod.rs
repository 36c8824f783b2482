//! Animated particle background.
//!
//! Renders drifting particles on an HTML canvas with:
//! - Density-based seeding, reseeded whenever the viewport resizes
//! - Edge reflection and pointer repulsion
//! - Fading connection lines between nearby particles
//!
//! The simulation is independent of the browser: [`ParticleSimulator`] draws
//! through the [`Surface`] trait, which the canvas 2D context implements.
//!
//! # Example
//!
//! ```ignore
//! use particle_portfolio::components::particle_field::{FieldStyle, ParticleCanvas};
//!
//! view! {
//!     <section style="position: relative">
//!         <ParticleCanvas field_style=FieldStyle::default() />
//!     </section>
//! }
//! ```

mod component;
mod particles;
mod pointer;
mod render;
mod simulator;
mod theme;

pub use component::ParticleCanvas;
pub use particles::{Connection, MAX_PARTICLES, Particle, ParticleField};
pub use pointer::PointerState;
pub use render::Surface;
pub use simulator::{FrameOutcome, ParticleSimulator};
pub use theme::{Color, FieldStyle};
