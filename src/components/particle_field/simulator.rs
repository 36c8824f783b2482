//! Simulator state and lifecycle.
//!
//! Owns the particle field, the pointer, the RNG used for reseeding, and the
//! running flag that ends the frame loop. Created once when the canvas mounts,
//! driven by resize/pointer events and one `animate` call per animation frame,
//! and stopped on unmount. Once stopped every entry point is a no-op.

use log::{debug, info};
use rand::Rng;
use rand::rngs::SmallRng;

use super::particles::{Particle, ParticleField};
use super::pointer::PointerState;
use super::render::{self, Surface};
use super::theme::FieldStyle;

/// What a single `animate` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
	/// The frame was drawn; schedule the next one.
	Drawn,
	/// Nothing to draw on (zero-sized surface); schedule the next one anyway.
	Skipped,
	/// The simulator was stopped; do not schedule again.
	Stopped,
}

impl FrameOutcome {
	/// Whether another animation frame should be requested.
	pub fn reschedule(self) -> bool {
		!matches!(self, FrameOutcome::Stopped)
	}
}

/// The particle field plus everything that drives it between frames.
pub struct ParticleSimulator<R = SmallRng> {
	field: ParticleField,
	pointer: PointerState,
	style: FieldStyle,
	rng: R,
	running: bool,
}

impl<R: Rng> ParticleSimulator<R> {
	/// Seeds a running simulator for a `width` x `height` canvas.
	pub fn new(style: FieldStyle, mut rng: R, width: f64, height: f64) -> Self {
		let field = ParticleField::new(width, height, &style, &mut rng);
		info!(
			"particle field: seeded {} particles for {}x{}",
			field.particles.len(),
			width,
			height
		);
		Self {
			field,
			pointer: PointerState::new(style.pointer_radius),
			style,
			rng,
			running: true,
		}
	}

	/// Current particles.
	pub fn particles(&self) -> &[Particle] {
		&self.field.particles
	}

	/// Bounds the field was last seeded for.
	pub fn size(&self) -> (f64, f64) {
		(self.field.width, self.field.height)
	}

	/// Pointer as last reported.
	pub fn pointer(&self) -> &PointerState {
		&self.pointer
	}

	/// False once [`stop`](Self::stop) has been called.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Adopts new canvas bounds and replaces the whole particle collection.
	pub fn resize(&mut self, width: f64, height: f64) {
		if !self.running {
			return;
		}
		self.field.init(width, height, &self.style, &mut self.rng);
		debug!(
			"particle field: resized to {}x{}, {} particles",
			width,
			height,
			self.field.particles.len()
		);
	}

	/// Records a pointer position in canvas pixels.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		if self.running {
			self.pointer.moved_to(x, y);
		}
	}

	/// Forgets the pointer; repulsion stops until it moves again.
	pub fn pointer_left(&mut self) {
		if self.running {
			self.pointer.clear();
		}
	}

	/// Runs one frame: clear, move and draw each particle, then the connection pass.
	pub fn animate<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameOutcome {
		if !self.running {
			return FrameOutcome::Stopped;
		}
		let (width, height) = self.size();
		if width <= 0.0 || height <= 0.0 {
			return FrameOutcome::Skipped;
		}

		surface.clear(width, height);

		let fill = self.style.color.to_css();
		self.field.step(&self.pointer, &self.style, |p| {
			render::draw_particle(&mut *surface, p, &fill);
		});

		let connections = self.field.connections(&self.style);
		render::draw_connections(&mut *surface, &self.field, &connections, &self.style);

		FrameOutcome::Drawn
	}

	/// Ends the simulation. Idempotent.
	pub fn stop(&mut self) {
		if self.running {
			self.running = false;
			self.pointer.clear();
			info!("particle field: stopped");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::render::RecordingSurface;
	use rand::SeedableRng;

	fn simulator(width: f64, height: f64) -> ParticleSimulator {
		ParticleSimulator::new(
			FieldStyle::default(),
			SmallRng::seed_from_u64(7),
			width,
			height,
		)
	}

	#[test]
	fn test_resize_replaces_collection() {
		let mut sim = simulator(800.0, 600.0);
		assert_eq!(sim.particles().len(), 53);
		let before = sim.particles().to_vec();

		sim.resize(1600.0, 1200.0);
		assert_eq!(sim.particles().len(), 213);
		assert_eq!(sim.size(), (1600.0, 1200.0));
		// Fresh particles, not the old ones with extras appended.
		assert_ne!(&sim.particles()[..53], &before[..]);

		sim.resize(800.0, 600.0);
		assert_eq!(sim.particles().len(), 53);
	}

	#[test]
	fn test_frame_draws_every_particle() {
		let mut sim = simulator(800.0, 600.0);
		let mut surface = RecordingSurface::default();

		assert_eq!(sim.animate(&mut surface), FrameOutcome::Drawn);
		assert_eq!(surface.clears, 1);
		assert_eq!(surface.circles.len(), 53);
		assert!(
			surface
				.circles
				.iter()
				.all(|(_, _, _, color)| color == "rgba(139, 92, 246, 0.5)")
		);

		// Circles are drawn at post-update positions.
		for ((x, y, r, _), p) in surface.circles.iter().zip(sim.particles()) {
			assert_eq!((*x, *y, *r), (p.x, p.y, p.size));
		}
	}

	#[test]
	fn test_pointer_events_reach_particles() {
		let mut sim = simulator(800.0, 600.0);
		let target = sim.particles()[0].clone();

		sim.pointer_moved(target.x - 1.0, target.y);
		assert_eq!(sim.pointer().position(), Some((target.x - 1.0, target.y)));

		let mut surface = RecordingSurface::default();
		sim.animate(&mut surface);
		let moved = &sim.particles()[0];
		if target.x < 800.0 - target.size * 10.0 {
			assert!((moved.x - (target.x + 5.0 + target.direction_x)).abs() < 1e-9);
		}

		sim.pointer_left();
		assert_eq!(sim.pointer().position(), None);
	}

	#[test]
	fn test_zero_sized_surface_skips_frame() {
		let mut sim = simulator(0.0, 600.0);
		assert!(sim.particles().is_empty());

		let mut surface = RecordingSurface::default();
		let outcome = sim.animate(&mut surface);
		assert_eq!(outcome, FrameOutcome::Skipped);
		assert!(outcome.reschedule());
		assert_eq!(surface.draw_calls(), 0);

		sim.resize(800.0, 600.0);
		assert_eq!(sim.animate(&mut surface), FrameOutcome::Drawn);
	}

	#[test]
	fn test_empty_field_still_clears() {
		let mut sim = simulator(50.0, 50.0);
		assert!(sim.particles().is_empty());
		let mut surface = RecordingSurface::default();
		assert_eq!(sim.animate(&mut surface), FrameOutcome::Drawn);
		assert_eq!(surface.clears, 1);
		assert!(surface.circles.is_empty());
		assert!(surface.lines.is_empty());
	}

	#[test]
	fn test_stopped_simulator_ignores_everything() {
		let mut sim = simulator(800.0, 600.0);
		sim.pointer_moved(10.0, 10.0);
		sim.stop();
		assert!(!sim.is_running());
		assert_eq!(sim.pointer().position(), None);

		let snapshot = sim.particles().to_vec();
		sim.resize(1600.0, 1200.0);
		sim.pointer_moved(100.0, 100.0);
		sim.pointer_left();

		let mut surface = RecordingSurface::default();
		let outcome = sim.animate(&mut surface);
		assert_eq!(outcome, FrameOutcome::Stopped);
		assert!(!outcome.reschedule());
		assert_eq!(surface.draw_calls(), 0);
		assert_eq!(sim.particles(), &snapshot[..]);
		assert_eq!(sim.size(), (800.0, 600.0));
		assert_eq!(sim.pointer().position(), None);

		// Stopping twice is harmless.
		sim.stop();
	}
}
