//! Particle seeding, per-frame motion and the pairwise connection pass.

use rand::Rng;

use super::pointer::PointerState;
use super::theme::FieldStyle;

/// Upper bound on the field size, whatever the density setting asks for.
pub const MAX_PARTICLES: usize = 1500;

/// A single drifting point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in canvas pixels
	pub x: f64,
	/// Vertical position in canvas pixels
	pub y: f64,
	/// Horizontal velocity, pixels per frame
	pub direction_x: f64,
	/// Vertical velocity, pixels per frame
	pub direction_y: f64,
	/// Radius, fixed at creation
	pub size: f64,
}

impl Particle {
	/// Advances the particle by one frame inside a `width` x `height` canvas.
	///
	/// Order matters: reflect, then repel, then integrate. A particle sitting
	/// outside the bounds flips direction on every call until it re-enters.
	pub fn update(&mut self, width: f64, height: f64, pointer: &PointerState, style: &FieldStyle) {
		if self.x > width || self.x < 0.0 {
			self.direction_x = -self.direction_x;
		}
		if self.y > height || self.y < 0.0 {
			self.direction_y = -self.direction_y;
		}

		if let Some((px, py)) = pointer.position() {
			let (dx, dy) = (px - self.x, py - self.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance < pointer.radius + self.size {
				let margin = self.size * style.edge_margin_factor;
				if px < self.x && self.x < width - margin {
					self.x += style.push_step;
				}
				if px > self.x && self.x > margin {
					self.x -= style.push_step;
				}
				if py < self.y && self.y < height - margin {
					self.y += style.push_step;
				}
				if py > self.y && self.y > margin {
					self.y -= style.push_step;
				}
			}
		}

		self.x += self.direction_x;
		self.y += self.direction_y;
	}
}

/// A line to draw between two particles, by index.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	/// Index of the first particle
	pub a: usize,
	/// Index of the second particle, always greater than `a`
	pub b: usize,
	/// Squared distance between the two
	pub distance_sq: f64,
	/// Unclamped falloff; zero or below means fully faded
	pub opacity: f64,
}

/// The particle collection together with the canvas bounds it was seeded for.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	/// Current particles, in seeding order
	pub particles: Vec<Particle>,
	/// Canvas width the field was seeded for
	pub width: f64,
	/// Canvas height the field was seeded for
	pub height: f64,
}

impl ParticleField {
	/// Seeds a fresh field for a `width` x `height` canvas.
	pub fn new<R: Rng + ?Sized>(width: f64, height: f64, style: &FieldStyle, rng: &mut R) -> Self {
		let mut field = Self::default();
		field.init(width, height, style, rng);
		field
	}

	/// Number of particles a canvas of this size holds, at most [`MAX_PARTICLES`].
	pub fn particle_count(width: f64, height: f64, style: &FieldStyle) -> usize {
		if width <= 0.0 || height <= 0.0 || style.area_per_particle <= 0.0 {
			return 0;
		}
		let count = (width * height / style.area_per_particle).floor();
		if count.is_nan() {
			return 0;
		}
		count.min(MAX_PARTICLES as f64) as usize
	}

	/// Discards every particle and reseeds for the given bounds.
	pub fn init<R: Rng + ?Sized>(&mut self, width: f64, height: f64, style: &FieldStyle, rng: &mut R) {
		let count = Self::particle_count(width, height, style);
		let mut particles = Vec::with_capacity(count);

		for _ in 0..count {
			let size = sample(rng, style.size_min, style.size_max);
			particles.push(Particle {
				x: sample_inset(rng, width, size * 2.0),
				y: sample_inset(rng, height, size * 2.0),
				direction_x: sample(rng, -style.speed, style.speed),
				direction_y: sample(rng, -style.speed, style.speed),
				size,
			});
		}

		self.particles = particles;
		self.width = width;
		self.height = height;
	}

	/// Moves every particle one frame, calling `visit` after each one moves.
	pub fn step<F>(&mut self, pointer: &PointerState, style: &FieldStyle, mut visit: F)
	where
		F: FnMut(&Particle),
	{
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.update(width, height, pointer, style);
			visit(p);
		}
	}

	/// Every unordered pair closer than the connection threshold. O(N²).
	pub fn connections(&self, style: &FieldStyle) -> Vec<Connection> {
		let threshold = style.connection_threshold_sq(self.width, self.height);
		let mut out = Vec::new();

		for (a, pa) in self.particles.iter().enumerate() {
			for (b, pb) in self.particles.iter().enumerate().skip(a + 1) {
				let (dx, dy) = (pa.x - pb.x, pa.y - pb.y);
				let distance_sq = dx * dx + dy * dy;
				if distance_sq < threshold {
					out.push(Connection {
						a,
						b,
						distance_sq,
						opacity: style.connection_opacity(distance_sq),
					});
				}
			}
		}
		out
	}
}

/// Uniform sample in `[low, high)`, or `low` when the range is empty.
fn sample<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
	if high > low {
		rng.gen_range(low..high)
	} else {
		low
	}
}

/// Uniform sample in `[margin, extent - margin)`; the center line if the canvas is too narrow.
fn sample_inset<R: Rng + ?Sized>(rng: &mut R, extent: f64, margin: f64) -> f64 {
	if extent - margin > margin {
		rng.gen_range(margin..extent - margin)
	} else {
		extent / 2.0
	}
}
