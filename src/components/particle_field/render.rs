//! Canvas rendering for the particle field.
//!
//! Drawing goes through the [`Surface`] trait so the frame logic can run
//! against something other than a browser canvas. Each frame:
//! 1. Clear
//! 2. Particles, each drawn right after it moves
//! 3. Connection lines between nearby pairs

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{Connection, Particle, ParticleField};
use super::theme::FieldStyle;

/// The drawing operations a frame needs.
pub trait Surface {
	/// Wipes the `width` x `height` area from the origin.
	fn clear(&mut self, width: f64, height: f64);
	/// Fills a full circle centered on (`x`, `y`).
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
	/// Strokes a straight segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(color);
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Draws one particle as a filled disc of its radius.
pub fn draw_particle<S: Surface + ?Sized>(surface: &mut S, particle: &Particle, fill: &str) {
	surface.fill_circle(particle.x, particle.y, particle.size, fill);
}

/// Strokes every connection; fully faded ones (opacity <= 0 or NaN) are skipped.
pub fn draw_connections<S: Surface + ?Sized>(
	surface: &mut S,
	field: &ParticleField,
	connections: &[Connection],
	style: &FieldStyle,
) {
	for c in connections {
		if c.opacity.is_nan() || c.opacity <= 0.0 {
			continue;
		}
		let (pa, pb) = (&field.particles[c.a], &field.particles[c.b]);
		surface.stroke_line(
			(pa.x, pa.y),
			(pb.x, pb.y),
			&style.line_color.with_alpha(c.opacity).to_css(),
			style.line_width,
		);
	}
}

/// A surface that records draw calls, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
	/// Number of `clear` calls
	pub clears: usize,
	/// Filled circles as (x, y, radius, color)
	pub circles: Vec<(f64, f64, f64, String)>,
	/// Stroked lines as (from, to, color, width)
	pub lines: Vec<((f64, f64), (f64, f64), String, f64)>,
}

#[cfg(test)]
impl RecordingSurface {
	/// Total calls of any kind.
	pub fn draw_calls(&self) -> usize {
		self.clears + self.circles.len() + self.lines.len()
	}
}

#[cfg(test)]
impl Surface for RecordingSurface {
	fn clear(&mut self, _width: f64, _height: f64) {
		self.clears += 1;
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
		self.circles.push((x, y, radius, color.to_string()));
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.lines.push((from, to, color.to_string(), width));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			direction_x: 0.0,
			direction_y: 0.0,
			size: 1.5,
		}
	}

	#[test]
	fn test_draw_connections_styles_by_opacity() {
		let style = FieldStyle::default();
		let field = ParticleField {
			particles: vec![at(0.0, 0.0), at(100.0, 0.0), at(0.0, 150.0)],
			width: 1400.0,
			height: 1400.0,
		};
		let connections = field.connections(&style);
		let mut surface = RecordingSurface::default();
		draw_connections(&mut surface, &field, &connections, &style);

		// (0,2) at d² = 22500 has faded out; (1,2) at 32500 too.
		assert_eq!(connections.len(), 3);
		assert_eq!(surface.lines.len(), 1);
		let (from, to, color, width) = &surface.lines[0];
		assert_eq!(*from, (0.0, 0.0));
		assert_eq!(*to, (100.0, 0.0));
		assert_eq!(color, "rgba(139, 92, 246, 0.5)");
		assert_eq!(*width, 1.0);
	}

	#[test]
	fn test_undefined_opacity_is_not_stroked() {
		let style = FieldStyle::default();
		let field = ParticleField {
			particles: vec![at(0.0, 0.0), at(10.0, 0.0)],
			width: 800.0,
			height: 600.0,
		};
		let connections = [Connection {
			a: 0,
			b: 1,
			distance_sq: 100.0,
			opacity: f64::NAN,
		}];
		let mut surface = RecordingSurface::default();
		draw_connections(&mut surface, &field, &connections, &style);
		assert!(surface.lines.is_empty());
	}

	#[test]
	fn test_draw_particle_uses_radius() {
		let mut surface = RecordingSurface::default();
		draw_particle(&mut surface, &at(3.0, 4.0), "red");
		assert_eq!(surface.circles, vec![(3.0, 4.0, 1.5, "red".to_string())]);
	}
}
