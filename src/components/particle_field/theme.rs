//! Visual styling and tuning constants for the particle field.
//!
//! Every value has a default matching the portfolio's accent palette; any of them
//! can be overridden through the `particles` object of the page content JSON.

use log::warn;
use serde::Deserialize;

use crate::error::{PortfolioError, Result};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
	/// Alpha in `[0, 1]`, opaque when omitted
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with an explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits functional `rgba()` notation so the alpha channel is explicit.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Tuning for particle seeding, pointer interaction and the connection pass.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
	/// Whether the particle background is mounted at all
	pub enabled: bool,
	/// Canvas area (px²) per particle; count = floor(W * H / area_per_particle)
	pub area_per_particle: f64,
	/// Minimum particle radius (inclusive)
	pub size_min: f64,
	/// Maximum particle radius (exclusive)
	pub size_max: f64,
	/// Velocity components are drawn from [-speed, speed)
	pub speed: f64,
	/// Fill color shared by every particle
	pub color: Color,
	/// Connection line color; alpha is replaced by the distance falloff
	pub line_color: Color,
	/// Connection line width in pixels
	pub line_width: f64,
	/// Pointer interaction radius in pixels
	pub pointer_radius: f64,
	/// Pixels a particle is pushed per axis per frame while repelled
	pub push_step: f64,
	/// Repulsion stops this many radii away from the edge being pushed toward
	pub edge_margin_factor: f64,
	/// Pairs connect when d² < (W / divisor) * (H / divisor)
	pub connection_divisor: f64,
	/// Squared distance at which a connection's opacity reaches zero
	pub fade_distance_sq: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			enabled: true,
			area_per_particle: 9000.0,
			size_min: 1.0,
			size_max: 3.0,
			speed: 0.2,
			color: Color::rgba(139, 92, 246, 0.5),
			line_color: Color::rgb(139, 92, 246),
			line_width: 1.0,
			pointer_radius: 100.0,
			push_step: 5.0,
			edge_margin_factor: 10.0,
			connection_divisor: 7.0,
			fade_distance_sq: 20000.0,
		}
	}
}

fn check(field: &'static str, value: f64, in_range: bool) -> Result<()> {
	if value.is_finite() && in_range {
		Ok(())
	} else {
		Err(PortfolioError::FieldStyle { field, value })
	}
}

impl FieldStyle {
	/// Checks that every value is finite and within its accepted range.
	pub fn validate(&self) -> Result<()> {
		check("area_per_particle", self.area_per_particle, self.area_per_particle > 0.0)?;
		check("size_min", self.size_min, self.size_min >= 0.0)?;
		check("size_max", self.size_max, self.size_max >= self.size_min)?;
		check("speed", self.speed, self.speed >= 0.0)?;
		check("color.a", self.color.a, (0.0..=1.0).contains(&self.color.a))?;
		check(
			"line_color.a",
			self.line_color.a,
			(0.0..=1.0).contains(&self.line_color.a),
		)?;
		check("line_width", self.line_width, self.line_width >= 0.0)?;
		check("pointer_radius", self.pointer_radius, self.pointer_radius >= 0.0)?;
		check("push_step", self.push_step, self.push_step >= 0.0)?;
		check(
			"edge_margin_factor",
			self.edge_margin_factor,
			self.edge_margin_factor >= 0.0,
		)?;
		check(
			"connection_divisor",
			self.connection_divisor,
			self.connection_divisor > 0.0,
		)?;
		check("fade_distance_sq", self.fade_distance_sq, self.fade_distance_sq > 0.0)?;
		Ok(())
	}

	/// This style if it validates, otherwise the defaults.
	pub fn sanitized(self) -> Self {
		match self.validate() {
			Ok(()) => self,
			Err(e) => {
				warn!("particle field: {}, falling back to default style", e);
				Self::default()
			}
		}
	}

	/// Squared-distance threshold below which two particles are connected.
	pub fn connection_threshold_sq(&self, width: f64, height: f64) -> f64 {
		(width / self.connection_divisor) * (height / self.connection_divisor)
	}

	/// Linear opacity falloff for a connection at squared distance `distance_sq`.
	///
	/// Not clamped: pairs further apart than `fade_distance_sq` yield negative values.
	pub fn connection_opacity(&self, distance_sq: f64) -> f64 {
		1.0 - distance_sq / self.fade_distance_sq
	}
}
