//! Last known pointer position, as seen by the particle field.

/// Pointer position in canvas pixels plus the radius particles are repelled within.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerState {
	position: Option<(f64, f64)>,
	/// Repulsion radius in pixels
	pub radius: f64,
}

impl PointerState {
	/// No known position yet.
	pub fn new(radius: f64) -> Self {
		Self {
			position: None,
			radius,
		}
	}

	/// Last position, or `None` when the pointer is away.
	pub fn position(&self) -> Option<(f64, f64)> {
		self.position
	}

	/// Pointer is now at (`x`, `y`).
	pub fn moved_to(&mut self, x: f64, y: f64) {
		self.position = Some((x, y));
	}

	/// Pointer left the page.
	pub fn clear(&mut self) {
		self.position = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pointer_transitions() {
		let mut pointer = PointerState::new(100.0);
		assert_eq!(pointer.position(), None);

		pointer.moved_to(12.0, 34.0);
		assert_eq!(pointer.position(), Some((12.0, 34.0)));

		pointer.moved_to(50.0, 60.0);
		assert_eq!(pointer.position(), Some((50.0, 60.0)));

		pointer.clear();
		assert_eq!(pointer.position(), None);
		assert_eq!(pointer.radius, 100.0);
	}
}
