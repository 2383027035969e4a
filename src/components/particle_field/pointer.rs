//! Shared pointer state.
//!
//! A single cell with one writer (the `mousemove` handler) and one reader
//! (the frame callback). The value is advisory: last write wins, nothing is
//! buffered, and a write never triggers a redraw — the next scheduled frame
//! simply picks up the new position.

use std::cell::Cell;
use std::rc::Rc;

/// Normalized pointer position shared between the input handler and the
/// render loop. Cloning yields another handle to the same cell.
#[derive(Clone, Debug, Default)]
pub struct PointerCell(Rc<Cell<(f64, f64)>>);

impl PointerCell {
	/// A cell holding the neutral position (0, 0).
	pub fn new() -> Self {
		Self::default()
	}

	/// Normalize viewport client coordinates to [-1, 1] per axis, with +y up.
	/// Degenerate viewport sizes map to the neutral position.
	pub fn normalize(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
		if width <= 0.0 || height <= 0.0 {
			return (0.0, 0.0);
		}
		((client_x / width) * 2.0 - 1.0, -((client_y / height) * 2.0 - 1.0))
	}

	/// Writer side: record a pointer position in client coordinates.
	pub fn write_client(&self, client_x: f64, client_y: f64, width: f64, height: f64) {
		self.0.set(Self::normalize(client_x, client_y, width, height));
	}

	/// Reader side: the most recent normalized position.
	pub fn get(&self) -> (f64, f64) {
		self.0.get()
	}
}
