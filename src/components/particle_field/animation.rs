//! Frame scheduling.
//!
//! Wraps `requestAnimationFrame` in an owned loop object with an explicit
//! cancellation flag. The frame callback receives elapsed seconds since the
//! loop started; cadence follows the display refresh rate, with no fixed
//! timestep.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// Seconds since time origin, from the performance clock.
fn now_seconds() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map(|p| p.now() / 1000.0)
		.unwrap_or(0.0)
}

/// A running render loop.
///
/// Owns the scheduling closure, the pending callback id, and a cancellation
/// flag. Dropping the handle does not stop the loop; call [`RenderLoop::cancel`].
pub struct RenderLoop {
	raf_id: Rc<Cell<Option<i32>>>,
	cancelled: Rc<Cell<bool>>,
	closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RenderLoop {
	/// Start scheduling frames. `frame` runs once per display refresh with
	/// the elapsed time in seconds.
	pub fn start(mut frame: impl FnMut(f64) + 'static) -> Self {
		let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let cancelled = Rc::new(Cell::new(false));
		let closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let started_at = now_seconds();

		let (raf_inner, cancelled_inner, closure_inner) =
			(raf_id.clone(), cancelled.clone(), closure.clone());
		*closure.borrow_mut() = Some(Closure::new(move || {
			if cancelled_inner.get() {
				return;
			}
			frame(now_seconds() - started_at);
			// The frame callback may have cancelled the loop
			if cancelled_inner.get() {
				return;
			}
			if let Some(ref cb) = *closure_inner.borrow() {
				raf_inner.set(request_frame(cb));
			}
		}));

		if let Some(ref cb) = *closure.borrow() {
			raf_id.set(request_frame(cb));
		}

		Self {
			raf_id,
			cancelled,
			closure,
		}
	}

	/// Stop scheduling. Synchronous and idempotent: the first call cancels
	/// any pending callback and releases the closure; later calls are no-ops.
	pub fn cancel(&self) {
		if self.cancelled.replace(true) {
			return;
		}
		if let Some(id) = self.raf_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		self.closure.borrow_mut().take();
	}

	/// Whether the loop has been cancelled.
	pub fn is_cancelled(&self) -> bool {
		self.cancelled.get()
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}
