//! Leptos component wrapping the particle field canvas.
//!
//! The component creates an HTML canvas, acquires its 2d context, and wires
//! up window-level pointer and resize listeners. An explicit render loop
//! drives the field: each frame reads the shared pointer cell, recomputes
//! particle positions and colors, rebuilds the proximity edges, and draws.
//! If the context cannot be acquired the component stays inert.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::animation::RenderLoop;
use super::field::ParticleField;
use super::pointer::PointerCell;
use super::projection::Projection;
use super::render;
use super::theme::Theme;
use super::types::FieldConfig;

/// Device-pixel-ratio cap; backing-store resolution never exceeds this.
const MAX_PIXEL_RATIO: f64 = 1.5;

/// Bundles the field with its camera, theme, and the shared pointer cell.
struct FieldContext {
	field: ParticleField,
	projection: Projection,
	theme: Theme,
	pointer: PointerCell,
}

/// Viewport size in CSS pixels.
fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
	)
}

/// Size the canvas backing store for `w` x `h` CSS pixels at the capped
/// pixel ratio, and set the context transform so drawing uses CSS pixels.
fn size_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, w: f64, h: f64, dpr: f64) {
	canvas.set_width((w * dpr) as u32);
	canvas.set_height((h * dpr) as u32);
	let style = web_sys::HtmlElement::style(canvas);
	let _ = style.set_property("width", &format!("{w}px"));
	let _ = style.set_property("height", &format!("{h}px"));
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

/// Renders an animated particle network on a canvas element.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and resize with the window.
/// Explicit `width`/`height` override automatic sizing. Pass a
/// [`FieldConfig`] to override particle count, connection distance, glow
/// radius, seed, or theme.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(default = None)] config: Option<FieldConfig>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let render_loop: Rc<RefCell<Option<RenderLoop>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (context_init, render_loop_init, pointer_cb_init, resize_cb_init) = (
		context.clone(),
		render_loop.clone(),
		pointer_cb.clone(),
		resize_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			viewport_size(&window)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(obj)) => match obj.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("particle-network: canvas returned a non-2d context, staying inert");
					return;
				}
			},
			_ => {
				warn!("particle-network: 2d context unavailable, staying inert");
				return;
			}
		};

		let dpr = window.device_pixel_ratio().min(MAX_PIXEL_RATIO);
		size_canvas(&canvas, &ctx, w, h, dpr);

		let (theme, seed) = config.clone().unwrap_or_default().resolve();
		let seed = seed.unwrap_or_else(js_sys::Date::now);
		let pointer = PointerCell::new();

		*context_init.borrow_mut() = Some(FieldContext {
			field: ParticleField::new(&theme.field, seed),
			projection: Projection::new(w, h),
			theme,
			pointer: pointer.clone(),
		});

		// Writer side of the pointer cell. Window-level: the canvas sits
		// behind other content, so element-level events would be swallowed.
		*pointer_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (vw, vh) = viewport_size(&win);
			pointer.write_client(ev.client_x() as f64, ev.client_y() as f64, vw, vh);
		}));
		if let Some(ref cb) = *pointer_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		if fullscreen {
			let (context_resize, canvas_resize, ctx_resize) =
				(context_init.clone(), canvas.clone(), ctx.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = viewport_size(&win);
				let dpr = win.device_pixel_ratio().min(MAX_PIXEL_RATIO);
				size_canvas(&canvas_resize, &ctx_resize, nw, nh, dpr);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.projection.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let context_anim = context_init.clone();
		*render_loop_init.borrow_mut() = Some(RenderLoop::start(move |t| {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let pointer = c.pointer.get();
				c.field.update(t, pointer);
				c.field.rebuild_edges();
				render::render(&c.field, &ctx, &c.projection, &c.theme, t);
			}
		}));
	});

	let cleanup_state = leptos::__reexports::send_wrapper::SendWrapper::new((
		context,
		render_loop,
		pointer_cb,
		resize_cb,
	));
	on_cleanup(move || {
		let (context_drop, render_loop_drop, pointer_cb_drop, resize_cb_drop) = &*cleanup_state;
		if let Some(render_loop) = render_loop_drop.borrow_mut().take() {
			render_loop.cancel();
		}
		if let Some(window) = web_sys::window() {
			if let Some(cb) = pointer_cb_drop.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
			if let Some(cb) = resize_cb_drop.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		context_drop.borrow_mut().take();
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="display: block;"
		/>
	}
}
