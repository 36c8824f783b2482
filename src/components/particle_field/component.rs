//! Leptos component mounting the particle field behind page content.
//!
//! The component creates a canvas sized to the viewport and wires window-level
//! resize, mousemove and mouseout listeners into a [`ParticleSimulator`]. An
//! animation loop runs via `requestAnimationFrame` until the component is
//! removed, at which point every listener is deregistered with the exact
//! closure that was registered and the pending frame is cancelled.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::simulator::ParticleSimulator;
use super::theme::FieldStyle;
use crate::error::{PortfolioError, Result};

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Browser-side registrations held while the field is mounted.
struct MountedField {
	window: Window,
	simulator: Rc<RefCell<ParticleSimulator>>,
	on_resize: Closure<dyn FnMut()>,
	on_pointer_move: Closure<dyn FnMut(MouseEvent)>,
	on_pointer_out: Closure<dyn FnMut(MouseEvent)>,
	frame: FrameSlot,
	frame_handle: Rc<Cell<Option<i32>>>,
}

impl MountedField {
	fn mount(canvas: HtmlCanvasElement, style: FieldStyle) -> Result<Self> {
		let window = web_sys::window().ok_or(PortfolioError::NoWindow)?;
		let (w, h) = viewport_size(&window)?;
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(PortfolioError::NoCanvasContext)?
			.dyn_into()
			.map_err(|_| PortfolioError::NoCanvasContext)?;

		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		let simulator = Rc::new(RefCell::new(ParticleSimulator::new(
			style,
			SmallRng::seed_from_u64(seed),
			w,
			h,
		)));

		let (sim_resize, canvas_resize) = (simulator.clone(), canvas);
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			match viewport_size(&win) {
				Ok((nw, nh)) => {
					canvas_resize.set_width(nw as u32);
					canvas_resize.set_height(nh as u32);
					sim_resize.borrow_mut().resize(nw, nh);
				}
				Err(e) => warn!("particle field: could not read viewport size: {}", e),
			}
		});

		let sim_move = simulator.clone();
		let on_pointer_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			sim_move
				.borrow_mut()
				.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
		});

		// mouseout bubbles from every element; only leaving the window clears the pointer.
		let sim_out = simulator.clone();
		let on_pointer_out = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			if ev.related_target().is_none() {
				sim_out.borrow_mut().pointer_left();
			}
		});

		let frame: FrameSlot = Rc::new(RefCell::new(None));
		let frame_handle = Rc::new(Cell::new(None));
		let (sim_frame, frame_inner, handle_inner) =
			(simulator.clone(), frame.clone(), frame_handle.clone());
		*frame.borrow_mut() = Some(Closure::new(move || {
			handle_inner.set(None);
			let outcome = sim_frame.borrow_mut().animate(&mut ctx);
			if !outcome.reschedule() {
				return;
			}
			if let Some(ref cb) = *frame_inner.borrow() {
				handle_inner.set(request_frame(cb));
			}
		}));

		let mounted = Self {
			window,
			simulator,
			on_resize,
			on_pointer_move,
			on_pointer_out,
			frame,
			frame_handle,
		};
		if let Err(e) = mounted.listen() {
			mounted.teardown();
			return Err(e);
		}
		if let Some(ref cb) = *mounted.frame.borrow() {
			mounted.frame_handle.set(request_frame(cb));
		}
		Ok(mounted)
	}

	fn listen(&self) -> Result<()> {
		self.window.add_event_listener_with_callback(
			"resize",
			self.on_resize.as_ref().unchecked_ref(),
		)?;
		self.window.add_event_listener_with_callback(
			"mousemove",
			self.on_pointer_move.as_ref().unchecked_ref(),
		)?;
		self.window.add_event_listener_with_callback(
			"mouseout",
			self.on_pointer_out.as_ref().unchecked_ref(),
		)?;
		Ok(())
	}

	fn teardown(self) {
		self.simulator.borrow_mut().stop();

		let _ = self.window.remove_event_listener_with_callback(
			"resize",
			self.on_resize.as_ref().unchecked_ref(),
		);
		let _ = self.window.remove_event_listener_with_callback(
			"mousemove",
			self.on_pointer_move.as_ref().unchecked_ref(),
		);
		let _ = self.window.remove_event_listener_with_callback(
			"mouseout",
			self.on_pointer_out.as_ref().unchecked_ref(),
		);

		if let Some(handle) = self.frame_handle.take() {
			let _ = self.window.cancel_animation_frame(handle);
		}
		// The frame closure holds its own slot; emptying the slot breaks the cycle.
		self.frame.borrow_mut().take();
		info!("particle field: listeners released");
	}
}

fn viewport_size(window: &Window) -> Result<(f64, f64)> {
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	Ok((width, height))
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

/// Animated, pointer-reactive particle background.
///
/// Renders a canvas absolutely positioned over its containing block (which
/// should be `position: relative`), below foreground content. The canvas
/// ignores pointer events; the pointer is tracked on the window instead.
#[component]
pub fn ParticleCanvas(
	/// Tuning; defaults when omitted, and replaced by defaults when out of range
	#[prop(optional)]
	field_style: Option<FieldStyle>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field_style = field_style.unwrap_or_default().sanitized();
	let mounted: Rc<RefCell<Option<MountedField>>> = Rc::new(RefCell::new(None));
	let mounted_init = mounted.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if !field_style.enabled || mounted_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match MountedField::mount(canvas, field_style.clone()) {
			Ok(field) => *mounted_init.borrow_mut() = Some(field),
			Err(e) => warn!("particle field: not mounted: {}", e),
		}
	});

	let mounted_cleanup = SendWrapper::new(mounted);
	on_cleanup(move || {
		let mounted = mounted_cleanup.take();
		let field = mounted.borrow_mut().take();
		if let Some(field) = field {
			field.teardown();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			aria-hidden="true"
			style="position: absolute; top: 0; left: 0; z-index: 1; width: 100%; height: 100%; pointer-events: none;"
		/>
	}
}
