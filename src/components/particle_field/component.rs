//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a full-viewport canvas, wires up pointer tracking
//! and window resizing, and drives the simulation with a `requestAnimationFrame`
//! loop that runs one step and one render pass per display refresh.
//!
//! The dark-mode flag is read fresh from the signal on every frame rather
//! than captured by the animation closure, so a theme change takes effect on
//! the next frame without tearing the loop down.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::field::ParticleField;
use super::frame::FrameLoop;
use super::render;
use super::theme::Palette;

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

fn cancel_frame(handle: i32) {
	if let Some(window) = web_sys::window() {
		let _ = window.cancel_animation_frame(handle);
	}
}

/// Renders the ambient particle field on a fixed, full-viewport canvas.
///
/// Pass the host's dark-mode flag via the reactive `dark` signal; an optional
/// [`FieldConfig`] overrides the stock simulation parameters. The canvas sits
/// behind the host content and tracks the pointer for the attraction effect.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(into)] dark: Signal<bool>,
	#[prop(default = None)] config: Option<FieldConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let frame_loop: Rc<RefCell<FrameLoop>> = Rc::new(RefCell::new(FrameLoop::new()));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (field_init, loop_init, animate_init, resize_cb_init) = (
		field.clone(),
		frame_loop.clone(),
		animate.clone(),
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
		let Some((w, h)) = viewport_size(&window) else {
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			return;
		};

		let seed = js_sys::Date::now() as u64;
		*field_init.borrow_mut() =
			Some(ParticleField::new(config.clone().unwrap_or_default(), w, h, seed));

		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let Some((nw, nh)) = viewport_size(&win) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (field_anim, loop_anim, animate_inner) = (
			field_init.clone(),
			loop_init.clone(),
			animate_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.step();
				let palette = Palette::for_dark(dark.get_untracked());
				render::render(f, &ctx, &palette);
			}
			let mut fl = loop_anim.borrow_mut();
			if fl.is_running() {
				if let Some(ref cb) = *animate_inner.borrow() {
					fl.schedule(|| request_frame(cb));
				}
			}
		}));

		// A rerun of this effect must not leave a second loop behind.
		let mut fl = loop_init.borrow_mut();
		fl.stop(cancel_frame);
		if let Some(ref cb) = *animate_init.borrow() {
			fl.schedule(|| request_frame(cb));
		}
	});

	let cleanup_state = leptos::__reexports::send_wrapper::SendWrapper::new((
		frame_loop.clone(),
		animate.clone(),
		resize_cb.clone(),
	));
	on_cleanup(move || {
		let (loop_cleanup, animate_cleanup, resize_cleanup) = cleanup_state.take();
		loop_cleanup.borrow_mut().stop(cancel_frame);
		let resize_closure = resize_cleanup.borrow_mut().take();
		if let (Some(window), Some(cb)) = (web_sys::window(), resize_closure) {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		*animate_cleanup.borrow_mut() = None;
	});

	let field_mm = field.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		if let Some(ref mut f) = *field_mm.borrow_mut() {
			f.pointer_moved(ev.client_x() as f64 - rect.left(), ev.client_y() as f64 - rect.top());
		}
	};

	let field_ml = field.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut f) = *field_ml.borrow_mut() {
			f.pointer_left();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 0; background-color: transparent;"
		/>
	}
}
