use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, CssStyleDeclaration, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::TrendChartState;
use super::types::ChartConfig;

const FRAME_SECONDS: f64 = 0.016;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

// The leptos prelude shadows `style()` on concrete element types.
fn css(canvas: &HtmlCanvasElement) -> CssStyleDeclaration {
	web_sys::HtmlElement::style(canvas)
}

fn cursor_for(over_legend: bool) -> &'static str {
	if over_legend { "pointer" } else { "default" }
}

fn pixel_ratio() -> f64 {
	web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
}

fn canvas_size(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	(
		width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0)
		}),
	)
}

/// Backing store in device pixels, CSS size in layout pixels.
fn size_canvas(canvas: &HtmlCanvasElement, w: f64, h: f64) {
	let ratio = pixel_ratio();
	canvas.set_width((w * ratio) as u32);
	canvas.set_height((h * ratio) as u32);
	let style = css(canvas);
	let _ = style.set_property("width", &format!("{w}px"));
	let _ = style.set_property("height", &format!("{h}px"));
}

/// Line chart drawn on a canvas, with hover tooltips and a clickable legend.
#[component]
pub fn TrendChart(
	#[prop(into)] config: Signal<ChartConfig>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<TrendChartState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			log::warn!("No window, chart not drawn");
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			log::warn!("Canvas 2d context unavailable, chart not drawn");
			return;
		};

		let (w, h) = canvas_size(&canvas, width, height);
		size_canvas(&canvas, w, h);
		*state_init.borrow_mut() = Some(TrendChartState::new(config.get(), w, h));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = canvas_size(&canvas_resize, width, height);
			size_canvas(&canvas_resize, nw, nh);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.tick(FRAME_SECONDS) {
					render::render(s, &ctx, pixel_ratio());
				}
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let position = move |ev: &MouseEvent| {
		let canvas = canvas_ref.get()?;
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = position(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let period = s.period_at_position(x, y);
			s.set_hover(period);
			let cursor = cursor_for(s.legend_item_at(x, y).is_some());
			if let Some(canvas) = canvas_ref.get() {
				let _ = css(&canvas).set_property("cursor", cursor);
			}
		}
	};

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = position(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_click.borrow_mut() {
			if let Some(dataset) = s.legend_item_at(x, y) {
				s.toggle(dataset);
			}
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="trend-chart-canvas"
			on:mousemove=on_mousemove
			on:click=on_click
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}
