use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::placement::Rect;
use super::render;
use super::state::{GraphViewState, Release};
use super::types::GraphData;
use crate::config::GraphViewConfig;

type Shared<T> = Rc<RefCell<Option<T>>>;

#[derive(Clone, Copy, Debug)]
enum ViewAction {
	ZoomIn,
	ZoomOut,
	Fit,
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Client-space rectangle of node `idx`.
fn client_rect(canvas: &HtmlCanvasElement, state: &GraphViewState, idx: usize) -> Option<Rect> {
	let origin = canvas.get_bounding_client_rect();
	state
		.node_screen_rect(idx)
		.map(|r| r.translate(origin.left(), origin.top()))
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((800.0, 600.0))
}

fn set_cursor(canvas: &HtmlCanvasElement, state: &GraphViewState) {
	let cursor = if state.drag.active || state.pan.active {
		"grabbing"
	} else if state.hovered.is_some() {
		"pointer"
	} else {
		"grab"
	};
	let _ = web_sys::HtmlElement::style(canvas).set_property("cursor", cursor);
}

/// Relation graph drawn on a canvas filling its parent.
///
/// Clicking a node reports its id and client rectangle through
/// `on_node_click`; clicking the background calls `on_pane_click`. Whenever
/// the view moves while `selected` names a node, its new rectangle is
/// reported through `on_anchor_moved`.
#[component]
pub fn RelationGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(optional)] config: GraphViewConfig,
	#[prop(into)] selected: Signal<Option<String>>,
	on_node_click: Callback<(String, Rect)>,
	on_pane_click: Callback<()>,
	on_anchor_moved: Callback<(String, Rect)>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Shared<GraphViewState> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));

	let notify_anchor = {
		let state = state.clone();
		move || {
			let (Some(canvas), Some(id)) = (canvas_ref.get_untracked(), selected.get_untracked())
			else {
				return;
			};
			let anchor = state
				.borrow()
				.as_ref()
				.and_then(|s| client_rect(&canvas, s, s.node_index(&id)?));
			if let Some(anchor) = anchor {
				on_anchor_moved.run((id, anchor));
			}
		}
	};

	let (state_init, animate_init, resize_init, notify_init) = (
		state.clone(),
		animate.clone(),
		resize_cb.clone(),
		notify_anchor.clone(),
	);
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx,
			_ => {
				error!("relation graph: 2d context unavailable");
				return;
			}
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			error!("relation graph: context is not a CanvasRenderingContext2d");
			return;
		};
		let graph = data.get();
		debug!(
			"relation graph: {} nodes, {} edges on {}x{}",
			graph.nodes.len(),
			graph.edges.len(),
			w,
			h
		);
		*state_init.borrow_mut() = Some(GraphViewState::new(&graph, w, h, config));

		let (state_resize, canvas_resize, notify) =
			(state_init.clone(), canvas.clone(), notify_init.clone());
		*resize_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
			notify();
		}));
		let win = window();
		if let Some(ref cb) = *resize_init.borrow() {
			let _ = win.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, resize_drop, canvas_anim) = (
			state_init.clone(),
			animate_init.clone(),
			resize_init.clone(),
			canvas.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !canvas_anim.is_connected() {
				if let Some(cb) = resize_drop.borrow_mut().take() {
					let _ = window()
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				debug!("relation graph: canvas detached, animation stopped");
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = window().request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
			set_cursor(&canvas, s);
		}
	};

	let (state_mm, notify_mm) = (state.clone(), notify_anchor.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		let moved = match *state_mm.borrow_mut() {
			Some(ref mut s) => {
				let moved = s.pointer_move(x, y);
				set_cursor(&canvas, s);
				moved
			}
			None => false,
		};
		if moved {
			notify_mm();
		}
	};

	let (state_mu, notify_mu) = (state.clone(), notify_anchor.clone());
	let on_mouseup = move |_: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let release = match *state_mu.borrow_mut() {
			Some(ref mut s) => {
				let release = s.pointer_up();
				set_cursor(&canvas, s);
				release
			}
			None => return,
		};
		match release {
			Release::NodeClick(idx) => {
				let clicked = state_mu.borrow().as_ref().and_then(|s| {
					let id = s.nodes.get(idx)?.id.clone();
					Some((id, client_rect(&canvas, s, idx)?))
				});
				if let Some(clicked) = clicked {
					on_node_click.run(clicked);
				}
			}
			Release::PaneClick => on_pane_click.run(()),
			Release::Moved => notify_mu(),
			Release::Idle => {}
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.cancel_pointer();
			s.set_hover(None);
		}
	};

	let (state_wh, notify_wh) = (state.clone(), notify_anchor.clone());
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let step = s.config.zoom_step;
			s.zoom_at(x, y, if ev.delta_y() > 0.0 { 1.0 / step } else { step });
		}
		notify_wh();
	};

	let control = {
		let (state, notify) = (state.clone(), notify_anchor.clone());
		move |action: ViewAction| {
			if let Some(ref mut s) = *state.borrow_mut() {
				let step = s.config.zoom_step;
				match action {
					ViewAction::ZoomIn => s.zoom_by(step),
					ViewAction::ZoomOut => s.zoom_by(1.0 / step),
					ViewAction::Fit => s.fit_view(),
				}
			}
			notify();
		}
	};
	let (zoom_in, zoom_out, fit) = (control.clone(), control.clone(), control);

	view! {
		<div class="graph-frame">
			<canvas
				node_ref=canvas_ref
				class="relation-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<div class="graph-controls">
				<button title="放大" on:click=move |_| zoom_in(ViewAction::ZoomIn)>"+"</button>
				<button title="缩小" on:click=move |_| zoom_out(ViewAction::ZoomOut)>"−"</button>
				<button title="适应视图" on:click=move |_| fit(ViewAction::Fit)>"⤢"</button>
			</div>
		</div>
	}
}
