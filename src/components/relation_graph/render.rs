use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::placement::Rect;
use super::state::{GraphViewState, NodeView};
use super::style::{Fill, NodeStyle};

const BACKGROUND: &str = "rgba(0, 0, 0, 0.05)";
const GRID_DOT: &str = "#333";
const EDGE_COLOR: &str = "#b1b1b7";
const MINIMAP_WIDTH: f64 = 200.0;
const MINIMAP_HEIGHT: f64 = 150.0;
const MINIMAP_MARGIN: f64 = 15.0;

pub fn render(state: &GraphViewState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_grid(state, ctx);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();

	if state.config.minimap {
		draw_minimap(state, ctx);
	}
}

fn draw_grid(state: &GraphViewState, ctx: &CanvasRenderingContext2d) {
	let gap = state.config.grid_gap * state.transform.k;
	if gap < 4.0 {
		return;
	}
	let radius = (state.transform.k * 0.5).max(0.5);
	let (ox, oy) = (
		state.transform.x.rem_euclid(gap),
		state.transform.y.rem_euclid(gap),
	);

	ctx.set_fill_style_str(GRID_DOT);
	ctx.begin_path();
	let mut y = oy;
	while y < state.height {
		let mut x = ox;
		while x < state.width {
			ctx.move_to(x + radius, y);
			let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
			x += gap;
		}
		y += gap;
	}
	ctx.fill();
}

fn draw_edges(state: &GraphViewState, ctx: &CanvasRenderingContext2d) {
	let (dash, gap) = (5.0, 5.0);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);

	ctx.set_stroke_style_str(EDGE_COLOR);
	for edge in &state.edges {
		let (Some(source), Some(target)) = (state.nodes.get(edge.source), state.nodes.get(edge.target))
		else {
			continue;
		};
		let ((x1, y1), (x2, y2)) = (source.center(), target.center());
		let highlighted = state.is_hovered(edge.source) || state.is_hovered(edge.target);

		ctx.set_line_width(if highlighted { 2.0 } else { 1.0 });
		if edge.animated {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		} else {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}

		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &GraphViewState, ctx: &CanvasRenderingContext2d) {
	for (idx, node) in state.nodes.iter().enumerate() {
		draw_node(node, &node.style(state.is_hovered(idx)), ctx);
	}
}

fn draw_node(node: &NodeView, style: &NodeStyle, ctx: &CanvasRenderingContext2d) {
	let (cx, cy) = node.center();
	let (hw, hh) = (style.width / 2.0, style.height / 2.0);

	ctx.save();
	let _ = ctx.translate(cx, cy);
	let _ = ctx.rotate(style.rotation_deg.to_radians());

	ctx.set_shadow_color(style.glow_color);
	ctx.set_shadow_blur(style.glow_blur);
	box_path(ctx, -hw, -hh, style.width, style.height, style.corner_radius);
	#[allow(deprecated)]
	ctx.set_fill_style(&fill_gradient(ctx, style));
	ctx.fill();

	ctx.set_shadow_blur(0.0);
	ctx.set_shadow_color("transparent");
	ctx.set_stroke_style_str(style.border);
	ctx.set_line_width(2.0);
	ctx.stroke();

	ctx.set_fill_style_str("white");
	ctx.set_font(&format!("{} {}px sans-serif", style.font_weight, style.font_px));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let lines: Vec<&str> = node.label.lines().collect();
	let line_px = style.font_px * style.line_height;
	let first = -line_px * (lines.len() as f64 - 1.0) / 2.0;
	for (i, line) in lines.iter().enumerate() {
		let _ = ctx.fill_text(line, 0.0, first + i as f64 * line_px);
	}
	ctx.restore();
}

fn fill_gradient(ctx: &CanvasRenderingContext2d, style: &NodeStyle) -> CanvasGradient {
	let (hw, hh) = (style.width / 2.0, style.height / 2.0);
	let linear = || ctx.create_linear_gradient(-hw, -hh, hw, hh);
	let (gradient, from, to) = match style.fill {
		Fill::Radial { from, to } => {
			let (fx, fy) = (-hw + style.width * 0.3, -hh + style.height * 0.3);
			let reach = hw + (fx.hypot(fy)).max(1.0);
			let gradient = ctx
				.create_radial_gradient(fx, fy, 0.0, fx, fy, reach)
				.unwrap_or_else(|_| linear());
			(gradient, from, to)
		}
		Fill::Linear { from, to } => (linear(), from, to),
	};
	let _ = gradient.add_color_stop(0.0, from);
	let _ = gradient.add_color_stop(1.0, to);
	gradient
}

/// Rounded box path; a radius of half the side traces a circle.
fn box_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	if r * 2.0 >= w.min(h) {
		let _ = ctx.arc(x + w / 2.0, y + h / 2.0, w.min(h) / 2.0, 0.0, 2.0 * PI);
		return;
	}
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}

/// Screen-space frame of the minimap and the graph-to-minimap mapping.
struct MinimapFrame {
	frame: Rect,
	scale: f64,
	origin_x: f64,
	origin_y: f64,
}

impl MinimapFrame {
	fn new(state: &GraphViewState, world: Rect) -> Self {
		let frame = Rect::from_origin(
			state.width - MINIMAP_WIDTH - MINIMAP_MARGIN,
			state.height - MINIMAP_HEIGHT - MINIMAP_MARGIN,
			MINIMAP_WIDTH,
			MINIMAP_HEIGHT,
		);
		let scale = (MINIMAP_WIDTH / world.width().max(1.0)).min(MINIMAP_HEIGHT / world.height().max(1.0));
		Self {
			origin_x: frame.left + (MINIMAP_WIDTH - world.width() * scale) / 2.0 - world.left * scale,
			origin_y: frame.top + (MINIMAP_HEIGHT - world.height() * scale) / 2.0 - world.top * scale,
			frame,
			scale,
		}
	}

	fn map(&self, r: Rect) -> Rect {
		Rect {
			left: self.origin_x + r.left * self.scale,
			top: self.origin_y + r.top * self.scale,
			right: self.origin_x + r.right * self.scale,
			bottom: self.origin_y + r.bottom * self.scale,
		}
	}
}

fn draw_minimap(state: &GraphViewState, ctx: &CanvasRenderingContext2d) {
	let Some(bounds) = state.graph_bounds() else {
		return;
	};
	let (vl, vt) = state.screen_to_graph(0.0, 0.0);
	let (vr, vb) = state.screen_to_graph(state.width, state.height);
	let visible = Rect {
		left: vl,
		top: vt,
		right: vr,
		bottom: vb,
	};
	let world = Rect {
		left: bounds.left.min(visible.left),
		top: bounds.top.min(visible.top),
		right: bounds.right.max(visible.right),
		bottom: bounds.bottom.max(visible.bottom),
	};
	let map = MinimapFrame::new(state, world);
	let f = map.frame;

	ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
	ctx.fill_rect(f.left, f.top, f.width(), f.height());
	ctx.set_fill_style_str("rgba(0, 0, 0, 0.1)");
	ctx.fill_rect(f.left, f.top, f.width(), f.height());

	let view = map.map(visible);
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
	ctx.fill_rect(view.left, view.top, view.width(), view.height());

	for node in &state.nodes {
		let r = map.map(node.bounds());
		ctx.set_fill_style_str(node.category.swatch());
		ctx.fill_rect(r.left, r.top, r.width(), r.height());
	}

	ctx.set_stroke_style_str("rgba(0, 0, 0, 0.2)");
	ctx.set_line_width(1.0);
	ctx.stroke_rect(f.left, f.top, f.width(), f.height());
}
