use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{Area, FONT_SIZE, LEGEND_GAP, PADDING, TrendChartState, Y_TITLE_WIDTH};
use super::types::Dataset;

const BACKGROUND: &str = "#fff";
const TICK_COLOR: &str = "#666";
const AXIS_TITLE_COLOR: &str = "#333";
const LINE_HEIGHT: f64 = FONT_SIZE * 1.2;
const TOOLTIP_OFFSET: f64 = 10.0;

type Point = (f64, f64);

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &TrendChartState, ctx: &CanvasRenderingContext2d, pixel_ratio: f64) {
	let _ = ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0);
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_title(state, ctx);
	draw_axes(state, ctx);
	draw_datasets(state, ctx);
	draw_legend(state, ctx);
	draw_tooltip(state, ctx);
}

fn font(size: f64, bold: bool, family: &str) -> String {
	format!("{}{size}px {family}", if bold { "bold " } else { "" })
}

fn draw_title(state: &TrendChartState, ctx: &CanvasRenderingContext2d) {
	let title = &state.config.title;
	ctx.set_fill_style_str(title.color);
	ctx.set_font(&font(title.font_size, true, title.font_family));
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	let line_height = title.font_size * 1.2;
	let x = (state.plot.left + state.plot.right) / 2.0;
	for (i, line) in title.lines.iter().enumerate() {
		let _ = ctx.fill_text(line, x, title.padding_top + i as f64 * line_height);
	}
}

fn draw_axes(state: &TrendChartState, ctx: &CanvasRenderingContext2d) {
	let (plot, config) = (&state.plot, &state.config);
	let family = config.title.font_family;
	ctx.set_line_width(1.0);
	ctx.set_font(&font(FONT_SIZE, false, family));

	// horizontal grid + y ticks
	ctx.set_stroke_style_str(config.y_axis.grid_color);
	ctx.set_fill_style_str(TICK_COLOR);
	ctx.set_text_align("right");
	ctx.set_text_baseline("middle");
	for tick in state.scale.ticks() {
		let y = state.value_y(tick).round() + 0.5;
		ctx.begin_path();
		ctx.move_to(plot.left, y);
		ctx.line_to(plot.right, y);
		ctx.stroke();
		let _ = ctx.fill_text(&config.y_axis.tick_label(tick), plot.left - 8.0, y);
	}

	// vertical grid + x labels
	ctx.set_stroke_style_str(config.x_axis.grid_color);
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	for (i, label) in config.labels.iter().enumerate() {
		let x = state.period_x(i).round() + 0.5;
		ctx.begin_path();
		ctx.move_to(x, plot.top);
		ctx.line_to(x, plot.bottom);
		ctx.stroke();
		let _ = ctx.fill_text(label, x, plot.bottom + 8.0);
	}

	if let Some(title) = &config.y_axis.title {
		ctx.save();
		let _ = ctx.translate(PADDING + Y_TITLE_WIDTH / 2.0, (plot.top + plot.bottom) / 2.0);
		let _ = ctx.rotate(-PI / 2.0);
		ctx.set_fill_style_str(AXIS_TITLE_COLOR);
		ctx.set_font(&font(14.0, true, family));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(title, 0.0, 0.0);
		ctx.restore();
	}
}

/// Bezier control points around each point, before and after it.
fn spline_controls(points: &[Point], tension: f64, bounds: &Area) -> Vec<(Point, Point)> {
	let clamp = |(x, y): Point| (x.clamp(bounds.left, bounds.right), y.clamp(bounds.top, bounds.bottom));
	(0..points.len())
		.map(|i| {
			let current = points[i];
			let prev = points[i.saturating_sub(1)];
			let next = points[(i + 1).min(points.len() - 1)];
			let d_prev = (current.0 - prev.0).hypot(current.1 - prev.1);
			let d_next = (next.0 - current.0).hypot(next.1 - current.1);
			let total = d_prev + d_next;
			let (s_prev, s_next) = if total > 0.0 {
				(d_prev / total, d_next / total)
			} else {
				(0.0, 0.0)
			};
			let (dx, dy) = (next.0 - prev.0, next.1 - prev.1);
			let (fa, fb) = (tension * s_prev, tension * s_next);
			(
				clamp((current.0 - fa * dx, current.1 - fa * dy)),
				clamp((current.0 + fb * dx, current.1 + fb * dy)),
			)
		})
		.collect()
}

fn trace_line(ctx: &CanvasRenderingContext2d, points: &[Point], controls: &[(Point, Point)]) {
	let Some(&(x0, y0)) = points.first() else {
		return;
	};
	ctx.move_to(x0, y0);
	for i in 1..points.len() {
		let ((_, c1), (c2, _)) = (controls[i - 1], controls[i]);
		let (x, y) = points[i];
		ctx.bezier_curve_to(c1.0, c1.1, c2.0, c2.1, x, y);
	}
}

fn dataset_points(state: &TrendChartState, dataset: &Dataset) -> Vec<Point> {
	dataset
		.data
		.iter()
		.enumerate()
		.map(|(i, &v)| (state.period_x(i), state.value_y(v)))
		.collect()
}

fn draw_datasets(state: &TrendChartState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	let shown = state.shown_period();

	if let Some(period) = shown {
		if t > 0.01 {
			let x = state.period_x(period);
			ctx.set_stroke_style_str(&format!("rgba(0, 0, 0, {})", 0.2 * t));
			ctx.set_line_width(1.0);
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(4.0),
				&JsValue::from_f64(4.0),
			));
			ctx.begin_path();
			ctx.move_to(x, state.plot.top);
			ctx.line_to(x, state.plot.bottom);
			ctx.stroke();
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
	}

	let baseline = state.value_y(state.scale.min.max(0.0));
	for i in state.visible() {
		let dataset = &state.config.datasets[i];
		let points = dataset_points(state, dataset);
		let (Some(first), Some(last)) = (points.first(), points.last()) else {
			continue;
		};
		let controls = spline_controls(&points, dataset.tension, &state.plot);

		if dataset.fill {
			ctx.begin_path();
			trace_line(ctx, &points, &controls);
			ctx.line_to(last.0, baseline);
			ctx.line_to(first.0, baseline);
			ctx.close_path();
			ctx.set_fill_style_str(&dataset.background_color.to_string());
			ctx.fill();
		}

		ctx.begin_path();
		trace_line(ctx, &points, &controls);
		ctx.set_stroke_style_str(&dataset.border_color.to_string());
		ctx.set_line_width(dataset.border_width);
		ctx.set_line_join("round");
		ctx.stroke();
	}

	for i in state.visible() {
		let dataset = &state.config.datasets[i];
		let point_fill = dataset.point_background_color.to_string();
		for (period, (x, y)) in dataset_points(state, dataset).into_iter().enumerate() {
			let radius = if shown == Some(period) {
				dataset.point_radius + (dataset.point_hover_radius - dataset.point_radius) * t
			} else {
				dataset.point_radius
			};
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(&point_fill);
			ctx.fill();
			ctx.set_stroke_style_str(dataset.point_border_color);
			ctx.set_line_width(dataset.point_border_width);
			ctx.stroke();
		}
	}
}

fn draw_legend(state: &TrendChartState, ctx: &CanvasRenderingContext2d) {
	let marker = state.config.legend.marker_size;
	ctx.set_font(&font(FONT_SIZE, false, state.config.title.font_family));
	ctx.set_text_align("left");
	ctx.set_text_baseline("middle");

	for item in &state.legend {
		let dataset = &state.config.datasets[item.dataset];
		let visible = state.is_visible(item.dataset);
		let cy = (item.area.top + item.area.bottom) / 2.0;
		let color = dataset.border_color.to_string();

		ctx.set_global_alpha(if visible { 1.0 } else { 0.5 });
		ctx.begin_path();
		let _ = ctx.arc(item.area.left + marker / 2.0, cy, marker / 2.0, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&color);
		ctx.fill();

		let text_x = item.area.left + marker + LEGEND_GAP;
		ctx.set_fill_style_str(TICK_COLOR);
		let _ = ctx.fill_text(&dataset.label, text_x, cy);

		if !visible {
			let width = ctx
				.measure_text(&dataset.label)
				.map(|m| m.width())
				.unwrap_or(item.area.right - text_x);
			ctx.set_stroke_style_str(TICK_COLOR);
			ctx.set_line_width(1.0);
			ctx.begin_path();
			ctx.move_to(text_x, cy);
			ctx.line_to(text_x + width, cy);
			ctx.stroke();
		}
		ctx.set_global_alpha(1.0);
	}
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, area: &Area, radius: f64) {
	let Area {
		left,
		top,
		right,
		bottom,
	} = *area;
	ctx.begin_path();
	ctx.move_to(left + radius, top);
	let _ = ctx.arc_to(right, top, right, bottom, radius);
	let _ = ctx.arc_to(right, bottom, left, bottom, radius);
	let _ = ctx.arc_to(left, bottom, left, top, radius);
	let _ = ctx.arc_to(left, top, right, top, radius);
	ctx.close_path();
}

fn draw_tooltip(state: &TrendChartState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	if t < 0.01 {
		return;
	}
	let Some(period) = state.shown_period() else {
		return;
	};
	let Some(content) = state.tooltip(period) else {
		return;
	};
	let style = &state.config.tooltip;
	let family = state.config.title.font_family;
	let (title_font, body_font) = (font(FONT_SIZE, true, family), font(FONT_SIZE, false, family));
	let swatch = FONT_SIZE;

	let measure = |text: &str| ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0);
	ctx.set_font(&title_font);
	let mut width = measure(&content.title);
	ctx.set_font(&body_font);
	for (_, lines) in &content.entries {
		for line in lines {
			width = width.max(swatch + LEGEND_GAP + measure(line));
		}
	}
	let lines = content.entries.len() * 2;
	let height = LINE_HEIGHT + 6.0 + lines as f64 * LINE_HEIGHT;

	// Prefer the right of the hovered period, flip when it would overflow.
	let anchor = state.period_x(period);
	let box_width = width + 2.0 * style.padding;
	let box_height = height + 2.0 * style.padding;
	let left = if anchor + TOOLTIP_OFFSET + box_width <= state.width {
		anchor + TOOLTIP_OFFSET
	} else {
		(anchor - TOOLTIP_OFFSET - box_width).max(0.0)
	};
	let top = (state.plot.top + 4.0).min((state.height - box_height).max(0.0));
	let area = Area {
		left,
		top,
		right: left + box_width,
		bottom: top + box_height,
	};

	ctx.set_global_alpha(t);
	rounded_rect(ctx, &area, style.corner_radius);
	ctx.set_fill_style_str(style.background_color);
	ctx.fill();
	ctx.set_stroke_style_str(style.border_color);
	ctx.set_line_width(style.border_width);
	ctx.stroke();

	let x = area.left + style.padding;
	let mut y = area.top + style.padding;
	ctx.set_text_align("left");
	ctx.set_text_baseline("top");
	ctx.set_font(&title_font);
	ctx.set_fill_style_str(style.title_color);
	let _ = ctx.fill_text(&content.title, x, y);
	y += LINE_HEIGHT + 6.0;

	ctx.set_font(&body_font);
	for (dataset, lines) in &content.entries {
		let color = state.config.datasets[*dataset].border_color.to_string();
		ctx.set_fill_style_str(&color);
		ctx.fill_rect(x, y + 1.0, swatch - 2.0, swatch - 2.0);
		ctx.set_fill_style_str(style.body_color);
		for line in lines {
			let _ = ctx.fill_text(line, x + swatch + LEGEND_GAP, y);
			y += LINE_HEIGHT;
		}
	}
	ctx.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
	use super::*;

	const BOUNDS: Area = Area {
		left: 0.0,
		top: 0.0,
		right: 300.0,
		bottom: 100.0,
	};

	#[test]
	fn straight_line_without_tension() {
		let points = [(0.0, 50.0), (100.0, 20.0), (200.0, 80.0)];
		let controls = spline_controls(&points, 0.0, &BOUNDS);
		for (point, (before, after)) in points.iter().zip(&controls) {
			assert_eq!(point, before);
			assert_eq!(point, after);
		}
	}

	#[test]
	fn controls_follow_neighbours() {
		let points = [(0.0, 50.0), (100.0, 50.0), (200.0, 50.0)];
		let controls = spline_controls(&points, 0.4, &BOUNDS);
		// middle point: half of 0.4 * 200 on each side
		assert_eq!(controls[1], ((60.0, 50.0), (140.0, 50.0)));
		// ends only reach towards their single neighbour
		assert_eq!(controls[0], ((0.0, 50.0), (40.0, 50.0)));
	}

	#[test]
	fn controls_stay_inside_plot() {
		let points = [(0.0, 100.0), (100.0, 0.0), (200.0, 100.0)];
		let controls = spline_controls(&points, 0.4, &BOUNDS);
		for ((x1, y1), (x2, y2)) in controls {
			assert!(BOUNDS.contains(x1, y1));
			assert!(BOUNDS.contains(x2, y2));
		}
	}

	#[test]
	fn single_point_has_no_curve() {
		let controls = spline_controls(&[(10.0, 10.0)], 0.4, &BOUNDS);
		assert_eq!(controls, [((10.0, 10.0), (10.0, 10.0))]);
	}
}
