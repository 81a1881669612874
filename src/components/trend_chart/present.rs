use crate::trends::ChartData;

use super::types::{
	Axis, ChartConfig, Dataset, Hsl, Legend, LegendAlign, LegendPosition, Title, Tooltip,
};

const SATURATION: u8 = 75;
const LIGHTNESS: u8 = 50;
const FILL_ALPHA: f64 = 0.1;
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.05)";
const FONT_FAMILY: &str = "'Helvetica Neue', 'Helvetica', 'Arial', sans-serif";

/// Fixed texts around the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PresenterConfig {
	pub title_lines: Vec<String>,
	pub y_axis_title: String,
	pub tooltip_title_prefix: String,
	pub unit: String,
}

impl Default for PresenterConfig {
	fn default() -> Self {
		Self {
			title_lines: vec![
				"Stack Overflow Technology Trends".into(),
				"Percentage Distribution by Year".into(),
			],
			y_axis_title: "Percentage of Questions (%)".into(),
			tooltip_title_prefix: "Year: ".into(),
			unit: "questions".into(),
		}
	}
}

/// Map aggregated series onto a line chart description.
pub fn present(data: &ChartData, config: &PresenterConfig) -> ChartConfig {
	let datasets = data
		.series
		.iter()
		.map(|series| {
			let color = Hsl::new(series.hue, SATURATION, LIGHTNESS);
			Dataset {
				label: series.tag.clone(),
				data: series.points.iter().map(|p| p.percentage).collect(),
				absolute_data: series.points.iter().map(|p| p.absolute).collect(),
				border_color: color,
				background_color: color.with_alpha(FILL_ALPHA),
				border_width: 3.0,
				tension: 0.4,
				fill: true,
				point_background_color: color,
				point_border_color: "#fff",
				point_border_width: 2.0,
				point_radius: 5.0,
				point_hover_radius: 8.0,
			}
		})
		.collect();

	ChartConfig {
		labels: data.period_labels.clone(),
		datasets,
		title: Title {
			lines: config.title_lines.clone(),
			font_size: 20.0,
			font_family: FONT_FAMILY,
			color: "#333",
			padding_top: 10.0,
			padding_bottom: 20.0,
		},
		legend: Legend {
			position: LegendPosition::Right,
			align: LegendAlign::Start,
			padding: 15.0,
			marker_size: 10.0,
		},
		tooltip: Tooltip {
			title_prefix: config.tooltip_title_prefix.clone(),
			unit: config.unit.clone(),
			background_color: "rgba(255, 255, 255, 0.95)",
			title_color: "#333",
			body_color: "#666",
			border_color: "#ddd",
			border_width: 1.0,
			padding: 12.0,
			corner_radius: 6.0,
		},
		x_axis: Axis {
			title: None,
			begin_at_zero: false,
			tick_suffix: "",
			grid_color: GRID_COLOR,
		},
		y_axis: Axis {
			title: Some(config.y_axis_title.clone()),
			begin_at_zero: true,
			tick_suffix: "%",
			grid_color: GRID_COLOR,
		},
	}
}
