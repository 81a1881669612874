use std::fmt;

use serde::{Serialize, Serializer};

/// An `hsl()`/`hsla()` CSS color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
	pub hue: u16,
	pub saturation: u8,
	pub lightness: u8,
	pub alpha: Option<f64>,
}

impl Hsl {
	pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
		Self {
			hue,
			saturation,
			lightness,
			alpha: None,
		}
	}

	pub const fn with_alpha(self, alpha: f64) -> Self {
		Self {
			alpha: Some(alpha),
			..self
		}
	}
}

impl fmt::Display for Hsl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.alpha {
			Some(alpha) => write!(
				f,
				"hsla({}, {}%, {}%, {})",
				self.hue, self.saturation, self.lightness, alpha
			),
			None => write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness),
		}
	}
}

impl Serialize for Hsl {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
	pub label: String,
	/// Plotted values, in percent.
	pub data: Vec<f64>,
	/// Question counts, only shown in the tooltip.
	pub absolute_data: Vec<u64>,
	pub border_color: Hsl,
	pub background_color: Hsl,
	pub border_width: f64,
	/// Bezier smoothing between points, 0 draws straight segments.
	pub tension: f64,
	pub fill: bool,
	pub point_background_color: Hsl,
	pub point_border_color: &'static str,
	pub point_border_width: f64,
	pub point_radius: f64,
	pub point_hover_radius: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
	pub lines: Vec<String>,
	pub font_size: f64,
	pub font_family: &'static str,
	pub color: &'static str,
	pub padding_top: f64,
	pub padding_bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
	Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendAlign {
	Start,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
	pub position: LegendPosition,
	pub align: LegendAlign,
	pub padding: f64,
	/// Diameter of the circle marker in front of each label.
	pub marker_size: f64,
}

/// Tooltip styling plus the formatter for its contents.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
	pub title_prefix: String,
	/// Noun the absolute values count, e.g. "questions".
	pub unit: String,
	pub background_color: &'static str,
	pub title_color: &'static str,
	pub body_color: &'static str,
	pub border_color: &'static str,
	pub border_width: f64,
	pub padding: f64,
	pub corner_radius: f64,
}

impl Tooltip {
	/// Heading shown above the entries, e.g. `Year: 2024`.
	pub fn title(&self, period: &str) -> String {
		format!("{}{period}", self.title_prefix)
	}

	/// The two lines describing `dataset` at `index`.
	pub fn entry(&self, dataset: &Dataset, index: usize) -> [String; 2] {
		let value = dataset.data.get(index).copied().unwrap_or_default();
		let absolute = dataset.absolute_data.get(index).copied().unwrap_or_default();
		[
			format!("{}:", dataset.label),
			format!("  {}% ({absolute} {})", format_number(value), self.unit),
		]
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
	pub title: Option<String>,
	pub begin_at_zero: bool,
	pub tick_suffix: &'static str,
	pub grid_color: &'static str,
}

impl Axis {
	pub fn tick_label(&self, value: f64) -> String {
		format!("{}{}", format_number(value), self.tick_suffix)
	}
}

/// Everything the canvas renderer needs to draw the chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
	/// Category labels along the x axis.
	pub labels: Vec<String>,
	pub datasets: Vec<Dataset>,
	pub title: Title,
	pub legend: Legend,
	pub tooltip: Tooltip,
	pub x_axis: Axis,
	pub y_axis: Axis,
}

/// Shortest decimal form, `35.0` prints as `35`.
fn format_number(value: f64) -> String {
	format!("{value}")
}
