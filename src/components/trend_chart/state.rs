use super::scale::LinearScale;
use super::types::ChartConfig;

pub const PADDING: f64 = 20.0;
pub const FONT_SIZE: f64 = 12.0;
pub const Y_TITLE_WIDTH: f64 = 24.0;
pub const Y_TICK_WIDTH: f64 = 44.0;
pub const X_TICK_HEIGHT: f64 = 28.0;
pub const LEGEND_GAP: f64 = 6.0;
const TITLE_LINE_HEIGHT: f64 = 1.2;
const Y_MAX_TICKS: usize = 11;
// rough glyph width of the 12px legend font
const CHAR_WIDTH: f64 = 7.0;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Area {
	pub left: f64,
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
}

impl Area {
	pub fn width(&self) -> f64 {
		self.right - self.left
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
	}

	fn grow(&self, by: f64) -> Self {
		Self {
			left: self.left - by,
			top: self.top - by,
			right: self.right + by,
			bottom: self.bottom + by,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
	pub dataset: usize,
	pub area: Area,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub period: Option<usize>,
	pub highlight_t: f64,
	pub prev_period: Option<usize>,
}

/// Text of the tooltip for one period.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
	pub title: String,
	/// Dataset index and its two lines.
	pub entries: Vec<(usize, [String; 2])>,
}

pub struct TrendChartState {
	pub config: ChartConfig,
	pub hidden: Vec<bool>,
	pub hover: HoverState,
	pub scale: LinearScale,
	pub plot: Area,
	pub legend: Vec<LegendItem>,
	pub width: f64,
	pub height: f64,
	pub dirty: bool,
}

impl TrendChartState {
	pub fn new(config: ChartConfig, width: f64, height: f64) -> Self {
		let hidden = vec![false; config.datasets.len()];
		let mut state = Self {
			config,
			hidden,
			hover: HoverState::default(),
			scale: LinearScale::default(),
			plot: Area::default(),
			legend: Vec::new(),
			width,
			height,
			dirty: true,
		};
		state.layout();
		state
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.layout();
	}

	fn layout(&mut self) {
		let legend = &self.config.legend;
		let label_width = self
			.config
			.datasets
			.iter()
			.map(|d| d.label.chars().count() as f64 * CHAR_WIDTH)
			.fold(0.0, f64::max);
		let item_width = legend.marker_size + LEGEND_GAP + label_width;
		let legend_width = if self.config.datasets.is_empty() {
			0.0
		} else {
			item_width + 2.0 * legend.padding
		};

		let title = &self.config.title;
		let title_height = title.padding_top
			+ title.lines.len() as f64 * title.font_size * TITLE_LINE_HEIGHT
			+ title.padding_bottom;

		self.plot = Area {
			left: PADDING + Y_TITLE_WIDTH + Y_TICK_WIDTH,
			top: title_height,
			right: (self.width - PADDING - legend_width).max(PADDING),
			bottom: (self.height - PADDING - X_TICK_HEIGHT).max(title_height),
		};

		let left = self.plot.right + legend.padding;
		self.legend = (0..self.config.datasets.len())
			.map(|dataset| {
				let top = self.plot.top + dataset as f64 * (FONT_SIZE + legend.padding);
				LegendItem {
					dataset,
					area: Area {
						left,
						top,
						right: left + item_width,
						bottom: top + FONT_SIZE,
					},
				}
			})
			.collect();

		self.rescale();
	}

	fn rescale(&mut self) {
		let (min, max) = self
			.visible()
			.flat_map(|i| self.config.datasets[i].data.iter().copied())
			.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
				(lo.min(v), hi.max(v))
			});
		let (min, max) = if min.is_finite() { (min, max) } else { (0.0, 0.0) };
		let min = if self.config.y_axis.begin_at_zero {
			min.min(0.0)
		} else {
			min
		};
		self.scale = LinearScale::nice(min, max, Y_MAX_TICKS);
		self.dirty = true;
	}

	/// Indices of the datasets currently drawn.
	pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
		(0..self.config.datasets.len()).filter(|&i| !self.hidden[i])
	}

	pub fn is_visible(&self, dataset: usize) -> bool {
		!self.hidden.get(dataset).copied().unwrap_or(true)
	}

	/// Show or hide a dataset, as a click on its legend entry does.
	pub fn toggle(&mut self, dataset: usize) {
		if let Some(hidden) = self.hidden.get_mut(dataset) {
			*hidden = !*hidden;
			log::debug!(
				"{} {}",
				if *hidden { "Hiding" } else { "Showing" },
				self.config.datasets[dataset].label
			);
			self.rescale();
		}
	}

	pub fn period_x(&self, period: usize) -> f64 {
		let n = self.config.labels.len();
		if n <= 1 {
			return self.plot.left + self.plot.width() / 2.0;
		}
		self.plot.left + period as f64 * self.plot.width() / (n - 1) as f64
	}

	pub fn value_y(&self, value: f64) -> f64 {
		self.scale.project(value, self.plot.bottom, self.plot.top)
	}

	/// Period closest to `x` when the pointer is over the plot.
	pub fn period_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let slack = self
			.config
			.datasets
			.first()
			.map_or(0.0, |d| d.point_hover_radius);
		if !self.plot.grow(slack).contains(x, y) {
			return None;
		}
		(0..self.config.labels.len()).min_by(|&a, &b| {
			let (da, db) = ((self.period_x(a) - x).abs(), (self.period_x(b) - x).abs());
			da.total_cmp(&db)
		})
	}

	pub fn legend_item_at(&self, x: f64, y: f64) -> Option<usize> {
		self.legend
			.iter()
			.find(|item| item.area.contains(x, y))
			.map(|item| item.dataset)
	}

	pub fn set_hover(&mut self, period: Option<usize>) {
		if self.hover.period == period {
			return;
		}
		if self.hover.period.is_some() && period.is_none() {
			self.hover.prev_period = self.hover.period.take();
		} else {
			self.hover.prev_period = None;
		}
		self.hover.period = period;
		self.dirty = true;
	}

	/// Period whose tooltip is on screen, including while it fades out.
	pub fn shown_period(&self) -> Option<usize> {
		self.hover.period.or(self.hover.prev_period)
	}

	pub fn tooltip(&self, period: usize) -> Option<TooltipContent> {
		let label = self.config.labels.get(period)?;
		let tooltip = &self.config.tooltip;
		let entries: Vec<_> = self
			.visible()
			.map(|i| (i, tooltip.entry(&self.config.datasets[i], period)))
			.collect();
		if entries.is_empty() {
			return None;
		}
		Some(TooltipContent {
			title: tooltip.title(label),
			entries,
		})
	}

	/// Advance the hover fade, returns whether a redraw is needed.
	pub fn tick(&mut self, dt: f64) -> bool {
		let (target, speed) = if self.hover.period.is_some() {
			(1.0, 12.0)
		} else {
			(0.0, 9.0)
		};
		let before = self.hover.highlight_t;
		self.hover.highlight_t += (target - before) * (speed * dt).min(1.0);
		if (self.hover.highlight_t - target).abs() < 0.01 {
			self.hover.highlight_t = target;
			if target == 0.0 {
				self.hover.prev_period = None;
			}
		}
		let animating = self.hover.highlight_t != before;
		std::mem::take(&mut self.dirty) || animating
	}
}
