use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Number of periods every tag is spread across.
pub const PERIODS: usize = 4;

/// Per-period weights, in percent of a tag's total count.
pub type Pattern = [u32; PERIODS];

/// Weights used for tags that have no entry in the trend table.
pub const DEFAULT_PATTERN: Pattern = [30, 30, 30, 30];

const DEFAULT_PERIODS: [&str; PERIODS] = ["2022", "2023", "2024", "2025"];

const DEFAULT_TOP_N: usize = 10;

const DEFAULT_PATTERNS: &[(&str, Pattern)] = &[
	("Python", [20, 25, 30, 35]),
	("JavaScript", [30, 27, 25, 28]),
	("Java", [33, 28, 23, 20]),
	("C#", [17, 23, 30, 25]),
	("React", [15, 20, 27, 33]),
	("Node.js", [20, 25, 23, 27]),
	("HTML", [27, 23, 20, 17]),
	("CSS", [25, 23, 21, 20]),
	("PHP", [30, 25, 20, 17]),
	("SQL", [19, 23, 27, 21]),
];

// red, blue, green, orange, purple, cyan, pink, light green, turquoise, gold
const DEFAULT_HUES: [u16; 10] = [0, 210, 120, 45, 280, 180, 330, 90, 160, 30];

/// Everything the aggregator needs besides the raw text.
///
/// Missing fields fall back to the built-in values when deserialized, so a
/// caller can override just the trend table:
///
/// ```
/// # use tag_trends::trends::TrendConfig;
/// let config: TrendConfig =
/// 	serde_json::from_str(r#"{ "patterns": { "Rust": [10, 20, 30, 40] } }"#).unwrap();
/// assert_eq!(config.pattern_for("Rust"), [10, 20, 30, 40]);
/// assert_eq!(config.top_n, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
	/// Labels of the periods along the x axis.
	pub periods: [String; PERIODS],
	/// How many of the most frequent tags become series.
	pub top_n: usize,
	/// Trend table, keyed by the exact tag label.
	pub patterns: HashMap<String, Pattern>,
	/// Weights for tags absent from `patterns`.
	pub default_pattern: Pattern,
	/// Hue (in degrees) per rank.
	pub hues: Vec<u16>,
}

impl Default for TrendConfig {
	fn default() -> Self {
		Self {
			periods: DEFAULT_PERIODS.map(String::from),
			top_n: DEFAULT_TOP_N,
			patterns: DEFAULT_PATTERNS
				.iter()
				.map(|(tag, pattern)| ((*tag).to_string(), *pattern))
				.collect(),
			default_pattern: DEFAULT_PATTERN,
			hues: DEFAULT_HUES.to_vec(),
		}
	}
}

impl TrendConfig {
	/// Weights for `tag`, matched case-sensitively.
	pub fn pattern_for(&self, tag: &str) -> Pattern {
		self.patterns
			.get(tag)
			.copied()
			.unwrap_or(self.default_pattern)
	}

	/// Hue for the series at `rank`, wrapping around the hue table.
	pub fn hue_for(&self, rank: usize) -> u16 {
		if self.hues.is_empty() {
			return 0;
		}
		self.hues[rank % self.hues.len()]
	}
}
