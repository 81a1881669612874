use super::config::{PERIODS, Pattern, TrendConfig};
use super::parse::{count_tags, top_tags};

/// One period of a series.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodPoint {
	/// Synthetic question count for the period.
	pub absolute: u64,
	/// Share of the period's total across all series, rounded to one decimal.
	pub percentage: f64,
}

/// A top tag spread across the periods.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
	/// Tag label as found in the data.
	pub tag: String,
	/// Zero-based position in the top tag set.
	pub rank: usize,
	/// Raw occurrences in the dataset.
	pub count: u64,
	/// One point per period.
	pub points: [PeriodPoint; PERIODS],
	/// Hue in degrees, picked by rank.
	pub hue: u16,
}

/// Aggregated dataset, ready to be presented.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ChartData {
	/// Labels of the periods, in order.
	pub period_labels: Vec<String>,
	/// Series ordered by rank.
	pub series: Vec<ChartSeries>,
}

impl ChartData {
	/// Whether no tag made it into the chart.
	pub fn is_empty(&self) -> bool {
		self.series.is_empty()
	}
}

/// Turn raw CSV text into per-period series for the most frequent tags.
pub fn aggregate(raw: &str, config: &TrendConfig) -> ChartData {
	let counts = count_tags(raw);
	let top = top_tags(&counts, config.top_n);
	log::debug!(
		"{} distinct tags, keeping {}: {:?}",
		counts.len(),
		top.len(),
		top
	);

	let absolutes: Vec<[u64; PERIODS]> = top
		.iter()
		.map(|&(tag, count)| spread(count, config.pattern_for(tag)))
		.collect();

	let mut totals = [0u64; PERIODS];
	for row in &absolutes {
		for (total, absolute) in totals.iter_mut().zip(row) {
			*total += absolute;
		}
	}

	let series = top
		.iter()
		.zip(&absolutes)
		.enumerate()
		.map(|(rank, (&(tag, count), row))| ChartSeries {
			tag: tag.to_string(),
			rank,
			count,
			points: std::array::from_fn(|period| PeriodPoint {
				absolute: row[period],
				percentage: share(row[period], totals[period]),
			}),
			hue: config.hue_for(rank),
		})
		.collect();

	ChartData {
		period_labels: config.periods.to_vec(),
		series,
	}
}

/// `round(count * weight / 100)` for every period, halves rounded up.
fn spread(count: u64, pattern: Pattern) -> [u64; PERIODS] {
	pattern.map(|weight| (count * u64::from(weight) + 50) / 100)
}

fn share(absolute: u64, total: u64) -> f64 {
	// Every series rounds to zero in this period.
	if total == 0 {
		return 0.0;
	}
	round1(absolute as f64 / total as f64 * 100.0)
}

fn round1(value: f64) -> f64 {
	(value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rows(tags: &[(&str, usize)]) -> String {
		let mut raw = String::from("id,tag\n");
		let mut id = 0;
		for (tag, n) in tags {
			for _ in 0..*n {
				id += 1;
				raw.push_str(&format!("{id},{tag}\n"));
			}
		}
		raw
	}

	#[test]
	fn small_scenario() {
		let data = aggregate(
			"id,tag\n1,Python\n2,Python\n3,JavaScript\n",
			&TrendConfig::default(),
		);
		assert_eq!(data.period_labels, ["2022", "2023", "2024", "2025"]);
		let tags: Vec<_> = data.series.iter().map(|s| s.tag.as_str()).collect();
		assert_eq!(tags, ["Python", "JavaScript"]);
		assert_eq!(data.series[0].count, 2);
		// 20% of 2 rounds to 0
		assert_eq!(data.series[0].points[0].absolute, 0);
		// 35% of 2 is 0.7
		assert_eq!(data.series[0].points[3].absolute, 1);
	}

	#[test]
	fn zero_period_total_yields_zero_percentages() {
		let data = aggregate(
			"id,tag\n1,Python\n2,Python\n3,JavaScript\n",
			&TrendConfig::default(),
		);
		// Python 0 + JavaScript 0 in 2022
		for series in &data.series {
			assert_eq!(series.points[0].percentage, 0.0);
			assert!(series.points.iter().all(|p| p.percentage.is_finite()));
		}
	}

	#[test]
	fn header_only_input_is_empty() {
		let data = aggregate("id,tag\n", &TrendConfig::default());
		assert!(data.is_empty());
		assert_eq!(data.period_labels.len(), PERIODS);
	}

	#[test]
	fn percentages_sum_to_hundred() {
		let raw = rows(&[
			("Python", 120),
			("JavaScript", 97),
			("Java", 80),
			("C#", 61),
			("Rust", 40),
			("PHP", 33),
			("Go", 12),
		]);
		let data = aggregate(&raw, &TrendConfig::default());
		let tolerance = 0.1 * data.series.len() as f64;
		for period in 0..PERIODS {
			let sum: f64 = data.series.iter().map(|s| s.points[period].percentage).sum();
			assert!((sum - 100.0).abs() <= tolerance, "period {period}: {sum}");
		}
	}

	#[test]
	fn keeps_ten_most_frequent() {
		let tags: Vec<(String, usize)> = (0..15).map(|i| (format!("t{i}"), 20 + i)).collect();
		let tags: Vec<(&str, usize)> = tags.iter().map(|(t, n)| (t.as_str(), *n)).collect();
		let data = aggregate(&rows(&tags), &TrendConfig::default());
		assert_eq!(data.series.len(), 10);
		assert_eq!(data.series[0].tag, "t14");
		assert_eq!(data.series[9].tag, "t5");
		assert!(data.series.windows(2).all(|w| w[0].count >= w[1].count));
		let ranks: Vec<_> = data.series.iter().map(|s| s.rank).collect();
		assert_eq!(ranks, (0..10).collect::<Vec<_>>());
	}

	#[test]
	fn tabled_tag_follows_its_shape() {
		let data = aggregate(&rows(&[("React", 100)]), &TrendConfig::default());
		let absolutes: Vec<_> = data.series[0].points.iter().map(|p| p.absolute).collect();
		assert_eq!(absolutes, [15, 20, 27, 33]);

		let data = aggregate(&rows(&[("React", 200)]), &TrendConfig::default());
		let absolutes: Vec<_> = data.series[0].points.iter().map(|p| p.absolute).collect();
		assert_eq!(absolutes, [30, 40, 54, 66]);
	}

	#[test]
	fn untabled_tag_is_flat() {
		let data = aggregate(&rows(&[("Rust", 7)]), &TrendConfig::default());
		let points = &data.series[0].points;
		// 30% of 7 is 2.1
		assert!(points.iter().all(|p| p.absolute == 2));
		assert!(points.iter().all(|p| p.percentage == 100.0));
	}

	#[test]
	fn half_rounds_up() {
		// 30% of 5 is exactly 1.5
		assert_eq!(spread(5, [30, 30, 30, 30]), [2, 2, 2, 2]);
		assert_eq!(spread(3, [50, 49, 51, 0]), [2, 1, 2, 0]);
		// 90 * 0.35 is 31.499999... in floating point, exact value 31.5
		assert_eq!(spread(90, [20, 25, 30, 35]), [18, 23, 27, 32]);
	}

	#[test]
	fn injected_table_replaces_builtin() {
		let config = TrendConfig {
			patterns: [("Rust".to_string(), [10, 20, 30, 40])].into_iter().collect(),
			..TrendConfig::default()
		};
		let data = aggregate(&rows(&[("Rust", 10), ("Python", 10)]), &config);
		let rust: Vec<_> = data.series[0].points.iter().map(|p| p.absolute).collect();
		let python: Vec<_> = data.series[1].points.iter().map(|p| p.absolute).collect();
		assert_eq!(rust, [1, 2, 3, 4]);
		assert_eq!(python, [3, 3, 3, 3]);
	}

	#[test]
	fn hue_follows_rank() {
		let data = aggregate(&rows(&[("a", 3), ("b", 2), ("c", 1)]), &TrendConfig::default());
		let hues: Vec<_> = data.series.iter().map(|s| s.hue).collect();
		assert_eq!(hues, [0, 210, 120]);
	}

	#[test]
	fn aggregation_is_deterministic() {
		let raw = rows(&[("HTML", 13), ("CSS", 13), ("SQL", 9), ("Node.js", 21)]);
		let config = TrendConfig::default();
		assert_eq!(aggregate(&raw, &config), aggregate(&raw, &config));
	}
}
