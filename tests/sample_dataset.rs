use tag_trends::trends::{PERIODS, TrendConfig, aggregate, count_tags, top_tags};

const SAMPLE: &str = include_str!("../data/questions.csv");

#[test]
fn sample_counts() {
	let counts = count_tags(SAMPLE);
	assert_eq!(counts.len(), 12);
	assert_eq!(counts.values().sum::<u64>(), 214);
	assert_eq!(counts["Python"], 42);
	assert_eq!(counts["Rust"], 4);
}

#[test]
fn sample_top_ten() {
	let counts = count_tags(SAMPLE);
	let top: Vec<_> = top_tags(&counts, 10).into_iter().map(|(tag, _)| tag).collect();
	assert_eq!(
		top,
		[
			"Python",
			"JavaScript",
			"Java",
			"C#",
			"React",
			"Node.js",
			"SQL",
			"HTML",
			"TypeScript",
			"CSS"
		]
	);
}

#[test]
fn sample_series() {
	let data = aggregate(SAMPLE, &TrendConfig::default());
	assert_eq!(data.series.len(), 10);

	let python = &data.series[0];
	let absolutes: Vec<_> = python.points.iter().map(|p| p.absolute).collect();
	assert_eq!(absolutes, [8, 11, 13, 15]);

	let typescript = data.series.iter().find(|s| s.tag == "TypeScript").unwrap();
	assert!(typescript.points.iter().all(|p| p.absolute == 3));
	assert_eq!(typescript.hue, 160);
}

#[test]
fn sample_percentages_add_up() {
	let data = aggregate(SAMPLE, &TrendConfig::default());
	let tolerance = 0.1 * data.series.len() as f64;
	for period in 0..PERIODS {
		let sum: f64 = data.series.iter().map(|s| s.points[period].percentage).sum();
		assert!((sum - 100.0).abs() <= tolerance, "period {period}: {sum}");
	}
}

#[test]
fn sample_is_stable() {
	let config = TrendConfig::default();
	assert_eq!(aggregate(SAMPLE, &config), aggregate(SAMPLE, &config));
}
