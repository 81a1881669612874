//! Linear value scale with "nice" tick spacing.

/// Value range mapped onto a pixel span, ticks every `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	pub min: f64,
	pub max: f64,
	pub step: f64,
}

impl Default for LinearScale {
	fn default() -> Self {
		Self {
			min: 0.0,
			max: 1.0,
			step: 0.1,
		}
	}
}

impl LinearScale {
	/// Smallest scale covering `min..=max` with at most `max_ticks` ticks
	/// spaced by 1, 2 or 5 times a power of ten.
	pub fn nice(min: f64, max: f64, max_ticks: usize) -> Self {
		let max = if max > min { max } else { min + 1.0 };
		let spaces = max_ticks.max(2) - 1;
		let step = nice_step((max - min) / spaces as f64);
		Self {
			min: (min / step).floor() * step,
			max: (max / step).ceil() * step,
			step,
		}
	}

	pub fn ticks(&self) -> Vec<f64> {
		let count = ((self.max - self.min) / self.step).round() as usize;
		let decimals = decimals_of(self.step);
		(0..=count)
			.map(|i| round_to(self.min + i as f64 * self.step, decimals))
			.collect()
	}

	/// Pixel position of `value`, with `min` at `from` and `max` at `to`.
	pub fn project(&self, value: f64, from: f64, to: f64) -> f64 {
		from + (value - self.min) / (self.max - self.min) * (to - from)
	}
}

fn nice_step(raw: f64) -> f64 {
	let magnitude = 10f64.powi(raw.log10().floor() as i32);
	let nice = match raw / magnitude {
		f if f <= 1.0 => 1.0,
		f if f <= 2.0 => 2.0,
		f if f <= 5.0 => 5.0,
		_ => 10.0,
	};
	nice * magnitude
}

fn decimals_of(step: f64) -> i32 {
	(-step.log10().floor()).max(0.0) as i32
}

fn round_to(value: f64, decimals: i32) -> f64 {
	let factor = 10f64.powi(decimals);
	(value * factor).round() / factor
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rounds_up_to_whole_steps() {
		let scale = LinearScale::nice(0.0, 66.7, 11);
		assert_eq!(scale, LinearScale { min: 0.0, max: 70.0, step: 10.0 });
		assert_eq!(scale.ticks().len(), 8);
	}

	#[test]
	fn picks_five_steps() {
		let scale = LinearScale::nice(0.0, 35.0, 11);
		assert_eq!(scale.step, 5.0);
		assert_eq!(scale.max, 35.0);
		assert_eq!(scale.ticks(), [0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0]);
	}

	#[test]
	fn fractional_ticks_are_clean() {
		let scale = LinearScale::nice(0.0, 0.0, 6);
		assert_eq!(scale.max, 1.0);
		assert_eq!(scale.ticks(), [0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
	}

	#[test]
	fn projects_linearly() {
		let scale = LinearScale::nice(0.0, 100.0, 11);
		assert_eq!(scale.project(0.0, 400.0, 0.0), 400.0);
		assert_eq!(scale.project(100.0, 400.0, 0.0), 0.0);
		assert_eq!(scale.project(25.0, 400.0, 0.0), 300.0);
	}
}
