use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::fetch_dataset;
use crate::components::trend_chart::{ChartConfig, PresenterConfig, TrendChart, present};
use crate::error::{Error, Result};
use crate::trends::{TrendConfig, aggregate};

pub const PAGE_TITLE: &str = "Stack Overflow Technology Trends";

const DEFAULT_DATA_URL: &str = "/questions.csv";

const BANNER_STYLE: &str = "color: #dc3545; text-align: center; padding: 15px; \
	font-family: 'Helvetica Neue', sans-serif; font-size: 14px; background: #fff3f3; \
	border-radius: 6px; margin: 15px;";

#[derive(Clone, Debug, PartialEq)]
enum Load {
	Pending,
	Ready(ChartConfig),
	Failed,
}

/// Aggregate a downloaded dataset and describe the chart for it.
fn build_chart(
	raw: &str,
	trends: &TrendConfig,
	presenter: &PresenterConfig,
) -> Result<ChartConfig> {
	if raw.is_empty() {
		return Err(Error::EmptyPayload);
	}
	let data = aggregate(raw, trends);
	if data.is_empty() {
		return Err(Error::NoTags);
	}
	Ok(present(&data, presenter))
}

async fn load_chart(
	url: &str,
	trends: &TrendConfig,
	presenter: &PresenterConfig,
) -> Result<ChartConfig> {
	let raw = fetch_dataset(url).await?;
	build_chart(&raw, trends, presenter)
}

#[component]
fn ErrorBanner() -> impl IntoView {
	view! {
		<div class="load-error" style=BANNER_STYLE>
			<strong>"Error:"</strong>
			" Unable to load the data. Please check that the CSV file exists and is accessible."
		</div>
	}
}

#[component]
fn InfoPanel() -> impl IntoView {
	view! {
		<div class="info-panel">
			<h3>"How to Use This Chart:"</h3>
			<ul>
				<li>"Hover over data points to see exact percentages and question counts"</li>
				<li>"Click on legend items to show/hide specific technologies"</li>
				<li>"Compare multiple technologies by looking at intersection points"</li>
				<li>"Use the percentage scale to understand relative popularity"</li>
			</ul>
		</div>
	}
}

/// Trend chart page: fetches the dataset once, then shows the chart or an
/// error banner.
#[component]
pub fn Home(
	#[prop(into, default = DEFAULT_DATA_URL.into())] data_url: String,
	#[prop(optional)] trends: TrendConfig,
	#[prop(optional)] presenter: PresenterConfig,
) -> impl IntoView {
	let load = RwSignal::new(Load::Pending);

	spawn_local(async move {
		match load_chart(&data_url, &trends, &presenter).await {
			Ok(config) => {
				log::info!("Loaded {data_url}: {} series", config.datasets.len());
				match serde_json::to_string(&config) {
					Ok(json) => log::debug!("Chart configuration: {json}"),
					Err(err) => log::warn!("Unable to serialize chart configuration: {err}"),
				}
				load.set(Load::Ready(config));
			}
			Err(err) => {
				log::error!("Unable to load {data_url}: {err}");
				load.set(Load::Failed);
			}
		}
	});

	view! {
		<div class="container">
			<h1 class="page-title">{PAGE_TITLE}</h1>
			<Show when=move || load.with(|l| matches!(l, Load::Failed))>
				<ErrorBanner />
			</Show>
			<div class="chart-container">
				{move || match load.get() {
					Load::Ready(config) => {
						view! { <TrendChart config=Signal::derive(move || config.clone()) /> }
							.into_any()
					}
					Load::Pending | Load::Failed => ().into_any(),
				}}
			</div>
			<InfoPanel />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn build(raw: &str) -> Result<ChartConfig> {
		build_chart(raw, &TrendConfig::default(), &PresenterConfig::default())
	}

	#[test]
	fn empty_payload_is_rejected() {
		assert_eq!(build(""), Err(Error::EmptyPayload));
	}

	#[test]
	fn header_only_has_no_tags() {
		assert_eq!(build("id,tag\n"), Err(Error::NoTags));
		assert_eq!(build("id,tag\n1,\n2,  \n"), Err(Error::NoTags));
	}

	#[test]
	fn dataset_becomes_chart() {
		let config = build("id,tag\n1,Python\n2,Python\n3,JavaScript\n").unwrap();
		assert_eq!(config.datasets.len(), 2);
		assert_eq!(config.datasets[0].label, "Python");
		assert!(config.datasets.iter().flat_map(|d| &d.data).all(|v| v.is_finite()));
	}

	#[test]
	fn every_failure_has_a_message() {
		for err in [
			Error::Fetch("network down".into()),
			Error::Status(404),
			Error::EmptyPayload,
			Error::NoTags,
		] {
			assert!(!err.to_string().is_empty());
		}
		assert_eq!(Error::Status(404).to_string(), "HTTP error! status: 404");
	}
}
