use gloo_net::http::Request;

use crate::error::{Error, Result};

/// Download the dataset as text.
pub async fn fetch_dataset(url: &str) -> Result<String> {
	let response = Request::get(url).send().await?;
	// ensure we've got 2xx status
	if !response.ok() {
		return Err(Error::Status(response.status()));
	}
	let text = response.text().await?;
	if text.is_empty() {
		return Err(Error::EmptyPayload);
	}
	log::debug!("Fetched {} bytes from {url}", text.len());
	Ok(text)
}
