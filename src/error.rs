use thiserror::Error;

/// Reasons the chart could not be built.
///
/// They all end up as the same banner on the page, the message only goes to
/// the log.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
	#[error("{0}")]
	Fetch(String),

	#[error("HTTP error! status: {0}")]
	Status(u16),

	#[error("CSV data is empty")]
	EmptyPayload,

	#[error("CSV data contains no tagged records")]
	NoTags,
}

impl From<gloo_net::Error> for Error {
	fn from(err: gloo_net::Error) -> Self {
		Self::Fetch(format!("{err}"))
	}
}

pub type Result<T> = std::result::Result<T, Error>;
