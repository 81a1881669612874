mod component;
mod present;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::TrendChart;
pub use present::{PresenterConfig, present};
pub use types::ChartConfig;
