//! Load types, time series and load patterns

mod node_load;
mod pattern;
mod time_series;

pub use node_load::NodeLoad;
pub use pattern::LoadPattern;
pub use time_series::TimeSeries;
