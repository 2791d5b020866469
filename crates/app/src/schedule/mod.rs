pub mod actions;
pub mod calendar;
pub mod heatmap;

pub use heatmap::MonthHeatmap;
