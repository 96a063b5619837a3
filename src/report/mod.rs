pub mod charts;
pub mod table;

pub use charts::{bar_chart, donut_chart};
pub use table::stat_table;
