pub mod chart;
pub mod dto;

pub use chart::{combine_monthly_data, to_chart_points, ChartPoint};
pub use dto::DashboardSnapshot;
