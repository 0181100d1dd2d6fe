pub mod config;
pub mod distribution;
pub mod model;
pub mod months;
pub mod repository;
pub mod service;
pub mod usecase;

pub use config::ClientConfig;
pub use distribution::{generate_monthly_distribution, DEFAULT_WINDOW_MONTHS};
pub use model::monthly::{ChartRecord, MonthlyCount};
pub use months::{find_month, month_name, percentage_share, short_month_name};
pub use repository::{HttpStatsRepository, StatsRepository};
pub use service::chart::{combine_monthly_data, to_chart_points, ChartPoint};
pub use service::dto::DashboardSnapshot;
pub use usecase::dashboard::DashboardUseCase;
