use serde::{Deserialize, Serialize};

use crate::model::monthly::{ChartRecord, MonthlyCount};
use crate::service::chart::ChartPoint;

/// Everything a dashboard render needs, built fresh on each fetch cycle.
/// The monthly series are estimates (see `generate_monthly_distribution`);
/// only the totals and this-month counts come straight from the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub total_cases: u64,
    pub total_reports: u64,
    pub cases_this_month: u64,
    pub reports_this_month: u64,

    pub cases_monthly: Vec<MonthlyCount>,
    pub reports_monthly: Vec<MonthlyCount>,

    // Chart-ready views of the series above.
    pub cases_chart: Vec<ChartPoint>,
    pub reports_chart: Vec<ChartPoint>,
    pub combined: Vec<ChartRecord>,

    // Month-over-month growth in percent, against the estimated previous
    // month. 0.0 when the previous month is empty.
    pub cases_growth: f64,
    pub reports_growth: f64,
}
