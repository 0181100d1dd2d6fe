use anyhow::Result;

use crate::distribution::{generate_monthly_distribution, DEFAULT_WINDOW_MONTHS};
use crate::model::monthly::MonthlyCount;
use crate::repository::StatsRepository;
use crate::service::chart::{combine_monthly_data, to_chart_points};
use crate::service::dto::DashboardSnapshot;

pub struct DashboardUseCase<'a, R: StatsRepository> {
    repo: &'a R,
    window: usize,
}

impl<'a, R: StatsRepository> DashboardUseCase<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self {
            repo,
            window: DEFAULT_WINDOW_MONTHS,
        }
    }

    pub fn with_window(repo: &'a R, window: usize) -> Self {
        Self { repo, window }
    }

    /// Fetch the four counters and build the full chart-ready snapshot:
    /// estimated monthly series for both entities, their chart views, the
    /// combined comparison series, and month-over-month growth.
    pub fn snapshot(&self) -> Result<DashboardSnapshot> {
        let total_cases = self.repo.total_cases()?;
        let total_reports = self.repo.total_reports()?;
        let cases_this_month = self.repo.cases_this_month()?;
        let reports_this_month = self.repo.reports_this_month()?;

        let cases_monthly =
            generate_monthly_distribution(total_cases, cases_this_month, self.window)?;
        let reports_monthly =
            generate_monthly_distribution(total_reports, reports_this_month, self.window)?;

        let combined = combine_monthly_data(&cases_monthly, &reports_monthly);
        let cases_growth = growth_percent(cases_this_month, previous_month_count(&cases_monthly));
        let reports_growth =
            growth_percent(reports_this_month, previous_month_count(&reports_monthly));

        Ok(DashboardSnapshot {
            total_cases,
            total_reports,
            cases_this_month,
            reports_this_month,
            cases_chart: to_chart_points(&cases_monthly),
            reports_chart: to_chart_points(&reports_monthly),
            cases_monthly,
            reports_monthly,
            combined,
            cases_growth,
            reports_growth,
        })
    }
}

/// Growth of `current` against `previous` in percent. An empty previous
/// month would divide by zero, so it reads as flat.
pub fn growth_percent(current: u64, previous: u64) -> f64 {
    if previous == 0 {
        0.0
    } else {
        (current as f64 - previous as f64) / previous as f64 * 100.0
    }
}

/// The series is ordered oldest to newest, so the previous month is the
/// next-to-last entry.
pub fn previous_month_count(series: &[MonthlyCount]) -> u64 {
    if series.len() < 2 {
        0
    } else {
        series[series.len() - 2].count
    }
}
