use anyhow::Result;

/// The four counters the backend exposes. Everything the dashboard shows is
/// derived from these.
pub trait StatsRepository {
    fn total_cases(&self) -> Result<u64>;
    fn total_reports(&self) -> Result<u64>;
    fn cases_this_month(&self) -> Result<u64>;
    fn reports_this_month(&self) -> Result<u64>;
}
