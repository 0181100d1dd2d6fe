#[cfg(test)]
mod tests {
    use crate::model::monthly::MonthlyCount;
    use crate::repository::StatsRepository;
    use crate::usecase::dashboard::{growth_percent, previous_month_count, DashboardUseCase};
    use anyhow::Result;

    struct MockStatsRepo {
        total_cases: u64,
        total_reports: u64,
        cases_this_month: u64,
        reports_this_month: u64,
    }

    impl StatsRepository for MockStatsRepo {
        fn total_cases(&self) -> Result<u64> {
            Ok(self.total_cases)
        }
        fn total_reports(&self) -> Result<u64> {
            Ok(self.total_reports)
        }
        fn cases_this_month(&self) -> Result<u64> {
            Ok(self.cases_this_month)
        }
        fn reports_this_month(&self) -> Result<u64> {
            Ok(self.reports_this_month)
        }
    }

    struct UnavailableStatsRepo;

    impl StatsRepository for UnavailableStatsRepo {
        fn total_cases(&self) -> Result<u64> {
            Err(anyhow::anyhow!("backend unavailable"))
        }
        fn total_reports(&self) -> Result<u64> {
            Ok(0)
        }
        fn cases_this_month(&self) -> Result<u64> {
            Ok(0)
        }
        fn reports_this_month(&self) -> Result<u64> {
            Ok(0)
        }
    }

    #[test]
    fn test_snapshot_carries_backend_counters_through() {
        let repo = MockStatsRepo {
            total_cases: 120,
            total_reports: 48,
            cases_this_month: 20,
            reports_this_month: 8,
        };
        let snapshot = DashboardUseCase::new(&repo).snapshot().unwrap();

        assert_eq!(snapshot.total_cases, 120);
        assert_eq!(snapshot.total_reports, 48);
        assert_eq!(snapshot.cases_this_month, 20);
        assert_eq!(snapshot.reports_this_month, 8);
    }

    #[test]
    fn test_snapshot_series_sum_to_the_totals() {
        let repo = MockStatsRepo {
            total_cases: 333,
            total_reports: 77,
            cases_this_month: 41,
            reports_this_month: 0,
        };
        let snapshot = DashboardUseCase::new(&repo).snapshot().unwrap();

        let cases_sum: u64 = snapshot.cases_monthly.iter().map(|m| m.count).sum();
        let reports_sum: u64 = snapshot.reports_monthly.iter().map(|m| m.count).sum();
        assert_eq!(cases_sum, 333);
        assert_eq!(reports_sum, 77);

        assert_eq!(snapshot.cases_monthly.last().unwrap().count, 41);
        assert_eq!(snapshot.reports_monthly.last().unwrap().count, 0);
    }

    #[test]
    fn test_snapshot_combines_both_series_over_the_window() {
        let repo = MockStatsRepo {
            total_cases: 60,
            total_reports: 30,
            cases_this_month: 10,
            reports_this_month: 5,
        };
        let snapshot = DashboardUseCase::with_window(&repo, 4).snapshot().unwrap();

        assert_eq!(snapshot.cases_monthly.len(), 4);
        assert_eq!(snapshot.combined.len(), 4);
        assert_eq!(snapshot.cases_chart.len(), 4);
        assert_eq!(snapshot.reports_chart.len(), 4);

        // Both series cover the same trailing window, so every combined
        // record has a month drawn from that window.
        for record in &snapshot.combined {
            assert!(snapshot
                .cases_monthly
                .iter()
                .any(|m| m.month == record.month_number));
        }
    }

    #[test]
    fn test_growth_is_flat_when_everything_sits_in_the_current_month() {
        // total == this month leaves every estimated slot at zero, so the
        // previous-month divisor guard kicks in.
        let repo = MockStatsRepo {
            total_cases: 100,
            total_reports: 0,
            cases_this_month: 100,
            reports_this_month: 0,
        };
        let snapshot = DashboardUseCase::new(&repo).snapshot().unwrap();
        assert_eq!(snapshot.cases_growth, 0.0);
        assert_eq!(snapshot.reports_growth, 0.0);
    }

    #[test]
    fn test_snapshot_surfaces_repository_errors() {
        let repo = UnavailableStatsRepo;
        let err = DashboardUseCase::new(&repo).snapshot().unwrap_err();
        assert_eq!(err.to_string(), "backend unavailable");
    }

    #[test]
    fn test_growth_percent() {
        assert_eq!(growth_percent(15, 10), 50.0);
        assert_eq!(growth_percent(5, 10), -50.0);
        assert_eq!(growth_percent(10, 10), 0.0);
        assert_eq!(growth_percent(10, 0), 0.0);
    }

    #[test]
    fn test_previous_month_count_reads_the_penultimate_entry() {
        let series = vec![
            MonthlyCount::new(4, 7),
            MonthlyCount::new(5, 11),
            MonthlyCount::new(6, 3),
        ];
        assert_eq!(previous_month_count(&series), 11);
        assert_eq!(previous_month_count(&series[2..]), 0);
        assert_eq!(previous_month_count(&[]), 0);
    }
}
