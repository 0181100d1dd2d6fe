use casewatch_core::{percentage_share, DashboardSnapshot};
use tabled::settings::Style;
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Cases")]
    cases: u64,
    #[tabled(rename = "Cases %")]
    cases_share: String,
    #[tabled(rename = "Reports")]
    reports: u64,
    #[tabled(rename = "Reports %")]
    reports_share: String,
}

pub fn show_overview(snapshot: &DashboardSnapshot) {
    println!(
        "Cases:   {:>6} total, {:>5} this month ({:+.1}% vs last month)",
        snapshot.total_cases, snapshot.cases_this_month, snapshot.cases_growth
    );
    println!(
        "Reports: {:>6} total, {:>5} this month ({:+.1}% vs last month)",
        snapshot.total_reports, snapshot.reports_this_month, snapshot.reports_growth
    );
    println!();

    if snapshot.combined.is_empty() {
        println!("No monthly data available.");
        return;
    }

    let rows: Vec<MonthRow> = snapshot
        .combined
        .iter()
        .map(|record| MonthRow {
            month: record.month.clone(),
            cases: record.cases,
            cases_share: format!(
                "{:.1}%",
                percentage_share(record.cases, snapshot.total_cases)
            ),
            reports: record.reports,
            reports_share: format!(
                "{:.1}%",
                percentage_share(record.reports, snapshot.total_reports)
            ),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!();
    println!("Monthly figures outside the current month are estimates, not measurements.");
}
