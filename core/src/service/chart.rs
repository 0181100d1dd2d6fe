use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::monthly::{ChartRecord, MonthlyCount};
use crate::months::{month_name, short_month_name};

/// One bar/slice of a single-series chart, labeled with the short month
/// name so narrow axes stay readable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub month: String,
    pub month_number: u32,
    pub count: u64,
}

pub fn to_chart_points(series: &[MonthlyCount]) -> Vec<ChartPoint> {
    series
        .iter()
        .map(|entry| ChartPoint {
            month: short_month_name(entry.month).to_string(),
            month_number: entry.month,
            count: entry.count,
        })
        .collect()
}

/// Merge a cases series and a reports series into one record per distinct
/// month, ascending by month number. A month present in only one series
/// keeps a 0 on the other side; a duplicated month within one series is
/// last-write-wins.
pub fn combine_monthly_data(cases: &[MonthlyCount], reports: &[MonthlyCount]) -> Vec<ChartRecord> {
    let mut merged: BTreeMap<u32, ChartRecord> = BTreeMap::new();

    for entry in cases {
        merged.insert(
            entry.month,
            ChartRecord {
                month: month_name(entry.month).to_string(),
                month_number: entry.month,
                cases: entry.count,
                reports: 0,
            },
        );
    }

    for entry in reports {
        merged
            .entry(entry.month)
            .and_modify(|record| record.reports = entry.count)
            .or_insert_with(|| ChartRecord {
                month: month_name(entry.month).to_string(),
                month_number: entry.month,
                cases: 0,
                reports: entry.count,
            });
    }

    merged.into_values().collect()
}
