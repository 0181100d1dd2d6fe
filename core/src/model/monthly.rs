use serde::{Deserialize, Serialize};

/// One month of case or report activity. `month` is the calendar month
/// number (1 = January). For synthesized series only the current month
/// carries a verified count; the rest are estimated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonthlyCount {
    pub month: u32,
    pub count: u64,
}

impl MonthlyCount {
    pub fn new(month: u32, count: u64) -> Self {
        Self { month, count }
    }
}

/// Pre-joined cases/reports row for comparison charts. A month that
/// appears in only one input series keeps a 0 on the other side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartRecord {
    pub month: String,
    pub month_number: u32,
    pub cases: u64,
    pub reports: u64,
}
