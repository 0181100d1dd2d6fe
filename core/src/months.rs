use crate::model::monthly::MonthlyCount;

/// Full English name for a calendar month number, or "Unknown" when the
/// number falls outside 1-12. Never panics.
pub fn month_name(month_number: u32) -> &'static str {
    match month_number {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Three-letter abbreviation, with the same "Unknown" sentinel as
/// `month_name`.
pub fn short_month_name(month_number: u32) -> &'static str {
    match month_number {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "Unknown",
    }
}

pub fn find_month(series: &[MonthlyCount], month_number: u32) -> Option<&MonthlyCount> {
    series.iter().find(|entry| entry.month == month_number)
}

/// Share of `total` represented by `count`, in percent. A zero total has no
/// meaningful share, so it yields 0 rather than NaN.
pub fn percentage_share(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
