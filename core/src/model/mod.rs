pub mod monthly;

pub use monthly::{ChartRecord, MonthlyCount};
