pub mod http;
pub mod traits;

// Re-export
pub use http::HttpStatsRepository;
pub use traits::StatsRepository;
