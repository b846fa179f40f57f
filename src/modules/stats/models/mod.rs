mod group_stats;
mod monthly_stats;

pub use group_stats::{ChannelStats, PropertyStats, StatsSummary};
pub use monthly_stats::MonthlyStats;
