pub mod stats_aggregator;

pub use stats_aggregator::StatsAggregator;
