pub mod rank_queries;
pub mod stats_queries;
